use serde::{Deserialize, Serialize};
use validator::Validate;

/// Scope a role applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleType {
    Instance = 1,
    Crop = 2,
    Program = 3,
}

impl RoleType {
    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            1 => Some(Self::Instance),
            2 => Some(Self::Crop),
            3 => Some(Self::Program),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub role_type_id: i32,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default = "default_true")]
    pub assignable: bool,
    #[serde(default)]
    pub permission_ids: Vec<i32>,
}

fn default_true() -> bool {
    true
}

/// Query parameters of `GET /roles`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSearchRequest {
    /// Case-insensitive substring match.
    pub name: Option<String>,
    pub role_type_id: Option<i32>,
    pub active: Option<bool>,
    pub assignable: Option<bool>,
}

impl RoleSearchRequest {
    pub fn matches(&self, role: &Role) -> bool {
        self.name
            .as_deref()
            .map_or(true, |n| role.name.to_lowercase().contains(&n.to_lowercase()))
            && self.role_type_id.map_or(true, |t| role.role_type_id == t)
            && self.active.map_or(true, |a| role.active == a)
            && self.assignable.map_or(true, |a| role.assignable == a)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RoleRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 255))]
    pub description: Option<String>,
    #[validate(range(min = 1, max = 3))]
    pub role_type_id: i32,
    #[serde(default)]
    pub permission_ids: Vec<i32>,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default = "default_true")]
    pub assignable: bool,
}
