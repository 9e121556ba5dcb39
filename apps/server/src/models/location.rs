use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: i32,
    pub crop_name: String,
    pub name: String,
    pub abbreviation: String,
    pub location_type_id: i32,
    #[serde(default)]
    pub country_id: Option<i32>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub altitude: Option<f64>,
    /// `None` for crop-wide locations.
    #[serde(default)]
    pub program_uuid: Option<Uuid>,
}

/// Location as returned to clients, with the caller's favorite flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDto {
    #[serde(flatten)]
    pub location: Location,
    pub favorite: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationSearchRequest {
    /// Program scope. Crop-wide locations are always visible; program
    /// locations only to their own program.
    pub program_uuid: Option<Uuid>,
    pub location_ids: Vec<i32>,
    /// Case-insensitive substring match.
    pub location_name: Option<String>,
    pub location_abbreviations: Vec<String>,
    pub location_type_ids: Vec<i32>,
    pub favorites_only: bool,
}

impl LocationSearchRequest {
    pub fn matches(&self, location: &Location) -> bool {
        if let Some(owner) = location.program_uuid {
            if self.program_uuid != Some(owner) {
                return false;
            }
        }
        if !self.location_ids.is_empty() && !self.location_ids.contains(&location.id) {
            return false;
        }
        if let Some(name) = &self.location_name {
            if !location
                .name
                .to_lowercase()
                .contains(&name.to_lowercase())
            {
                return false;
            }
        }
        if !self.location_abbreviations.is_empty()
            && !self.location_abbreviations.contains(&location.abbreviation)
        {
            return false;
        }
        if !self.location_type_ids.is_empty()
            && !self.location_type_ids.contains(&location.location_type_id)
        {
            return false;
        }
        true
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LocationRequest {
    #[validate(length(min = 1, max = 60))]
    pub name: String,
    #[validate(length(min = 1, max = 12))]
    pub abbreviation: String,
    #[validate(range(min = 1))]
    pub location_type_id: i32,
    pub country_id: Option<i32>,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
    pub altitude: Option<f64>,
    pub program_uuid: Option<Uuid>,
}
