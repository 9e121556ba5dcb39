use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GermplasmList {
    pub id: i32,
    pub crop_name: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub list_type: String,
    #[serde(default)]
    pub program_uuid: Option<Uuid>,
    pub owner_id: i32,
    #[serde(default)]
    pub locked: bool,
    pub creation_date: NaiveDate,
    #[serde(default)]
    pub entry_count: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchType {
    Exactly,
    #[serde(rename = "STARTSWITH")]
    StartsWith,
    #[default]
    Contains,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFilter {
    pub value: String,
    #[serde(default)]
    pub match_type: MatchType,
}

impl TextFilter {
    /// Case-insensitive comparison.
    pub fn matches(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        let value = self.value.to_lowercase();
        match self.match_type {
            MatchType::Exactly => text == value,
            MatchType::StartsWith => text.starts_with(&value),
            MatchType::Contains => text.contains(&value),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GermplasmListSearchRequest {
    pub program_uuid: Option<Uuid>,
    pub list_name_filter: Option<TextFilter>,
    pub list_types: Vec<String>,
    pub owner_id: Option<i32>,
    pub locked: Option<bool>,
}

impl GermplasmListSearchRequest {
    pub fn matches(&self, list: &GermplasmList) -> bool {
        if self.program_uuid.is_some() && list.program_uuid != self.program_uuid {
            return false;
        }
        if let Some(filter) = &self.list_name_filter {
            if !filter.matches(&list.name) {
                return false;
            }
        }
        if !self.list_types.is_empty() && !self.list_types.contains(&list.list_type) {
            return false;
        }
        self.owner_id.map_or(true, |o| list.owner_id == o)
            && self.locked.map_or(true, |l| list.locked == l)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GermplasmListRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(length(max = 255))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 10))]
    pub list_type: String,
    pub program_uuid: Option<Uuid>,
    pub owner_id: i32,
}
