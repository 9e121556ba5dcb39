use breeding_validator::DataType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodSummary {
    pub id: i32,
    pub crop_name: String,
    pub name: String,
    #[serde(default)]
    pub definition: String,
    pub date_created: DateTime<Utc>,
    #[serde(default)]
    pub date_last_modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MethodRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 1024))]
    pub definition: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySummary {
    pub id: i32,
    pub crop_name: String,
    pub name: String,
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub crop_ontology_id: Option<String>,
    #[serde(default)]
    pub classes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 1024))]
    pub definition: String,
    pub crop_ontology_id: Option<String>,
    #[validate(length(min = 1))]
    pub classes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTypeSummary {
    pub id: i32,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub system_data_type: bool,
}

impl DataTypeSummary {
    /// Data types every crop ontology provides.
    pub fn builtin() -> Vec<Self> {
        [
            (1110, "Numeric", DataType::Numeric),
            (1117, "Date", DataType::Date),
            (1120, "Character", DataType::Character),
            (1130, "Categorical", DataType::Categorical),
        ]
        .into_iter()
        .map(|(id, name, data_type)| Self {
            id,
            name: name.to_string(),
            code: data_type.code().to_string(),
            system_data_type: false,
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_data_types_cover_validator_kinds() {
        let codes: Vec<_> = DataTypeSummary::builtin()
            .into_iter()
            .map(|d| d.code)
            .collect();
        assert_eq!(codes, vec!["N", "D", "T", "C"]);
    }

    #[test]
    fn property_needs_a_class() {
        let request = PropertyRequest {
            name: "Plant height".to_string(),
            definition: String::new(),
            crop_ontology_id: None,
            classes: vec![],
        };
        assert!(request.validate().is_err());
    }
}
