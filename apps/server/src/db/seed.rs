//! Fixture format for the in-memory middleware.

use crate::{
    models::{
        DataTypeSummary, GermplasmList, Location, MethodSummary, Project, PropertySummary, Role,
        StudyInstance, StudyTransaction,
    },
    Error, Result,
};
use serde::Deserialize;
use std::path::Path;
use uuid::Uuid;

/// Contents of the seed file. Every array is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeedData {
    pub projects: Vec<Project>,
    pub locations: Vec<Location>,
    pub favorite_locations: Vec<FavoriteLocation>,
    pub roles: Vec<Role>,
    pub germplasm_lists: Vec<GermplasmList>,
    pub study_instances: Vec<StudyInstance>,
    pub study_transactions: Vec<StudyTransaction>,
    pub methods: Vec<MethodSummary>,
    pub properties: Vec<PropertySummary>,
    pub data_types: Vec<DataTypeSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteLocation {
    pub crop_name: String,
    pub program_uuid: Uuid,
    pub location_id: i32,
}

impl SeedData {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::Internal(format!("Failed to read seed file {}: {}", path.display(), e))
        })?;
        Self::from_json(&raw)
            .map_err(|e| Error::Internal(format!("Invalid seed file {}: {}", path.display(), e)))
    }

    pub fn from_json(raw: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
