use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A breeding program as stored by the middleware.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub project_id: i64,
    pub unique_id: Uuid,
    pub project_name: String,
    pub crop_type: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub user_id: Option<i32>,
}

/// Read-only program projection returned by the program endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramSummary {
    pub program_uuid: Uuid,
    pub program_name: String,
    pub crop_name: String,
    pub start_date: Option<NaiveDate>,
}

impl From<&Project> for ProgramSummary {
    fn from(project: &Project) -> Self {
        Self {
            program_uuid: project.unique_id,
            program_name: project.project_name.clone(),
            crop_name: project.crop_type.clone(),
            start_date: project.start_date,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramFilter {
    pub crop_name: Option<String>,
}

impl ProgramFilter {
    pub fn matches(&self, project: &Project) -> bool {
        self.crop_name
            .as_deref()
            .map_or(true, |crop| project.crop_type.eq_ignore_ascii_case(crop))
    }
}
