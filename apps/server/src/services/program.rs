use crate::{
    models::{ProgramFilter, Project},
    Result,
};
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait ProgramService: Send + Sync {
    /// Projects visible to the caller, in middleware order.
    async fn list_projects(&self, filter: &ProgramFilter) -> Result<Vec<Project>>;

    async fn get_project(&self, program_uuid: Uuid) -> Result<Option<Project>>;
}
