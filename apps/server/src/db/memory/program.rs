use super::InMemoryMiddleware;
use crate::{
    models::{ProgramFilter, Project},
    services::ProgramService,
    Result,
};
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
impl ProgramService for InMemoryMiddleware {
    async fn list_projects(&self, filter: &ProgramFilter) -> Result<Vec<Project>> {
        let tables = self.read()?;
        Ok(tables
            .projects
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    async fn get_project(&self, program_uuid: Uuid) -> Result<Option<Project>> {
        let tables = self.read()?;
        Ok(tables
            .projects
            .iter()
            .find(|p| p.unique_id == program_uuid)
            .cloned())
    }
}
