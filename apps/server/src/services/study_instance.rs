use crate::{
    models::{Page, StudyInstance, StudyInstanceSearch},
    Result,
};
use async_trait::async_trait;

/// Largest number of instances generated by one request.
pub const MAX_INSTANCES_PER_REQUEST: u32 = 1000;

#[async_trait]
pub trait StudyInstanceService: Send + Sync {
    async fn count_instances(
        &self,
        crop: &str,
        study_id: i32,
        search: &StudyInstanceSearch,
    ) -> Result<u64>;

    async fn search_instances(
        &self,
        crop: &str,
        study_id: i32,
        search: &StudyInstanceSearch,
        page: Page,
    ) -> Result<Vec<StudyInstance>>;

    async fn get_instance(
        &self,
        crop: &str,
        study_id: i32,
        instance_id: i32,
    ) -> Result<Option<StudyInstance>>;

    /// Appends `count` instances numbered after the highest existing one.
    async fn create_instances(
        &self,
        crop: &str,
        study_id: i32,
        count: u32,
    ) -> Result<Vec<StudyInstance>>;

    /// All-or-nothing. Instances holding measurements are never deleted.
    async fn delete_instances(&self, crop: &str, study_id: i32, instance_ids: &[i32])
        -> Result<()>;
}
