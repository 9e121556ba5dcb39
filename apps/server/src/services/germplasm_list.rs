use crate::{
    models::{GermplasmList, GermplasmListRequest, GermplasmListSearchRequest, Page},
    Result,
};
use async_trait::async_trait;

#[async_trait]
pub trait GermplasmListService: Send + Sync {
    async fn count_lists(&self, crop: &str, request: &GermplasmListSearchRequest) -> Result<u64>;

    async fn search_lists(
        &self,
        crop: &str,
        request: &GermplasmListSearchRequest,
        page: Page,
    ) -> Result<Vec<GermplasmList>>;

    async fn get_list(&self, crop: &str, list_id: i32) -> Result<Option<GermplasmList>>;

    async fn create_list(&self, crop: &str, request: GermplasmListRequest) -> Result<i32>;

    /// Locked lists reject updates with `Conflict`.
    async fn update_list(
        &self,
        crop: &str,
        list_id: i32,
        request: GermplasmListRequest,
    ) -> Result<()>;

    /// Flips the lock and returns the new state.
    async fn toggle_lock(&self, crop: &str, list_id: i32) -> Result<bool>;
}
