use crate::{
    models::{Page, SearchComposite, StudyTransaction, StudyTransactionsSearch},
    Result,
};
use async_trait::async_trait;

#[async_trait]
pub trait StudyTransactionsService: Send + Sync {
    async fn count_transactions(
        &self,
        crop: &str,
        study_id: i32,
        search: &StudyTransactionsSearch,
    ) -> Result<u64>;

    async fn search_transactions(
        &self,
        crop: &str,
        study_id: i32,
        search: &StudyTransactionsSearch,
        page: Page,
    ) -> Result<Vec<StudyTransaction>>;

    /// Cancels every pending transaction the composite selects. Either all of
    /// them are cancelled or none is.
    async fn cancel_pending_transactions(
        &self,
        crop: &str,
        study_id: i32,
        composite: SearchComposite<StudyTransactionsSearch, i32>,
    ) -> Result<()>;
}
