//! Study transaction handlers

use super::paged;
use crate::{
    api::extract::{ApiJson, ApiPath, ApiQuery},
    models::{PageRequest, SearchComposite, StudyTransactionsSearch},
    state::AppState,
    Result,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// POST /crops/:crop/studies/:study_id/transactions/search?page=&size=
pub async fn search_transactions(
    State(state): State<AppState>,
    ApiPath((crop, study_id)): ApiPath<(String, i32)>,
    ApiQuery(page): ApiQuery<PageRequest>,
    ApiJson(search): ApiJson<StudyTransactionsSearch>,
) -> Result<Response> {
    let page = page.resolve(&state.config.api)?;
    let total = state
        .study_transactions
        .count_transactions(&crop, study_id, &search)
        .await?;
    let items = state
        .study_transactions
        .search_transactions(&crop, study_id, &search, page)
        .await?;
    Ok(paged(total, items))
}

/// Cancel PENDING transactions selected by search or by ids. All or nothing.
///
/// POST /crops/:crop/studies/:study_id/transactions/cancellation
pub async fn cancel_pending_transactions(
    State(state): State<AppState>,
    ApiPath((crop, study_id)): ApiPath<(String, i32)>,
    ApiJson(composite): ApiJson<SearchComposite<StudyTransactionsSearch, i32>>,
) -> Result<Response> {
    state
        .study_transactions
        .cancel_pending_transactions(&crop, study_id, composite)
        .await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
