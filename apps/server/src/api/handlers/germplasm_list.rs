//! Germplasm list handlers

use super::{created, paged};
use crate::{
    api::extract::{ApiJson, ApiPath, ApiQuery},
    models::{GermplasmListRequest, GermplasmListSearchRequest, PageRequest},
    state::AppState,
    Error, Result,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use validator::Validate;

/// POST /crops/:crop/germplasm-lists/search?page=&size=
pub async fn search_lists(
    State(state): State<AppState>,
    ApiPath(crop): ApiPath<String>,
    ApiQuery(page): ApiQuery<PageRequest>,
    ApiJson(request): ApiJson<GermplasmListSearchRequest>,
) -> Result<Response> {
    let page = page.resolve(&state.config.api)?;
    let total = state.germplasm_lists.count_lists(&crop, &request).await?;
    let items = state
        .germplasm_lists
        .search_lists(&crop, &request, page)
        .await?;
    Ok(paged(total, items))
}

/// GET /crops/:crop/germplasm-lists/:list_id
pub async fn get_list(
    State(state): State<AppState>,
    ApiPath((crop, list_id)): ApiPath<(String, i32)>,
) -> Result<Response> {
    let list = state
        .germplasm_lists
        .get_list(&crop, list_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Germplasm list {}", list_id)))?;
    Ok((StatusCode::OK, Json(list)).into_response())
}

/// POST /crops/:crop/germplasm-lists
pub async fn create_list(
    State(state): State<AppState>,
    ApiPath(crop): ApiPath<String>,
    ApiJson(request): ApiJson<GermplasmListRequest>,
) -> Result<Response> {
    request.validate()?;
    let id = state.germplasm_lists.create_list(&crop, request).await?;
    Ok(created(id))
}

/// PUT /crops/:crop/germplasm-lists/:list_id
pub async fn update_list(
    State(state): State<AppState>,
    ApiPath((crop, list_id)): ApiPath<(String, i32)>,
    ApiJson(request): ApiJson<GermplasmListRequest>,
) -> Result<Response> {
    request.validate()?;
    state
        .germplasm_lists
        .update_list(&crop, list_id, request)
        .await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Flip the lock and return the new state
///
/// PATCH /crops/:crop/germplasm-lists/:list_id/toggle-status
pub async fn toggle_lock(
    State(state): State<AppState>,
    ApiPath((crop, list_id)): ApiPath<(String, i32)>,
) -> Result<Response> {
    let locked = state.germplasm_lists.toggle_lock(&crop, list_id).await?;
    Ok((StatusCode::OK, Json(serde_json::json!({ "locked": locked }))).into_response())
}
