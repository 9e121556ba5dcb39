//! Location handlers

use super::{created, paged};
use crate::{
    api::extract::{ApiJson, ApiPath, ApiQuery},
    models::{LocationRequest, LocationSearchRequest, PageRequest},
    state::AppState,
    Error, Result,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize)]
pub struct FavoriteQuery {
    #[serde(default = "default_favorite")]
    pub favorite: bool,
}

fn default_favorite() -> bool {
    true
}

/// POST /crops/:crop/locations/search?page=&size=
pub async fn search_locations(
    State(state): State<AppState>,
    ApiPath(crop): ApiPath<String>,
    ApiQuery(page): ApiQuery<PageRequest>,
    ApiJson(request): ApiJson<LocationSearchRequest>,
) -> Result<Response> {
    let page = page.resolve(&state.config.api)?;
    let total = state.locations.count_locations(&crop, &request).await?;
    let items = state
        .locations
        .search_locations(&crop, &request, page)
        .await?;

    Ok(paged(total, items))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramScopeQuery {
    pub program_uuid: Option<Uuid>,
}

/// GET /crops/:crop/locations/:location_id?programUuid=
pub async fn get_location(
    State(state): State<AppState>,
    ApiPath((crop, location_id)): ApiPath<(String, i32)>,
    ApiQuery(scope): ApiQuery<ProgramScopeQuery>,
) -> Result<Response> {
    let location = state
        .locations
        .get_location(&crop, location_id, scope.program_uuid)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Location {}", location_id)))?;

    Ok((StatusCode::OK, Json(location)).into_response())
}

/// POST /crops/:crop/locations
pub async fn create_location(
    State(state): State<AppState>,
    ApiPath(crop): ApiPath<String>,
    ApiJson(request): ApiJson<LocationRequest>,
) -> Result<Response> {
    request.validate()?;
    let id = state.locations.create_location(&crop, request).await?;
    Ok(created(id))
}

/// PUT /crops/:crop/locations/:location_id
pub async fn update_location(
    State(state): State<AppState>,
    ApiPath((crop, location_id)): ApiPath<(String, i32)>,
    ApiJson(request): ApiJson<LocationRequest>,
) -> Result<Response> {
    request.validate()?;
    state
        .locations
        .update_location(&crop, location_id, request)
        .await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// PUT /crops/:crop/programs/:program_uuid/favorites/locations/:location_id?favorite=
pub async fn set_favorite(
    State(state): State<AppState>,
    ApiPath((crop, program_uuid, location_id)): ApiPath<(String, Uuid, i32)>,
    ApiQuery(query): ApiQuery<FavoriteQuery>,
) -> Result<Response> {
    state
        .locations
        .set_favorite(&crop, program_uuid, location_id, query.favorite)
        .await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
