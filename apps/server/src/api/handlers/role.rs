//! Role handlers

use super::{created, paged};
use crate::{
    api::extract::{ApiJson, ApiPath, ApiQuery},
    models::{PageRequest, RoleRequest, RoleSearchRequest},
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

/// GET /roles?name=&roleTypeId=&active=&assignable=&page=&size=
pub async fn search_roles(
    State(state): State<AppState>,
    ApiQuery(request): ApiQuery<RoleSearchRequest>,
    ApiQuery(page): ApiQuery<PageRequest>,
) -> Result<Response> {
    let page = page.resolve(&state.config.api)?;
    let total = state.roles.count_roles(&request).await?;
    let items = state.roles.search_roles(&request, page).await?;
    Ok(paged(total, items))
}

/// GET /roles/:role_id
pub async fn get_role(
    State(state): State<AppState>,
    ApiPath(role_id): ApiPath<i32>,
) -> Result<Response> {
    let role = state
        .roles
        .get_role(role_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Role {}", role_id)))?;
    Ok((StatusCode::OK, Json(role)).into_response())
}

/// POST /roles
pub async fn create_role(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RoleRequest>,
) -> Result<Response> {
    request.validate()?;
    let id = state.roles.create_role(request).await?;
    Ok(created(id))
}

/// PUT /roles/:role_id
pub async fn update_role(
    State(state): State<AppState>,
    ApiPath(role_id): ApiPath<i32>,
    ApiJson(request): ApiJson<RoleRequest>,
) -> Result<Response> {
    request.validate()?;
    state.roles.update_role(role_id, request).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
