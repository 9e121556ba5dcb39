//! Program listing handlers

use crate::{
    api::extract::{ApiPath, ApiQuery},
    models::{ProgramFilter, ProgramSummary},
    state::AppState,
    Error, Result,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

/// List programs, one summary per project in middleware order
///
/// GET /program/list?cropName=
pub async fn list_programs(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<ProgramFilter>,
) -> Result<Response> {
    let projects = state.programs.list_projects(&filter).await?;
    let programs: Vec<ProgramSummary> = projects.iter().map(ProgramSummary::from).collect();

    tracing::debug!(count = programs.len(), "Listed programs");
    Ok((StatusCode::OK, Json(programs)).into_response())
}

/// GET /program/:program_uuid
pub async fn get_program(
    State(state): State<AppState>,
    ApiPath(program_uuid): ApiPath<Uuid>,
) -> Result<Response> {
    let project = state
        .programs
        .get_project(program_uuid)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Program {}", program_uuid)))?;

    Ok((StatusCode::OK, Json(ProgramSummary::from(&project))).into_response())
}
