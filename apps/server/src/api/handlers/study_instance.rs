//! Study instance handlers

use super::paged;
use crate::{
    api::extract::{ApiPath, ApiQuery},
    models::{PageRequest, StudyInstanceSearch},
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

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationQuery {
    pub number_of_instances_to_generate: u32,
}

/// `instanceIds` as a comma separated list, e.g. `?instanceIds=3,4`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteInstancesQuery {
    pub instance_ids: String,
}

impl DeleteInstancesQuery {
    fn parse_ids(&self) -> Result<Vec<i32>> {
        let ids = self
            .instance_ids
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<i32>().map_err(|_| {
                    Error::invalid(
                        "study.instance.id.invalid",
                        format!("'{}' is not a valid instance id", s),
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if ids.is_empty() {
            return Err(Error::invalid(
                "study.instance.id.required",
                "instanceIds must name at least one instance",
            ));
        }
        Ok(ids)
    }
}

/// GET /crops/:crop/studies/:study_id/instances?instanceNumber=&locationId=&page=&size=
pub async fn search_instances(
    State(state): State<AppState>,
    ApiPath((crop, study_id)): ApiPath<(String, i32)>,
    ApiQuery(search): ApiQuery<StudyInstanceSearch>,
    ApiQuery(page): ApiQuery<PageRequest>,
) -> Result<Response> {
    let page = page.resolve(&state.config.api)?;
    let total = state
        .study_instances
        .count_instances(&crop, study_id, &search)
        .await?;
    let items = state
        .study_instances
        .search_instances(&crop, study_id, &search, page)
        .await?;
    Ok(paged(total, items))
}

/// GET /crops/:crop/studies/:study_id/instances/:instance_id
pub async fn get_instance(
    State(state): State<AppState>,
    ApiPath((crop, study_id, instance_id)): ApiPath<(String, i32, i32)>,
) -> Result<Response> {
    let instance = state
        .study_instances
        .get_instance(&crop, study_id, instance_id)
        .await?
        .ok_or_else(|| {
            Error::NotFound(format!("Instance {} in study {}", instance_id, study_id))
        })?;
    Ok((StatusCode::OK, Json(instance)).into_response())
}

/// POST /crops/:crop/studies/:study_id/instances/generation?numberOfInstancesToGenerate=
pub async fn create_instances(
    State(state): State<AppState>,
    ApiPath((crop, study_id)): ApiPath<(String, i32)>,
    ApiQuery(query): ApiQuery<GenerationQuery>,
) -> Result<Response> {
    let instances = state
        .study_instances
        .create_instances(&crop, study_id, query.number_of_instances_to_generate)
        .await?;
    Ok((StatusCode::CREATED, Json(instances)).into_response())
}

/// DELETE /crops/:crop/studies/:study_id/instances?instanceIds=
pub async fn delete_instances(
    State(state): State<AppState>,
    ApiPath((crop, study_id)): ApiPath<(String, i32)>,
    ApiQuery(query): ApiQuery<DeleteInstancesQuery>,
) -> Result<Response> {
    let ids = query.parse_ids()?;
    state
        .study_instances
        .delete_instances(&crop, study_id, &ids)
        .await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
