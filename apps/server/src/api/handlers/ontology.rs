//! Crop ontology handlers

use super::created;
use crate::{
    api::extract::{ApiJson, ApiPath, ApiQuery},
    models::{MethodRequest, PropertyRequest},
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
use validator::Validate;

#[derive(Debug, Deserialize)]
pub struct PropertiesQuery {
    pub class: Option<String>,
}

/// GET /crops/:crop/ontology/methods
pub async fn get_methods(
    State(state): State<AppState>,
    ApiPath(crop): ApiPath<String>,
) -> Result<Response> {
    let methods = state.ontology.get_methods(&crop).await?;
    Ok((StatusCode::OK, Json(methods)).into_response())
}

/// GET /crops/:crop/ontology/methods/:method_id
pub async fn get_method(
    State(state): State<AppState>,
    ApiPath((crop, method_id)): ApiPath<(String, i32)>,
) -> Result<Response> {
    let method = state
        .ontology
        .get_method(&crop, method_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Method {}", method_id)))?;
    Ok((StatusCode::OK, Json(method)).into_response())
}

/// POST /crops/:crop/ontology/methods
pub async fn add_method(
    State(state): State<AppState>,
    ApiPath(crop): ApiPath<String>,
    ApiJson(request): ApiJson<MethodRequest>,
) -> Result<Response> {
    request.validate()?;
    let id = state.ontology.add_method(&crop, request).await?;
    Ok(created(id))
}

/// PUT /crops/:crop/ontology/methods/:method_id
pub async fn update_method(
    State(state): State<AppState>,
    ApiPath((crop, method_id)): ApiPath<(String, i32)>,
    ApiJson(request): ApiJson<MethodRequest>,
) -> Result<Response> {
    request.validate()?;
    state
        .ontology
        .update_method(&crop, method_id, request)
        .await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// DELETE /crops/:crop/ontology/methods/:method_id
pub async fn delete_method(
    State(state): State<AppState>,
    ApiPath((crop, method_id)): ApiPath<(String, i32)>,
) -> Result<Response> {
    state.ontology.delete_method(&crop, method_id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// GET /crops/:crop/ontology/properties?class=
pub async fn get_properties(
    State(state): State<AppState>,
    ApiPath(crop): ApiPath<String>,
    ApiQuery(query): ApiQuery<PropertiesQuery>,
) -> Result<Response> {
    let properties = state
        .ontology
        .get_properties(&crop, query.class.as_deref())
        .await?;
    Ok((StatusCode::OK, Json(properties)).into_response())
}

/// GET /crops/:crop/ontology/properties/:property_id
pub async fn get_property(
    State(state): State<AppState>,
    ApiPath((crop, property_id)): ApiPath<(String, i32)>,
) -> Result<Response> {
    let property = state
        .ontology
        .get_property(&crop, property_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Property {}", property_id)))?;
    Ok((StatusCode::OK, Json(property)).into_response())
}

/// POST /crops/:crop/ontology/properties
pub async fn add_property(
    State(state): State<AppState>,
    ApiPath(crop): ApiPath<String>,
    ApiJson(request): ApiJson<PropertyRequest>,
) -> Result<Response> {
    request.validate()?;
    let id = state.ontology.add_property(&crop, request).await?;
    Ok(created(id))
}

/// GET /crops/:crop/ontology/classes
pub async fn get_classes(
    State(state): State<AppState>,
    ApiPath(crop): ApiPath<String>,
) -> Result<Response> {
    let classes = state.ontology.get_classes(&crop).await?;
    Ok((StatusCode::OK, Json(classes)).into_response())
}

/// GET /crops/:crop/ontology/datatypes
pub async fn get_data_types(
    State(state): State<AppState>,
    ApiPath(_crop): ApiPath<String>,
) -> Result<Response> {
    let data_types = state.ontology.get_data_types().await?;
    Ok((StatusCode::OK, Json(data_types)).into_response())
}
