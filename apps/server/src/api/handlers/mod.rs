//! Request handlers, one module per domain.

pub mod germplasm_list;
pub mod health;
pub mod location;
pub mod observation;
pub mod ontology;
pub mod program;
pub mod role;
pub mod study_instance;
pub mod study_transactions;

use crate::api::TOTAL_COUNT_HEADER;
use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// A search page as a JSON array, with the unpaged total in `X-Total-Count`.
pub(crate) fn paged<T: Serialize>(total: u64, items: Vec<T>) -> Response {
    let mut response = (StatusCode::OK, Json(items)).into_response();
    response
        .headers_mut()
        .insert(TOTAL_COUNT_HEADER, HeaderValue::from(total));
    response
}

/// 201 with the generated identifier.
pub(crate) fn created(id: i32) -> Response {
    (StatusCode::CREATED, Json(serde_json::json!({ "id": id }))).into_response()
}
