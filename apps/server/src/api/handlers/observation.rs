//! Measurement value validation

use crate::{
    api::extract::{ApiJson, ApiPath},
    state::AppState,
    Error, Result,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use breeding_validator::MeasurementDetails;

/// Runs every measurement through the validator for its declared data type.
/// All rejections are reported together.
///
/// POST /crops/:crop/studies/:study_id/observations/validation
pub async fn validate_measurements(
    State(state): State<AppState>,
    ApiPath((crop, study_id)): ApiPath<(String, i32)>,
    ApiJson(measurements): ApiJson<Vec<MeasurementDetails>>,
) -> Result<Response> {
    let errors = state.measurement_validator.validate_batch(&measurements)?;

    tracing::debug!(
        crop = %crop,
        study_id,
        measurements = measurements.len(),
        rejected = errors.len(),
        "Validated measurements"
    );

    if errors.has_errors() {
        return Err(Error::Validation(errors));
    }
    Ok((StatusCode::OK, Json(serde_json::json!({ "valid": true }))).into_response())
}
