//! Crate error type and its HTTP translation.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use breeding_validator::{ValidationErrors, ValidatorError};
use serde::Serialize;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed or inconsistent request parameters.
    #[error("{message}")]
    InvalidRequest { code: &'static str, message: String },

    /// Request body failed its declarative field rules.
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] validator::ValidationErrors),

    /// Submitted measurement values were rejected.
    #[error("{} measurement value(s) rejected", .0.len())]
    Validation(ValidationErrors),

    /// Body exceeded the configured size limit while being read.
    #[error("Request body too large: {0}")]
    PayloadTooLarge(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    /// A validator was wired to the wrong data type.
    #[error("Validator misuse: {0}")]
    Validator(#[from] ValidatorError),

    /// The middleware failed to answer a read.
    #[error("Query failed: {0}")]
    Query(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn invalid(code: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            code,
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest { .. } | Self::InvalidBody(_) | Self::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Validator(_) | Self::Query(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_entries(&self) -> Vec<ErrorEntry> {
        match self {
            Self::InvalidRequest { code, message } => vec![ErrorEntry::new(code, message.clone())],
            Self::InvalidBody(errors) => {
                let mut entries: Vec<ErrorEntry> = errors
                    .field_errors()
                    .into_iter()
                    .flat_map(|(field, field_errors)| {
                        field_errors.iter().map(move |e| ErrorEntry {
                            code: format!("field.{}", e.code),
                            message: e
                                .message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| format!("Invalid value for '{}'", field)),
                            field_names: Some(vec![field.to_string()]),
                            ..ErrorEntry::default()
                        })
                    })
                    .collect();
                entries.sort_by(|a, b| a.field_names.cmp(&b.field_names));
                entries
            }
            Self::Validation(errors) => errors
                .errors()
                .iter()
                .map(|r| ErrorEntry {
                    code: r.code.clone(),
                    message: r.message.clone(),
                    field_names: None,
                    rejected_value: Some(r.rejected_value.clone()),
                    observation_id: r.observation_id,
                    measurement_id: r.measurement_id,
                })
                .collect(),
            Self::PayloadTooLarge(message) => {
                vec![ErrorEntry::new("request.body.too.large", message.clone())]
            }
            Self::NotFound(what) => vec![ErrorEntry::new("not.found", format!("{} not found", what))],
            Self::Conflict(message) => vec![ErrorEntry::new("conflict", message.clone())],
            Self::Validator(e) => vec![ErrorEntry::new("internal.validator", e.to_string())],
            Self::Query(_) => vec![ErrorEntry::new(
                "query.failed",
                "Failed to query the breeding database".to_string(),
            )],
            Self::Internal(_) => vec![ErrorEntry::new(
                "internal.error",
                "Unexpected server error".to_string(),
            )],
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return Self::PayloadTooLarge(rejection.body_text());
        }
        Self::invalid("request.body.invalid", rejection.body_text())
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Self::invalid("request.query.invalid", rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Self::invalid("request.path.invalid", rejection.body_text())
    }
}

/// Error body entry. Every error response is `{ "errors": [ErrorEntry, ...] }`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEntry {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observation_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_id: Option<i32>,
}

impl ErrorEntry {
    fn new(code: &str, message: String) -> Self {
        Self {
            code: code.to_string(),
            message,
            ..Self::default()
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    errors: Vec<ErrorEntry>,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let body = ErrorResponse {
            errors: self.error_entries(),
        };
        (status, Json(body)).into_response()
    }
}
