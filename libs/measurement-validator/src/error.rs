use crate::DataType;
use thiserror::Error;

/// Internal-consistency failures. These are programming errors on the caller's
/// side, never a verdict on the submitted value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidatorError {
    #[error("{validator} validator invoked for a {actual} measurement (measurement {measurement_id:?})")]
    DataTypeMismatch {
        validator: DataType,
        actual: DataType,
        measurement_id: Option<i32>,
    },

    #[error("No validator registered for data type {0}")]
    UnsupportedDataType(DataType),
}
