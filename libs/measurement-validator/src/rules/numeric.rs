//! NUMERIC values: optionally signed integers or decimals, with an optional
//! exponent. Parsing is locale independent (`.` is the only decimal separator).

use super::ValueValidator;
use crate::{codes, DataType, MeasurementDetails, Rejection};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NUMBER: Regex =
        Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?$").expect("valid regex");
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NumericValidator;

impl NumericValidator {
    pub fn new() -> Self {
        Self
    }

    /// True when `raw`, once trimmed, is a finite number.
    pub fn is_numeric(raw: &str) -> bool {
        let trimmed = raw.trim();
        NUMBER.is_match(trimmed)
            && trimmed
                .parse::<f64>()
                .map(|v| v.is_finite())
                .unwrap_or(false)
    }
}

impl ValueValidator for NumericValidator {
    fn data_type(&self) -> DataType {
        DataType::Numeric
    }

    fn check(&self, measurement: &MeasurementDetails) -> Option<Rejection> {
        if Self::is_numeric(&measurement.value) {
            return None;
        }
        Some(Rejection::new(
            codes::INVALID_NUMERIC_VALUE,
            format!(
                "Value '{}' of {} is not a valid number",
                measurement.value,
                measurement.variable_label()
            ),
            &measurement.value,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ValidationErrors, ValidatorError};

    fn numeric(value: &str) -> MeasurementDetails {
        MeasurementDetails::new(DataType::Numeric, value, Some(101), Some(55))
    }

    #[test]
    fn accepts_numbers() {
        for value in ["42", " 3.14 ", "-7", "+0.5", "0", ".5", "1.", "6.02e23", "-1E-3"] {
            let mut errors = ValidationErrors::new();
            NumericValidator::new()
                .validate(&numeric(value), &mut errors)
                .unwrap();
            assert!(errors.is_empty(), "'{}' should be numeric", value);
        }
    }

    #[test]
    fn rejects_non_numbers_with_untrimmed_value() {
        for value in ["abc", "", "12x", "--1", " ", "1,5", "NaN", "inf", "1e999", "e5", "."] {
            let mut errors = ValidationErrors::new();
            NumericValidator::new()
                .validate(&numeric(value), &mut errors)
                .unwrap();

            assert_eq!(errors.len(), 1, "'{}' should be rejected", value);
            let rejection = &errors.errors()[0];
            assert_eq!(rejection.code, codes::INVALID_NUMERIC_VALUE);
            assert_eq!(rejection.rejected_value, value);
            assert_eq!(rejection.observation_id, Some(101));
            assert_eq!(rejection.measurement_id, Some(55));
        }
    }

    #[test]
    fn wrong_data_type_is_an_internal_error() {
        let measurement = MeasurementDetails::new(DataType::Date, "abc", Some(1), Some(2));
        let mut errors = ValidationErrors::new();

        let result = NumericValidator::new().validate(&measurement, &mut errors);

        assert_eq!(
            result,
            Err(ValidatorError::DataTypeMismatch {
                validator: DataType::Numeric,
                actual: DataType::Date,
                measurement_id: Some(2),
            })
        );
        assert!(errors.is_empty());
    }
}
