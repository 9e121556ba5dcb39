use super::ValueValidator;
use crate::{codes, DataType, MeasurementDetails, Rejection};
use chrono::NaiveDate;

/// Dates are exchanged as `YYYYMMDD`.
pub const DATE_FORMAT: &str = "%Y%m%d";

#[derive(Debug, Clone, Copy, Default)]
pub struct DateValidator;

impl DateValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(raw: &str) -> Option<NaiveDate> {
        let trimmed = raw.trim();
        // chrono accepts fewer than 4 year digits, the wire format does not.
        if trimmed.len() != 8 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        NaiveDate::parse_from_str(trimmed, DATE_FORMAT).ok()
    }
}

impl ValueValidator for DateValidator {
    fn data_type(&self) -> DataType {
        DataType::Date
    }

    fn check(&self, measurement: &MeasurementDetails) -> Option<Rejection> {
        if Self::parse(&measurement.value).is_some() {
            return None;
        }
        Some(Rejection::new(
            codes::INVALID_DATE_VALUE,
            format!(
                "Value '{}' of {} is not a valid date (expected YYYYMMDD)",
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
    use crate::ValidationErrors;

    fn date(value: &str) -> MeasurementDetails {
        MeasurementDetails::new(DataType::Date, value, Some(3), None)
    }

    #[test]
    fn accepts_calendar_dates() {
        for value in ["20240229", " 19991231 "] {
            let mut errors = ValidationErrors::new();
            DateValidator::new().validate(&date(value), &mut errors).unwrap();
            assert!(errors.is_empty(), "'{}' should be a date", value);
        }
    }

    #[test]
    fn rejects_impossible_or_malformed_dates() {
        for value in ["20230229", "2024-01-01", "2024011", "abcdefgh", ""] {
            let mut errors = ValidationErrors::new();
            DateValidator::new().validate(&date(value), &mut errors).unwrap();
            assert_eq!(errors.len(), 1, "'{}' should be rejected", value);
            assert_eq!(errors.errors()[0].code, codes::INVALID_DATE_VALUE);
        }
    }
}
