use super::ValueValidator;
use crate::{codes, DataType, MeasurementDetails, Rejection};

/// CATEGORICAL values must name one of the variable's categories. A variable
/// without declared categories is not constrained.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoricalValidator;

impl CategoricalValidator {
    pub fn new() -> Self {
        Self
    }
}

impl ValueValidator for CategoricalValidator {
    fn data_type(&self) -> DataType {
        DataType::Categorical
    }

    fn check(&self, measurement: &MeasurementDetails) -> Option<Rejection> {
        if measurement.possible_values.is_empty() {
            return None;
        }
        let trimmed = measurement.value.trim();
        if measurement.possible_values.iter().any(|v| v == trimmed) {
            return None;
        }

        let message = format!(
            "Value '{}' of {} is not one of: {}",
            measurement.value,
            measurement.variable_label(),
            measurement.possible_values.join(", ")
        );
        Some(Rejection::new(
            codes::INVALID_CATEGORICAL_VALUE,
            message,
            &measurement.value,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationErrors;

    #[test]
    fn checks_membership_after_trimming() {
        let base = MeasurementDetails::new(DataType::Categorical, " 2 ", Some(1), Some(9))
            .with_possible_values(["1", "2", "3"]);
        let mut errors = ValidationErrors::new();
        CategoricalValidator::new().validate(&base, &mut errors).unwrap();
        assert!(errors.is_empty());

        let outside = MeasurementDetails {
            value: "4".to_string(),
            ..base
        };
        CategoricalValidator::new()
            .validate(&outside, &mut errors)
            .unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].code, codes::INVALID_CATEGORICAL_VALUE);
        assert_eq!(errors.errors()[0].measurement_id, Some(9));
    }

    #[test]
    fn any_value_passes_without_categories() {
        let mut errors = ValidationErrors::new();
        for value in ["  ", "", "anything"] {
            let m = MeasurementDetails::new(DataType::Categorical, value, None, None);
            CategoricalValidator::new().validate(&m, &mut errors).unwrap();
        }
        assert!(errors.is_empty());

        let blank = MeasurementDetails::new(DataType::Categorical, " ", None, None)
            .with_possible_values(["1", "2"]);
        CategoricalValidator::new().validate(&blank, &mut errors).unwrap();
        assert_eq!(errors.len(), 1);
    }
}
