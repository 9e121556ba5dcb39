use crate::rules::{
    CategoricalValidator, CharacterValidator, DateValidator, NumericValidator, ValueValidator,
};
use crate::{DataType, MeasurementDetails, ValidationErrors, ValidatorConfig, ValidatorError};
use std::collections::HashMap;
use std::sync::Arc;

/// Reusable dispatcher - owns one rule per data type.
#[derive(Clone)]
pub struct MeasurementValidator {
    rules: HashMap<DataType, Arc<dyn ValueValidator>>,
}

impl MeasurementValidator {
    /// Registers the rule for every [`DataType`].
    pub fn new(config: &ValidatorConfig) -> Self {
        let rules: Vec<Arc<dyn ValueValidator>> = vec![
            Arc::new(NumericValidator::new()),
            Arc::new(DateValidator::new()),
            Arc::new(CategoricalValidator::new()),
            Arc::new(CharacterValidator::new(config.max_character_length)),
        ];
        Self::with_rules(rules)
    }

    /// Builds a dispatcher from an explicit rule set. A later rule replaces an
    /// earlier one for the same data type.
    pub fn with_rules(rules: Vec<Arc<dyn ValueValidator>>) -> Self {
        Self {
            rules: rules.into_iter().map(|r| (r.data_type(), r)).collect(),
        }
    }

    /// Validates one measurement with the rule for its declared data type.
    pub fn validate(
        &self,
        measurement: &MeasurementDetails,
        errors: &mut ValidationErrors,
    ) -> Result<(), ValidatorError> {
        let rule = self
            .rules
            .get(&measurement.data_type)
            .ok_or(ValidatorError::UnsupportedDataType(measurement.data_type))?;
        rule.validate(measurement, errors)
    }

    /// Validates every measurement. Rejections never stop the pass; an
    /// internal-consistency error does.
    pub fn validate_batch(
        &self,
        measurements: &[MeasurementDetails],
    ) -> Result<ValidationErrors, ValidatorError> {
        let mut errors = ValidationErrors::new();
        for measurement in measurements {
            self.validate(measurement, &mut errors)?;
        }
        Ok(errors)
    }
}

impl Default for MeasurementValidator {
    fn default() -> Self {
        Self::new(&ValidatorConfig::default())
    }
}

impl std::fmt::Debug for MeasurementValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut types: Vec<_> = self.rules.keys().map(|t| t.to_string()).collect();
        types.sort();
        f.debug_struct("MeasurementValidator")
            .field("data_types", &types)
            .finish()
    }
}
