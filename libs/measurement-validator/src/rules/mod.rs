//! One rule per declared data type.

mod categorical;
mod character;
mod date;
mod numeric;

pub use categorical::CategoricalValidator;
pub use character::CharacterValidator;
pub use date::DateValidator;
pub use numeric::NumericValidator;

use crate::{DataType, MeasurementDetails, Rejection, ValidationErrors, ValidatorError};

/// A stateless check for values of one data type.
pub trait ValueValidator: Send + Sync {
    /// The only data type this rule may be applied to.
    fn data_type(&self) -> DataType;

    /// Applies the rule, returning a rejection when the value fails it.
    fn check(&self, measurement: &MeasurementDetails) -> Option<Rejection>;

    /// Validates one measurement, appending to `errors` on rejection.
    ///
    /// Returns `Err` only when the measurement's declared type differs from
    /// [`Self::data_type`].
    fn validate(
        &self,
        measurement: &MeasurementDetails,
        errors: &mut ValidationErrors,
    ) -> Result<(), ValidatorError> {
        if measurement.data_type != self.data_type() {
            return Err(ValidatorError::DataTypeMismatch {
                validator: self.data_type(),
                actual: measurement.data_type,
                measurement_id: measurement.measurement_id,
            });
        }

        if let Some(rejection) = self.check(measurement) {
            errors.reject(
                rejection
                    .with_observation_id(measurement.observation_id)
                    .with_measurement_id(measurement.measurement_id),
            );
        }
        Ok(())
    }
}
