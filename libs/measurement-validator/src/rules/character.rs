use super::ValueValidator;
use crate::{codes, DataType, MeasurementDetails, Rejection};

#[derive(Debug, Clone, Copy)]
pub struct CharacterValidator {
    max_length: usize,
}

impl CharacterValidator {
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }
}

impl ValueValidator for CharacterValidator {
    fn data_type(&self) -> DataType {
        DataType::Character
    }

    fn check(&self, measurement: &MeasurementDetails) -> Option<Rejection> {
        if measurement.value.chars().count() <= self.max_length {
            return None;
        }
        Some(Rejection::new(
            codes::INVALID_CHARACTER_VALUE,
            format!(
                "Value of {} exceeds {} characters",
                measurement.variable_label(),
                self.max_length
            ),
            &measurement.value,
        ))
    }
}
