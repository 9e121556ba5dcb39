//! Measurement value validation
//!
//! Every observation value submitted for a study variable carries the variable's
//! declared [`DataType`]. Before the value is accepted it runs through the rule
//! registered for that type:
//!
//! ```text
//! MeasurementDetails ─▶ MeasurementValidator ─▶ ValueValidator (by DataType) ─▶ ValidationErrors
//! ```
//!
//! Two kinds of failure are kept apart:
//!
//! - A value that does not satisfy its rule is a [`Rejection`]. Rejections are
//!   accumulated into a [`ValidationErrors`] collector and never interrupt the pass.
//! - Running a rule against a measurement of another data type is a
//!   [`ValidatorError`]. It means the caller wired the wrong rule and halts the pass.

use serde::{Deserialize, Serialize};

mod error;
mod measurement;
mod rejection;
mod rules;
mod validator;

pub use error::ValidatorError;
pub use measurement::{DataType, MeasurementDetails};
pub use rejection::{codes, Rejection, ValidationErrors};
pub use rules::{
    CategoricalValidator, CharacterValidator, DateValidator, NumericValidator, ValueValidator,
};
pub use validator::MeasurementValidator;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Longest accepted value for CHARACTER variables.
    #[serde(default = "default_max_character_length")]
    pub max_character_length: usize,
}

fn default_max_character_length() -> usize {
    255
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_character_length: default_max_character_length(),
        }
    }
}
