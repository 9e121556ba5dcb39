use serde::Serialize;

/// Stable rejection codes returned to clients.
pub mod codes {
    pub const INVALID_NUMERIC_VALUE: &str = "invalid.measurement.numeric.value";
    pub const INVALID_DATE_VALUE: &str = "invalid.measurement.date.value";
    pub const INVALID_CATEGORICAL_VALUE: &str = "invalid.measurement.categorical.value";
    pub const INVALID_CHARACTER_VALUE: &str = "invalid.measurement.character.value";
}

/// Field-level rejection of a single submitted value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rejection {
    pub code: String,
    pub message: String,
    pub rejected_value: String,
    pub observation_id: Option<i32>,
    pub measurement_id: Option<i32>,
}

impl Rejection {
    pub fn new(code: &str, message: String, rejected_value: &str) -> Self {
        Self {
            code: code.to_string(),
            message,
            rejected_value: rejected_value.to_string(),
            observation_id: None,
            measurement_id: None,
        }
    }

    pub fn with_observation_id(mut self, observation_id: Option<i32>) -> Self {
        self.observation_id = observation_id;
        self
    }

    pub fn with_measurement_id(mut self, measurement_id: Option<i32>) -> Self {
        self.measurement_id = measurement_id;
        self
    }
}

/// Request-local collector shared by every validator in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    errors: Vec<Rejection>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject(&mut self, rejection: Rejection) {
        self.errors.push(rejection);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[Rejection] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Rejection> {
        self.errors
    }

    /// Appends every rejection of `other`, keeping order.
    pub fn merge(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }
}

impl IntoIterator for ValidationErrors {
    type Item = Rejection;
    type IntoIter = std::vec::IntoIter<Rejection>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}
