use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared data type of a study variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    Numeric,
    Categorical,
    Date,
    Character,
}

impl DataType {
    /// Single-letter code used by the ontology (`N`, `C`, `D`, `T`).
    pub fn code(&self) -> &'static str {
        match self {
            Self::Numeric => "N",
            Self::Categorical => "C",
            Self::Date => "D",
            Self::Character => "T",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Numeric => "NUMERIC",
            Self::Categorical => "CATEGORICAL",
            Self::Date => "DATE",
            Self::Character => "CHARACTER",
        };
        write!(f, "{}", s)
    }
}

/// A submitted observation value together with the variable it measures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementDetails {
    /// `None` for a value that has not been stored yet.
    #[serde(default)]
    pub measurement_id: Option<i32>,
    pub observation_id: Option<i32>,
    pub variable_id: i32,
    #[serde(default)]
    pub variable_name: Option<String>,
    pub data_type: DataType,
    /// Raw value exactly as submitted.
    #[serde(default)]
    pub value: String,
    /// Valid category names, only meaningful for CATEGORICAL variables.
    #[serde(default)]
    pub possible_values: Vec<String>,
}

impl MeasurementDetails {
    pub fn new(
        data_type: DataType,
        value: impl Into<String>,
        observation_id: Option<i32>,
        measurement_id: Option<i32>,
    ) -> Self {
        Self {
            measurement_id,
            observation_id,
            variable_id: 0,
            variable_name: None,
            data_type,
            value: value.into(),
            possible_values: Vec::new(),
        }
    }

    pub fn with_variable(mut self, variable_id: i32, name: impl Into<String>) -> Self {
        self.variable_id = variable_id;
        self.variable_name = Some(name.into());
        self
    }

    pub fn with_possible_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.possible_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Label used in rejection messages.
    pub(crate) fn variable_label(&self) -> String {
        match &self.variable_name {
            Some(name) => name.clone(),
            None => format!("variable {}", self.variable_id),
        }
    }
}
