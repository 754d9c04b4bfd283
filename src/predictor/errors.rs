use thiserror::Error;

/// Failures while loading or validating the model artifact. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Model artifact could not be read from [{path}]: {source}")]
    Io {
        path: String,
        source: std::io::Error
    },
    #[error("Model artifact is not valid JSON: {0}")]
    ParseJson(#[from] serde_json::Error),
    #[error("Model declares no features")]
    NoFeatures,
    #[error("Model declares feature [{0}] more than once")]
    DuplicateFeature(String),
    #[error("Model threshold [{0}] is not within 0..=1")]
    InvalidThreshold(f64),
    #[error("Model bias [{0}] is not finite")]
    NonFiniteBias(f64),
    #[error("Feature [{feature}] has a non-finite parameter [{parameter}]")]
    NonFiniteParameter {
        feature: String,
        parameter: String
    },
    #[error("Feature [{feature}] has a non-positive scale [{scale}]")]
    NonPositiveScale {
        feature: String,
        scale: f64
    },
    #[error("Categorical feature [{feature}] imputes level [{level}] which it does not know")]
    UnknownImputedLevel {
        feature: String,
        level: String
    }
}

/// Per-row scoring failures, surfaced to the caller of a single submission.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InferenceError {
    #[error("Row shape does not match the model: expected columns {expected:?}, got {got:?}")]
    ShapeMismatch {
        expected: Vec<String>,
        got: Vec<String>
    },
    #[error("Column [{column}] has unseen category [{level}]")]
    UnknownCategory {
        column: String,
        level: String
    },
    #[error("Column [{column}] is missing and the model has no imputation for it")]
    MissingValue {
        column: String
    },
    #[error("Column [{column}] expected a {expected} value")]
    TypeMismatch {
        column: String,
        expected: &'static str
    },
    #[error("Column [{column}] holds a non-finite value")]
    NonFiniteValue {
        column: String
    }
}

impl InferenceError {
    pub fn unknown_category(column: &str, level: &str) -> Self {
        Self::UnknownCategory { column: column.to_string(), level: level.to_string() }
    }

    pub fn missing_value(column: &str) -> Self {
        Self::MissingValue { column: column.to_string() }
    }

    pub fn type_mismatch(column: &str, expected: &'static str) -> Self {
        Self::TypeMismatch { column: column.to_string(), expected }
    }

    pub fn non_finite_value(column: &str) -> Self {
        Self::NonFiniteValue { column: column.to_string() }
    }
}
