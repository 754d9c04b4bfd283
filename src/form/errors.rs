use crate::types::TypeError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormError {
    #[error("Field [{field}] is invalid: {source}")]
    InvalidField {
        field: &'static str,
        source: TypeError
    },
    #[error("Field [{field}] must not be negative, got [{value}]")]
    NegativeAmount {
        field: &'static str,
        value: String
    },
    #[error("Field [{field}] must be a finite number, got [{value}]")]
    NonFinite {
        field: &'static str,
        value: String
    },
    #[error("Submission could not be read: {0}")]
    Malformed(String)
}

impl FormError {
    pub fn invalid_field(field: &'static str, source: TypeError) -> Self {
        Self::InvalidField { field, source }
    }

    pub fn negative_amount(field: &'static str, value: impl ToString) -> Self {
        Self::NegativeAmount { field, value: value.to_string() }
    }

    pub fn non_finite(field: &'static str, value: impl ToString) -> Self {
        Self::NonFinite { field, value: value.to_string() }
    }
}

impl From<csv::Error> for FormError {
    fn from(error: csv::Error) -> Self {
        Self::Malformed(error.to_string())
    }
}
