mod framer;
mod row;
#[cfg(test)]
mod tests;

pub use framer::FeatureFramer;
pub use row::{FeatureRow, RawInput};

/// Column list the classifier was trained on, in training order.
pub const EXPECTED_COLUMNS: [&str; 8] = [
    "step",
    "type",
    "amount",
    "oldbalanceOrg",
    "newbalanceOrig",
    "oldbalanceDest",
    "newbalanceDest",
    "isFlaggedFraud"
];

/// A single cell of a feature row.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    Integer(i64),
    Float(f64),
    Category(String),
    /// Placeholder for a column the raw input could not supply.
    Missing
}

impl FeatureValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, FeatureValue::Missing)
    }

    /// Numeric view of the cell, `None` for categories and missing cells.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FeatureValue::Integer(value) => Some(*value as f64),
            FeatureValue::Float(value) => Some(*value),
            FeatureValue::Category(_) | FeatureValue::Missing => None
        }
    }
}
