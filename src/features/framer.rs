use crate::features::{EXPECTED_COLUMNS, FeatureRow, FeatureValue, RawInput};
use tracing::debug;

/// Aligns raw keyed input to a fixed column schema.
///
/// Framing never fails: a schema column without a matching raw key is filled
/// with [`FeatureValue::Missing`] and raw keys outside the schema are dropped.
/// Values are copied as-is, range checks belong to the input boundary.
#[derive(Debug, Clone)]
pub struct FeatureFramer {
    columns: Vec<&'static str>
}

impl FeatureFramer {
    pub fn new(columns: &[&'static str]) -> Self {
        Self {
            columns: columns.to_vec()
        }
    }

    pub fn frame(&self, input: &RawInput) -> FeatureRow {
        let cells: Vec<_> = self.columns.iter()
            .map(|column| {
                let value = input.get(column).cloned().unwrap_or(FeatureValue::Missing);
                (*column, value)
            })
            .collect();

        let row = FeatureRow::from_cells(cells);

        for column in row.missing_columns() {
            debug!("Column [{column}] absent from raw input, filled with missing marker");
        }

        row
    }
}

impl Default for FeatureFramer {
    fn default() -> Self {
        Self::new(&EXPECTED_COLUMNS)
    }
}
