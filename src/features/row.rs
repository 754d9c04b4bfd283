use crate::features::FeatureValue;

/// Raw keyed values as collected from the form, in collection order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawInput {
    entries: Vec<(String, FeatureValue)>
}

impl RawInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: FeatureValue) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: FeatureValue) {
        self.entries.push((key.into(), value));
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&FeatureValue> {
        self.entries.iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }
}

/// A single model-ready row whose columns follow a framer's schema.
///
/// Rows can only be produced by [`FeatureFramer::frame`](crate::features::FeatureFramer::frame),
/// which guarantees that every schema column is present exactly once and in order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    cells: Vec<(&'static str, FeatureValue)>
}

impl FeatureRow {
    pub(super) fn from_cells(cells: Vec<(&'static str, FeatureValue)>) -> Self {
        Self { cells }
    }

    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.cells.iter().map(|(name, _)| *name)
    }

    pub fn values(&self) -> impl Iterator<Item = &FeatureValue> {
        self.cells.iter().map(|(_, value)| value)
    }

    #[cfg(test)]
    pub fn get(&self, column: &str) -> Option<&FeatureValue> {
        self.cells.iter()
            .find(|(name, _)| *name == column)
            .map(|(_, value)| value)
    }

    pub fn missing_columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.cells.iter()
            .filter(|(_, value)| value.is_missing())
            .map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }
}
