use crate::features::FeatureRow;
use crate::predictor::{Classifier, InferenceError, Label};

/// Outcome of scoring a single row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub label: Label,
    /// Probability of the fraudulent class.
    pub probability: f64
}

impl Prediction {
    pub fn is_fraudulent(&self) -> bool {
        self.label == Label::Fraudulent
    }
}

/// Exposes classification and probability estimation over a pre-trained classifier.
pub struct Predictor<C> {
    classifier: C
}

impl<C: Classifier> Predictor<C> {
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    /// Scores one row, asking the classifier for its label and its positive class probability.
    ///
    /// # Errors
    /// Propagates the classifier's [`InferenceError`] when the row has the wrong shape,
    /// an unseen category or a missing value the model cannot impute.
    pub fn classify(&self, row: &FeatureRow) -> Result<Prediction, InferenceError> {
        let label = self.classifier.predict(row)?;
        let probability = self.classifier.predict_proba(row)?;

        Ok(Prediction { label, probability })
    }
}
