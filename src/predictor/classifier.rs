use crate::features::FeatureRow;
use crate::predictor::InferenceError;

/// Binary verdict of a classifier.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Label {
    Legitimate,
    Fraudulent
}

impl Label {
    /// 1 for fraudulent, 0 for legitimate.
    pub fn indicator(&self) -> u8 {
        match self {
            Label::Legitimate => 0,
            Label::Fraudulent => 1
        }
    }
}

/// A pre-trained binary classifier over framed rows.
///
/// Implementations must be deterministic and must not mutate state between
/// calls: the same row always yields the same label and probability.
pub trait Classifier: Send + Sync {
    fn predict(&self, row: &FeatureRow) -> Result<Label, InferenceError>;

    /// Estimated probability of the positive (fraudulent) class, within `[0, 1]`.
    fn predict_proba(&self, row: &FeatureRow) -> Result<f64, InferenceError>;
}

impl<C: Classifier + ?Sized> Classifier for &C {
    fn predict(&self, row: &FeatureRow) -> Result<Label, InferenceError> {
        (**self).predict(row)
    }

    fn predict_proba(&self, row: &FeatureRow) -> Result<f64, InferenceError> {
        (**self).predict_proba(row)
    }
}
