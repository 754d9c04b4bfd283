use std::fmt;
use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::form::FormError;
use crate::predictor::{InferenceError, Prediction};
use crate::types::LineNumber;

/// A successful prediction ready to be shown to the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    pub prediction: Prediction
}

impl Verdict {
    pub fn new(prediction: Prediction) -> Self {
        Self { prediction }
    }

    /// Fraudulent verdicts are rendered in the alert style, legitimate ones in the success style.
    pub fn is_alert(&self) -> bool {
        self.prediction.is_fraudulent()
    }
}

impl Display for Verdict {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        if self.is_alert() {
            write!(formatter, "Fraudulent Transaction Detected! (Probability: {:.2})", self.prediction.probability)
        } else {
            write!(formatter, "Legitimate Transaction (Fraud Probability: {:.2})", self.prediction.probability)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Scored(Verdict),
    /// The submission violated a widget constraint and was never scored.
    Rejected(FormError),
    /// The classifier could not score the framed row.
    Failed(InferenceError)
}

/// Outcome of one submission, tagged with its line in the input table.
#[derive(Debug, Clone, PartialEq)]
pub struct Screened {
    pub line: LineNumber,
    pub outcome: Outcome
}

impl Screened {
    pub fn report_row(&self) -> ReportRow {
        match &self.outcome {
            Outcome::Scored(verdict) => ReportRow {
                line: self.line,
                label: Some(verdict.prediction.label.indicator()),
                probability: Some(format!("{:.4}", verdict.prediction.probability)),
                message: verdict.to_string()
            },
            Outcome::Rejected(error) => ReportRow {
                line: self.line,
                label: None,
                probability: None,
                message: format!("Rejected: {error}")
            },
            Outcome::Failed(error) => ReportRow {
                line: self.line,
                label: None,
                probability: None,
                message: format!("Prediction failed: {error}")
            }
        }
    }
}

/// One line of the rendered result table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub line: LineNumber,
    pub label: Option<u8>,
    pub probability: Option<String>,
    pub message: String
}
