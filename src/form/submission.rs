use serde::Deserialize;

use crate::features::{FeatureValue, RawInput};
use crate::form::FormError;
use crate::types::{FlaggedFraud, Step, TransactionKind};

/// Every control the form offers, keyed by the form's own variable names.
pub const FORM_FIELDS: [&str; 8] = [
    "step",
    "type",
    "amount",
    "oldbalanceOrg",
    "newbalanceOrg",
    "oldbalanceDest",
    "newbalanceDest",
    "isFlaggedFraud"
];

const DEFAULT_AMOUNT: f64 = 1000.0;
const DEFAULT_OLD_BALANCE_ORIGIN: f64 = 5000.0;
const DEFAULT_NEW_BALANCE_ORIGIN: f64 = 4000.0;
const DEFAULT_OLD_BALANCE_DESTINATION: f64 = 1000.0;
const DEFAULT_NEW_BALANCE_DESTINATION: f64 = 2000.0;

/// One form submission as it arrives from the input table.
///
/// A blank cell deserializes to `None`, as does a control whose column is absent;
/// [`FormSubmission::from_raw`] tells the two apart.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSubmission {
    pub step: Option<i64>,
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    pub amount: Option<f64>,
    #[serde(rename = "oldbalanceOrg")]
    pub old_balance_origin: Option<f64>,
    #[serde(rename = "newbalanceOrg")]
    pub new_balance_origin: Option<f64>,
    #[serde(rename = "oldbalanceDest")]
    pub old_balance_destination: Option<f64>,
    #[serde(rename = "newbalanceDest")]
    pub new_balance_destination: Option<f64>,
    #[serde(rename = "isFlaggedFraud")]
    pub is_flagged_fraud: Option<i64>
}

/// A submission that passed the widget constraints.
///
/// `None` means the form did not collect that control at all.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSubmission {
    pub step: Option<Step>,
    pub kind: Option<TransactionKind>,
    pub amount: Option<f64>,
    pub old_balance_origin: Option<f64>,
    pub new_balance_origin: Option<f64>,
    pub old_balance_destination: Option<f64>,
    pub new_balance_destination: Option<f64>,
    pub flagged_fraud: Option<FlaggedFraud>
}

impl FormSubmission {
    /// Validates a raw submission whose table carried the `collected` columns.
    ///
    /// A blank cell in a collected column takes the widget's default value,
    /// a column that was not collected stays `None`.
    ///
    /// # Errors
    /// Returns `FormError` when a value violates its widget's constraint.
    pub fn from_raw(raw: RawSubmission, collected: &[&str]) -> Result<Self, FormError> {
        let step = raw.step
            .map(Step::try_from)
            .transpose()
            .map_err(|error| FormError::invalid_field("step", error))?;

        let kind = raw.transaction_type.as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::parse::<TransactionKind>)
            .transpose()
            .map_err(|error| FormError::invalid_field("type", error))?;

        let flagged_fraud = raw.is_flagged_fraud
            .map(FlaggedFraud::try_from)
            .transpose()
            .map_err(|error| FormError::invalid_field("isFlaggedFraud", error))?;

        Ok(Self {
            step: control("step", collected, step, Step::default()),
            kind: control("type", collected, kind, TransactionKind::CashIn),
            amount: control("amount", collected, non_negative("amount", raw.amount)?, DEFAULT_AMOUNT),
            old_balance_origin: control("oldbalanceOrg", collected, non_negative("oldbalanceOrg", raw.old_balance_origin)?, DEFAULT_OLD_BALANCE_ORIGIN),
            new_balance_origin: control("newbalanceOrg", collected, non_negative("newbalanceOrg", raw.new_balance_origin)?, DEFAULT_NEW_BALANCE_ORIGIN),
            old_balance_destination: control("oldbalanceDest", collected, non_negative("oldbalanceDest", raw.old_balance_destination)?, DEFAULT_OLD_BALANCE_DESTINATION),
            new_balance_destination: control("newbalanceDest", collected, non_negative("newbalanceDest", raw.new_balance_destination)?, DEFAULT_NEW_BALANCE_DESTINATION),
            flagged_fraud: control("isFlaggedFraud", collected, flagged_fraud, FlaggedFraud::default())
        })
    }

    /// Exposes the collected controls keyed by the form's own variable names.
    ///
    /// The sender's new balance is keyed `newbalanceOrg`, which is not the
    /// schema's `newbalanceOrig`. Controls that were not collected are left out.
    pub fn raw_input(&self) -> RawInput {
        let controls = [
            ("step", self.step.map(|step| FeatureValue::Integer(i64::from(step.value())))),
            ("type", self.kind.map(|kind| FeatureValue::Category(kind.as_str().to_string()))),
            ("amount", self.amount.map(FeatureValue::Float)),
            ("oldbalanceOrg", self.old_balance_origin.map(FeatureValue::Float)),
            ("newbalanceOrg", self.new_balance_origin.map(FeatureValue::Float)),
            ("oldbalanceDest", self.old_balance_destination.map(FeatureValue::Float)),
            ("newbalanceDest", self.new_balance_destination.map(FeatureValue::Float)),
            ("isFlaggedFraud", self.flagged_fraud.map(|flag| FeatureValue::Integer(flag.indicator())))
        ];

        controls.into_iter()
            .filter_map(|(key, value)| value.map(|value| (key, value)))
            .fold(RawInput::new(), |input, (key, value)| input.with(key, value))
    }
}

/// Every control collected and left at its default value.
impl Default for FormSubmission {
    fn default() -> Self {
        Self {
            step: Some(Step::default()),
            kind: Some(TransactionKind::CashIn),
            amount: Some(DEFAULT_AMOUNT),
            old_balance_origin: Some(DEFAULT_OLD_BALANCE_ORIGIN),
            new_balance_origin: Some(DEFAULT_NEW_BALANCE_ORIGIN),
            old_balance_destination: Some(DEFAULT_OLD_BALANCE_DESTINATION),
            new_balance_destination: Some(DEFAULT_NEW_BALANCE_DESTINATION),
            flagged_fraud: Some(FlaggedFraud::default())
        }
    }
}

fn control<T>(field: &str, collected: &[&str], value: Option<T>, default: T) -> Option<T> {
    collected.iter().any(|name| *name == field).then(|| value.unwrap_or(default))
}

fn non_negative(field: &'static str, value: Option<f64>) -> Result<Option<f64>, FormError> {
    let Some(value) = value else {
        return Ok(None)
    };

    if !value.is_finite() {
        return Err(FormError::non_finite(field, value))
    }

    if value < 0.0 {
        return Err(FormError::negative_amount(field, value))
    }

    Ok(Some(value))
}
