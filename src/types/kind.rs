use crate::types::errors::TypeError;
use serde::{de, Deserialize, Deserializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The transaction categories offered by the form's type selector.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum TransactionKind {
    CashIn,
    CashOut,
    Debit,
    Payment,
    Transfer
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 5] = [
        TransactionKind::CashIn,
        TransactionKind::CashOut,
        TransactionKind::Debit,
        TransactionKind::Payment,
        TransactionKind::Transfer
    ];

    /// The categorical level handed to the classifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::CashIn => "CASH-IN",
            TransactionKind::CashOut => "CASH-OUT",
            TransactionKind::Debit => "DEBIT",
            TransactionKind::Payment => "PAYMENT",
            TransactionKind::Transfer => "TRANSFER"
        }
    }
}

impl Display for TransactionKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = TypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        TransactionKind::ALL.into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| TypeError::UnknownTransactionKind(value.to_string()))
    }
}

impl<'de> Deserialize<'de> for TransactionKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        TransactionKind::from_str(&value).map_err(de::Error::custom)
    }
}
