use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TypeError {
    #[error("Step [{0}] is outside of the allowed range 0..=744")]
    StepOutOfRange(i64),
    #[error("Transaction type [{0}] is not one of CASH-IN, CASH-OUT, DEBIT, PAYMENT, TRANSFER")]
    UnknownTransactionKind(String),
    #[error("Fraud flag [{0}] must be either 0 or 1")]
    InvalidFlag(i64)
}
