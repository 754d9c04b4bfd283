use super::{FlaggedFraud, Step, TransactionKind, TypeError};
use anyhow::Result;
use std::str::FromStr;

#[test]
fn test_transaction_kind_parses_every_form_option() -> Result<()> {
    let test_cases = vec![
        ("CASH-IN", TransactionKind::CashIn),
        ("CASH-OUT", TransactionKind::CashOut),
        ("DEBIT", TransactionKind::Debit),
        ("PAYMENT", TransactionKind::Payment),
        ("  TRANSFER  ", TransactionKind::Transfer),
    ];

    for (input_string, expected_kind) in test_cases {
        assert_eq!(TransactionKind::from_str(input_string)?, expected_kind);
    }

    Ok(())
}

#[test]
fn test_transaction_kind_rejects_values_outside_the_selector() {
    assert!(matches!(TransactionKind::from_str("CASH_IN"), Err(TypeError::UnknownTransactionKind(_))));
    assert!(TransactionKind::from_str("transfer").is_err());
    assert!(TransactionKind::from_str("").is_err());
}

#[test]
fn test_transaction_kind_display_matches_categorical_level() {
    for kind in TransactionKind::ALL {
        assert_eq!(kind.to_string(), kind.as_str());
    }
}

#[test]
fn test_step_accepts_inclusive_bounds() -> Result<()> {
    assert_eq!(Step::try_from(0)?.value(), 0);
    assert_eq!(Step::try_from(744)?.value(), 744);

    Ok(())
}

#[test]
fn test_step_rejects_values_outside_bounds() {
    assert_eq!(Step::try_from(745), Err(TypeError::StepOutOfRange(745)));
    assert_eq!(Step::try_from(-1), Err(TypeError::StepOutOfRange(-1)));
}

#[test]
fn test_flagged_fraud_only_accepts_binary_indicator() -> Result<()> {
    assert_eq!(FlaggedFraud::try_from(0)?.indicator(), 0);
    assert_eq!(FlaggedFraud::try_from(1)?.indicator(), 1);
    assert_eq!(FlaggedFraud::try_from(2), Err(TypeError::InvalidFlag(2)));

    Ok(())
}
