use super::{EXPECTED_COLUMNS, FeatureFramer, FeatureValue, RawInput};

fn complete_input() -> RawInput {
    RawInput::new()
        .with("step", FeatureValue::Integer(1))
        .with("type", FeatureValue::Category("TRANSFER".to_string()))
        .with("amount", FeatureValue::Float(1000.0))
        .with("oldbalanceOrg", FeatureValue::Float(5000.0))
        .with("newbalanceOrig", FeatureValue::Float(4000.0))
        .with("oldbalanceDest", FeatureValue::Float(1000.0))
        .with("newbalanceDest", FeatureValue::Float(2000.0))
        .with("isFlaggedFraud", FeatureValue::Integer(0))
}

#[test]
fn test_framer_produces_expected_columns_in_declared_order() {
    let row = FeatureFramer::default().frame(&complete_input());

    assert_eq!(row.len(), 8);
    assert_eq!(row.columns().collect::<Vec<_>>(), EXPECTED_COLUMNS.to_vec());
    assert_eq!(row.missing_columns().count(), 0);
}

#[test]
fn test_framer_keeps_reference_scenario_values_in_schema_order() {
    let row = FeatureFramer::default().frame(&complete_input());

    let expected = vec![
        FeatureValue::Integer(1),
        FeatureValue::Category("TRANSFER".to_string()),
        FeatureValue::Float(1000.0),
        FeatureValue::Float(5000.0),
        FeatureValue::Float(4000.0),
        FeatureValue::Float(1000.0),
        FeatureValue::Float(2000.0),
        FeatureValue::Integer(0),
    ];

    assert_eq!(row.values().cloned().collect::<Vec<_>>(), expected);
}

#[test]
fn test_framer_reorders_shuffled_input() {
    let input = RawInput::new()
        .with("isFlaggedFraud", FeatureValue::Integer(1))
        .with("amount", FeatureValue::Float(10.0))
        .with("step", FeatureValue::Integer(744));

    let row = FeatureFramer::default().frame(&input);

    assert_eq!(row.columns().collect::<Vec<_>>(), EXPECTED_COLUMNS.to_vec());
    assert_eq!(row.get("step"), Some(&FeatureValue::Integer(744)));
    assert_eq!(row.get("amount"), Some(&FeatureValue::Float(10.0)));
    assert_eq!(row.get("isFlaggedFraud"), Some(&FeatureValue::Integer(1)));
}

#[test]
fn test_framer_fills_mismatched_name_with_missing_marker() {
    // The sender balance arrives under the form's variable name, not the schema's
    let input = RawInput::new()
        .with("step", FeatureValue::Integer(1))
        .with("type", FeatureValue::Category("TRANSFER".to_string()))
        .with("amount", FeatureValue::Float(1000.0))
        .with("oldbalanceOrg", FeatureValue::Float(5000.0))
        .with("newbalanceOrg", FeatureValue::Float(4000.0))
        .with("oldbalanceDest", FeatureValue::Float(1000.0))
        .with("newbalanceDest", FeatureValue::Float(2000.0))
        .with("isFlaggedFraud", FeatureValue::Integer(0));

    let row = FeatureFramer::default().frame(&input);

    assert_eq!(row.len(), 8);
    assert_eq!(row.get("newbalanceOrig"), Some(&FeatureValue::Missing));
    assert_eq!(row.get("newbalanceOrg"), None);
    assert_eq!(row.missing_columns().collect::<Vec<_>>(), vec!["newbalanceOrig"]);
}

#[test]
fn test_framer_drops_extra_raw_fields() {
    let input = complete_input()
        .with("nameOrig", FeatureValue::Category("C1231006815".to_string()))
        .with("isFraud", FeatureValue::Integer(1));

    let row = FeatureFramer::default().frame(&input);

    assert_eq!(row.len(), 8);
    assert!(row.get("nameOrig").is_none());
    assert!(row.get("isFraud").is_none());
}

#[test]
fn test_framer_turns_empty_input_into_all_missing_row() {
    let row = FeatureFramer::default().frame(&RawInput::new());

    assert_eq!(row.len(), 8);
    assert!(row.values().all(FeatureValue::is_missing));
}

#[test]
fn test_framer_does_not_validate_ranges() {
    let input = complete_input()
        .with("step", FeatureValue::Integer(745));

    // Duplicate keys resolve to the first occurrence
    let row = FeatureFramer::default().frame(&input);
    assert_eq!(row.get("step"), Some(&FeatureValue::Integer(1)));

    let input = RawInput::new().with("step", FeatureValue::Integer(745));
    let row = FeatureFramer::default().frame(&input);
    assert_eq!(row.get("step"), Some(&FeatureValue::Integer(745)));
}

#[test]
fn test_framer_honours_custom_schema() {
    let framer = FeatureFramer::new(&["amount", "step"]);
    let row = framer.frame(&complete_input());

    assert_eq!(row.columns().collect::<Vec<_>>(), vec!["amount", "step"]);
}
