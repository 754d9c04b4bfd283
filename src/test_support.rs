use crate::predictor::LogisticModel;

/// Fixture model where only `amount` and `type` carry weight:
/// z = (amount - 1000) / 1000 + weight(type).
pub(crate) const MODEL_JSON: &str = r#"{
    "model_id": "fixture",
    "model_version": "0.0.1",
    "threshold": 0.5,
    "bias": 0.0,
    "features": [
        { "kind": "numeric", "name": "step", "mean": 0.0, "scale": 1.0, "weight": 0.0, "impute": 1.0 },
        { "kind": "categorical", "name": "type", "levels": { "CASH-IN": -1.0, "CASH-OUT": 0.5, "DEBIT": -1.0, "PAYMENT": -2.0, "TRANSFER": 0.0 } },
        { "kind": "numeric", "name": "amount", "mean": 1000.0, "scale": 1000.0, "weight": 1.0 },
        { "kind": "numeric", "name": "oldbalanceOrg", "mean": 0.0, "scale": 1.0, "weight": 0.0, "impute": 0.0 },
        { "kind": "numeric", "name": "newbalanceOrig", "mean": 0.0, "scale": 1.0, "weight": 0.0, "impute": 0.0 },
        { "kind": "numeric", "name": "oldbalanceDest", "mean": 0.0, "scale": 1.0, "weight": 0.0, "impute": 0.0 },
        { "kind": "numeric", "name": "newbalanceDest", "mean": 0.0, "scale": 1.0, "weight": 0.0, "impute": 0.0 },
        { "kind": "numeric", "name": "isFlaggedFraud", "mean": 0.0, "scale": 1.0, "weight": 0.0, "impute": 0.0 }
    ]
}"#;

pub(crate) fn fixture_model() -> anyhow::Result<LogisticModel> {
    Ok(LogisticModel::from_json(MODEL_JSON)?)
}
