use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::features::{FeatureRow, FeatureValue};
use crate::predictor::math::sigmoid;
use crate::predictor::{Classifier, InferenceError, Label, ModelError};

/// What to do with a categorical level the model never saw during training.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownCategoryPolicy {
    #[default]
    Error,
    /// Treat the level as an all-zero one-hot encoding.
    Ignore
}

/// Preprocessing and weight for a single input column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FeatureSpec {
    /// Standardised as `(x - mean) / scale`, then weighted.
    Numeric {
        name: String,
        mean: f64,
        scale: f64,
        weight: f64,
        #[serde(default)]
        impute: Option<f64>
    },
    /// One-hot encoded, one weight per known level.
    Categorical {
        name: String,
        levels: BTreeMap<String, f64>,
        #[serde(default)]
        impute: Option<String>
    }
}

impl FeatureSpec {
    pub fn name(&self) -> &str {
        match self {
            FeatureSpec::Numeric { name, .. } | FeatureSpec::Categorical { name, .. } => name
        }
    }
}

/// Logistic regression over a fixed, ordered list of columns, loaded from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    pub model_id: String,
    pub model_version: String,
    /// A row is fraudulent when its probability is strictly above this value.
    pub threshold: f64,
    pub bias: f64,
    #[serde(default)]
    pub unknown_categories: UnknownCategoryPolicy,
    pub features: Vec<FeatureSpec>
}

impl LogisticModel {
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let model: Self = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let content = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.display().to_string(),
            source
        })?;

        Self::from_json(&content)
    }

    /// Checks the artifact is structurally sound before it is used for scoring.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.features.is_empty() {
            return Err(ModelError::NoFeatures);
        }

        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ModelError::InvalidThreshold(self.threshold));
        }

        if !self.bias.is_finite() {
            return Err(ModelError::NonFiniteBias(self.bias));
        }

        let mut seen = HashSet::new();

        for feature in &self.features {
            if !seen.insert(feature.name()) {
                return Err(ModelError::DuplicateFeature(feature.name().to_string()));
            }

            match feature {
                FeatureSpec::Numeric { name, mean, scale, weight, impute } => {
                    let parameters = [("mean", Some(*mean)), ("scale", Some(*scale)), ("weight", Some(*weight)), ("impute", *impute)];

                    for (parameter, value) in parameters {
                        if value.is_some_and(|value| !value.is_finite()) {
                            return Err(ModelError::NonFiniteParameter { feature: name.clone(), parameter: parameter.to_string() });
                        }
                    }

                    if *scale <= 0.0 {
                        return Err(ModelError::NonPositiveScale { feature: name.clone(), scale: *scale });
                    }
                }
                FeatureSpec::Categorical { name, levels, impute } => {
                    if let Some((level, _)) = levels.iter().find(|(_, weight)| !weight.is_finite()) {
                        return Err(ModelError::NonFiniteParameter { feature: name.clone(), parameter: level.clone() });
                    }

                    if let Some(level) = impute && !levels.contains_key(level) {
                        return Err(ModelError::UnknownImputedLevel { feature: name.clone(), level: level.clone() });
                    }
                }
            }
        }

        Ok(())
    }

    pub fn feature_names(&self) -> impl Iterator<Item = &str> {
        self.features.iter().map(FeatureSpec::name)
    }

    /// Linear score `bias + sum(contributions)` before the logistic link.
    fn decision_function(&self, row: &FeatureRow) -> Result<f64, InferenceError> {
        self.check_shape(row)?;

        let mut z = self.bias;

        for (feature, value) in self.features.iter().zip(row.values()) {
            z += self.contribution(feature, value)?;
        }

        Ok(z)
    }

    fn check_shape(&self, row: &FeatureRow) -> Result<(), InferenceError> {
        let aligned = row.len() == self.features.len()
            && self.feature_names().zip(row.columns()).all(|(expected, got)| expected == got);

        if aligned {
            return Ok(());
        }

        Err(InferenceError::ShapeMismatch {
            expected: self.feature_names().map(str::to_string).collect(),
            got: row.columns().map(str::to_string).collect()
        })
    }

    fn contribution(&self, feature: &FeatureSpec, value: &FeatureValue) -> Result<f64, InferenceError> {
        let column = feature.name();

        match feature {
            FeatureSpec::Numeric { mean, scale, weight, impute, .. } => {
                let x = match value {
                    FeatureValue::Missing => impute.ok_or_else(|| InferenceError::missing_value(column))?,
                    FeatureValue::Category(_) => return Err(InferenceError::type_mismatch(column, "numeric")),
                    other => other.as_f64().ok_or_else(|| InferenceError::type_mismatch(column, "numeric"))?
                };

                if !x.is_finite() {
                    return Err(InferenceError::non_finite_value(column));
                }

                Ok(weight * (x - mean) / scale)
            }
            FeatureSpec::Categorical { levels, impute, .. } => {
                let level = match value {
                    FeatureValue::Category(level) => level.as_str(),
                    FeatureValue::Missing => impute.as_deref().ok_or_else(|| InferenceError::missing_value(column))?,
                    _ => return Err(InferenceError::type_mismatch(column, "categorical"))
                };

                match (levels.get(level), self.unknown_categories) {
                    (Some(weight), _) => Ok(*weight),
                    (None, UnknownCategoryPolicy::Ignore) => {
                        debug!("Column [{column}] has unseen category [{level}], ignored");
                        Ok(0.0)
                    }
                    (None, UnknownCategoryPolicy::Error) => Err(InferenceError::unknown_category(column, level))
                }
            }
        }
    }
}

impl Classifier for LogisticModel {
    fn predict(&self, row: &FeatureRow) -> Result<Label, InferenceError> {
        let probability = self.predict_proba(row)?;

        if probability > self.threshold {
            Ok(Label::Fraudulent)
        } else {
            Ok(Label::Legitimate)
        }
    }

    fn predict_proba(&self, row: &FeatureRow) -> Result<f64, InferenceError> {
        Ok(sigmoid(self.decision_function(row)?))
    }
}
