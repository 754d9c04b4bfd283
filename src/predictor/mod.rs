mod adapter;
mod classifier;
mod errors;
mod math;
mod model;
pub mod registry;

pub use adapter::{Prediction, Predictor};
pub use classifier::{Classifier, Label};
pub use errors::{InferenceError, ModelError};
pub use model::LogisticModel;
