use std::path::Path;
use std::sync::OnceLock;

use tracing::info;

use crate::predictor::{LogisticModel, ModelError};

static SHARED_MODEL: OnceLock<LogisticModel> = OnceLock::new();

/// Returns the process-wide model, loading it from `path` on first use.
///
/// The model is read-only once stored and lives until the process exits.
/// Later calls ignore `path` and return the instance loaded first.
pub fn shared_model(path: &Path) -> Result<&'static LogisticModel, ModelError> {
    if let Some(model) = SHARED_MODEL.get() {
        return Ok(model);
    }

    let model = LogisticModel::from_file(path)?;

    info!("Loaded model [{}] version [{}] from [{}]", model.model_id, model.model_version, path.display());

    //NOTE: If two callers race on the first load, the first stored model wins and the other copy is dropped
    Ok(SHARED_MODEL.get_or_init(|| model))
}
