#[cfg(test)]
mod tests;

use std::path::PathBuf;

use thiserror::Error;
use tracing::level_filters::LevelFilter;

pub const DEFAULT_MODEL_PATH: &str = "models/fraud_model.json";
pub const MODEL_PATH_VARIABLE: &str = "FRAUD_SCREEN_MODEL";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing input path")]
    MissingInput
}

/// Runtime settings assembled from the command line and the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub input_path: PathBuf,
    pub model_path: PathBuf,
    pub log_level: LevelFilter
}

impl Settings {
    /// Builds settings from `[input].csv [log_level:optional]` and an optional model path override.
    pub fn from_args(args: &[String], model_path_override: Option<String>) -> Result<Self, ConfigError> {
        let input_path = args.get(1).map(PathBuf::from).ok_or(ConfigError::MissingInput)?;

        let log_level = args.get(2)
            .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::ERROR);

        let model_path = model_path_override
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH));

        Ok(Self { input_path, model_path, log_level })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let args: Vec<String> = std::env::args().collect();
        Self::from_args(&args, std::env::var(MODEL_PATH_VARIABLE).ok())
    }
}

/// Accepts any level name `tracing` understands, plus `off`. Anything else falls back to `error`.
pub fn parse_log_level(level: &str) -> LevelFilter {
    level.trim().parse::<LevelFilter>().unwrap_or_else(|_| {
        eprintln!("Unknown log level [{level}], logging errors only");
        LevelFilter::ERROR
    })
}
