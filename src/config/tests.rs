use super::{ConfigError, DEFAULT_MODEL_PATH, Settings, parse_log_level};
use anyhow::Result;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn test_settings_default_to_error_level_and_fixed_model_path() -> Result<()> {
    let settings = Settings::from_args(&args(&["fraud-screen", "input.csv"]), None)?;

    assert_eq!(settings.input_path, PathBuf::from("input.csv"));
    assert_eq!(settings.model_path, PathBuf::from(DEFAULT_MODEL_PATH));
    assert_eq!(settings.log_level, LevelFilter::ERROR);

    Ok(())
}

#[test]
fn test_settings_honour_log_level_and_model_override() -> Result<()> {
    let settings = Settings::from_args(&args(&["fraud-screen", "input.csv", "DEBUG"]), Some("/srv/model.json".to_string()))?;

    assert_eq!(settings.model_path, PathBuf::from("/srv/model.json"));
    assert_eq!(settings.log_level, LevelFilter::DEBUG);

    let settings = Settings::from_args(&args(&["fraud-screen", "input.csv"]), Some("  ".to_string()))?;
    assert_eq!(settings.model_path, PathBuf::from(DEFAULT_MODEL_PATH));

    Ok(())
}

#[test]
fn test_settings_require_input_path() {
    assert_eq!(Settings::from_args(&args(&["fraud-screen"]), None), Err(ConfigError::MissingInput));
}

#[test]
fn test_unknown_log_level_falls_back_to_error() {
    assert_eq!(parse_log_level("warn"), LevelFilter::WARN);
    assert_eq!(parse_log_level("Trace"), LevelFilter::TRACE);
    assert_eq!(parse_log_level("off"), LevelFilter::OFF);
    assert_eq!(parse_log_level("verbose"), LevelFilter::ERROR);
}
