mod config;
mod engine;
mod features;
mod form;
mod predictor;
#[cfg(test)]
mod test_support;
mod types;

use std::io::{stderr, stdout};
use std::process::exit;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::config::Settings;
use crate::engine::{ReportRow, ScreeningEngine};
use crate::features::FeatureFramer;
use crate::predictor::{registry, Predictor};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("{error}");
            eprintln!("Usage: fraud-screen [input].csv [log_level:optional] > [output].csv");
            eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
            eprintln!("The model is read from {} unless {} is set", config::DEFAULT_MODEL_PATH, config::MODEL_PATH_VARIABLE);
            exit(1);
        }
    };

    setup_logging(settings.log_level);

    //NOTE: Without a model nothing can be scored, so a failed load ends the process here
    let model = registry::shared_model(&settings.model_path)
        .with_context(|| format!("Unable to load model from {}", settings.model_path.display()))?;

    let engine = ScreeningEngine::new(FeatureFramer::default(), Predictor::new(model));

    let timer = Instant::now();
    let screened = engine.run(&settings.input_path).await?;
    let duration = timer.elapsed();

    info!("Screened submissions in: {duration:?}");

    write_results_to_stdout(screened.iter().map(|item| item.report_row()))?;

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the verdict table, keep diagnostics off it
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_results_to_stdout(rows: impl IntoIterator<Item = ReportRow>) -> Result<()> {
    let mut output = csv::Writer::from_writer(stdout().lock());

    for row in rows {
        output.serialize(row)?;
    }

    output.flush()?;

    Ok(())
}
