use crate::features::FeatureFramer;
use crate::form::{FORM_FIELDS, FormError, FormSubmission, RawSubmission};
use crate::predictor::{Classifier, Predictor};
use crate::engine::{Outcome, Screened, Verdict};
use crate::types::LineNumber;
use csv::{Position, ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{debug, error, info, warn};

struct Submission {
    line: LineNumber,
    result: Result<FormSubmission, FormError>
}

impl Submission {
    fn from_record(record: &StringRecord, headers: &StringRecord, collected: &[&str]) -> Self {
        let line = record.position().map(Position::line).unwrap_or_default();
        let result = record.deserialize::<RawSubmission>(Some(headers))
            .map_err(FormError::from)
            .and_then(|raw| FormSubmission::from_raw(raw, collected));

        Self { line, result }
    }
}

/// Screens form submissions one at a time: frame, classify, render.
pub struct ScreeningEngine<C> {
    predictor: Predictor<C>,
    framer: FeatureFramer,
    backpressure: usize
}

impl<C: Classifier> ScreeningEngine<C> {
    /// Creates a new engine that frames rows with `framer` and scores them with `predictor`.
    pub fn new(framer: FeatureFramer, predictor: Predictor<C>) -> Self {
        Self {
            predictor,
            framer,
            backpressure: 256
        }
    }

    /// Screens a single validated submission.
    pub fn screen(&self, submission: &FormSubmission) -> Outcome {
        let row = self.framer.frame(&submission.raw_input());

        match self.predictor.classify(&row) {
            Ok(prediction) => Outcome::Scored(Verdict::new(prediction)),
            Err(error) => Outcome::Failed(error)
        }
    }

    /// Screens every submission of a CSV file, yielding one result per record in file order.
    ///
    /// Every record must have as many cells as the header; short or long records are rejected.
    /// Form controls without a header column are left out of the submission entirely.
    pub async fn run(&self, path: &Path) -> anyhow::Result<Vec<Screened>> {
        let (sender, receiver) = mpsc::channel::<Submission>(self.backpressure);
        let csv_handle = self.spawn_csv_reader(path.to_path_buf(), sender);
        let screened = self.screen_submissions(receiver).await;

        if let Err(error) = csv_handle.await {
            error!("CSV ingestion failed: {error}");
        }

        Ok(screened)
    }

    fn spawn_csv_reader(&self, path: PathBuf, sender: mpsc::Sender<Submission>) -> JoinHandle<()> {
        spawn_blocking(move || {
            let file = match File::open(&path) {
                Ok(file) => file,
                Err(error) => {
                    error!("Error opening CSV at path: {} | {error}", path.display());
                    return;
                }
            };

            let mut reader = ReaderBuilder::new()
                .trim(Trim::All)
                .from_reader(BufReader::new(file));

            let headers = match reader.headers() {
                Ok(headers) => headers.clone(),
                Err(error) => {
                    error!("CSV header error: {error}");
                    return;
                }
            };

            let collected: Vec<&str> = FORM_FIELDS.into_iter()
                .filter(|field| headers.iter().any(|header| header == *field))
                .collect();

            for field in FORM_FIELDS.into_iter().filter(|field| !collected.contains(field)) {
                warn!("Column [{field}] is absent from {}, submissions will carry no value for it", path.display());
            }

            for result in reader.records() {
                let submission = match result {
                    Ok(record) => Submission::from_record(&record, &headers, &collected),
                    Err(error) if error.is_io_error() => {
                        error!("CSV read error: {error}");
                        break;
                    }
                    Err(error) => Submission {
                        line: error.position().map(Position::line).unwrap_or_default(),
                        result: Err(FormError::from(error))
                    }
                };

                if sender.blocking_send(submission).is_err() {
                    break;
                }
            }
        })
    }

    async fn screen_submissions(&self, mut receiver: mpsc::Receiver<Submission>) -> Vec<Screened> {
        let mut screened = Vec::new();

        while let Some(submission) = receiver.recv().await {
            let line = submission.line;

            let outcome = match submission.result {
                Ok(form) => self.screen(&form),
                Err(error) => Outcome::Rejected(error)
            };

            match &outcome {
                Outcome::Scored(verdict) if verdict.is_alert() => warn!("Line [{line}]: {verdict}"),
                Outcome::Scored(verdict) => debug!("Line [{line}]: {verdict}"),
                Outcome::Rejected(error) => warn!("Line [{line}] rejected: {error}"),
                Outcome::Failed(error) => error!("Line [{line}] could not be scored: {error}")
            }

            screened.push(Screened { line, outcome });
        }

        info!("Screened {} submissions", screened.len());

        screened
    }
}
