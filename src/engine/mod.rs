mod outcome;
mod screening_engine;

pub use outcome::{Outcome, ReportRow, Screened, Verdict};
pub use screening_engine::ScreeningEngine;
