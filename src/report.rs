//! Score reporting port
//!
//! The hosting chat platform wants the final score of each run. How it gets
//! there (HTTP, a queue, nothing at all) is the embedder's business; the
//! session only ever sees a `SessionListener`.

use serde::{Deserialize, Serialize};

use crate::error::ReportError;
use crate::session::SessionListener;

/// Final score of one run, shaped like the score endpoint's request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub score: u32,
    /// Platform user the score belongs to, when known
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub user_id: Option<i64>,
}

impl ScoreReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Outbound score sink
pub trait ScoreReporter {
    fn report(&mut self, report: &ScoreReport) -> Result<(), ReportError>;
}

/// Writes reports to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl ScoreReporter for LogReporter {
    fn report(&mut self, report: &ScoreReport) -> Result<(), ReportError> {
        log::info!("Final score {} (user {:?})", report.score, report.user_id);
        Ok(())
    }
}

/// Keeps reports in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryReporter {
    pub reports: Vec<ScoreReport>,
}

impl ScoreReporter for MemoryReporter {
    fn report(&mut self, report: &ScoreReport) -> Result<(), ReportError> {
        self.reports.push(report.clone());
        Ok(())
    }
}

/// Forwards game-over scores to a reporter
///
/// Reporter failures are logged and dropped; the session never sees them.
#[derive(Debug, Clone, Default)]
pub struct ReportingListener<R> {
    reporter: R,
    user_id: Option<i64>,
    failures: u32,
}

impl<R: ScoreReporter> ReportingListener<R> {
    pub fn new(reporter: R, user_id: Option<i64>) -> Self {
        Self {
            reporter,
            user_id,
            failures: 0,
        }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Reports that failed to go out
    pub fn failures(&self) -> u32 {
        self.failures
    }
}

impl<R: ScoreReporter> SessionListener for ReportingListener<R> {
    fn on_game_over(&mut self, final_score: u32) {
        let report = ScoreReport {
            score: final_score,
            user_id: self.user_id,
        };
        if let Err(e) = self.reporter.report(&report) {
            self.failures += 1;
            log::warn!("Failed to report score {}: {}", final_score, e);
        }
    }
}
