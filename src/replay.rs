//! Replay of recorded remote failures
//!
//! Runs a batch of recorded remote failures through the classifier and
//! reports what each one would surface as locally.

use log::{debug, info, warn};

use crate::classify::{classify, classify_create};
use crate::config::ReplayConfig;
use crate::error::{HdfsError, LocalErrorCode};
use crate::remote::{RemoteError, RemoteFailure};

/// How a recorded failure was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Translated(LocalErrorCode),
    Passthrough,
}

/// A recorded failure together with its classification
#[derive(Debug, Clone)]
pub struct ReplayEntry {
    pub failure: RemoteError,
    pub outcome: Outcome,
}

/// Counts per outcome
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    pub translated: usize,
    pub passthrough: usize,
}

/// Classifies every recorded failure in the configuration
pub fn replay(config: &ReplayConfig) -> Vec<ReplayEntry> {
    info!(
        "Replaying {} recorded failures (create mode: {})",
        config.failures.len(),
        config.create_mode
    );

    config
        .failures
        .iter()
        .map(|failure| {
            let err = HdfsError::Remote(failure.clone());
            let classified = if config.create_mode {
                classify_create(err)
            } else {
                classify(err)
            };

            let outcome = match classified.local_code() {
                Some(code) => {
                    debug!("{} -> {}", failure.exception(), code.name());
                    Outcome::Translated(code)
                }
                None => {
                    warn!(
                        "No local translation for {} from {}",
                        failure.exception(),
                        failure.method()
                    );
                    Outcome::Passthrough
                }
            };

            ReplayEntry {
                failure: failure.clone(),
                outcome,
            }
        })
        .collect()
}

/// Format one replay entry as a report line
pub fn format_entry(entry: &ReplayEntry, show_message: bool) -> String {
    let failure = &entry.failure;
    match entry.outcome {
        Outcome::Translated(code) => format!(
            "{}: {} -> {} ({})",
            failure.method(),
            failure.exception(),
            code.name(),
            code
        ),
        Outcome::Passthrough if show_message && !failure.message().is_empty() => format!(
            "{}: {} -> passthrough\n{}",
            failure.method(),
            failure.exception(),
            failure.message()
        ),
        Outcome::Passthrough => {
            format!("{}: {} -> passthrough", failure.method(), failure.exception())
        }
    }
}

pub fn summarize(entries: &[ReplayEntry]) -> ReplaySummary {
    entries
        .iter()
        .fold(ReplaySummary::default(), |mut summary, entry| {
            match entry.outcome {
                Outcome::Translated(_) => summary.translated += 1,
                Outcome::Passthrough => summary.passthrough += 1,
            }
            summary
        })
}
