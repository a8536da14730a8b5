//! Experiment log rows
//!
//! A log file holds one row per trial stimulus. Only four columns matter to
//! the analysis; any other column in the file is ignored on load:
//!
//! ```text
//! id,last_state,state,int_length,...
//! 3_3_96tl,1,0,3,...
//! ```
//!
//! - `id`: stimulus identifier, matched against the exclusion lists
//! - `last_state`: recorded response (`-1` = no intervention, `0`/`1` = answer)
//! - `state`: ground-truth label
//! - `int_length`: intervention (request time) bucket in seconds

use std::{cmp::Ordering, fmt};

use serde::{Deserialize, Serialize};

use crate::{log_file::LogFileName, task::Task};

/// Intervention length bucket.
///
/// Wraps the raw `f64` column value with a total order so it can be used as a
/// grouping key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntLength(pub f64);

impl PartialEq for IntLength {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for IntLength {}

impl PartialOrd for IntLength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IntLength {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for IntLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// One CSV row as stored in a log file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogRecord {
    pub id: String,
    pub last_state: f64,
    pub state: f64,
    pub int_length: IntLength,
}

/// A log row with the subject and task of the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRow {
    pub id: String,
    pub last_state: f64,
    pub state: f64,
    pub subject: String,
    pub task: Task,
    pub int_length: IntLength,
}

impl LogRow {
    #[must_use]
    pub fn from_record(file: &LogFileName, record: LogRecord) -> Self {
        let LogRecord {
            id,
            last_state,
            state,
            int_length,
        } = record;
        Self {
            id,
            last_state,
            state,
            subject: file.subject.clone(),
            task: file.task.clone(),
            int_length,
        }
    }
}
