//! Log file naming
//!
//! Experiment logs are named `log_data_<subject>_<task>_<trial>.csv`. The
//! subject and task of every row come from the file name, and the trial
//! number decides whether the file is a practice block.
//!
//! The trial is always the last field, so a two-field name such as
//! `log_data_1_3.csv` reads the second field as both task and trial.

use std::{fmt, num::ParseIntError, str::FromStr};

use crate::task::Task;

const PREFIX: &str = "log_data_";
const EXTENSION: &str = ".csv";

/// Trials 0 to 2 are practice blocks and never enter the analysis.
pub const DEFAULT_SKIPPED_TRIALS: [u32; 3] = [0, 1, 2];

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ParseLogFileNameError {
    #[display("log file name '{name}' does not end with '.csv'")]
    MissingExtension { name: String },
    #[display("log file name '{name}' must contain subject and task fields")]
    MissingFields { name: String },
    #[display("invalid trial number in log file name '{name}'")]
    InvalidTrial {
        name: String,
        source: ParseIntError,
    },
}

/// Metadata parsed from a log file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFileName {
    /// Subject identifier (first field)
    pub subject: String,
    /// Task condition (second field)
    pub task: Task,
    /// Trial number (last field)
    pub trial: u32,
}

impl LogFileName {
    /// Whether this file belongs to one of the `skipped` trials.
    #[must_use]
    pub fn is_skipped(&self, skipped: &[u32]) -> bool {
        skipped.contains(&self.trial)
    }
}

impl FromStr for LogFileName {
    type Err = ParseLogFileNameError;

    /// Parses a bare file name (no directory components).
    ///
    /// ```
    /// use pie_analysis::{log_file::LogFileName, task::Task};
    ///
    /// let name: LogFileName = "log_data_3_tl_5.csv".parse().unwrap();
    /// assert_eq!(name.subject, "3");
    /// assert_eq!(name.task, Task::TrafficLight);
    /// assert_eq!(name.trial, 5);
    /// ```
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let stem =
            name.strip_suffix(EXTENSION)
                .ok_or_else(|| ParseLogFileNameError::MissingExtension {
                    name: name.to_owned(),
                })?;
        let stem = stem.strip_prefix(PREFIX).unwrap_or(stem);

        let fields = stem.split('_').collect::<Vec<_>>();
        let (subject, task, trial) = match fields[..] {
            [subject, task] => (subject, task, task),
            [subject, task, .., trial] => (subject, task, trial),
            _ => {
                return Err(ParseLogFileNameError::MissingFields {
                    name: name.to_owned(),
                });
            }
        };
        let trial = trial
            .parse()
            .map_err(|source| ParseLogFileNameError::InvalidTrial {
                name: name.to_owned(),
                source,
            })?;

        Ok(Self {
            subject: subject.to_owned(),
            task: task.parse().unwrap_or_else(|never| match never {}),
            trial,
        })
    }
}

impl fmt::Display for LogFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{PREFIX}{}_{}_{}{EXTENSION}",
            self.subject,
            self.task.code(),
            self.trial
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_name() {
        let name: LogFileName = "log_data_12_traj_7.csv".parse().unwrap();
        assert_eq!(
            name,
            LogFileName {
                subject: "12".to_owned(),
                task: Task::Trajectory,
                trial: 7,
            }
        );
        assert_eq!(name.to_string(), "log_data_12_traj_7.csv");
    }

    #[test]
    fn test_extra_fields_use_last_as_trial() {
        let name: LogFileName = "log_data_4_int_extra_3.csv".parse().unwrap();
        assert_eq!(name.subject, "4");
        assert_eq!(name.task, Task::CrossingIntention);
        assert_eq!(name.trial, 3);
    }

    #[test]
    fn test_missing_extension() {
        let err = "log_data_1_tl_3.txt".parse::<LogFileName>().unwrap_err();
        assert!(matches!(err, ParseLogFileNameError::MissingExtension { .. }));
    }

    #[test]
    fn test_two_fields_share_task_and_trial() {
        let name: LogFileName = "log_data_1_3.csv".parse().unwrap();
        assert_eq!(name.subject, "1");
        assert_eq!(name.task, Task::Other("3".to_owned()));
        assert_eq!(name.trial, 3);
    }

    #[test]
    fn test_missing_fields() {
        let err = "log_data_1.csv".parse::<LogFileName>().unwrap_err();
        assert!(matches!(err, ParseLogFileNameError::MissingFields { .. }));
    }

    #[test]
    fn test_non_numeric_trial() {
        let err = "log_data_1_tl_final.csv".parse::<LogFileName>().unwrap_err();
        assert!(matches!(err, ParseLogFileNameError::InvalidTrial { .. }));
        assert!(err.to_string().contains("log_data_1_tl_final.csv"));
    }

    #[test]
    fn test_practice_trials_are_skipped() {
        let practice: LogFileName = "log_data_1_tl_2.csv".parse().unwrap();
        let real: LogFileName = "log_data_1_tl_3.csv".parse().unwrap();
        assert!(practice.is_skipped(&DEFAULT_SKIPPED_TRIALS));
        assert!(!real.is_skipped(&DEFAULT_SKIPPED_TRIALS));
    }
}
