//! Per-subject and per-condition aggregation
//!
//! Classified rows are grouped by (subject, task, intervention length) into
//! [`SubjectSummary`] values, which are in turn grouped by (task,
//! intervention length) into [`ConditionSummary`] values: the means and
//! standard deviations drawn in the accuracy plot.
//!
//! # Rates
//!
//! ```text
//! accuracy = correct / (correct + incorrect + ε)
//! missing  = missing / (rows + ε)
//! ```
//!
//! with ε = [`RATE_EPSILON`]. The ε keeps empty denominators finite and
//! keeps accuracy strictly below 1. Every classified row counts towards the
//! missing-rate denominator, including rows with an ignored response.
//!
//! Groups are emitted in ascending key order, so identical inputs always
//! produce identical summaries.

use std::collections::BTreeMap;

use pie_stats::descriptive::DescriptiveStats;
use serde::Serialize;

use crate::{
    classify::{AnnotatedRow, Correctness},
    record::IntLength,
    task::Task,
};

/// Added to rate denominators.
pub const RATE_EPSILON: f64 = 0.01;

/// Number of rows per correctness class in a group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeCounts {
    pub correct: usize,
    pub incorrect: usize,
    pub missing: usize,
}

impl OutcomeCounts {
    pub fn add(&mut self, correct: Correctness) {
        match correct {
            Correctness::Correct => self.correct += 1,
            Correctness::Incorrect => self.incorrect += 1,
            Correctness::Missing => self.missing += 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.correct + self.incorrect + self.missing
    }

    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        self.correct as f64 / ((self.correct + self.incorrect) as f64 + RATE_EPSILON)
    }

    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn missing_rate(&self) -> f64 {
        self.missing as f64 / (self.total() as f64 + RATE_EPSILON)
    }
}

/// Accuracy and missing rate of one subject in one condition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectSummary {
    pub subject: String,
    pub task: Task,
    pub accuracy: f64,
    pub int_length: IntLength,
    pub missing_rate: f64,
    #[serde(skip)]
    pub counts: OutcomeCounts,
}

impl SubjectSummary {
    /// Aggregates classified rows per (subject, task, intervention length).
    ///
    /// Only keys that occur in `rows` produce a summary.
    ///
    /// ```
    /// use pie_analysis::{
    ///     classify::AnnotatedRow,
    ///     exclusion::ExclusionLists,
    ///     log_file::LogFileName,
    ///     record::{IntLength, LogRecord, LogRow},
    ///     summary::SubjectSummary,
    /// };
    ///
    /// let file: LogFileName = "log_data_1_int_3.csv".parse().unwrap();
    /// let lists = ExclusionLists::default();
    /// let rows = [(0.0, 1.0), (1.0, 1.0), (-1.0, 0.0)]
    ///     .into_iter()
    ///     .map(|(last_state, state)| {
    ///         let record = LogRecord {
    ///             id: "1_1_1int".to_owned(),
    ///             last_state,
    ///             state,
    ///             int_length: IntLength(5.0),
    ///         };
    ///         AnnotatedRow::new(LogRow::from_record(&file, record), &lists)
    ///     })
    ///     .collect::<Vec<_>>();
    ///
    /// let summaries = SubjectSummary::collect(&rows);
    /// assert_eq!(summaries.len(), 1);
    /// assert!((summaries[0].accuracy - 1.0 / 2.01).abs() < 1e-12);
    /// assert!((summaries[0].missing_rate - 1.0 / 3.01).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn collect(rows: &[AnnotatedRow]) -> Vec<Self> {
        let mut groups: BTreeMap<(&str, &Task, IntLength), OutcomeCounts> = BTreeMap::new();
        for AnnotatedRow { row, class } in rows {
            groups
                .entry((row.subject.as_str(), &row.task, row.int_length))
                .or_default()
                .add(class.correct);
        }

        groups
            .into_iter()
            .map(|((subject, task, int_length), counts)| Self {
                subject: subject.to_owned(),
                task: task.clone(),
                accuracy: counts.accuracy(),
                int_length,
                missing_rate: counts.missing_rate(),
                counts,
            })
            .collect()
    }
}

/// Distribution of subject summaries within one (task, intervention length)
/// condition.
#[derive(Debug, Clone)]
pub struct ConditionSummary {
    pub task: Task,
    pub int_length: IntLength,
    pub accuracy: DescriptiveStats,
    pub missing_rate: DescriptiveStats,
}

impl ConditionSummary {
    /// Groups subject summaries per (task, intervention length).
    #[must_use]
    pub fn collect(subjects: &[SubjectSummary]) -> Vec<Self> {
        let mut groups: BTreeMap<(&Task, IntLength), Vec<&SubjectSummary>> = BTreeMap::new();
        for summary in subjects {
            groups
                .entry((&summary.task, summary.int_length))
                .or_default()
                .push(summary);
        }

        groups
            .into_iter()
            .filter_map(|((task, int_length), members)| {
                Some(Self {
                    task: task.clone(),
                    int_length,
                    accuracy: DescriptiveStats::new(members.iter().map(|s| s.accuracy))?,
                    missing_rate: DescriptiveStats::new(members.iter().map(|s| s.missing_rate))?,
                })
            })
            .collect()
    }
}
