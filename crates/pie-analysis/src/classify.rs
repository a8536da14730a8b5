//! Response classification
//!
//! Turns the recorded response of each log row into a correctness flag and a
//! confusion-matrix cell, after applying the [`ExclusionLists`].
//!
//! # Procedure
//!
//! 1. Rows listed as mislabeled get their `last_state` replaced by
//!    [`MISLABELED_STATE`].
//! 2. A `last_state` of [`NO_INTERVENTION_STATE`] means the subject did not
//!    respond: both `correct` and `response` are missing (`-1`).
//! 3. Otherwise the integer parts of `last_state` and `state` are compared.
//!    A recorded response that *equals* the logged state counts as incorrect,
//!    a differing one as correct. Rows in the opposite-annotation list invert
//!    this.
//! 4. The response cell combines the answered state with correctness. A
//!    `last_state` other than 0 or 1 (the mislabeled sentinel included) is
//!    reported and coded as [`Response::Ignored`].
//!
//! # Codes
//!
//! | `correct` | meaning   |   | `response` | answered | correct |
//! |-----------|-----------|---|------------|----------|---------|
//! | -1        | missing   |   | -1         | none     | -       |
//! | 0         | incorrect |   | 0          | 0        | yes     |
//! | 1         | correct   |   | 1          | 1        | no      |
//! |           |           |   | 2          | 0        | no      |
//! |           |           |   | 3          | 1        | yes     |
//! |           |           |   | 4          | other    | -       |

use crate::{exclusion::ExclusionLists, record::LogRow};

/// Recorded `last_state` when the subject did not intervene.
pub const NO_INTERVENTION_STATE: f64 = -1.0;

/// `last_state` substituted for rows whose ground truth is mislabeled.
pub const MISLABELED_STATE: f64 = -2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Correctness {
    Missing,
    Incorrect,
    Correct,
}

impl Correctness {
    #[must_use]
    pub fn code(self) -> i8 {
        match self {
            Correctness::Missing => -1,
            Correctness::Incorrect => 0,
            Correctness::Correct => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Response {
    /// No intervention was recorded.
    Missing,
    /// A binary answer was recorded.
    Answered {
        /// `true` when `last_state` was 1, `false` when it was 0
        positive: bool,
        correct: bool,
    },
    /// `last_state` held an unexpected value.
    Ignored,
}

impl Response {
    #[must_use]
    pub fn code(self) -> i8 {
        match self {
            Response::Missing => -1,
            Response::Answered {
                positive: false,
                correct: true,
            } => 0,
            Response::Answered {
                positive: true,
                correct: false,
            } => 1,
            Response::Answered {
                positive: false,
                correct: false,
            } => 2,
            Response::Answered {
                positive: true,
                correct: true,
            } => 3,
            Response::Ignored => 4,
        }
    }
}

/// Derived labels of a single log row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub correct: Correctness,
    pub response: Response,
}

impl Classification {
    pub const MISSING: Self = Self {
        correct: Correctness::Missing,
        response: Response::Missing,
    };

    /// Classifies one row against the exclusion lists.
    ///
    /// ```
    /// use pie_analysis::{
    ///     classify::Classification,
    ///     exclusion::ExclusionLists,
    ///     log_file::LogFileName,
    ///     record::{IntLength, LogRecord, LogRow},
    /// };
    ///
    /// let file: LogFileName = "log_data_3_tl_5.csv".parse().unwrap();
    /// let row = LogRow::from_record(
    ///     &file,
    ///     LogRecord {
    ///         id: "3_16_259tl".to_owned(),
    ///         last_state: 1.0,
    ///         state: 1.0,
    ///         int_length: IntLength(3.0),
    ///     },
    /// );
    /// let class = Classification::of(&row, &ExclusionLists::default());
    /// assert_eq!(class.correct.code(), 1);
    /// assert_eq!(class.response.code(), 3);
    /// ```
    #[allow(clippy::float_cmp)]
    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn of(row: &LogRow, exclusions: &ExclusionLists) -> Self {
        let last_state = if exclusions.is_mislabeled(&row.id) {
            MISLABELED_STATE
        } else {
            row.last_state
        };

        if last_state == NO_INTERVENTION_STATE {
            return Self::MISSING;
        }

        let same_state = last_state as i64 == row.state as i64;
        let flipped = exclusions.is_opposite_annotation(&row.id);
        let correct = same_state == flipped;

        let response = if last_state == 1.0 {
            Response::Answered {
                positive: true,
                correct,
            }
        } else if last_state == 0.0 {
            Response::Answered {
                positive: false,
                correct,
            }
        } else {
            log::warn!(
                "unexpected last_state {last_state} (state {}) for {}",
                row.state,
                row.id
            );
            Response::Ignored
        };

        Self {
            correct: if correct {
                Correctness::Correct
            } else {
                Correctness::Incorrect
            },
            response,
        }
    }
}

/// A log row together with its classification.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedRow {
    pub row: LogRow,
    pub class: Classification,
}

impl AnnotatedRow {
    #[must_use]
    pub fn new(row: LogRow, exclusions: &ExclusionLists) -> Self {
        let class = Classification::of(&row, exclusions);
        Self { row, class }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        log_file::LogFileName,
        record::{IntLength, LogRecord},
    };

    fn row(id: &str, last_state: f64, state: f64) -> LogRow {
        let file: LogFileName = "log_data_3_tl_5.csv".parse().unwrap();
        LogRow::from_record(
            &file,
            LogRecord {
                id: id.to_owned(),
                last_state,
                state,
                int_length: IntLength(3.0),
            },
        )
    }

    fn codes(class: Classification) -> (i8, i8) {
        (class.correct.code(), class.response.code())
    }

    #[test]
    fn test_no_intervention_is_missing() {
        let lists = ExclusionLists::default();
        for (id, state) in [("x", 0.0), ("x", 1.0), ("3_16_259tl", 1.0)] {
            let class = Classification::of(&row(id, -1.0, state), &lists);
            assert_eq!(class, Classification::MISSING);
            assert_eq!(codes(class), (-1, -1));
        }
    }

    #[test]
    fn test_plain_rows() {
        let lists = ExclusionLists::default();
        assert_eq!(codes(Classification::of(&row("x", 1.0, 1.0), &lists)), (0, 1));
        assert_eq!(codes(Classification::of(&row("x", 0.0, 0.0), &lists)), (0, 2));
        assert_eq!(codes(Classification::of(&row("x", 1.0, 0.0), &lists)), (1, 3));
        assert_eq!(codes(Classification::of(&row("x", 0.0, 1.0), &lists)), (1, 0));
    }

    #[test]
    fn test_opposite_annotation_flips_correctness() {
        let lists = ExclusionLists::default();
        let id = "3_16_259tl";
        assert_eq!(codes(Classification::of(&row(id, 1.0, 1.0), &lists)), (1, 3));
        assert_eq!(codes(Classification::of(&row(id, 0.0, 0.0), &lists)), (1, 0));
        assert_eq!(codes(Classification::of(&row(id, 1.0, 0.0), &lists)), (0, 1));
        assert_eq!(codes(Classification::of(&row(id, 0.0, 1.0), &lists)), (0, 2));
    }

    #[test]
    fn test_mislabeled_rows_are_ignored() {
        let lists = ExclusionLists::default();
        for last_state in [-1.0, 0.0, 1.0] {
            let class = Classification::of(&row("3_5_112tl", last_state, 1.0), &lists);
            assert_eq!(class.response, Response::Ignored);
            assert_ne!(class.correct, Correctness::Missing);
        }
    }

    #[test]
    fn test_unexpected_state_is_ignored() {
        let lists = ExclusionLists::empty();
        let class = Classification::of(&row("x", 2.0, 1.0), &lists);
        assert_eq!(codes(class), (1, 4));
    }

    #[test]
    fn test_empty_lists_do_not_flip() {
        let lists = ExclusionLists::empty();
        let class = Classification::of(&row("3_16_259tl", 1.0, 1.0), &lists);
        assert_eq!(codes(class), (0, 1));
    }

    #[test]
    fn test_annotated_row_keeps_row() {
        let annotated = AnnotatedRow::new(row("x", 0.0, 1.0), &ExclusionLists::default());
        assert_eq!(annotated.row.id, "x");
        assert_eq!(annotated.class.correct, Correctness::Correct);
    }
}
