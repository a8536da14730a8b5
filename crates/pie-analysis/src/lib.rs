//! Response analysis for the pedestrian-intent / traffic-light intervention study
//!
//! This crate holds the domain model of the study logs and the logic that
//! turns raw responses into per-subject accuracy figures. File IO and plotting
//! live in the command-line crate.
//!
//! # Overview
//!
//! 1. **Name Logs** ([`log_file::LogFileName`]): Subject, task and trial from the file name
//! 2. **Read Rows** ([`record::LogRecord`], [`record::LogRow`]): One row per stimulus
//! 3. **Classify** ([`classify::Classification`]): Correctness and confusion cell per row,
//!    corrected by the [`exclusion::ExclusionLists`]
//! 4. **Aggregate** ([`summary::SubjectSummary`], [`summary::ConditionSummary`]):
//!    Accuracy and missing rate per subject and per condition
//!
//! The [`operator_model::OperatorModel`] is the accuracy model derived from
//! the study for later simulation work.
//!
//! # Example
//!
//! ```
//! use pie_analysis::{
//!     classify::AnnotatedRow,
//!     exclusion::ExclusionLists,
//!     log_file::LogFileName,
//!     record::{IntLength, LogRecord, LogRow},
//!     summary::{ConditionSummary, SubjectSummary},
//! };
//!
//! let file: LogFileName = "log_data_3_tl_5.csv".parse().unwrap();
//! let record = LogRecord {
//!     id: "3_20_300tl".to_owned(),
//!     last_state: 0.0,
//!     state: 1.0,
//!     int_length: IntLength(3.0),
//! };
//! let rows = vec![AnnotatedRow::new(
//!     LogRow::from_record(&file, record),
//!     &ExclusionLists::default(),
//! )];
//!
//! let subjects = SubjectSummary::collect(&rows);
//! let conditions = ConditionSummary::collect(&subjects);
//! assert_eq!(conditions[0].accuracy.count, 1);
//! ```

pub mod classify;
pub mod exclusion;
pub mod log_file;
pub mod operator_model;
pub mod record;
pub mod summary;
pub mod task;
