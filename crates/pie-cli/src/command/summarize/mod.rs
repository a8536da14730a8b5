//! Summary command
//!
//! Classifies every row of the experiment logs and prints accuracy and
//! missing rates per subject and per condition.

mod table;

use std::path::PathBuf;

use clap::Args;
use pie_analysis::classify::AnnotatedRow;
use serde::Serialize;

use crate::{command::args::LogInputArg, data::StudyData, util::Output};

#[derive(Debug, Clone, Default, Args)]
pub(crate) struct SummarizeArg {
    #[clap(flatten)]
    pub input: LogInputArg,

    /// Write the per-subject summary to this CSV file
    #[arg(long)]
    pub summary_output: Option<PathBuf>,

    /// Write every classified log row to this CSV file
    #[arg(long)]
    pub rows_output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SummarizeArg) -> anyhow::Result<()> {
    let data = StudyData::load(&arg.input)?;
    print_report(&data);

    if let Some(path) = &arg.summary_output {
        save_subject_summary(&data, path.clone())?;
    }
    if let Some(path) = &arg.rows_output {
        Output::save_csv(data.rows.iter().map(AnnotatedRowRecord::from), path.clone())?;
        log::info!("Classified rows saved to: {}", path.display());
    }

    Ok(())
}

pub(crate) fn print_report(data: &StudyData) {
    println!("Intervention Study Summary");
    println!("==========================\n");

    table::print_legend();
    println!();

    println!("Subjects");
    table::print_subject_table(&data.subjects);
    println!();

    println!("Conditions");
    table::print_condition_table(&data.conditions);
}

pub(crate) fn save_subject_summary(data: &StudyData, path: PathBuf) -> anyhow::Result<()> {
    let display = path.display().to_string();
    Output::save_csv(&data.subjects, path)?;
    log::info!("Subject summary saved to: {display}");
    Ok(())
}

/// Flat CSV form of a classified log row
#[derive(Debug, Serialize)]
struct AnnotatedRowRecord<'a> {
    id: &'a str,
    last_state: f64,
    state: f64,
    subject: &'a str,
    task: &'a str,
    int_length: f64,
    correct: i8,
    response: i8,
}

impl<'a> From<&'a AnnotatedRow> for AnnotatedRowRecord<'a> {
    fn from(annotated: &'a AnnotatedRow) -> Self {
        let AnnotatedRow { row, class } = annotated;
        Self {
            id: &row.id,
            last_state: row.last_state,
            state: row.state,
            subject: &row.subject,
            task: row.task.code(),
            int_length: row.int_length.0,
            correct: class.correct.code(),
            response: class.response.code(),
        }
    }
}
