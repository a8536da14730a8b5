//! Loading and summarizing the experiment logs

use pie_analysis::{
    classify::AnnotatedRow,
    exclusion::ExclusionLists,
    summary::{ConditionSummary, SubjectSummary},
};

use crate::{command::args::LogInputArg, util};

/// Everything derived from one set of experiment logs
#[derive(Debug)]
pub(crate) struct StudyData {
    pub rows: Vec<AnnotatedRow>,
    pub subjects: Vec<SubjectSummary>,
    pub conditions: Vec<ConditionSummary>,
}

impl StudyData {
    pub(crate) fn load(input: &LogInputArg) -> anyhow::Result<Self> {
        let exclusions = input.exclusion_lists()?;
        let rows = load_rows(input, &exclusions)?;
        if rows.is_empty() {
            anyhow::bail!(
                "No experiment log rows found in {}",
                input.data_dir.display()
            );
        }

        let subjects = SubjectSummary::collect(&rows);
        let conditions = ConditionSummary::collect(&subjects);
        log::info!(
            "Summarized {} rows into {} subject groups and {} conditions",
            rows.len(),
            subjects.len(),
            conditions.len()
        );

        Ok(Self {
            rows,
            subjects,
            conditions,
        })
    }
}

fn load_rows(input: &LogInputArg, exclusions: &ExclusionLists) -> anyhow::Result<Vec<AnnotatedRow>> {
    let mut rows = vec![];
    for path in util::find_log_files(&input.data_dir)? {
        let file = util::parse_log_file_name(&path)?;
        if file.is_skipped(&input.skip_trials) {
            log::info!("{}: skipped (trial {})", path.display(), file.trial);
            continue;
        }

        let file_rows = util::read_log_file(&path, &file)?;
        log::info!("{}: {} rows", path.display(), file_rows.len());
        rows.extend(
            file_rows
                .into_iter()
                .map(|row| AnnotatedRow::new(row, exclusions)),
        );
    }
    Ok(rows)
}
