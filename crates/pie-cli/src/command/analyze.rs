//! Full analysis: summary report plus every figure

use std::path::PathBuf;

use clap::Args;
use pie_analysis::operator_model::OperatorModel;

use crate::{
    command::{
        args::{LikelihoodArg, LogInputArg, OutputDirArg},
        plot_likelihood, plot_operator_model, summarize,
    },
    data::StudyData,
    plot::{self, accuracy},
};

#[derive(Debug, Clone, Default, Args)]
pub(crate) struct AnalyzeArg {
    #[clap(flatten)]
    pub input: LogInputArg,

    #[clap(flatten)]
    pub likelihood: LikelihoodArg,

    #[clap(flatten)]
    pub output: OutputDirArg,

    /// Write the per-subject summary to this CSV file
    #[arg(long)]
    pub summary_output: Option<PathBuf>,
}

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let data = StudyData::load(&arg.input)?;
    summarize::print_report(&data);
    if let Some(path) = &arg.summary_output {
        summarize::save_subject_summary(&data, path.clone())?;
    }

    let output_dir = &arg.output.output_dir;
    let path = plot::output_path(output_dir, plot::ACCURACY_FILE);
    accuracy::render(&path, &data.conditions)?;
    log::info!("Accuracy plot saved to: {}", path.display());

    plot_likelihood::render(&arg.likelihood, output_dir)?;
    plot_operator_model::render(&OperatorModel::default(), output_dir)?;
    Ok(())
}
