use clap::{Parser, Subcommand};

use self::{
    analyze::AnalyzeArg, plot_likelihood::PlotLikelihoodArg,
    plot_operator_model::PlotOperatorModelArg, summarize::SummarizeArg,
    write_exclusions::WriteExclusionsArg,
};

mod analyze;
pub(crate) mod args;
mod plot_likelihood;
mod plot_operator_model;
mod summarize;
mod write_exclusions;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What to run (defaults to `analyze` with default arguments)
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Summarize the experiment logs and render all plots
    Analyze(#[clap(flatten)] AnalyzeArg),
    /// Classify and aggregate the experiment logs without plotting
    Summarize(#[clap(flatten)] SummarizeArg),
    /// Render the likelihood histogram
    PlotLikelihood(#[clap(flatten)] PlotLikelihoodArg),
    /// Render the operator accuracy model curve
    PlotOperatorModel(#[clap(flatten)] PlotOperatorModelArg),
    /// Write the built-in exclusion lists as JSON
    WriteExclusions(#[clap(flatten)] WriteExclusionsArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Analyze(AnalyzeArg::default())) {
        Mode::Analyze(arg) => analyze::run(&arg)?,
        Mode::Summarize(arg) => summarize::run(&arg)?,
        Mode::PlotLikelihood(arg) => plot_likelihood::run(&arg)?,
        Mode::PlotOperatorModel(arg) => plot_operator_model::run(&arg)?,
        Mode::WriteExclusions(arg) => write_exclusions::run(&arg)?,
    }
    Ok(())
}
