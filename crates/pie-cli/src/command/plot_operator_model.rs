//! Operator accuracy model command

use std::path::Path;

use clap::Args;
use pie_analysis::operator_model::OperatorModel;

use crate::{
    command::args::OutputDirArg,
    plot::{self, operator_model},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct PlotOperatorModelArg {
    #[clap(flatten)]
    pub output: OutputDirArg,

    /// Request time below which accuracy stays at the minimum
    #[arg(long, default_value_t = OperatorModel::default().min_time)]
    pub min_time: f64,
    /// Accuracy without enough time
    #[arg(long, default_value_t = OperatorModel::default().min_acc)]
    pub min_acc: f64,
    /// Accuracy ceiling
    #[arg(long, default_value_t = OperatorModel::default().max_acc)]
    pub max_acc: f64,
    /// Accuracy gained per second beyond `min_time`
    #[arg(long, default_value_t = OperatorModel::default().slope)]
    pub slope: f64,
}

impl Default for PlotOperatorModelArg {
    fn default() -> Self {
        let OperatorModel {
            min_time,
            min_acc,
            max_acc,
            slope,
        } = OperatorModel::default();
        Self {
            output: OutputDirArg::default(),
            min_time,
            min_acc,
            max_acc,
            slope,
        }
    }
}

impl PlotOperatorModelArg {
    fn model(&self) -> OperatorModel {
        OperatorModel {
            min_time: self.min_time,
            min_acc: self.min_acc,
            max_acc: self.max_acc,
            slope: self.slope,
        }
    }
}

pub(crate) fn run(arg: &PlotOperatorModelArg) -> anyhow::Result<()> {
    render(&arg.model(), &arg.output.output_dir)
}

pub(crate) fn render(model: &OperatorModel, output_dir: &Path) -> anyhow::Result<()> {
    let path = plot::output_path(output_dir, plot::OPERATOR_MODEL_FILE);
    operator_model::render(&path, model)?;
    log::info!("Operator model saved to: {}", path.display());
    Ok(())
}
