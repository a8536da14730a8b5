use std::path::PathBuf;

use clap::Args;
use pie_analysis::exclusion::ExclusionLists;

use crate::util::Output;

#[derive(Debug, Clone, Default, Args)]
pub(crate) struct WriteExclusionsArg {
    /// Output file path (stdout if omitted)
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &WriteExclusionsArg) -> anyhow::Result<()> {
    Output::save_json(&ExclusionLists::default(), arg.output.clone())
}
