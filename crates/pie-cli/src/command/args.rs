//! Arguments shared between subcommands

use std::path::PathBuf;

use pie_analysis::{exclusion::ExclusionLists, log_file::DEFAULT_SKIPPED_TRIALS};

use crate::util;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct LogInputArg {
    /// Directory containing the `log*.csv` experiment logs
    #[arg(default_value = ".")]
    pub data_dir: PathBuf,
    /// JSON file replacing the built-in exclusion lists
    #[arg(long)]
    pub exclusions: Option<PathBuf>,
    /// Trial numbers to skip (practice blocks, comma-separated)
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SKIPPED_TRIALS)]
    pub skip_trials: Vec<u32>,
}

impl Default for LogInputArg {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            exclusions: None,
            skip_trials: DEFAULT_SKIPPED_TRIALS.to_vec(),
        }
    }
}

impl LogInputArg {
    pub(crate) fn exclusion_lists(&self) -> anyhow::Result<ExclusionLists> {
        match &self.exclusions {
            Some(path) => util::read_json_file("exclusion list", path),
            None => Ok(ExclusionLists::default()),
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct LikelihoodArg {
    /// Traffic light recognition results (CSV with a `likelihood` column)
    #[arg(long, default_value = "tlr_result.csv")]
    pub tlr_result: PathBuf,
    /// Crossing intention prediction results (CSV with a `likelihood` column)
    #[arg(long, default_value = "pie_predict_result_valid.csv")]
    pub pie_result: PathBuf,
    /// Seed for the simulated likelihood samples
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

impl Default for LikelihoodArg {
    fn default() -> Self {
        Self {
            tlr_result: PathBuf::from("tlr_result.csv"),
            pie_result: PathBuf::from("pie_predict_result_valid.csv"),
            seed: 0,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct OutputDirArg {
    /// Directory the SVG files are written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,
}

impl Default for OutputDirArg {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}
