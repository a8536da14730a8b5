//! Likelihood histogram command

use std::path::Path;

use clap::Args;
use rand::SeedableRng as _;
use rand_pcg::Pcg64;

use crate::{
    command::args::{LikelihoodArg, OutputDirArg},
    plot::{
        self,
        likelihood::{self, Layer, SIMULATION_SAMPLES, SIMULATIONS},
    },
    util,
};

#[derive(Debug, Clone, Default, Args)]
pub(crate) struct PlotLikelihoodArg {
    #[clap(flatten)]
    pub likelihood: LikelihoodArg,

    #[clap(flatten)]
    pub output: OutputDirArg,
}

pub(crate) fn run(arg: &PlotLikelihoodArg) -> anyhow::Result<()> {
    render(&arg.likelihood, &arg.output.output_dir)
}

/// Simulated layers first, then the measured result files.
pub(crate) fn render(arg: &LikelihoodArg, output_dir: &Path) -> anyhow::Result<()> {
    let mut rng = Pcg64::seed_from_u64(arg.seed);
    let mut layers = vec![];
    for simulation in &SIMULATIONS {
        let values = simulation.sample(&mut rng, SIMULATION_SAMPLES)?;
        layers.push(Layer::simulated(simulation, values));
    }

    let measured = [("tlr result", &arg.tlr_result), ("pie result", &arg.pie_result)];
    for (idx, (label, path)) in measured.into_iter().enumerate() {
        let values = util::read_likelihood_file(path)?;
        log::info!("{}: {} likelihood values", path.display(), values.len());
        layers.push(Layer::measured(idx, label, values));
    }

    for layer in &layers {
        log_layer(layer);
    }

    let path = plot::output_path(output_dir, plot::LIKELIHOOD_FILE);
    likelihood::render(&path, &layers)?;
    log::info!("Likelihood histogram saved to: {}", path.display());
    Ok(())
}

fn log_layer(layer: &Layer) {
    let Layer {
        label,
        histogram,
        clipped,
        ..
    } = layer;
    log::info!(
        "{label}: {} values in {} bins",
        histogram.total_count(),
        histogram.bins.len()
    );
    if *clipped > 0 {
        log::info!("{label}: {clipped} values lie outside the 0..1 axis");
    }
    if histogram.excluded > 0 {
        log::warn!("{label}: {} non-numeric values not plotted", histogram.excluded);
    }
}
