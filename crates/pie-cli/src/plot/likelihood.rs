//! Likelihood histograms of simulated and measured recognition results

use std::path::Path;

use pie_stats::histogram::Histogram;
use plotters::prelude::*;
use rand::Rng;
use rand_distr::{Distribution as _, Normal};

use super::{CANVAS_SIZE, FONT, ORANGE, palette_color};

pub(crate) const NUM_BINS: usize = 50;
pub(crate) const SIMULATION_SAMPLES: usize = 10_000;

/// Simulated likelihood distribution `N(mean, std_dev)`
#[derive(Debug, Clone, Copy)]
pub(crate) struct Simulation {
    pub label: &'static str,
    pub mean: f64,
    pub std_dev: f64,
}

pub(crate) const SIMULATIONS: [Simulation; 2] = [
    Simulation {
        label: "pie simulation",
        mean: 0.68,
        std_dev: 0.1,
    },
    Simulation {
        label: "tl simulation",
        mean: 0.95,
        std_dev: 0.1,
    },
];

impl Simulation {
    pub(crate) fn sample<R>(&self, rng: &mut R, count: usize) -> anyhow::Result<Vec<f64>>
    where
        R: Rng + ?Sized,
    {
        let normal = Normal::new(self.mean, self.std_dev)?;
        Ok((0..count).map(|_| normal.sample(rng)).collect())
    }
}

/// One histogram layer of the figure
#[derive(Debug, Clone)]
pub(crate) struct Layer {
    pub label: String,
    pub color: RGBColor,
    pub histogram: Histogram,
    /// Values drawn outside the 0..1 axis (partly or fully hidden)
    pub clipped: usize,
}

impl Layer {
    pub(crate) fn new(label: impl Into<String>, color: RGBColor, values: Vec<f64>) -> Self {
        let clipped = values
            .iter()
            .filter(|v| !(0.0..=1.0).contains(*v))
            .count();
        Self {
            label: label.into(),
            color,
            histogram: Histogram::new(values, NUM_BINS, None),
            clipped,
        }
    }

    pub(crate) fn simulated(simulation: &Simulation, values: Vec<f64>) -> Self {
        Self::new(simulation.label, ORANGE, values)
    }

    /// Measured layers take the categorical palette in order
    pub(crate) fn measured(idx: usize, label: &str, values: Vec<f64>) -> Self {
        Self::new(label, palette_color(idx * 2), values)
    }
}

/// Draw overlaid, half-transparent histograms on a 0..1 likelihood axis.
///
/// Each layer keeps its own bins; the parts of bins outside 0..1 are clipped.
#[expect(clippy::cast_precision_loss)]
pub(crate) fn render(path: &Path, layers: &[Layer]) -> anyhow::Result<()> {
    let max_count = layers
        .iter()
        .map(|layer| layer.histogram.max_count())
        .max()
        .unwrap_or(0)
        .max(1);

    let root = SVGBackend::new(path, CANVAS_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..1.0, 0.0..(max_count as f64 * 1.05))?;

    chart
        .configure_mesh()
        .x_desc("likelihood")
        .y_desc("count")
        .axis_desc_style((FONT, 16))
        .label_style((FONT, 12))
        .draw()?;

    for layer in layers {
        let style = layer.color.mix(0.5).filled();
        let bars = layer.histogram.bins.iter().filter_map(move |bin| {
            let start = bin.range.start.max(0.0);
            let end = bin.range.end.min(1.0);
            (start < end && bin.count > 0)
                .then(|| Rectangle::new([(start, 0.0), (end, bin.count as f64)], style))
        });
        chart
            .draw_series(bars)?
            .label(layer.label.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], style));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font((FONT, 14))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    #[test]
    fn test_simulation_is_seeded() {
        let simulation = SIMULATIONS[0];
        let a = simulation.sample(&mut Pcg64::seed_from_u64(7), 100).unwrap();
        let b = simulation.sample(&mut Pcg64::seed_from_u64(7), 100).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 100);
    }

    #[test]
    fn test_simulation_mean_is_close() {
        let simulation = SIMULATIONS[1];
        let values = simulation
            .sample(&mut Pcg64::seed_from_u64(0), SIMULATION_SAMPLES)
            .unwrap();
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        assert!((mean - simulation.mean).abs() < 0.01);
    }

    #[test]
    fn test_layer_counts_clipped_and_nan_values() {
        let layer = Layer::measured(1, "tlr result", vec![-0.1, 0.3, 0.9, 1.0, 1.4, f64::NAN]);
        assert_eq!(layer.clipped, 3);
        assert_eq!(layer.histogram.excluded, 1);
        assert_eq!(layer.histogram.total_count(), 5);
    }

    #[test]
    fn test_render_writes_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hist.svg");
        let layers = [
            Layer::simulated(&SIMULATIONS[0], vec![0.5, 0.6, 1.2]),
            Layer::measured(0, "measured", vec![0.1, 0.2, 0.2]),
        ];
        render(&path, &layers).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("measured"));
    }
}
