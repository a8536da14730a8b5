//! SVG rendering of the study figures
//!
//! Every figure is drawn on its own canvas with the `plotters` SVG backend.

use std::path::{Path, PathBuf};

use plotters::style::RGBColor;

pub(crate) mod accuracy;
pub(crate) mod likelihood;
pub(crate) mod operator_model;

pub(crate) const ACCURACY_FILE: &str = "accuracy_pie_experiment.svg";
pub(crate) const LIKELIHOOD_FILE: &str = "likelihood_hist.svg";
pub(crate) const OPERATOR_MODEL_FILE: &str = "future_model.svg";

const CANVAS_SIZE: (u32, u32) = (800, 600);
const FONT: &str = "sans-serif";

/// Categorical palette ("deep")
const PALETTE: [RGBColor; 6] = [
    RGBColor(76, 114, 176),
    RGBColor(221, 132, 82),
    RGBColor(85, 168, 104),
    RGBColor(196, 78, 82),
    RGBColor(129, 114, 179),
    RGBColor(147, 120, 96),
];

const ORANGE: RGBColor = RGBColor(0xff, 0x7f, 0x00);

fn palette_color(idx: usize) -> RGBColor {
    PALETTE[idx % PALETTE.len()]
}

pub(crate) fn output_path(dir: &Path, file_name: &str) -> PathBuf {
    dir.join(file_name)
}
