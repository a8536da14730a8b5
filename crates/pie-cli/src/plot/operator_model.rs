//! Operator accuracy model curve

use std::path::Path;

use pie_analysis::operator_model::OperatorModel;
use plotters::prelude::*;

use super::{CANVAS_SIZE, FONT, palette_color};

/// Integer request times the curve is sampled at (`0..END_TIME`)
pub(crate) const END_TIME: u32 = 10;

pub(crate) fn render(path: &Path, model: &OperatorModel) -> anyhow::Result<()> {
    let curve = model.curve(END_TIME);

    let root = SVGBackend::new(path, CANVAS_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..f64::from(END_TIME - 1), 0.0..1.0)?;

    chart
        .configure_mesh()
        .x_desc("given time t_req")
        .y_desc("accuracy")
        .axis_desc_style((FONT, 16))
        .label_style((FONT, 12))
        .draw()?;

    chart.draw_series(LineSeries::new(curve, palette_color(0).stroke_width(2)))?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_writes_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.svg");
        render(&path, &OperatorModel::default()).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("given time t_req"));
    }
}
