//! Accuracy versus request time point plot

use std::{
    collections::{BTreeMap, BTreeSet},
    path::Path,
};

use pie_analysis::{record::IntLength, summary::ConditionSummary, task::Task};
use plotters::prelude::*;

use super::{CANVAS_SIZE, FONT, palette_color};

/// Draw the mean accuracy of every task per intervention length.
///
/// Intervention lengths are categorical on the x axis. Error bars span one
/// standard deviation around the mean, clipped to the 0..1 y range.
pub(crate) fn render(path: &Path, conditions: &[ConditionSummary]) -> anyhow::Result<()> {
    let lengths = conditions
        .iter()
        .map(|c| c.int_length)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect::<Vec<_>>();
    if lengths.is_empty() {
        anyhow::bail!("No conditions to plot");
    }
    let positions = lengths
        .iter()
        .enumerate()
        .map(|(idx, &length)| Ok((length, i32::try_from(idx)?)))
        .collect::<anyhow::Result<BTreeMap<IntLength, i32>>>()?;
    let last_position = i32::try_from(lengths.len() - 1)?;
    let tasks = conditions.iter().map(|c| &c.task).collect::<BTreeSet<_>>();

    let root = SVGBackend::new(path, CANVAS_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d((0..last_position).into_segmented(), 0.0..1.0)?;

    let format_length = |value: &SegmentValue<i32>| match value {
        SegmentValue::CenterOf(idx) | SegmentValue::Exact(idx) => usize::try_from(*idx)
            .ok()
            .and_then(|idx| lengths.get(idx))
            .map(ToString::to_string)
            .unwrap_or_default(),
        SegmentValue::Last => String::new(),
    };
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(lengths.len())
        .x_label_formatter(&format_length)
        .y_labels(11)
        .x_desc("request time [s]")
        .y_desc("accuracy [%]")
        .axis_desc_style((FONT, 18))
        .label_style((FONT, 14))
        .draw()?;

    for (task, hue) in hue_indices(tasks) {
        let color = palette_color(hue);
        let points = conditions
            .iter()
            .filter(|c| &c.task == task)
            .map(|c| (positions[&c.int_length], c.accuracy.mean, c.accuracy.std_dev))
            .collect::<Vec<_>>();

        chart
            .draw_series(LineSeries::new(
                points
                    .iter()
                    .map(|&(x, mean, _)| (SegmentValue::CenterOf(x), mean)),
                color.stroke_width(2),
            ))?
            .label(task.label())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        chart.draw_series(
            points
                .iter()
                .map(|&(x, mean, _)| Circle::new((SegmentValue::CenterOf(x), mean), 4, color.filled())),
        )?;
        chart.draw_series(points.iter().map(|&(x, mean, sd)| {
            ErrorBar::new_vertical(
                SegmentValue::CenterOf(x),
                (mean - sd).max(0.0),
                mean,
                (mean + sd).min(1.0),
                color.stroke_width(2),
                12,
            )
        }))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .label_font((FONT, 14))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Palette slot per task: known tasks keep their plot-order slot whether or
/// not the others are present, other tasks follow in sorted order.
fn hue_indices<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<(&'a Task, usize)> {
    let mut next_other = Task::PLOT_ORDER.len();
    tasks
        .into_iter()
        .map(|task| {
            let hue = task.hue_index().unwrap_or_else(|| {
                next_other += 1;
                next_other - 1
            });
            (task, hue)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_is_fixed_per_task() {
        let gaze = Task::Other("gaze".to_owned());
        let tasks = [&Task::CrossingIntention, &Task::Trajectory, &gaze];
        let hues = hue_indices(tasks)
            .into_iter()
            .map(|(_, hue)| hue)
            .collect::<Vec<_>>();
        assert_eq!(hues, [1, 2, 3]);
    }

    #[test]
    fn test_other_tasks_follow_known_ones() {
        let a = Task::Other("a".to_owned());
        let b = Task::Other("b".to_owned());
        let tasks = [&Task::TrafficLight, &a, &b];
        let hues = hue_indices(tasks)
            .into_iter()
            .map(|(_, hue)| hue)
            .collect::<Vec<_>>();
        assert_eq!(hues, [0, 3, 4]);
    }
}
