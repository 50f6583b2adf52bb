// src/plot_functions/plot_tilt_comparison.rs

use crate::constants::{
    ANGLE_AXIS_LABEL, COMPARISON_FIGURE_TITLE, COMPARISON_PALETTE, COMPARISON_PLOT_HEIGHT,
    COMPARISON_PLOT_WIDTH, COMPARISON_SERIES_OPACITY, LINE_WIDTH_PLOT, TIME_AXIS_LABEL,
};
use crate::data_analysis::time_series::downsampled_series;
use crate::data_input::sensor_data::AngleSampleRow;
use crate::plot_framework::{FigureConfig, PlotConfig, PlotSeries};

/// One angle-estimate capture with its legend label.
#[derive(Debug, Clone)]
pub struct LabeledReading {
    pub label: String,
    pub rows: Vec<AngleSampleRow>,
}

/// Overlays every reading on a single chart. Each series starts at its own
/// first timestamp and is downsampled by `stride`.
pub fn build_tilt_comparison_figure(readings: &[LabeledReading], stride: usize) -> FigureConfig {
    let series: Vec<PlotSeries> = readings
        .iter()
        .enumerate()
        .map(|(index, reading)| {
            let timestamps: Vec<f64> = reading.rows.iter().map(|row| row.timestamp).collect();
            let angles: Vec<Option<f64>> = reading.rows.iter().map(|row| row.angle).collect();
            PlotSeries {
                data: downsampled_series(&timestamps, &angles, stride),
                label: reading.label.clone(),
                color: *COMPARISON_PALETTE[index % COMPARISON_PALETTE.len()],
                opacity: COMPARISON_SERIES_OPACITY,
                stroke_width: LINE_WIDTH_PLOT,
            }
        })
        .collect();

    let chart = PlotConfig::from_series(
        COMPARISON_FIGURE_TITLE,
        series,
        TIME_AXIS_LABEL,
        ANGLE_AXIS_LABEL,
    );

    FigureConfig {
        title: COMPARISON_FIGURE_TITLE.to_string(),
        rows: 1,
        cols: 1,
        width: COMPARISON_PLOT_WIDTH,
        height: COMPARISON_PLOT_HEIGHT,
        panels: vec![Some(chart)],
    }
}


// src/plot_functions/plot_tilt_comparison.rs
