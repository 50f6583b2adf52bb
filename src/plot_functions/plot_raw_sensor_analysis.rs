// src/plot_functions/plot_raw_sensor_analysis.rs

use crate::axis_names::{axis_name, SensorKind, AXIS_COUNT};
use crate::constants::{
    COLOR_RAW_SERIES, LINE_WIDTH_PLOT, RAW_FIGURE_TITLE, RAW_PLOT_HEIGHT, RAW_PLOT_WIDTH,
    RAW_SERIES_OPACITY, TIME_AXIS_LABEL,
};
use crate::data_analysis::channel_stats::RawSensorStats;
use crate::data_analysis::time_series::downsampled_series;
use crate::data_input::sensor_data::RawSampleRow;
use crate::plot_framework::{FigureConfig, PlotConfig, PlotSeries};

/// Chart title carrying the channel's bias (mean) and noise (standard deviation).
fn panel_title(sensor: SensorKind, axis_index: usize, stats: &RawSensorStats) -> String {
    let heading = format!("{} {}-axis", sensor.title(), axis_name(axis_index));
    match stats.get(sensor, axis_index) {
        Some(channel) => format!(
            "{heading}  Bias: {:.6}, Noise: {:.6}",
            channel.mean, channel.std_dev
        ),
        None => heading,
    }
}

/// Builds the 3 x 2 raw sensor figure: one row per axis (X, Y, Z),
/// accelerometer in the left column and gyroscope in the right one.
///
/// Series are downsampled by `stride`; the statistics in the titles come from `stats`,
/// which should be computed over every row.
pub fn build_raw_sensor_figure(
    rows: &[RawSampleRow],
    stats: &RawSensorStats,
    stride: usize,
) -> FigureConfig {
    let timestamps: Vec<f64> = rows.iter().map(|row| row.timestamp).collect();
    let mut panels = Vec::with_capacity(AXIS_COUNT * SensorKind::ALL.len());

    for axis_index in 0..AXIS_COUNT {
        for sensor in SensorKind::ALL {
            let values: Vec<Option<f64>> = rows
                .iter()
                .map(|row| row.channel(sensor, axis_index))
                .collect();
            let series = PlotSeries {
                data: downsampled_series(&timestamps, &values, stride),
                label: format!("{}-axis", axis_name(axis_index)),
                color: *COLOR_RAW_SERIES,
                opacity: RAW_SERIES_OPACITY,
                stroke_width: LINE_WIDTH_PLOT,
            };
            panels.push(Some(PlotConfig::from_series(
                panel_title(sensor, axis_index, stats),
                vec![series],
                TIME_AXIS_LABEL,
                format!("{} ({})", sensor.title(), sensor.unit()),
            )));
        }
    }

    FigureConfig {
        title: RAW_FIGURE_TITLE.to_string(),
        rows: AXIS_COUNT,
        cols: SensorKind::ALL.len(),
        width: RAW_PLOT_WIDTH,
        height: RAW_PLOT_HEIGHT,
        panels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(count: usize) -> Vec<RawSampleRow> {
        (0..count)
            .map(|i| {
                let v = i as f64;
                RawSampleRow {
                    timestamp: 5.0 + v * 0.01,
                    acc: [Some(v), Some(2.0 * v), None],
                    gyro: [Some(-v), Some(0.5), Some(0.25)],
                }
            })
            .collect()
    }

    #[test]
    fn test_layout_axis_rows_sensor_columns() {
        let data = rows(25);
        let stats = RawSensorStats::from_rows(&data);
        let figure = build_raw_sensor_figure(&data, &stats, 10);

        assert_eq!((figure.rows, figure.cols), (3, 2));
        assert_eq!(figure.panels.len(), 6);
        assert_eq!(figure.title, "Raw Sensor Data Analysis");

        let acc_y = figure.panel(1, 0).unwrap();
        assert!(acc_y.title.starts_with("Accelerometer Y-axis  Bias: 24.000000, Noise: "));
        assert_eq!(acc_y.series[0].label, "Y-axis");
        assert_eq!(acc_y.x_label, "Time (s)");

        let gyro_x = figure.panel(0, 1).unwrap();
        assert!(gyro_x.title.starts_with("Gyroscope X-axis"));
    }

    #[test]
    fn test_series_are_downsampled_with_relative_time() {
        let data = rows(25);
        let stats = RawSensorStats::from_rows(&data);
        let figure = build_raw_sensor_figure(&data, &stats, 10);

        let acc_x = &figure.panel(0, 0).unwrap().series[0].data;
        assert_eq!(acc_x.len(), 3);
        assert_eq!(acc_x[0], (0.0, 0.0));
        assert!((acc_x[1].0 - 0.1).abs() < 1e-9);
        assert_eq!(acc_x[2].1, 20.0);
    }

    #[test]
    fn test_empty_channel_keeps_plain_title() {
        let data = rows(5);
        let stats = RawSensorStats::from_rows(&data);
        let figure = build_raw_sensor_figure(&data, &stats, 1);

        let acc_z = figure.panel(2, 0).unwrap();
        assert_eq!(acc_z.title, "Accelerometer Z-axis");
        assert!(!acc_z.has_data());
    }
}

// src/plot_functions/plot_raw_sensor_analysis.rs
