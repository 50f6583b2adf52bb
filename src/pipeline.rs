// src/pipeline.rs

// The two analysis routines: each loads its captures, builds a figure,
// writes it as PNG and hands the figure back for interactive display.

use log::info;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::axis_names::{axis_name, SensorKind, AXIS_COUNT};
use crate::constants::{DEFAULT_DOWNSAMPLE_STRIDE, RAW_ANALYSIS_PNG, TILT_COMPARISON_PNG};
use crate::data_analysis::channel_stats::RawSensorStats;
use crate::data_analysis::results_export::write_results_csv;
use crate::data_input::{parse_angle_file, parse_raw_file, reading_label};
use crate::plot_framework::{render_figure_png, FigureConfig};
use crate::plot_functions::plot_raw_sensor_analysis::build_raw_sensor_figure;
use crate::plot_functions::plot_tilt_comparison::{build_tilt_comparison_figure, LabeledReading};

/// Settings shared by both routines.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Keep every Nth row when plotting.
    pub stride: usize,
    /// Directory receiving the PNG and results files. Created if missing.
    pub output_dir: PathBuf,
    /// Write the per-channel bias/variance table next to the raw analysis.
    pub export_results: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            stride: DEFAULT_DOWNSAMPLE_STRIDE,
            output_dir: PathBuf::from("."),
            export_results: true,
        }
    }
}

#[derive(Debug)]
pub struct RawAnalysisReport {
    pub row_count: usize,
    pub stats: RawSensorStats,
    pub figure: FigureConfig,
    pub image_path: PathBuf,
    pub results_path: Option<PathBuf>,
}

#[derive(Debug)]
pub struct ComparisonReport {
    pub readings: Vec<LabeledReading>,
    pub figure: FigureConfig,
    pub image_path: PathBuf,
}

fn prepare_output_dir(output_dir: &Path) -> Result<(), Box<dyn Error>> {
    if !output_dir.as_os_str().is_empty() {
        fs::create_dir_all(output_dir)?;
    }
    Ok(())
}

/// Loads a raw capture, computes per-channel bias/noise over every row and
/// writes the 3 x 2 raw sensor figure.
pub fn process_raw_data(
    input: &Path,
    options: &AnalysisOptions,
) -> Result<RawAnalysisReport, Box<dyn Error>> {
    info!("--- Raw sensor analysis: '{}' ---", input.display());
    let rows = parse_raw_file(input)?;
    let stats = RawSensorStats::from_rows(&rows);

    for sensor in SensorKind::ALL {
        for axis_index in 0..AXIS_COUNT {
            match stats.get(sensor, axis_index) {
                Some(channel) => info!(
                    "  {} {}-axis: bias {:.6} {}, noise {:.6} ({} samples)",
                    sensor,
                    axis_name(axis_index),
                    channel.mean,
                    sensor.unit(),
                    channel.std_dev,
                    channel.count
                ),
                None => info!("  {} {}-axis: no values", sensor, axis_name(axis_index)),
            }
        }
    }

    let figure = build_raw_sensor_figure(&rows, &stats, options.stride);
    prepare_output_dir(&options.output_dir)?;
    let image_path = options.output_dir.join(RAW_ANALYSIS_PNG);
    render_figure_png(&image_path, &figure)?;

    let results_path = if options.export_results {
        Some(write_results_csv(&options.output_dir, input, &stats)?)
    } else {
        None
    };

    Ok(RawAnalysisReport {
        row_count: rows.len(),
        stats,
        figure,
        image_path,
        results_path,
    })
}

/// Loads several angle captures and overlays them on one chart.
pub fn compare_readings(
    inputs: &[PathBuf],
    options: &AnalysisOptions,
) -> Result<ComparisonReport, Box<dyn Error>> {
    info!("--- Tilt angle comparison: {} file(s) ---", inputs.len());
    let mut readings = Vec::with_capacity(inputs.len());
    for input in inputs {
        let rows = parse_angle_file(input)?;
        let label = reading_label(input);
        info!("  '{}' -> '{}' ({} rows)", input.display(), label, rows.len());
        readings.push(LabeledReading { label, rows });
    }

    let figure = build_tilt_comparison_figure(&readings, options.stride);
    prepare_output_dir(&options.output_dir)?;
    let image_path = options.output_dir.join(TILT_COMPARISON_PNG);
    render_figure_png(&image_path, &figure)?;

    Ok(ComparisonReport {
        readings,
        figure,
        image_path,
    })
}

// src/pipeline.rs
