// src/main.rs

use clap::{Parser, Subcommand};
use log::info;
use std::error::Error;
use std::path::PathBuf;

use imu_tilt_analysis::constants::{DEFAULT_DOWNSAMPLE_STRIDE, DEFAULT_RAW_FILE, DEFAULT_READING_FILES};
use imu_tilt_analysis::plot_framework::FigureConfig;
use imu_tilt_analysis::{compare_readings, process_raw_data, AnalysisOptions};

/// Bias/noise statistics and comparison plots for recorded IMU captures.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Plot every Nth sample (statistics always use every sample)
    #[arg(long, global = true, default_value_t = DEFAULT_DOWNSAMPLE_STRIDE, value_parser = parse_stride)]
    stride: usize,

    /// Directory for the generated PNG and results files
    #[arg(short, long, global = true, default_value = ".")]
    output_dir: PathBuf,

    /// Only write files, do not open the interactive viewer
    #[arg(long, global = true)]
    no_show: bool,

    /// Skip writing the bias/variance results table
    #[arg(long, global = true)]
    no_results: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Accelerometer and gyroscope bias/noise analysis of a raw capture
    Raw {
        #[arg(default_value = DEFAULT_RAW_FILE)]
        input: PathBuf,
    },
    /// Overlay several tilt-angle estimates on one chart
    Compare {
        #[arg(default_values = DEFAULT_READING_FILES)]
        inputs: Vec<PathBuf>,
    },
}

fn parse_stride(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("stride must be at least 1".to_string()),
        Ok(stride) => Ok(stride),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(feature = "viewer")]
fn show(figures: Vec<FigureConfig>) -> Result<(), Box<dyn Error>> {
    imu_tilt_analysis::viewer::show_figures(figures)
}

#[cfg(not(feature = "viewer"))]
fn show(figures: Vec<FigureConfig>) -> Result<(), Box<dyn Error>> {
    if !figures.is_empty() {
        log::warn!("Built without the 'viewer' feature; figures were only written to disk.");
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let options = AnalysisOptions {
        stride: cli.stride,
        output_dir: cli.output_dir,
        export_results: !cli.no_results,
    };

    let (raw_input, reading_inputs) = match cli.command {
        Some(Command::Raw { input }) => (Some(input), None),
        Some(Command::Compare { inputs }) => (None, Some(inputs)),
        None => (
            Some(PathBuf::from(DEFAULT_RAW_FILE)),
            Some(DEFAULT_READING_FILES.into_iter().map(PathBuf::from).collect()),
        ),
    };

    let mut figures = Vec::new();
    if let Some(input) = raw_input {
        let report = process_raw_data(&input, &options)?;
        info!(
            "Raw analysis of {} rows written to '{}'.",
            report.row_count,
            report.image_path.display()
        );
        figures.push(report.figure);
    }
    if let Some(inputs) = reading_inputs {
        let report = compare_readings(&inputs, &options)?;
        info!(
            "Comparison of {} reading(s) written to '{}'.",
            report.readings.len(),
            report.image_path.display()
        );
        figures.push(report.figure);
    }

    if cli.no_show {
        return Ok(());
    }
    show(figures)
}
