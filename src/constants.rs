// src/constants.rs

use plotters::style::colors::full_palette::{BLUE_700, DEEPORANGE_600, GREEN_600, PURPLE_500};
use plotters::style::RGBColor;

// Default input files, relative to the working directory.
pub const DEFAULT_RAW_FILE: &str = "sensor_raw.csv";
pub const DEFAULT_READING_FILES: [&str; 3] = ["reading_acc.csv", "reading_gyr.csv", "reading_fusion.csv"];

// Output file names written into the output directory.
pub const RAW_ANALYSIS_PNG: &str = "sensor_raw_analysis.png";
pub const TILT_COMPARISON_PNG: &str = "tilt_comparison.png";
// The recording app writes its own `<prefix>_results.csv`; never reuse that name.
pub const RESULTS_CSV_SUFFIX: &str = "_analysis.csv";

// Keep every Nth row for plotting. Statistics always use every row.
pub const DEFAULT_DOWNSAMPLE_STRIDE: usize = 10;

// Expected CSV headers.
pub const TIMESTAMP_HEADER: &str = "timestamp";
pub const ANGLE_HEADER: &str = "angle";

// Plot dimensions.
pub const RAW_PLOT_WIDTH: u32 = 1500;
pub const RAW_PLOT_HEIGHT: u32 = 1200;
pub const COMPARISON_PLOT_WIDTH: u32 = 1200;
pub const COMPARISON_PLOT_HEIGHT: u32 = 600;

// Figure titles.
pub const RAW_FIGURE_TITLE: &str = "Raw Sensor Data Analysis";
pub const COMPARISON_FIGURE_TITLE: &str = "Tilt Angle Comparison";
pub const TIME_AXIS_LABEL: &str = "Time (s)";
pub const ANGLE_AXIS_LABEL: &str = "Angle (degrees)";

// Series opacity (0.0 to 1.0).
pub const RAW_SERIES_OPACITY: f64 = 0.7;
pub const COMPARISON_SERIES_OPACITY: f64 = 0.8;

// --- Plot Color Assignments ---
pub const COLOR_RAW_SERIES: &RGBColor = &BLUE_700;
pub const COMPARISON_PALETTE: [&RGBColor; 4] = [&BLUE_700, &DEEPORANGE_600, &GREEN_600, &PURPLE_500];

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Font sizes (pixels)
pub const FONT_SIZE_MAIN_TITLE: i32 = 28;
pub const FONT_SIZE_CHART_TITLE: i32 = 18;
pub const FONT_SIZE_AXIS_LABEL: i32 = 13;
pub const FONT_SIZE_LEGEND: i32 = 14;
pub const FONT_SIZE_MESSAGE: i32 = 20;

// src/constants.rs
