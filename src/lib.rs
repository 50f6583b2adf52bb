// src/lib.rs - Library interface for internal module access

pub mod axis_names;
pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod font_config;
pub mod pipeline;
pub mod plot_framework;
pub mod plot_functions;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use pipeline::{compare_readings, process_raw_data, AnalysisOptions};
