// src/plot_functions/mod.rs

pub mod plot_raw_sensor_analysis;
pub mod plot_tilt_comparison;

// src/plot_functions/mod.rs
