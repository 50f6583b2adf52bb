// src/data_analysis/mod.rs

pub mod channel_stats;
pub mod results_export;
pub mod time_series;

// src/data_analysis/mod.rs
