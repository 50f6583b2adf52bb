// src/data_input/mod.rs

pub mod csv_parser;
pub mod input_error;
pub mod reading_label;
pub mod sensor_data;

pub use csv_parser::{parse_angle_file, parse_raw_file};
pub use input_error::InputError;
pub use reading_label::reading_label;
pub use sensor_data::{AngleSampleRow, RawSampleRow};

// src/data_input/mod.rs
