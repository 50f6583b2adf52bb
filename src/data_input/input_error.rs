// src/data_input/input_error.rs

use std::path::PathBuf;

/// Failures while loading a capture file.
#[derive(thiserror::Error, Debug)]
pub enum InputError {
    #[error("cannot open '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV in '{}': {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("'{}' is missing required column(s): {}", .path.display(), .missing.join(", "))]
    MissingColumns { path: PathBuf, missing: Vec<String> },
    #[error("'{}' contains no rows with a valid timestamp", .path.display())]
    NoRows { path: PathBuf },
}

// src/data_input/input_error.rs
