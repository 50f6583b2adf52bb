// src/data_input/csv_parser.rs

use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use log::{debug, info, warn};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::axis_names::{SensorKind, AXIS_COUNT};
use crate::constants::{ANGLE_HEADER, TIMESTAMP_HEADER};
use crate::data_input::input_error::InputError;
use crate::data_input::sensor_data::{AngleSampleRow, RawSampleRow};

fn get_optional_f64(record: &StringRecord, index: usize) -> Option<f64> {
    record.get(index).and_then(|s| s.trim().parse::<f64>().ok())
}

fn get_f64_axes(record: &StringRecord, indices: &[usize]) -> [Option<f64>; AXIS_COUNT] {
    [
        get_optional_f64(record, indices[0]),
        get_optional_f64(record, indices[1]),
        get_optional_f64(record, indices[2]),
    ]
}

/// Opens a capture, reads its header row and maps every required header to its CSV column.
/// Header matching ignores surrounding whitespace; column order and extra columns are free.
fn open_with_headers(
    path: &Path,
    required_headers: &[&str],
) -> Result<(Reader<BufReader<File>>, Vec<usize>), InputError> {
    let file = File::open(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(BufReader::new(file));

    let header_record = reader
        .headers()
        .map_err(|source| InputError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .clone();
    debug!("Headers found in '{}': {:?}", path.display(), header_record);

    let mut header_indices = Vec::with_capacity(required_headers.len());
    let mut missing = Vec::new();
    for &target_header in required_headers {
        match header_record.iter().position(|h| h.trim() == target_header) {
            Some(csv_idx) => header_indices.push(csv_idx),
            None => missing.push(target_header.to_string()),
        }
    }

    if !missing.is_empty() {
        return Err(InputError::MissingColumns {
            path: path.to_path_buf(),
            missing,
        });
    }
    Ok((reader, header_indices))
}

/// Reads every data row. `header_indices[0]` must be the timestamp column.
/// Rows that cannot be read or whose timestamp does not parse are skipped with a warning.
fn read_rows<T, F>(
    path: &Path,
    required_headers: &[&str],
    mut build_row: F,
) -> Result<Vec<T>, InputError>
where
    F: FnMut(f64, &StringRecord, &[usize]) -> T,
{
    let (mut reader, header_indices) = open_with_headers(path, required_headers)?;
    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for (row_index, result) in reader.records().enumerate() {
        match result {
            Ok(record) => match get_optional_f64(&record, header_indices[0]) {
                Some(timestamp) if timestamp.is_finite() => {
                    rows.push(build_row(timestamp, &record, &header_indices));
                }
                _ => {
                    warn!(
                        "Skipping row {} of '{}' due to missing or invalid '{}'",
                        row_index + 1,
                        path.display(),
                        TIMESTAMP_HEADER
                    );
                    skipped += 1;
                }
            },
            Err(e) => {
                warn!(
                    "Skipping row {} of '{}' due to CSV read error: {}",
                    row_index + 1,
                    path.display(),
                    e
                );
                skipped += 1;
            }
        }
    }

    if rows.is_empty() {
        return Err(InputError::NoRows {
            path: path.to_path_buf(),
        });
    }

    info!(
        "Read {} rows from '{}' ({} skipped).",
        rows.len(),
        path.display(),
        skipped
    );
    Ok(rows)
}

/// Parses a raw capture with `timestamp`, `acc_x/y/z` and `gyro_x/y/z` columns.
pub fn parse_raw_file(path: &Path) -> Result<Vec<RawSampleRow>, InputError> {
    let acc_headers = SensorKind::Accelerometer.column_names();
    let gyro_headers = SensorKind::Gyroscope.column_names();

    let mut target_headers: Vec<&str> = vec![TIMESTAMP_HEADER]; // 0
    target_headers.extend(acc_headers.iter().map(String::as_str)); // 1, 2, 3
    target_headers.extend(gyro_headers.iter().map(String::as_str)); // 4, 5, 6

    read_rows(path, &target_headers, |timestamp, record, indices| RawSampleRow {
        timestamp,
        acc: get_f64_axes(record, &indices[1..4]),
        gyro: get_f64_axes(record, &indices[4..7]),
    })
}

/// Parses a tilt-angle capture with `timestamp` and `angle` columns.
pub fn parse_angle_file(path: &Path) -> Result<Vec<AngleSampleRow>, InputError> {
    read_rows(
        path,
        &[TIMESTAMP_HEADER, ANGLE_HEADER],
        |timestamp, record, indices| AngleSampleRow {
            timestamp,
            angle: get_optional_f64(record, indices[1]),
        },
    )
}


// src/data_input/csv_parser.rs
