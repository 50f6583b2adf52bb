// src/data_analysis/results_export.rs

use log::info;
use serde::Serialize;
use std::error::Error;
use std::path::{Path, PathBuf};

use crate::axis_names::{SensorKind, AXIS_COUNT, AXIS_SUFFIXES};
use crate::constants::RESULTS_CSV_SUFFIX;
use crate::data_analysis::channel_stats::RawSensorStats;

/// One line of the bias/variance table.
#[derive(Debug, Serialize)]
struct ResultsRow<'a> {
    sensor: &'a str,
    axis: &'a str,
    bias: f64,
    variance: f64,
    noise: f64,
    samples: usize,
}

/// Name of the results table written next to a raw capture:
/// `20250417_101500_raw.csv` -> `20250417_101500_analysis.csv`,
/// `sensor_raw.csv` -> `sensor_analysis.csv`, `capture.csv` -> `capture_analysis.csv`.
pub fn results_file_name(raw_input: &Path) -> String {
    let stem = raw_input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = stem.strip_suffix("_raw").unwrap_or(stem.as_str());
    format!("{base}{RESULTS_CSV_SUFFIX}")
}

/// Writes `sensor,axis,bias,variance,noise,samples` for every channel that has data.
pub fn write_results_csv(
    output_dir: &Path,
    raw_input: &Path,
    stats: &RawSensorStats,
) -> Result<PathBuf, Box<dyn Error>> {
    let output_path = output_dir.join(results_file_name(raw_input));
    let mut writer = csv::Writer::from_path(&output_path)?;

    for sensor in SensorKind::ALL {
        for axis_index in 0..AXIS_COUNT {
            if let Some(channel) = stats.get(sensor, axis_index) {
                writer.serialize(ResultsRow {
                    sensor: sensor.short_name(),
                    axis: AXIS_SUFFIXES[axis_index],
                    bias: channel.mean,
                    variance: channel.variance,
                    noise: channel.std_dev,
                    samples: channel.count,
                })?;
            }
        }
    }
    writer.flush()?;

    info!("Results table saved as '{}'.", output_path.display());
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_input::sensor_data::RawSampleRow;

    #[test]
    fn test_results_file_name() {
        assert_eq!(results_file_name(Path::new("sensor_raw.csv")), "sensor_analysis.csv");
        assert_eq!(
            results_file_name(Path::new("/data/20250417_101500_raw.csv")),
            "20250417_101500_analysis.csv"
        );
        assert_eq!(results_file_name(Path::new("capture.csv")), "capture_analysis.csv");
    }

    #[test]
    fn test_recording_app_results_file_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let raw_input = dir.path().join("20250417_101500_raw.csv");
        let app_results = dir.path().join("20250417_101500_results.csv");
        let app_contents = "acc,x,1.5,1.25\n";
        std::fs::write(&app_results, app_contents).unwrap();

        let rows: Vec<RawSampleRow> = [0.0, 1.0, 2.0, 3.0]
            .iter()
            .map(|&v| RawSampleRow {
                timestamp: v * 0.01,
                acc: [Some(v), None, None],
                gyro: [None, None, None],
            })
            .collect();
        let stats = RawSensorStats::from_rows(&rows);

        let written = write_results_csv(dir.path(), &raw_input, &stats).unwrap();
        assert_ne!(written, app_results);
        assert_eq!(std::fs::read_to_string(&app_results).unwrap(), app_contents);

        let table = std::fs::read_to_string(&written).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "sensor,axis,bias,variance,noise,samples");
        assert!(lines[1].starts_with("acc,x,1.5,1.6666666666666667,"));
        assert!(lines[1].ends_with(",4"));
    }
}

// src/data_analysis/results_export.rs
