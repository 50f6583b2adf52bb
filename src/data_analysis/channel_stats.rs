// src/data_analysis/channel_stats.rs

use ndarray::Array1;
use ndarray_stats::QuantileExt;
use serde::Serialize;

use crate::axis_names::{SensorKind, AXIS_COUNT};
use crate::data_input::sensor_data::RawSampleRow;

/// Descriptive statistics of one sensor channel.
/// `mean` is the channel bias and `std_dev` its noise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChannelStats {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub variance: f64,
    pub min: f64,
    pub max: f64,
}

/// Computes statistics over the present, non-NaN values of a channel.
///
/// Variance and standard deviation use the sample (N-1) estimator and are NaN
/// for fewer than two values. Returns `None` when no value is present.
pub fn compute_channel_stats(values: &[Option<f64>]) -> Option<ChannelStats> {
    let present: Array1<f64> = values.iter().flatten().copied().filter(|v| !v.is_nan()).collect();
    let count = present.len();
    let mean = present.mean()?;
    let variance = if count > 1 { present.var(1.0) } else { f64::NAN };
    let min = *present.min().ok()?;
    let max = *present.max().ok()?;

    Some(ChannelStats {
        count,
        mean,
        std_dev: variance.sqrt(),
        variance,
        min,
        max,
    })
}

/// Statistics for every channel of a raw capture, `[sensor][axis]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSensorStats {
    channels: [[Option<ChannelStats>; AXIS_COUNT]; 2],
}

impl RawSensorStats {
    pub fn from_rows(rows: &[RawSampleRow]) -> Self {
        let mut stats = Self::default();
        for (sensor_index, sensor) in SensorKind::ALL.iter().enumerate() {
            for axis_index in 0..AXIS_COUNT {
                let column: Vec<Option<f64>> = rows
                    .iter()
                    .map(|row| row.channel(*sensor, axis_index))
                    .collect();
                stats.channels[sensor_index][axis_index] = compute_channel_stats(&column);
            }
        }
        stats
    }

    pub fn get(&self, sensor: SensorKind, axis_index: usize) -> Option<&ChannelStats> {
        let sensor_index = match sensor {
            SensorKind::Accelerometer => 0,
            SensorKind::Gyroscope => 1,
        };
        self.channels[sensor_index][axis_index].as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_mean_and_sample_std() {
        let values = [Some(2.0), Some(4.0), Some(4.0), Some(4.0), Some(5.0), Some(5.0), Some(7.0), Some(9.0)];
        let stats = compute_channel_stats(&values).unwrap();
        assert_eq!(stats.count, 8);
        assert!(approx_eq(stats.mean, 5.0));
        // Sum of squared deviations is 32, N-1 = 7.
        assert!(approx_eq(stats.variance, 32.0 / 7.0));
        assert!(approx_eq(stats.std_dev, (32.0f64 / 7.0).sqrt()));
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 9.0);
    }

    #[test]
    fn test_missing_and_nan_values_are_ignored() {
        let values = [Some(1.0), None, Some(f64::NAN), Some(3.0)];
        let stats = compute_channel_stats(&values).unwrap();
        assert_eq!(stats.count, 2);
        assert!(approx_eq(stats.mean, 2.0));
        assert!(approx_eq(stats.variance, 2.0));
    }

    #[test]
    fn test_single_value_has_nan_spread() {
        let stats = compute_channel_stats(&[Some(0.25)]).unwrap();
        assert_eq!(stats.mean, 0.25);
        assert!(stats.std_dev.is_nan());
        assert!(stats.variance.is_nan());
    }

    #[test]
    fn test_no_values() {
        assert!(compute_channel_stats(&[]).is_none());
        assert!(compute_channel_stats(&[None, None]).is_none());
    }

    #[test]
    fn test_raw_sensor_stats_indexing() {
        let rows = vec![
            RawSampleRow {
                timestamp: 0.0,
                acc: [Some(1.0), Some(0.0), None],
                gyro: [Some(0.1), Some(0.2), Some(0.3)],
            },
            RawSampleRow {
                timestamp: 0.01,
                acc: [Some(3.0), Some(0.0), None],
                gyro: [Some(0.3), Some(0.2), Some(0.5)],
            },
        ];
        let stats = RawSensorStats::from_rows(&rows);
        assert!(approx_eq(stats.get(SensorKind::Accelerometer, 0).unwrap().mean, 2.0));
        assert!(stats.get(SensorKind::Accelerometer, 2).is_none());
        assert!(approx_eq(stats.get(SensorKind::Gyroscope, 2).unwrap().mean, 0.4));
        assert!(approx_eq(stats.get(SensorKind::Gyroscope, 1).unwrap().std_dev, 0.0));
    }
}

// src/data_analysis/channel_stats.rs
