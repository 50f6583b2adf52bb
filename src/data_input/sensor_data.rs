// src/data_input/sensor_data.rs

use crate::axis_names::{SensorKind, AXIS_COUNT};

/// One row of a raw capture (`timestamp,acc_x,acc_y,acc_z,gyro_x,gyro_y,gyro_z`).
/// Channel cells that fail to parse are kept as `None`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RawSampleRow {
    pub timestamp: f64,                 // Seconds, arbitrary origin.
    pub acc: [Option<f64>; AXIS_COUNT],  // Acceleration [X, Y, Z] in g.
    pub gyro: [Option<f64>; AXIS_COUNT], // Rotation rate [X, Y, Z] in rad/s.
}

impl RawSampleRow {
    pub fn channel(&self, sensor: SensorKind, axis_index: usize) -> Option<f64> {
        match sensor {
            SensorKind::Accelerometer => self.acc[axis_index],
            SensorKind::Gyroscope => self.gyro[axis_index],
        }
    }
}

/// One row of a tilt-angle capture (`timestamp,angle`), angle in degrees.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AngleSampleRow {
    pub timestamp: f64,
    pub angle: Option<f64>,
}

// src/data_input/sensor_data.rs
