/// Centralized axis and sensor naming utilities
///
/// Provides consistent axis names and CSV column names across the parser,
/// the statistics and the plot functions.
use std::fmt;

pub const AXIS_COUNT: usize = 3;

/// Get all axis names as a static array
pub const AXIS_NAMES: [&str; AXIS_COUNT] = ["X", "Y", "Z"];

/// Lowercase axis suffixes used in CSV column names (`acc_x`, `gyro_z`, ...)
pub const AXIS_SUFFIXES: [&str; AXIS_COUNT] = ["x", "y", "z"];

/// Get the standard axis name for a given index
///
/// # Panics
/// Panics if index is greater than 2
pub fn axis_name(index: usize) -> &'static str {
    match index {
        0 => "X",
        1 => "Y",
        2 => "Z",
        _ => panic!("Invalid axis index: {}. Expected 0 (X), 1 (Y), or 2 (Z)", index),
    }
}

/// The two raw sensor streams recorded in a capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorKind {
    Accelerometer,
    Gyroscope,
}

impl SensorKind {
    /// Sensors in plot column order.
    pub const ALL: [SensorKind; 2] = [SensorKind::Accelerometer, SensorKind::Gyroscope];

    /// CSV column prefix and short name used in exported tables.
    pub fn short_name(self) -> &'static str {
        match self {
            SensorKind::Accelerometer => "acc",
            SensorKind::Gyroscope => "gyro",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SensorKind::Accelerometer => "Accelerometer",
            SensorKind::Gyroscope => "Gyroscope",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            SensorKind::Accelerometer => "g",
            SensorKind::Gyroscope => "rad/s",
        }
    }

    /// CSV header for one axis of this sensor, e.g. `gyro_y`.
    pub fn column_name(self, axis_index: usize) -> String {
        format!("{}_{}", self.short_name(), AXIS_SUFFIXES[axis_index])
    }

    /// Column headers for all three axes in X, Y, Z order.
    pub fn column_names(self) -> [String; AXIS_COUNT] {
        [self.column_name(0), self.column_name(1), self.column_name(2)]
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
