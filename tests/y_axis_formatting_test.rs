// tests/y_axis_formatting_test.rs

use imu_tilt_analysis::plot_framework::format_axis_value;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tilt_angle_axis_formatting() {
        // Angles over a few hundred degrees need no decimals
        let span = 360.0;
        assert_eq!(format_axis_value(-90.0, span), "-90");
        assert_eq!(format_axis_value(44.6, span), "45");
        assert_eq!(format_axis_value(0.0, span), "0");
    }

    #[test]
    fn test_unit_scale_axis_formatting() {
        // Accelerometer around 1 g: one decimal
        let span = 2.0;
        assert_eq!(format_axis_value(0.2, span), "0.2");
        assert_eq!(format_axis_value(1.0, span), "1.0");
        assert_eq!(format_axis_value(-0.8, span), "-0.8");
    }

    #[test]
    fn test_noise_scale_axis_formatting() {
        // Gyroscope noise at rest spans a few hundredths of rad/s
        let span = 0.02;
        assert_eq!(format_axis_value(0.012, span), "0.012");
        assert_eq!(format_axis_value(-0.004, span), "-0.004");

        let span = 0.0005;
        assert_eq!(format_axis_value(0.00025, span), "0.00025");
    }

    #[test]
    fn test_zero_tick_never_negative() {
        assert_eq!(format_axis_value(-1e-18, 0.02), "0.000");
        assert_eq!(format_axis_value(-0.0, 2.0), "0.0");
    }

    #[test]
    fn test_large_values_use_k_and_m_notation() {
        assert_eq!(format_axis_value(1000.0, 5000.0), "1k");
        assert_eq!(format_axis_value(12500.0, 5000.0), "12k"); // 12.5 rounds to even
        assert_eq!(format_axis_value(1_000_000.0, 1e6), "1.0M");
        assert_eq!(format_axis_value(-2_500_000.0, 1e6), "-2.5M");
    }

    #[test]
    fn test_degenerate_span_falls_back_to_two_decimals() {
        assert_eq!(format_axis_value(1.0, 0.0), "1.00");
        assert_eq!(format_axis_value(1.0, f64::NAN), "1.00");
    }
}
