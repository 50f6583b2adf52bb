// src/data_analysis/time_series.rs

/// Converts absolute timestamps into seconds since the first sample.
pub fn relative_times(timestamps: &[f64]) -> Vec<f64> {
    match timestamps.first() {
        Some(&t0) => timestamps.iter().map(|&t| t - t0).collect(),
        None => Vec::new(),
    }
}

/// Keeps every `stride`-th item, starting with the first one.
/// A stride of zero keeps everything.
pub fn downsample<T: Clone>(items: &[T], stride: usize) -> Vec<T> {
    items.iter().step_by(stride.max(1)).cloned().collect()
}

/// Pairs relative time with a channel, downsampled.
/// Missing or non-finite values become NaN so the plotted line breaks there.
pub fn downsampled_series(
    timestamps: &[f64],
    values: &[Option<f64>],
    stride: usize,
) -> Vec<(f64, f64)> {
    let times = relative_times(timestamps);
    let pairs: Vec<(f64, Option<f64>)> = times.into_iter().zip(values.iter().copied()).collect();
    downsample(&pairs, stride)
        .into_iter()
        .map(|(t, v)| (t, v.filter(|v| v.is_finite()).unwrap_or(f64::NAN)))
        .collect()
}


// src/data_analysis/time_series.rs
