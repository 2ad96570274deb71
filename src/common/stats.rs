//! Shared numeric helpers for descriptive statistics
//!
//! Summary conventions match the usual tabular-analysis defaults: sample
//! standard deviation (ddof = 1) and linear-interpolation percentiles.

/// Arithmetic mean; `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (ddof = 1); `None` for fewer than two values
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let sum_sq: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}

/// Percentile with linear interpolation between ranks.
///
/// `sorted` must be in ascending order and `fraction` within `[0.0, 1.0]`
/// (0.25 for the first quartile). Returns `None` for an empty slice.
pub fn percentile(sorted: &[f64], fraction: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    debug_assert!((0.0..=1.0).contains(&fraction));

    let rank = fraction * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let weight = rank - lower as f64;

    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * weight)
}
