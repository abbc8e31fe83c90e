//! Basic descriptive statistics over metric columns.

/// Arithmetic mean (sum / count).
///
/// Returns NaN for an empty slice; callers guard emptiness before getting
/// here.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Unbiased sample standard deviation (divisor n - 1).
///
/// Returns `None` when fewer than two values are present, where the
/// statistic is undefined. A spread of exactly zero returns `Some(0.0)`.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mu = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - mu) * (v - mu)).sum();
    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}
