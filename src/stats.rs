//! Summary statistics for benchmark batches.
//!
//! The heuristic comparison runs many independent searches and reports the
//! mean and spread of wall time and expanded-node counts per heuristic.
//! These helpers are pure functions over the collected samples.

/// Arithmetic mean of the samples.
///
/// # Returns
/// `Some(mean)` for a non-empty slice, `None` otherwise.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation of the samples (n - 1 denominator).
///
/// # Returns
/// `Some(std_dev)` for two or more samples, `None` otherwise — the spread
/// of a single measurement is undefined.
pub fn std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;
    let variance = values
        .iter()
        .map(|value| (value - mean) * (value - mean))
        .sum::<f64>()
        / (values.len() - 1) as f64;
    Some(variance.sqrt())
}
