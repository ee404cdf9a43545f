//! Derived series and statistics over sampled values.

use crate::data::charge::MSECS_IN_HOUR;
use crate::data::entry::{DataPoint, Entry};

/// Pearson correlation coefficient of `x` and `y`.
///
/// Only the common prefix is used when the lengths differ. Zero variance in
/// either input is not guarded against: the result is then `NaN` (or infinite),
/// and callers must check it.
///
/// ```
/// # use historian_utils::pearson_correlation;
/// let x = [1.0, 2.0, 3.0, 4.0];
/// let y = [2.0, 4.0, 6.0, 8.0];
/// assert!((pearson_correlation(&x, &y) - 1.0).abs() < 1e-12);
/// assert!(pearson_correlation(&x, &[5.0; 4]).is_nan());
/// ```
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    let (x, y) = (&x[..n], &y[..n]);
    let nf = n as f64;
    let mean_x = x.iter().sum::<f64>() / nf;
    let mean_y = y.iter().sum::<f64>() / nf;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (xi, yi) in x.iter().zip(y) {
        let (dx, dy) = (xi - mean_x, yi - mean_y);
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    cov / (var_x * var_y).sqrt()
}

/// Rate of change between consecutive samples, in value units per hour.
///
/// Produces one entry per consecutive pair `(a, b)` spanning
/// `[a.start_time, b.start_time)`. Pairs sharing a timestamp get a rate of `0`.
pub fn generate_derivative(data: &[DataPoint]) -> Vec<Entry> {
    data.windows(2)
        .map(|w| {
            let (a, b) = (w[0], w[1]);
            let dx = (b.start_time - a.start_time) as f64 / MSECS_IN_HOUR;
            let dy = b.value - a.value;
            let rate = if dx == 0.0 { 0.0 } else { dy / dx };
            Entry::new(a.start_time, b.start_time, rate)
        })
        .collect()
}
