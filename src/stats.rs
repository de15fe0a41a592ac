//! Scalar statistics over sample sequences.

use ndarray::ArrayView1;

/// Sum-of-squares floor below which a series is treated as constant and its
/// correlation as undefined.
const SUM_SQ_FLOOR: f64 = 1e-12;

/// Arithmetic mean. Zero for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    ArrayView1::from(values).mean().unwrap_or(0.0)
}

/// Sample standard deviation (ddof = 1), the noise-scale reference ("sigma")
/// for the trend and spectral tests.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    ArrayView1::from(values).std(1.0)
}

/// Pearson correlation between two equal-length series.
///
/// Returns `None` when either series has zero variance, where the
/// coefficient is undefined. Callers treat that as "no correlation" rather
/// than comparing against NaN.
pub fn pearson(a: &[f64], b: &[f64]) -> Option<f64> {
    debug_assert_eq!(a.len(), b.len());
    if a.len() < 2 {
        return None;
    }

    let mean_a = mean(a);
    let mean_b = mean(b);

    let mut cov = 0.0;
    let mut sum_sq_a = 0.0;
    let mut sum_sq_b = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        let dx = x - mean_a;
        let dy = y - mean_b;
        cov += dx * dy;
        sum_sq_a += dx * dx;
        sum_sq_b += dy * dy;
    }

    if sum_sq_a < SUM_SQ_FLOOR || sum_sq_b < SUM_SQ_FLOOR {
        return None;
    }

    Some(cov / (sum_sq_a * sum_sq_b).sqrt())
}
