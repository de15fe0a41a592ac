//! Low-frequency spectral peak estimation.
//!
//! The seasonal test looks for a dominant repeating component well above the
//! noise floor. Only a fixed low-frequency window of DFT bins is examined:
//! for practical recording lengths that window covers the physically
//! meaningful seasonal range.

use num_complex::Complex;
use rustfft::FftPlanner;

use crate::stats;

/// Maximum DFT magnitude over the bin window `1..=bin_limit`.
///
/// The series is mean-centered before the transform, so bin 0 carries no
/// energy and is skipped. For series shorter than the window the upper bound
/// clamps to `n - 1`. Returns 0.0 when no bin is examinable.
pub fn low_frequency_peak(values: &[f64], bin_limit: usize) -> f64 {
    let n = values.len();
    if n < 2 || bin_limit == 0 {
        return 0.0;
    }

    let mean = stats::mean(values);
    let mut buffer: Vec<Complex<f64>> = values
        .iter()
        .map(|&v| Complex::new(v - mean, 0.0))
        .collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);
    fft.process(&mut buffer);

    let upper = bin_limit.min(n - 1);
    buffer[1..=upper]
        .iter()
        .map(|c| c.norm())
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sinusoid_peak_lands_at_its_bin_magnitude() {
        // Period 10 over 100 samples: all energy at bin 10, magnitude n*A/2.
        let amplitude = 2.0;
        let values: Vec<f64> = (0..100)
            .map(|i| amplitude * (2.0 * std::f64::consts::PI * i as f64 / 10.0).sin())
            .collect();

        let peak = low_frequency_peak(&values, 19);
        assert_relative_eq!(peak, 100.0 * amplitude / 2.0, epsilon = 1e-6);
    }

    #[test]
    fn constant_series_has_no_peak() {
        let values = vec![42.0; 64];
        assert_relative_eq!(low_frequency_peak(&values, 19), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn window_clamps_to_short_series() {
        // Only bins 1..=4 exist for a 5-sample series; must not panic.
        let values = [1.0, 2.0, 1.5, 2.5, 1.0];
        let peak = low_frequency_peak(&values, 19);
        assert!(peak.is_finite());
        assert!(peak > 0.0);
    }

    #[test]
    fn degenerate_inputs_yield_zero() {
        assert_eq!(low_frequency_peak(&[], 19), 0.0);
        assert_eq!(low_frequency_peak(&[1.0], 19), 0.0);
        assert_eq!(low_frequency_peak(&[1.0, 2.0, 3.0], 0), 0.0);
    }
}
