use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Thresholds for the three pattern tests.
///
/// The defaults reproduce the reference heuristics; every constant is named
/// here so deployments can tune without code changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Minimum sample count for classification. Below this the only result
    /// is `insufficient_data`: standard deviation, correlation, and spectral
    /// estimates are not meaningful on smaller series.
    pub min_samples: usize,
    /// Progressive test: net drift must exceed this many sample standard
    /// deviations.
    pub trend_sigma_factor: f64,
    /// Thermal test: absolute Pearson correlation with the temperature
    /// series must exceed this.
    pub thermal_corr_threshold: f64,
    /// Seasonal test: the low-frequency spectral peak must exceed this many
    /// sample standard deviations.
    pub seasonal_sigma_factor: f64,
    /// Highest DFT bin examined by the seasonal test. The window is bins
    /// 1..=limit; bin 0 carries no energy after mean-centering, and bins
    /// beyond the series length are not examined.
    pub seasonal_bin_limit: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_samples: 5,
            trend_sigma_factor: 2.0,
            thermal_corr_threshold: 0.6,
            seasonal_sigma_factor: 5.0,
            seasonal_bin_limit: 19,
        }
    }
}

impl ClassifierConfig {
    /// Defaults overridden by `PATTERN_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(v) = env_var("PATTERN_MIN_SAMPLES")? {
            config.min_samples = v;
        }
        if let Some(v) = env_var("PATTERN_TREND_SIGMA_FACTOR")? {
            config.trend_sigma_factor = v;
        }
        if let Some(v) = env_var("PATTERN_THERMAL_CORR_THRESHOLD")? {
            config.thermal_corr_threshold = v;
        }
        if let Some(v) = env_var("PATTERN_SEASONAL_SIGMA_FACTOR")? {
            config.seasonal_sigma_factor = v;
        }
        if let Some(v) = env_var("PATTERN_SEASONAL_BIN_LIMIT")? {
            config.seasonal_bin_limit = v;
        }

        Ok(config)
    }
}

fn env_var<T: FromStr>(name: &str) -> Result<Option<T>> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| Error::Config(format!("invalid {name}: {raw}"))),
        Err(_) => Ok(None),
    }
}
