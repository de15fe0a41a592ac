use tracing::debug;

use crate::config::ClassifierConfig;
use crate::error::{Error, Result};
use crate::labels::{LabelSet, PatternLabel};
use crate::{spectrum, stats};

/// Rule-based classifier for one sensor channel.
///
/// Stateless: every call evaluates the configured tests against its inputs
/// alone. No model is fit or persisted. The three tests are additive, so a
/// channel can carry several labels; `none` and `insufficient_data` only
/// appear alone.
#[derive(Debug, Clone, Default)]
pub struct PatternClassifier {
    config: ClassifierConfig,
}

impl PatternClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify one channel's samples, optionally against a co-indexed
    /// temperature series of equal length.
    ///
    /// Fails fast on invalid input: non-finite samples or a temperature
    /// series of different length. Too few samples is not an error; it
    /// yields the `insufficient_data` sentinel.
    pub fn classify(&self, values: &[f64], temperature: Option<&[f64]>) -> Result<LabelSet> {
        check_finite(values)?;
        if let Some(temp) = temperature {
            if temp.len() != values.len() {
                return Err(Error::LengthMismatch {
                    values: values.len(),
                    temperature: temp.len(),
                });
            }
            check_finite(temp)?;
        }

        if values.len() < self.config.min_samples {
            debug!(
                samples = values.len(),
                floor = self.config.min_samples,
                "below classification floor"
            );
            return Ok(LabelSet::sentinel(PatternLabel::InsufficientData));
        }

        let sigma = stats::std_dev(values);
        let mut labels = LabelSet::new();

        // Progressive trend: net drift beyond the series' own dispersion.
        let delta = (values[values.len() - 1] - values[0]).abs();
        if delta > self.config.trend_sigma_factor * sigma {
            debug!(delta, sigma, "progressive trend detected");
            labels.insert(PatternLabel::Progressive);
        }

        // Thermal correlation. An undefined coefficient (zero variance on
        // either side) does not trigger.
        if let Some(temp) = temperature {
            if let Some(r) = stats::pearson(values, temp) {
                if r.abs() > self.config.thermal_corr_threshold {
                    debug!(correlation = r, "thermal correlation detected");
                    labels.insert(PatternLabel::Thermal);
                }
            }
        }

        // Seasonal oscillation: dominant low-frequency spectral peak.
        let peak = spectrum::low_frequency_peak(values, self.config.seasonal_bin_limit);
        if peak > self.config.seasonal_sigma_factor * sigma {
            debug!(peak, sigma, "seasonal spectral peak detected");
            labels.insert(PatternLabel::Seasonal);
        }

        if labels.is_empty() {
            labels.insert(PatternLabel::None);
        }
        Ok(labels)
    }
}

fn check_finite(values: &[f64]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(Error::NonFinite { index }),
        None => Ok(()),
    }
}
