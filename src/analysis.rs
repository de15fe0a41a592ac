//! Multi-channel orchestration.
//!
//! Channels are classified in isolation against a shared read-only
//! temperature series, so the per-channel work is embarrassingly parallel
//! and a failing channel never aborts the rest of the run.

use rayon::prelude::*;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::classifier::PatternClassifier;
use crate::error::{Error, Result};
use crate::labels::LabelSet;
use crate::provider::{Channel, SeriesProvider};

/// Outcome of classifying one channel: its label set, or the
/// channel-specific failure.
#[derive(Debug)]
pub enum ChannelOutcome {
    Classified(LabelSet),
    Failed(Error),
}

/// One channel's classification outcome, keyed by channel name.
#[derive(Debug)]
pub struct ChannelReport {
    pub channel: String,
    pub outcome: ChannelOutcome,
}

/// Result of one analysis run: a report per channel, in caller order.
///
/// Built once per run and consumed read-only by reporting collaborators.
#[derive(Debug)]
pub struct Classification {
    reports: Vec<ChannelReport>,
}

impl Classification {
    pub fn reports(&self) -> &[ChannelReport] {
        &self.reports
    }

    /// Labels for a channel, if it was classified successfully.
    pub fn labels(&self, channel: &str) -> Option<&LabelSet> {
        self.reports
            .iter()
            .find(|r| r.channel == channel)
            .and_then(|r| match &r.outcome {
                ChannelOutcome::Classified(labels) => Some(labels),
                ChannelOutcome::Failed(_) => None,
            })
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChannelReport> {
        self.reports.iter()
    }
}

/// Classify every channel independently with the shared temperature series.
///
/// An empty selection is invalid input. Per-channel invalid input is
/// recorded in that channel's report; the other channels still classify.
pub fn classify_all(
    classifier: &PatternClassifier,
    channels: &[Channel],
    temperature: Option<&[f64]>,
) -> Result<Classification> {
    if channels.is_empty() {
        return Err(Error::NoChannels);
    }

    let reports: Vec<ChannelReport> = channels
        .par_iter()
        .map(|channel| {
            let outcome = match classifier.classify(&channel.values, temperature) {
                Ok(labels) => ChannelOutcome::Classified(labels),
                Err(err) => ChannelOutcome::Failed(err),
            };
            ChannelReport {
                channel: channel.name.clone(),
                outcome,
            }
        })
        .collect();

    debug!(channels = reports.len(), "classification run complete");
    Ok(Classification { reports })
}

/// Classify everything a series provider supplies.
pub fn classify_provider<P: SeriesProvider>(
    classifier: &PatternClassifier,
    provider: &P,
) -> Result<Classification> {
    classify_all(classifier, provider.channels(), provider.temperature())
}

impl Serialize for ChannelReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ChannelReport", 2)?;
        state.serialize_field("channel", &self.channel)?;
        match &self.outcome {
            ChannelOutcome::Classified(labels) => state.serialize_field("labels", labels)?,
            ChannelOutcome::Failed(err) => state.serialize_field("error", &err.to_string())?,
        }
        state.end()
    }
}

impl Serialize for Classification {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.reports.serialize(serializer)
    }
}
