//! Preprocessed series provider.
//!
//! The classifier assumes time-ordered, finite, gap-free samples. This
//! module owns that contract: `SeriesProvider` is the seam the classifier
//! consumes, and `Recording` turns raw timestamped observations into
//! `PreparedSeries` satisfying it. File parsing and upload handling stay
//! outside the crate.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{Error, Result};

/// One named sensor series, time-ordered with no missing samples.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Channel {
    pub name: String,
    pub values: Vec<f64>,
}

impl Channel {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Source of cleaned series for one analysis run.
pub trait SeriesProvider {
    fn channels(&self) -> &[Channel];

    /// Shared temperature series, co-indexed with every channel.
    fn temperature(&self) -> Option<&[f64]>;
}

/// One raw row: a timestamp, one reading per selected channel, and an
/// optional temperature reading. `None` or non-finite entries mark the row
/// for removal.
#[derive(Debug, Clone)]
pub struct Observation {
    pub timestamp: DateTime<Utc>,
    pub readings: Vec<Option<f64>>,
    pub temperature: Option<f64>,
}

/// Row-oriented preprocessing over raw timestamped observations.
///
/// Rows are sorted by timestamp, and any row with a missing or non-finite
/// entry in a selected column is dropped whole. Dropping whole rows keeps
/// every channel and the temperature series co-indexed.
#[derive(Debug)]
pub struct Recording {
    channel_names: Vec<String>,
    with_temperature: bool,
    rows: Vec<Observation>,
}

impl Recording {
    pub fn new(channel_names: Vec<String>, with_temperature: bool) -> Self {
        Self {
            channel_names,
            with_temperature,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, observation: Observation) -> Result<()> {
        if observation.readings.len() != self.channel_names.len() {
            return Err(Error::ObservationShape {
                expected: self.channel_names.len(),
                actual: observation.readings.len(),
            });
        }
        self.rows.push(observation);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sort, drop invalid rows, and extract per-channel series.
    pub fn prepare(mut self) -> PreparedSeries {
        let with_temperature = self.with_temperature;
        self.rows.sort_by_key(|row| row.timestamp);

        let keep = |row: &Observation| {
            let readings_ok = row
                .readings
                .iter()
                .all(|r| matches!(r, Some(v) if v.is_finite()));
            let temp_ok =
                !with_temperature || matches!(row.temperature, Some(t) if t.is_finite());
            readings_ok && temp_ok
        };
        let rows: Vec<Observation> = self.rows.into_iter().filter(keep).collect();

        let channels = self
            .channel_names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let values = rows
                    .iter()
                    .map(|row| row.readings[i].unwrap_or_default())
                    .collect();
                Channel::new(name.clone(), values)
            })
            .collect();

        let temperature = self
            .with_temperature
            .then(|| rows.iter().map(|row| row.temperature.unwrap_or_default()).collect());

        PreparedSeries {
            channels,
            temperature,
        }
    }
}

/// Cleaned output of `Recording::prepare`, ready for classification.
#[derive(Debug)]
pub struct PreparedSeries {
    channels: Vec<Channel>,
    temperature: Option<Vec<f64>>,
}

impl PreparedSeries {
    /// Wrap series that are already clean and co-indexed.
    pub fn from_parts(channels: Vec<Channel>, temperature: Option<Vec<f64>>) -> Self {
        Self {
            channels,
            temperature,
        }
    }
}

impl SeriesProvider for PreparedSeries {
    fn channels(&self) -> &[Channel] {
        &self.channels
    }

    fn temperature(&self) -> Option<&[f64]> {
        self.temperature.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, minute, 0).unwrap()
    }

    fn row(minute: u32, readings: Vec<Option<f64>>, temperature: Option<f64>) -> Observation {
        Observation {
            timestamp: ts(minute),
            readings,
            temperature,
        }
    }

    #[test]
    fn rows_are_sorted_by_timestamp() {
        let mut rec = Recording::new(vec!["X".into()], false);
        rec.push(row(3, vec![Some(3.0)], None)).unwrap();
        rec.push(row(1, vec![Some(1.0)], None)).unwrap();
        rec.push(row(2, vec![Some(2.0)], None)).unwrap();

        let prepared = rec.prepare();
        assert_eq!(prepared.channels()[0].values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn invalid_rows_are_dropped_whole() {
        let mut rec = Recording::new(vec!["X".into(), "Y".into()], true);
        rec.push(row(0, vec![Some(1.0), Some(10.0)], Some(20.0)))
            .unwrap();
        // Missing Y reading: whole row goes.
        rec.push(row(1, vec![Some(2.0), None], Some(21.0))).unwrap();
        // Non-finite X reading: whole row goes.
        rec.push(row(2, vec![Some(f64::NAN), Some(12.0)], Some(22.0)))
            .unwrap();
        // Missing temperature: whole row goes.
        rec.push(row(3, vec![Some(4.0), Some(13.0)], None)).unwrap();
        rec.push(row(4, vec![Some(5.0), Some(14.0)], Some(24.0)))
            .unwrap();

        let prepared = rec.prepare();
        assert_eq!(prepared.channels()[0].values, vec![1.0, 5.0]);
        assert_eq!(prepared.channels()[1].values, vec![10.0, 14.0]);
        assert_eq!(prepared.temperature(), Some(&[20.0, 24.0][..]));
    }

    #[test]
    fn temperature_ignored_when_not_selected() {
        let mut rec = Recording::new(vec!["X".into()], false);
        rec.push(row(0, vec![Some(1.0)], None)).unwrap();
        rec.push(row(1, vec![Some(2.0)], Some(f64::NAN))).unwrap();

        let prepared = rec.prepare();
        assert_eq!(prepared.channels()[0].values, vec![1.0, 2.0]);
        assert!(prepared.temperature().is_none());
    }

    #[test]
    fn observation_shape_is_validated() {
        let mut rec = Recording::new(vec!["X".into(), "Y".into()], false);
        let err = rec.push(row(0, vec![Some(1.0)], None)).unwrap_err();
        assert!(matches!(
            err,
            Error::ObservationShape {
                expected: 2,
                actual: 1
            }
        ));
    }
}
