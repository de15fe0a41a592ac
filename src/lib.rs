//! Rule-based pattern classification for structural sensor time series.
//!
//! Consumes cleaned per-channel sample sequences (plus an optional
//! temperature series) and labels each channel with the qualitative movement
//! patterns it exhibits: progressive drift, thermally-correlated movement,
//! and seasonal/periodic oscillation.

pub mod analysis;
pub mod classifier;
pub mod config;
pub mod error;
pub mod labels;
pub mod provider;
pub mod spectrum;
pub mod stats;


pub use analysis::{classify_all, ChannelOutcome, ChannelReport, Classification};
pub use classifier::PatternClassifier;
pub use config::ClassifierConfig;
pub use error::{Error, Result};
pub use labels::{LabelSet, PatternLabel};
pub use provider::{Channel, PreparedSeries, Recording, SeriesProvider};
