//! Error types for the classification core.
//!
//! Only invalid input is an error here. A channel with too few samples is a
//! classification outcome (`PatternLabel::InsufficientData`), not a fault.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("temperature length mismatch: {values} value samples, {temperature} temperature samples")]
    LengthMismatch { values: usize, temperature: usize },

    #[error("non-finite sample at index {index}")]
    NonFinite { index: usize },

    #[error("no channels selected for classification")]
    NoChannels,

    #[error("observation has {actual} readings, recording has {expected} channels")]
    ObservationShape { expected: usize, actual: usize },

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
