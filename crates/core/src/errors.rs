//! Core error types for the holidays service.
//!
//! Source failures never surface here: the resolver and merger recover from
//! them and report an empty result instead. Only caller input can fail.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the holidays service.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Validation errors for caller input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Year {year} is outside the supported range {min}-{max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}
