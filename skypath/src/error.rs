use thiserror::Error;

use crate::{ephemeris::EphemerisError, time::TimePoint};

/// Errors that may rise when defining the sampled time window
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RangeError {
    /// Start date must strictly precede end date
    #[error("empty time range: start must precede end")]
    EmptyRange,
    /// Step must be a strictly positive, finite number of days
    #[error("non positive sampling step: {0} days")]
    NonPositiveStep(f64),
    /// Step is positive but vanishes once expressed with nanosecond precision
    #[error("sampling step {0} days is below the time resolution")]
    StepTooSmall(f64),
    /// Invalid calendar date description
    #[error("invalid date \"{0}\"")]
    DateParsing(String),
}

/// Errors that may rise when interpreting a sweep configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown body \"{0}\"")]
    UnknownBody(String),
    #[error("invalid ephemeris source \"{0}\"")]
    EphemerisSource(String),
}

/// Errors of the sky path pipeline
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid range: {0}")]
    InvalidRange(#[from] RangeError),
    #[error("position lookup failed at {time}: {source}")]
    PositionLookup {
        /// [TimePoint] for which the ephemeris failed
        time: TimePoint,
        #[source]
        source: EphemerisError,
    },
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
