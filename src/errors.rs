//! Error types produced while validating inputs or loading configuration.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Identifies which of the two user-supplied fields a rejection refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    /// Cross-sectional area of the channel in square metres.
    Area,
    /// Mean flow velocity in metres per second.
    Velocity,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Area => f.write_str("area"),
            Self::Velocity => f.write_str("velocity"),
        }
    }
}

/// Error returned when the raw area or velocity cannot be used for a calculation.
///
/// This is the only failure of the calculation pipeline. Nothing downstream of the
/// validator runs once it has been produced.
///
/// # Examples
///
/// ```
/// use flowcalc::{validate, InvalidInput};
///
/// let error = validate("0", "1").expect_err("zero area is rejected");
/// assert_eq!(error, InvalidInput::NonPositiveArea { area: 0.0 });
/// ```
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InvalidInput {
    /// Returned when a field is not a finite number.
    #[error("{field} is not a number (received {raw:?})")]
    NotANumber {
        /// The offending field.
        field: Field,
        /// Text exactly as it was supplied.
        raw: String,
    },
    /// Returned when the area is zero or negative.
    #[error("area must be greater than zero (received {area})")]
    NonPositiveArea {
        /// Rejected area in square metres.
        area: f64,
    },
    /// Returned when the velocity is negative.
    #[error("velocity must not be negative (received {velocity})")]
    NegativeVelocity {
        /// Rejected velocity in metres per second.
        velocity: f64,
    },
}

impl InvalidInput {
    /// Blocking notice shown to the user whenever a calculation is refused.
    pub const NOTICE: &'static str =
        "Please enter valid values (area must be greater than 0, velocity must not be negative).";

    /// Message to present to the user, followed by the specific reason.
    #[must_use]
    pub fn notice(&self) -> String {
        format!("{} ({self})", Self::NOTICE)
    }
}

/// Error returned when a configuration file cannot be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Returned when the file cannot be read.
    #[error("failed to read config file {path}")]
    Read {
        /// Location of the file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Returned when the file is not valid TOML for [`Config`](crate::Config).
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// Returned when a value parses but cannot be used.
    #[error("invalid config value for `{key}`: {reason}")]
    Invalid {
        /// Dotted key of the offending value.
        key: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}
