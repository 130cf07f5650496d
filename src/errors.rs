//! Error types produced while defining envelopes or loading profiles.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when an envelope definition is not physically meaningful.
///
/// # Examples
///
/// ```
/// use wbenvelope::{EnvelopeConstants, EnvelopeError};
///
/// let error = EnvelopeConstants::new(730.0, 560.0, vec![0.25, 0.39])
///     .expect_err("inverted weight limits are rejected");
/// assert!(matches!(error, EnvelopeError::InvertedWeightLimits { .. }));
/// ```
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EnvelopeError {
    /// Returned when the minimum weight is zero, negative or not finite.
    #[error("minimum weight must be positive (received {kg_min} kg)")]
    NonPositiveMinimumWeight {
        /// Rejected minimum weight in kilograms.
        kg_min: f64,
    },
    /// Returned when the weight limits are not strictly increasing.
    #[error("minimum weight {kg_min} kg must be below maximum weight {kg_max} kg")]
    InvertedWeightLimits {
        /// Lower weight limit in kilograms.
        kg_min: f64,
        /// Upper weight limit in kilograms.
        kg_max: f64,
    },
    /// Returned when fewer than two arm values are supplied.
    #[error("an envelope needs at least two arm values (received {0})")]
    TooFewArms(usize),
    /// Returned when the arm table is not strictly ascending.
    #[error("arm table must be strictly ascending and finite (offending entry {index}: {arm} m)")]
    UnorderedArms {
        /// Position of the offending entry in the table.
        index: usize,
        /// Rejected arm value in metres.
        arm: f64,
    },
}

/// Error returned when a loading profile cannot be read.
///
/// Every variant is fatal for a run; nothing is recovered from a partial file.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Returned when the profile file cannot be read from disk.
    #[error("failed to read profile {}: {source}", path.display())]
    Io {
        /// Location of the profile.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Returned when the profile is not valid TOML.
    #[error("profile is not valid TOML: {0}")]
    Syntax(#[source] toml::de::Error),
    /// Returned when a required key is absent.
    #[error("profile is missing required field `{0}`")]
    MissingField(&'static str),
    /// Returned when a key holds a value of the wrong type.
    #[error("profile has an invalid value: {0}")]
    InvalidField(#[source] toml::de::Error),
    /// Returned when `date` is neither a string nor a TOML date.
    #[error("profile field `date` must be a string or a date (received {0})")]
    InvalidDate(&'static str),
}
