//! Loading profiles read from TOML files.
//!
//! A profile is a flat table:
//!
//! ```toml
//! title = "Local flight"
//! callsign = "PH-ABC"
//! date = 2024-05-01
//!
//! empty_weight = 500
//! empty_moment = 125
//!
//! pilot_name = "Alice"
//! pilot_weight = 80
//! pax_weight = 70
//! baggage = 10
//! fuel = 50
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use toml::{Table, Value};
use tracing::debug;

use crate::errors::ProfileError;

/// File read when no profile path is supplied.
pub const DEFAULT_PROFILE_PATH: &str = "example.toml";

/// Keys that must be present in every profile.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "empty_weight",
    "empty_moment",
    "pilot_weight",
    "pax_weight",
    "baggage",
    "fuel",
];

/// Loading of one flight, immutable once read.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LoadProfile {
    /// Free-form heading for the load sheet.
    #[serde(default)]
    pub title: Option<String>,
    /// Aircraft registration or callsign.
    #[serde(default)]
    pub callsign: Option<String>,
    /// Flight date as written in the profile.
    #[serde(skip)]
    pub date: Option<String>,
    /// Basic empty weight in kilograms.
    pub empty_weight: f64,
    /// Basic empty moment in kg·m.
    pub empty_moment: f64,
    /// Name shown for the pilot seat.
    #[serde(default = "default_pilot_name")]
    pub pilot_name: String,
    /// Pilot weight in kilograms.
    pub pilot_weight: f64,
    /// Name shown for the passenger seat.
    #[serde(default = "default_pax_name")]
    pub pax_name: String,
    /// Passenger weight in kilograms.
    pub pax_weight: f64,
    /// Baggage weight in kilograms.
    #[serde(rename = "baggage")]
    pub baggage_weight: f64,
    /// Fuel on board in litres.
    #[serde(rename = "fuel")]
    pub fuel_liters: f64,
    /// Required keys written as TOML integers rather than floats.
    #[serde(skip)]
    integer_fields: Vec<&'static str>,
}

/// Name shown when the profile leaves the pilot unnamed.
fn default_pilot_name() -> String {
    "Pilot".to_owned()
}

/// Name shown when the profile leaves the passenger unnamed.
fn default_pax_name() -> String {
    "Pax".to_owned()
}

impl LoadProfile {
    /// Combined weight of pilot and passenger in kilograms.
    #[must_use]
    pub fn persons_on_board_weight(&self) -> f64 {
        self.pilot_weight + self.pax_weight
    }

    /// Render the value of the required key `field` as it was written.
    ///
    /// Integers keep their integer form and floats always show a fractional
    /// part, so `pax_weight = 70` reads `70` and `pax_weight = 70.0` reads
    /// `70.0`.
    #[must_use]
    pub fn display_number(&self, field: &str, value: f64) -> String {
        if self.integer_fields.iter().any(|integer| *integer == field) {
            format!("{value}")
        } else {
            format_decimal(value)
        }
    }
}

/// Format a float so whole values keep a trailing `.0`.
#[must_use]
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1.0e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Read and parse the profile stored at `path`.
///
/// # Errors
///
/// Returns [`ProfileError::Io`] when the file cannot be read and any error
/// produced by [`parse_profile`] otherwise.
pub fn load_profile(path: impl AsRef<Path>) -> Result<LoadProfile, ProfileError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading loading profile");
    let contents = fs::read_to_string(path).map_err(|source| ProfileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_profile(&contents)
}

/// Parse a profile from TOML text.
///
/// Numeric fields accept integers and floats. `date` may be a string or a TOML
/// date; an empty string counts as absent.
///
/// # Errors
///
/// Returns [`ProfileError::Syntax`] for malformed TOML,
/// [`ProfileError::MissingField`] when a required key is absent,
/// [`ProfileError::InvalidDate`] for a `date` of another type and
/// [`ProfileError::InvalidField`] when any other key has the wrong type.
///
/// # Examples
/// ```
/// use wbenvelope::{parse_profile, ProfileError};
///
/// let error = parse_profile("empty_weight = 500").expect_err("incomplete profile");
/// assert!(matches!(error, ProfileError::MissingField("empty_moment")));
/// ```
pub fn parse_profile(contents: &str) -> Result<LoadProfile, ProfileError> {
    let mut table: Table = toml::from_str(contents).map_err(ProfileError::Syntax)?;

    if let Some(field) = REQUIRED_FIELDS
        .iter()
        .copied()
        .find(|field| !table.contains_key(*field))
    {
        return Err(ProfileError::MissingField(field));
    }

    let date = match table.remove("date") {
        None => None,
        Some(Value::String(text)) => Some(text),
        Some(Value::Datetime(datetime)) => Some(datetime.to_string()),
        Some(other) => return Err(ProfileError::InvalidDate(other.type_str())),
    }
    .filter(|text| !text.trim().is_empty());

    let integer_fields = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| matches!(table.get(*field), Some(Value::Integer(_))))
        .collect();

    let mut profile: LoadProfile = Value::Table(table)
        .try_into()
        .map_err(ProfileError::InvalidField)?;
    profile.date = date;
    profile.integer_fields = integer_fields;
    Ok(profile)
}
