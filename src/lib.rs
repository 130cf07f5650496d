#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

pub mod errors;
pub mod envelope;
pub mod loading;
pub mod profile;
pub mod sheet;

pub use envelope::{
    ArmLine, EnvelopeConstants, EnvelopeVertex, PlotBounds, DEFAULT_PLOT_MARGIN,
};
pub use errors::{EnvelopeError, ProfileError};
pub use loading::{compute_load, LoadPoint, LoadStations};
pub use profile::{load_profile, parse_profile, LoadProfile, DEFAULT_PROFILE_PATH};
pub use sheet::{LoadSheet, SheetText, Verdict};
