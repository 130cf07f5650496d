//! Evaluation of one loading profile against an envelope.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use tracing::{info, warn};

use crate::envelope::EnvelopeConstants;
use crate::loading::{LoadPoint, LoadStations};
use crate::profile::{format_decimal, LoadProfile};

/// Overall result of a load sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Both loading conditions lie inside the envelope.
    WithinLimits,
    /// At least one loading condition lies outside the envelope.
    OutOfLimits,
}

impl Verdict {
    /// Derive a verdict from individual checks.
    #[must_use]
    pub fn from_checks(checks: &[bool]) -> Self {
        if checks.iter().all(|within| *within) {
            Self::WithinLimits
        } else {
            Self::OutOfLimits
        }
    }

    /// Whether the loading is legal.
    #[must_use]
    pub fn is_within_limits(self) -> bool {
        self == Self::WithinLimits
    }

    /// Colour used for the load line on a diagram.
    #[must_use]
    pub fn color_name(self) -> &'static str {
        match self {
            Self::WithinLimits => "green",
            Self::OutOfLimits => "red",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WithinLimits => f.write_str("within limits"),
            Self::OutOfLimits => f.write_str("OUT OF LIMITS"),
        }
    }
}

/// Zero-fuel and takeoff conditions of a profile with their envelope checks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadSheet {
    /// Loaded aircraft without fuel.
    pub zero_fuel: LoadPoint,
    /// Loaded aircraft with the planned fuel.
    pub takeoff: LoadPoint,
    /// Whether the zero-fuel point lies inside the envelope.
    pub zero_fuel_within_limits: bool,
    /// Whether the takeoff point lies inside the envelope.
    pub takeoff_within_limits: bool,
    /// Mass of the planned fuel in kilograms.
    pub fuel_mass: f64,
    /// Whether the planned fuel exceeds the usable tank capacity.
    pub fuel_exceeds_capacity: bool,
}

impl LoadSheet {
    /// Compute both loading conditions and check them against `envelope`.
    #[must_use]
    pub fn evaluate(
        profile: &LoadProfile,
        envelope: &EnvelopeConstants,
        stations: &LoadStations,
    ) -> Self {
        let persons_on_board = profile.persons_on_board_weight();
        let fuel_mass = stations.fuel_mass(profile.fuel_liters);

        let zero_fuel = stations.compute_load(
            profile.empty_weight,
            profile.empty_moment,
            persons_on_board,
            profile.baggage_weight,
            0.0,
        );
        let takeoff = stations.compute_load(
            profile.empty_weight,
            profile.empty_moment,
            persons_on_board,
            profile.baggage_weight,
            fuel_mass,
        );

        let zero_fuel_within_limits = envelope.is_within_limits(zero_fuel.weight, zero_fuel.moment);
        let takeoff_within_limits = envelope.is_within_limits(takeoff.weight, takeoff.moment);

        let fuel_exceeds_capacity = profile.fuel_liters > stations.fuel_capacity_liters;
        if fuel_exceeds_capacity {
            warn!(
                fuel_liters = profile.fuel_liters,
                capacity_liters = stations.fuel_capacity_liters,
                "planned fuel exceeds usable tank capacity"
            );
        }

        info!(
            weight = zero_fuel.weight,
            moment = zero_fuel.moment,
            within_limits = zero_fuel_within_limits,
            "zero-fuel condition"
        );
        info!(
            weight = takeoff.weight,
            moment = takeoff.moment,
            within_limits = takeoff_within_limits,
            "takeoff condition"
        );

        Self {
            zero_fuel,
            takeoff,
            zero_fuel_within_limits,
            takeoff_within_limits,
            fuel_mass,
            fuel_exceeds_capacity,
        }
    }

    /// Combined verdict over both loading conditions.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        Verdict::from_checks(&[self.zero_fuel_within_limits, self.takeoff_within_limits])
    }
}

/// Display strings describing a profile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetText {
    /// Title, callsign and date on one line.
    pub heading: String,
    /// Occupant, baggage and fuel breakdown.
    pub lines: Vec<String>,
}

impl SheetText {
    /// Build the display strings for `profile` evaluated as `sheet`.
    ///
    /// `today` is used when the profile carries no date. Profile numbers are
    /// shown the way they were written; the fuel mass is always a decimal.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use wbenvelope::{parse_profile, EnvelopeConstants, LoadSheet, LoadStations, SheetText};
    ///
    /// let profile = parse_profile(
    ///     "empty_weight = 500\nempty_moment = 125\npilot_weight = 80\n\
    ///      pax_weight = 70\nbaggage = 10\nfuel = 50\n",
    /// )
    /// .expect("profile parses");
    /// let sheet = LoadSheet::evaluate(
    ///     &profile,
    ///     &EnvelopeConstants::katana(),
    ///     &LoadStations::katana(),
    /// );
    /// let today = NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date");
    /// let text = SheetText::new(&profile, &sheet, today);
    /// assert_eq!(text.heading, "        2024-5-1");
    /// assert_eq!(text.lines[3], "Fuel: 50 litres, 36.0 kg");
    /// ```
    #[must_use]
    pub fn new(profile: &LoadProfile, sheet: &LoadSheet, today: NaiveDate) -> Self {
        let date = profile
            .date
            .clone()
            .unwrap_or_else(|| format_date(today));
        let heading = format!(
            "{}    {}    {}",
            profile.title.as_deref().unwrap_or_default(),
            profile.callsign.as_deref().unwrap_or_default(),
            date
        );
        let lines = vec![
            format!(
                "Pilot, {} (kg): {}",
                profile.pilot_name,
                profile.display_number("pilot_weight", profile.pilot_weight)
            ),
            format!(
                "Pax, {} (kg): {}",
                profile.pax_name,
                profile.display_number("pax_weight", profile.pax_weight)
            ),
            format!(
                "Baggage (kg): {}",
                profile.display_number("baggage", profile.baggage_weight)
            ),
            format!(
                "Fuel: {} litres, {} kg",
                profile.display_number("fuel", profile.fuel_liters),
                format_decimal(sheet.fuel_mass)
            ),
        ];
        Self { heading, lines }
    }
}

/// Format a date as `year-month-day` without zero padding.
fn format_date(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}
