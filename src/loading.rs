//! Weight and moment of a loaded aircraft.

/// Arm of the occupant station in metres.
pub const OCCUPANT_ARM: f64 = 0.143;

/// Arm shared by the baggage compartment and the fuel tank in metres.
pub const BAGGAGE_FUEL_ARM: f64 = 0.824;

/// Fuel density in kilograms per litre.
pub const FUEL_DENSITY: f64 = 0.72;

/// Usable fuel capacity in litres.
pub const FUEL_CAPACITY_LITERS: f64 = 74.0;

/// Weight and moment of one loading condition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadPoint {
    /// Total weight in kilograms.
    pub weight: f64,
    /// Total moment about the datum in kg·m.
    pub moment: f64,
}

impl LoadPoint {
    /// Create a load point from a weight and a moment.
    #[must_use]
    pub const fn new(weight: f64, moment: f64) -> Self {
        Self { weight, moment }
    }

    /// Centre of gravity arm in metres, or `None` for a weightless point.
    #[must_use]
    pub fn arm(&self) -> Option<f64> {
        if self.weight == 0.0 {
            None
        } else {
            Some(self.moment / self.weight)
        }
    }
}

/// Load stations of an airframe.
///
/// Baggage and fuel share one arm because they sit at coincident stations in the
/// reference airframe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadStations {
    /// Arm of the pilot and passenger seats in metres.
    pub occupant_arm: f64,
    /// Arm of the baggage compartment and fuel tank in metres.
    pub baggage_fuel_arm: f64,
    /// Fuel density in kilograms per litre.
    pub fuel_density: f64,
    /// Usable fuel capacity in litres.
    pub fuel_capacity_liters: f64,
}

impl LoadStations {
    /// Stations of the reference airframe.
    #[must_use]
    pub const fn katana() -> Self {
        Self {
            occupant_arm: OCCUPANT_ARM,
            baggage_fuel_arm: BAGGAGE_FUEL_ARM,
            fuel_density: FUEL_DENSITY,
            fuel_capacity_liters: FUEL_CAPACITY_LITERS,
        }
    }

    /// Combine the empty aircraft with occupants, baggage and fuel.
    ///
    /// All weights are in kilograms. Pass `fuel_weight = 0.0` for the zero-fuel
    /// condition.
    ///
    /// # Examples
    /// ```
    /// use wbenvelope::LoadStations;
    ///
    /// let point = LoadStations::katana().compute_load(500.0, 125.0, 150.0, 10.0, 0.0);
    /// assert_eq!(point.weight, 660.0);
    /// assert!((point.moment - 154.69).abs() < 1.0e-9);
    /// ```
    #[must_use]
    pub fn compute_load(
        &self,
        empty_weight: f64,
        empty_moment: f64,
        persons_on_board_weight: f64,
        baggage_weight: f64,
        fuel_weight: f64,
    ) -> LoadPoint {
        let weight = empty_weight + persons_on_board_weight + baggage_weight + fuel_weight;
        let moment = empty_moment
            + self.occupant_arm * persons_on_board_weight
            + self.baggage_fuel_arm * (baggage_weight + fuel_weight);
        LoadPoint::new(weight, moment)
    }

    /// Mass of `liters` of fuel in kilograms.
    #[must_use]
    pub fn fuel_mass(&self, liters: f64) -> f64 {
        liters * self.fuel_density
    }

    /// Mass of a full usable tank in kilograms.
    #[must_use]
    pub fn max_fuel_mass(&self) -> f64 {
        self.fuel_mass(self.fuel_capacity_liters)
    }
}

impl Default for LoadStations {
    fn default() -> Self {
        Self::katana()
    }
}

/// [`LoadStations::compute_load`] using the reference airframe stations.
#[must_use]
pub fn compute_load(
    empty_weight: f64,
    empty_moment: f64,
    persons_on_board_weight: f64,
    baggage_weight: f64,
    fuel_weight: f64,
) -> LoadPoint {
    LoadStations::katana().compute_load(
        empty_weight,
        empty_moment,
        persons_on_board_weight,
        baggage_weight,
        fuel_weight,
    )
}
