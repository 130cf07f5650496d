//! The certified weight and balance envelope.
//!
//! In (moment, weight) space the envelope is a trapezoid bounded by two
//! horizontal weight limits and two arm limits. Lines of constant arm pass
//! through the origin, so membership reduces to a weight range check followed
//! by an arm range check.

use crate::errors::EnvelopeError;

/// Lower weight limit of the reference airframe in kilograms.
pub const KATANA_KG_MIN: f64 = 560.0;

/// Upper weight limit of the reference airframe in kilograms.
pub const KATANA_KG_MAX: f64 = 730.0;

/// Arm lines tabulated in the reference flight manual, in metres.
pub const KATANA_ARMS: [f64; 8] = [0.250, 0.270, 0.290, 0.310, 0.330, 0.350, 0.370, 0.390];

/// Margin around the envelope used when framing a diagram, in kilograms and kg·m.
pub const DEFAULT_PLOT_MARGIN: f64 = 14.0;

/// Point in (moment, weight) space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnvelopeVertex {
    /// Moment in kg·m.
    pub moment: f64,
    /// Weight in kilograms.
    pub weight: f64,
}

impl EnvelopeVertex {
    /// Create a vertex from a moment and a weight.
    #[must_use]
    pub const fn new(moment: f64, weight: f64) -> Self {
        Self { moment, weight }
    }
}

/// Constant-arm segment spanning the permitted weight range.
#[derive(Clone, Debug, PartialEq)]
pub struct ArmLine {
    /// Arm in metres.
    pub arm: f64,
    /// End of the segment at the minimum weight.
    pub lower: EnvelopeVertex,
    /// End of the segment at the maximum weight.
    pub upper: EnvelopeVertex,
    /// Label in whole millimetres, e.g. `250 mm`.
    pub label: String,
}

/// Rectangular frame enclosing the envelope plus a margin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotBounds {
    /// Smallest moment shown.
    pub moment_min: f64,
    /// Largest moment shown.
    pub moment_max: f64,
    /// Smallest weight shown.
    pub weight_min: f64,
    /// Largest weight shown.
    pub weight_max: f64,
}

/// Immutable envelope definition passed explicitly to every check.
#[derive(Clone, Debug, PartialEq)]
pub struct EnvelopeConstants {
    /// Lower weight limit in kilograms.
    kg_min: f64,
    /// Upper weight limit in kilograms.
    kg_max: f64,
    /// Strictly ascending arm table in metres.
    arms: Vec<f64>,
}

impl EnvelopeConstants {
    /// Create an envelope from weight limits and an arm table.
    ///
    /// # Errors
    ///
    /// Returns [`EnvelopeError`] when `kg_min` is not positive, when the weight
    /// limits are not increasing, or when `arms` has fewer than two entries or is
    /// not strictly ascending.
    pub fn new(kg_min: f64, kg_max: f64, arms: Vec<f64>) -> Result<Self, EnvelopeError> {
        if !(kg_min.is_finite() && kg_min > 0.0) {
            return Err(EnvelopeError::NonPositiveMinimumWeight { kg_min });
        }
        if !(kg_max.is_finite() && kg_min < kg_max) {
            return Err(EnvelopeError::InvertedWeightLimits { kg_min, kg_max });
        }
        if arms.len() < 2 {
            return Err(EnvelopeError::TooFewArms(arms.len()));
        }
        for (index, &arm) in arms.iter().enumerate() {
            let ascending = index == 0 || arms[index - 1] < arm;
            if !arm.is_finite() || !ascending {
                return Err(EnvelopeError::UnorderedArms { index, arm });
            }
        }
        Ok(Self {
            kg_min,
            kg_max,
            arms,
        })
    }

    /// Envelope of the reference airframe.
    ///
    /// # Examples
    /// ```
    /// use wbenvelope::EnvelopeConstants;
    ///
    /// let envelope = EnvelopeConstants::katana();
    /// assert_eq!(envelope.kg_min(), 560.0);
    /// assert_eq!(envelope.moment_max(), 730.0 * 0.390);
    /// ```
    #[must_use]
    pub fn katana() -> Self {
        Self {
            kg_min: KATANA_KG_MIN,
            kg_max: KATANA_KG_MAX,
            arms: KATANA_ARMS.to_vec(),
        }
    }

    /// Lower weight limit in kilograms.
    #[must_use]
    pub fn kg_min(&self) -> f64 {
        self.kg_min
    }

    /// Upper weight limit in kilograms.
    #[must_use]
    pub fn kg_max(&self) -> f64 {
        self.kg_max
    }

    /// Tabulated arms in ascending order.
    #[must_use]
    pub fn arms(&self) -> &[f64] {
        &self.arms
    }

    /// Most forward permitted arm.
    #[must_use]
    pub fn forward_arm(&self) -> f64 {
        self.arms[0]
    }

    /// Most aft permitted arm.
    #[must_use]
    pub fn aft_arm(&self) -> f64 {
        self.arms[self.arms.len() - 1]
    }

    /// Smallest moment inside the envelope, `kg_min × forward_arm`.
    #[must_use]
    pub fn moment_min(&self) -> f64 {
        self.kg_min * self.forward_arm()
    }

    /// Largest moment inside the envelope, `kg_max × aft_arm`.
    #[must_use]
    pub fn moment_max(&self) -> f64 {
        self.kg_max * self.aft_arm()
    }

    /// Check whether a (weight, moment) pair lies inside the envelope.
    ///
    /// Weights outside `[kg_min, kg_max]` fail first. Since `kg_min` is
    /// positive, the arm limits `forward_arm <= moment / weight <= aft_arm` can
    /// be checked as moment limits at this weight, so no division happens and a
    /// point built as `weight × arm` for a tabulated limit arm is accepted
    /// exactly. NaN inputs are out of limits.
    ///
    /// # Examples
    /// ```
    /// use wbenvelope::EnvelopeConstants;
    ///
    /// let envelope = EnvelopeConstants::katana();
    /// assert!(envelope.is_within_limits(696.0, 184.354));
    /// assert!(!envelope.is_within_limits(660.0, 154.69));
    /// assert!(envelope.is_within_limits(660.0, 660.0 * 0.390));
    /// ```
    #[must_use]
    pub fn is_within_limits(&self, weight: f64, moment: f64) -> bool {
        if weight < self.kg_min || weight > self.kg_max {
            return false;
        }
        moment >= weight * self.forward_arm() && moment <= weight * self.aft_arm()
    }

    /// Corners of the envelope trapezoid in drawing order.
    ///
    /// The order is forward-light, aft-light, aft-heavy, forward-heavy so the
    /// polygon can be filled or stroked directly.
    #[must_use]
    pub fn boundary(&self) -> [EnvelopeVertex; 4] {
        [
            EnvelopeVertex::new(self.moment_min(), self.kg_min),
            EnvelopeVertex::new(self.kg_min * self.aft_arm(), self.kg_min),
            EnvelopeVertex::new(self.moment_max(), self.kg_max),
            EnvelopeVertex::new(self.kg_max * self.forward_arm(), self.kg_max),
        ]
    }

    /// Constant-arm guide lines for every tabulated arm.
    #[must_use]
    pub fn arm_lines(&self) -> Vec<ArmLine> {
        self.arms
            .iter()
            .map(|&arm| ArmLine {
                arm,
                lower: EnvelopeVertex::new(self.kg_min * arm, self.kg_min),
                upper: EnvelopeVertex::new(self.kg_max * arm, self.kg_max),
                label: format!("{} mm", (1000.0 * arm).round() as i64),
            })
            .collect()
    }

    /// Frame around the envelope with `margin` on every side and twice the
    /// margin above the heavy limit to leave room for arm labels.
    #[must_use]
    pub fn plot_bounds(&self, margin: f64) -> PlotBounds {
        PlotBounds {
            moment_min: self.moment_min() - margin,
            moment_max: self.moment_max() + margin,
            weight_min: self.kg_min - margin,
            weight_max: self.kg_max + 2.0 * margin,
        }
    }
}

impl Default for EnvelopeConstants {
    fn default() -> Self {
        Self::katana()
    }
}
