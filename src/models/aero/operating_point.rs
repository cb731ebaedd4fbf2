use uom::si::{angle::degree, f64::Angle};

use crate::support::constraint::{Constrained, ConstraintResult, UnitInterval};

/// Aerodynamic coefficients produced by one evaluation.
///
/// Moment is about the quarter chord. Transition locations are the actual
/// `x/c` where the boundary layer transitions, which is at or ahead of any
/// forced trip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    /// Angle of attack.
    pub alpha: Angle,

    /// Lift coefficient.
    pub cl: f64,

    /// Drag coefficient.
    pub cd: f64,

    /// Quarter-chord pitching moment coefficient.
    pub cm: f64,

    /// Upper surface transition location.
    pub xtr_top: Constrained<f64, UnitInterval>,

    /// Lower surface transition location.
    pub xtr_bot: Constrained<f64, UnitInterval>,
}

impl OperatingPoint {
    /// Builds an operating point from an angle in degrees and raw coefficients.
    ///
    /// # Errors
    ///
    /// Returns an error if either transition location lies outside `[0, 1]`.
    pub fn new(
        alpha_deg: f64,
        cl: f64,
        cd: f64,
        cm: f64,
        xtr_top: f64,
        xtr_bot: f64,
    ) -> ConstraintResult<Self> {
        Ok(Self {
            alpha: Angle::new::<degree>(alpha_deg),
            cl,
            cd,
            cm,
            xtr_top: UnitInterval::new(xtr_top)?,
            xtr_bot: UnitInterval::new(xtr_bot)?,
        })
    }

    /// Angle of attack in degrees.
    #[must_use]
    pub fn alpha_deg(&self) -> f64 {
        self.alpha.get::<degree>()
    }
}
