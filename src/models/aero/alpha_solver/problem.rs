//! Problem formulation for bracketed lift targeting.

use std::convert::Infallible;

use twine_core::EquationProblem;
use uom::si::{angle::degree, f64::Angle};

use crate::models::aero::OperatingPoint;

/// Equation problem for lift targeting.
///
/// The solver variable is the angle of attack in degrees.
/// The residual is `achieved_cl - target_cl`.
pub(super) struct TargetClProblem {
    target_cl: f64,
}

impl TargetClProblem {
    pub(super) fn new(target_cl: f64) -> Self {
        Self { target_cl }
    }
}

impl EquationProblem<1> for TargetClProblem {
    type Input = Angle;
    type Output = OperatingPoint;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Angle::new::<degree>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.cl - self.target_cl])
    }
}
