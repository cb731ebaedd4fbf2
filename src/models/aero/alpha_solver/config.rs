use twine_solvers::equation::bisection;
use uom::si::{angle::degree, f64::Angle};

use super::AlphaSolveError;

/// Model evaluations bisection spends on the bracket ends before iterating.
const BRACKET_EVALUATIONS: usize = 2;

/// How the solver updates its angle-of-attack estimate between evaluations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// `alpha += gain * (target_cl - cl)` with a fixed gain.
    #[default]
    FixedGain,

    /// Uses the lift slope measured from the last two evaluations, falling
    /// back to the fixed gain on the first step or when the measured slope is
    /// not positive (e.g., past stall).
    Secant,

    /// Bracketed bisection between the alpha bounds.
    ///
    /// Requires the target to be bracketed by the lift at the bounds.
    Bisection,
}

/// Solver configuration for lift-coefficient targeting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaSolverConfig {
    /// Maximum number of model evaluations per solve.
    pub max_iters: usize,

    /// Convergence requires `|target_cl - cl| < cl_tol`.
    pub cl_tol: f64,

    /// Angle-of-attack correction per unit lift coefficient error.
    ///
    /// Also scales the initial guess, `alpha0 = gain * target_cl`.
    /// The default of 10° corresponds to a lift slope of 0.1 per degree.
    pub gain: Angle,

    /// Lower alpha bound, applied after every update.
    pub alpha_min: Angle,

    /// Upper alpha bound, applied after every update.
    pub alpha_max: Angle,

    /// Update rule.
    pub strategy: Strategy,
}

impl Default for AlphaSolverConfig {
    fn default() -> Self {
        Self {
            max_iters: 20,
            cl_tol: 1e-3,
            gain: Angle::new::<degree>(10.0),
            alpha_min: Angle::new::<degree>(-20.0),
            alpha_max: Angle::new::<degree>(20.0),
            strategy: Strategy::FixedGain,
        }
    }
}

impl AlphaSolverConfig {
    /// Checks that the configuration can drive a solve.
    pub(super) fn validate(&self) -> Result<(), AlphaSolveError> {
        if self.max_iters == 0 {
            return Err(AlphaSolveError::InvalidConfig("max_iters must be at least 1"));
        }
        if self.strategy == Strategy::Bisection && self.max_iters < BRACKET_EVALUATIONS {
            return Err(AlphaSolveError::InvalidConfig(
                "bisection needs max_iters of at least 2 to evaluate the bracket",
            ));
        }
        if !(self.cl_tol.is_finite() && self.cl_tol > 0.0) {
            return Err(AlphaSolveError::InvalidConfig("cl_tol must be finite and positive"));
        }
        let gain = self.gain.get::<degree>();
        if !(gain.is_finite() && gain > 0.0) {
            return Err(AlphaSolveError::InvalidConfig("gain must be finite and positive"));
        }
        let (lo, hi) = self.bounds_deg();
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            return Err(AlphaSolveError::InvalidConfig(
                "alpha bounds must be finite with alpha_min < alpha_max",
            ));
        }
        Ok(())
    }

    /// Alpha bounds in degrees.
    pub(super) fn bounds_deg(&self) -> (f64, f64) {
        (self.alpha_min.get::<degree>(), self.alpha_max.get::<degree>())
    }

    /// Clamps an angle of attack in degrees to the configured bounds.
    pub(super) fn clamp_deg(&self, alpha: f64) -> f64 {
        let (lo, hi) = self.bounds_deg();
        alpha.clamp(lo, hi)
    }

    /// Converts this configuration into a bisection solver configuration.
    ///
    /// Bisection counts only midpoint evaluations as iterations, so the two
    /// bracket evaluations are taken out of the budget.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters.saturating_sub(BRACKET_EVALUATIONS),
            x_abs_tol: 1e-9,
            x_rel_tol: 0.0,
            residual_tol: self.cl_tol,
        }
    }
}
