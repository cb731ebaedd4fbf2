//! Angle-of-attack search for a target lift coefficient.
//!
//! The default [`Strategy::FixedGain`] iteration is:
//!
//! 1. Start from `alpha = gain * target_cl`.
//! 2. Evaluate the model and compute `error = target_cl - cl`.
//! 3. Stop if `|error| < cl_tol`, otherwise `alpha += gain * error`.
//! 4. Clamp alpha to the configured bounds and repeat, up to `max_iters`
//!    evaluations in total.
//!
//! Exhausting the iteration budget is not an error. The last evaluated
//! operating point is returned with `converged == false`, and callers that
//! care must compare the achieved lift against the target. Near stall the
//! search can stall against a bound without reaching the target.

mod config;
mod error;
mod problem;

pub use config::{AlphaSolverConfig, Strategy};
pub use error::AlphaSolveError;

use tracing::{debug, warn};
use twine_core::Model;
use twine_solvers::equation::bisection;
use uom::si::{angle::degree, f64::Angle};

use crate::support::geometry::Airfoil;

use super::{AeroModel, FlowCondition, FoilModel, OperatingPoint};

use problem::TargetClProblem;

/// Smallest measured lift slope (per degree) the secant update will trust.
const MIN_SECANT_SLOPE: f64 = 1e-4;

/// Outcome of one lift-targeting solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveResult {
    /// True if the final point is within tolerance of the target.
    pub converged: bool,

    /// Last evaluated operating point.
    pub point: OperatingPoint,

    /// Number of model evaluations performed.
    pub iterations: usize,
}

/// Finds the angle of attack that produces a target lift coefficient.
///
/// This is a convenience wrapper around [`AlphaSolver::solve`].
///
/// # Errors
///
/// Returns an [`AlphaSolveError`] if the target is not finite, the
/// configuration is invalid, or the model fails.
pub fn solve_for_cl<M: AeroModel>(
    target_cl: f64,
    flow: FlowCondition,
    airfoil: &Airfoil,
    model: &M,
    config: &AlphaSolverConfig,
) -> Result<SolveResult, AlphaSolveError> {
    AlphaSolver::new(model, airfoil, flow, *config).solve(target_cl)
}

/// Lift-targeting solver bound to one airfoil and flow condition.
pub struct AlphaSolver<'a, M> {
    model: FoilModel<'a, M>,
    config: AlphaSolverConfig,
}

impl<'a, M: AeroModel> AlphaSolver<'a, M> {
    pub fn new(
        model: &'a M,
        airfoil: &'a Airfoil,
        flow: FlowCondition,
        config: AlphaSolverConfig,
    ) -> Self {
        Self {
            model: FoilModel::new(model, airfoil, flow),
            config,
        }
    }

    /// Solves for `target_cl` starting from `gain * target_cl`.
    ///
    /// # Errors
    ///
    /// See [`solve_for_cl`].
    pub fn solve(&self, target_cl: f64) -> Result<SolveResult, AlphaSolveError> {
        let guess = self.config.gain.get::<degree>() * target_cl;
        self.solve_from(target_cl, Angle::new::<degree>(guess))
    }

    /// Solves for `target_cl` starting from an explicit initial angle.
    ///
    /// The initial angle is clamped to the bounds before the first
    /// evaluation. It is ignored by [`Strategy::Bisection`].
    ///
    /// # Errors
    ///
    /// See [`solve_for_cl`].
    pub fn solve_from(
        &self,
        target_cl: f64,
        initial_alpha: Angle,
    ) -> Result<SolveResult, AlphaSolveError> {
        self.config.validate()?;
        if !target_cl.is_finite() {
            return Err(AlphaSolveError::NonFiniteTarget(target_cl));
        }

        let result = match self.config.strategy {
            Strategy::FixedGain | Strategy::Secant => {
                self.iterate(target_cl, initial_alpha.get::<degree>())?
            }
            Strategy::Bisection => self.bisect(target_cl)?,
        };

        if !result.converged {
            warn!(
                target_cl,
                cl = result.point.cl,
                alpha = result.point.alpha_deg(),
                iterations = result.iterations,
                "alpha solve did not converge"
            );
        }
        Ok(result)
    }

    fn evaluate(&self, alpha_deg: f64) -> Result<OperatingPoint, AlphaSolveError> {
        self.model
            .call(&Angle::new::<degree>(alpha_deg))
            .map_err(|err| AlphaSolveError::model_failed(alpha_deg, err))
    }

    fn iterate(&self, target_cl: f64, initial_deg: f64) -> Result<SolveResult, AlphaSolveError> {
        let config = &self.config;
        let gain = config.gain.get::<degree>();

        let mut alpha = self.clamped(target_cl, initial_deg);
        let mut point = self.evaluate(alpha)?;
        let mut previous: Option<(f64, f64)> = None;
        let mut iterations = 1;

        loop {
            let error = target_cl - point.cl;
            debug!(iterations, alpha, cl = point.cl, error, "alpha solve step");

            if error.abs() < config.cl_tol {
                return Ok(SolveResult {
                    converged: true,
                    point,
                    iterations,
                });
            }
            if iterations >= config.max_iters {
                return Ok(SolveResult {
                    converged: false,
                    point,
                    iterations,
                });
            }

            let step = match (config.strategy, previous) {
                (Strategy::Secant, Some((prev_alpha, prev_cl))) => {
                    secant_step(alpha - prev_alpha, point.cl - prev_cl, error)
                        .unwrap_or(error * gain)
                }
                _ => error * gain,
            };

            previous = Some((alpha, point.cl));
            alpha = self.clamped(target_cl, alpha + step);
            point = self.evaluate(alpha)?;
            iterations += 1;
        }
    }

    /// Clamps a proposed angle to the bounds, noting when it had to move.
    fn clamped(&self, target_cl: f64, proposed: f64) -> f64 {
        let alpha = self.config.clamp_deg(proposed);
        if alpha != proposed {
            debug!(target_cl, proposed, alpha, "alpha clamped to bounds");
        }
        alpha
    }

    fn bisect(&self, target_cl: f64) -> Result<SolveResult, AlphaSolveError> {
        let (lo, hi) = self.config.bounds_deg();
        let problem = TargetClProblem::new(target_cl);
        let mut evaluations = 0;

        let solution = bisection::solve(
            &self.model,
            &problem,
            [lo, hi],
            &self.config.bisection(),
            |event: &bisection::Event<'_, _, _>| {
                evaluations += 1;
                match event.result() {
                    Ok(evaluation) => debug!(
                        evaluations,
                        alpha = event.x(),
                        residual = evaluation.residuals[0],
                        "bisection step"
                    ),
                    Err(_) => debug!(evaluations, alpha = event.x(), "aerodynamic model failed"),
                }
                None
            },
        )?;

        let point = solution.snapshot.output;
        Ok(SolveResult {
            converged: (target_cl - point.cl).abs() < self.config.cl_tol,
            point,
            iterations: evaluations,
        })
    }
}

/// Newton step using the lift slope measured between two evaluations.
///
/// Returns `None` when alpha did not move or the slope is not usable.
fn secant_step(d_alpha: f64, d_cl: f64, error: f64) -> Option<f64> {
    if d_alpha.abs() < f64::EPSILON {
        return None;
    }
    let slope = d_cl / d_alpha;
    (slope.is_finite() && slope > MIN_SECANT_SLOPE).then(|| error / slope)
}
