use thiserror::Error;
use twine_solvers::equation::bisection;

/// Errors that can occur while solving for a target lift coefficient.
///
/// Running out of iterations is not an error; see
/// [`SolveResult::converged`](super::SolveResult::converged).
#[derive(Debug, Error)]
pub enum AlphaSolveError {
    /// The target lift coefficient is NaN or infinite.
    #[error("target lift coefficient {0} is not finite")]
    NonFiniteTarget(f64),

    /// The solver configuration cannot drive a solve.
    #[error("invalid solver config: {0}")]
    InvalidConfig(&'static str),

    /// The aerodynamic model failed.
    #[error("aerodynamic model failed at alpha={alpha_deg} deg")]
    Model {
        /// Angle of attack of the failing call, in degrees.
        alpha_deg: f64,

        /// Underlying model error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),
}

impl AlphaSolveError {
    /// Creates a model failure error at the given angle of attack.
    pub(super) fn model_failed(
        alpha_deg: f64,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Model {
            alpha_deg,
            source: Box::new(err),
        }
    }
}
