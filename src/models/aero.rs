//! Airfoil aerodynamics.
//!
//! - [`AeroModel`]: the evaluator seam (a surrogate model, a panel code, or
//!   the built-in [`ThinAirfoil`]).
//! - [`solve_for_cl`] / [`AlphaSolver`]: find the angle of attack that
//!   produces a target lift coefficient.
//! - [`polar`]: per-station batch analysis at target lift coefficients or at
//!   explicit angles of attack.

mod alpha_solver;
mod flow;
mod model;
mod operating_point;
pub mod polar;
mod thin_airfoil;

#[cfg(test)]
mod test_support;

pub use alpha_solver::{
    AlphaSolveError, AlphaSolver, AlphaSolverConfig, SolveResult, Strategy, solve_for_cl,
};
pub use flow::{FlowCondition, FlowError};
pub use model::{AeroModel, FoilModel, ModelSize};
pub use operating_point::OperatingPoint;
pub use thin_airfoil::{ThinAirfoil, ThinAirfoilError};
