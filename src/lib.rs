//! # Foil Models
//!
//! Airfoil aerodynamic models and a lift-targeting angle-of-attack solver
//! built on [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Aerodynamic models, the [`AeroModel`](models::aero::AeroModel)
//!   evaluator seam, the alpha solver, and batch polar analysis.
//! - [`support`]: Supporting utilities (numeric constraints, airfoil geometry).
//! - [`bridge`]: JSON request/response framing used by the `foil-bridge` binary.
//!
//! ## Direct calls
//!
//! ```
//! use foil_models::models::aero::{
//!     AlphaSolverConfig, ThinAirfoil,
//!     polar::{AnalysisSettings, analyze_at_cls},
//! };
//! use foil_models::support::geometry::Airfoil;
//!
//! // Diamond section, ordered TE -> upper -> LE -> lower -> TE.
//! let airfoil = Airfoil::new(
//!     &[1.0, 0.5, 0.0, 0.5, 1.0],
//!     &[0.0, 0.05, 0.0, -0.05, 0.0],
//! )
//! .unwrap();
//!
//! let polar = analyze_at_cls(
//!     &airfoil,
//!     &[0.0, 0.4],
//!     &[1.0e6, 1.0e6],
//!     &AnalysisSettings::default(),
//!     &AlphaSolverConfig::default(),
//!     &ThinAirfoil::default(),
//! )
//! .unwrap();
//!
//! assert!(polar.success);
//! assert_eq!(polar.alpha.len(), 2);
//! ```

pub mod bridge;
pub mod models;
pub mod support;
