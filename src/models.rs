//! Public aerodynamic models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Evaluators implement [`aero::AeroModel`], which maps an airfoil, an angle
//! of attack, and a flow condition to an operating point. Solvers never call
//! an evaluator directly: [`aero::FoilModel`] binds one to a fixed airfoil and
//! flow condition and exposes it as a [`twine_core::Model`] whose only input is
//! the angle of attack. That thin adapter is what iterative solvers drive.

pub mod aero;
