//! Supporting utilities used by models.
//!
//! These modules are public because they're useful to callers building inputs,
//! but their APIs are not stable.

pub mod constraint;
pub mod geometry;
