//! Low-fidelity analytic section model.
//!
//! [`ThinAirfoil`] is a dependency-free stand-in for a surrogate model. It
//! combines:
//!
//! - Thin-airfoil theory for lift and quarter-chord moment, using Glauert
//!   integrals over the mean camber line extracted from the contour.
//! - The Prandtl–Glauert compressibility correction.
//! - A smooth lift saturation toward a Reynolds-dependent `CL_max`.
//! - Natural transition estimated from Reynolds number, `NCrit`, and lift,
//!   capped by any forced trip.
//! - Composite flat-plate skin friction scaled by a thickness form factor,
//!   plus lift-dependent profile drag and a separation penalty past the
//!   linear range.
//!
//! It is adequate for exercising solvers and for rough trends, not for design.

mod boundary_layer;
mod camber;

use std::f64::consts::PI;

use thiserror::Error;
use uom::si::{angle::radian, f64::Angle};

use crate::support::{
    constraint::{ConstraintError, UnitInterval},
    geometry::Airfoil,
};

use super::{AeroModel, FlowCondition, ModelSize, OperatingPoint};

use boundary_layer::{form_factor, natural_transition, skin_friction};
use camber::CamberLine;

/// Highest Mach number accepted; Prandtl–Glauert diverges approaching 1.
pub const MAX_MACH: f64 = 0.9;

/// Fraction of `CL_max` where lift starts to depart from linear.
const LINEAR_FRACTION: f64 = 0.8;

/// Profile drag growth with lift, per `CL²`.
const PROFILE_DRAG_FACTOR: f64 = 0.005;

/// Drag penalty per squared lift lost to separation.
const SEPARATION_DRAG_FACTOR: f64 = 0.4;

/// Errors raised by the thin-airfoil model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThinAirfoilError {
    /// Mach number is outside the range of the compressibility correction.
    #[error("mach {mach} exceeds the model limit of {MAX_MACH}")]
    MachOutOfRange { mach: f64 },

    /// The contour has no measurable thickness.
    #[error("section has no thickness")]
    ZeroThickness,

    /// The model produced NaN or infinite coefficients.
    #[error("model produced non-finite coefficients: cl={cl}, cd={cd}, cm={cm}")]
    NonFinite { cl: f64, cd: f64, cm: f64 },

    /// A transition location fell outside the chord.
    #[error("transition location out of range")]
    Transition(#[from] ConstraintError),
}

/// Thin-airfoil section model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThinAirfoil {
    model_size: ModelSize,
}

impl ThinAirfoil {
    /// Creates a model whose integration resolution follows `model_size`.
    #[must_use]
    pub fn new(model_size: ModelSize) -> Self {
        Self { model_size }
    }

    /// Camber-line integration panels for the configured model size.
    #[must_use]
    pub fn panels(&self) -> usize {
        match self.model_size {
            ModelSize::XXSmall => 16,
            ModelSize::XSmall => 24,
            ModelSize::Small => 32,
            ModelSize::Medium => 48,
            ModelSize::Large => 64,
            ModelSize::XLarge => 96,
            ModelSize::XXLarge => 128,
            ModelSize::XXXLarge => 192,
        }
    }
}

impl AeroModel for ThinAirfoil {
    type Error = ThinAirfoilError;

    fn evaluate(
        &self,
        airfoil: &Airfoil,
        alpha: Angle,
        flow: &FlowCondition,
    ) -> Result<OperatingPoint, Self::Error> {
        let mach = flow.mach();
        if mach > MAX_MACH {
            return Err(ThinAirfoilError::MachOutOfRange { mach });
        }
        let beta = (1.0 - mach * mach).sqrt();

        let panels = self.panels();
        let thickness = airfoil.max_thickness(panels + 1);
        if thickness <= 0.0 {
            return Err(ThinAirfoilError::ZeroThickness);
        }
        let camber = CamberLine::new(airfoil, panels);

        let cl_linear = 2.0 * PI * (alpha.get::<radian>() - camber.alpha_zero_lift) / beta;
        let cl = saturate(cl_linear, cl_max(flow.reynolds()));
        let cm = camber.cm_quarter_chord / beta;

        let (natural_top, natural_bot) = natural_transition(flow.reynolds(), flow.n_crit(), cl);
        let xtr_top = natural_top.min(flow.xtr_top());
        let xtr_bot = natural_bot.min(flow.xtr_bot());

        let friction = (skin_friction(flow.reynolds(), xtr_top)
            + skin_friction(flow.reynolds(), xtr_bot))
            * form_factor(thickness);
        let cd = friction
            + PROFILE_DRAG_FACTOR * cl * cl
            + SEPARATION_DRAG_FACTOR * (cl_linear - cl).powi(2);

        if !(cl.is_finite() && cd.is_finite() && cm.is_finite()) {
            return Err(ThinAirfoilError::NonFinite { cl, cd, cm });
        }

        Ok(OperatingPoint {
            alpha,
            cl,
            cd,
            cm,
            xtr_top: UnitInterval::new(xtr_top)?,
            xtr_bot: UnitInterval::new(xtr_bot)?,
        })
    }
}

/// Maximum lift coefficient, rising slowly with Reynolds number.
fn cl_max(reynolds: f64) -> f64 {
    (1.2 + 0.15 * (reynolds / 1.0e5).log10()).clamp(0.8, 1.8)
}

/// Linear up to `LINEAR_FRACTION * cl_max`, then a C1 `tanh` approach to `cl_max`.
fn saturate(cl_linear: f64, cl_max: f64) -> f64 {
    let knee = LINEAR_FRACTION * cl_max;
    let span = cl_max - knee;
    let magnitude = cl_linear.abs();
    if magnitude <= knee {
        return cl_linear;
    }
    (knee + span * ((magnitude - knee) / span).tanh()).copysign(cl_linear)
}
