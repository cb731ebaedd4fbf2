use thiserror::Error;

use crate::support::constraint::{
    Constrained, ConstraintError, NonNegative, StrictlyPositive, UnitInterval,
};

/// Free-stream and boundary-layer conditions for one evaluation.
///
/// All fields are validated at construction:
///
/// - Reynolds number and `NCrit` are strictly positive.
/// - Mach number is non-negative.
/// - Forced transition locations are chord fractions in `[0, 1]`;
///   `1.0` means no trip (free transition).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowCondition {
    reynolds: Constrained<f64, StrictlyPositive>,
    mach: Constrained<f64, NonNegative>,
    n_crit: Constrained<f64, StrictlyPositive>,
    xtr_top: Constrained<f64, UnitInterval>,
    xtr_bot: Constrained<f64, UnitInterval>,
}

/// A flow condition field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid {field}")]
pub struct FlowError {
    /// Name of the offending field.
    pub field: &'static str,

    /// The violated constraint.
    #[source]
    pub source: ConstraintError,
}

impl FlowError {
    fn on(field: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self { field, source }
    }
}

impl FlowCondition {
    /// Validates and builds a flow condition.
    ///
    /// # Errors
    ///
    /// Returns a [`FlowError`] naming the first field that violates its bound.
    pub fn new(
        reynolds: f64,
        mach: f64,
        n_crit: f64,
        xtr_top: f64,
        xtr_bot: f64,
    ) -> Result<Self, FlowError> {
        Ok(Self {
            reynolds: StrictlyPositive::new(reynolds).map_err(FlowError::on("reynolds"))?,
            mach: NonNegative::new(mach).map_err(FlowError::on("mach"))?,
            n_crit: StrictlyPositive::new(n_crit).map_err(FlowError::on("n_crit"))?,
            xtr_top: UnitInterval::new(xtr_top).map_err(FlowError::on("xtr_top"))?,
            xtr_bot: UnitInterval::new(xtr_bot).map_err(FlowError::on("xtr_bot"))?,
        })
    }

    /// Incompressible free-transition flow with `NCrit = 9` at the given Reynolds number.
    ///
    /// # Errors
    ///
    /// Returns a [`FlowError`] if `reynolds` is not strictly positive.
    pub fn incompressible(reynolds: f64) -> Result<Self, FlowError> {
        Ok(Self {
            reynolds: StrictlyPositive::new(reynolds).map_err(FlowError::on("reynolds"))?,
            mach: NonNegative::zero(),
            n_crit: StrictlyPositive::new(9.0).map_err(FlowError::on("n_crit"))?,
            xtr_top: UnitInterval::one(),
            xtr_bot: UnitInterval::one(),
        })
    }

    /// Chord Reynolds number.
    #[must_use]
    pub fn reynolds(&self) -> f64 {
        self.reynolds.into_inner()
    }

    /// Free-stream Mach number.
    #[must_use]
    pub fn mach(&self) -> f64 {
        self.mach.into_inner()
    }

    /// Critical amplification factor for natural transition.
    #[must_use]
    pub fn n_crit(&self) -> f64 {
        self.n_crit.into_inner()
    }

    /// Forced transition location on the upper surface, `x/c`.
    #[must_use]
    pub fn xtr_top(&self) -> f64 {
        self.xtr_top.into_inner()
    }

    /// Forced transition location on the lower surface, `x/c`.
    #[must_use]
    pub fn xtr_bot(&self) -> f64 {
        self.xtr_bot.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn accepts_valid_conditions() {
        let flow = FlowCondition::new(1.0e6, 0.2, 9.0, 0.1, 1.0).unwrap();
        assert_eq!(flow.reynolds(), 1.0e6);
        assert_eq!(flow.mach(), 0.2);
        assert_eq!(flow.n_crit(), 9.0);
        assert_eq!(flow.xtr_top(), 0.1);
        assert_eq!(flow.xtr_bot(), 1.0);
    }

    #[test]
    fn incompressible_defaults() {
        let flow = FlowCondition::incompressible(5.0e5).unwrap();
        assert_eq!(flow, FlowCondition::new(5.0e5, 0.0, 9.0, 1.0, 1.0).unwrap());
    }

    #[test]
    fn names_the_offending_field() {
        let cases = [
            (FlowCondition::new(0.0, 0.0, 9.0, 1.0, 1.0), "reynolds", ConstraintError::Zero),
            (FlowCondition::new(1e6, -0.1, 9.0, 1.0, 1.0), "mach", ConstraintError::Negative),
            (FlowCondition::new(1e6, 0.0, 0.0, 1.0, 1.0), "n_crit", ConstraintError::Zero),
            (
                FlowCondition::new(1e6, 0.0, 9.0, 1.5, 1.0),
                "xtr_top",
                ConstraintError::AboveMaximum,
            ),
            (
                FlowCondition::new(1e6, 0.0, 9.0, 1.0, f64::NAN),
                "xtr_bot",
                ConstraintError::NotANumber,
            ),
        ];

        for (result, field, source) in cases {
            assert_eq!(result, Err(FlowError { field, source }));
        }
    }

    #[test]
    fn error_message_includes_field() {
        use std::error::Error;

        let err = FlowCondition::incompressible(-1.0).unwrap_err();
        assert_eq!(err.to_string(), "invalid reynolds");
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("value must not be negative")
        );
    }
}
