//! Type-level numeric constraints for flow and geometry inputs.
//!
//! Flow conditions arrive from callers as bare numbers. Wrapping them in
//! [`Constrained<T, C>`] means a Reynolds number that is zero, a negative Mach
//! number, or a transition location past the trailing edge is rejected once,
//! at construction, instead of surfacing later as a NaN inside a model.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: Zero or greater (e.g., Mach number)
//! - [`StrictlyPositive`]: Greater than zero (e.g., Reynolds number, `NCrit`)
//! - [`UnitInterval`]: Closed unit interval `0 ≤ x ≤ 1` (e.g., `x/c` locations)
//!
//! Each marker also provides an associated `new()` constructor
//! (e.g., `StrictlyPositive::new(1.0e6)`).
//!
//! # Extending
//!
//! Custom invariants can be added by implementing [`Constraint<T>`] for a
//! zero-sized marker type.

mod non_negative;
mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitInterval};

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use foil_models::support::constraint::{Constrained, StrictlyPositive};
///
/// let re = Constrained::<_, StrictlyPositive>::new(1.0e6).unwrap();
/// assert_eq!(re.into_inner(), 1.0e6);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
