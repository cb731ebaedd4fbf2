use std::{cmp::Ordering, marker::PhantomData};

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Free-stream Mach number uses this bound; incompressible analysis is Mach zero.
///
/// # Examples
///
/// ```
/// use foil_models::support::constraint::{Constrained, NonNegative};
///
/// let mach = Constrained::<_, NonNegative>::new(0.3).unwrap();
/// assert_eq!(mach.into_inner(), 0.3);
///
/// let incompressible = NonNegative::zero::<f64>();
/// assert_eq!(incompressible.into_inner(), 0.0);
///
/// assert!(NonNegative::new(-0.1).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }

    /// Returns zero as a non-negative constrained value.
    #[must_use]
    pub fn zero<T: PartialOrd + Zero>() -> Constrained<T, NonNegative> {
        Constrained::<T, NonNegative> {
            value: T::zero(),
            _marker: PhantomData,
        }
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn mach_numbers() {
        assert!(Constrained::<f64, NonNegative>::new(0.7).is_ok());
        assert!(NonNegative::new(0.0).is_ok());
        assert_eq!(NonNegative::zero::<f64>().into_inner(), 0.0);
        assert_eq!(NonNegative::new(-0.2), Err(ConstraintError::Negative));
        assert_eq!(NonNegative::new(f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn infinity_is_allowed_by_the_bound() {
        // Upper limits are a model concern, not a sign constraint.
        assert!(NonNegative::new(f64::INFINITY).is_ok());
    }
}
