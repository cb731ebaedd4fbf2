use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Reynolds numbers and the `NCrit` amplification factor both use this bound.
///
/// # Examples
///
/// ```
/// use foil_models::support::constraint::{Constrained, StrictlyPositive};
///
/// let re = Constrained::<_, StrictlyPositive>::new(5.0e5).unwrap();
/// assert_eq!(re.into_inner(), 5.0e5);
///
/// let n_crit = StrictlyPositive::new(9.0).unwrap();
/// assert_eq!(n_crit.into_inner(), 9.0);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0e6).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{angle::degree, f64::Angle};

    #[test]
    fn reynolds_numbers() {
        assert!(Constrained::<f64, StrictlyPositive>::new(1.0e6).is_ok());
        assert!(StrictlyPositive::new(1.0).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-3.0e5), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn integers() {
        let x = StrictlyPositive::new(20).unwrap();
        assert_eq!(x.as_ref(), &20);
        assert!(StrictlyPositive::new(0).is_err());
    }

    #[test]
    fn angles() {
        assert!(StrictlyPositive::new(Angle::new::<degree>(20.0)).is_ok());
        assert!(StrictlyPositive::new(Angle::new::<degree>(0.0)).is_err());
        assert!(StrictlyPositive::new(Angle::new::<degree>(-2.0)).is_err());
    }
}
