use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Use this type with [`Constrained<T, StrictlyPositive>`] to encode strict
/// positivity at the type level.
///
/// You can construct a value constrained to be strictly positive using
/// either the generic [`Constrained::new`] method or the convenient
/// [`StrictlyPositive::new`] associated function.
///
/// # Examples
///
/// ```
/// use dual_fuel_models::support::constraint::{Constrained, StrictlyPositive};
///
/// // Generic constructor:
/// let x = Constrained::<_, StrictlyPositive>::new(1).unwrap();
/// assert_eq!(x.into_inner(), 1);
///
/// // Associated constructor:
/// let y = StrictlyPositive::new(2.56).unwrap();
/// assert_eq!(y.into_inner(), 2.56);
///
/// // Error cases:
/// assert!(StrictlyPositive::new(0).is_err());
/// assert!(StrictlyPositive::new(-1).is_err());
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

    use uom::si::{f64::Ratio, ratio::ratio};

    #[test]
    fn integers() {
        let x = Constrained::<i32, StrictlyPositive>::new(1).unwrap();
        assert_eq!(x.into_inner(), 1);

        let y = StrictlyPositive::new(42).unwrap();
        assert_eq!(y.as_ref(), &42);

        assert!(StrictlyPositive::new(0).is_err());
        assert!(StrictlyPositive::new(-2).is_err());
    }

    #[test]
    fn floats() {
        assert!(Constrained::<f64, StrictlyPositive>::new(3.72).is_ok());
        assert!(StrictlyPositive::new(0.1).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-5.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn ratios() {
        assert!(StrictlyPositive::new(Ratio::new::<ratio>(2.5)).is_ok());
        assert!(StrictlyPositive::new(Ratio::new::<ratio>(0.0)).is_err());
        assert!(StrictlyPositive::new(Ratio::new::<ratio>(-1.0)).is_err());
    }
}
