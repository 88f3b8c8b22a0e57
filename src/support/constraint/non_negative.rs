use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Fuel prices use this constraint: a free fuel is unusual but well defined,
/// while a negative price is not.
///
/// # Examples
///
/// ```
/// use dual_fuel_models::support::constraint::{Constrained, NonNegative};
///
/// // Generic constructor:
/// let x = Constrained::<_, NonNegative>::new(1.06).unwrap();
/// assert_eq!(x.into_inner(), 1.06);
///
/// // Associated constructor:
/// let y = NonNegative::new(0.0).unwrap();
/// assert_eq!(y.into_inner(), 0.0);
///
/// // Error cases:
/// assert!(NonNegative::new(-7).is_err());
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
