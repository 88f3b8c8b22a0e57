use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-zero (not equal to zero).
///
/// Use this type with [`Constrained<T, NonZero>`] to encode a non-zero
/// constraint at the type level, for example the span between two sample
/// temperatures that a slope is divided by.
///
/// # Examples
///
/// ```
/// use dual_fuel_models::support::constraint::{Constrained, NonZero};
///
/// // Generic constructor:
/// let x = Constrained::<_, NonZero>::new(1).unwrap();
/// assert_eq!(x.into_inner(), 1);
///
/// // Associated constructor:
/// let y = NonZero::new(-30.0).unwrap();
/// assert_eq!(y.into_inner(), -30.0);
///
/// // Error cases:
/// assert!(NonZero::new(0).is_err());
/// assert!(NonZero::new(0.0).is_err());
/// assert!(NonZero::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonZero;

impl NonZero {
    /// Constructs a [`Constrained<T, NonZero>`] if the value is not zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(value: T) -> Result<Constrained<T, NonZero>, ConstraintError> {
        Constrained::<T, NonZero>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonZero {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Less) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
