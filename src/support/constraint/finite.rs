use num_traits::Float;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a floating-point value is finite.
///
/// Rejects `NaN` as [`ConstraintError::NotANumber`] and both infinities as
/// [`ConstraintError::NotFinite`].
///
/// # Examples
///
/// ```
/// use dual_fuel_models::support::constraint::{ConstraintError, Finite};
///
/// let t = Finite::new(-12.5).unwrap();
/// assert_eq!(t.into_inner(), -12.5);
///
/// assert_eq!(Finite::new(f64::INFINITY).unwrap_err(), ConstraintError::NotFinite);
/// assert_eq!(Finite::new(f64::NAN).unwrap_err(), ConstraintError::NotANumber);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Finite;

impl Finite {
    /// Constructs a [`Constrained<T, Finite>`] if the value is finite.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is infinite or not a number (`NaN`).
    pub fn new<T: Float>(value: T) -> Result<Constrained<T, Finite>, ConstraintError> {
        Constrained::<T, Finite>::new(value)
    }
}

impl<T: Float> Constraint<T> for Finite {
    fn check(value: &T) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if value.is_infinite() {
            Err(ConstraintError::NotFinite)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floats() {
        assert!(Constrained::<f64, Finite>::new(0.0).is_ok());
        assert!(Finite::new(-40.0_f64).is_ok());
        assert!(Finite::new(f32::MAX).is_ok());
    }

    #[test]
    fn non_finite() {
        assert_eq!(Finite::new(f64::INFINITY), Err(ConstraintError::NotFinite));
        assert_eq!(
            Finite::new(f64::NEG_INFINITY),
            Err(ConstraintError::NotFinite)
        );
        assert_eq!(Finite::new(f64::NAN), Err(ConstraintError::NotANumber));
    }
}
