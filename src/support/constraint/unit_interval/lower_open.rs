use std::cmp::Ordering;

use crate::support::constraint::{Constrained, Constraint, ConstraintError, UnitBounds};

/// Marker type enforcing that a value lies in the left-open unit interval: `0 < x ≤ 1`.
///
/// Efficiencies of combustion equipment live here: a furnace that converts none
/// of its fuel into heat cannot be compared against anything, and one that
/// converts more than all of it does not exist.
///
/// Requires `T: UnitBounds`.
/// We provide [`UnitBounds`] implementations for `f64` and `uom::si::f64::Ratio`.
///
/// # Examples
///
/// Using with `f64`:
///
/// ```
/// use dual_fuel_models::support::constraint::{Constrained, UnitIntervalLowerOpen};
///
/// // Generic constructor:
/// let a = Constrained::<_, UnitIntervalLowerOpen>::new(0.9).unwrap();
/// assert_eq!(a.into_inner(), 0.9);
///
/// // Associated constructor:
/// let b = UnitIntervalLowerOpen::new(1.0).unwrap();
/// assert_eq!(b.as_ref(), &1.0);
///
/// // Error cases:
/// assert!(UnitIntervalLowerOpen::new(0.0).is_err());
/// assert!(UnitIntervalLowerOpen::new(-0.5).is_err());
/// assert!(UnitIntervalLowerOpen::new(f64::NAN).is_err());
/// ```
///
/// Using with `uom::si::f64::Ratio`:
///
/// ```
/// use dual_fuel_models::support::constraint::{Constrained, UnitIntervalLowerOpen};
/// use uom::si::{f64::Ratio, ratio::{ratio, percent}};
///
/// let r = Constrained::<Ratio, UnitIntervalLowerOpen>::new(Ratio::new::<percent>(95.0)).unwrap();
/// assert!((r.as_ref().get::<ratio>() - 0.95).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalLowerOpen;

impl UnitIntervalLowerOpen {
    /// Constructs `Constrained<T, UnitIntervalLowerOpen>` if 0 < value ≤ 1.
    ///
    /// # Errors
    ///
    /// Fails if the value is outside the lower-open unit interval:
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than or equal to zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(
        value: T,
    ) -> Result<Constrained<T, UnitIntervalLowerOpen>, ConstraintError> {
        Constrained::<T, UnitIntervalLowerOpen>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitIntervalLowerOpen {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less | Ordering::Equal), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::support::constraint::*;

    use uom::si::{
        f64::Ratio,
        ratio::{percent, ratio},
    };

    #[test]
    fn floats_valid() {
        assert!(Constrained::<f64, UnitIntervalLowerOpen>::new(0.1).is_ok());
        assert!(Constrained::<f64, UnitIntervalLowerOpen>::new(1.0).is_ok());
        assert!(UnitIntervalLowerOpen::new(0.9).is_ok());
    }

    #[test]
    fn floats_out_of_range() {
        assert!(matches!(
            UnitIntervalLowerOpen::new(0.0),
            Err(ConstraintError::BelowMinimum)
        ));
        assert!(matches!(
            UnitIntervalLowerOpen::new(-1.0),
            Err(ConstraintError::BelowMinimum)
        ));
        assert!(matches!(
            UnitIntervalLowerOpen::new(1.000_000_1),
            Err(ConstraintError::AboveMaximum)
        ));
    }

    #[test]
    fn floats_nan_is_not_a_number() {
        assert!(matches!(
            UnitIntervalLowerOpen::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        ));
    }

    #[test]
    fn uom_ratio_valid() {
        assert!(
            Constrained::<Ratio, UnitIntervalLowerOpen>::new(Ratio::new::<percent>(80.0)).is_ok()
        );
        assert!(Constrained::<Ratio, UnitIntervalLowerOpen>::new(Ratio::new::<ratio>(1.0)).is_ok());
    }

    #[test]
    fn uom_ratio_out_of_range() {
        assert!(matches!(
            UnitIntervalLowerOpen::new(Ratio::new::<ratio>(0.0)),
            Err(ConstraintError::BelowMinimum)
        ));
        assert!(matches!(
            UnitIntervalLowerOpen::new(Ratio::new::<percent>(110.0)),
            Err(ConstraintError::AboveMaximum)
        ));
    }
}
