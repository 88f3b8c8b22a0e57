mod lower_open;

use uom::si::{f64::Ratio, ratio::ratio};

pub use lower_open::UnitIntervalLowerOpen;

/// Supplies 0 and 1 for types used with unit-interval constraints.
///
/// Implement this trait for your type `T` if you want to use it with
/// `Constrained<T, UnitIntervalLowerOpen>`.
/// Implementations should ensure that `zero() < one()` under the type's
/// `PartialOrd` so the interval is well-formed.
pub trait UnitBounds: PartialOrd {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for Ratio {
    fn zero() -> Self {
        Ratio::new::<ratio>(0.0)
    }
    fn one() -> Self {
        Ratio::new::<ratio>(1.0)
    }
}
