use std::ops::Deref;

use super::{FuelPrices, Furnace, NoCrossing};

/// The heat pump COP at which both heat sources cost the same per BTU delivered.
///
/// Above this COP the heat pump is cheaper; below it the furnace is.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CopThreshold(f64);

impl CopThreshold {
    /// Finds the break-even COP for the given prices and furnace.
    ///
    /// A furnace delivers heat at `gas_per_btu / efficiency`, a heat pump at
    /// `electricity_per_btu / cop`. Equating the two gives the threshold.
    ///
    /// # Errors
    ///
    /// Returns a [`NoCrossing`] if gas is free, since then no heat pump COP can
    /// match the furnace: it ties only when electricity is free as well.
    pub fn new(prices: &FuelPrices, furnace: &Furnace) -> Result<Self, NoCrossing> {
        let gas_per_btu = prices.gas_per_btu();
        let electricity_per_btu = prices.electricity_per_btu();

        if gas_per_btu == 0.0 {
            return Err(if electricity_per_btu == 0.0 {
                NoCrossing::Indifferent
            } else {
                NoCrossing::FurnaceAlways
            });
        }

        let threshold = electricity_per_btu / furnace.delivered_cost_per_btu(gas_per_btu);

        // Gas so cheap the ratio overflows.
        if !threshold.is_finite() {
            return Err(NoCrossing::FurnaceAlways);
        }

        Ok(Self(threshold))
    }

    /// The threshold as a plain COP value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Deref for CopThreshold {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::models::hvac::switchover::core::InputError;

    #[test]
    fn reference_prices() -> Result<(), InputError> {
        let prices = FuelPrices::new(1.06, 0.125)?;
        let furnace = Furnace::new(0.90)?;

        let threshold = CopThreshold::new(&prices, &furnace).expect("gas is not free");

        // (0.125 / 3412) / ((1.06 / 100_000) / 0.90)
        assert_relative_eq!(threshold.value(), 3.110_553_2, epsilon = 1e-6);
        Ok(())
    }

    #[test]
    fn less_efficient_furnace_lowers_threshold() -> Result<(), InputError> {
        let prices = FuelPrices::new(1.06, 0.125)?;

        let efficient = CopThreshold::new(&prices, &Furnace::new(0.98)?).expect("finite");
        let wasteful = CopThreshold::new(&prices, &Furnace::new(0.80)?).expect("finite");

        assert!(wasteful < efficient);
        Ok(())
    }

    #[test]
    fn free_electricity_gives_zero_threshold() -> Result<(), InputError> {
        let prices = FuelPrices::new(1.06, 0.0)?;
        let threshold = CopThreshold::new(&prices, &Furnace::new(0.90)?).expect("finite");

        assert_eq!(*threshold, 0.0);
        Ok(())
    }

    #[test]
    fn free_gas_has_no_threshold() -> Result<(), InputError> {
        let furnace = Furnace::new(0.90)?;

        assert_eq!(
            CopThreshold::new(&FuelPrices::new(0.0, 0.125)?, &furnace),
            Err(NoCrossing::FurnaceAlways)
        );
        assert_eq!(
            CopThreshold::new(&FuelPrices::new(0.0, 0.0)?, &furnace),
            Err(NoCrossing::Indifferent)
        );
        Ok(())
    }
}
