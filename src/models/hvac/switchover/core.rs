//! Break-even analysis between a heat pump and a gas furnace.
//!
//! The calculation runs in four steps:
//!
//! 1. Convert both billing-unit prices to a price per BTU.
//! 2. Find the [`CopThreshold`] at which delivered heat costs the same.
//! 3. Fit a [`LinearCop`] through two measured COP samples.
//! 4. Invert the line at the threshold to get the switchover temperature.

mod cop_threshold;
mod costs;
mod error;
mod input;
mod linear_cop;
mod results;

pub use cop_threshold::CopThreshold;
pub use costs::{HeatSource, OperatingCosts};
pub use error::{InputError, NoCrossing, SwitchoverError};
pub use input::{CopSample, FuelPrices, Furnace, SwitchoverInput};
pub use linear_cop::LinearCop;
pub use results::Switchover;

use tracing::{debug, warn};
use uom::si::f64::ThermodynamicTemperature;

/// Solves for the switchover temperature.
///
/// # Errors
///
/// Returns [`SwitchoverError::InvalidInput`] if the samples share a
/// temperature, or [`SwitchoverError::NoSolution`] if the COP curve never
/// meets the threshold at a single temperature.
pub fn switchover(input: &SwitchoverInput) -> Result<Switchover, SwitchoverError> {
    let costs = OperatingCosts::new(input)?;
    debug!(
        gas_per_btu = costs.gas_per_btu,
        electricity_per_btu = costs.electricity_per_btu,
        furnace_efficiency = costs.furnace.efficiency(),
        "converted prices"
    );

    let cop_threshold = CopThreshold::new(&input.prices, &input.furnace)?;
    debug!(cop_threshold = cop_threshold.value(), "break-even cop");

    debug!(
        slope = costs.curve.slope(),
        intercept = costs.curve.intercept(),
        "fitted cop curve"
    );
    let temperature = costs.curve.temperature_at(cop_threshold.value())?;

    let result = Switchover {
        temperature,
        cop_threshold,
        costs,
    };

    if result.is_extrapolated() {
        let [first, second] = costs.curve.samples();
        warn!(
            switchover_f = result.temperature_f(),
            t1 = first.temperature_f(),
            t2 = second.temperature_f(),
            "switchover lies outside the sampled temperatures"
        );
    }
    debug!(switchover_f = result.temperature_f(), "solved");

    Ok(result)
}

impl SwitchoverInput {
    /// Solves for the switchover temperature.
    ///
    /// This is a convenience wrapper around [`switchover`].
    ///
    /// # Errors
    ///
    /// See [`switchover`].
    pub fn solve(&self) -> Result<Switchover, SwitchoverError> {
        switchover(self)
    }

    /// The cheaper heat source at an outdoor temperature.
    ///
    /// Unlike [`SwitchoverInput::solve`] this has an answer even when no
    /// switchover temperature exists.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::SameTemperature`] if both samples share a temperature.
    pub fn preferred_source(
        &self,
        outdoor: ThermodynamicTemperature,
    ) -> Result<HeatSource, InputError> {
        Ok(OperatingCosts::new(self)?.preferred_source(outdoor))
    }
}
