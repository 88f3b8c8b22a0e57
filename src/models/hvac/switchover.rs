//! Heat pump to furnace switchover temperature.
//!
//! A dual-fuel system heats with an electric heat pump in mild weather and a
//! gas furnace in cold weather. The heat pump's coefficient of performance
//! (COP) falls as the outdoor air gets colder, so at some outdoor temperature
//! a BTU of heat from the furnace becomes cheaper than one from the heat pump.
//! That temperature is the *switchover temperature*.
//!
//! This module provides [`SwitchoverModel`], a [`twine_core::Model`]
//! implementation, and [`switchover_temperature`], a plain function taking the
//! raw inputs. The computational core is in the internal `core` module.
//!
//! # Example
//!
//! ```
//! use dual_fuel_models::models::hvac::switchover::{HeatSource, SwitchoverInput};
//! use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_fahrenheit};
//!
//! let input = SwitchoverInput::new(2.56, 3.72, 17.0, 47.0, 1.06, 0.125, 0.90)?;
//! let result = input.solve()?;
//!
//! assert!((result.temperature_f() - 31.24).abs() < 0.01);
//!
//! let cold = ThermodynamicTemperature::new::<degree_fahrenheit>(10.0);
//! assert_eq!(result.preferred_source(cold), HeatSource::Furnace);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod core;

pub use self::core::{
    CopSample, CopThreshold, FuelPrices, Furnace, HeatSource, InputError, LinearCop, NoCrossing,
    OperatingCosts, Switchover, SwitchoverError, SwitchoverInput, switchover,
};

use twine_core::Model;

/// [`twine_core::Model`] adapter for the switchover calculation.
///
/// Stateless: every call solves its input from scratch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwitchoverModel;

impl Model for SwitchoverModel {
    type Input = SwitchoverInput;
    type Output = Switchover;
    type Error = SwitchoverError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        switchover(input)
    }
}

/// Computes the switchover temperature, in °F, from raw inputs.
///
/// - `cop_at_t1`, `cop_at_t2`: measured heat pump COP at `t1` and `t2`.
/// - `t1`, `t2`: outdoor temperatures of those measurements, in °F.
/// - `cost_gas_per_billing_unit`: gas price per therm.
/// - `cost_elec_per_billing_unit`: electricity price per kWh.
/// - `gas_furnace_efficiency`: fraction of gas energy delivered as heat.
///
/// Below the returned temperature the furnace is cheaper to run, provided the
/// COP rises with outdoor temperature.
///
/// # Errors
///
/// Returns [`SwitchoverError::InvalidInput`] for out-of-range inputs or
/// `t1 == t2`, and [`SwitchoverError::NoSolution`] when no finite switchover
/// temperature exists.
///
/// # Example
///
/// ```
/// use dual_fuel_models::models::hvac::switchover::{
///     InputError, SwitchoverError, switchover_temperature,
/// };
///
/// let t = switchover_temperature(2.56, 3.72, 17.0, 47.0, 1.06, 0.125, 0.90).unwrap();
/// assert!((t - 31.24).abs() < 0.01);
///
/// let err = switchover_temperature(2.56, 3.72, 30.0, 30.0, 1.06, 0.125, 0.90).unwrap_err();
/// assert!(matches!(
///     err,
///     SwitchoverError::InvalidInput(InputError::SameTemperature { .. })
/// ));
/// ```
pub fn switchover_temperature(
    cop_at_t1: f64,
    cop_at_t2: f64,
    t1: f64,
    t2: f64,
    cost_gas_per_billing_unit: f64,
    cost_elec_per_billing_unit: f64,
    gas_furnace_efficiency: f64,
) -> Result<f64, SwitchoverError> {
    let input = SwitchoverInput::new(
        cop_at_t1,
        cop_at_t2,
        t1,
        t2,
        cost_gas_per_billing_unit,
        cost_elec_per_billing_unit,
        gas_furnace_efficiency,
    )?;

    Ok(switchover(&input)?.temperature_f())
}
