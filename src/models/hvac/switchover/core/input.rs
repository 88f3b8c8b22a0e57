use uom::si::{
    f64::{Ratio, ThermodynamicTemperature},
    ratio::ratio,
    thermodynamic_temperature::degree_fahrenheit,
};

use crate::support::{
    constraint::{
        Constrained, Constraint, Finite, NonNegative, StrictlyPositive, UnitIntervalLowerOpen,
    },
    units::BillingUnit,
};

use super::InputError;

/// A measured heat pump efficiency at one outdoor temperature.
///
/// Manufacturers publish these at rating points, conventionally 17°F and 47°F.
/// The temperature is kept in °F exactly as given, so two distinct inputs
/// never collapse through a unit conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CopSample {
    temperature_f: Constrained<f64, Finite>,

    /// Coefficient of performance at that temperature.
    pub cop: Constrained<f64, StrictlyPositive>,
}

impl CopSample {
    /// Creates a sample from an outdoor temperature in °F and a COP.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Invalid`] if the temperature is not finite or the
    /// COP is not strictly positive.
    pub fn new(temperature_f: f64, cop: f64) -> Result<Self, InputError> {
        Self::checked("temperature", temperature_f, "cop", cop)
    }

    fn checked(
        temperature_field: &'static str,
        temperature_f: f64,
        cop_field: &'static str,
        cop: f64,
    ) -> Result<Self, InputError> {
        Ok(Self {
            temperature_f: Finite::new(temperature_f)
                .map_err(InputError::invalid(temperature_field))?,
            cop: finite_and::<StrictlyPositive>(cop_field, cop)?,
        })
    }

    /// Outdoor dry-bulb temperature of the measurement.
    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_fahrenheit>(self.temperature_f())
    }

    /// Outdoor temperature of the sample, in °F, as given.
    #[must_use]
    pub fn temperature_f(&self) -> f64 {
        *self.temperature_f.as_ref()
    }
}

/// Utility prices for both fuels, in their billing units.
///
/// Any currency works as long as both prices use the same one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelPrices {
    /// Natural gas price per therm.
    pub gas_per_therm: Constrained<f64, NonNegative>,

    /// Electricity price per kilowatt-hour.
    pub electricity_per_kwh: Constrained<f64, NonNegative>,
}

impl FuelPrices {
    /// Creates prices from a cost per therm of gas and per kWh of electricity.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Invalid`] if either price is negative or not finite.
    pub fn new(gas_per_therm: f64, electricity_per_kwh: f64) -> Result<Self, InputError> {
        Ok(Self {
            gas_per_therm: finite_and::<NonNegative>("cost-gas-per-unit", gas_per_therm)?,
            electricity_per_kwh: finite_and::<NonNegative>(
                "cost-elec-per-unit",
                electricity_per_kwh,
            )?,
        })
    }

    /// Gas price per BTU of fuel burned.
    #[must_use]
    pub fn gas_per_btu(&self) -> f64 {
        BillingUnit::Therm.price_per_btu(*self.gas_per_therm.as_ref())
    }

    /// Electricity price per BTU of electrical energy consumed.
    #[must_use]
    pub fn electricity_per_btu(&self) -> f64 {
        BillingUnit::KilowattHour.price_per_btu(*self.electricity_per_kwh.as_ref())
    }

    /// Returns these prices with both multiplied by `factor`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Invalid`] if the scaled prices are negative or
    /// not finite.
    pub fn scaled(&self, factor: f64) -> Result<Self, InputError> {
        Self::new(
            self.gas_per_therm.as_ref() * factor,
            self.electricity_per_kwh.as_ref() * factor,
        )
    }
}

/// The gas furnace half of a dual-fuel system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Furnace {
    /// Fraction of the fuel's heat that reaches the building.
    pub efficiency: Constrained<Ratio, UnitIntervalLowerOpen>,
}

impl Furnace {
    /// Creates a furnace from its efficiency as a fraction, such as `0.95`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Invalid`] unless `0 < efficiency ≤ 1`.
    pub fn new(efficiency: f64) -> Result<Self, InputError> {
        Ok(Self {
            efficiency: UnitIntervalLowerOpen::new(Ratio::new::<ratio>(efficiency))
                .map_err(InputError::invalid("furnace-efficiency"))?,
        })
    }

    /// Efficiency as a plain fraction.
    #[must_use]
    pub fn efficiency(&self) -> f64 {
        self.efficiency.as_ref().get::<ratio>()
    }

    /// Cost of one BTU of heat delivered to the building, given the price of
    /// one BTU of gas.
    #[must_use]
    pub fn delivered_cost_per_btu(&self, gas_per_btu: f64) -> f64 {
        gas_per_btu / self.efficiency()
    }
}

/// Everything the switchover calculation needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchoverInput {
    /// Two heat pump COP measurements at different outdoor temperatures.
    pub samples: [CopSample; 2],

    /// Fuel prices.
    pub prices: FuelPrices,

    /// The gas furnace.
    pub furnace: Furnace,
}

impl SwitchoverInput {
    /// Validates raw inputs in the units utilities and manufacturers publish.
    ///
    /// Temperatures are in °F, prices are per therm of gas and per kWh of
    /// electricity, and the furnace efficiency is a fraction.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Invalid`] naming the first input that violates its
    /// constraint, or [`InputError::SameTemperature`] if `t1 == t2`.
    pub fn new(
        cop_at_t1: f64,
        cop_at_t2: f64,
        t1: f64,
        t2: f64,
        cost_gas_per_unit: f64,
        cost_elec_per_unit: f64,
        furnace_efficiency: f64,
    ) -> Result<Self, InputError> {
        let samples = [
            CopSample::checked("t1", t1, "cop-at-t1", cop_at_t1)?,
            CopSample::checked("t2", t2, "cop-at-t2", cop_at_t2)?,
        ];

        if t1 == t2 {
            return Err(InputError::SameTemperature { temperature_f: t1 });
        }

        Ok(Self {
            samples,
            prices: FuelPrices::new(cost_gas_per_unit, cost_elec_per_unit)?,
            furnace: Furnace::new(furnace_efficiency)?,
        })
    }
}

/// Checks that `value` is finite and then that it satisfies `C`.
fn finite_and<C: Constraint<f64>>(
    field: &'static str,
    value: f64,
) -> Result<Constrained<f64, C>, InputError> {
    let value = Finite::new(value)
        .map_err(InputError::invalid(field))?
        .into_inner();
    Constrained::<f64, C>::new(value).map_err(InputError::invalid(field))
}
