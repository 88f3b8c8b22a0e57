use std::fmt;

use uom::si::f64::ThermodynamicTemperature;

use super::{Furnace, InputError, LinearCop, SwitchoverInput};

/// One of the two heat sources in a dual-fuel system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeatSource {
    /// Electric air-source heat pump.
    HeatPump,
    /// Natural gas furnace.
    Furnace,
}

impl fmt::Display for HeatSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::HeatPump => "heat pump",
            Self::Furnace => "furnace",
        })
    }
}

/// What each heat source charges per BTU of heat delivered to the building.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingCosts {
    /// Heat pump COP as a function of outdoor temperature.
    pub curve: LinearCop,

    /// Gas price per BTU burned.
    pub gas_per_btu: f64,

    /// Electricity price per BTU consumed.
    pub electricity_per_btu: f64,

    /// The furnace converting gas into delivered heat.
    pub furnace: Furnace,
}

impl OperatingCosts {
    /// Fits the COP curve and converts prices to a per-BTU basis.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::SameTemperature`] if both samples share a temperature.
    pub fn new(input: &SwitchoverInput) -> Result<Self, InputError> {
        Ok(Self {
            curve: LinearCop::through(input.samples)?,
            gas_per_btu: input.prices.gas_per_btu(),
            electricity_per_btu: input.prices.electricity_per_btu(),
            furnace: input.furnace,
        })
    }

    /// Cost per BTU of heat delivered by `source` at an outdoor temperature.
    ///
    /// Where the extended COP line reaches zero the heat pump delivers no heat,
    /// and its cost is reported as infinite.
    #[must_use]
    pub fn heating_cost_per_btu(
        &self,
        source: HeatSource,
        outdoor: ThermodynamicTemperature,
    ) -> f64 {
        match source {
            HeatSource::Furnace => self.furnace.delivered_cost_per_btu(self.gas_per_btu),
            HeatSource::HeatPump => {
                let cop = self.curve.cop_at(outdoor);
                if cop > 0.0 {
                    self.electricity_per_btu / cop
                } else {
                    f64::INFINITY
                }
            }
        }
    }

    /// The cheaper heat source at an outdoor temperature.
    ///
    /// Ties go to the heat pump.
    #[must_use]
    pub fn preferred_source(&self, outdoor: ThermodynamicTemperature) -> HeatSource {
        let heat_pump = self.heating_cost_per_btu(HeatSource::HeatPump, outdoor);
        let furnace = self.heating_cost_per_btu(HeatSource::Furnace, outdoor);

        if heat_pump <= furnace {
            HeatSource::HeatPump
        } else {
            HeatSource::Furnace
        }
    }
}
