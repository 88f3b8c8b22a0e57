use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_fahrenheit};

use super::{CopThreshold, HeatSource, OperatingCosts};

/// A solved switchover point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Switchover {
    /// Outdoor temperature at which both heat sources cost the same.
    pub temperature: ThermodynamicTemperature,

    /// Break-even heat pump COP.
    pub cop_threshold: CopThreshold,

    /// Per-BTU costs and the fitted COP curve behind the result.
    pub costs: OperatingCosts,
}

impl Switchover {
    /// Switchover temperature in °F.
    #[must_use]
    pub fn temperature_f(&self) -> f64 {
        self.temperature.get::<degree_fahrenheit>()
    }

    /// Returns whether the switchover lies outside the two COP samples,
    /// where the linear curve is an extrapolation.
    #[must_use]
    pub fn is_extrapolated(&self) -> bool {
        !self.costs.curve.covers(self.temperature)
    }

    /// Cost per BTU of heat delivered by `source` at an outdoor temperature.
    #[must_use]
    pub fn heating_cost_per_btu(
        &self,
        source: HeatSource,
        outdoor: ThermodynamicTemperature,
    ) -> f64 {
        self.costs.heating_cost_per_btu(source, outdoor)
    }

    /// The cheaper heat source at an outdoor temperature.
    #[must_use]
    pub fn preferred_source(&self, outdoor: ThermodynamicTemperature) -> HeatSource {
        self.costs.preferred_source(outdoor)
    }
}
