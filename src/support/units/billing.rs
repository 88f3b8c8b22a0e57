/// Heat content of one therm of natural gas, in BTU.
pub const BTU_PER_THERM: f64 = 100_000.0;

/// Energy in one kilowatt-hour, in BTU, rounded the way utility comparisons
/// conventionally round it.
pub const BTU_PER_KILOWATT_HOUR: f64 = 3412.0;

/// A unit in which a utility bills energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingUnit {
    /// Natural gas, billed per therm.
    Therm,
    /// Electricity, billed per kilowatt-hour.
    KilowattHour,
}

impl BillingUnit {
    /// Energy content of one billing unit, in BTU.
    #[must_use]
    pub fn btu(self) -> f64 {
        match self {
            Self::Therm => BTU_PER_THERM,
            Self::KilowattHour => BTU_PER_KILOWATT_HOUR,
        }
    }

    /// Converts a price per billing unit into a price per BTU.
    #[must_use]
    pub fn price_per_btu(self, price_per_unit: f64) -> f64 {
        price_per_unit / self.btu()
    }

    /// Short label used in reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Therm => "therm",
            Self::KilowattHour => "kWh",
        }
    }
}
