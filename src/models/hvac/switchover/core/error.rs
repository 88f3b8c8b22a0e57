use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors caused by inputs that cannot describe a real dual-fuel system.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InputError {
    /// A single input violates its numeric constraint.
    #[error("invalid {field}")]
    Invalid {
        /// Name of the offending input, as spelled on the command line.
        field: &'static str,

        /// The violated constraint.
        source: ConstraintError,
    },

    /// Both COP samples were measured at the same outdoor temperature.
    ///
    /// A line through two points at one temperature has no defined slope.
    #[error("sample temperatures must differ, both are {temperature_f}°F")]
    SameTemperature {
        /// The shared sample temperature, in °F.
        temperature_f: f64,
    },
}

impl InputError {
    pub(super) fn invalid(field: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::Invalid { field, source }
    }
}

/// Reasons the COP curve never meets the COP threshold at a single temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NoCrossing {
    /// The heat pump costs less at every outdoor temperature.
    #[error("the heat pump is cheaper at every outdoor temperature")]
    HeatPumpAlways,

    /// The furnace costs less at every outdoor temperature.
    #[error("the furnace is cheaper at every outdoor temperature")]
    FurnaceAlways,

    /// Both heat sources cost the same at every outdoor temperature.
    #[error("both heat sources cost the same at every outdoor temperature")]
    Indifferent,

    /// The crossing exists only beyond the range of representable temperatures.
    #[error("the crossing lies beyond any representable temperature")]
    OutOfRange,
}

/// Errors returned by the switchover calculation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SwitchoverError {
    /// The inputs were rejected before any arithmetic ran.
    #[error("invalid input")]
    InvalidInput(#[from] InputError),

    /// The inputs are valid but there is no finite switchover temperature.
    #[error("no finite switchover point")]
    NoSolution(#[from] NoCrossing),
}
