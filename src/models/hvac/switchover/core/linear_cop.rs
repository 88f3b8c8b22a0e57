use std::cmp::Ordering;

use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_fahrenheit};

use crate::support::constraint::{ConstraintError, NonZero};

use super::{CopSample, InputError, NoCrossing};

/// Heat pump COP as a straight line in outdoor temperature.
///
/// The line passes through two measured [`CopSample`]s and is extended
/// linearly beyond them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearCop {
    slope: f64,
    intercept: f64,
    samples: [CopSample; 2],
}

impl LinearCop {
    /// Fits the line through two samples.
    ///
    /// The order of the samples does not matter. Slope and intercept come
    /// from the temperatures in °F as given.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::SameTemperature`] if both samples share a
    /// temperature, or [`InputError::Invalid`] if a temperature is `NaN`.
    pub fn through(samples: [CopSample; 2]) -> Result<Self, InputError> {
        let [first, second] = samples;

        let span = NonZero::new(second.temperature_f() - first.temperature_f())
            .map_err(|source| match source {
                ConstraintError::Zero => InputError::SameTemperature {
                    temperature_f: first.temperature_f(),
                },
                source => InputError::Invalid {
                    field: "temperature",
                    source,
                },
            })?
            .into_inner();

        let rise = second.cop.as_ref() - first.cop.as_ref();
        let slope = rise / span;
        let intercept = first.cop.as_ref() - slope * first.temperature_f();

        Ok(Self {
            slope,
            intercept,
            samples,
        })
    }

    /// Change in COP per °F of outdoor temperature.
    #[must_use]
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// COP at 0°F.
    #[must_use]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// The samples the line was fitted through, in the order given.
    #[must_use]
    pub fn samples(&self) -> [CopSample; 2] {
        self.samples
    }

    /// Returns whether `temperature` lies between the two samples, inclusive.
    #[must_use]
    pub fn covers(&self, temperature: ThermodynamicTemperature) -> bool {
        let [a, b] = self.samples.map(|sample| sample.temperature());
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        low <= temperature && temperature <= high
    }

    /// Evaluates the COP at an outdoor temperature.
    ///
    /// Far enough outside the sampled range the result can reach zero or go
    /// negative, which no real heat pump does.
    #[must_use]
    pub fn cop_at(&self, temperature: ThermodynamicTemperature) -> f64 {
        self.intercept + self.slope * temperature.get::<degree_fahrenheit>()
    }

    /// Finds the outdoor temperature at which the line reaches `cop`.
    ///
    /// # Errors
    ///
    /// On a flat line there is no single crossing. The error then says which
    /// side of the line `cop` falls on, read as a break-even COP threshold:
    /// a line above the threshold means the heat pump always wins.
    pub fn temperature_at(&self, cop: f64) -> Result<ThermodynamicTemperature, NoCrossing> {
        if self.slope == 0.0 {
            return Err(match self.intercept.partial_cmp(&cop) {
                Some(Ordering::Greater) => NoCrossing::HeatPumpAlways,
                Some(Ordering::Less) => NoCrossing::FurnaceAlways,
                Some(Ordering::Equal) => NoCrossing::Indifferent,
                None => NoCrossing::OutOfRange,
            });
        }

        let temperature_f = (cop - self.intercept) / self.slope;
        if !temperature_f.is_finite() {
            return Err(NoCrossing::OutOfRange);
        }

        Ok(ThermodynamicTemperature::new::<degree_fahrenheit>(
            temperature_f,
        ))
    }
}
