//! Human-readable breakdown printed by `--explain`.

use dual_fuel_models::{
    models::hvac::switchover::{HeatSource, Switchover},
    support::units::BillingUnit,
};

/// Formats the intermediate quantities behind a switchover result.
pub fn explain(result: &Switchover, precision: usize) -> String {
    let costs = &result.costs;
    let [first, second] = costs.curve.samples();
    let mut out = format!("cop threshold: {:.3}\n", result.cop_threshold.value());

    out.push_str(&format!(
        "cop curve: {:.3} at {:.*}°F, {:.3} at {:.*}°F, slope {:.4} per °F\n",
        first.cop.as_ref(),
        precision,
        first.temperature_f(),
        second.cop.as_ref(),
        precision,
        second.temperature_f(),
        costs.curve.slope(),
    ));
    out.push_str(&format!(
        "gas: {:.3e} per BTU burned ({} BTU per {}), furnace efficiency {:.0}%\n",
        costs.gas_per_btu,
        BillingUnit::Therm.btu(),
        BillingUnit::Therm.label(),
        costs.furnace.efficiency() * 100.0,
    ));
    out.push_str(&format!(
        "electricity: {:.3e} per BTU ({} BTU per {})\n",
        costs.electricity_per_btu,
        BillingUnit::KilowattHour.btu(),
        BillingUnit::KilowattHour.label(),
    ));
    out.push_str(&format!(
        "delivered heat at switchover: {:.3e} per BTU\n",
        result.heating_cost_per_btu(HeatSource::Furnace, result.temperature),
    ));

    let below = if costs.curve.slope() > 0.0 {
        HeatSource::Furnace
    } else {
        HeatSource::HeatPump
    };
    out.push_str(&format!(
        "below {:.*}°F run the {below}",
        precision,
        result.temperature_f(),
    ));
    if result.is_extrapolated() {
        out.push_str(" (extrapolated beyond the COP samples)");
    }
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use dual_fuel_models::models::hvac::switchover::SwitchoverInput;

    #[test]
    fn reference_breakdown() {
        let result = SwitchoverInput::new(2.56, 3.72, 17.0, 47.0, 1.06, 0.125, 0.90)
            .unwrap()
            .solve()
            .unwrap();

        let text = explain(&result, 2);

        assert!(text.contains("cop threshold: 3.111"));
        assert!(text.contains("2.560 at 17.00°F, 3.720 at 47.00°F"));
        assert!(text.contains("furnace efficiency 90%"));
        assert!(text.ends_with("below 31.24°F run the furnace\n"));
    }

    #[test]
    fn flags_extrapolation() {
        let result = SwitchoverInput::new(2.56, 3.72, 17.0, 47.0, 1.06, 0.25, 0.90)
            .unwrap()
            .solve()
            .unwrap();

        assert!(explain(&result, 1).contains("(extrapolated beyond the COP samples)"));
    }
}
