use approx::assert_relative_eq;
use dual_fuel_models::models::hvac::switchover::{
    HeatSource, InputError, NoCrossing, SwitchoverError, SwitchoverInput, SwitchoverModel,
    switchover_temperature,
};
use twine_core::Model;
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_fahrenheit};

const COP_17: f64 = 2.56;
const COP_47: f64 = 3.72;
const GAS: f64 = 1.06;
const ELEC: f64 = 0.125;
const FURNACE: f64 = 0.90;

fn reference(elec: f64) -> Result<f64, SwitchoverError> {
    switchover_temperature(COP_17, COP_47, 17.0, 47.0, GAS, elec, FURNACE)
}

#[test]
fn reference_computation() -> Result<(), SwitchoverError> {
    assert_relative_eq!(reference(ELEC)?, 31.24, epsilon = 0.005);
    Ok(())
}

#[test]
fn sample_order_is_irrelevant() -> Result<(), SwitchoverError> {
    let forward = reference(ELEC)?;
    let swapped = switchover_temperature(COP_47, COP_17, 47.0, 17.0, GAS, ELEC, FURNACE)?;

    assert_relative_eq!(forward, swapped, epsilon = 1e-9);
    Ok(())
}

#[test]
fn only_relative_price_matters() -> Result<(), SwitchoverError> {
    let base = reference(ELEC)?;

    for factor in [0.01, 0.5, 3.0, 1000.0] {
        let scaled = switchover_temperature(
            COP_17,
            COP_47,
            17.0,
            47.0,
            GAS * factor,
            ELEC * factor,
            FURNACE,
        )?;
        assert_relative_eq!(base, scaled, epsilon = 1e-9);
    }
    Ok(())
}

#[test]
fn free_electricity_crosses_at_zero_cop() -> Result<(), SwitchoverError> {
    let t = reference(0.0)?;

    let slope = (COP_47 - COP_17) / 30.0;
    let zero_cop = 17.0 - COP_17 / slope;

    assert_relative_eq!(t, zero_cop, epsilon = 1e-9);
    assert!(t < 17.0);
    Ok(())
}

#[test]
fn equal_temperatures_are_invalid() {
    assert_eq!(
        switchover_temperature(COP_17, COP_47, 30.0, 30.0, GAS, ELEC, FURNACE),
        Err(SwitchoverError::InvalidInput(
            InputError::SameTemperature {
                temperature_f: 30.0
            }
        ))
    );
}

#[test]
fn nearly_equal_temperatures_still_solve() -> Result<(), SwitchoverError> {
    let t2 = 17.0 + 4.0 * f64::EPSILON * 17.0;

    let t = switchover_temperature(COP_17, COP_47, 17.0, t2, GAS, ELEC, FURNACE)?;

    assert!(t.is_finite());
    Ok(())
}

#[test]
fn pricier_electricity_raises_switchover() -> Result<(), SwitchoverError> {
    let mut previous = f64::NEG_INFINITY;

    for elec in [0.0, 0.05, 0.10, 0.125, 0.15, 0.20, 0.30] {
        let t = reference(elec)?;
        assert!(t > previous, "{t} should exceed {previous} at {elec}/kWh");
        previous = t;
    }
    Ok(())
}

#[test]
fn invalid_efficiency_is_reported_before_computing() {
    for efficiency in [0.0, -0.5, 1.5, f64::NAN] {
        assert!(matches!(
            switchover_temperature(COP_17, COP_47, 17.0, 47.0, GAS, ELEC, efficiency),
            Err(SwitchoverError::InvalidInput(InputError::Invalid {
                field: "furnace-efficiency",
                ..
            }))
        ));
    }
}

#[test]
fn negative_prices_are_invalid() {
    assert!(matches!(
        switchover_temperature(COP_17, COP_47, 17.0, 47.0, GAS, -0.1, FURNACE),
        Err(SwitchoverError::InvalidInput(InputError::Invalid {
            field: "cost-elec-per-unit",
            ..
        }))
    ));
}

#[test]
fn flat_curve_is_no_solution() {
    assert_eq!(
        switchover_temperature(3.0, 3.0, 17.0, 47.0, GAS, ELEC, FURNACE),
        Err(SwitchoverError::NoSolution(NoCrossing::FurnaceAlways))
    );
    assert_eq!(
        switchover_temperature(4.0, 4.0, 17.0, 47.0, GAS, ELEC, FURNACE),
        Err(SwitchoverError::NoSolution(NoCrossing::HeatPumpAlways))
    );
}

#[test]
fn model_adapter_matches_function() -> Result<(), SwitchoverError> {
    let input = SwitchoverInput::new(COP_17, COP_47, 17.0, 47.0, GAS, ELEC, FURNACE)?;
    let output = SwitchoverModel.call(&input)?;

    assert_relative_eq!(output.temperature_f(), reference(ELEC)?, epsilon = 1e-12);

    let fahrenheit = ThermodynamicTemperature::new::<degree_fahrenheit>;
    let just_below = fahrenheit(output.temperature_f() - 0.1);
    let just_above = fahrenheit(output.temperature_f() + 0.1);
    assert_eq!(output.preferred_source(just_below), HeatSource::Furnace);
    assert_eq!(output.preferred_source(just_above), HeatSource::HeatPump);
    Ok(())
}
