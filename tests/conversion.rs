use hvac_calculator::conversion::{self, ConversionError};
use hvac_calculator::quantity::QuantityKind;
use hvac_calculator::units::{
    convert_pressure, convert_temperature, convert_volume_flow, PressureUnit, TemperatureUnit,
    VolumeFlowUnit,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn temperature_reference_points() {
    assert_close(
        "100C→K",
        convert_temperature(100.0, TemperatureUnit::Celsius, TemperatureUnit::Kelvin),
        373.15,
        1e-9,
    );
    assert_close(
        "100C→F",
        convert_temperature(100.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit),
        212.0,
        1e-9,
    );
    assert_close(
        "32F→C",
        convert_temperature(32.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius),
        0.0,
        1e-9,
    );
}

#[test]
fn pressure_reference_points() {
    assert_close(
        "1atm→Pa",
        convert_pressure(1.0, PressureUnit::Atm, PressureUnit::Pascal),
        101_325.0,
        1e-9,
    );
    assert_close(
        "1bar→kPa",
        convert_pressure(1.0, PressureUnit::Bar, PressureUnit::KiloPascal),
        100.0,
        1e-9,
    );
    assert_close(
        "14.6959psi→atm",
        convert_pressure(14.6959, PressureUnit::Psi, PressureUnit::Atm),
        1.0,
        1e-4,
    );
}

#[test]
fn volume_flow_reference_points() {
    assert_close(
        "3600m3/h→L/s",
        convert_volume_flow(
            3600.0,
            VolumeFlowUnit::CubicMeterPerHour,
            VolumeFlowUnit::LiterPerSecond,
        ),
        1000.0,
        1e-9,
    );
    assert_close(
        "1L/s→m3/h",
        convert_volume_flow(
            1.0,
            VolumeFlowUnit::LiterPerSecond,
            VolumeFlowUnit::CubicMeterPerHour,
        ),
        3.6,
        1e-9,
    );
}

#[test]
fn string_dispatch_and_unknown_units() {
    let v = conversion::convert(QuantityKind::Power, 1.5, "kW", "W").expect("kW→W");
    assert_close("1.5kW→W", v, 1500.0, 1e-9);

    let v = conversion::convert(QuantityKind::Pressure, 101.325, "kPa", "atm").expect("kPa→atm");
    assert_close("101.325kPa→atm", v, 1.0, 1e-9);

    let err = conversion::convert(QuantityKind::Temperature, 1.0, "C", "rankine")
        .expect_err("unknown unit");
    assert!(matches!(err, ConversionError::UnknownUnit(_)));
}
