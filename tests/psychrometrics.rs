use hvac_calculator::air::moist_air::{compute, HumidityInput, MoistAirError, MoistAirInput};
use hvac_calculator::air::psychro;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn state_from_rel_hum(dry_bulb_c: f64, rh_pct: f64, pressure_pa: f64) -> MoistAirInput {
    MoistAirInput {
        dry_bulb_c,
        pressure_pa,
        humidity: HumidityInput::RelativeHumidityPct(rh_pct),
    }
}

#[test]
fn reference_state_25c_50pct_atmospheric() {
    // ASHRAE 기준점 근방 값: W≈0.00988, h≈50.3 kJ/kg, v≈0.858 m³/kg, 노점≈13.9°C
    let state = compute(state_from_rel_hum(25.0, 50.0, 101_325.0)).expect("reference state");
    assert_close("humidity ratio", state.humidity_ratio, 0.00988, 2e-4);
    assert_close("enthalpy", state.enthalpy_kj_per_kg(), 50.3, 5e-3);
    assert_close(
        "specific volume",
        state.specific_volume_m3_per_kg,
        0.858,
        5e-3,
    );
    assert_close("dew point", state.dew_point_c, 13.9, 3e-2);
    assert_close("wet bulb", state.wet_bulb_c, 17.9, 3e-2);
    assert_close("dry bulb", state.dry_bulb_c, 25.0, 1e-12);
}

#[test]
fn relative_humidity_round_trip() {
    // RH → W → RH 왕복은 같은 포화선을 지나므로 원래 값을 재현해야 한다.
    let state = compute(state_from_rel_hum(25.0, 50.0, 101_325.0)).expect("round trip state");
    assert_close("RH round trip", state.relative_humidity_pct, 50.0, 1e-6);

    for rh in [5.0, 30.0, 75.0, 95.0] {
        let s = compute(state_from_rel_hum(35.0, rh, 101_325.0)).expect("round trip state");
        assert_close("RH round trip sweep", s.relative_humidity_pct, rh, 1e-6);
    }
}

#[test]
fn wet_bulb_input_round_trip() {
    let state = compute(MoistAirInput {
        dry_bulb_c: 25.0,
        pressure_pa: 101_325.0,
        humidity: HumidityInput::WetBulbC(20.0),
    })
    .expect("wet bulb state");
    // 습도비를 거쳐 역산한 습구 온도가 입력과 일치해야 한다 (이분법 허용 오차 내).
    assert_close("wet bulb round trip", state.wet_bulb_c, 20.0, 2e-3);
}

#[test]
fn property_ordering_dew_point_wet_bulb_dry_bulb() {
    let state = compute(state_from_rel_hum(30.0, 40.0, 101_325.0)).expect("ordering state");
    assert!(
        state.dew_point_c <= state.wet_bulb_c + 1e-6,
        "dew point {} > wet bulb {}",
        state.dew_point_c,
        state.wet_bulb_c
    );
    assert!(
        state.wet_bulb_c <= state.dry_bulb_c + 1e-6,
        "wet bulb {} > dry bulb {}",
        state.wet_bulb_c,
        state.dry_bulb_c
    );
}

#[test]
fn saturation_collapses_all_temperatures() {
    let state = compute(state_from_rel_hum(25.0, 100.0, 101_325.0)).expect("saturated state");
    assert_close("wet bulb at saturation", state.wet_bulb_c, 25.0, 5e-2);
    assert_close("dew point at saturation", state.dew_point_c, 25.0, 5e-2);
}

#[test]
fn rejects_wet_bulb_above_dry_bulb() {
    let err = compute(MoistAirInput {
        dry_bulb_c: 25.0,
        pressure_pa: 101_325.0,
        humidity: HumidityInput::WetBulbC(30.0),
    })
    .expect_err("wet bulb above dry bulb");
    assert!(matches!(err, MoistAirError::Property(_)));
}

#[test]
fn rejects_relative_humidity_out_of_range() {
    assert!(compute(state_from_rel_hum(25.0, 120.0, 101_325.0)).is_err());
    assert!(compute(state_from_rel_hum(25.0, -5.0, 101_325.0)).is_err());
}

#[test]
fn rejects_non_positive_pressure() {
    let err = compute(state_from_rel_hum(25.0, 50.0, 0.0)).expect_err("zero pressure");
    assert!(matches!(err, MoistAirError::NonPositivePressure));
}

#[test]
fn rejects_vapor_pressure_reaching_total_pressure() {
    // 고온·저압 포화: pws(90°C) ≈ 70 kPa > 50 kPa 전압
    assert!(compute(state_from_rel_hum(90.0, 100.0, 50_000.0)).is_err());
}

#[test]
fn saturation_pressure_reference_points() {
    // 표준 포화 수증기압: 0°C ≈ 611 Pa, 25°C ≈ 3169 Pa, 100°C ≈ 101.4 kPa
    let p0 = psychro::saturation_vapor_pressure_pa(0.0).expect("0°C");
    assert_close("pws(0°C)", p0, 611.0, 5e-3);
    let p25 = psychro::saturation_vapor_pressure_pa(25.0).expect("25°C");
    assert_close("pws(25°C)", p25, 3169.0, 5e-3);
    let p100 = psychro::saturation_vapor_pressure_pa(100.0).expect("100°C");
    assert_close("pws(100°C)", p100, 101_419.0, 5e-3);
    assert!(psychro::saturation_vapor_pressure_pa(250.0).is_err());
}

#[test]
fn psychro_routines_never_return_nan() {
    for rh in [0.0, 25.0, 50.0, 75.0, 100.0] {
        for t in [-10.0, 0.0, 15.0, 30.0, 45.0] {
            match compute(state_from_rel_hum(t, rh, 101_325.0)) {
                Ok(state) => {
                    assert!(state.humidity_ratio.is_finite());
                    assert!(state.wet_bulb_c.is_finite());
                    assert!(state.dew_point_c.is_finite());
                    assert!(state.relative_humidity_pct.is_finite());
                    assert!(state.enthalpy_j_per_kg.is_finite());
                    assert!(state.specific_volume_m3_per_kg.is_finite());
                }
                Err(_) => {
                    // 범위 밖 입력은 오류로만 표면화되어야 한다 (NaN 금지).
                }
            }
        }
    }
}
