use hvac_calculator::fluid::{self, FluidKind};
use hvac_calculator::heat_transfer::{
    solve_form, HeatTransferError, HeatTransferForm, SolveTarget, ZeroDenominator,
};

fn form(q: &str, v: &str, dt: &str) -> HeatTransferForm {
    HeatTransferForm {
        heat_rate_kw: q.to_string(),
        volume_flow_l_per_s: v.to_string(),
        delta_t_k: dt.to_string(),
    }
}

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn air_scenario_solves_heat_rate() {
    // Air, V=500 L/s, ΔT=10 K → m = 0.6125 kg/s, Q = 6155.625 W
    let res = solve_form(&form("", "500", "10"), fluid::properties(FluidKind::Air))
        .expect("heat rate solve");
    assert_eq!(res.target, SolveTarget::HeatRate);
    assert_close("m", res.mass_flow_kg_per_s, 0.6125, 1e-12);
    assert_close("Q[W]", res.heat_rate_w, 6155.625, 1e-12);
    assert_close("Q[kW]", res.heat_rate_kw, 6.155625, 1e-12);
}

#[test]
fn water_scenario_solves_volume_flow() {
    // Water, Q=100 kW, ΔT=5 K → m = 4.7824 kg/s, V ≈ 4.791 L/s
    let res = solve_form(&form("100", "", "5"), fluid::properties(FluidKind::Water))
        .expect("volume flow solve");
    assert_eq!(res.target, SolveTarget::VolumeFlow);
    assert_close("m", res.mass_flow_kg_per_s, 4.7824, 1e-4);
    assert_close("V", res.volume_flow_l_per_s, 4.791, 1e-3);
    assert_close("Q[W]", res.heat_rate_w, 100_000.0, 1e-12);
}

#[test]
fn delta_t_solve_recovers_input() {
    let res = solve_form(&form("6.155625", "500", ""), fluid::properties(FluidKind::Air))
        .expect("delta T solve");
    assert_eq!(res.target, SolveTarget::DeltaT);
    assert_close("ΔT", res.delta_t_k, 10.0, 1e-9);
}

#[test]
fn round_trip_law_holds_for_each_missing_field() {
    // 유효한 (Q, V, ΔT) 조합에서 어느 필드를 비워도 원래 값이 재현되어야 한다.
    for (fluid_kind, v, dt) in [
        (FluidKind::Air, 250.0, 7.5),
        (FluidKind::Air, 1200.0, 3.0),
        (FluidKind::Water, 12.0, 6.0),
        (FluidKind::Water, 0.8, 40.0),
    ] {
        let props = fluid::properties(fluid_kind);
        let base = solve_form(&form("", &v.to_string(), &dt.to_string()), props)
            .expect("base solve");
        let q_kw = base.heat_rate_kw;

        let v_back = solve_form(&form(&q_kw.to_string(), "", &dt.to_string()), props)
            .expect("V round trip");
        assert_close("V round trip", v_back.volume_flow_l_per_s, v, 1e-9);

        let dt_back = solve_form(&form(&q_kw.to_string(), &v.to_string(), ""), props)
            .expect("ΔT round trip");
        assert_close("ΔT round trip", dt_back.delta_t_k, dt, 1e-9);
    }
}

#[test]
fn rejects_wrong_input_counts() {
    let props = fluid::properties(FluidKind::Air);
    for (q, v, dt, expected_provided) in [
        ("", "", "", 0usize),
        ("5", "", "", 1),
        ("", " ", "10", 1),
        ("5", "500", "10", 3),
    ] {
        let err = solve_form(&form(q, v, dt), props).expect_err("must reject");
        assert!(
            matches!(err, HeatTransferError::InvalidInputCount { provided } if provided == expected_provided),
            "q={q:?} v={v:?} dt={dt:?} → {err:?}"
        );
    }
}

#[test]
fn rejects_unparseable_numbers() {
    let props = fluid::properties(FluidKind::Air);
    let err = solve_form(&form("abc", "500", ""), props).expect_err("must reject text");
    assert!(matches!(
        err,
        HeatTransferError::InvalidNumericValue { field: "Q", .. }
    ));

    let err = solve_form(&form("", "5 00", "10"), props).expect_err("must reject spaced digits");
    assert!(matches!(
        err,
        HeatTransferError::InvalidNumericValue { field: "V", .. }
    ));
}

#[test]
fn zero_delta_t_is_division_by_zero_not_infinity() {
    // Q=0, ΔT=0, V 비움 → c·ΔT = 0
    let err = solve_form(&form("0", "", "0"), fluid::properties(FluidKind::Air))
        .expect_err("degenerate solve");
    assert!(matches!(
        err,
        HeatTransferError::DivisionByZero(ZeroDenominator::SpecificHeatTimesDeltaT)
    ));
}

#[test]
fn zero_flow_is_division_by_zero_when_solving_delta_t() {
    let err = solve_form(&form("5", "0", ""), fluid::properties(FluidKind::Water))
        .expect_err("degenerate solve");
    assert!(matches!(
        err,
        HeatTransferError::DivisionByZero(ZeroDenominator::MassFlowTimesSpecificHeat)
    ));
}

#[test]
fn fluid_lookup_by_name() {
    let air = fluid::lookup("air").expect("air lookup");
    assert_eq!(air.kind, FluidKind::Air);
    assert_close("air density", air.density_kg_per_m3, 1.225, 1e-12);
    assert_close("air cp", air.specific_heat_j_per_kgk, 1005.0, 1e-12);

    let water = fluid::lookup(" Water ").expect("water lookup");
    assert_close("water density", water.density_kg_per_m3, 998.2, 1e-12);
    assert_close("water cp", water.specific_heat_j_per_kgk, 4182.0, 1e-12);

    assert!(fluid::lookup("Glycol").is_err());
}
