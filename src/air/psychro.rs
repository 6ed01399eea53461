//! 습공기 물성 계산 루틴. ASHRAE 기초편 계열의 관계식을 SI 단위로만 제공한다.
//! 입력: 건구/습구/노점 온도(°C), 전압(Pa), 습도비(kg수증기/kg건공기)
//! 출력: 습도비, 상대습도(0~1), 엔탈피[J/kg], 비체적[m³/kg]

// ---------------- 포화선 (Hyland-Wexler) ----------------
// 빙면(-100~0°C) 계수
const HW_ICE: [f64; 7] = [
    -5.674_535_9e3,
    6.392_524_7,
    -9.677_843e-3,
    6.221_570_1e-7,
    2.074_782_5e-9,
    -9.484_024e-13,
    4.163_501_9,
];
// 수면(0~200°C) 계수
const HW_WATER: [f64; 6] = [
    -5.800_220_6e3,
    1.391_499_3,
    -4.864_023_9e-2,
    4.176_476_8e-5,
    -1.445_209_3e-8,
    6.545_967_3,
];

/// 수증기/건공기 분자량비 (18.015268 / 28.966)
const MW_RATIO: f64 = 0.621_945;
/// 건공기 기체상수 [J/kg·K]
const R_DRY_AIR: f64 = 287.042;
/// 수치 안정성을 위한 습도비 하한
const MIN_HUM_RATIO: f64 = 1e-7;

const T_MIN_C: f64 = -100.0;
const T_MAX_C: f64 = 200.0;

/// 포화 수증기압 [Pa]. 유효 범위는 -100~200°C.
pub fn saturation_vapor_pressure_pa(t_c: f64) -> Result<f64, &'static str> {
    if !(T_MIN_C..=T_MAX_C).contains(&t_c) {
        return Err("온도가 포화선 유효 범위(-100~200°C)를 벗어났습니다.");
    }
    let t_k = t_c + 273.15;
    let ln_p = if t_c <= 0.0 {
        HW_ICE[0] / t_k
            + HW_ICE[1]
            + HW_ICE[2] * t_k
            + HW_ICE[3] * t_k * t_k
            + HW_ICE[4] * t_k.powi(3)
            + HW_ICE[5] * t_k.powi(4)
            + HW_ICE[6] * t_k.ln()
    } else {
        HW_WATER[0] / t_k
            + HW_WATER[1]
            + HW_WATER[2] * t_k
            + HW_WATER[3] * t_k * t_k
            + HW_WATER[4] * t_k.powi(3)
            + HW_WATER[5] * t_k.ln()
    };
    Ok(ln_p.exp())
}

/// 수증기 분압[Pa]과 전압[Pa]으로 습도비를 계산한다.
pub fn hum_ratio_from_vapor_pressure(
    vapor_pressure_pa: f64,
    pressure_pa: f64,
) -> Result<f64, &'static str> {
    if vapor_pressure_pa < 0.0 {
        return Err("수증기 분압은 음수가 될 수 없습니다.");
    }
    if pressure_pa - vapor_pressure_pa <= 0.0 {
        return Err("수증기 분압이 전압 이상입니다. 압력 입력을 확인하세요.");
    }
    let w = MW_RATIO * vapor_pressure_pa / (pressure_pa - vapor_pressure_pa);
    Ok(w.max(MIN_HUM_RATIO))
}

/// 습도비와 전압[Pa]으로 수증기 분압[Pa]을 계산한다.
pub fn vapor_pressure_from_hum_ratio(
    hum_ratio: f64,
    pressure_pa: f64,
) -> Result<f64, &'static str> {
    if hum_ratio < 0.0 {
        return Err("습도비는 음수가 될 수 없습니다.");
    }
    let w = hum_ratio.max(MIN_HUM_RATIO);
    Ok(pressure_pa * w / (MW_RATIO + w))
}

/// 건구 온도와 상대습도(0~1)로 습도비를 계산한다.
pub fn hum_ratio_from_rel_hum(
    dry_bulb_c: f64,
    rel_hum: f64,
    pressure_pa: f64,
) -> Result<f64, &'static str> {
    if !(0.0..=1.0).contains(&rel_hum) {
        return Err("상대습도는 0~1 범위여야 합니다.");
    }
    let pv = rel_hum * saturation_vapor_pressure_pa(dry_bulb_c)?;
    hum_ratio_from_vapor_pressure(pv, pressure_pa)
}

/// 건구 온도와 습도비로 상대습도(0~1)를 계산한다.
pub fn rel_hum_from_hum_ratio(
    dry_bulb_c: f64,
    hum_ratio: f64,
    pressure_pa: f64,
) -> Result<f64, &'static str> {
    let pv = vapor_pressure_from_hum_ratio(hum_ratio, pressure_pa)?;
    let pws = saturation_vapor_pressure_pa(dry_bulb_c)?;
    Ok(pv / pws)
}

/// 포화 습도비 W_s. 건구=습구인 포화 상태의 습도비를 말한다.
pub fn saturation_hum_ratio(t_c: f64, pressure_pa: f64) -> Result<f64, &'static str> {
    let pws = saturation_vapor_pressure_pa(t_c)?;
    hum_ratio_from_vapor_pressure(pws, pressure_pa)
}

/// 건구/습구 온도로 습도비를 계산한다 (ASHRAE 습구계 관계식, 빙점 상하 분리).
pub fn hum_ratio_from_wet_bulb(
    dry_bulb_c: f64,
    wet_bulb_c: f64,
    pressure_pa: f64,
) -> Result<f64, &'static str> {
    if wet_bulb_c > dry_bulb_c {
        return Err("습구 온도가 건구 온도보다 높을 수 없습니다.");
    }
    let ws_star = saturation_hum_ratio(wet_bulb_c, pressure_pa)?;
    let w = if wet_bulb_c >= 0.0 {
        ((2501.0 - 2.326 * wet_bulb_c) * ws_star - 1.006 * (dry_bulb_c - wet_bulb_c))
            / (2501.0 + 1.86 * dry_bulb_c - 4.186 * wet_bulb_c)
    } else {
        ((2830.0 - 0.24 * wet_bulb_c) * ws_star - 1.006 * (dry_bulb_c - wet_bulb_c))
            / (2830.0 + 1.86 * dry_bulb_c - 2.1 * wet_bulb_c)
    };
    Ok(w.max(MIN_HUM_RATIO))
}

/// 습도비에서 습구 온도(°C)를 역산한다. 노점~건구 사이를 이분법으로 좁힌다.
pub fn wet_bulb_from_hum_ratio(
    dry_bulb_c: f64,
    hum_ratio: f64,
    pressure_pa: f64,
) -> Result<f64, &'static str> {
    let w = hum_ratio.max(MIN_HUM_RATIO);
    let mut lower = dew_point_from_hum_ratio(dry_bulb_c, w, pressure_pa)?;
    let mut upper = dry_bulb_c;
    if lower > upper {
        // 포화 초과 입력. 습구=건구로 수렴한 것으로 본다.
        return Ok(dry_bulb_c);
    }
    let mut mid = (lower + upper) / 2.0;
    let mut iterations = 0;
    while upper - lower > 0.001 {
        let w_star = hum_ratio_from_wet_bulb(dry_bulb_c, mid, pressure_pa)?;
        if w_star > w {
            upper = mid;
        } else {
            lower = mid;
        }
        mid = (lower + upper) / 2.0;
        iterations += 1;
        if iterations > 100 {
            return Err("습구 온도 역산이 수렴하지 않았습니다.");
        }
    }
    Ok(mid)
}

/// 습도비에서 노점 온도(°C)를 역산한다. 포화선을 이분법으로 역변환한다.
pub fn dew_point_from_hum_ratio(
    dry_bulb_c: f64,
    hum_ratio: f64,
    pressure_pa: f64,
) -> Result<f64, &'static str> {
    let pv = vapor_pressure_from_hum_ratio(hum_ratio, pressure_pa)?;
    dew_point_from_vapor_pressure(dry_bulb_c, pv)
}

/// 수증기 분압[Pa]에서 노점 온도(°C)를 역산한다. 노점은 건구를 넘지 않는다.
pub fn dew_point_from_vapor_pressure(
    dry_bulb_c: f64,
    vapor_pressure_pa: f64,
) -> Result<f64, &'static str> {
    if vapor_pressure_pa <= 0.0 {
        return Err("수증기 분압이 0 이하라 노점을 계산할 수 없습니다.");
    }
    // 포화선은 온도에 대해 단조 증가하므로 이분법이 항상 수렴한다.
    let mut lower = T_MIN_C;
    let mut upper = dry_bulb_c.min(T_MAX_C);
    if saturation_vapor_pressure_pa(upper)? <= vapor_pressure_pa {
        return Ok(upper);
    }
    let mut mid = (lower + upper) / 2.0;
    let mut iterations = 0;
    while upper - lower > 1e-5 {
        if saturation_vapor_pressure_pa(mid)? > vapor_pressure_pa {
            upper = mid;
        } else {
            lower = mid;
        }
        mid = (lower + upper) / 2.0;
        iterations += 1;
        if iterations > 100 {
            return Err("노점 온도 역산이 수렴하지 않았습니다.");
        }
    }
    Ok(mid)
}

/// 습공기 비엔탈피 [J/kg 건공기]. h = 1.006·t + W·(2501 + 1.86·t) [kJ/kg] 기반.
pub fn moist_air_enthalpy(dry_bulb_c: f64, hum_ratio: f64) -> Result<f64, &'static str> {
    if hum_ratio < 0.0 {
        return Err("습도비는 음수가 될 수 없습니다.");
    }
    let w = hum_ratio.max(MIN_HUM_RATIO);
    Ok((1.006 * dry_bulb_c + w * (2501.0 + 1.86 * dry_bulb_c)) * 1000.0)
}

/// 습공기 비체적 [m³/kg 건공기]. 이상기체 혼합 관계식을 사용한다.
pub fn moist_air_specific_volume(
    dry_bulb_c: f64,
    hum_ratio: f64,
    pressure_pa: f64,
) -> Result<f64, &'static str> {
    if pressure_pa <= 0.0 {
        return Err("압력은 양수여야 합니다.");
    }
    if hum_ratio < 0.0 {
        return Err("습도비는 음수가 될 수 없습니다.");
    }
    let w = hum_ratio.max(MIN_HUM_RATIO);
    Ok(R_DRY_AIR * (dry_bulb_c + 273.15) * (1.0 + 1.607_858 * w) / pressure_pa)
}
