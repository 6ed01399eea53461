use super::psychro;

/// 습도 입력 방식. 상대습도(%) 또는 습구 온도(°C) 중 하나를 받는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HumidityInput {
    /// 상대습도 [%] (0~100)
    RelativeHumidityPct(f64),
    /// 습구 온도 [°C]
    WetBulbC(f64),
}

/// 습공기 상태 계산을 위한 입력 값.
#[derive(Debug, Clone, Copy)]
pub struct MoistAirInput {
    /// 건구 온도 [°C]
    pub dry_bulb_c: f64,
    /// 대기압 [Pa] (절대)
    pub pressure_pa: f64,
    /// 습도 입력 (상대습도 또는 습구 온도)
    pub humidity: HumidityInput,
}

/// 습도비를 기준으로 전개한 습공기 상태.
#[derive(Debug, Clone, Copy)]
pub struct MoistAirState {
    /// 건구 온도 [°C]
    pub dry_bulb_c: f64,
    /// 습구 온도 [°C]
    pub wet_bulb_c: f64,
    /// 노점 온도 [°C]
    pub dew_point_c: f64,
    /// 상대습도 [%]
    pub relative_humidity_pct: f64,
    /// 습도비 [kg수증기/kg건공기]
    pub humidity_ratio: f64,
    /// 비엔탈피 [J/kg 건공기]
    pub enthalpy_j_per_kg: f64,
    /// 비체적 [m³/kg 건공기]
    pub specific_volume_m3_per_kg: f64,
}

impl MoistAirState {
    /// 표시용 비엔탈피 [kJ/kg].
    pub fn enthalpy_kj_per_kg(&self) -> f64 {
        self.enthalpy_j_per_kg / 1000.0
    }
}

/// 습공기 상태 계산 시 발생 가능한 오류.
#[derive(Debug, Clone)]
pub enum MoistAirError {
    /// 압력이 0 이하
    NonPositivePressure,
    /// 물성 루틴 실패 (범위 밖 입력, 수렴 실패 등)
    Property(String),
}

impl std::fmt::Display for MoistAirError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoistAirError::NonPositivePressure => write!(f, "압력은 양수여야 합니다."),
            MoistAirError::Property(msg) => write!(f, "물성 계산 실패: {msg}"),
        }
    }
}

impl std::error::Error for MoistAirError {}

impl From<&'static str> for MoistAirError {
    fn from(value: &'static str) -> Self {
        MoistAirError::Property(value.to_string())
    }
}

/// 입력을 습도비로 정규화한 뒤 나머지 물성을 전개한다.
///
/// 습도비 이후의 다섯 물성은 서로 독립이라 호출 순서 제약이 없다.
pub fn compute(input: MoistAirInput) -> Result<MoistAirState, MoistAirError> {
    if input.pressure_pa <= 0.0 {
        return Err(MoistAirError::NonPositivePressure);
    }

    let humidity_ratio = match input.humidity {
        HumidityInput::RelativeHumidityPct(rh_pct) => psychro::hum_ratio_from_rel_hum(
            input.dry_bulb_c,
            rh_pct / 100.0,
            input.pressure_pa,
        )?,
        HumidityInput::WetBulbC(wet_bulb_c) => psychro::hum_ratio_from_wet_bulb(
            input.dry_bulb_c,
            wet_bulb_c,
            input.pressure_pa,
        )?,
    };

    let relative_humidity_pct =
        psychro::rel_hum_from_hum_ratio(input.dry_bulb_c, humidity_ratio, input.pressure_pa)?
            * 100.0;
    let wet_bulb_c =
        psychro::wet_bulb_from_hum_ratio(input.dry_bulb_c, humidity_ratio, input.pressure_pa)?;
    let dew_point_c =
        psychro::dew_point_from_hum_ratio(input.dry_bulb_c, humidity_ratio, input.pressure_pa)?;
    let enthalpy_j_per_kg = psychro::moist_air_enthalpy(input.dry_bulb_c, humidity_ratio)?;
    let specific_volume_m3_per_kg =
        psychro::moist_air_specific_volume(input.dry_bulb_c, humidity_ratio, input.pressure_pa)?;

    Ok(MoistAirState {
        dry_bulb_c: input.dry_bulb_c,
        wet_bulb_c,
        dew_point_c,
        relative_humidity_pct,
        humidity_ratio,
        enthalpy_j_per_kg,
        specific_volume_m3_per_kg,
    })
}
