use serde::{Deserialize, Serialize};

/// 체적 유량 단위. 내부 기준은 L/s 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeFlowUnit {
    LiterPerSecond,
    CubicMeterPerHour,
}

/// 주어진 유량을 L/s 로 변환한다.
pub fn to_liter_per_second(value: f64, unit: VolumeFlowUnit) -> f64 {
    match unit {
        VolumeFlowUnit::LiterPerSecond => value,
        // 1 m³/h = 1000 L / 3600 s
        VolumeFlowUnit::CubicMeterPerHour => value * 1000.0 / 3600.0,
    }
}

/// L/s 값을 원하는 단위로 변환한다.
pub fn from_liter_per_second(value_l_per_s: f64, unit: VolumeFlowUnit) -> f64 {
    match unit {
        VolumeFlowUnit::LiterPerSecond => value_l_per_s,
        VolumeFlowUnit::CubicMeterPerHour => value_l_per_s * 3600.0 / 1000.0,
    }
}

/// 체적 유량을 원하는 단위로 변환한다.
pub fn convert_volume_flow(value: f64, from: VolumeFlowUnit, to: VolumeFlowUnit) -> f64 {
    from_liter_per_second(to_liter_per_second(value, from), to)
}
