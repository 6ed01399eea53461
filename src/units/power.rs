use serde::{Deserialize, Serialize};

/// 열량/동력 단위. 내부 기준은 W 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Watt,
    Kilowatt,
}

/// 주어진 값을 W 로 변환한다.
pub fn to_watt(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value,
        PowerUnit::Kilowatt => value * 1000.0,
    }
}

/// W 값을 원하는 단위로 변환한다.
pub fn from_watt(value_w: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value_w,
        PowerUnit::Kilowatt => value_w / 1000.0,
    }
}

/// 동력을 원하는 단위로 변환한다.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    from_watt(to_watt(value, from), to)
}
