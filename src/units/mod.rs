//! 단위 정의 및 변환 모듈 모음. 표시 변환 전용이며 내부 계산은 SI로 고정한다.

pub mod power;
pub mod pressure;
pub mod temperature;
pub mod volume_flow;

pub use power::{convert_power, from_watt, to_watt, PowerUnit};
pub use pressure::{convert_pressure, from_pascal, to_pascal, PressureUnit};
pub use temperature::{convert_temperature, from_celsius, to_celsius, TemperatureUnit};
pub use volume_flow::{
    convert_volume_flow, from_liter_per_second, to_liter_per_second, VolumeFlowUnit,
};
