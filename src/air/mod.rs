//! 습공기(psychrometrics) 계산 모듈을 모아둔다.

pub mod moist_air;
pub mod psychro;

pub use moist_air::*;
