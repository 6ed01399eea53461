use crate::air::moist_air;
use crate::conversion;
use crate::fluid;
use crate::heat_transfer;
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 단위 변환 오류
    Conversion(conversion::ConversionError),
    /// 유체 테이블 조회 오류
    Fluid(fluid::UnknownFluidError),
    /// 열전달 계산 오류
    HeatTransfer(heat_transfer::HeatTransferError),
    /// 습공기 물성 계산 오류
    MoistAir(moist_air::MoistAirError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
            AppError::Fluid(e) => write!(f, "유체 조회 오류: {e}"),
            AppError::HeatTransfer(e) => write!(f, "열전달 계산 오류: {e}"),
            AppError::MoistAir(e) => write!(f, "습공기 계산 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<fluid::UnknownFluidError> for AppError {
    fn from(value: fluid::UnknownFluidError) -> Self {
        AppError::Fluid(value)
    }
}

impl From<heat_transfer::HeatTransferError> for AppError {
    fn from(value: heat_transfer::HeatTransferError) -> Self {
        AppError::HeatTransfer(value)
    }
}

impl From<moist_air::MoistAirError> for AppError {
    fn from(value: moist_air::MoistAirError) -> Self {
        AppError::MoistAir(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// 계산 오류는 메시지만 출력하고 다음 입력을 받는다. 루프를 끝내는 것은
/// 종료 선택과 입출력/설정 오류뿐이다.
pub fn run(config: &mut crate::config::Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::HeatTransfer => report(tr, ui_cli::handle_heat_transfer(tr, config)),
            MenuChoice::Psychrometrics => report(tr, ui_cli::handle_psychrometrics(tr, config)),
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

/// 계산 핸들러 결과를 보고한다. 입출력 오류만 위로 전파한다.
fn report(tr: &Translator, result: Result<(), AppError>) {
    if let Err(err) = result {
        match err {
            AppError::Io(_) => {
                eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
            }
            other => println!("{}: {other}", tr.t(i18n::keys::ERROR_PREFIX)),
        }
    }
}
