use std::io::{self, Write};

use crate::air::moist_air::{self, HumidityInput, MoistAirInput};
use crate::app::AppError;
use crate::config::Config;
use crate::fluid::{self, FluidKind};
use crate::heat_transfer::{self, HeatTransferForm};
use crate::i18n::{keys, Translator};
use crate::units::{self, PressureUnit, TemperatureUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    HeatTransfer,
    Psychrometrics,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_HEAT_TRANSFER));
    println!("{}", tr.t(keys::MAIN_MENU_PSYCHROMETRICS));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::HeatTransfer),
            "2" => return Ok(MenuChoice::Psychrometrics),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 열전달 계산 메뉴를 처리한다.
pub fn handle_heat_transfer(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::HEAT_HEADING));
    println!("{}", tr.t(keys::HEAT_FORMULA_NOTE));
    println!("{}", tr.t(keys::HELP_HEAT_TRANSFER));

    let kind = read_fluid_kind(tr)?;
    let props = fluid::properties(kind);
    println!(
        "{} {}: ρ = {} kg/m³, c = {} J/kg·K",
        tr.t(keys::HEAT_FLUID_CONSTANTS),
        kind.label(),
        props.density_kg_per_m3,
        props.specific_heat_j_per_kgk
    );

    println!("{}", tr.t(keys::HEAT_BLANK_NOTE));
    // 빈칸 판정은 계산기에 맡기므로 재입력 루프 없이 원문을 그대로 넘긴다.
    let form = HeatTransferForm {
        heat_rate_kw: read_line(tr.t(keys::HEAT_PROMPT_Q))?,
        volume_flow_l_per_s: read_line(tr.t(keys::HEAT_PROMPT_V))?,
        delta_t_k: read_line(tr.t(keys::HEAT_PROMPT_DT))?,
    };
    let result = heat_transfer::solve_form(&form, props)?;

    println!("{}", tr.t(keys::HEAT_RESULT_HEADING));
    println!(
        "Q = {:.2} kW ({:.2} W)",
        result.heat_rate_kw, result.heat_rate_w
    );
    println!(
        "V = {:.2} L/s ({:.2} m³/h)",
        result.volume_flow_l_per_s,
        units::from_liter_per_second(
            result.volume_flow_l_per_s,
            units::VolumeFlowUnit::CubicMeterPerHour
        )
    );
    println!("m = {:.4} kg/s", result.mass_flow_kg_per_s);
    println!("ΔT = {:.2} K", result.delta_t_k);
    println!(
        "ρ = {} kg/m³, c = {:.0} J/kg·K",
        result.density_kg_per_m3, result.specific_heat_j_per_kgk
    );
    Ok(())
}

/// 습공기 물성 메뉴를 처리한다.
pub fn handle_psychrometrics(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PSYCHRO_HEADING));
    println!("{}", tr.t(keys::PSYCHRO_NOTE));

    let dry_bulb = read_f64(tr, tr.t(keys::PSYCHRO_PROMPT_DRY_BULB))?;
    let t_unit = read_temperature_unit(tr, cfg.default_units.temperature)?;
    let dry_bulb_c = units::to_celsius(dry_bulb, t_unit);

    let pressure = read_f64(tr, tr.t(keys::PSYCHRO_PROMPT_PRESSURE))?;
    let p_unit = read_pressure_unit(tr, cfg.default_units.pressure)?;
    let pressure_pa = units::to_pascal(pressure, p_unit);

    let mode = read_line(tr.t(keys::PSYCHRO_INPUT_MODE))?;
    let humidity = if mode.trim() == "2" {
        let wet_bulb = read_f64(tr, tr.t(keys::PSYCHRO_PROMPT_WET_BULB))?;
        HumidityInput::WetBulbC(units::to_celsius(wet_bulb, t_unit))
    } else {
        HumidityInput::RelativeHumidityPct(read_f64(tr, tr.t(keys::PSYCHRO_PROMPT_RH))?)
    };

    let state = moist_air::compute(MoistAirInput {
        dry_bulb_c,
        pressure_pa,
        humidity,
    })?;
    print_moist_air_state(tr, &state);
    Ok(())
}

fn print_moist_air_state(tr: &Translator, state: &moist_air::MoistAirState) {
    println!("{}", tr.t(keys::PSYCHRO_RESULT_HEADING));
    println!("건구 온도: {:.2} °C", state.dry_bulb_c);
    println!("습구 온도: {:.2} °C", state.wet_bulb_c);
    println!("노점 온도: {:.2} °C", state.dew_point_c);
    println!("상대습도: {:.1} %", state.relative_humidity_pct);
    println!("습도비: {:.6} kg/kg", state.humidity_ratio);
    println!("비엔탈피: {:.2} kJ/kg", state.enthalpy_kj_per_kg());
    println!("비체적: {:.4} m³/kg", state.specific_volume_m3_per_kg);
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{}", tr.t(keys::HELP_SETTINGS));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!(
        "{} {:?}",
        tr.t(keys::SETTINGS_CURRENT_PRESSURE_UNIT),
        cfg.default_units.pressure
    );

    println!("{}", tr.t(keys::SETTINGS_LANGUAGE_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if !sel.trim().is_empty() {
        cfg.language = match sel.trim() {
            "1" => "auto".to_string(),
            "2" => "en-us".to_string(),
            "3" => "ko-kr".to_string(),
            _ => {
                println!("{}", tr.t(keys::SETTINGS_INVALID));
                cfg.language.clone()
            }
        };
    }

    println!("{}", tr.t(keys::PRESSURE_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if !sel.trim().is_empty() {
        cfg.default_units.pressure = match sel.trim() {
            "1" => PressureUnit::Pascal,
            "2" => PressureUnit::KiloPascal,
            "3" => PressureUnit::Bar,
            "4" => PressureUnit::Atm,
            "5" => PressureUnit::Psi,
            _ => {
                println!("{}", tr.t(keys::SETTINGS_INVALID));
                cfg.default_units.pressure
            }
        };
    }

    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_fluid_kind(tr: &Translator) -> Result<FluidKind, AppError> {
    loop {
        let sel = read_line(tr.t(keys::HEAT_PROMPT_FLUID))?;
        match sel.trim() {
            "1" | "" => return Ok(FluidKind::Air),
            "2" => return Ok(FluidKind::Water),
            other => {
                // 이름 직접 입력도 허용한다 (Air/Water).
                if let Ok(props) = fluid::lookup(other) {
                    return Ok(props.kind);
                }
                println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
            }
        }
    }
}

fn read_pressure_unit(tr: &Translator, default: PressureUnit) -> Result<PressureUnit, AppError> {
    println!("{}", tr.t(keys::PRESSURE_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let unit = match sel.trim() {
        "1" => PressureUnit::Pascal,
        "2" => PressureUnit::KiloPascal,
        "3" => PressureUnit::Bar,
        "4" => PressureUnit::Atm,
        "5" => PressureUnit::Psi,
        _ => default,
    };
    Ok(unit)
}

fn read_temperature_unit(
    tr: &Translator,
    default: TemperatureUnit,
) -> Result<TemperatureUnit, AppError> {
    println!("{}", tr.t(keys::TEMPERATURE_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let unit = match sel.trim() {
        "1" => TemperatureUnit::Celsius,
        "2" => TemperatureUnit::Kelvin,
        "3" => TemperatureUnit::Fahrenheit,
        _ => default,
    };
    Ok(unit)
}
