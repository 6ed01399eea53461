use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_HEAT_TRANSFER: &str = "main_menu.heat_transfer";
    pub const MAIN_MENU_PSYCHROMETRICS: &str = "main_menu.psychrometrics";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const HEAT_HEADING: &str = "heat_transfer.heading";
    pub const HEAT_FORMULA_NOTE: &str = "heat_transfer.formula_note";
    pub const HEAT_BLANK_NOTE: &str = "heat_transfer.blank_note";
    pub const HEAT_PROMPT_FLUID: &str = "heat_transfer.prompt_fluid";
    pub const HEAT_FLUID_CONSTANTS: &str = "heat_transfer.fluid_constants";
    pub const HEAT_PROMPT_Q: &str = "heat_transfer.prompt_q";
    pub const HEAT_PROMPT_V: &str = "heat_transfer.prompt_v";
    pub const HEAT_PROMPT_DT: &str = "heat_transfer.prompt_dt";
    pub const HEAT_RESULT_HEADING: &str = "heat_transfer.result_heading";

    pub const PSYCHRO_HEADING: &str = "psychro.heading";
    pub const PSYCHRO_NOTE: &str = "psychro.note";
    pub const PSYCHRO_PROMPT_DRY_BULB: &str = "psychro.prompt_dry_bulb";
    pub const PSYCHRO_PROMPT_PRESSURE: &str = "psychro.prompt_pressure";
    pub const PSYCHRO_INPUT_MODE: &str = "psychro.input_mode";
    pub const PSYCHRO_PROMPT_RH: &str = "psychro.prompt_rh";
    pub const PSYCHRO_PROMPT_WET_BULB: &str = "psychro.prompt_wet_bulb";
    pub const PSYCHRO_RESULT_HEADING: &str = "psychro.result_heading";

    pub const PRESSURE_UNIT_OPTIONS: &str = "unit.pressure_options";
    pub const TEMPERATURE_UNIT_OPTIONS: &str = "unit.temperature_options";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_LANGUAGE_OPTIONS: &str = "settings.language_options";
    pub const SETTINGS_CURRENT_PRESSURE_UNIT: &str = "settings.current_pressure_unit";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const HELP_HEAT_TRANSFER: &str = "help.heat_transfer";
    pub const HELP_PSYCHRO: &str = "help.psychro";
    pub const HELP_SETTINGS: &str = "help.settings";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" | "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== HVAC Calculator ===",
        MAIN_MENU_HEAT_TRANSFER => "1) 열전달 계산 (Q = m·c·ΔT)",
        MAIN_MENU_PSYCHROMETRICS => "2) 습공기 물성",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        HEAT_HEADING => "\n-- 열전달 계산 --",
        HEAT_FORMULA_NOTE => "공식: Q = m × c × ΔT (m = V × ρ / 1000)",
        HEAT_BLANK_NOTE => "구하려는 값 하나만 비워 두고 나머지 두 값을 입력하세요.",
        HEAT_PROMPT_FLUID => "유체 선택 (1=Air, 2=Water): ",
        HEAT_FLUID_CONSTANTS => "유체 상수:",
        HEAT_PROMPT_Q => "열전달량 Q [kW] (비우면 계산): ",
        HEAT_PROMPT_V => "체적 유량 V [L/s] (비우면 계산): ",
        HEAT_PROMPT_DT => "온도차 ΔT [K] (비우면 계산): ",
        HEAT_RESULT_HEADING => "계산 결과:",
        PSYCHRO_HEADING => "\n-- 습공기 물성 --",
        PSYCHRO_NOTE => "건구 온도 + (상대습도 또는 습구 온도) + 압력으로 상태를 전개합니다.",
        PSYCHRO_PROMPT_DRY_BULB => "건구 온도 값: ",
        PSYCHRO_PROMPT_PRESSURE => "대기압 값: ",
        PSYCHRO_INPUT_MODE => "습도 입력 방식 (1=상대습도 %, 2=습구 온도): ",
        PSYCHRO_PROMPT_RH => "상대습도 [%] (0~100): ",
        PSYCHRO_PROMPT_WET_BULB => "습구 온도 값: ",
        PSYCHRO_RESULT_HEADING => "계산된 물성:",
        PRESSURE_UNIT_OPTIONS => "압력 단위: 1=Pa 2=kPa 3=bar 4=atm 5=psi",
        TEMPERATURE_UNIT_OPTIONS => "온도 단위: 1=°C 2=K 3=°F",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_LANGUAGE_OPTIONS => "1) auto  2) en-us  3) ko-kr",
        SETTINGS_CURRENT_PRESSURE_UNIT => "현재 압력 표시 단위:",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        HELP_HEAT_TRANSFER => "도움말: Q[kW]·V[L/s]·ΔT[K] 중 두 개 입력 → 나머지 하나와 질량유량을 계산합니다.",
        HELP_PSYCHRO => "도움말: 건구 온도와 압력 입력 후 상대습도 또는 습구 온도를 선택해 입력하세요.",
        HELP_SETTINGS => "도움말: 언어와 기본 표시 단위를 변경하면 config.toml에 저장됩니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== HVAC Calculator ===",
        MAIN_MENU_HEAT_TRANSFER => "1) Heat Transfer (Q = m·c·ΔT)",
        MAIN_MENU_PSYCHROMETRICS => "2) Psychrometric Properties",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        HEAT_HEADING => "\n-- Heat Transfer --",
        HEAT_FORMULA_NOTE => "Formula: Q = m × c × ΔT (m = V × ρ / 1000)",
        HEAT_BLANK_NOTE => "Leave exactly one field empty to solve for it.",
        HEAT_PROMPT_FLUID => "Select fluid (1=Air, 2=Water): ",
        HEAT_FLUID_CONSTANTS => "Fluid constants:",
        HEAT_PROMPT_Q => "Heat transfer rate Q [kW] (blank to solve): ",
        HEAT_PROMPT_V => "Volume flow rate V [L/s] (blank to solve): ",
        HEAT_PROMPT_DT => "Temperature difference ΔT [K] (blank to solve): ",
        HEAT_RESULT_HEADING => "Calculation results:",
        PSYCHRO_HEADING => "\n-- Psychrometric Properties --",
        PSYCHRO_NOTE => "State is derived from dry bulb + (RH or wet bulb) + pressure.",
        PSYCHRO_PROMPT_DRY_BULB => "Dry bulb temperature: ",
        PSYCHRO_PROMPT_PRESSURE => "Atmospheric pressure: ",
        PSYCHRO_INPUT_MODE => "Humidity input (1=relative humidity %, 2=wet bulb): ",
        PSYCHRO_PROMPT_RH => "Relative humidity [%] (0-100): ",
        PSYCHRO_PROMPT_WET_BULB => "Wet bulb temperature: ",
        PSYCHRO_RESULT_HEADING => "Calculated properties:",
        PRESSURE_UNIT_OPTIONS => "Pressure units: 1=Pa 2=kPa 3=bar 4=atm 5=psi",
        TEMPERATURE_UNIT_OPTIONS => "Temperature units: 1=°C 2=K 3=°F",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_LANGUAGE_OPTIONS => "1) auto  2) en-us  3) ko-kr",
        SETTINGS_CURRENT_PRESSURE_UNIT => "Current pressure display unit:",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings saved.",
        HELP_HEAT_TRANSFER => "Help: enter two of Q [kW], V [L/s], ΔT [K] → solves the third plus mass flow.",
        HELP_PSYCHRO => "Help: enter dry bulb and pressure, then choose RH or wet bulb input.",
        HELP_SETTINGS => "Help: language and default display units are saved to config.toml.",
        _ => return None,
    })
}
