#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};

use hvac_calculator::{
    air::moist_air::{self, HumidityInput, MoistAirInput},
    config, conversion,
    fluid::{self, FluidKind},
    heat_transfer::{self, HeatTransferForm},
    i18n, units,
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(860.0, 640.0))
        .with_transparent(true);
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        "HVAC Calculator",
        native_options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search
        .iter()
        .find(|p| Path::new(*p).exists())
        .map(|s| s.to_string())?;
    let bytes = fs::read(&path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글을 표시하기 위해 CJK 폰트를 우선 적용한다.
/// 1) assets/fonts/ 아래 ttf
/// 2) Windows 시스템 폰트(맑은 고딕/굴림 등)
/// 3) 모두 실패 시 Err를 반환해 사용자 지정 폰트 로드를 유도한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    // 1) 프로젝트 내 폰트
    let asset_candidates = ["assets/fonts/malgun.ttf", "assets/fonts/NotoSansKR.ttf"];
    for cand in asset_candidates {
        let p = Path::new(cand);
        if p.exists() {
            let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }

    // 2) 시스템 폰트 탐색 (Windows 기준)
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts_dir = Path::new(&windir).join("Fonts");
        let candidates = ["malgun.ttf", "malgunsl.ttf", "malgunbd.ttf", "gulim.ttc"];
        for cand in candidates {
            let p = fonts_dir.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    // 3) 실패: 기본 폰트 유지, 사용자 지정 안내
    Err("CJK font not found. Please set a user font (.ttf/.ttc) in settings.".into())
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Font file not found: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

fn unit_combo(ui: &mut egui::Ui, id: &str, value: &mut String, options: &[&str]) {
    egui::ComboBox::from_id_source(id.to_string())
        .selected_text(value.clone())
        .show_ui(ui, |ui| {
            for opt in options {
                ui.selectable_value(value, opt.to_string(), *opt);
            }
        });
}

const PRESSURE_UNIT_CODES: &[&str] = &["Pa", "kPa", "bar", "atm", "psi"];
const TEMPERATURE_UNIT_CODES: &[&str] = &["C", "K", "F"];

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    HeatTransfer,
    Psychrometrics,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ThemeChoice {
    System,
    Light,
    Dark,
    SoftBlue,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum HumidityMode {
    RelativeHumidity,
    WetBulb,
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    lang_save_status: Option<String>,
    tab: Tab,
    window_alpha: f32,
    // 열전달
    ht_fluid: FluidKind,
    ht_q_input: String,
    ht_v_input: String,
    ht_dt_input: String,
    ht_result: Option<String>,
    show_legend_heat: bool,
    // 습공기
    psy_dry_bulb: f64,
    psy_temp_unit: String,
    psy_pressure: f64,
    psy_pressure_unit: String,
    psy_mode: HumidityMode,
    psy_rel_hum_pct: f64,
    psy_wet_bulb: f64,
    psy_result: Option<String>,
    show_legend_psy: bool,
    // 설정
    font_size: f32,
    ui_scale: f32,
    always_on_top: bool,
    show_settings_modal: bool,
    show_help_modal: bool,
    theme: ThemeChoice,
    custom_font_path: String,
    font_load_error: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let lang_input = config.language.clone();
        let pressure_unit = match config.default_units.pressure {
            units::PressureUnit::Pascal => "Pa",
            units::PressureUnit::KiloPascal => "kPa",
            units::PressureUnit::Bar => "bar",
            units::PressureUnit::Atm => "atm",
            units::PressureUnit::Psi => "psi",
        };
        let temp_unit = match config.default_units.temperature {
            units::TemperatureUnit::Celsius => "C",
            units::TemperatureUnit::Kelvin => "K",
            units::TemperatureUnit::Fahrenheit => "F",
        };
        Self {
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            psy_pressure: units::from_pascal(101_325.0, config.default_units.pressure),
            config,
            tr,
            lang_input,
            lang_save_status: None,
            tab: Tab::HeatTransfer,
            ht_fluid: FluidKind::Air,
            ht_q_input: String::new(),
            ht_v_input: String::new(),
            ht_dt_input: String::new(),
            ht_result: None,
            show_legend_heat: false,
            psy_dry_bulb: 25.0,
            psy_temp_unit: temp_unit.into(),
            psy_pressure_unit: pressure_unit.into(),
            psy_mode: HumidityMode::RelativeHumidity,
            psy_rel_hum_pct: 50.0,
            psy_wet_bulb: 20.0,
            psy_result: None,
            show_legend_psy: false,
            font_size: 16.0,
            ui_scale: 1.0,
            always_on_top: false,
            show_settings_modal: false,
            show_help_modal: false,
            theme: ThemeChoice::SoftBlue,
            custom_font_path: String::new(),
            font_load_error: None,
        }
    }

    /// 테마/투명도/글꼴 크기를 매 프레임 적용한다.
    fn apply_style(&self, ctx: &egui::Context) {
        let mut visuals = match self.theme {
            ThemeChoice::System => {
                if ctx.style().visuals.dark_mode {
                    egui::Visuals::dark()
                } else {
                    egui::Visuals::light()
                }
            }
            ThemeChoice::Light => egui::Visuals::light(),
            ThemeChoice::Dark => egui::Visuals::dark(),
            ThemeChoice::SoftBlue => {
                let mut v = egui::Visuals::light();
                v.panel_fill = egui::Color32::from_rgb(228, 238, 248);
                v.window_fill = egui::Color32::from_rgb(236, 243, 250);
                v
            }
        };
        visuals.panel_fill = visuals.panel_fill.gamma_multiply(self.window_alpha);
        visuals.window_fill = visuals.window_fill.gamma_multiply(self.window_alpha);
        ctx.set_visuals(visuals);

        let mut style = (*ctx.style()).clone();
        for (text_style, font_id) in style.text_styles.iter_mut() {
            font_id.size = match text_style {
                egui::TextStyle::Heading => self.font_size * 1.4,
                egui::TextStyle::Small => self.font_size * 0.8,
                _ => self.font_size,
            };
        }
        ctx.set_style(style);
        ctx.set_pixels_per_point(self.ui_scale);
    }

    /// 사이드 메뉴를 제공한다.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.vertical_centered(|ui| {
            ui.heading(txt("gui.nav.heading", "Menu"));
            ui.add_space(8.0);
        });
        for (tab, label) in [
            (Tab::HeatTransfer, txt("gui.tab.heat_transfer", "Heat Transfer")),
            (
                Tab::Psychrometrics,
                txt("gui.tab.psychrometrics", "Psychrometrics"),
            ),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            let resp = ui
                .add(button)
                .on_hover_text(txt("gui.nav.switch_tip", "Switch calculator"));
            if resp.clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
        ui.add_space(12.0);
        ui.separator();
        if ui.button(txt("gui.nav.settings", "Settings")).clicked() {
            self.show_settings_modal = true;
        }
        if ui.button(txt("gui.nav.help", "Help")).clicked() {
            self.show_help_modal = true;
        }
    }

    fn ui_heat_transfer(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.heat.heading", "Heat Transfer (Q = m·c·ΔT)"),
            &txt(
                "gui.heat.tip",
                "Sensible heat transfer; solves the one field left blank.",
            ),
        );
        label_with_tip(
            ui,
            &txt(
                "gui.heat.blank_note",
                "Enter exactly two of Q, V, ΔT and leave one blank to solve for it.",
            ),
            &txt("gui.heat.blank_tip", "Mass flow is derived as m = V × ρ / 1000."),
        );
        ui.add_space(8.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(txt("gui.heat.fluid", "Fluid"));
                egui::ComboBox::from_id_source("ht_fluid")
                    .selected_text(self.ht_fluid.label())
                    .show_ui(ui, |ui| {
                        for props in fluid::fluids() {
                            ui.selectable_value(&mut self.ht_fluid, props.kind, props.kind.label());
                        }
                    });
                let props = fluid::properties(self.ht_fluid);
                ui.label(format!(
                    "ρ = {} kg/m³, c = {} J/kg·K",
                    props.density_kg_per_m3, props.specific_heat_j_per_kgk
                ));
            });
            ui.add_space(6.0);

            egui::Grid::new("ht_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.heat.q_label", "Heat transfer rate Q [kW]"));
                    ui.add(
                        egui::TextEdit::singleline(&mut self.ht_q_input)
                            .hint_text(txt("gui.heat.blank_hint", "blank = solve")),
                    );
                    ui.end_row();

                    ui.label(txt("gui.heat.v_label", "Volume flow rate V [L/s]"));
                    ui.add(
                        egui::TextEdit::singleline(&mut self.ht_v_input)
                            .hint_text(txt("gui.heat.blank_hint", "blank = solve")),
                    );
                    ui.end_row();

                    ui.label(txt("gui.heat.dt_label", "Temperature difference ΔT [K]"));
                    ui.add(
                        egui::TextEdit::singleline(&mut self.ht_dt_input)
                            .hint_text(txt("gui.heat.blank_hint", "blank = solve")),
                    );
                    ui.end_row();
                });
            ui.add_space(8.0);

            if ui.button(txt("gui.heat.run", "Calculate")).clicked() {
                let form = HeatTransferForm {
                    heat_rate_kw: self.ht_q_input.clone(),
                    volume_flow_l_per_s: self.ht_v_input.clone(),
                    delta_t_k: self.ht_dt_input.clone(),
                };
                let props = fluid::properties(self.ht_fluid);
                self.ht_result = Some(match heat_transfer::solve_form(&form, props) {
                    Ok(res) => format!(
                        "Q = {:.2} kW ({:.2} W)\nV = {:.2} L/s\nm = {:.4} kg/s\nΔT = {:.2} K\nρ = {} kg/m³, c = {:.0} J/kg·K",
                        res.heat_rate_kw,
                        res.heat_rate_w,
                        res.volume_flow_l_per_s,
                        res.mass_flow_kg_per_s,
                        res.delta_t_k,
                        res.density_kg_per_m3,
                        res.specific_heat_j_per_kgk
                    ),
                    Err(e) => format!("{}: {e}", txt("gui.error_prefix", "Error")),
                });
            }
            if let Some(res) = &self.ht_result {
                ui.add_space(6.0);
                ui.monospace(res.as_str());
            }
        });

        ui.add_space(6.0);
        ui.checkbox(
            &mut self.show_legend_heat,
            txt("gui.heat.legend_toggle", "Show formula notes"),
        );
        if self.show_legend_heat {
            ui.small(txt(
                "gui.heat.legend",
                "Q [W] = m [kg/s] × c [J/kg·K] × ΔT [K]; m = V [L/s] × ρ [kg/m³] / 1000. Q is entered/shown in kW.",
            ));
        }
    }

    fn ui_psychrometrics(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.psy.heading", "Psychrometric Properties"),
            &txt(
                "gui.psy.tip",
                "Moist air state from dry bulb + pressure + (RH or wet bulb).",
            ),
        );
        ui.add_space(8.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("psy_grid")
                .num_columns(3)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.psy.dry_bulb", "Dry bulb temperature"));
                    ui.add(egui::DragValue::new(&mut self.psy_dry_bulb).speed(0.1));
                    unit_combo(ui, "psy_t_unit", &mut self.psy_temp_unit, TEMPERATURE_UNIT_CODES);
                    ui.end_row();

                    ui.label(txt("gui.psy.pressure", "Atmospheric pressure"));
                    ui.add(egui::DragValue::new(&mut self.psy_pressure).speed(10.0));
                    unit_combo(
                        ui,
                        "psy_p_unit",
                        &mut self.psy_pressure_unit,
                        PRESSURE_UNIT_CODES,
                    );
                    ui.end_row();
                });
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                ui.selectable_value(
                    &mut self.psy_mode,
                    HumidityMode::RelativeHumidity,
                    txt("gui.psy.mode_rh", "Relative humidity (%)"),
                );
                ui.selectable_value(
                    &mut self.psy_mode,
                    HumidityMode::WetBulb,
                    txt("gui.psy.mode_wb", "Wet bulb temperature"),
                );
            });
            ui.horizontal(|ui| match self.psy_mode {
                HumidityMode::RelativeHumidity => {
                    ui.label(txt("gui.psy.rh", "Relative humidity [%]"));
                    ui.add(
                        egui::DragValue::new(&mut self.psy_rel_hum_pct)
                            .speed(1.0)
                            .clamp_range(0.0..=100.0),
                    );
                }
                HumidityMode::WetBulb => {
                    ui.label(txt("gui.psy.wet_bulb", "Wet bulb temperature"));
                    ui.add(egui::DragValue::new(&mut self.psy_wet_bulb).speed(0.1));
                }
            });
            ui.add_space(8.0);

            if ui.button(txt("gui.psy.run", "Calculate")).clicked() {
                self.psy_result = Some(self.run_psychrometrics());
            }
            if let Some(res) = &self.psy_result {
                ui.add_space(6.0);
                ui.monospace(res.as_str());
            }
        });

        ui.add_space(6.0);
        ui.checkbox(
            &mut self.show_legend_psy,
            txt("gui.psy.legend_toggle", "Show property notes"),
        );
        if self.show_legend_psy {
            ui.small(txt(
                "gui.psy.legend",
                "Humidity ratio is derived first; RH, wet bulb, dew point, enthalpy and specific volume follow from it.",
            ));
        }
    }

    fn run_psychrometrics(&self) -> String {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        let t_unit = conversion::parse_temperature_unit(&self.psy_temp_unit)
            .unwrap_or(units::TemperatureUnit::Celsius);
        let p_unit = conversion::parse_pressure_unit(&self.psy_pressure_unit)
            .unwrap_or(units::PressureUnit::Pascal);
        let dry_bulb_c = units::to_celsius(self.psy_dry_bulb, t_unit);
        let pressure_pa = units::to_pascal(self.psy_pressure, p_unit);
        let humidity = match self.psy_mode {
            HumidityMode::RelativeHumidity => {
                HumidityInput::RelativeHumidityPct(self.psy_rel_hum_pct)
            }
            HumidityMode::WetBulb => {
                HumidityInput::WetBulbC(units::to_celsius(self.psy_wet_bulb, t_unit))
            }
        };
        match moist_air::compute(MoistAirInput {
            dry_bulb_c,
            pressure_pa,
            humidity,
        }) {
            Ok(state) => format!(
                "{}: {:.2} °C\n{}: {:.2} °C\n{}: {:.2} °C\n{}: {:.1} %\n{}: {:.6} kg/kg\n{}: {:.2} kJ/kg\n{}: {:.4} m³/kg",
                txt("gui.psy.result.dry_bulb", "Dry bulb"),
                state.dry_bulb_c,
                txt("gui.psy.result.wet_bulb", "Wet bulb"),
                state.wet_bulb_c,
                txt("gui.psy.result.dew_point", "Dew point"),
                state.dew_point_c,
                txt("gui.psy.result.rel_hum", "Relative humidity"),
                state.relative_humidity_pct,
                txt("gui.psy.result.hum_ratio", "Humidity ratio"),
                state.humidity_ratio,
                txt("gui.psy.result.enthalpy", "Enthalpy"),
                state.enthalpy_kj_per_kg(),
                txt("gui.psy.result.spec_volume", "Specific volume"),
                state.specific_volume_m3_per_kg,
            ),
            Err(e) => format!("{}: {e}", txt("gui.error_prefix", "Error")),
        }
    }

    fn ui_settings(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.label(txt("gui.settings.theme", "Theme"));
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.theme, ThemeChoice::System, "System");
            ui.selectable_value(&mut self.theme, ThemeChoice::Light, "Light");
            ui.selectable_value(&mut self.theme, ThemeChoice::Dark, "Dark");
            ui.selectable_value(&mut self.theme, ThemeChoice::SoftBlue, "Soft Blue");
        });
        ui.add_space(6.0);

        ui.label(txt("gui.settings.font_size", "Font size"));
        ui.add(egui::Slider::new(&mut self.font_size, 12.0..=24.0));
        ui.label(txt("gui.settings.ui_scale", "UI scale"));
        ui.add(egui::Slider::new(&mut self.ui_scale, 0.8..=1.6));
        ui.label(txt("gui.settings.alpha", "Window alpha"));
        if ui
            .add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0))
            .changed()
        {
            self.config.window_alpha = self.window_alpha;
        }
        if ui
            .checkbox(
                &mut self.always_on_top,
                txt("gui.settings.always_on_top", "Always on top"),
            )
            .changed()
        {
            let level = if self.always_on_top {
                egui::viewport::WindowLevel::AlwaysOnTop
            } else {
                egui::viewport::WindowLevel::Normal
            };
            ui.ctx()
                .send_viewport_cmd(egui::ViewportCommand::WindowLevel(level));
        }
        ui.add_space(6.0);
        ui.separator();

        ui.label(txt("gui.settings.language", "Language (auto/en-us/ko-kr)"));
        ui.horizontal(|ui| {
            ui.add(egui::TextEdit::singleline(&mut self.lang_input).desired_width(80.0));
            if ui.button(txt("gui.settings.lang_apply", "Apply")).clicked() {
                self.config.language = self.lang_input.trim().to_string();
                let resolved = i18n::resolve_language("auto", Some(self.config.language.as_str()));
                self.tr = i18n::Translator::new_with_pack(
                    &resolved,
                    self.config.language_pack_dir.as_deref(),
                );
                self.lang_save_status = Some(match self.config.save() {
                    Ok(()) => txt("gui.settings.saved", "Saved to config.toml."),
                    Err(e) => format!("{}: {e}", txt("gui.error_prefix", "Error")),
                });
            }
        });
        if let Some(status) = &self.lang_save_status {
            ui.small(status.as_str());
        }
        ui.add_space(6.0);
        ui.separator();

        ui.label(txt("gui.settings.custom_font", "Custom font (.ttf/.ttc)"));
        ui.horizontal(|ui| {
            ui.add(egui::TextEdit::singleline(&mut self.custom_font_path).desired_width(220.0));
            if ui.button(txt("gui.settings.pick_font", "Browse...")).clicked() {
                if let Some(path) = FileDialog::new()
                    .add_filter("Font", &["ttf", "ttc", "otf"])
                    .pick_file()
                {
                    self.custom_font_path = path.display().to_string();
                }
            }
            if ui.button(txt("gui.settings.load_font", "Load")).clicked() {
                self.font_load_error = load_custom_font(ui.ctx(), &self.custom_font_path).err();
            }
        });
        if let Some(err) = &self.font_load_error {
            ui.colored_label(egui::Color32::RED, err.as_str());
        }
    }

    fn ui_help(&self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.label(txt(
            "gui.help.heat",
            "Heat transfer: enter two of Q [kW], V [L/s], ΔT [K]; the blank field is solved and mass flow is shown.",
        ));
        ui.add_space(4.0);
        ui.label(txt(
            "gui.help.psy",
            "Psychrometrics: dry bulb + pressure + (RH or wet bulb) produce the full moist-air state.",
        ));
        ui.add_space(4.0);
        ui.label(txt(
            "gui.help.settings",
            "Settings: theme, fonts, language and window options. Language is saved to config.toml.",
        ));
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.apply_style(ctx);
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        egui::SidePanel::left("nav_panel")
            .resizable(false)
            .default_width(170.0)
            .show(ctx, |ui| self.ui_nav(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.tab {
                Tab::HeatTransfer => self.ui_heat_transfer(ui),
                Tab::Psychrometrics => self.ui_psychrometrics(ui),
            });
        });

        if self.show_settings_modal {
            let mut open = self.show_settings_modal;
            egui::Window::new(txt("gui.settings.title", "Settings"))
                .open(&mut open)
                .resizable(false)
                .show(ctx, |ui| self.ui_settings(ui));
            self.show_settings_modal = open;
        }

        if self.show_help_modal {
            let mut open = self.show_help_modal;
            egui::Window::new(txt("gui.help.title", "Help"))
                .open(&mut open)
                .resizable(false)
                .show(ctx, |ui| self.ui_help(ui));
            self.show_help_modal = open;
        }
    }
}
