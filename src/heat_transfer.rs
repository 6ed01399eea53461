//! 현열 열전달 계산기. Q = m·c·ΔT 에서 비어 있는 변수 하나를 풀어낸다.
//! 입력: Q[kW], V[L/s], ΔT[K] 중 두 개 + 유체 상수. 내부 계산은 W 기준.

use crate::fluid::FluidProperties;

/// 세 입력 필드 중 어느 것을 풀지 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveTarget {
    /// Q가 비어 있음: Q = m·c·ΔT
    HeatRate,
    /// V가 비어 있음: V = Q/(c·ΔT)·1000/ρ
    VolumeFlow,
    /// ΔT가 비어 있음: ΔT = Q/(m·c)
    DeltaT,
}

/// 폼에서 넘어온 가공 전 텍스트 입력. 빈칸 하나가 풀이 대상이 된다.
#[derive(Debug, Clone, Default)]
pub struct HeatTransferForm {
    /// 열전달량 [kW]
    pub heat_rate_kw: String,
    /// 체적 유량 [L/s]
    pub volume_flow_l_per_s: String,
    /// 온도차 [K]
    pub delta_t_k: String,
}

/// 파싱이 끝난 풀이 입력. `target`이 가리키는 필드만 `None`이다.
#[derive(Debug, Clone, Copy)]
pub struct HeatTransferInputs {
    pub target: SolveTarget,
    /// 열전달량 [W] (kW 입력 ×1000)
    pub heat_rate_w: Option<f64>,
    /// 체적 유량 [L/s]
    pub volume_flow_l_per_s: Option<f64>,
    /// 온도차 [K]
    pub delta_t_k: Option<f64>,
    pub fluid: FluidProperties,
}

/// 풀이 완료 후 모든 값이 채워진 결과.
#[derive(Debug, Clone, Copy)]
pub struct HeatTransferResult {
    pub target: SolveTarget,
    /// 열전달량 [W]
    pub heat_rate_w: f64,
    /// 열전달량 [kW]
    pub heat_rate_kw: f64,
    /// 체적 유량 [L/s]
    pub volume_flow_l_per_s: f64,
    /// 질량 유량 [kg/s]
    pub mass_flow_kg_per_s: f64,
    /// 온도차 [K] (°C 차이와 동일 스케일)
    pub delta_t_k: f64,
    /// 밀도 [kg/m³]
    pub density_kg_per_m3: f64,
    /// 비열 [J/kg·K]
    pub specific_heat_j_per_kgk: f64,
}

/// 0으로 나누기가 발생한 분모를 구분한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroDenominator {
    /// V 풀이에서 c·ΔT = 0
    SpecificHeatTimesDeltaT,
    /// ΔT 풀이에서 m·c = 0
    MassFlowTimesSpecificHeat,
}

/// 열전달 계산 시 발생 가능한 오류.
#[derive(Debug, Clone)]
pub enum HeatTransferError {
    /// 입력 필드 개수가 2개가 아님 (빈칸은 정확히 하나여야 함)
    InvalidInputCount { provided: usize },
    /// 숫자로 해석할 수 없는 입력
    InvalidNumericValue { field: &'static str, raw: String },
    /// 분모가 0이 되는 퇴화 입력
    DivisionByZero(ZeroDenominator),
}

impl std::fmt::Display for HeatTransferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeatTransferError::InvalidInputCount { provided } => write!(
                f,
                "값을 정확히 2개 입력하고 1개는 비워 두세요 (현재 {provided}개 입력됨)."
            ),
            HeatTransferError::InvalidNumericValue { field, raw } => {
                write!(f, "{field} 입력이 숫자가 아닙니다: {raw}")
            }
            HeatTransferError::DivisionByZero(ZeroDenominator::SpecificHeatTimesDeltaT) => {
                write!(f, "c·ΔT = 0 이라 유량을 계산할 수 없습니다. ΔT를 확인하세요.")
            }
            HeatTransferError::DivisionByZero(ZeroDenominator::MassFlowTimesSpecificHeat) => {
                write!(f, "m·c = 0 이라 온도차를 계산할 수 없습니다. 유량을 확인하세요.")
            }
        }
    }
}

impl std::error::Error for HeatTransferError {}

fn parse_field(field: &'static str, raw: &str) -> Result<Option<f64>, HeatTransferError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| HeatTransferError::InvalidNumericValue {
            field,
            raw: trimmed.to_string(),
        })
}

impl HeatTransferForm {
    /// 텍스트 입력을 파싱하고 빈칸 위치로 풀이 대상을 결정한다.
    ///
    /// 빈칸이 정확히 하나가 아니면 `InvalidInputCount`, 숫자 파싱 실패 시
    /// `InvalidNumericValue`를 반환한다.
    pub fn parse(&self, fluid: FluidProperties) -> Result<HeatTransferInputs, HeatTransferError> {
        let heat_rate_kw = parse_field("Q", &self.heat_rate_kw)?;
        let volume_flow = parse_field("V", &self.volume_flow_l_per_s)?;
        let delta_t = parse_field("ΔT", &self.delta_t_k)?;

        let provided = [
            heat_rate_kw.is_some(),
            volume_flow.is_some(),
            delta_t.is_some(),
        ]
        .iter()
        .filter(|p| **p)
        .count();
        if provided != 2 {
            return Err(HeatTransferError::InvalidInputCount { provided });
        }

        let target = if heat_rate_kw.is_none() {
            SolveTarget::HeatRate
        } else if volume_flow.is_none() {
            SolveTarget::VolumeFlow
        } else {
            SolveTarget::DeltaT
        };

        Ok(HeatTransferInputs {
            target,
            // kW 입력을 내부 기준인 W로 환산
            heat_rate_w: heat_rate_kw.map(|q| q * 1000.0),
            volume_flow_l_per_s: volume_flow,
            delta_t_k: delta_t,
            fluid,
        })
    }
}

/// 비어 있는 변수를 풀고 파생값까지 모두 채운 결과를 반환한다.
pub fn solve(inputs: HeatTransferInputs) -> Result<HeatTransferResult, HeatTransferError> {
    let rho = inputs.fluid.density_kg_per_m3;
    let c = inputs.fluid.specific_heat_j_per_kgk;

    let (q_w, v_l_per_s, m_kg_per_s, delta_t) = match inputs.target {
        SolveTarget::HeatRate => {
            let v = inputs.volume_flow_l_per_s.unwrap_or_default();
            let dt = inputs.delta_t_k.unwrap_or_default();
            // L/s → m³/s 환산이 /1000에 포함된다.
            let m = v * rho / 1000.0;
            (m * c * dt, v, m, dt)
        }
        SolveTarget::VolumeFlow => {
            let q = inputs.heat_rate_w.unwrap_or_default();
            let dt = inputs.delta_t_k.unwrap_or_default();
            if c * dt == 0.0 {
                return Err(HeatTransferError::DivisionByZero(
                    ZeroDenominator::SpecificHeatTimesDeltaT,
                ));
            }
            let m = q / (c * dt);
            (q, m * 1000.0 / rho, m, dt)
        }
        SolveTarget::DeltaT => {
            let q = inputs.heat_rate_w.unwrap_or_default();
            let v = inputs.volume_flow_l_per_s.unwrap_or_default();
            let m = v * rho / 1000.0;
            if m * c == 0.0 {
                return Err(HeatTransferError::DivisionByZero(
                    ZeroDenominator::MassFlowTimesSpecificHeat,
                ));
            }
            (q, v, m, q / (m * c))
        }
    };

    Ok(HeatTransferResult {
        target: inputs.target,
        heat_rate_w: q_w,
        heat_rate_kw: q_w / 1000.0,
        volume_flow_l_per_s: v_l_per_s,
        mass_flow_kg_per_s: m_kg_per_s,
        delta_t_k: delta_t,
        density_kg_per_m3: rho,
        specific_heat_j_per_kgk: c,
    })
}

/// 폼 파싱과 풀이를 한 번에 수행한다.
pub fn solve_form(
    form: &HeatTransferForm,
    fluid: FluidProperties,
) -> Result<HeatTransferResult, HeatTransferError> {
    solve(form.parse(fluid)?)
}
