/// 표준 기준 상태의 유체 물성 테이블을 제공한다.
/// 값은 고정 상수이며 측정/계산값이 아니다 (공기 15°C 해수면, 물 20°C 기준).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FluidKind {
    Air,
    Water,
}

impl FluidKind {
    pub fn label(&self) -> &'static str {
        match self {
            FluidKind::Air => "Air",
            FluidKind::Water => "Water",
        }
    }
}

/// 밀도와 비열을 담는 유체 상수 컨테이너.
#[derive(Debug, Clone, Copy)]
pub struct FluidProperties {
    pub kind: FluidKind,
    /// 밀도 [kg/m³]
    pub density_kg_per_m3: f64,
    /// 비열 [J/kg·K]
    pub specific_heat_j_per_kgk: f64,
}

/// 알 수 없는 유체 이름을 조회했을 때의 오류.
#[derive(Debug, Clone)]
pub struct UnknownFluidError(pub String);

impl std::fmt::Display for UnknownFluidError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "알 수 없는 유체: {}", self.0)
    }
}

impl std::error::Error for UnknownFluidError {}

const FLUIDS: &[FluidProperties] = &[
    FluidProperties {
        kind: FluidKind::Air,
        density_kg_per_m3: 1.225,
        specific_heat_j_per_kgk: 1005.0,
    },
    FluidProperties {
        kind: FluidKind::Water,
        density_kg_per_m3: 998.2,
        specific_heat_j_per_kgk: 4182.0,
    },
];

pub fn fluids() -> &'static [FluidProperties] {
    FLUIDS
}

/// 유체 종류에 해당하는 상수를 반환한다.
pub fn properties(kind: FluidKind) -> FluidProperties {
    match kind {
        FluidKind::Air => FLUIDS[0],
        FluidKind::Water => FLUIDS[1],
    }
}

/// 이름 문자열로 유체 상수를 조회한다. 대소문자는 무시한다.
pub fn lookup(name: &str) -> Result<FluidProperties, UnknownFluidError> {
    FLUIDS
        .iter()
        .find(|f| f.kind.label().eq_ignore_ascii_case(name.trim()))
        .copied()
        .ok_or_else(|| UnknownFluidError(name.trim().to_string()))
}
