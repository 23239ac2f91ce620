use serde::{Deserialize, Serialize};

/// Direction tag attached to an evaluation record.
///
/// Local derivation only ever produces `Improving` and `Stable` (see the
/// analytics crate); `Declining` exists because the backend can send it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Stable,
    Declining,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Improving => "improving",
            Trend::Stable => "stable",
            Trend::Declining => "declining",
        }
    }
}

/// One axis of the backend's feasibility analysis. Each dimension carries a
/// 0..1 score computed upstream; this crate only names the axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DimensionKind {
    Time,
    Cost,
    Complexity,
    ResourceWaste,
}

impl DimensionKind {
    /// All dimensions, in the order the dashboard displays them.
    pub const ALL: [DimensionKind; 4] = [
        DimensionKind::Time,
        DimensionKind::Cost,
        DimensionKind::Complexity,
        DimensionKind::ResourceWaste,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DimensionKind::Time => "time",
            DimensionKind::Cost => "cost",
            DimensionKind::Complexity => "complexity",
            DimensionKind::ResourceWaste => "resourceWaste",
        }
    }
}
