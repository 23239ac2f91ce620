use crate::stats::KeyCount;
use core_types::Trend;
use serde::Serialize;
use std::time::Duration;

/// The standardized KPI bundle behind the dashboard's statistic cards.
///
/// This struct is the final output of the `MetricsEngine` and the data
/// transfer object for every renderer (terminal tables, JSON dumps). A report
/// built from empty inputs is fully zeroed rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct DashboardReport {
    pub proposals: ProposalKpis,
    pub negotiations: NegotiationKpis,
    pub conflicts: ConflictKpis,
    pub evaluations: EvaluationKpis,
    pub feasibility: FeasibilityKpis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ProposalKpis {
    pub total: usize,
    /// Status distribution in first-seen order.
    pub by_status: Vec<KeyCount<String>>,
    /// Share of proposals whose status is "accepted", 0..100.
    pub acceptance_rate_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct NegotiationKpis {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    pub by_status: Vec<KeyCount<String>>,
    pub average_rounds: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ConflictKpis {
    pub total: usize,
    pub resolved: usize,
    /// Share of conflicts marked resolved, 0..100.
    pub resolution_rate_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct EvaluationKpis {
    pub total: usize,
    /// Mean time-to-consensus across records that carry one.
    #[serde(with = "humantime_serde")]
    pub average_time_to_consensus: Option<Duration>,
    /// Mean self-reported satisfaction, 1..5.
    pub average_satisfaction: Option<f64>,
    /// Mean derived performance score, 0..100.
    pub average_performance_score: Option<f64>,
    /// Trend distribution in first-seen order.
    pub by_trend: Vec<KeyCount<Trend>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct FeasibilityKpis {
    pub total: usize,
    /// Mean 0..1 score per dimension, in display order (time, cost,
    /// complexity, resourceWaste). Unobserved dimensions degrade to 0.
    pub dimension_scores: Vec<DimensionMean>,
    pub average_overall_score: Option<f64>,
}

/// Mean feasibility score for one dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionMean {
    pub dimension: String,
    pub mean_score: f64,
}

impl DashboardReport {
    /// Creates a new, zeroed-out report. Useful as the starting point before
    /// the per-section calculations run.
    pub fn new() -> Self {
        Self::default()
    }
}
