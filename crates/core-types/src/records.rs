use crate::enums::{DimensionKind, Trend};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single negotiation-evaluation row from `/api/evaluations`.
///
/// The five raw metric fields are on mixed scales: `utility_gain` and
/// (normalized) `stakeholder_satisfaction` live on 0..1 and 1..5, while the
/// three resolution metrics arrive pre-scaled to 0..100. `performance_score`
/// and `trend` are derived locally and are absent on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRecord {
    pub negotiation_id: String,
    #[serde(default)]
    pub proposal_titles: Option<String>,
    /// Elapsed seconds from negotiation start to agreement (TTC).
    #[serde(default)]
    pub time_to_consensus_secs: Option<f64>,
    #[serde(default)]
    pub number_of_rounds: u32,
    /// 0..1.
    #[serde(default)]
    pub utility_gain: Option<f64>,
    /// Mean self-reported satisfaction, 1..5.
    #[serde(default)]
    pub stakeholder_satisfaction: Option<f64>,
    /// 0..100.
    #[serde(default)]
    pub resolution_success_rate: Option<f64>,
    /// 0..100.
    #[serde(default)]
    pub resolution_stability: Option<f64>,
    /// 0..100.
    #[serde(default)]
    pub decision_consistency: Option<f64>,
    /// Derived weighted score, 0..100. Pure function of the five metrics
    /// above: recomputing from the same inputs always yields the same value.
    #[serde(default)]
    pub performance_score: Option<u32>,
    /// Derived from the created/updated timestamps.
    #[serde(default)]
    pub trend: Option<Trend>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A stakeholder proposal from `/api/proposals`. The status vocabulary is
/// owned by the backend, so it stays a plain string here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub submitted_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A negotiation from `/api/negotiations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NegotiationRecord {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub number_of_rounds: Option<u32>,
    #[serde(default)]
    pub participant_count: Option<u32>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A detected conflict from `/api/conflicts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictRecord {
    pub id: String,
    #[serde(default)]
    pub negotiation_id: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub resolved: bool,
    #[serde(default)]
    pub description: Option<String>,
}

/// A benchmarking row from `/api/benchmarks`. The fairness (Jain) index is
/// produced upstream and only displayed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkResult {
    pub strategy: String,
    #[serde(default)]
    pub fairness_index: Option<f64>,
    #[serde(default)]
    pub avg_time_to_consensus_secs: Option<f64>,
    #[serde(default)]
    pub avg_utility_gain: Option<f64>,
    #[serde(default)]
    pub sample_size: Option<u32>,
}

/// One axis of a feasibility analysis, scored 0..1 by the backend engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeasibilityDimension {
    pub name: DimensionKind,
    pub score: f64,
}

/// A full feasibility analysis for one negotiation, from `/api/feasibility`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeasibilityAnalysis {
    pub negotiation_id: String,
    #[serde(default)]
    pub dimensions: Vec<FeasibilityDimension>,
    #[serde(default)]
    pub overall_score: Option<f64>,
}

/// The authenticated user's profile, persisted alongside the bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub email: Option<String>,
}
