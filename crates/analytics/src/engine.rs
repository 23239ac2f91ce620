use crate::report::{
    ConflictKpis, DashboardReport, DimensionMean, EvaluationKpis, FeasibilityKpis,
    NegotiationKpis, ProposalKpis,
};
use crate::scoring::performance_score;
use crate::stats::{average, group_count_by, percentage_clamp};
use core_types::{
    ConflictRecord, DimensionKind, EvaluationRecord, FeasibilityAnalysis, NegotiationRecord,
    ProposalRecord,
};
use std::time::Duration;

/// A stateless calculator that turns raw API records into dashboard KPIs.
///
/// Every section tolerates a partially fetched snapshot: an empty slice
/// produces a zeroed section, never an error, so a failed upstream fetch
/// degrades the view instead of crashing it.
#[derive(Debug, Default)]
pub struct MetricsEngine {}

impl MetricsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point: fan-in over the fetched record slices.
    pub fn calculate(
        &self,
        proposals: &[ProposalRecord],
        negotiations: &[NegotiationRecord],
        conflicts: &[ConflictRecord],
        evaluations: &[EvaluationRecord],
        feasibility: &[FeasibilityAnalysis],
    ) -> DashboardReport {
        tracing::debug!(
            proposals = proposals.len(),
            negotiations = negotiations.len(),
            conflicts = conflicts.len(),
            evaluations = evaluations.len(),
            feasibility = feasibility.len(),
            "calculating dashboard report"
        );
        DashboardReport {
            proposals: self.calculate_proposals(proposals),
            negotiations: self.calculate_negotiations(negotiations),
            conflicts: self.calculate_conflicts(conflicts),
            evaluations: self.calculate_evaluations(evaluations),
            feasibility: self.calculate_feasibility(feasibility),
        }
    }

    fn calculate_proposals(&self, proposals: &[ProposalRecord]) -> ProposalKpis {
        let by_status = group_count_by(proposals, |p| p.status.to_lowercase());
        let accepted = by_status
            .iter()
            .find(|k| k.key == "accepted")
            .map_or(0, |k| k.count);

        let acceptance_rate_pct = if proposals.is_empty() {
            0.0
        } else {
            percentage_clamp(Some(accepted as f64 / proposals.len() as f64 * 100.0))
        };

        ProposalKpis {
            total: proposals.len(),
            by_status,
            acceptance_rate_pct,
        }
    }

    fn calculate_negotiations(&self, negotiations: &[NegotiationRecord]) -> NegotiationKpis {
        let by_status = group_count_by(negotiations, |n| n.status.to_lowercase());
        let count_of = |status: &str| {
            by_status
                .iter()
                .find(|k| k.key == status)
                .map_or(0, |k| k.count)
        };

        NegotiationKpis {
            total: negotiations.len(),
            active: count_of("active"),
            completed: count_of("completed"),
            average_rounds: average(
                negotiations
                    .iter()
                    .map(|n| n.number_of_rounds.map(f64::from)),
            ),
            by_status,
        }
    }

    fn calculate_conflicts(&self, conflicts: &[ConflictRecord]) -> ConflictKpis {
        let resolved = conflicts.iter().filter(|c| c.resolved).count();
        let resolution_rate_pct = if conflicts.is_empty() {
            0.0
        } else {
            percentage_clamp(Some(resolved as f64 / conflicts.len() as f64 * 100.0))
        };

        ConflictKpis {
            total: conflicts.len(),
            resolved,
            resolution_rate_pct,
        }
    }

    fn calculate_evaluations(&self, evaluations: &[EvaluationRecord]) -> EvaluationKpis {
        // try_from rejects negative, NaN, and out-of-range means, so a
        // malformed upstream TTC degrades to None instead of panicking.
        let average_time_to_consensus =
            average(evaluations.iter().map(|e| e.time_to_consensus_secs))
                .and_then(|secs| Duration::try_from_secs_f64(secs).ok());

        // Scores are recomputed here rather than trusted from the record, so
        // the KPI holds even when the caller skipped enrichment.
        let average_performance_score = average(
            evaluations
                .iter()
                .map(|e| Some(f64::from(performance_score(e)))),
        );

        let by_trend = group_count_by(
            evaluations,
            |e| e.trend.unwrap_or(core_types::Trend::Stable),
        );

        EvaluationKpis {
            total: evaluations.len(),
            average_time_to_consensus,
            average_satisfaction: average(
                evaluations.iter().map(|e| e.stakeholder_satisfaction),
            ),
            average_performance_score,
            by_trend,
        }
    }

    fn calculate_feasibility(&self, analyses: &[FeasibilityAnalysis]) -> FeasibilityKpis {
        // All four dimensions are always reported, in display order, so the
        // chart renders a stable axis even when a dimension never appeared.
        let dimension_scores = DimensionKind::ALL
            .iter()
            .map(|kind| {
                let mean = average(analyses.iter().flat_map(|a| {
                    a.dimensions
                        .iter()
                        .filter(|d| d.name == *kind)
                        .map(|d| Some(d.score))
                }));
                DimensionMean {
                    dimension: kind.as_str().to_string(),
                    mean_score: mean.unwrap_or(0.0),
                }
            })
            .collect();

        FeasibilityKpis {
            total: analyses.len(),
            dimension_scores,
            average_overall_score: average(analyses.iter().map(|a| a.overall_score)),
        }
    }
}
