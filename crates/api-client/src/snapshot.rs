//! Partial-failure fan-out fetching of the dashboard's sections.
//!
//! Every section is fetched concurrently; a failed section degrades to an
//! empty list and one recorded notice instead of aborting its siblings, so
//! the dashboard always renders whatever did arrive.

use crate::error::ApiError;
use crate::DashboardApi;
use core_types::{
    ConflictRecord, EvaluationRecord, FeasibilityAnalysis, NegotiationRecord, ProposalRecord,
};

/// One error notification for a section that failed to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionError {
    pub section: &'static str,
    pub message: String,
}

impl std::fmt::Display for SectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.section, self.message)
    }
}

/// The merged, possibly partially-empty snapshot a view renders from.
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    pub proposals: Vec<ProposalRecord>,
    pub negotiations: Vec<NegotiationRecord>,
    pub conflicts: Vec<ConflictRecord>,
    pub evaluations: Vec<EvaluationRecord>,
    pub feasibility: Vec<FeasibilityAnalysis>,
    /// Exactly one notice per failed primary section.
    pub errors: Vec<SectionError>,
}

fn settle<T>(
    section: &'static str,
    result: Result<Vec<T>, ApiError>,
    errors: &mut Vec<SectionError>,
) -> Vec<T> {
    match result {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(section, error = %e, "section fetch failed; rendering it empty");
            errors.push(SectionError {
                section,
                message: e.to_string(),
            });
            Vec::new()
        }
    }
}

/// Like [`settle`] but for supplementary data: failure degrades silently to
/// empty (warning log only), so the primary view still renders cleanly.
fn settle_optional<T>(section: &'static str, result: Result<Vec<T>, ApiError>) -> Vec<T> {
    match result {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(section, error = %e, "supplementary fetch failed; using empty default");
            Vec::new()
        }
    }
}

/// Fetches every dashboard section concurrently and folds the settled
/// results into one `DashboardData`. One rejection never cancels siblings.
pub async fn fetch_dashboard(api: &dyn DashboardApi) -> DashboardData {
    let (proposals, negotiations, conflicts, evaluations, feasibility) = futures::join!(
        api.fetch_proposals(),
        api.fetch_negotiations(),
        api.fetch_conflicts(),
        api.fetch_evaluations(),
        api.fetch_feasibility(),
    );

    let mut errors = Vec::new();
    DashboardData {
        proposals: settle("proposals", proposals, &mut errors),
        negotiations: settle("negotiations", negotiations, &mut errors),
        conflicts: settle("conflicts", conflicts, &mut errors),
        evaluations: settle("evaluations", evaluations, &mut errors),
        feasibility: settle_optional("feasibility", feasibility),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use core_types::BenchmarkResult;

    /// A backend where every endpoint returns the given outcome.
    struct UniformApi {
        healthy: bool,
    }

    impl UniformApi {
        fn outcome<T>(&self, section: &str) -> Result<Vec<T>, ApiError> {
            if self.healthy {
                Ok(Vec::new())
            } else {
                Err(ApiError::Api {
                    status: 503,
                    message: format!("{section} backend down"),
                })
            }
        }
    }

    #[async_trait]
    impl DashboardApi for UniformApi {
        async fn login(
            &self,
            _email: &str,
            _password: &str,
        ) -> Result<crate::Session, ApiError> {
            Err(ApiError::Api {
                status: 400,
                message: "not under test".to_string(),
            })
        }

        async fn fetch_proposals(&self) -> Result<Vec<ProposalRecord>, ApiError> {
            self.outcome("proposals")
        }

        async fn fetch_negotiations(&self) -> Result<Vec<NegotiationRecord>, ApiError> {
            self.outcome("negotiations")
        }

        async fn fetch_conflicts(&self) -> Result<Vec<ConflictRecord>, ApiError> {
            self.outcome("conflicts")
        }

        async fn fetch_evaluations(&self) -> Result<Vec<EvaluationRecord>, ApiError> {
            self.outcome("evaluations")
        }

        async fn fetch_benchmarks(&self) -> Result<Vec<BenchmarkResult>, ApiError> {
            self.outcome("benchmarks")
        }

        async fn fetch_feasibility(&self) -> Result<Vec<FeasibilityAnalysis>, ApiError> {
            self.outcome("feasibility")
        }
    }

    #[tokio::test]
    async fn healthy_backend_produces_no_notices() {
        let data = fetch_dashboard(&UniformApi { healthy: true }).await;
        assert!(data.errors.is_empty());
    }

    #[tokio::test]
    async fn every_primary_section_failing_yields_one_notice_each() {
        let data = fetch_dashboard(&UniformApi { healthy: false }).await;

        // One notice per primary section, in fetch order; the supplementary
        // feasibility fetch degrades silently.
        let sections: Vec<&str> = data.errors.iter().map(|e| e.section).collect();
        assert_eq!(
            sections,
            vec!["proposals", "negotiations", "conflicts", "evaluations"]
        );
        assert!(data.feasibility.is_empty());
        assert!(data.errors[0].message.contains("proposals backend down"));
    }
}
