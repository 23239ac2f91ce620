//! Projections of the record types into CSV rows.

use crate::csv::to_csv;
use crate::document::{export_filename, CsvDocument};
use chrono::{DateTime, Utc};
use core_types::{BenchmarkResult, EvaluationRecord, ProposalRecord};

/// A record type that knows its CSV column layout.
pub trait ToCsvRows {
    fn headers() -> &'static [&'static str];
    fn row(&self) -> Vec<Option<String>>;
}

/// Builds a timestamped CSV document for a slice of records. An empty slice
/// produces a header-only document rather than failing.
pub fn export_records<R: ToCsvRows>(
    subject: &str,
    records: &[R],
    now: DateTime<Utc>,
) -> CsvDocument {
    let rows: Vec<Vec<Option<String>>> = records.iter().map(ToCsvRows::row).collect();
    if rows.is_empty() {
        tracing::warn!(subject, "nothing to export; writing header-only CSV");
    }
    CsvDocument::new(export_filename(subject, now), to_csv(R::headers(), &rows))
}

fn num(v: Option<f64>) -> Option<String> {
    v.map(|x| x.to_string())
}

impl ToCsvRows for EvaluationRecord {
    fn headers() -> &'static [&'static str] {
        &[
            "negotiationId",
            "proposalTitles",
            "timeToConsensusSecs",
            "numberOfRounds",
            "utilityGain",
            "stakeholderSatisfaction",
            "resolutionSuccessRate",
            "resolutionStability",
            "decisionConsistency",
            "performanceScore",
            "trend",
        ]
    }

    fn row(&self) -> Vec<Option<String>> {
        vec![
            Some(self.negotiation_id.clone()),
            self.proposal_titles.clone(),
            num(self.time_to_consensus_secs),
            Some(self.number_of_rounds.to_string()),
            num(self.utility_gain),
            num(self.stakeholder_satisfaction),
            num(self.resolution_success_rate),
            num(self.resolution_stability),
            num(self.decision_consistency),
            self.performance_score.map(|s| s.to_string()),
            self.trend.map(|t| t.as_str().to_string()),
        ]
    }
}

impl ToCsvRows for ProposalRecord {
    fn headers() -> &'static [&'static str] {
        &["id", "title", "status", "submittedBy", "createdAt"]
    }

    fn row(&self) -> Vec<Option<String>> {
        vec![
            Some(self.id.clone()),
            Some(self.title.clone()),
            Some(self.status.clone()),
            self.submitted_by.clone(),
            self.created_at.map(|t| t.to_rfc3339()),
        ]
    }
}

impl ToCsvRows for BenchmarkResult {
    fn headers() -> &'static [&'static str] {
        &[
            "strategy",
            "fairnessIndex",
            "avgTimeToConsensusSecs",
            "avgUtilityGain",
            "sampleSize",
        ]
    }

    fn row(&self) -> Vec<Option<String>> {
        vec![
            Some(self.strategy.clone()),
            num(self.fairness_index),
            num(self.avg_time_to_consensus_secs),
            num(self.avg_utility_gain),
            self.sample_size.map(|n| n.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn export_with_awkward_title_is_quoted() {
        let proposals = vec![ProposalRecord {
            id: "p-1".to_string(),
            title: "Grid upgrade, phase 2".to_string(),
            status: "pending".to_string(),
            submitted_by: Some("Smith, John".to_string()),
            created_at: None,
        }];
        let now = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();

        let doc = export_records("proposals", &proposals, now);
        assert_eq!(doc.filename, "proposals_2026-01-02_03-04-05.csv");
        assert_eq!(doc.mime, "text/csv;charset=utf-8");

        let lines: Vec<&str> = doc.body.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("\"Grid upgrade, phase 2\""));
        assert!(lines[1].contains("\"Smith, John\""));
        assert!(lines[1].ends_with(',')); // absent createdAt renders empty
    }

    #[test]
    fn empty_dataset_yields_header_only_document() {
        let now = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let doc = export_records::<EvaluationRecord>("evaluations", &[], now);
        assert_eq!(doc.body.lines().count(), 1);
        assert!(doc.body.starts_with("negotiationId,"));
    }
}
