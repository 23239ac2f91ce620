//! Per-record derived fields: the weighted performance score and the trend
//! tag. Both are pure functions of the record's own fields.

use chrono::{DateTime, Utc};
use core_types::{EvaluationRecord, Trend};

/// Weight of `utility_gain` (0..1 scale), contributing up to 25 points.
const W_UTILITY: f64 = 25.0;
/// Weight of normalized satisfaction (`value / 5`), contributing up to 20.
const W_SATISFACTION: f64 = 20.0;
/// Weight of `resolution_success_rate` (already 0..100), up to 20 points.
const W_SUCCESS: f64 = 0.20;
/// Weight of `resolution_stability` (already 0..100), up to 15 points.
const W_STABILITY: f64 = 0.15;
/// Weight of `decision_consistency` (already 0..100), up to 20 points.
const W_CONSISTENCY: f64 = 0.20;

fn term(value: Option<f64>, weight: f64) -> f64 {
    match value {
        // Absent or malformed inputs contribute nothing to the score.
        Some(v) if v.is_finite() => (v * weight).round(),
        _ => 0.0,
    }
}

/// Deterministic weighted performance score in `[0, 100]`.
///
/// Each contribution is rounded on its own scale before summing, which is
/// what reproduces the platform's reference fixtures (0.85 / 4.2 / 90 / 85 /
/// 88 scores 87, not 86).
pub fn performance_score(record: &EvaluationRecord) -> u32 {
    let satisfaction = record.stakeholder_satisfaction.map(|s| s / 5.0);

    let total = term(record.utility_gain, W_UTILITY)
        + term(satisfaction, W_SATISFACTION)
        + term(record.resolution_success_rate, W_SUCCESS)
        + term(record.resolution_stability, W_STABILITY)
        + term(record.decision_consistency, W_CONSISTENCY);

    total.clamp(0.0, 100.0) as u32
}

/// `Improving` iff the record was updated strictly after it was created,
/// otherwise `Stable`. `Declining` is never derived from timestamps alone;
/// the variant only appears when the backend sends it pre-tagged.
pub fn derive_trend(
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
) -> Trend {
    match (created_at, updated_at) {
        (Some(created), Some(updated)) if updated > created => Trend::Improving,
        _ => Trend::Stable,
    }
}

/// Fills the derived fields (`performance_score`, `trend`) in place. The raw
/// metric fields are never touched.
pub fn enrich(record: &mut EvaluationRecord) {
    record.performance_score = Some(performance_score(record));
    if record.trend.is_none() {
        record.trend = Some(derive_trend(record.created_at, record.updated_at));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record() -> EvaluationRecord {
        EvaluationRecord {
            negotiation_id: "neg-1".to_string(),
            proposal_titles: None,
            time_to_consensus_secs: Some(3600.0),
            number_of_rounds: 4,
            utility_gain: Some(0.85),
            stakeholder_satisfaction: Some(4.2),
            resolution_success_rate: Some(90.0),
            resolution_stability: Some(85.0),
            decision_consistency: Some(88.0),
            performance_score: None,
            trend: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn reference_fixture_scores_87() {
        // utility 0.85*25 -> 21, satisfaction (4.2/5)*20 -> 17, success
        // 90*0.20 -> 18, stability 85*0.15 -> 13, consistency 88*0.20 -> 18.
        assert_eq!(performance_score(&record()), 87);
    }

    #[test]
    fn score_is_deterministic() {
        let r = record();
        assert_eq!(performance_score(&r), performance_score(&r));
    }

    #[test]
    fn absent_fields_contribute_zero() {
        let mut r = record();
        r.utility_gain = None;
        r.stakeholder_satisfaction = Some(f64::NAN);
        // 0 + 0 + 18 + 13 + 18
        assert_eq!(performance_score(&r), 49);
    }

    #[test]
    fn empty_record_scores_zero() {
        let mut r = record();
        r.utility_gain = None;
        r.stakeholder_satisfaction = None;
        r.resolution_success_rate = None;
        r.resolution_stability = None;
        r.decision_consistency = None;
        assert_eq!(performance_score(&r), 0);
    }

    #[test]
    fn perfect_inputs_score_100() {
        let mut r = record();
        r.utility_gain = Some(1.0);
        r.stakeholder_satisfaction = Some(5.0);
        r.resolution_success_rate = Some(100.0);
        r.resolution_stability = Some(100.0);
        r.decision_consistency = Some(100.0);
        assert_eq!(performance_score(&r), 100);
    }

    #[test]
    fn trend_requires_strictly_later_update() {
        let created = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap();

        assert_eq!(derive_trend(Some(created), Some(later)), Trend::Improving);
        assert_eq!(derive_trend(Some(created), Some(created)), Trend::Stable);
        assert_eq!(derive_trend(Some(later), Some(created)), Trend::Stable);
        assert_eq!(derive_trend(None, Some(later)), Trend::Stable);
        assert_eq!(derive_trend(Some(created), None), Trend::Stable);
    }

    #[test]
    fn enrich_fills_derived_fields_and_keeps_backend_trend() {
        let created = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap();

        let mut r = record();
        r.created_at = Some(created);
        r.updated_at = Some(later);
        enrich(&mut r);
        assert_eq!(r.performance_score, Some(87));
        assert_eq!(r.trend, Some(Trend::Improving));

        // A trend already tagged by the backend is preserved.
        let mut tagged = record();
        tagged.trend = Some(Trend::Declining);
        enrich(&mut tagged);
        assert_eq!(tagged.trend, Some(Trend::Declining));
    }
}
