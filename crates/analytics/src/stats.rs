//! Primitive aggregation functions shared by every KPI calculation.
//!
//! All of these are total: upstream records routinely arrive with missing or
//! malformed numeric fields, and the dashboard must degrade rather than throw.

use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;

/// A distinct key and how many records carried it. Produced by
/// [`group_count_by`] in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyCount<K> {
    pub key: K,
    pub count: usize,
}

/// Arithmetic mean of the numeric entries, ignoring `None` and non-finite
/// values. Returns `None` iff no numeric entry remains.
pub fn average(values: impl IntoIterator<Item = Option<f64>>) -> Option<f64> {
    let mut sum = 0.0;
    let mut n = 0usize;
    for v in values {
        if let Some(x) = v {
            if x.is_finite() {
                sum += x;
                n += 1;
            }
        }
    }
    if n == 0 { None } else { Some(sum / n as f64) }
}

/// Clamps a percentage to `[0, 100]`; absent or non-finite values become 0.
pub fn percentage_clamp(v: Option<f64>) -> f64 {
    match v {
        Some(x) if x.is_finite() => x.clamp(0.0, 100.0),
        _ => 0.0,
    }
}

/// Counts records per distinct key, preserving the order in which each key
/// was first seen. The counts always sum to the input length.
pub fn group_count_by<T, K, F>(records: &[T], key_fn: F) -> Vec<KeyCount<K>>
where
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    let mut order: Vec<KeyCount<K>> = Vec::new();
    let mut index: HashMap<K, usize> = HashMap::new();

    for record in records {
        let key = key_fn(record);
        match index.get(&key) {
            Some(&i) => order[i].count += 1,
            None => {
                index.insert(key.clone(), order.len());
                order.push(KeyCount { key, count: 1 });
            }
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_ignores_missing_entries() {
        assert_eq!(average([Some(10.0), None, Some(20.0)]), Some(15.0));
    }

    #[test]
    fn average_is_none_when_nothing_numeric_remains() {
        assert_eq!(average([None, None]), None);
        assert_eq!(average(Vec::<Option<f64>>::new()), None);
        assert_eq!(average([Some(f64::NAN), Some(f64::INFINITY), None]), None);
    }

    #[test]
    fn average_of_single_value_is_that_value() {
        assert_eq!(average([Some(42.5)]), Some(42.5));
    }

    #[test]
    fn percentage_clamp_bounds() {
        assert_eq!(percentage_clamp(Some(-3.0)), 0.0);
        assert_eq!(percentage_clamp(Some(101.5)), 100.0);
        assert_eq!(percentage_clamp(Some(55.0)), 55.0);
        assert_eq!(percentage_clamp(None), 0.0);
        assert_eq!(percentage_clamp(Some(f64::NAN)), 0.0);
    }

    #[test]
    fn group_count_by_preserves_first_seen_order() {
        let statuses = ["pending", "accepted", "pending", "rejected", "pending"];
        let counts = group_count_by(&statuses, |s| s.to_string());

        assert_eq!(
            counts,
            vec![
                KeyCount { key: "pending".to_string(), count: 3 },
                KeyCount { key: "accepted".to_string(), count: 1 },
                KeyCount { key: "rejected".to_string(), count: 1 },
            ]
        );
        let total: usize = counts.iter().map(|k| k.count).sum();
        assert_eq!(total, statuses.len());
    }

    #[test]
    fn group_count_by_empty_input_yields_empty_list() {
        let counts = group_count_by(&[] as &[&str], |s| s.to_string());
        assert!(counts.is_empty());
    }
}
