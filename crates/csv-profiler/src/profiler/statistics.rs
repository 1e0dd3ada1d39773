//! Statistical analysis functions for column profiling.

use crate::types::{NumericColumnProfile, TextColumnProfile, TopValue, ValueCounts};
use crate::utils::{percentage, present_value, try_parse_float};
use std::collections::HashMap;
use std::hash::Hash;

// ============================================================================
// Order-preserving tally
// ============================================================================

/// Frequency counter that remembers the order in which keys were first seen.
///
/// Ties in frequency are always resolved by first appearance, which keeps
/// `most_common` and `unique_mode` deterministic regardless of hashing.
#[derive(Debug, Clone)]
pub(crate) struct Tally<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K: Eq + Hash + Clone> Tally<K> {
    pub(crate) fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// Number of distinct keys.
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Up to `k` keys by descending count, ties in first-seen order.
    pub(crate) fn most_common(&self, k: usize) -> Vec<(&K, usize)> {
        let mut ranked: Vec<(&K, usize)> = self.entries.iter().map(|(key, n)| (key, *n)).collect();
        // sort_by is stable, so equal counts keep insertion order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(k);
        ranked
    }

    /// The key with the strictly highest count, or `None` on a tie (or when empty).
    pub(crate) fn unique_mode(&self) -> Option<&K> {
        let max = self.entries.iter().map(|(_, n)| *n).max()?;
        let mut leaders = self.entries.iter().filter(|(_, n)| *n == max);
        let (first, _) = leaders.next()?;
        match leaders.next() {
            Some(_) => None,
            None => Some(first),
        }
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for Tally<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for key in iter {
            tally.add(key);
        }
        tally
    }
}

/// Hashable identity of a float under exact equality (`0.0 == -0.0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct FloatKey(u64);

impl FloatKey {
    fn new(value: f64) -> Self {
        let normalized = if value == 0.0 { 0.0 } else { value };
        Self(normalized.to_bits())
    }

    fn value(self) -> f64 {
        f64::from_bits(self.0)
    }
}

// ============================================================================
// Numeric statistics
// ============================================================================

/// Compute statistics for a column already inferred as numeric.
///
/// Present values that somehow fail to parse are dropped from every
/// aggregate and counted as missing.
pub(crate) fn numeric_stats(values: &[Option<&str>]) -> NumericColumnProfile {
    let total = values.len();
    let parsed: Vec<f64> = values
        .iter()
        .filter_map(|v| present_value(*v))
        .filter_map(try_parse_float)
        .collect();

    let n = parsed.len();
    let tally: Tally<FloatKey> = parsed.iter().map(|&v| FloatKey::new(v)).collect();

    let counts = ValueCounts {
        count: n,
        missing: total - n,
        missing_pct: percentage(total - n, total),
        unique: tally.len(),
    };

    if n == 0 {
        return NumericColumnProfile {
            counts,
            ..Default::default()
        };
    }

    let mut sorted = parsed.clone();
    sorted.sort_by(f64::total_cmp);

    let mean = calculate_mean(&parsed);

    NumericColumnProfile {
        counts,
        min: sorted.first().copied(),
        max: sorted.last().copied(),
        mean: Some(mean),
        median: Some(calculate_median(&sorted)),
        mode: tally.unique_mode().map(|key| key.value()),
        std: Some(calculate_population_std(&parsed, mean)),
        q1: quartile_at(&sorted, n / 4),
        q3: quartile_at(&sorted, (3 * n) / 4),
    }
}

fn calculate_mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median of an ascending, non-empty slice.
fn calculate_median(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// Population standard deviation (divides by `n`, not `n - 1`).
fn calculate_population_std(values: &[f64], mean: f64) -> f64 {
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Index-truncated quartile; only defined for four or more values.
fn quartile_at(sorted: &[f64], idx: usize) -> Option<f64> {
    if sorted.len() < 4 {
        return None;
    }
    sorted.get(idx).copied()
}

// ============================================================================
// Text statistics
// ============================================================================

/// Compute statistics for a text column.
///
/// Values are compared as raw strings, so `"a"` and `"a "` are distinct.
pub(crate) fn text_stats(values: &[Option<&str>], top_k: usize) -> TextColumnProfile {
    let total = values.len();
    let tally: Tally<&str> = values.iter().filter_map(|v| present_value(*v)).collect();
    let count = tally.entries.iter().map(|(_, n)| n).sum::<usize>();

    let top = tally
        .most_common(top_k)
        .into_iter()
        .map(|(value, count)| TopValue {
            value: (*value).to_string(),
            count,
        })
        .collect();

    TextColumnProfile {
        counts: ValueCounts {
            count,
            missing: total - count,
            missing_pct: percentage(total - count, total),
            unique: tally.len(),
        },
        top,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column<'a>(values: &[&'a str]) -> Vec<Option<&'a str>> {
        values.iter().map(|v| Some(*v)).collect()
    }

    // ==================== Tally tests ====================

    #[test]
    fn test_tally_counts_and_order() {
        let tally: Tally<&str> = ["b", "a", "b", "c", "a", "b"].into_iter().collect();
        assert_eq!(tally.len(), 3);
        assert_eq!(
            tally.most_common(10),
            vec![(&"b", 3), (&"a", 2), (&"c", 1)]
        );
    }

    #[test]
    fn test_tally_ties_keep_first_seen_order() {
        let tally: Tally<&str> = ["z", "y", "x", "y", "z", "x"].into_iter().collect();
        assert_eq!(tally.most_common(3), vec![(&"z", 2), (&"y", 2), (&"x", 2)]);
    }

    #[test]
    fn test_tally_unique_mode() {
        let tally: Tally<i32> = [1, 1, 2].into_iter().collect();
        assert_eq!(tally.unique_mode(), Some(&1));

        let tied: Tally<i32> = [1, 1, 2, 2, 3].into_iter().collect();
        assert_eq!(tied.unique_mode(), None);

        let empty: Tally<i32> = Tally::new();
        assert_eq!(empty.unique_mode(), None);
    }

    // ==================== numeric_stats tests ====================

    #[test]
    fn test_numeric_median_even() {
        let stats = numeric_stats(&column(&["4", "1", "3", "2"]));
        assert_eq!(stats.median, Some(2.5));
    }

    #[test]
    fn test_numeric_median_odd() {
        let stats = numeric_stats(&column(&["3", "1", "2"]));
        assert_eq!(stats.median, Some(2.0));
    }

    #[test]
    fn test_numeric_mode_tie_is_none() {
        let stats = numeric_stats(&column(&["1", "1", "2", "2", "3"]));
        assert_eq!(stats.mode, None);
    }

    #[test]
    fn test_numeric_unique_mode() {
        let stats = numeric_stats(&column(&["1", "1", "2"]));
        assert_eq!(stats.mode, Some(1.0));
    }

    #[test]
    fn test_numeric_all_distinct_has_no_mode() {
        let stats = numeric_stats(&column(&["1", "2", "3"]));
        assert_eq!(stats.mode, None);
    }

    #[test]
    fn test_numeric_single_value_is_its_own_mode() {
        let stats = numeric_stats(&column(&["7"]));
        assert_eq!(stats.mode, Some(7.0));
        assert_eq!(stats.std, Some(0.0));
        assert_eq!(stats.q1, None);
    }

    #[test]
    fn test_numeric_population_std() {
        let stats = numeric_stats(&column(&["2", "4", "4", "4", "5", "5", "7", "9"]));
        assert_eq!(stats.mean, Some(5.0));
        assert_eq!(stats.std, Some(2.0));
    }

    #[test]
    fn test_numeric_min_max() {
        let stats = numeric_stats(&column(&["3.5", "-2", "10", "0"]));
        assert_eq!(stats.min, Some(-2.0));
        assert_eq!(stats.max, Some(10.0));
    }

    #[test]
    fn test_numeric_quartiles_four_values() {
        let stats = numeric_stats(&column(&["40", "10", "30", "20"]));
        // sorted [10, 20, 30, 40]: index 1 and index 3
        assert_eq!(stats.q1, Some(20.0));
        assert_eq!(stats.q3, Some(40.0));
    }

    #[test]
    fn test_numeric_quartiles_index_truncation() {
        let values: Vec<String> = (1..=10).map(|v| v.to_string()).collect();
        let refs: Vec<&str> = values.iter().map(String::as_str).collect();
        let stats = numeric_stats(&column(&refs));
        // n = 10: q1 at index 2, q3 at index 7
        assert_eq!(stats.q1, Some(3.0));
        assert_eq!(stats.q3, Some(8.0));
    }

    #[test]
    fn test_numeric_quartiles_undefined_below_four() {
        let stats = numeric_stats(&column(&["1", "2", "3"]));
        assert_eq!(stats.q1, None);
        assert_eq!(stats.q3, None);
        assert!(stats.mean.is_some());
    }

    #[test]
    fn test_numeric_all_missing() {
        let stats = numeric_stats(&[None, Some(""), Some("NA")]);
        assert_eq!(stats.counts.count, 0);
        assert_eq!(stats.counts.missing, 3);
        assert_eq!(stats.counts.missing_pct, 100.0);
        assert_eq!(stats.counts.unique, 0);
        assert_eq!(stats.min, None);
        assert_eq!(stats.max, None);
        assert_eq!(stats.mean, None);
        assert_eq!(stats.median, None);
        assert_eq!(stats.mode, None);
        assert_eq!(stats.std, None);
        assert_eq!(stats.q1, None);
        assert_eq!(stats.q3, None);
    }

    #[test]
    fn test_numeric_empty_column() {
        let stats = numeric_stats(&[]);
        assert_eq!(stats.counts.missing_pct, 0.0);
        assert_eq!(stats.mean, None);
    }

    #[test]
    fn test_numeric_counts_and_missing_pct() {
        let stats = numeric_stats(&[Some("1"), None, Some(" "), Some("2"), Some("2"), Some("n/a")]);
        assert_eq!(stats.counts.count, 3);
        assert_eq!(stats.counts.missing, 3);
        assert_eq!(stats.counts.missing_pct, 50.0);
        assert_eq!(stats.counts.unique, 2);
    }

    #[test]
    fn test_numeric_unique_compares_parsed_values() {
        let stats = numeric_stats(&column(&["1.0", "1.00", "1", "2"]));
        assert_eq!(stats.counts.unique, 2);
        assert_eq!(stats.mode, Some(1.0));
    }

    #[test]
    fn test_numeric_signed_zero_is_one_value() {
        let stats = numeric_stats(&column(&["0", "-0", "0.0"]));
        assert_eq!(stats.counts.unique, 1);
    }

    #[test]
    fn test_numeric_unparseable_values_are_dropped() {
        let stats = numeric_stats(&column(&["1", "oops", "3"]));
        assert_eq!(stats.counts.count, 2);
        assert_eq!(stats.counts.missing, 1);
        assert_eq!(stats.mean, Some(2.0));
    }

    // ==================== text_stats tests ====================

    #[test]
    fn test_text_top_values() {
        let stats = text_stats(&column(&["a", "b", "a", "c", "a", "b"]), 5);
        assert_eq!(
            stats.top,
            vec![
                TopValue { value: "a".to_string(), count: 3 },
                TopValue { value: "b".to_string(), count: 2 },
                TopValue { value: "c".to_string(), count: 1 },
            ]
        );
        assert_eq!(stats.counts.unique, 3);
        assert_eq!(stats.counts.count, 6);
    }

    #[test]
    fn test_text_top_is_limited() {
        let stats = text_stats(&column(&["a", "b", "c", "d", "e", "f", "g"]), 5);
        assert_eq!(stats.top.len(), 5);
        let values: Vec<_> = stats.top.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(values, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_text_top_ties_by_first_appearance() {
        let stats = text_stats(&column(&["x", "y", "y", "x", "z"]), 2);
        let values: Vec<_> = stats.top.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(values, vec!["x", "y"]);
    }

    #[test]
    fn test_text_missing_values_excluded() {
        let stats = text_stats(&[Some("a"), None, Some("NULL"), Some("b"), Some("")], 5);
        assert_eq!(stats.counts.count, 2);
        assert_eq!(stats.counts.missing, 3);
        assert_eq!(stats.counts.missing_pct, 60.0);
        assert_eq!(stats.counts.unique, 2);
    }

    #[test]
    fn test_text_compares_raw_strings() {
        let stats = text_stats(&column(&["a", "a ", "A"]), 5);
        assert_eq!(stats.counts.unique, 3);
    }

    #[test]
    fn test_text_all_missing_has_empty_top() {
        let stats = text_stats(&[None, Some("none")], 5);
        assert!(stats.top.is_empty());
        assert_eq!(stats.counts.unique, 0);
        assert_eq!(stats.counts.missing_pct, 100.0);
    }
}
