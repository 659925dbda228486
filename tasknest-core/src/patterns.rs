//! Frequency table of accepted task titles per weekly time bucket.
//!
//! Weights are strictly positive: a title that drops to zero is removed and a
//! bucket left without titles is removed with it.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::time::TimeBucket;

pub type TitleWeights = BTreeMap<String, u32>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PatternTable {
    buckets: BTreeMap<TimeBucket, TitleWeights>,
}

/// Diagnostic aggregate over a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PatternStats {
    pub total_weight: u64,
    pub unique_titles: usize,
    pub buckets: usize,
}

/// Outcome of loading a persisted table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Loaded {
    pub table: PatternTable,
    /// Entries dropped because they were malformed.
    pub repaired: usize,
}

impl PatternTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn bucket(&self, bucket: TimeBucket) -> Option<&TitleWeights> {
        self.buckets.get(&bucket)
    }

    pub fn weight(&self, bucket: TimeBucket, title: &str) -> u32 {
        self.buckets
            .get(&bucket)
            .and_then(|b| b.get(title))
            .copied()
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TimeBucket, &TitleWeights)> {
        self.buckets.iter()
    }

    pub fn record_accepted(&mut self, bucket: TimeBucket, title: &str) {
        let w = self
            .buckets
            .entry(bucket)
            .or_default()
            .entry(title.to_string())
            .or_insert(0);
        *w = w.saturating_add(1);
    }

    /// Returns `true` if an entry was decremented.
    pub fn record_rejected(&mut self, bucket: TimeBucket, title: &str) -> bool {
        let Some(titles) = self.buckets.get_mut(&bucket) else {
            return false;
        };
        let Some(w) = titles.get_mut(title) else {
            return false;
        };

        *w = w.saturating_sub(1);
        if *w == 0 {
            titles.remove(title);
        }
        if titles.is_empty() {
            self.buckets.remove(&bucket);
        }
        true
    }

    /// Candidates for `bucket` that still exist, best first.
    ///
    /// Ordering: weight descending, then title ascending.
    pub fn ranked(&self, bucket: TimeBucket, existing: &HashSet<String>) -> Vec<(String, u32)> {
        let Some(titles) = self.buckets.get(&bucket) else {
            return Vec::new();
        };

        let mut out: Vec<(String, u32)> = titles
            .iter()
            .filter(|(title, _)| existing.contains(title.as_str()))
            .map(|(title, w)| (title.clone(), *w))
            .collect();

        out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        out
    }

    pub fn suggest(&self, bucket: TimeBucket, existing: &HashSet<String>) -> Option<String> {
        self.ranked(bucket, existing)
            .into_iter()
            .next()
            .map(|(title, _)| title)
    }

    /// Drop every title that is not in `existing`. Returns entries removed.
    pub fn prune_deleted(&mut self, existing: &HashSet<String>) -> usize {
        self.retain_titles(|title| existing.contains(title))
    }

    /// Drop `title` from every bucket. Returns entries removed.
    pub fn remove_title(&mut self, title: &str) -> usize {
        self.retain_titles(|t| t != title)
    }

    fn retain_titles(&mut self, mut keep: impl FnMut(&str) -> bool) -> usize {
        let mut removed = 0usize;
        for titles in self.buckets.values_mut() {
            let before = titles.len();
            titles.retain(|title, _| keep(title));
            removed += before - titles.len();
        }
        self.buckets.retain(|_, titles| !titles.is_empty());
        removed
    }

    pub fn stats(&self) -> PatternStats {
        let mut unique: HashSet<&str> = HashSet::new();
        let mut total_weight = 0u64;
        for titles in self.buckets.values() {
            for (title, w) in titles {
                unique.insert(title);
                total_weight += u64::from(*w);
            }
        }
        PatternStats {
            total_weight,
            unique_titles: unique.len(),
            buckets: self.buckets.len(),
        }
    }

    pub fn to_json(&self) -> String {
        // Keys are strings and values integers; serialization cannot fail.
        serde_json::to_string(&self.buckets).unwrap_or_else(|_| "{}".to_string())
    }

    /// Parse a persisted table, keeping only well-formed entries.
    ///
    /// Errors only when the document is not a JSON object.
    pub fn from_json(s: &str) -> Result<Loaded, String> {
        let root: Value = serde_json::from_str(s).map_err(|e| e.to_string())?;
        let Value::Object(root) = root else {
            return Err("pattern table is not a JSON object".to_string());
        };

        let mut table = PatternTable::new();
        let mut repaired = 0usize;

        for (key, titles) in root {
            let bucket: TimeBucket = match key.parse() {
                Ok(b) => b,
                Err(e) => {
                    warn!(key = %key, error = %e, "dropping malformed bucket");
                    repaired += 1;
                    continue;
                }
            };
            // "01_09" would otherwise collide with "1_9"
            if bucket.to_string() != key {
                warn!(key = %key, bucket = %bucket, "dropping non-canonical bucket");
                repaired += 1;
                continue;
            }
            let Value::Object(titles) = titles else {
                warn!(bucket = %bucket, "dropping bucket that is not an object");
                repaired += 1;
                continue;
            };

            for (title, weight) in titles {
                match weight.as_u64().filter(|w| *w > 0) {
                    Some(w) => {
                        let w = u32::try_from(w).unwrap_or(u32::MAX);
                        table.buckets.entry(bucket).or_default().insert(title, w);
                    }
                    None => {
                        warn!(bucket = %bucket, title = %title, weight = %weight, "dropping invalid weight");
                        repaired += 1;
                    }
                }
            }
        }

        Ok(Loaded { table, repaired })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(w: u8, h: u8) -> TimeBucket {
        TimeBucket::new(w, h).unwrap()
    }

    fn titles(list: &[&str]) -> HashSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_reject_removes_zero_weight_and_empty_bucket() {
        let mut t = PatternTable::new();
        t.record_accepted(b(1, 9), "Buy milk");
        assert_eq!(t.weight(b(1, 9), "Buy milk"), 1);

        assert!(t.record_rejected(b(1, 9), "Buy milk"));
        assert!(t.is_empty());
    }

    #[test]
    fn test_reject_unknown_is_noop() {
        let mut t = PatternTable::new();
        assert!(!t.record_rejected(b(1, 9), "Buy milk"));
        t.record_accepted(b(1, 9), "Call mom");
        assert!(!t.record_rejected(b(1, 9), "Buy milk"));
        assert_eq!(t.weight(b(1, 9), "Call mom"), 1);
    }

    #[test]
    fn test_suggest_prefers_weight_then_title() {
        let mut t = PatternTable::new();
        t.record_accepted(b(1, 9), "Zumba");
        t.record_accepted(b(1, 9), "Abs");
        assert_eq!(t.suggest(b(1, 9), &titles(&["Zumba", "Abs"])).as_deref(), Some("Abs"));

        t.record_accepted(b(1, 9), "Zumba");
        assert_eq!(t.suggest(b(1, 9), &titles(&["Zumba", "Abs"])).as_deref(), Some("Zumba"));
    }

    #[test]
    fn test_suggest_skips_deleted_titles() {
        let mut t = PatternTable::new();
        t.record_accepted(b(1, 9), "Gone");
        t.record_accepted(b(1, 9), "Gone");
        t.record_accepted(b(1, 9), "Kept");
        assert_eq!(t.suggest(b(1, 9), &titles(&["Kept"])).as_deref(), Some("Kept"));
        assert_eq!(t.suggest(b(1, 9), &titles(&[])), None);
        assert_eq!(t.suggest(b(2, 9), &titles(&["Kept"])), None);
    }

    #[test]
    fn test_prune_and_remove_title() {
        let mut t = PatternTable::new();
        t.record_accepted(b(1, 9), "A");
        t.record_accepted(b(1, 9), "B");
        t.record_accepted(b(3, 18), "B");

        assert_eq!(t.prune_deleted(&titles(&["A"])), 2);
        assert_eq!(t.stats(), PatternStats { total_weight: 1, unique_titles: 1, buckets: 1 });

        assert_eq!(t.remove_title("A"), 1);
        assert!(t.is_empty());
    }

    #[test]
    fn test_stats_counts_unique_titles_across_buckets() {
        let mut t = PatternTable::new();
        t.record_accepted(b(1, 9), "A");
        t.record_accepted(b(1, 9), "A");
        t.record_accepted(b(2, 9), "A");
        t.record_accepted(b(2, 9), "B");
        assert_eq!(t.stats(), PatternStats { total_weight: 4, unique_titles: 2, buckets: 2 });
    }

    #[test]
    fn test_json_shape() {
        let mut t = PatternTable::new();
        t.record_accepted(b(1, 9), "Buy milk");
        assert_eq!(t.to_json(), r#"{"1_9":{"Buy milk":1}}"#);

        let loaded = PatternTable::from_json(&t.to_json()).unwrap();
        assert_eq!(loaded.table, t);
        assert_eq!(loaded.repaired, 0);
    }

    #[test]
    fn test_from_json_repairs_malformed_entries() {
        let raw = r#"{
            "1_9": {"Buy milk": 3, "Bad": -1, "Zero": 0, "Text": "x", "Float": 1.5},
            "9_9": {"Nope": 1},
            "2_10": "not an object"
        }"#;
        let loaded = PatternTable::from_json(raw).unwrap();
        assert_eq!(loaded.repaired, 6);
        assert_eq!(loaded.table.weight(b(1, 9), "Buy milk"), 3);
        assert_eq!(loaded.table.stats().buckets, 1);
    }

    #[test]
    fn test_from_json_drops_non_canonical_bucket_keys() {
        let raw = r#"{"1_9": {"Gym": 2}, "01_09": {"Gym": 5}, "+1_9": {"Run": 1}}"#;
        let loaded = PatternTable::from_json(raw).unwrap();
        assert_eq!(loaded.repaired, 2);
        assert_eq!(loaded.table.weight(b(1, 9), "Gym"), 2);
        assert_eq!(loaded.table.weight(b(1, 9), "Run"), 0);
        assert_eq!(loaded.table.to_json(), r#"{"1_9":{"Gym":2}}"#);
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(PatternTable::from_json("[1,2]").is_err());
        assert!(PatternTable::from_json("{oops").is_err());
    }
}
