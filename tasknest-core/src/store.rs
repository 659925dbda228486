//! Per-user persisted pattern store.
//!
//! Every mutation is a whole-table load -> mutate -> save. The public methods
//! never fail: storage problems are logged and the call degrades to an empty
//! table, a skipped write, or no suggestion. The `try_*` variants surface
//! the underlying `StoreError`.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::{debug, warn};

use crate::error::{Result, StoreError};
use crate::kv::KvStore;
use crate::patterns::{PatternStats, PatternTable};
use crate::time::TimeBucket;

pub const KEY_PREFIX: &str = "task_patterns";
pub const DEFAULT_NAMESPACE: &str = "default";

/// Storage key for a user's table.
pub fn user_key(user_id: Option<&str>) -> String {
    let ns = user_id
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .unwrap_or(DEFAULT_NAMESPACE);
    format!("{KEY_PREFIX}::{ns}")
}

pub struct PatternStore<S: KvStore> {
    kv: S,
    key: String,
    tz: Tz,
}

impl<S: KvStore> PatternStore<S> {
    pub fn new(kv: S, user_id: Option<&str>, tz: Tz) -> Self {
        Self {
            kv,
            key: user_key(user_id),
            tz,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    pub fn bucket_for(&self, when: DateTime<Utc>) -> TimeBucket {
        TimeBucket::from_utc(when, self.tz)
    }

    pub fn into_inner(self) -> S {
        self.kv
    }

    // --- fallible layer ---

    pub fn try_load(&self) -> Result<PatternTable> {
        let Some(raw) = self.kv.get(&self.key)? else {
            return Ok(PatternTable::new());
        };
        let loaded = PatternTable::from_json(&raw).map_err(|reason| StoreError::Parse {
            key: self.key.clone(),
            reason,
        })?;
        if loaded.repaired > 0 {
            warn!(key = %self.key, repaired = loaded.repaired, "repaired pattern table on load");
        }
        Ok(loaded.table)
    }

    pub fn try_save(&mut self, table: &PatternTable) -> Result<()> {
        if table.is_empty() {
            return self.kv.remove(&self.key);
        }
        self.kv.set(&self.key, &table.to_json())
    }

    /// A record that does not parse is replaced; read errors still abort.
    fn try_update<T>(&mut self, f: impl FnOnce(&mut PatternTable) -> T) -> Result<T> {
        let mut table = match self.try_load() {
            Ok(table) => table,
            Err(e @ StoreError::Parse { .. }) => {
                warn!(key = %self.key, error = %e, "replacing unparseable pattern table");
                PatternTable::new()
            }
            Err(e) => return Err(e),
        };
        let out = f(&mut table);
        self.try_save(&table)?;
        Ok(out)
    }

    pub fn try_record_accepted(&mut self, title: &str, when: DateTime<Utc>) -> Result<()> {
        let bucket = self.bucket_for(when);
        self.try_update(|t| t.record_accepted(bucket, title))
    }

    pub fn try_record_rejected(&mut self, title: &str, when: DateTime<Utc>) -> Result<bool> {
        let bucket = self.bucket_for(when);
        self.try_update(|t| t.record_rejected(bucket, title))
    }

    pub fn try_prune_deleted(&mut self, existing: &HashSet<String>) -> Result<usize> {
        self.try_update(|t| t.prune_deleted(existing))
    }

    pub fn try_remove_title_everywhere(&mut self, title: &str) -> Result<usize> {
        self.try_update(|t| t.remove_title(title))
    }

    pub fn try_clear_all(&mut self) -> Result<()> {
        self.kv.remove(&self.key)
    }

    // --- advisory layer ---

    /// Empty table when the record is missing or unreadable.
    pub fn load(&self) -> PatternTable {
        self.try_load().unwrap_or_else(|e| {
            warn!(key = %self.key, error = %e, "pattern table unavailable, using empty table");
            PatternTable::new()
        })
    }

    pub fn record_accepted(&mut self, title: &str, when: DateTime<Utc>) {
        match self.try_record_accepted(title, when) {
            Ok(()) => debug!(key = %self.key, bucket = %self.bucket_for(when), title, "pattern accepted"),
            Err(e) => warn!(key = %self.key, error = %e, "failed to record accepted pattern"),
        }
    }

    pub fn record_rejected(&mut self, title: &str, when: DateTime<Utc>) {
        match self.try_record_rejected(title, when) {
            Ok(changed) => {
                debug!(key = %self.key, bucket = %self.bucket_for(when), title, changed, "pattern rejected")
            }
            Err(e) => warn!(key = %self.key, error = %e, "failed to record rejected pattern"),
        }
    }

    pub fn suggest(&self, when: DateTime<Utc>, existing: &HashSet<String>) -> Option<String> {
        self.load().suggest(self.bucket_for(when), existing)
    }

    /// Up to `n` ranked candidates, same ordering as `suggest`.
    pub fn top_for(&self, when: DateTime<Utc>, existing: &HashSet<String>, n: usize) -> Vec<(String, u32)> {
        let mut ranked = self.load().ranked(self.bucket_for(when), existing);
        ranked.truncate(n);
        ranked
    }

    pub fn prune_deleted(&mut self, existing: &HashSet<String>) -> usize {
        self.try_prune_deleted(existing).unwrap_or_else(|e| {
            warn!(key = %self.key, error = %e, "failed to prune deleted titles");
            0
        })
    }

    pub fn remove_title_everywhere(&mut self, title: &str) -> usize {
        self.try_remove_title_everywhere(title).unwrap_or_else(|e| {
            warn!(key = %self.key, error = %e, "failed to remove title");
            0
        })
    }

    pub fn clear_all(&mut self) {
        if let Err(e) = self.try_clear_all() {
            warn!(key = %self.key, error = %e, "failed to clear pattern table");
        }
    }

    pub fn stats(&self) -> PatternStats {
        self.load().stats()
    }
}
