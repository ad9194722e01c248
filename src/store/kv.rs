use anyhow::Result;
use dashmap::DashMap;
use std::collections::HashMap;

/// Client handle for the hash-style key-value store.
///
/// Each key maps to a field map (named string fields); counters live in a
/// separate namespace and are incremented atomically. The handle is shared
/// behind an `Arc` and all operations take `&self`, so concurrent requests
/// hit the same state with no further coordination.
pub struct KvStore {
    records: DashMap<String, HashMap<String, String>>,
    counters: DashMap<String, i64>,
}

impl KvStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            counters: DashMap::new(),
        }
    }

    /// Upserts all supplied fields on the record under `key`.
    ///
    /// Fields already present but not supplied are left untouched; the key
    /// is created if it does not exist yet.
    pub fn set_fields(&self, key: &str, fields: HashMap<String, String>) -> Result<()> {
        self.records.entry(key.to_string()).or_default().extend(fields);
        Ok(())
    }

    /// Returns the field map stored under `key`, empty if the key is absent.
    pub fn get_fields(&self, key: &str) -> Result<HashMap<String, String>> {
        Ok(self
            .records
            .get(key)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    pub fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.records.contains_key(key))
    }

    /// Removes `key` and its fields. Removing an absent key is not an error.
    pub fn delete(&self, key: &str) -> Result<()> {
        self.records.remove(key);
        Ok(())
    }

    /// Returns all record keys beginning with `prefix`. Order is unspecified.
    pub fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(self
            .records
            .iter()
            .map(|entry| entry.key().clone())
            .filter(|key| key.starts_with(prefix))
            .collect())
    }

    /// Atomically increments the named counter and returns the new value.
    ///
    /// The first increment of a counter returns 1. Concurrent callers each
    /// observe a distinct value; the entry lock serializes the update.
    pub fn incr(&self, counter: &str) -> Result<i64> {
        let mut entry = self.counters.entry(counter.to_string()).or_insert(0);
        *entry += 1;
        Ok(*entry)
    }
}

impl Default for KvStore {
    fn default() -> Self {
        Self::new()
    }
}
