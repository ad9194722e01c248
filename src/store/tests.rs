//! Store Module Tests
//!
//! Validates the key-value client primitives the catalog is built on.
//!
//! ## Test Scopes
//! - **Field maps**: upsert/fetch semantics, merge behavior, absence.
//! - **Counters**: monotonicity and atomicity under concurrent callers.
//! - **Enumeration**: prefix filtering.

#[cfg(test)]
mod tests {
    use crate::store::kv::KvStore;
    use std::collections::HashMap;
    use std::sync::Arc;

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    // ============================================================
    // FIELD MAP TESTS
    // ============================================================

    #[test]
    fn test_set_and_get_fields_roundtrip() {
        let store = KvStore::new();

        store
            .set_fields("product:1", fields(&[("name", "pen"), ("price", "1.5")]))
            .unwrap();

        let stored = store.get_fields("product:1").unwrap();
        assert_eq!(stored.get("name").map(String::as_str), Some("pen"));
        assert_eq!(stored.get("price").map(String::as_str), Some("1.5"));
    }

    #[test]
    fn test_get_fields_of_absent_key_is_empty() {
        let store = KvStore::new();

        let stored = store.get_fields("product:404").unwrap();
        assert!(stored.is_empty());
    }

    #[test]
    fn test_set_fields_merges_into_existing_record() {
        let store = KvStore::new();

        store
            .set_fields("product:1", fields(&[("name", "pen"), ("price", "1.5")]))
            .unwrap();
        store
            .set_fields("product:1", fields(&[("price", "2.0")]))
            .unwrap();

        let stored = store.get_fields("product:1").unwrap();
        // Supplied field updated, untouched field preserved
        assert_eq!(stored.get("price").map(String::as_str), Some("2.0"));
        assert_eq!(stored.get("name").map(String::as_str), Some("pen"));
    }

    #[test]
    fn test_exists_tracks_key_lifecycle() {
        let store = KvStore::new();

        assert!(!store.exists("product:1").unwrap());

        store
            .set_fields("product:1", fields(&[("name", "pen")]))
            .unwrap();
        assert!(store.exists("product:1").unwrap());

        store.delete("product:1").unwrap();
        assert!(!store.exists("product:1").unwrap());
        assert!(store.get_fields("product:1").unwrap().is_empty());
    }

    #[test]
    fn test_delete_of_absent_key_is_not_an_error() {
        let store = KvStore::new();

        store.delete("product:404").unwrap();
    }

    // ============================================================
    // PREFIX ENUMERATION TESTS
    // ============================================================

    #[test]
    fn test_keys_with_prefix_filters() {
        let store = KvStore::new();

        store
            .set_fields("product:1", fields(&[("name", "pen")]))
            .unwrap();
        store
            .set_fields("product:2", fields(&[("name", "ink")]))
            .unwrap();
        store
            .set_fields("order:1", fields(&[("total", "3.0")]))
            .unwrap();

        let mut keys = store.keys_with_prefix("product:").unwrap();
        keys.sort();
        assert_eq!(keys, vec!["product:1", "product:2"]);
    }

    #[test]
    fn test_keys_with_prefix_on_empty_store() {
        let store = KvStore::new();

        assert!(store.keys_with_prefix("product:").unwrap().is_empty());
    }

    // ============================================================
    // COUNTER TESTS
    // ============================================================

    #[test]
    fn test_incr_starts_at_one_and_is_monotonic() {
        let store = KvStore::new();

        assert_eq!(store.incr("product_counter").unwrap(), 1);
        assert_eq!(store.incr("product_counter").unwrap(), 2);
        assert_eq!(store.incr("product_counter").unwrap(), 3);
    }

    #[test]
    fn test_incr_counters_are_independent() {
        let store = KvStore::new();

        assert_eq!(store.incr("product_counter").unwrap(), 1);
        assert_eq!(store.incr("order_counter").unwrap(), 1);
        assert_eq!(store.incr("product_counter").unwrap(), 2);
    }

    #[test]
    fn test_incr_is_atomic_across_threads() {
        let store = Arc::new(KvStore::new());
        let mut handles = Vec::new();

        for _ in 0..8 {
            let store = store.clone();
            handles.push(std::thread::spawn(move || {
                let mut seen = Vec::new();
                for _ in 0..100 {
                    seen.push(store.incr("product_counter").unwrap());
                }
                seen
            }));
        }

        let mut all: Vec<i64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        all.sort();

        // 800 increments must yield exactly the values 1..=800, no
        // duplicates and no gaps.
        assert_eq!(all, (1..=800).collect::<Vec<i64>>());
    }
}
