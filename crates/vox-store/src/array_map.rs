//! The `ArrayMap` container and its key contract.

use std::borrow::Borrow;
use std::fmt;

use vox_types::error::{Result, VoxError};

/// Key contract for [`ArrayMap`].
///
/// A key type may designate a reserved "absent" form that the map refuses
/// to store. For strings this is the empty string: the board file grammar
/// cannot represent an empty key token, so nothing can ever legitimately
/// map from it.
pub trait StoreKey: PartialEq + Clone + fmt::Display {
    /// Whether this key is the reserved absent form.
    fn is_absent(&self) -> bool {
        false
    }
}

impl StoreKey for String {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

/// A single key/value slot. The key is fixed at insertion; the value is
/// overwritten in place when the key is set again.
#[derive(Debug, Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// An unordered key/value mapping backed by a flat growable array.
///
/// Lookups are linear scans; inserts append; removal swaps the last live
/// entry into the vacated slot. Keys are unique. No ordering is guaranteed
/// across entries -- a removal reorders whatever followed it, so callers
/// must not depend on scan order.
#[derive(Debug, Clone)]
pub struct ArrayMap<K, V> {
    entries: Vec<Entry<K, V>>,
}

impl<K: StoreKey, V> ArrayMap<K, V> {
    /// Initial slot capacity of a new map.
    pub const DEFAULT_CAPACITY: usize = 16;

    /// Create a new, empty map.
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(Self::DEFAULT_CAPACITY),
        }
    }

    /// Index of the first entry matching `key`, if any. Keys are unique,
    /// so the first match is the only match.
    fn find<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.entries.iter().position(|e| e.key.borrow() == key)
    }

    /// Set the value associated with `key`. Future calls to `get(key)`
    /// return `value`.
    ///
    /// An existing entry is overwritten in place; a new key appends an
    /// entry, doubling the backing capacity first when the array is full.
    /// Rejects the absent key form with `InvalidKey`.
    pub fn set(&mut self, key: K, value: V) -> Result<()> {
        if key.is_absent() {
            return Err(VoxError::InvalidKey);
        }
        match self.find(&key) {
            Some(idx) => self.entries[idx].value = value,
            None => {
                if self.entries.len() == self.entries.capacity() {
                    self.entries.reserve(self.entries.capacity().max(1));
                }
                self.entries.push(Entry { key, value });
            },
        }
        Ok(())
    }

    /// Get the value associated with `key`, or `KeyNotFound`.
    pub fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: PartialEq + fmt::Display + ?Sized,
    {
        match self.find(key) {
            Some(idx) => Ok(&self.entries[idx].value),
            None => Err(VoxError::KeyNotFound(key.to_string())),
        }
    }

    /// Mutable access to the value associated with `key`, or `KeyNotFound`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: PartialEq + fmt::Display + ?Sized,
    {
        match self.find(key) {
            Some(idx) => Ok(&mut self.entries[idx].value),
            None => Err(VoxError::KeyNotFound(key.to_string())),
        }
    }

    /// Whether `key` is present. The absent key form is never present.
    pub fn has_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Remove the entry for `key`. Removing an absent key does nothing.
    ///
    /// The last live entry is swapped into the vacated slot, so removal is
    /// O(1) after the scan and destroys insertion order.
    pub fn remove<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        if let Some(idx) = self.find(key) {
            self.entries.swap_remove(idx);
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of all live keys in current physical order.
    pub fn keys(&self) -> Vec<K> {
        self.entries.iter().map(|e| e.key.clone()).collect()
    }

    /// Borrowed traversal of all live pairs in current physical order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|e| (&e.key, &e.value))
    }
}

impl<K: StoreKey, V> Default for ArrayMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_of(pairs: &[(&str, &str)]) -> ArrayMap<String, String> {
        let mut map = ArrayMap::new();
        for (k, v) in pairs {
            map.set(k.to_string(), v.to_string()).unwrap();
        }
        map
    }

    #[test]
    fn new_is_empty() {
        let map: ArrayMap<String, String> = ArrayMap::new();
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
    }

    #[test]
    fn set_then_get() {
        let map = map_of(&[("a", "1")]);
        assert_eq!(map.get("a").unwrap(), "1");
    }

    #[test]
    fn get_missing_is_key_not_found() {
        let map = map_of(&[("a", "1")]);
        let err = map.get("b").unwrap_err();
        assert!(matches!(err, VoxError::KeyNotFound(k) if k == "b"));
    }

    #[test]
    fn set_empty_key_rejected() {
        let mut map: ArrayMap<String, String> = ArrayMap::new();
        let err = map.set(String::new(), "x".into()).unwrap_err();
        assert!(matches!(err, VoxError::InvalidKey));
        assert!(map.is_empty());
    }

    #[test]
    fn duplicate_set_updates_in_place() {
        let mut map = map_of(&[("a", "1"), ("b", "2")]);
        map.set("a".to_string(), "3".to_string()).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a").unwrap(), "3");
        assert_eq!(map.get("b").unwrap(), "2");
    }

    #[test]
    fn has_key() {
        let map = map_of(&[("a", "1")]);
        assert!(map.has_key("a"));
        assert!(!map.has_key("b"));
        assert!(!map.has_key(""));
    }

    #[test]
    fn remove_present_key() {
        let mut map = map_of(&[("a", "1"), ("b", "2"), ("c", "3")]);
        map.remove("b");
        assert_eq!(map.len(), 2);
        assert!(!map.has_key("b"));
        assert_eq!(map.get("a").unwrap(), "1");
        assert_eq!(map.get("c").unwrap(), "3");
    }

    #[test]
    fn remove_last_slot() {
        let mut map = map_of(&[("a", "1"), ("b", "2")]);
        map.remove("b");
        assert_eq!(map.len(), 1);
        assert!(map.has_key("a"));
    }

    #[test]
    fn remove_absent_key_is_noop() {
        let mut map = map_of(&[("a", "1")]);
        map.remove("ghost");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("a").unwrap(), "1");
    }

    #[test]
    fn remove_then_set_again() {
        let mut map = map_of(&[("a", "1")]);
        map.remove("a");
        map.set("a".to_string(), "2".to_string()).unwrap();
        assert_eq!(map.get("a").unwrap(), "2");
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn growth_preserves_all_pairs() {
        let n = ArrayMap::<String, String>::DEFAULT_CAPACITY + 1;
        let mut map = ArrayMap::new();
        for i in 0..n {
            map.set(format!("key_{i}"), format!("val_{i}")).unwrap();
        }
        assert_eq!(map.len(), n);
        for i in 0..n {
            assert_eq!(map.get(&format!("key_{i}")).unwrap(), &format!("val_{i}"));
        }
    }

    #[test]
    fn growth_doubles_capacity() {
        let mut map: ArrayMap<String, String> = ArrayMap::new();
        let initial = ArrayMap::<String, String>::DEFAULT_CAPACITY;
        for i in 0..=initial {
            map.set(format!("k{i}"), "v".to_string()).unwrap();
        }
        assert!(map.entries.capacity() >= initial * 2);
    }

    #[test]
    fn keys_snapshot() {
        let map = map_of(&[("a", "1"), ("b", "2")]);
        let mut keys = map.keys();
        keys.sort();
        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn keys_empty() {
        let map: ArrayMap<String, String> = ArrayMap::new();
        assert!(map.keys().is_empty());
    }

    #[test]
    fn iter_yields_all_pairs() {
        let map = map_of(&[("a", "1"), ("b", "2")]);
        let mut pairs: Vec<(String, String)> =
            map.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string())
            ]
        );
    }

    #[test]
    fn clone_is_independent() {
        let mut map = map_of(&[("a", "1"), ("b", "2")]);
        let copy = map.clone();
        map.set("a".to_string(), "changed".to_string()).unwrap();
        map.remove("b");
        assert_eq!(copy.get("a").unwrap(), "1");
        assert_eq!(copy.get("b").unwrap(), "2");
        assert_eq!(copy.len(), 2);
    }

    #[test]
    fn get_mut_updates_value() {
        let mut map = map_of(&[("a", "1")]);
        *map.get_mut("a").unwrap() = "9".to_string();
        assert_eq!(map.get("a").unwrap(), "9");
    }

    #[test]
    fn get_mut_missing_is_key_not_found() {
        let mut map = map_of(&[("a", "1")]);
        assert!(matches!(
            map.get_mut("nope").unwrap_err(),
            VoxError::KeyNotFound(_)
        ));
    }

    #[test]
    fn many_entries() {
        let mut map = ArrayMap::new();
        for i in 0..200 {
            map.set(format!("k{i}"), format!("v{i}")).unwrap();
        }
        assert_eq!(map.len(), 200);
        assert_eq!(map.get("k137").unwrap(), "v137");
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;
        use std::collections::HashMap;

        #[derive(Debug, Clone)]
        enum Op {
            Set(String, String),
            Remove(String),
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            // A small key alphabet so sets and removes actually collide.
            let key = "[a-d]{1,2}";
            prop_oneof![
                (key, "[a-z]{0,4}").prop_map(|(k, v)| Op::Set(k, v)),
                key.prop_map(Op::Remove),
            ]
        }

        proptest! {
            #[test]
            fn behaves_like_hash_map(ops in proptest::collection::vec(op_strategy(), 0..64)) {
                let mut map: ArrayMap<String, String> = ArrayMap::new();
                let mut model: HashMap<String, String> = HashMap::new();
                for op in ops {
                    match op {
                        Op::Set(k, v) => {
                            map.set(k.clone(), v.clone()).unwrap();
                            model.insert(k, v);
                        }
                        Op::Remove(k) => {
                            map.remove(k.as_str());
                            model.remove(&k);
                        }
                    }
                }
                prop_assert_eq!(map.len(), model.len());
                for (k, v) in &model {
                    prop_assert_eq!(map.get(k.as_str()).unwrap(), v);
                }
                for k in map.keys() {
                    prop_assert!(model.contains_key(&k));
                }
            }

            #[test]
            fn set_then_get_roundtrips(k in "[a-z]{1,8}", v in "[ -~]{0,16}") {
                let mut map = ArrayMap::new();
                map.set(k.clone(), v.clone()).unwrap();
                prop_assert_eq!(map.get(k.as_str()).unwrap(), &v);
            }

            #[test]
            fn remove_then_absent(k in "[a-z]{1,8}") {
                let mut map = ArrayMap::new();
                map.set(k.clone(), "x".to_string()).unwrap();
                map.remove(k.as_str());
                prop_assert!(!map.has_key(k.as_str()));
                prop_assert!(map.is_empty());
            }
        }
    }
}
