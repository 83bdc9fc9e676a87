//! ChainHashMap: string-keyed map front end over `ChainTable`.

use crate::chain_table::ChainTable;
use crate::error::Result;
use core::fmt;

#[derive(Clone)]
pub struct ChainHashMap<V> {
    table: ChainTable<V>,
}

impl<V> ChainHashMap<V> {
    pub fn new() -> Self {
        Self {
            table: ChainTable::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: ChainTable::with_capacity(capacity),
        }
    }

    /// Bucket `key` maps to under the current capacity.
    pub fn hash(&self, key: &str) -> usize {
        self.table.hash(key)
    }

    /// Associate `value` with `key`, returning the value it replaced.
    ///
    /// May double the capacity and rehash every entry.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Result<Option<V>> {
        self.table.insert(key.into(), value)
    }

    /// `Ok(None)` means the key is absent; a stored value is always `Some`.
    pub fn get(&self, key: &str) -> Result<Option<&V>> {
        self.table.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Result<Option<&mut V>> {
        self.table.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> Result<bool> {
        self.table.contains_key(key)
    }

    /// Remove `key`; `Ok(true)` when an entry was dropped.
    pub fn remove(&mut self, key: &str) -> Result<bool> {
        self.table.remove(key)
    }

    pub fn remove_entry(&mut self, key: &str) -> Result<Option<(String, V)>> {
        self.table.remove_entry(key)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn clear(&mut self) {
        self.table.clear()
    }

    pub fn keys(&self) -> Vec<String> {
        self.table.keys()
    }

    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.table.values()
    }

    pub fn entries(&self) -> Vec<(String, V)>
    where
        V: Clone,
    {
        self.table.entries()
    }

    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    pub fn bucket_sizes(&self) -> Vec<usize> {
        self.table.bucket_sizes()
    }

    pub fn try_from_iter<K, I>(iter: I) -> Result<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let table = ChainTable::try_from_iter(iter.into_iter().map(|(k, v)| (k.into(), v)))?;
        Ok(Self { table })
    }
}

impl<V> Default for ChainHashMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for ChainHashMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.table.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_is_distinct_from_stored_none() {
        let mut m: ChainHashMap<Option<i32>> = ChainHashMap::new();
        m.insert("empty", None).unwrap();
        assert_eq!(m.get("empty").unwrap(), Some(&None));
        assert_eq!(m.get("missing").unwrap(), None);
        assert!(m.contains_key("empty").unwrap());
    }

    #[test]
    fn insert_accepts_str_and_string() {
        let mut m = ChainHashMap::new();
        m.insert("a", 1).unwrap();
        m.insert(String::from("b"), 2).unwrap();
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn debug_renders_as_map() {
        let mut m = ChainHashMap::new();
        m.insert("a", 1).unwrap();
        assert_eq!(format!("{:?}", m), r#"{"a": 1}"#);
    }

    #[test]
    fn hash_tracks_capacity() {
        let mut m = ChainHashMap::new();
        assert_eq!(m.hash("q"), 113 % 16);
        for i in 0..12 {
            m.insert(format!("k{}", i), i).unwrap();
        }
        assert_eq!(m.capacity(), 32);
        assert_eq!(m.hash("q"), 113 % 32);
    }

    #[test]
    fn try_from_iter_builds_map() {
        let m = ChainHashMap::try_from_iter([("x", 1), ("y", 2), ("x", 3)]).unwrap();
        assert_eq!(m.len(), 2);
        assert_eq!(m.get("x").unwrap(), Some(&3));
    }
}
