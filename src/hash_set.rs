//! ChainHashSet: presence-only front end over `ChainTable<()>`.

use crate::chain_table::ChainTable;
use crate::error::Result;
use core::fmt;

#[derive(Clone, Default)]
pub struct ChainHashSet {
    table: ChainTable<()>,
}

impl ChainHashSet {
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

    pub fn hash(&self, key: &str) -> usize {
        self.table.hash(key)
    }

    /// Add `key`; `Ok(false)` when it was already present, in which case
    /// the set is left untouched.
    pub fn insert(&mut self, key: impl Into<String>) -> Result<bool> {
        Ok(self.table.insert(key.into(), ())?.is_none())
    }

    pub fn contains(&self, key: &str) -> Result<bool> {
        self.table.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Result<bool> {
        self.table.remove(key)
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

    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    pub fn bucket_sizes(&self) -> Vec<usize> {
        self.table.bucket_sizes()
    }

    pub fn try_from_iter<K, I>(iter: I) -> Result<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = K>,
    {
        let table = ChainTable::try_from_iter(iter.into_iter().map(|k| (k.into(), ())))?;
        Ok(Self { table })
    }
}

impl fmt::Debug for ChainHashSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.table.iter().map(|(k, _)| k)).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_add_reports_false() {
        let mut s = ChainHashSet::new();
        assert!(s.insert("a").unwrap());
        assert!(!s.insert("a").unwrap());
        assert_eq!(s.len(), 1);
    }

    /// Invariant: removing a key that is alone in its bucket makes it absent.
    #[test]
    fn remove_sole_head() {
        let mut s = ChainHashSet::new();
        s.insert("a").unwrap();
        assert!(s.remove("a").unwrap());
        assert!(!s.contains("a").unwrap());
        assert!(s.is_empty());
    }

    #[test]
    fn debug_renders_as_set() {
        let mut s = ChainHashSet::new();
        s.insert("a").unwrap();
        assert_eq!(format!("{:?}", s), r#"{"a"}"#);
    }

    #[test]
    fn try_from_iter_dedups() {
        let s = ChainHashSet::try_from_iter(["x", "y", "x"]).unwrap();
        assert_eq!(s.len(), 2);
        assert!(s.contains("y").unwrap());
    }
}
