//! ChainTable: separate-chaining core shared by the map and set front ends.
//!
//! Each bucket holds the arena key of its chain head; nodes link to their
//! successor by arena key. Nodes never move once inserted: a resize only
//! relinks them into the new bucket array.

use crate::error::{Result, TableError};
use crate::hash::rolling_hash;
use core::fmt;
use core::mem;
use slotmap::{DefaultKey, SlotMap};

/// Bucket count of a freshly created table.
pub const INITIAL_CAPACITY: usize = 16;
/// Load-factor threshold as a fraction (0.75).
pub const LOAD_FACTOR_NUM: usize = 3;
pub const LOAD_FACTOR_DEN: usize = 4;

#[derive(Debug, Clone)]
struct Node<V> {
    key: String,
    value: V,
    next: Option<DefaultKey>,
}

#[derive(Clone)]
pub struct ChainTable<V> {
    capacity: usize,
    buckets: Vec<Option<DefaultKey>>, // chain heads, one per slot
    nodes: SlotMap<DefaultKey, Node<V>>,
}

impl<V> ChainTable<V> {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Table with at least `capacity` buckets, rounded up to a power of two
    /// no smaller than [`INITIAL_CAPACITY`].
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(INITIAL_CAPACITY).next_power_of_two();
        Self {
            capacity,
            buckets: vec![None; capacity],
            nodes: SlotMap::with_key(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bucket a key hashes to under the current capacity.
    pub fn hash(&self, key: &str) -> usize {
        rolling_hash(key, self.capacity)
    }

    fn bucket_index(&self, key: &str) -> Result<usize> {
        let index = self.hash(key) % self.capacity;
        if index >= self.buckets.len() {
            return Err(TableError::IndexOutOfRange {
                index,
                capacity: self.capacity,
            });
        }
        Ok(index)
    }

    fn chain(&self, head: Option<DefaultKey>) -> Chain<'_, V> {
        Chain {
            nodes: &self.nodes,
            cursor: head,
        }
    }

    fn find_node(&self, key: &str) -> Result<Option<DefaultKey>> {
        let index = self.bucket_index(key)?;
        Ok(self
            .chain(self.buckets[index])
            .find(|(_, node)| node.key == key)
            .map(|(k, _)| k))
    }

    pub fn get(&self, key: &str) -> Result<Option<&V>> {
        Ok(self.find_node(key)?.map(|k| &self.nodes[k].value))
    }

    pub fn get_mut(&mut self, key: &str) -> Result<Option<&mut V>> {
        match self.find_node(key)? {
            Some(k) => Ok(self.nodes.get_mut(k).map(|node| &mut node.value)),
            None => Ok(None),
        }
    }

    pub fn contains_key(&self, key: &str) -> Result<bool> {
        Ok(self.find_node(key)?.is_some())
    }

    /// Insert or overwrite. Returns the previous value when `key` was already
    /// present; in that case the stored key is kept and no resize happens.
    pub fn insert(&mut self, key: String, value: V) -> Result<Option<V>> {
        let index = self.bucket_index(&key)?;

        let mut tail = None;
        let mut cursor = self.buckets[index];
        while let Some(k) = cursor {
            let node = &mut self.nodes[k];
            if node.key == key {
                return Ok(Some(mem::replace(&mut node.value, value)));
            }
            tail = cursor;
            cursor = node.next;
        }

        let new = self.nodes.insert(Node {
            key,
            value,
            next: None,
        });
        match tail {
            None => self.buckets[index] = Some(new),
            Some(t) => self.nodes[t].next = Some(new),
        }

        if self.at_threshold() {
            self.grow()?;
        }
        debug_assert!(!self.at_threshold(), "load factor above threshold after insert");
        Ok(None)
    }

    fn at_threshold(&self) -> bool {
        self.nodes.len() * LOAD_FACTOR_DEN >= self.capacity * LOAD_FACTOR_NUM
    }

    /// Double the bucket array and relink every node under the new capacity,
    /// visiting old chains in slot order then chain order. Relinked nodes are
    /// appended at the tail of their new chain, so that relative order
    /// survives.
    fn grow(&mut self) -> Result<()> {
        let order: Vec<DefaultKey> = self
            .buckets
            .iter()
            .flat_map(|&head| self.chain(head).map(|(k, _)| k))
            .collect();

        self.capacity *= 2;
        self.buckets.clear();
        self.buckets.resize(self.capacity, None);

        let mut tails: Vec<Option<DefaultKey>> = vec![None; self.capacity];
        for k in order {
            let index = self.bucket_index(&self.nodes[k].key)?;
            self.nodes[k].next = None;
            match tails[index] {
                None => self.buckets[index] = Some(k),
                Some(t) => self.nodes[t].next = Some(k),
            }
            tails[index] = Some(k);
        }
        Ok(())
    }

    /// Unlink `key` from its chain and hand back the owned pair.
    pub fn remove_entry(&mut self, key: &str) -> Result<Option<(String, V)>> {
        let index = self.bucket_index(key)?;

        let mut prev: Option<DefaultKey> = None;
        let mut cursor = self.buckets[index];
        while let Some(k) = cursor {
            let next = self.nodes[k].next;
            if self.nodes[k].key == key {
                // A head match rewrites the slot itself, not a local cursor.
                match prev {
                    None => self.buckets[index] = next,
                    Some(p) => self.nodes[p].next = next,
                }
                return Ok(self.nodes.remove(k).map(|node| (node.key, node.value)));
            }
            prev = cursor;
            cursor = next;
        }
        Ok(None)
    }

    pub fn remove(&mut self, key: &str) -> Result<bool> {
        Ok(self.remove_entry(key)?.is_some())
    }

    /// Number of entries, counted by walking every chain.
    pub fn len(&self) -> usize {
        let count: usize = self
            .buckets
            .iter()
            .map(|&head| self.chain(head).count())
            .sum();
        debug_assert_eq!(count, self.nodes.len(), "arena and chains disagree");
        count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop every entry; the capacity is kept.
    pub fn clear(&mut self) {
        self.buckets.fill(None);
        self.nodes.clear();
    }

    /// Chain length per bucket, in slot order.
    pub fn bucket_sizes(&self) -> Vec<usize> {
        self.buckets
            .iter()
            .map(|&head| self.chain(head).count())
            .collect()
    }

    /// Walk entries in slot order, then chain order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: self.chain(None),
        }
    }

    pub fn keys(&self) -> Vec<String> {
        self.iter().map(|(k, _)| k.to_owned()).collect()
    }

    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    pub fn entries(&self) -> Vec<(String, V)>
    where
        V: Clone,
    {
        self.iter().map(|(k, v)| (k.to_owned(), v.clone())).collect()
    }

    /// Build a table from pairs, stopping at the first failed insert.
    pub fn try_from_iter<I>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, V)>,
    {
        let mut table = Self::new();
        for (k, v) in iter {
            table.insert(k, v)?;
        }
        Ok(table)
    }
}

impl<V> Default for ChainTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for ChainTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainTable")
            .field("capacity", &self.capacity)
            .field("len", &self.nodes.len())
            .field("bucket_sizes", &self.bucket_sizes())
            .finish()
    }
}

/// Cursor over a single chain.
struct Chain<'a, V> {
    nodes: &'a SlotMap<DefaultKey, Node<V>>,
    cursor: Option<DefaultKey>,
}

impl<'a, V> Iterator for Chain<'a, V> {
    type Item = (DefaultKey, &'a Node<V>);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let k = self.cursor?;
        let node = self.nodes.get(k)?;
        self.cursor = node.next;
        Some((k, node))
    }
}

/// Iterator over `(key, value)` in bucket order.
pub struct Iter<'a, V> {
    buckets: core::slice::Iter<'a, Option<DefaultKey>>,
    chain: Chain<'a, V>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((_, node)) = self.chain.next() {
                return Some((node.key.as_str(), &node.value));
            }
            self.chain.cursor = *self.buckets.next()?;
        }
    }
}
