//! chain-hashmap: a string-keyed hash map and hash set built on
//! separate chaining with a capacity-dependent rolling hash.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: one chaining engine shared by a map and a set, each a thin
//!   front end that only decides what a node stores.
//! - Layers:
//!   - ChainTable<V>: bucket array of chain heads plus a node arena.
//!     Owns hashing, growth, lookup and splicing.
//!   - ChainHashMap<V>: `ChainTable<V>`, key -> value.
//!   - ChainHashSet: `ChainTable<()>`, presence only.
//!
//! Storage
//! - Nodes live in a `slotmap::SlotMap`; a bucket holds the arena key of
//!   its chain head and each node holds the key of its successor. Links
//!   are plain keys, so there are no shared mutable node references and
//!   no unsafe code.
//! - New keys are appended at the tail of their chain. Removing a head
//!   rewrites the bucket slot; removing any other node rewrites the
//!   predecessor's link.
//!
//! Hashing and growth
//! - `code = (31 * code + unit) % capacity` over the key's UTF-16 code
//!   units, reduced at every step. The bucket of a key therefore depends
//!   on the current capacity.
//! - Capacity starts at 16 and doubles when an insert brings the entry
//!   count to 3/4 of the capacity (`count >= 0.75 * capacity`). Growth
//!   relinks every node in one pass, walking old buckets in slot order
//!   and chains in chain order. Capacity never shrinks, not even on
//!   `clear`.
//!
//! Errors
//! - Key-addressed operations return `Result<_, TableError>`. The only
//!   error is `IndexOutOfRange`, a consistency check on the computed
//!   bucket index; absent keys are reported as `None`/`false`.
//!
//! Notes and non-goals
//! - Single-threaded; mutation needs `&mut self`. Share across threads
//!   only behind an external lock.
//! - Keys are strings. `keys`/`values`/`entries` return snapshots whose
//!   order follows bucket layout and is not stable across resizes.
//! - `len()` walks every chain rather than reading a cached counter.

pub mod chain_table;
mod chain_table_proptest;
mod error;
mod hash;
mod hash_map;
mod hash_set;

// Public surface
pub use chain_table::{INITIAL_CAPACITY, LOAD_FACTOR_DEN, LOAD_FACTOR_NUM};
pub use error::{Result, TableError};
pub use hash::{rolling_hash, HASH_MULTIPLIER};
pub use hash_map::ChainHashMap;
pub use hash_set::ChainHashSet;
