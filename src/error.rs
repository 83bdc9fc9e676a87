//! Error type shared by the chained table and its map/set front ends.

use thiserror::Error;

/// Failure raised by key-addressed operations.
///
/// The only failure mode is an internal-consistency check: a computed bucket
/// index that does not fall inside the current bucket array. The rolling hash
/// always reduces modulo the capacity, so hitting this means the table's
/// invariants were broken and the operation refused to touch storage.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    #[error("bucket index {index} out of range for capacity {capacity}")]
    IndexOutOfRange { index: usize, capacity: usize },
}

pub type Result<T> = core::result::Result<T, TableError>;
