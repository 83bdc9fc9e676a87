//! Polynomial rolling hash over UTF-16 code units.
//!
//! The accumulator is reduced modulo the bucket count after every step, so
//! the result is already a valid bucket index and depends on the capacity:
//! the same key lands in different buckets before and after a resize.

/// Multiplier of the rolling polynomial.
pub const HASH_MULTIPLIER: usize = 31;

/// Hash `key` into `[0, capacity)`.
///
/// Each UTF-16 code unit `c` updates `code = (31 * code + c) % capacity`,
/// starting from zero. A zero capacity yields zero; callers never build a
/// table that small.
pub fn rolling_hash(key: &str, capacity: usize) -> usize {
    if capacity == 0 {
        return 0;
    }
    key.encode_utf16().fold(0usize, |code, unit| {
        // `code < capacity` keeps the product far from overflow for any
        // capacity a bucket array can actually reach; wrapping keeps the
        // result in range regardless.
        code.wrapping_mul(HASH_MULTIPLIER)
            .wrapping_add(unit as usize)
            % capacity
    })
}
