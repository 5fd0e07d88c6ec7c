//! Shard routing: mapping a key to the shard that owns it.
//!
//! Every term and every document id lives in exactly one shard, chosen by
//! hashing the key. The hash must match the offline index builder
//! bit-for-bit, since it decides which file a key is read from; do not
//! change the arithmetic.

/// Multiplier used by the shard hash.
const Q: u32 = 123_456_789;

/// Compute the shard id owning `key`, in `[0, shard_count)`.
///
/// The hash walks the key by Unicode code point (not by byte) and uses
/// wrapping unsigned 32-bit arithmetic throughout: for each code point
/// `c`, the accumulator gains `Q + c*c`; the sum is then multiplied by
/// `Q` and reduced modulo `shard_count`. Equal keys under equal shard
/// counts always map to the same shard.
///
/// # Panics
///
/// Panics if `shard_count` is zero. The shard count must be loaded from
/// the index before any key is routed; [`crate::index::Index`] guards
/// its own calls and surfaces an error instead.
pub fn shard_id(key: &str, shard_count: u32) -> u32 {
    assert!(shard_count > 0, "shard count must be loaded before routing");

    let mut r: u32 = 0;
    for c in key.chars() {
        let cc = c as u32;
        r = r.wrapping_add(Q.wrapping_add(cc.wrapping_mul(cc)));
    }
    r = r.wrapping_mul(Q);

    r % shard_count
}
