//! The toy string hash used to demonstrate `hash(key) % N` routing.

#[cfg(test)]
#[path = "hash_test.rs"]
mod hash_test;

/// Hash `text` into a non-negative integer.
///
/// Each UTF-16 code unit is folded in as `hash * 31 + unit` with 32-bit
/// signed wraparound, then the absolute value of the accumulator is returned.
/// Not cryptographic; collisions are expected.
pub fn simple_hash(text: &str) -> u32 {
	text.encode_utf16()
		.fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
		.unsigned_abs()
}

/// Index of the node `key` lands on in a cluster of `node_count` nodes.
///
/// A zero-sized cluster has nowhere to route, so `None` is returned.
pub fn route(key: &str, node_count: u32) -> Option<u32> {
	(node_count > 0).then(|| simple_hash(key) % node_count)
}
