//! Seeded generator for the random keys dropped onto the ring.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::RingKey;

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 5;

/// Produces keys with random ids and whole-degree angles.
///
/// The same seed always yields the same sequence of keys.
#[derive(Clone, Debug)]
pub struct KeyGenerator {
	rng: SmallRng,
}

impl KeyGenerator {
	/// A generator replaying the sequence for `seed`.
	pub fn from_seed(seed: u64) -> Self {
		Self {
			rng: SmallRng::seed_from_u64(seed),
		}
	}

	/// Draw the next key.
	pub fn next_key(&mut self) -> RingKey {
		let id: String = (0..ID_LEN)
			.map(|_| char::from(ID_ALPHABET[self.rng.random_range(0..ID_ALPHABET.len())]))
			.collect();
		let angle = f64::from(self.rng.random_range(0u16..360));
		RingKey {
			value: format!("Key-{id}"),
			id,
			angle,
		}
	}
}
