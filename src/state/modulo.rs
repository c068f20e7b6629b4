//! Routing with `hash(key) % N`, and what happens when N changes.
//!
//! Keys are assumed to have been stored while the full cluster of
//! [`BASELINE_NODE_COUNT`] nodes was up. A lookup is a hit only when the
//! current divisor still sends the key to the node it was stored on.

use crate::config::BASELINE_NODE_COUNT;
use crate::ring::{route, simple_hash};

#[cfg(test)]
#[path = "modulo_test.rs"]
mod modulo_test;

const DEFAULT_KEY: &str = "User:123";

/// A lookup on its way to a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Packet {
	/// Identifies this flight; a landing for any other sequence is stale.
	pub seq: u64,
	pub key: String,
	pub hash: u32,
	pub target: u32,
}

/// Outcome of the last lookup that landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attempt {
	pub node: u32,
	pub hit: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuloState {
	pub node_count: u32,
	pub key_input: String,
	pub packet: Option<Packet>,
	pub last_attempt: Option<Attempt>,
	next_seq: u64,
}

impl Default for ModuloState {
	fn default() -> Self {
		Self {
			node_count: BASELINE_NODE_COUNT,
			key_input: DEFAULT_KEY.to_owned(),
			packet: None,
			last_attempt: None,
			next_seq: 0,
		}
	}
}

impl ModuloState {
	/// Every slot drawn, alive or not.
	pub fn slots(&self) -> std::ops::Range<u32> {
		0..BASELINE_NODE_COUNT
	}

	pub fn is_alive(&self, slot: u32) -> bool {
		slot < self.node_count
	}

	pub fn is_crashed(&self) -> bool {
		self.node_count < BASELINE_NODE_COUNT
	}

	pub fn hash(&self) -> u32 {
		simple_hash(&self.key_input)
	}

	/// Node the current key routes to with the current divisor.
	pub fn target(&self) -> u32 {
		route(&self.key_input, self.node_count).unwrap_or_default()
	}

	pub fn in_flight(&self) -> bool {
		self.packet.is_some()
	}

	pub fn set_key(&mut self, key: String) {
		self.key_input = key;
	}

	/// Send the current key off. Returns the flight's sequence number, or
	/// `None` while another packet is still in the air.
	pub fn launch(&mut self) -> Option<u64> {
		if self.in_flight() {
			return None;
		}
		let seq = self.next_seq;
		self.next_seq += 1;
		self.packet = Some(Packet {
			seq,
			key: self.key_input.clone(),
			hash: self.hash(),
			target: self.target(),
		});
		self.last_attempt = None;
		Some(seq)
	}

	/// Land flight `seq`. Stale flights (cleared or replaced) are ignored.
	pub fn land(&mut self, seq: u64) -> Option<Attempt> {
		if self.packet.as_ref().is_none_or(|p| p.seq != seq) {
			return None;
		}
		let packet = self.packet.take()?;
		let stored_on = packet.hash % BASELINE_NODE_COUNT;
		let attempt = Attempt {
			node: packet.target,
			hit: packet.target == stored_on,
		};
		self.last_attempt = Some(attempt);
		Some(attempt)
	}

	/// Take the last node down, or bring it back.
	pub fn toggle_crash(&mut self) {
		self.node_count = if self.is_crashed() {
			BASELINE_NODE_COUNT
		} else {
			BASELINE_NODE_COUNT - 1
		};
		self.packet = None;
		self.last_attempt = None;
	}
}
