//! Nodes and keys sharing one ring.
//!
//! Membership changes report how many keys switched owner, which is the
//! whole point of the lesson: only the keys next to the change move.

use crate::config::{MAX_NODES, node_letter, ring_color};
use crate::ring::{KeyGenerator, RingKey, RingNode, find_owner, largest_gap_midpoint};

#[cfg(test)]
#[path = "consistent_test.rs"]
mod consistent_test;

/// Keys that changed owner in the last membership change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reshuffle {
	pub moved: usize,
	pub total: usize,
}

#[derive(Clone, Debug)]
pub struct ConsistentState {
	pub nodes: Vec<RingNode>,
	pub keys: Vec<RingKey>,
	pub last_reshuffle: Option<Reshuffle>,
	generator: KeyGenerator,
}

impl ConsistentState {
	/// Three evenly spaced nodes and no keys; keys are drawn from `seed`.
	pub fn with_seed(seed: u64) -> Self {
		let nodes = [0.0, 120.0, 240.0]
			.into_iter()
			.enumerate()
			.map(|(slot, angle)| RingNode::new(node_letter(slot), ring_color(slot), angle))
			.collect();
		Self {
			nodes,
			keys: Vec::new(),
			last_reshuffle: None,
			generator: KeyGenerator::from_seed(seed),
		}
	}

	pub fn owner_of(&self, key: &RingKey) -> Option<&RingNode> {
		find_owner(key.angle, &self.nodes)
	}

	/// How many keys each node currently owns, in node order.
	pub fn key_counts(&self) -> Vec<usize> {
		self.nodes
			.iter()
			.map(|node| {
				self.keys
					.iter()
					.filter(|key| self.owner_of(key).is_some_and(|o| o.id == node.id))
					.count()
			})
			.collect()
	}

	pub fn can_add_node(&self) -> bool {
		self.nodes.len() < MAX_NODES
	}

	/// The last node can't be removed; the ring would have nowhere to put keys.
	pub fn can_remove_node(&self) -> bool {
		self.nodes.len() > 1
	}

	pub fn add_key(&mut self) -> &RingKey {
		let key = self.generator.next_key();
		self.keys.push(key);
		&self.keys[self.keys.len() - 1]
	}

	pub fn clear_keys(&mut self) {
		self.keys.clear();
		self.last_reshuffle = None;
	}

	/// Add a node in the widest gap, lettered with the first free letter.
	pub fn add_node(&mut self) -> Option<&RingNode> {
		if !self.can_add_node() {
			return None;
		}
		let slot = (0..MAX_NODES)
			.find(|&slot| {
				let letter = node_letter(slot).to_string();
				self.nodes.iter().all(|n| n.id != letter)
			})
			.unwrap_or(self.nodes.len());
		let angles: Vec<f64> = self.nodes.iter().map(|n| n.angle).collect();
		let node = RingNode::new(node_letter(slot), ring_color(slot), largest_gap_midpoint(&angles));
		self.change_membership(|nodes| nodes.push(node));
		self.nodes.last()
	}

	/// Remove node `id`. Returns whether it was removed.
	pub fn remove_node(&mut self, id: &str) -> bool {
		if !self.can_remove_node() || self.nodes.iter().all(|n| n.id != id) {
			return false;
		}
		self.change_membership(|nodes| nodes.retain(|n| n.id != id));
		true
	}

	fn change_membership(&mut self, change: impl FnOnce(&mut Vec<RingNode>)) {
		let before: Vec<Option<String>> = self
			.keys
			.iter()
			.map(|k| self.owner_of(k).map(|n| n.id.clone()))
			.collect();
		change(&mut self.nodes);
		let moved = self
			.keys
			.iter()
			.zip(&before)
			.filter(|(key, was)| self.owner_of(key).map(|n| &n.id) != was.as_ref())
			.count();
		self.last_reshuffle = Some(Reshuffle {
			moved,
			total: self.keys.len(),
		});
	}
}
