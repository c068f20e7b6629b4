//! Pooling RAM across several machines.

use crate::config::{MAX_NODES, NODE_CAPACITY_GB, node_letter};

#[cfg(test)]
#[path = "cluster_test.rs"]
mod cluster_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClusterState {
	/// Slot index of every node, in the order they joined.
	pub nodes: Vec<usize>,
}

impl ClusterState {
	pub fn is_full(&self) -> bool {
		self.nodes.len() >= MAX_NODES
	}

	/// Append a node. Returns `false` when the cluster is already full.
	pub fn add_node(&mut self) -> bool {
		if self.is_full() {
			return false;
		}
		self.nodes.push(self.nodes.len());
		true
	}

	pub fn reset(&mut self) {
		self.nodes.clear();
	}

	/// Sum of every node's RAM.
	pub fn total_capacity_gb(&self) -> u32 {
		u32::try_from(self.nodes.len()).unwrap_or(u32::MAX).saturating_mul(NODE_CAPACITY_GB)
	}

	/// `Node A`, `Node B`, ...
	pub fn node_name(slot: usize) -> String {
		format!("Node {}", node_letter(slot))
	}
}
