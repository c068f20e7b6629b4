//! One physical node spread across several ring positions.

use crate::config::ring_color;
use crate::ring::{RingNode, load_shares};

#[cfg(test)]
#[path = "virtual_nodes_test.rs"]
mod virtual_nodes_test;

/// Ring positions per physical node once virtual nodes are on.
pub const REPLICAS: u32 = 4;

/// A machine in the demo, with the angle of its first token.
#[derive(Clone, Debug, PartialEq)]
pub struct PhysicalNode {
	pub id: &'static str,
	pub color: &'static str,
	pub base_angle: f64,
}

/// A ring token tagged with the physical node that owns it.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
	pub owner: &'static str,
	pub node: RingNode,
}

impl crate::ring::RingPosition for Token {
	fn angle(&self) -> f64 {
		self.node.angle
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct VirtualState {
	pub physical: Vec<PhysicalNode>,
	pub enabled: bool,
}

impl Default for VirtualState {
	/// Two badly placed machines: A at 0 and B only 45 degrees later.
	fn default() -> Self {
		Self {
			physical: vec![
				PhysicalNode {
					id: "A",
					color: ring_color(0),
					base_angle: 0.0,
				},
				PhysicalNode {
					id: "B",
					color: ring_color(1),
					base_angle: 45.0,
				},
			],
			enabled: false,
		}
	}
}

impl VirtualState {
	pub fn toggle(&mut self) {
		self.enabled = !self.enabled;
	}

	pub fn replicas(&self) -> u32 {
		if self.enabled { REPLICAS } else { 1 }
	}

	/// Every token on the ring, sorted by angle.
	///
	/// Replica `i` of a node sits `i * 360 / replicas` degrees past its base
	/// and is labelled `A1`, `A2`, ... (plain `A` without virtual nodes).
	pub fn tokens(&self) -> Vec<Token> {
		let replicas = self.replicas();
		let spread = 360.0 / f64::from(replicas);
		let mut tokens: Vec<Token> = self
			.physical
			.iter()
			.flat_map(|p| {
				(0..replicas).map(move |i| {
					let id = if replicas == 1 {
						p.id.to_owned()
					} else {
						format!("{}{}", p.id, i + 1)
					};
					let angle = (p.base_angle + f64::from(i) * spread).rem_euclid(360.0);
					Token {
						owner: p.id,
						node: RingNode {
							name: format!("Node {id}"),
							id,
							color: p.color.to_owned(),
							angle,
						},
					}
				})
			})
			.collect();
		tokens.sort_by(|a, b| a.node.angle.total_cmp(&b.node.angle));
		tokens
	}

	/// Share of the ring each physical node serves, in `physical` order.
	pub fn loads(&self) -> Vec<(&'static str, f64)> {
		load_shares(&self.tokens(), |t| t.owner)
	}
}

/// Percentage label for a share, e.g. `87.5%`.
pub fn percent_label(share: f64) -> String {
	let percent = (share * 1000.0).round() / 10.0;
	format!("{percent}%")
}
