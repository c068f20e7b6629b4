//! Things that live on the ring.

use super::owner::RingPosition;

/// A cache node placed on the ring.
#[derive(Clone, Debug, PartialEq)]
pub struct RingNode {
	/// Unique identifier, also used as the short label drawn on the ring.
	pub id: String,
	/// Longer display name, e.g. `Node A`.
	pub name: String,
	/// CSS color used for the node and everything it owns.
	pub color: String,
	/// Degrees clockwise from 12 o'clock, in `[0, 360)`.
	pub angle: f64,
}

impl RingNode {
	/// A node named `Node <id>`.
	pub fn new(id: impl Into<String>, color: impl Into<String>, angle: f64) -> Self {
		let id = id.into();
		Self {
			name: format!("Node {id}"),
			id,
			color: color.into(),
			angle,
		}
	}
}

impl RingPosition for RingNode {
	fn angle(&self) -> f64 {
		self.angle
	}
}

/// A cached key placed on the ring.
#[derive(Clone, Debug, PartialEq)]
pub struct RingKey {
	/// Unique identifier.
	pub id: String,
	/// Display value, e.g. `Key-x3k9a`.
	pub value: String,
	/// Degrees clockwise from 12 o'clock, in `[0, 360)`.
	pub angle: f64,
}

impl RingPosition for RingKey {
	fn angle(&self) -> f64 {
		self.angle
	}
}
