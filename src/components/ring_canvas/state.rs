use crate::ring::{Point, RingKey, RingNode, RingPosition, clockwise_gap, find_owner, position};

use super::types::RingData;

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

pub const NODE_RADIUS: f64 = 16.0;
pub const HIT_RADIUS: f64 = 20.0;
pub const KEY_RADIUS: f64 = 6.0;
/// Keys sit on a smaller circle inside the ring.
pub const KEY_INSET: f64 = 20.0;

const APPEAR_SPEED: f64 = 4.0;
const GLIDE_SPEED: f64 = 6.0;
const PULSE_DECAY: f64 = 1.5;

#[derive(Clone, Debug)]
pub struct NodeSprite {
	pub node: RingNode,
	/// Angle currently drawn; glides towards `node.angle`.
	pub angle: f64,
	pub appear_t: f64,
	pub leaving: bool,
}

impl RingPosition for NodeSprite {
	fn angle(&self) -> f64 {
		self.node.angle
	}
}

#[derive(Clone, Debug)]
pub struct KeySprite {
	pub key: RingKey,
	pub owner: Option<String>,
	pub appear_t: f64,
	/// 1 right after the key changed owner, fading to 0.
	pub pulse_t: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<String>,
	pub highlight_t: f64,
	pub prev_node: Option<String>,
	delay_t: f64,
}

/// An arc of the ring and the color of the node owning it.
#[derive(Clone, Debug, PartialEq)]
pub struct Sector {
	pub start: f64,
	pub end: f64,
	pub color: String,
}

impl Sector {
	pub fn is_full_turn(&self) -> bool {
		clockwise_gap(self.start, self.end) >= 360.0
	}
}

pub struct RingCanvasState {
	pub nodes: Vec<NodeSprite>,
	pub keys: Vec<KeySprite>,
	pub hover: HoverState,
	pub size: f64,
	pub radius: f64,
	pub show_sectors: bool,
	pub flow_time: f64,
}

impl RingCanvasState {
	pub fn new(data: &RingData, size: f64, radius: f64) -> Self {
		let mut state = Self {
			nodes: Vec::new(),
			keys: Vec::new(),
			hover: HoverState::default(),
			size,
			radius,
			show_sectors: data.show_sectors,
			flow_time: 0.0,
		};
		state.sync(data);
		state
	}

	pub fn center(&self) -> f64 {
		self.size / 2.0
	}

	/// Diff `data` into the sprites: new things grow in, removed nodes fade
	/// out, moved nodes glide, and keys that change hands pulse.
	pub fn sync(&mut self, data: &RingData) {
		self.show_sectors = data.show_sectors;

		for sprite in &mut self.nodes {
			match data.nodes.iter().find(|n| n.id == sprite.node.id) {
				Some(node) => {
					sprite.node = node.clone();
					sprite.leaving = false;
				}
				None => sprite.leaving = true,
			}
		}
		for node in &data.nodes {
			if self.nodes.iter().all(|s| s.node.id != node.id) {
				self.nodes.push(NodeSprite {
					node: node.clone(),
					angle: node.angle,
					appear_t: 0.0,
					leaving: false,
				});
			}
		}

		self.keys.retain(|s| data.keys.iter().any(|k| k.id == s.key.id));
		for key in &data.keys {
			if self.keys.iter().all(|s| s.key.id != key.id) {
				self.keys.push(KeySprite {
					key: key.clone(),
					owner: None,
					appear_t: 0.0,
					pulse_t: 0.0,
				});
			}
		}

		self.assign_owners();
	}

	fn assign_owners(&mut self) {
		let live: Vec<&NodeSprite> = self.nodes.iter().filter(|s| !s.leaving).collect();
		for sprite in &mut self.keys {
			let owner = find_owner(sprite.key.angle, &live).map(|s| s.node.id.clone());
			if sprite.owner.is_some() && sprite.owner != owner {
				sprite.pulse_t = 1.0;
			}
			sprite.owner = owner;
		}
	}

	pub fn node(&self, id: &str) -> Option<&NodeSprite> {
		self.nodes.iter().find(|s| s.node.id == id)
	}

	pub fn owner_of(&self, key: &KeySprite) -> Option<&NodeSprite> {
		key.owner.as_deref().and_then(|id| self.node(id))
	}

	pub fn node_point(&self, sprite: &NodeSprite) -> Point {
		position(sprite.angle, self.radius, self.center())
	}

	pub fn key_point(&self, sprite: &KeySprite) -> Point {
		position(sprite.key.angle, self.radius - KEY_INSET, self.center())
	}

	/// Owned arcs of the live nodes, in ring order. A node tied with an
	/// earlier one owns nothing and gets no sector.
	pub fn sectors(&self) -> Vec<Sector> {
		let mut live: Vec<&NodeSprite> = self.nodes.iter().filter(|s| !s.leaving).collect();
		live.sort_by(|a, b| a.node.angle.total_cmp(&b.node.angle));
		let Some(last) = live.last() else {
			return Vec::new();
		};
		let mut start = last.node.angle;
		let mut sectors = Vec::with_capacity(live.len());
		for (i, s) in live.iter().enumerate() {
			let end = s.node.angle;
			if i == 0 || start != end {
				sectors.push(Sector {
					start,
					end,
					color: s.node.color.clone(),
				});
			}
			start = end;
		}
		sectors
	}

	pub fn node_at_position(&self, x: f64, y: f64) -> Option<String> {
		let pointer = Point::new(x, y);
		let mut found = None;
		for sprite in self.nodes.iter().filter(|s| !s.leaving) {
			if self.node_point(sprite).distance(pointer) < HIT_RADIUS {
				found = Some(sprite.node.id.clone());
			}
		}
		found
	}

	pub fn set_hover(&mut self, node: Option<String>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// Keep the old highlight around while it fades out
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
		} else {
			self.hover.prev_node = None;
		}

		if node.is_some() && !was_hovering {
			self.hover.delay_t = 0.0;
		}
		self.hover.node = node;
	}

	fn is_focus(&self, id: &str) -> bool {
		self.hover.node.as_deref() == Some(id) || self.hover.prev_node.as_deref() == Some(id)
	}

	pub fn is_highlighted_node(&self, sprite: &NodeSprite) -> bool {
		self.is_focus(&sprite.node.id)
	}

	/// Keys owned by the hovered node light up with it.
	pub fn is_highlighted_key(&self, sprite: &KeySprite) -> bool {
		sprite.owner.as_deref().is_some_and(|id| self.is_focus(id))
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	pub fn tick(&mut self, dt: f64) {
		self.flow_time += dt;
		let step = APPEAR_SPEED * dt;
		let glide = (GLIDE_SPEED * dt).min(1.0);

		for sprite in &mut self.nodes {
			sprite.appear_t = if sprite.leaving {
				(sprite.appear_t - step).max(0.0)
			} else {
				(sprite.appear_t + step).min(1.0)
			};
			// shortest way round
			let diff = (sprite.node.angle - sprite.angle + 540.0).rem_euclid(360.0) - 180.0;
			sprite.angle = if diff.abs() < 0.01 {
				sprite.node.angle
			} else {
				(sprite.angle + diff * glide).rem_euclid(360.0)
			};
		}
		self.nodes.retain(|s| !(s.leaving && s.appear_t <= 0.0));
		if let Some(id) = self.hover.node.clone() {
			if self.node(&id).is_none_or(|s| s.leaving) {
				self.set_hover(None);
			}
		}

		for sprite in &mut self.keys {
			sprite.appear_t = (sprite.appear_t + step).min(1.0);
			sprite.pulse_t = (sprite.pulse_t - PULSE_DECAY * dt).max(0.0);
		}

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
			}
		}
	}
}
