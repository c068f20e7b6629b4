//! Clockwise ownership on the ring.
//!
//! A key belongs to the first node found moving clockwise from the key's
//! angle, wrapping past 360 back to the lowest node. The node list is tiny
//! (a handful of entries) so every call simply re-sorts.

#[cfg(test)]
#[path = "owner_test.rs"]
mod owner_test;

/// Anything with a place on the ring.
pub trait RingPosition {
	/// Degrees clockwise from 12 o'clock, in `[0, 360)`.
	fn angle(&self) -> f64;
}

impl<T: RingPosition + ?Sized> RingPosition for &T {
	fn angle(&self) -> f64 {
		(**self).angle()
	}
}

impl RingPosition for f64 {
	fn angle(&self) -> f64 {
		*self
	}
}

/// Entries ordered by ascending angle. Ties keep their input order.
fn sorted_by_angle<T: RingPosition>(nodes: &[T]) -> Vec<&T> {
	let mut sorted: Vec<&T> = nodes.iter().collect();
	sorted.sort_by(|a, b| a.angle().total_cmp(&b.angle()));
	sorted
}

/// Find the node owning a key at `key_angle`, or `None` for an empty ring.
pub fn find_owner<T: RingPosition>(key_angle: f64, nodes: &[T]) -> Option<&T> {
	let sorted = sorted_by_angle(nodes);
	sorted
		.iter()
		.find(|node| node.angle() >= key_angle)
		.or_else(|| sorted.first())
		.copied()
}

/// Degrees travelled clockwise from `from` to `to`, in `(0, 360]`.
pub fn clockwise_gap(from: f64, to: f64) -> f64 {
	let gap = (to - from).rem_euclid(360.0);
	if gap == 0.0 { 360.0 } else { gap }
}

/// Midpoint of the widest clockwise gap between consecutive `angles`.
///
/// The first of several equally wide gaps wins. An empty ring yields 0.
pub fn largest_gap_midpoint(angles: &[f64]) -> f64 {
	let sorted = sorted_by_angle(angles);
	let mut best: Option<(f64, f64)> = None;
	for (i, &&from) in sorted.iter().enumerate() {
		let to = *sorted[(i + 1) % sorted.len()];
		let gap = clockwise_gap(from, to);
		if best.is_none_or(|(_, widest)| gap > widest) {
			best = Some((from, gap));
		}
	}
	best.map_or(0.0, |(from, gap)| (from + gap / 2.0).rem_euclid(360.0))
}

/// Fraction of the ring owned by each group of tokens.
///
/// Every token owns the arc from the previous token (exclusive) up to itself
/// (inclusive), matching [`find_owner`]. Arcs are summed per `group`, and
/// groups are returned in order of first appearance in `tokens`.
pub fn load_shares<T, K, F>(tokens: &[T], group: F) -> Vec<(K, f64)>
where
	T: RingPosition,
	K: PartialEq,
	F: Fn(&T) -> K,
{
	let mut shares: Vec<(K, f64)> = Vec::new();
	for token in tokens {
		let key = group(token);
		if !shares.iter().any(|(k, _)| *k == key) {
			shares.push((key, 0.0));
		}
	}

	let sorted = sorted_by_angle(tokens);
	// The lowest token's arc wraps back past 12 o'clock to the highest one.
	let Some(last) = sorted.last() else {
		return shares;
	};
	let mut prev = last.angle() - 360.0;
	for token in &sorted {
		let arc = token.angle() - prev;
		prev = token.angle();
		let key = group(*token);
		if let Some((_, share)) = shares.iter_mut().find(|(k, _)| *k == key) {
			*share += arc / 360.0;
		}
	}
	shares
}
