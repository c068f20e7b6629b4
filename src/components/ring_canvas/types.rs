use crate::ring::{RingKey, RingNode};

/// Everything the ring canvas draws.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RingData {
	pub nodes: Vec<RingNode>,
	pub keys: Vec<RingKey>,
	/// Fill the arc each node owns with its color.
	pub show_sectors: bool,
}
