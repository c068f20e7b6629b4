//! Pure hash-ring helpers shared by the lesson pages.
//!
//! Nothing in here touches the DOM, so everything is unit tested natively.

pub mod geometry;
pub mod hash;
pub mod keys;
pub mod owner;
pub mod types;

pub use geometry::{Point, position, sector_path, to_rad};
pub use hash::{route, simple_hash};
pub use keys::KeyGenerator;
pub use owner::{RingPosition, clockwise_gap, find_owner, largest_gap_midpoint, load_shares};
pub use types::{RingKey, RingNode};
