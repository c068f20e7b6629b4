//! Static settings shared by the lesson pages.

/// Ring colors, one per node slot (cyan, purple, emerald, amber, rose).
pub const RING_COLORS: [&str; 5] = ["#06b6d4", "#a855f7", "#10b981", "#f59e0b", "#f43f5e"];

/// CSS modifiers matching [`RING_COLORS`] for the tile-style node views.
pub const NODE_TONES: [&str; 5] = ["cyan", "purple", "emerald", "amber", "rose"];

/// Fill color for keys that have no owner.
pub const ORPHAN_KEY_COLOR: &str = "#94a3b8";

/// Most nodes any cluster demo will hold.
pub const MAX_NODES: usize = 5;

/// RAM each cluster node contributes.
pub const NODE_CAPACITY_GB: u32 = 10;

/// RAM of the lone local cache in the first lesson.
pub const LOCAL_CAPACITY_GB: u32 = 10;

/// Data added per click in the first lesson.
pub const DATA_CHUNK_GB: u32 = 5;

/// How long a routed packet is in flight before it lands.
pub const PACKET_FLIGHT_MS: u32 = 1500;

/// Node count the modulo demo stored its keys under.
pub const BASELINE_NODE_COUNT: u32 = 3;

/// Ring color for the node in slot `index`.
pub fn ring_color(index: usize) -> &'static str {
	RING_COLORS[index % RING_COLORS.len()]
}

/// Tile tone for the node in slot `index`.
pub fn node_tone(index: usize) -> &'static str {
	NODE_TONES[index % NODE_TONES.len()]
}

/// Letter naming the node in slot `index`: `A`, `B`, ...
pub fn node_letter(index: usize) -> char {
	let offset = u8::try_from(index % 26).unwrap_or_default();
	char::from(b'A' + offset)
}
