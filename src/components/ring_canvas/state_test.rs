#![allow(clippy::float_cmp)]

use super::*;

const FRAME: f64 = 0.016;

fn node(id: &str, angle: f64) -> RingNode {
	RingNode::new(id, "#06b6d4", angle)
}

fn key(id: &str, angle: f64) -> RingKey {
	RingKey {
		id: id.to_owned(),
		value: format!("Key-{id}"),
		angle,
	}
}

fn data(nodes: Vec<RingNode>, keys: Vec<RingKey>) -> RingData {
	RingData {
		nodes,
		keys,
		show_sectors: false,
	}
}

fn three_node_data() -> RingData {
	data(
		vec![node("A", 0.0), node("B", 120.0), node("C", 240.0)],
		vec![key("k1", 30.0), key("k2", 200.0)],
	)
}

fn settle(state: &mut RingCanvasState) {
	for _ in 0..400 {
		state.tick(FRAME);
	}
}

#[test]
fn new_sprites_start_hidden_and_grow_in() {
	let mut state = RingCanvasState::new(&three_node_data(), 300.0, 120.0);
	assert_eq!(state.nodes.len(), 3);
	assert!(state.nodes.iter().all(|s| s.appear_t == 0.0));
	settle(&mut state);
	assert!(state.nodes.iter().all(|s| s.appear_t == 1.0));
	assert!(state.keys.iter().all(|s| s.appear_t == 1.0));
}

#[test]
fn keys_are_assigned_clockwise_owners() {
	let state = RingCanvasState::new(&three_node_data(), 300.0, 120.0);
	assert_eq!(state.keys[0].owner.as_deref(), Some("B"));
	assert_eq!(state.keys[1].owner.as_deref(), Some("C"));
	assert_eq!(state.owner_of(&state.keys[1]).map(|s| s.node.angle), Some(240.0));
}

#[test]
fn keys_without_nodes_have_no_owner() {
	let state = RingCanvasState::new(&data(Vec::new(), vec![key("k", 10.0)]), 300.0, 120.0);
	assert_eq!(state.keys[0].owner, None);
}

#[test]
fn removed_node_fades_out_then_disappears() {
	let mut state = RingCanvasState::new(&three_node_data(), 300.0, 120.0);
	settle(&mut state);
	let mut smaller = three_node_data();
	smaller.nodes.retain(|n| n.id != "B");
	state.sync(&smaller);
	assert!(state.node("B").is_some_and(|s| s.leaving));
	// The leaving node no longer owns anything.
	assert_eq!(state.keys[0].owner.as_deref(), Some("C"));
	settle(&mut state);
	assert!(state.node("B").is_none());
	assert_eq!(state.nodes.len(), 2);
}

#[test]
fn reassigned_key_pulses() {
	let mut state = RingCanvasState::new(&three_node_data(), 300.0, 120.0);
	let mut bigger = three_node_data();
	bigger.nodes.push(node("D", 60.0));
	state.sync(&bigger);
	assert_eq!(state.keys[0].owner.as_deref(), Some("D"));
	assert_eq!(state.keys[0].pulse_t, 1.0);
	assert_eq!(state.keys[1].pulse_t, 0.0);
	settle(&mut state);
	assert_eq!(state.keys[0].pulse_t, 0.0);
}

#[test]
fn first_assignment_does_not_pulse() {
	let state = RingCanvasState::new(&three_node_data(), 300.0, 120.0);
	assert!(state.keys.iter().all(|k| k.pulse_t == 0.0));
}

#[test]
fn cleared_keys_vanish_immediately() {
	let mut state = RingCanvasState::new(&three_node_data(), 300.0, 120.0);
	let mut cleared = three_node_data();
	cleared.keys.clear();
	state.sync(&cleared);
	assert!(state.keys.is_empty());
}

#[test]
fn moved_node_glides_the_short_way() {
	let mut state = RingCanvasState::new(&data(vec![node("A", 350.0)], Vec::new()), 300.0, 120.0);
	state.sync(&data(vec![node("A", 10.0)], Vec::new()));
	state.tick(FRAME);
	let angle = state.nodes[0].angle;
	// Crosses 0 rather than sweeping back through 180.
	assert!(angle > 350.0 || angle < 10.0, "angle {angle}");
	settle(&mut state);
	assert_eq!(state.nodes[0].angle, 10.0);
}

#[test]
fn hit_test_finds_nodes_by_position() {
	let state = RingCanvasState::new(&three_node_data(), 300.0, 120.0);
	// A sits at 12 o'clock: (150, 30).
	assert_eq!(state.node_at_position(150.0, 32.0).as_deref(), Some("A"));
	assert_eq!(state.node_at_position(150.0, 150.0), None);
}

#[test]
fn hover_highlights_node_and_its_keys() {
	let mut state = RingCanvasState::new(&three_node_data(), 300.0, 120.0);
	state.set_hover(Some("B".to_owned()));
	assert!(state.has_active_highlight());
	let b = state.node("B").cloned().unwrap_or_else(|| panic!("no B"));
	assert!(state.is_highlighted_node(&b));
	assert!(state.is_highlighted_key(&state.keys[0]));
	assert!(!state.is_highlighted_key(&state.keys[1]));
	settle(&mut state);
	assert!(state.hover.highlight_t > 0.9);
}

#[test]
fn highlight_fades_after_hover_ends() {
	let mut state = RingCanvasState::new(&three_node_data(), 300.0, 120.0);
	state.set_hover(Some("B".to_owned()));
	settle(&mut state);
	state.set_hover(None);
	assert_eq!(state.hover.prev_node.as_deref(), Some("B"));
	assert!(state.has_active_highlight());
	settle(&mut state);
	assert_eq!(state.hover.highlight_t, 0.0);
	assert!(!state.has_active_highlight());
}

#[test]
fn hover_is_dropped_when_the_node_leaves() {
	let mut state = RingCanvasState::new(&three_node_data(), 300.0, 120.0);
	state.set_hover(Some("B".to_owned()));
	let mut smaller = three_node_data();
	smaller.nodes.retain(|n| n.id != "B");
	state.sync(&smaller);
	state.tick(FRAME);
	assert_eq!(state.hover.node, None);
}

#[test]
fn sectors_run_from_previous_node_to_owner() {
	let state = RingCanvasState::new(&three_node_data(), 300.0, 120.0);
	let spans: Vec<(f64, f64)> = state.sectors().iter().map(|s| (s.start, s.end)).collect();
	assert_eq!(spans, vec![(240.0, 0.0), (0.0, 120.0), (120.0, 240.0)]);
}

#[test]
fn lone_node_owns_a_full_turn() {
	let state = RingCanvasState::new(&data(vec![node("A", 90.0)], Vec::new()), 300.0, 120.0);
	let sectors = state.sectors();
	assert_eq!(sectors.len(), 1);
	assert!(sectors[0].is_full_turn());
}

#[test]
fn tied_nodes_leave_the_ring_to_the_first() {
	let mut first = node("X", 90.0);
	first.color = "#a855f7".to_owned();
	let state = RingCanvasState::new(&data(vec![first, node("Y", 90.0)], Vec::new()), 300.0, 120.0);
	let sectors = state.sectors();
	assert_eq!(sectors.len(), 1);
	assert!(sectors[0].is_full_turn());
	assert_eq!(sectors[0].color, "#a855f7");
}

#[test]
fn tie_among_spread_nodes_drops_only_the_empty_arc() {
	let nodes = vec![node("X", 90.0), node("Y", 90.0), node("Z", 200.0)];
	let state = RingCanvasState::new(&data(nodes, Vec::new()), 300.0, 120.0);
	let spans: Vec<(f64, f64)> = state.sectors().iter().map(|s| (s.start, s.end)).collect();
	assert_eq!(spans, vec![(200.0, 90.0), (90.0, 200.0)]);
}

#[test]
fn empty_ring_has_no_sectors() {
	let state = RingCanvasState::new(&RingData::default(), 300.0, 120.0);
	assert!(state.sectors().is_empty());
}
