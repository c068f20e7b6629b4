#![allow(clippy::float_cmp)]

use super::*;
use crate::ring::RingNode;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
	(a - b).abs() < EPSILON
}

fn three_nodes() -> Vec<RingNode> {
	vec![
		RingNode::new("A", "#06b6d4", 0.0),
		RingNode::new("B", "#a855f7", 120.0),
		RingNode::new("C", "#10b981", 240.0),
	]
}

fn owner_id(key_angle: f64, nodes: &[RingNode]) -> Option<&str> {
	find_owner(key_angle, nodes).map(|n| n.id.as_str())
}

// =============================================================
// find_owner
// =============================================================

#[test]
fn key_goes_to_next_node_clockwise() {
	assert_eq!(owner_id(200.0, &three_nodes()), Some("C"));
}

#[test]
fn key_past_last_node_wraps_to_first() {
	assert_eq!(owner_id(250.0, &three_nodes()), Some("A"));
}

#[test]
fn key_on_a_node_belongs_to_that_node() {
	assert_eq!(owner_id(120.0, &three_nodes()), Some("B"));
	assert_eq!(owner_id(0.0, &three_nodes()), Some("A"));
}

#[test]
fn input_order_does_not_matter() {
	let mut nodes = three_nodes();
	nodes.reverse();
	assert_eq!(owner_id(200.0, &nodes), Some("C"));
	assert_eq!(owner_id(10.0, &nodes), Some("B"));
}

#[test]
fn empty_ring_has_no_owner() {
	let nodes: Vec<RingNode> = Vec::new();
	for angle in [0.0, 90.0, 359.9] {
		assert!(find_owner(angle, &nodes).is_none());
	}
}

#[test]
fn single_node_owns_everything() {
	let nodes = vec![RingNode::new("A", "#fff", 200.0)];
	assert_eq!(owner_id(10.0, &nodes), Some("A"));
	assert_eq!(owner_id(300.0, &nodes), Some("A"));
}

#[test]
fn tied_angles_resolve_to_the_first_listed() {
	let nodes = vec![
		RingNode::new("X", "#fff", 90.0),
		RingNode::new("Y", "#000", 90.0),
	];
	assert_eq!(owner_id(45.0, &nodes), Some("X"));
	assert_eq!(owner_id(180.0, &nodes), Some("X"));
}

#[test]
fn owner_is_smallest_angle_at_or_after_key() {
	let nodes = vec![
		RingNode::new("A", "#fff", 10.0),
		RingNode::new("B", "#fff", 95.5),
		RingNode::new("C", "#fff", 181.0),
		RingNode::new("D", "#fff", 300.0),
	];
	for step in 0..360 {
		let key = f64::from(step);
		let owner = find_owner(key, &nodes).map(|n| n.angle);
		let expected = nodes
			.iter()
			.map(|n| n.angle)
			.filter(|&a| a >= key)
			.fold(None, |min: Option<f64>, a| Some(min.map_or(a, |m| m.min(a))))
			.unwrap_or(10.0);
		assert_eq!(owner, Some(expected), "key at {key}");
	}
}

// =============================================================
// clockwise_gap / largest_gap_midpoint
// =============================================================

#[test]
fn gap_measures_clockwise() {
	assert_eq!(clockwise_gap(0.0, 120.0), 120.0);
	assert_eq!(clockwise_gap(240.0, 0.0), 120.0);
	assert_eq!(clockwise_gap(90.0, 90.0), 360.0);
}

#[test]
fn midpoint_of_even_ring_is_first_gap() {
	assert_eq!(largest_gap_midpoint(&[0.0, 120.0, 240.0]), 60.0);
}

#[test]
fn midpoint_picks_widest_gap() {
	assert_eq!(largest_gap_midpoint(&[0.0, 60.0, 120.0, 240.0]), 180.0);
}

#[test]
fn midpoint_wraps_past_zero() {
	assert_eq!(largest_gap_midpoint(&[300.0, 20.0]), 160.0);
	assert_eq!(largest_gap_midpoint(&[100.0, 150.0]), 305.0);
}

#[test]
fn midpoint_of_single_node_is_opposite() {
	assert_eq!(largest_gap_midpoint(&[30.0]), 210.0);
}

#[test]
fn midpoint_of_empty_ring_is_zero() {
	assert_eq!(largest_gap_midpoint(&[]), 0.0);
}

// =============================================================
// load_shares
// =============================================================

#[test]
fn two_uneven_nodes_split_the_ring_by_ownership() {
	let tokens = vec![
		RingNode::new("A", "#fff", 0.0),
		RingNode::new("B", "#fff", 45.0),
	];
	let shares = load_shares(&tokens, |t| t.id.clone());
	assert_eq!(shares.len(), 2);
	assert_eq!(shares[0].0, "A");
	assert!(approx_eq(shares[0].1, 0.875));
	assert_eq!(shares[1].0, "B");
	assert!(approx_eq(shares[1].1, 0.125));
}

#[test]
fn interleaved_tokens_balance_load() {
	let tokens: Vec<(char, f64)> = (0..8)
		.map(|i| (if i % 2 == 0 { 'A' } else { 'B' }, f64::from(i) * 45.0))
		.collect();
	let angles: Vec<f64> = tokens.iter().map(|t| t.1).collect();
	let shares = load_shares(&angles, |a| tokens.iter().find(|t| t.1 == *a).map(|t| t.0));
	assert!(approx_eq(shares[0].1, 0.5));
	assert!(approx_eq(shares[1].1, 0.5));
}

#[test]
fn shares_sum_to_one() {
	let shares = load_shares(&three_nodes(), |t| t.id.clone());
	let total: f64 = shares.iter().map(|(_, s)| s).sum();
	assert!(approx_eq(total, 1.0));
}

#[test]
fn single_token_owns_the_whole_ring() {
	let shares = load_shares(&[77.0], |_| "solo");
	assert_eq!(shares, vec![("solo", 1.0)]);
}

#[test]
fn tied_token_after_the_first_owns_nothing() {
	let tokens = vec![
		RingNode::new("X", "#fff", 90.0),
		RingNode::new("Y", "#fff", 90.0),
	];
	let shares = load_shares(&tokens, |t| t.id.clone());
	assert!(approx_eq(shares[0].1, 1.0));
	assert!(approx_eq(shares[1].1, 0.0));
}

#[test]
fn empty_ring_has_no_shares() {
	let shares = load_shares(&[] as &[f64], |_| 0u8);
	assert!(shares.is_empty());
}

#[test]
fn shares_agree_with_find_owner() {
	let nodes = three_nodes();
	let shares = load_shares(&nodes, |t| t.id.clone());
	for (id, share) in shares {
		let owned = (0..360)
			.filter(|&step| owner_id(f64::from(step) + 0.5, &nodes) == Some(id.as_str()))
			.count();
		assert!(approx_eq(share, owned as f64 / 360.0), "{id}");
	}
}
