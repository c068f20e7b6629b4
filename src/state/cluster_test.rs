use super::*;

#[test]
fn starts_without_nodes() {
	let cluster = ClusterState::default();
	assert!(cluster.nodes.is_empty());
	assert_eq!(cluster.total_capacity_gb(), 0);
}

#[test]
fn each_node_adds_ten_gigabytes() {
	let mut cluster = ClusterState::default();
	cluster.add_node();
	cluster.add_node();
	cluster.add_node();
	assert_eq!(cluster.nodes, vec![0, 1, 2]);
	assert_eq!(cluster.total_capacity_gb(), 30);
}

#[test]
fn cluster_caps_at_five_nodes() {
	let mut cluster = ClusterState::default();
	for _ in 0..5 {
		assert!(cluster.add_node());
	}
	assert!(cluster.is_full());
	assert!(!cluster.add_node());
	assert_eq!(cluster.nodes.len(), 5);
	assert_eq!(cluster.total_capacity_gb(), 50);
}

#[test]
fn reset_clears_the_pool() {
	let mut cluster = ClusterState::default();
	cluster.add_node();
	cluster.reset();
	assert_eq!(cluster, ClusterState::default());
}

#[test]
fn nodes_are_lettered() {
	assert_eq!(ClusterState::node_name(0), "Node A");
	assert_eq!(ClusterState::node_name(4), "Node E");
}
