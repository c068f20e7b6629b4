use leptos::prelude::*;
use log::debug;

use crate::config::{NODE_CAPACITY_GB, node_tone};
use crate::state::cluster::ClusterState;

/// Lesson 2: pool several machines into one logical cache.
#[component]
pub fn ClusterPage() -> impl IntoView {
	let cluster = RwSignal::new(ClusterState::default());

	let on_add = move |_| {
		cluster.update(|c| {
			if c.add_node() {
				debug!("cluster grew to {} nodes", c.nodes.len());
			}
		});
	};
	let on_reset = move |_| {
		cluster.update(ClusterState::reset);
		debug!("cluster reset");
	};

	view! {
		<section class="lesson">
			<header class="lesson__intro">
				<h2>"The Cluster Approach"</h2>
				<p>
					"We can combine RAM from multiple machines into one big logical cache. "
					"Total Capacity = Sum(Node Capacities)."
				</p>
			</header>

			<div class="stage">
				<Show when=move || cluster.with(|c| c.nodes.is_empty())>
					<div class="stage__empty">"No nodes in cluster. Add one to start."</div>
				</Show>

				<div class="cluster">
					<For
						each=move || cluster.with(|c| c.nodes.clone())
						key=|slot| *slot
						children=move |slot: usize| {
							view! {
								<div class={format!("node-tile node-tile--enter node-tile--{}", node_tone(slot))}>
									<div class="node-tile__icon">"\u{1f5a5}"</div>
									<span class="node-tile__name">{ClusterState::node_name(slot)}</span>
									<span class="node-tile__detail">{format!("{NODE_CAPACITY_GB}GB RAM")}</span>
								</div>
							}
						}
					/>
				</div>

				<div class="stage__counter">
					<span>"Total Pool: "</span>
					<strong>{move || format!("{} GB", cluster.with(ClusterState::total_capacity_gb))}</strong>
				</div>
			</div>

			<div class="lesson__actions">
				<button
					class="btn btn--success"
					on:click=on_add
					disabled=move || cluster.with(ClusterState::is_full)
				>
					"+ Add Cache Node"
				</button>
				<button class="btn btn--muted" on:click=on_reset>
					"\u{21bb} Reset"
				</button>
			</div>
		</section>
	}
}
