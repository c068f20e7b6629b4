use leptos::prelude::*;
use log::debug;

use crate::components::ring_canvas::{RingCanvas, RingData};
use crate::state::consistent::ConsistentState;

const RING_SIZE: f64 = 300.0;
const RING_RADIUS: f64 = 120.0;

/// Lesson 4: nodes and keys on one ring; a key belongs to the next node clockwise.
#[component]
pub fn ConsistentPage() -> impl IntoView {
	// Seeded from the clock so every visit draws different keys.
	let ring = RwSignal::new(ConsistentState::with_seed(js_sys::Date::now() as u64));
	let ring_data = Signal::derive(move || {
		ring.with(|r| RingData {
			nodes: r.nodes.clone(),
			keys: r.keys.clone(),
			show_sectors: false,
		})
	});

	let on_add_node = move |_| {
		ring.update(|r| {
			if let Some(node) = r.add_node() {
				debug!("{} joined the ring at {}\u{b0}", node.name, node.angle);
			}
		});
	};
	let on_add_key = move |_| {
		ring.update(|r| {
			let key = r.add_key();
			debug!("{} placed at {}\u{b0}", key.value, key.angle);
		});
	};
	let on_clear_keys = move |_| ring.update(ConsistentState::clear_keys);

	let node_list = move || {
		ring.with(|r| {
			let removable = r.can_remove_node();
			r.nodes
				.iter()
				.zip(r.key_counts())
				.map(|(node, count)| {
					let id = node.id.clone();
					let on_remove = move |_| {
						ring.update(|r| {
							if r.remove_node(&id) {
								debug!("node {id} left the ring");
							}
						});
					};
					view! {
						<li class="ring-nodes__item">
							<span class="ring-nodes__dot" style:background-color={node.color.clone()} />
							<span class="ring-nodes__name">{format!("{} ({}\u{b0})", node.name, node.angle)}</span>
							<span class="ring-nodes__count">{format!("{count} keys")}</span>
							<Show when=move || removable>
								<button class="icon-btn" title="Remove node" on:click={on_remove.clone()}>
									"\u{1f5d1}"
								</button>
							</Show>
						</li>
					}
				})
				.collect_view()
		})
	};

	let reshuffle = move || {
		ring.with(|r| r.last_reshuffle).map(|change| {
			format!("Last membership change moved {} of {} keys.", change.moved, change.total)
		})
	};

	view! {
		<section class="lesson lesson--split">
			<div class="lesson__controls">
				<header>
					<h3 class="lesson__accent">"Consistent Hashing"</h3>
					<p>
						"Nodes and Keys are placed on the same ring (0\u{b0}-360\u{b0})."
						<br />
						<br />
						"A Key belongs to the " <b>"first node found moving clockwise"</b> "."
					</p>
				</header>

				<div class="ring-nodes">
					<div class="ring-nodes__header">
						<span>{move || format!("NODES: {}", ring.with(|r| r.nodes.len()))}</span>
						<button
							class="icon-btn"
							title="Add node"
							on:click=on_add_node
							disabled=move || !ring.with(ConsistentState::can_add_node)
						>
							"+"
						</button>
					</div>
					<ul>{node_list}</ul>
				</div>

				<div class="lesson__keys">
					<button class="btn btn--primary btn--wide" on:click=on_add_key>
						"\u{1f511} Add Random Key"
					</button>
					<button
						class="btn btn--muted btn--wide"
						on:click=on_clear_keys
						disabled=move || ring.with(|r| r.keys.is_empty())
					>
						"Clear Keys"
					</button>
					<p class="hint">"Watch how keys automatically re-assign!"</p>
					<p class="hint">{reshuffle}</p>
				</div>
			</div>

			<div class="lesson__visual">
				<RingCanvas data=ring_data size=RING_SIZE radius=RING_RADIUS />
				<Show when=move || ring.with(|r| r.nodes.len() > 3)>
					<div class="notice">"Notice: Adding a node only moved keys near it!"</div>
				</Show>
			</div>
		</section>
	}
}
