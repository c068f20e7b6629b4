use leptos::prelude::*;
use log::debug;

use crate::components::ring_canvas::{RingCanvas, RingData};
use crate::state::virtual_nodes::{VirtualState, percent_label};

const RING_SIZE: f64 = 300.0;
const RING_RADIUS: f64 = 100.0;

/// Lesson 5: spread each machine over several ring positions to even out load.
#[component]
pub fn VirtualNodesPage() -> impl IntoView {
	let ring = RwSignal::new(VirtualState::default());
	let ring_data = Signal::derive(move || {
		ring.with(|v| RingData {
			nodes: v.tokens().into_iter().map(|t| t.node).collect(),
			keys: Vec::new(),
			show_sectors: true,
		})
	});

	let on_toggle = move |_| {
		ring.update(|v| {
			v.toggle();
			debug!("virtual nodes {}", if v.enabled { "on" } else { "off" });
		});
	};

	let load_bars = move || {
		ring.with(|v| {
			v.loads()
				.into_iter()
				.map(|(id, share)| {
					let color = v.physical.iter().find(|p| p.id == id).map_or("", |p| p.color);
					let label = percent_label(share);
					view! {
						<div class="load">
							<div class="load__header">
								<span style:color=color>{format!("Node {id} Load")}</span>
								<span>{label.clone()}</span>
							</div>
							<div class="load__track">
								<div class="load__bar" style:background-color=color style:width=label />
							</div>
						</div>
					}
				})
				.collect_view()
		})
	};

	view! {
		<section class="lesson">
			<header class="lesson__intro">
				<h2>"Virtual Nodes (The Balancing Act)"</h2>
				<p>
					"Real nodes are rarely evenly spaced. This creates \"Hotspots\" where one node handles most of the traffic."
					<br />
					<strong>"Solution:"</strong>
					" Each physical node creates multiple \"Virtual Nodes\" scattered around the ring."
				</p>
			</header>

			<div class="lesson__row">
				<RingCanvas data=ring_data size=RING_SIZE radius=RING_RADIUS />

				<div class="lesson__side">
					<div class="panel">
						<h4>"Load Distribution"</h4>
						{load_bars}
					</div>

					<button class="btn btn--indigo" on:click=on_toggle>
						{move || {
							if ring.with(|v| v.enabled) {
								"\u{25d4} Disable Virtual Nodes"
							} else {
								"\u{2630} Enable Virtual Nodes"
							}
						}}
					</button>
				</div>
			</div>
		</section>
	}
}
