use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use log::debug;

use crate::config::{PACKET_FLIGHT_MS, node_tone};
use crate::state::modulo::{Attempt, ModuloState};

fn verdict_view(attempt: Attempt) -> impl IntoView {
	let (class, headline, detail) = if attempt.hit {
		("verdict verdict--hit", "HIT!", "Correct Node")
	} else {
		("verdict verdict--miss", "MISS!", "Wrong Node (Data Lost)")
	};
	view! {
		<div class=class>
			{headline}
			<span>{detail}</span>
		</div>
	}
}

/// Lesson 3: route with `hash(key) % N`, then change N.
#[component]
pub fn ModuloPage() -> impl IntoView {
	let demo = RwSignal::new(ModuloState::default());

	let on_find = move |_| {
		let Some(seq) = demo.try_update(ModuloState::launch).flatten() else {
			return;
		};
		debug!("packet {seq} launched");
		// Fire and forget: a flight cancelled meanwhile is ignored on landing.
		Timeout::new(PACKET_FLIGHT_MS, move || {
			if let Some(attempt) = demo.try_update(|d| d.land(seq)).flatten() {
				debug!(
					"packet {seq} landed on node {}: {}",
					attempt.node,
					if attempt.hit { "hit" } else { "miss" }
				);
			}
		})
		.forget();
	};
	let on_toggle_crash = move |_| {
		demo.update(|d| {
			d.toggle_crash();
			debug!("modulo cluster now has {} nodes", d.node_count);
		});
	};

	let slots = move || {
		demo.with(|d| {
			d.slots()
				.map(|slot| {
					let alive = d.is_alive(slot);
					let packet = d.packet.as_ref().filter(|p| p.target == slot).map(|p| p.key.clone());
					let attempt = d.last_attempt.filter(|a| a.node == slot);
					let tile = if alive {
						format!("node-tile node-tile--small node-tile--{}", node_tone(slot as usize))
					} else {
						"node-tile node-tile--small node-tile--dead".to_owned()
					};
					view! {
						<div class="slot">
							{packet.map(|key| view! { <div class="packet">"Data: " {key}</div> })}
							{attempt.map(verdict_view)}
							<div class=tile>
								<div class="node-tile__icon">{if alive { "\u{1f5a5}" } else { "\u{2716}" }}</div>
								<span class="node-tile__name">{format!("Node {slot}")}</span>
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
				<h2>"The Modulo Strategy"</h2>
				<p>
					"Route keys using " <code>"index = hash(key) % N"</code> "."
					<br />
					"Try storing a key. Then CRASH a node (change N) and see where the math sends the same key."
				</p>
			</header>

			<div class="calculator">
				<label class="calculator__field">
					<span>"KEY"</span>
					<input
						type="text"
						prop:value=move || demo.with(|d| d.key_input.clone())
						on:input=move |ev| demo.update(|d| d.set_key(event_target_value(&ev)))
					/>
				</label>
				<span class="calculator__arrow">"\u{2192}"</span>
				<div class="calculator__cell">
					<span>"HASH"</span>
					<strong class="calculator__hash">{move || demo.with(ModuloState::hash)}</strong>
				</div>
				<span class="calculator__arrow">"\u{2192}"</span>
				<div class="calculator__cell">
					<span>{move || format!("% {}", demo.with(|d| d.node_count))}</span>
					<strong class="calculator__result">
						{move || format!("= {}", demo.with(ModuloState::target))}
					</strong>
				</div>
				<button
					class="btn btn--primary"
					on:click=on_find
					disabled=move || demo.with(ModuloState::in_flight)
				>
					"Find Node"
				</button>
			</div>

			<div class="slots">{slots}</div>

			<div class="callout">
				<button
					class=move || {
						if demo.with(ModuloState::is_crashed) { "btn btn--success" } else { "btn btn--danger" }
					}
					on:click=on_toggle_crash
				>
					{move || {
						if demo.with(ModuloState::is_crashed) {
							"\u{21ba} RESTORE NODE 2"
						} else {
							"\u{1f4a5} SIMULATE CRASH (Remove Node 2)"
						}
					}}
				</button>
				<p>
					"When N changes from 3 to 2, " <b>"nearly all keys"</b>
					" remap to different locations because the modulo divisor changes. "
					"This causes a massive cache stampede on the database."
				</p>
			</div>
		</section>
	}
}
