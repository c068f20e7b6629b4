use leptos::prelude::*;
use log::{debug, info};

use crate::config::DATA_CHUNK_GB;
use crate::state::gauge::MemoryGauge;

/// Lesson 1: one machine's RAM fills up and the cache falls over.
#[component]
pub fn ProblemPage() -> impl IntoView {
	let gauge = RwSignal::new(MemoryGauge::default());

	let on_add = move |_| {
		gauge.update(|g| {
			if g.add_data() {
				debug!("local cache holds {}GB of {}GB", g.used_gb, g.capacity_gb);
			}
		});
	};
	let on_reboot = move |_| {
		gauge.update(MemoryGauge::reset);
		info!("local cache rebooted");
	};

	view! {
		<section class="lesson lesson--centered">
			<header class="lesson__intro">
				<h2>"The Single Node Bottleneck"</h2>
				<p>
					"A traditional local cache is fast but limited by the physical hardware of a single machine. "
					"What happens when your data grows beyond 100%?"
				</p>
			</header>

			<div class="server">
				<div class="server__icon">"\u{1f5a5}"</div>
				<div class="server__label">
					{move || format!("Local Cache (Max {}GB)", gauge.with(|g| g.capacity_gb))}
				</div>

				<div class="gauge">
					<div
						class=move || format!("gauge__fill {}", gauge.with(|g| g.level().css_class()))
						style:height=move || format!("{}%", gauge.with(MemoryGauge::percentage))
					/>
					<div class="gauge__grid">
						<div />
						<div />
						<div />
						<div />
					</div>
				</div>

				<div class="server__status">
					{move || gauge.with(|g| format!("{}GB / {}GB", g.used_gb, g.capacity_gb))}
				</div>

				<Show when=move || gauge.with(MemoryGauge::is_overflowing)>
					<div class="server__crash">
						<div class="server__crash-icon">"\u{26a0}"</div>
						<h3>"SYSTEM CRASH!"</h3>
						<p>"Out of Memory Exception."</p>
						<button class="btn btn--light" on:click=on_reboot>
							"Reboot System"
						</button>
					</div>
				</Show>
			</div>

			<div class="lesson__actions">
				<button
					class="btn btn--primary"
					on:click=on_add
					disabled=move || !gauge.with(MemoryGauge::can_add)
				>
					{format!("\u{1f5c4} Add {DATA_CHUNK_GB}GB Data")}
				</button>
			</div>
		</section>
	}
}
