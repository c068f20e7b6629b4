//! Sidebar linking the lessons in order.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::state::ui::TabId;

/// Lesson sidebar. The router marks the current lesson's link with
/// `aria-current="page"`, which the stylesheet highlights.
#[component]
pub fn TabNavigation() -> impl IntoView {
	let location = use_location();
	let title = move || {
		let page = TabId::from_path(&location.pathname.get()).map_or("Not Found", TabId::label);
		format!("{page} | CacheMaster")
	};

	view! {
		<Title text=title />

		<aside class="sidebar">
			<div class="sidebar__brand">
				<h1>"CacheMaster"</h1>
				<p>"Distributed Systems Interactive"</p>
			</div>

			<nav class="sidebar__tabs">
				{TabId::ALL
					.into_iter()
					.map(|tab| {
						view! {
							<A href=tab.path() exact=true>
								<span class="sidebar__icon">{tab.icon()}</span>
								<span>{tab.label()}</span>
							</A>
						}
					})
					.collect_view()}
			</nav>

			<div class="sidebar__footer">
				{format!("v{} \u{2022} Rust & Leptos", env!("CARGO_PKG_VERSION"))}
			</div>
		</aside>
	}
}
