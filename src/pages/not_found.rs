use leptos::prelude::*;
use leptos_router::components::A;

/// Shown for any path outside the lessons.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<section class="lesson lesson--centered">
			<header class="lesson__intro">
				<h2>"Page not found"</h2>
				<p>"That lesson does not exist."</p>
			</header>
			<A href="/">"Back to the first lesson"</A>
		</section>
	}
}
