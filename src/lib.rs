//! CacheMaster: interactive lessons on distributed caching, as a Leptos
//! client-side app.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod components;
mod config;
mod pages;
pub mod ring;
mod state;

use crate::components::nav::TabNavigation;

// Lesson pages
use crate::pages::cluster::ClusterPage;
use crate::pages::consistent::ConsistentPage;
use crate::pages::modulo::ModuloPage;
use crate::pages::not_found::NotFound;
use crate::pages::problem::ProblemPage;
use crate::pages::quiz::QuizPage;
use crate::pages::virtual_nodes::VirtualNodesPage;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// The lesson sidebar plus one route per lesson; unknown paths get a 404.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<div class="app">
				<TabNavigation />
				<main class="app__main">
					<Routes fallback=|| view! { <NotFound /> }>
						<Route path=path!("/") view=ProblemPage />
						<Route path=path!("/cluster") view=ClusterPage />
						<Route path=path!("/modulo") view=ModuloPage />
						<Route path=path!("/consistent") view=ConsistentPage />
						<Route path=path!("/virtual") view=VirtualNodesPage />
						<Route path=path!("/quiz") view=QuizPage />
					</Routes>
				</main>
			</div>
		</Router>
	}
}
