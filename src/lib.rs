//! course-atlas: browse a university course catalog and explore prerequisites.
//!
//! A client-side rendered Leptos app. Course data comes from a REST API; the
//! prerequisite graph of a course is laid out on a circle and drawn on a canvas
//! with pan, zoom, drag and hover effects.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};

pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod layout;
pub mod models;
pub mod pages;
pub mod state;

pub use api::{ApiClient, CourseDetails};
pub use config::{AppConfig, ThemeName};
pub use error::{ApiError, ApiResult};
pub use layout::{GraphLayout, build_layout};
pub use state::FetchState;

use components::CourseDetailModal;
use pages::{CourseCatalog, CourseMap};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("course-atlas: logging initialized");
}

/// The two pages of the app shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
	/// Searchable course list.
	#[default]
	Catalog,
	/// Prerequisite graph explorer.
	CourseMap,
}

impl Tab {
	/// Navigation label.
	pub fn label(self) -> &'static str {
		match self {
			Tab::Catalog => "Course search",
			Tab::CourseMap => "Course map",
		}
	}
}

#[component]
fn TabButton(tab: Tab, active: RwSignal<Tab>) -> impl IntoView {
	view! {
		<button
			class="nav-tab"
			class:active=move || active.get() == tab
			on:click=move |_| active.set(tab)
		>
			{tab.label()}
		</button>
	}
}

/// Main application component.
///
/// Reads the host page configuration, provides the API client and config as
/// context, and switches between the catalog and the course map. Both pages
/// share one detail modal.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = AppConfig::load();
	let theme = config.theme;
	let client = ApiClient::new(&config.api_base_url).unwrap_or_else(|e| {
		warn!("course-atlas: {}; using the default API address", e);
		ApiClient::default()
	});
	provide_context(client);
	provide_context(config);

	let tab = RwSignal::new(Tab::default());
	let selected = RwSignal::new(None::<String>);
	let open_details = Callback::new(move |id: String| selected.set(Some(id)));

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme=theme.as_str() />
		<Title text="Course Atlas" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="app">
			<nav class="app-nav">
				<span class="app-brand">"Course Atlas"</span>
				<TabButton tab=Tab::Catalog active=tab />
				<TabButton tab=Tab::CourseMap active=tab />
			</nav>
			<main class="app-main">
				{move || match tab.get() {
					Tab::Catalog => view! { <CourseCatalog on_select=open_details /> }.into_any(),
					Tab::CourseMap => view! { <CourseMap on_details=open_details /> }.into_any(),
				}}
			</main>
			<CourseDetailModal course_id=selected />
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_tab_is_catalog() {
		assert_eq!(Tab::default(), Tab::Catalog);
		assert_eq!(Tab::CourseMap.label(), "Course map");
	}
}
