//! Searchable, filterable course catalog.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::components::{
	CourseCard, CourseFilterPanel, EmptyState, ErrorMessage, LoadingSpinner, SearchBar,
};
use crate::models::{Course, CourseFilters};
use crate::state::{FetchState, spawn_fetch};

/// Catalog page. Every change to the search text or a filter issues a new
/// listing request; only the newest response is shown.
#[component]
pub fn CourseCatalog(on_select: Callback<String>) -> impl IntoView {
	let client = use_context::<ApiClient>().unwrap_or_default();
	let search = RwSignal::new(String::new());
	let filters = RwSignal::new(CourseFilters::default());
	let courses = RwSignal::new(FetchState::<Vec<Course>>::default());

	Effect::new(move |_| {
		let request = CourseFilters {
			search: Some(search.get()),
			..filters.get()
		};
		let client = client.clone();
		spawn_fetch(courses, async move { client.courses(&request).await });
	});

	let results = move || {
		let state = courses.get();
		if state.loading {
			return view! { <LoadingSpinner message="Loading courses..." /> }.into_any();
		}
		if let Some(error) = state.error {
			return view! { <ErrorMessage message=format!("Could not load courses: {error}") /> }
				.into_any();
		}
		let list = state.data.unwrap_or_default();
		let count = list.len();
		let grid = if list.is_empty() {
			view! {
				<EmptyState
					icon="📚"
					title="No courses found"
					hint="Try adjusting your search or filters."
				/>
			}
			.into_any()
		} else {
			view! {
				<div class="course-grid">
					{list
						.into_iter()
						.map(|course| view! { <CourseCard course=course on_select=on_select /> })
						.collect_view()}
				</div>
			}
			.into_any()
		};
		view! {
			<p class="result-count">"Found " <strong>{count}</strong> " courses"</p>
			{grid}
		}
		.into_any()
	};

	view! {
		<div class="catalog-page">
			<header class="page-header">
				<h1>"Course search"</h1>
				<p>"Search and filter all courses in the catalog"</p>
			</header>
			<SearchBar value=search placeholder="Search by course code, title or description..." />
			<CourseFilterPanel filters=filters />
			<section class="catalog-results">{results}</section>
		</div>
	}
}
