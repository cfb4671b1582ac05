//! Course map: prerequisite graph for a selected course.

use leptos::callback::Callable;
use leptos::prelude::*;
use log::debug;

use crate::api::ApiClient;
use crate::components::course_graph::Theme;
use crate::components::{CourseGraphCanvas, EmptyState, ErrorMessage, LoadingSpinner};
use crate::config::AppConfig;
use crate::layout::{GraphLayout, build_layout};
use crate::models::{Course, CourseFilters, with_prerequisites};
use crate::state::{FetchState, spawn_fetch};

/// Height of the graph canvas in pixels.
const GRAPH_HEIGHT: f64 = 600.0;

/// Grid of courses that have prerequisites; the selected one is highlighted.
#[component]
fn CourseSelector(courses: Vec<Course>, selected: RwSignal<Option<String>>) -> impl IntoView {
	courses
		.into_iter()
		.map(|course| {
			let id = course.id.clone();
			let is_selected = {
				let id = id.clone();
				move || selected.with(|s| s.as_deref() == Some(id.as_str()))
			};
			view! {
				<button
					class="course-choice"
					class:selected=is_selected
					on:click=move |_| selected.set(Some(id.clone()))
				>
					<div class="course-choice-id">{course.id.clone()}</div>
					<div class="course-choice-title">{course.title.clone()}</div>
					<div class="course-choice-meta">
						{format!("{} prerequisites", course.prerequisites.len())}
					</div>
				</button>
			}
		})
		.collect_view()
}

/// Status line and canvas for the selected course's dependency graph.
///
/// The canvas stays mounted while a new graph loads; only the status part
/// reacts to the loading flag.
fn dependency_panel(
	graph: RwSignal<FetchState<GraphLayout>>,
	layout: Memo<GraphLayout>,
	theme: Theme,
	selected: RwSignal<Option<String>>,
) -> impl IntoView {
	let on_select = Callback::new(move |id: String| selected.set(Some(id)));
	let status = move || {
		let (loading, error, has_data) =
			graph.with(|g| (g.loading, g.error.clone(), g.data.is_some()));
		let is_empty = layout.with(GraphLayout::is_empty);
		view! {
			{error.map(|e| view! { <ErrorMessage message=format!("Failed to load dependencies: {e}") /> })}
			{(loading && !has_data).then(|| view! { <LoadingSpinner message="Loading dependencies..." /> })}
			{(has_data && is_empty).then(|| {
				view! {
					<EmptyState
						icon="🧭"
						title="No dependencies"
						hint="This course has no recorded prerequisites."
					/>
				}
			})}
		}
	};

	view! {
		{status}
		<Show when=move || !layout.with(GraphLayout::is_empty)>
			<div class="graph-container" class:stale=move || graph.with(|g| g.loading)>
				<CourseGraphCanvas
					layout=layout
					theme=theme.clone()
					on_select=on_select
					height=Some(GRAPH_HEIGHT)
				/>
				<div class="graph-overlay">
					<p>"Click courses to explore"</p>
					<p class="subtitle">
						"Selected: " <strong>{move || selected.get().unwrap_or_default()}</strong>
					</p>
				</div>
			</div>
		</Show>
	}
}

/// Course map page.
///
/// Lists courses with prerequisites, auto-selects the first, and shows the
/// dependency graph of the selection. Clicking a course in the graph selects it.
#[component]
pub fn CourseMap(#[prop(optional)] on_details: Option<Callback<String>>) -> impl IntoView {
	let client = use_context::<ApiClient>().unwrap_or_default();
	let theme = Theme::for_name(use_context::<AppConfig>().unwrap_or_default().theme);

	let courses = RwSignal::new(FetchState::<Vec<Course>>::default());
	let selected = RwSignal::new(None::<String>);
	let graph = RwSignal::new(FetchState::<GraphLayout>::default());

	{
		let client = client.clone();
		spawn_fetch(courses, async move {
			client
				.courses(&CourseFilters::default())
				.await
				.map(with_prerequisites)
		});
	}

	// Auto-select the first course once the list arrives.
	Effect::new(move |_| {
		let first = courses.with(|c| c.data.as_ref().and_then(|list| list.first().map(|c| c.id.clone())));
		if let Some(first) = first {
			if selected.with_untracked(Option::is_none) {
				selected.set(Some(first));
			}
		}
	});

	Effect::new(move |_| match selected.get() {
		Some(id) => {
			debug!("course-atlas: loading dependency graph for {}", id);
			let client = client.clone();
			spawn_fetch(graph, async move {
				client.dependencies(&id).await.map(|g| build_layout(&g))
			});
		}
		None => graph.update(FetchState::clear),
	});

	let layout = Memo::new(move |_| graph.with(|g| g.data.clone().unwrap_or_default()));

	let content = move || {
		let state = courses.get();
		if state.loading {
			return view! { <LoadingSpinner message="Loading course map..." /> }.into_any();
		}
		if let Some(error) = state.error {
			return view! { <ErrorMessage message=format!("Could not load courses: {error}") /> }
				.into_any();
		}
		let list = state.data.unwrap_or_default();
		if list.is_empty() {
			return view! {
				<EmptyState
					icon="🗺️"
					title="No courses with prerequisites found"
					hint="The course map shows courses that build on other courses."
				/>
			}
			.into_any();
		}

		view! {
			<section class="course-selector">
				<h2>"Choose a course to explore"</h2>
				<div class="course-choice-grid">
					<CourseSelector courses=list selected=selected />
				</div>
			</section>
			<section class="dependency-view">
				<header class="dependency-header">
					<h3>{move || format!("Dependencies for {}", selected.get().unwrap_or_default())}</h3>
					{on_details.map(|cb| {
						view! {
							<button
								class="btn-secondary"
								on:click=move |_| {
									if let Some(id) = selected.get_untracked() {
										cb.run(id);
									}
								}
							>
								"Course details"
							</button>
						}
					})}
				</header>
				{dependency_panel(graph, layout, theme.clone(), selected)}
			</section>
		}
		.into_any()
	};

	view! {
		<div class="course-map-page">
			<header class="page-header">
				<h1>"Course map"</h1>
				<p>"Visualise prerequisite dependencies between courses"</p>
			</header>
			{content}
		</div>
	}
}
