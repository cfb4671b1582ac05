//! Modal with the full description of one course.

use leptos::prelude::*;

use crate::api::{ApiClient, CourseDetails};
use crate::components::feedback::{ErrorMessage, LoadingSpinner};
use crate::state::{FetchState, spawn_fetch};

fn detail_body(details: CourseDetails) -> impl IntoView {
	let CourseDetails {
		course,
		dependencies,
	} = details;
	let required: Vec<_> = dependencies
		.required_courses(&course.id)
		.map(|n| {
			let text = match n.display_title() {
				Some(title) => format!("{}: {}", n.id, title),
				None => n.id.clone(),
			};
			view! { <li>{text}</li> }
		})
		.collect();

	view! {
		<div class="course-details">
			{course.description.clone().map(|d| {
				view! {
					<section>
						<h3>"Description"</h3>
						<p class="course-description-full">{d}</p>
					</section>
				}
			})}
			<dl class="detail-grid">
				<dt>"Credits"</dt>
				<dd>{course.credits}</dd>
				<dt>"Language"</dt>
				<dd>{course.language.to_string()}</dd>
				<dt>"Level"</dt>
				<dd>{course.level.to_string()}</dd>
				<dt>"Semester"</dt>
				<dd>{course.semester_label()}</dd>
			</dl>
			{course.exam_form.clone().map(|e| {
				view! {
					<section>
						<h4>"Exam"</h4>
						<p>{e}</p>
					</section>
				}
			})}
			{course.teaching_form.clone().map(|t| {
				view! {
					<section>
						<h4>"Teaching"</h4>
						<p>{t}</p>
					</section>
				}
			})}
			{(!required.is_empty()).then(|| {
				view! {
					<section class="course-requirements">
						<h4>"Course dependencies"</h4>
						<p>"This course requires:"</p>
						<ul>{required}</ul>
					</section>
				}
			})}
		</div>
	}
}

/// Course detail modal. Open while `course_id` holds an id; closing resets it.
///
/// The course and its dependency graph are fetched in parallel each time a
/// new id is set.
#[component]
pub fn CourseDetailModal(course_id: RwSignal<Option<String>>) -> impl IntoView {
	let client = use_context::<ApiClient>().unwrap_or_default();
	let details = RwSignal::new(FetchState::<CourseDetails>::default());

	Effect::new(move |_| match course_id.get() {
		Some(id) => {
			let client = client.clone();
			spawn_fetch(details, async move { client.course_details(&id).await });
		}
		None => details.update(FetchState::clear),
	});

	let close = move |_| course_id.set(None);
	let heading = move || {
		details.with(|d| match &d.data {
			Some(CourseDetails { course, .. }) if !d.loading => {
				format!("{} - {}", course.id, course.title)
			}
			_ => course_id.get().unwrap_or_default(),
		})
	};

	view! {
		<Show when=move || course_id.with(Option::is_some)>
			<div class="modal-backdrop" on:click=close></div>
			<div class="modal" role="dialog">
				<header class="modal-header">
					<h2>{heading}</h2>
					<button class="modal-close" on:click=close aria-label="Close">
						"×"
					</button>
				</header>
				<div class="modal-body">
					{move || {
						let state = details.get();
						if state.loading {
							view! { <LoadingSpinner message="Loading..." /> }.into_any()
						} else if let Some(error) = state.error {
							view! { <ErrorMessage message=error /> }.into_any()
						} else if let Some(data) = state.data {
							detail_body(data).into_any()
						} else {
							().into_any()
						}
					}}
				</div>
			</div>
		</Show>
	}
}
