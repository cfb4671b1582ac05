//! Summary card for one course in the catalog grid.

use leptos::callback::Callable;
use leptos::prelude::*;

use crate::models::Course;

/// Card showing code, title, credits, language, level, prerequisites and
/// semesters. Clicking it selects the course.
#[component]
pub fn CourseCard(course: Course, on_select: Callback<String>) -> impl IntoView {
	let id = course.id.clone();
	let prerequisites = course.prerequisites.clone();
	let semesters: Vec<_> = course.semester.iter().map(|s| s.display_name()).collect();

	view! {
		<article class="course-card" on:click=move |_| on_select.run(id.clone())>
			<header class="course-card-header">
				<h3>{course.id.clone()}</h3>
				<span class="credits-badge">{format!("{} credits", course.credits)}</span>
			</header>
			<h4 class="course-title">{course.title.clone()}</h4>
			{course
				.title_english
				.clone()
				.map(|t| view! { <p class="course-title-english">{t}</p> })}
			<p class="course-description">
				{course
					.description
					.clone()
					.unwrap_or_else(|| "No description available".to_string())}
			</p>
			<dl class="course-meta">
				<dt>"Language"</dt>
				<dd>{course.language.to_string()}</dd>
				<dt>"Level"</dt>
				<dd>{course.level.to_string()}</dd>
				{course
					.teaching_form
					.clone()
					.map(|t| view! { <dt>"Teaching"</dt><dd>{t}</dd> })}
			</dl>
			{(!prerequisites.is_empty())
				.then(|| {
					view! {
						<div class="course-prerequisites">
							<span class="meta-label">"Prerequisites: "</span>
							{prerequisites
								.iter()
								.map(|p| view! { <span class="tag">{p.id.clone()}</span> })
								.collect_view()}
						</div>
					}
				})}
			<div class="course-semesters">
				{semesters
					.into_iter()
					.map(|s| view! { <span class="tag tag-semester">{s}</span> })
					.collect_view()}
			</div>
		</article>
	}
}
