//! Filter dropdowns for the catalog.

use leptos::prelude::*;

use crate::models::{CourseFilters, CourseLevel, Language, Semester};

/// Departments offered in the department dropdown, as (value, label).
const DEPARTMENTS: [(&str, &str); 2] = [("Informatics", "Informatics"), ("Mathematics", "Mathematics")];

/// One labelled `<select>` bound to a single filter key.
#[component]
fn FilterSelect(
	filters: RwSignal<CourseFilters>,
	key: &'static str,
	label: &'static str,
	all_label: &'static str,
	options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
	view! {
		<label class="filter">
			<span class="filter-label">{label}</span>
			<select
				prop:value=move || filters.with(|f| f.get(key))
				on:change=move |ev| {
					let value = event_target_value(&ev);
					filters.update(|f| f.set(key, &value));
				}
			>
				<option value="">{all_label}</option>
				{options
					.into_iter()
					.map(|(value, text)| view! { <option value=value>{text}</option> })
					.collect_view()}
			</select>
		</label>
	}
}

/// Department, level, language and semester filters with a reset button.
#[component]
pub fn CourseFilterPanel(filters: RwSignal<CourseFilters>) -> impl IntoView {
	let levels: Vec<_> = CourseLevel::ALL.iter().map(|l| (l.as_str(), l.display_name())).collect();
	let languages: Vec<_> = Language::ALL.iter().map(|l| (l.as_str(), l.as_str())).collect();
	let semesters: Vec<_> = Semester::ALL
		.iter()
		.map(|s| (s.as_str(), s.display_name()))
		.collect();

	view! {
		<section class="filter-panel">
			<h2>"Filter courses"</h2>
			<div class="filter-grid">
				<FilterSelect
					filters=filters
					key="department"
					label="Department"
					all_label="All departments"
					options=DEPARTMENTS.to_vec()
				/>
				<FilterSelect filters=filters key="level" label="Level" all_label="All levels" options=levels />
				<FilterSelect
					filters=filters
					key="language"
					label="Language"
					all_label="All languages"
					options=languages
				/>
				<FilterSelect
					filters=filters
					key="semester"
					label="Semester"
					all_label="All semesters"
					options=semesters
				/>
			</div>
			<button
				class="btn-secondary"
				disabled=move || !filters.with(CourseFilters::is_active)
				on:click=move |_| filters.set(CourseFilters::default())
			>
				"Reset filters"
			</button>
		</section>
	}
}
