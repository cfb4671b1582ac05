//! Free-text course search input.

use leptos::prelude::*;

/// Text input bound to `value`; every keystroke updates the signal.
#[component]
pub fn SearchBar(
	value: RwSignal<String>,
	#[prop(into, default = "Search courses...".to_string())] placeholder: String,
) -> impl IntoView {
	view! {
		<div class="search-bar">
			<input
				type="search"
				class="search-input"
				placeholder=placeholder
				prop:value=move || value.get()
				on:input=move |ev| value.set(event_target_value(&ev))
			/>
		</div>
	}
}
