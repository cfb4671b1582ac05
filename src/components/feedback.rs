//! Loading and error indicators.

use leptos::prelude::*;

/// Spinner with an optional caption.
#[component]
pub fn LoadingSpinner(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
	view! {
		<div class="loading" role="status">
			<div class="spinner"></div>
			{message.map(|m| view! { <p class="loading-message">{m}</p> })}
		</div>
	}
}

/// Error box shown when a fetch fails.
#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
	view! {
		<div class="error-message" role="alert">
			<p class="error-title">"Error"</p>
			<p class="error-detail">{message}</p>
		</div>
	}
}

/// Placeholder for empty results.
#[component]
pub fn EmptyState(
	#[prop(into)] icon: String,
	#[prop(into)] title: String,
	#[prop(into)] hint: String,
) -> impl IntoView {
	view! {
		<div class="empty-state">
			<div class="empty-icon">{icon}</div>
			<h3>{title}</h3>
			<p>{hint}</p>
		</div>
	}
}
