//! Glue between [`FetchState`] and Leptos signals.

use std::future::Future;

use leptos::prelude::*;

use super::FetchState;
use crate::error::ApiResult;

/// Start `request` for the view state in `slot`.
///
/// The slot enters its loading state immediately; the response is applied
/// only if no newer request was started in the meantime.
pub fn spawn_fetch<T, F>(slot: RwSignal<FetchState<T>>, request: F)
where
	T: Send + Sync + 'static,
	F: Future<Output = ApiResult<T>> + 'static,
{
	let Some(generation) = slot.try_update(FetchState::begin) else {
		return;
	};
	leptos::task::spawn_local(async move {
		let result = request.await;
		// The owning view may be gone by now; try_update is a no-op then.
		slot.try_update(|state| state.resolve(generation, result));
	});
}
