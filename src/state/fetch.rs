//! Loading / error / data slot for one view's fetched state.
//!
//! Each request is tagged with a generation number when it is dispatched.
//! Only the response carrying the current generation may touch the slot, so a
//! slow response for an earlier selection can never overwrite a newer one.

use log::{debug, warn};

use crate::error::ApiError;

/// Fetched state owned by a single view.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchState<T> {
	/// Last successfully fetched value. Kept across failures.
	pub data: Option<T>,
	/// A request for the current generation is in flight.
	pub loading: bool,
	/// Message of the last failure, cleared by the next request.
	pub error: Option<String>,
	generation: u64,
}

impl<T> Default for FetchState<T> {
	fn default() -> Self {
		Self {
			data: None,
			loading: false,
			error: None,
			generation: 0,
		}
	}
}

impl<T> FetchState<T> {
	/// Start a new request and return its generation tag. Previous data stays
	/// visible until the response arrives.
	pub fn begin(&mut self) -> u64 {
		self.generation += 1;
		self.loading = true;
		self.error = None;
		self.generation
	}

	/// Whether a response tagged `generation` may still be applied.
	pub fn is_current(&self, generation: u64) -> bool {
		generation == self.generation
	}

	/// Apply a response. Returns `false` and leaves the state untouched when
	/// `generation` is no longer current.
	pub fn resolve(&mut self, generation: u64, result: Result<T, ApiError>) -> bool {
		if !self.is_current(generation) {
			debug!(
				"course-atlas: discarding stale response (generation {}, current {})",
				generation, self.generation
			);
			return false;
		}

		self.loading = false;
		match result {
			Ok(data) => {
				self.data = Some(data);
				self.error = None;
			}
			Err(e) => {
				warn!("course-atlas: request failed: {}", e);
				self.error = Some(e.to_string());
			}
		}
		true
	}

	/// Drop data and error, and invalidate anything in flight.
	pub fn clear(&mut self) {
		self.generation += 1;
		self.data = None;
		self.loading = false;
		self.error = None;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_success_replaces_data() {
		let mut state = FetchState::default();
		let g = state.begin();
		assert!(state.loading);
		assert!(state.resolve(g, Ok(vec![1, 2, 3])));
		assert!(!state.loading);
		assert_eq!(state.data, Some(vec![1, 2, 3]));

		let g = state.begin();
		assert_eq!(state.data, Some(vec![1, 2, 3]), "old data visible while loading");
		state.resolve(g, Ok(vec![]));
		assert_eq!(state.data, Some(vec![]));
	}

	#[test]
	fn test_failure_keeps_previous_data() {
		let mut state = FetchState::default();
		let g = state.begin();
		state.resolve(g, Ok("IN1010"));

		let g = state.begin();
		state.resolve(g, Err(ApiError::Network("offline".into())));
		assert!(!state.loading);
		assert_eq!(state.data, Some("IN1010"));
		assert_eq!(state.error.as_deref(), Some("network error: offline"));

		let g = state.begin();
		assert!(state.error.is_none(), "begin clears the error flag");
		state.resolve(g, Ok("IN2010"));
		assert_eq!(state.data, Some("IN2010"));
	}

	#[test]
	fn test_stale_response_is_discarded() {
		let mut state = FetchState::default();
		let first = state.begin();
		let second = state.begin();

		assert!(state.resolve(second, Ok("IN2010")));
		assert!(!state.resolve(first, Ok("IN1000")));
		assert_eq!(state.data, Some("IN2010"));
		assert!(!state.loading);
	}

	#[test]
	fn test_stale_error_does_not_stop_loading() {
		let mut state: FetchState<u32> = FetchState::default();
		let first = state.begin();
		let _second = state.begin();
		assert!(!state.resolve(first, Err(ApiError::Decode("bad".into()))));
		assert!(state.loading);
		assert!(state.error.is_none());
	}

	#[test]
	fn test_clear_invalidates_in_flight() {
		let mut state = FetchState::default();
		let g = state.begin();
		state.clear();
		assert!(!state.is_current(g));
		assert!(!state.resolve(g, Ok(1)));
		assert_eq!(state.data, None);
	}
}
