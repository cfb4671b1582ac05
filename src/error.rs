//! Errors raised at the fetch boundary.

use thiserror::Error;

/// Failure talking to the course API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
	/// The request never produced a response (DNS, CORS, connection refused, ...).
	#[error("network error: {0}")]
	Network(String),
	/// The server answered with a non-success status.
	#[error("request to {url} failed with status {status}")]
	Status { status: u16, url: String },
	/// The response body did not have the expected shape.
	#[error("failed to decode response: {0}")]
	Decode(String),
	/// The configured API address cannot be used to build endpoint URLs.
	#[error("invalid API URL: {0}")]
	InvalidUrl(String),
}

impl From<url::ParseError> for ApiError {
	fn from(err: url::ParseError) -> Self {
		Self::InvalidUrl(err.to_string())
	}
}

impl From<gloo_net::Error> for ApiError {
	fn from(err: gloo_net::Error) -> Self {
		match err {
			gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
			other => Self::Network(other.to_string()),
		}
	}
}

/// Result alias for API calls.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_error_display() {
		let err = ApiError::Status {
			status: 404,
			url: "http://localhost:8000/courses/IN9999".to_string(),
		};
		assert_eq!(
			err.to_string(),
			"request to http://localhost:8000/courses/IN9999 failed with status 404"
		);
		assert_eq!(
			ApiError::Network("connection refused".into()).to_string(),
			"network error: connection refused"
		);
	}

	#[test]
	fn test_invalid_url_from_parse_error() {
		let err: ApiError = url::Url::parse("not a url").unwrap_err().into();
		assert_eq!(err, ApiError::InvalidUrl("relative URL without a base".into()));
	}

	#[test]
	fn test_decode_error_from_serde() {
		let serde_err = serde_json::from_str::<u32>("\"x\"").unwrap_err();
		let err: ApiError = gloo_net::Error::SerdeError(serde_err).into();
		assert!(matches!(err, ApiError::Decode(_)));
	}
}
