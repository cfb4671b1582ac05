//! HTTP client for the course API.

use gloo_net::http::{Request, Response};
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{Course, CourseFilters, DependencyGraph};

/// A course together with its dependency graph, as shown in the detail view.
#[derive(Clone, Debug, PartialEq)]
pub struct CourseDetails {
	/// The course itself, with its description fields.
	pub course: Course,
	/// Its prerequisite graph.
	pub dependencies: DependencyGraph,
}

/// Thin client over the three catalog endpoints. Cheap to clone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
	/// `None` when the configured address was unusable; every request then
	/// fails with [`ApiError::InvalidUrl`].
	base_url: Option<Url>,
}

impl Default for ApiClient {
	fn default() -> Self {
		Self::new(&AppConfig::default().api_base_url).unwrap_or_else(|e| {
			warn!("course-atlas: default API address unusable: {}", e);
			Self { base_url: None }
		})
	}
}

impl ApiClient {
	/// Client for the API at `base_url`. The address must be absolute and able
	/// to carry a path, e.g. `https://courses.example.org/api`.
	pub fn new(base_url: &str) -> ApiResult<Self> {
		let url = Url::parse(base_url.trim())?;
		if url.cannot_be_a_base() {
			return Err(ApiError::InvalidUrl(format!("{url} cannot carry a path")));
		}
		Ok(Self {
			base_url: Some(url),
		})
	}

	/// The parsed API address, if usable.
	pub fn base_url(&self) -> Option<&Url> {
		self.base_url.as_ref()
	}

	/// `GET /courses` with the active filters as query parameters.
	pub async fn courses(&self, filters: &CourseFilters) -> ApiResult<Vec<Course>> {
		let url = self.courses_url(filters)?;
		let courses: Vec<Course> = get_json(&url).await?;
		info!("course-atlas: loaded {} courses", courses.len());
		Ok(courses)
	}

	/// `GET /courses/{id}`.
	pub async fn course(&self, id: &str) -> ApiResult<Course> {
		get_json(&self.course_url(id)?).await
	}

	/// `GET /courses/{id}/dependencies`.
	pub async fn dependencies(&self, id: &str) -> ApiResult<DependencyGraph> {
		let graph: DependencyGraph = get_json(&self.dependencies_url(id)?).await?;
		info!(
			"course-atlas: loaded dependencies for {}: {} nodes, {} edges",
			id,
			graph.nodes.len(),
			graph.edges.len()
		);
		Ok(graph)
	}

	/// Course and dependency graph fetched concurrently.
	pub async fn course_details(&self, id: &str) -> ApiResult<CourseDetails> {
		let (course, dependencies) =
			futures::future::try_join(self.course(id), self.dependencies(id)).await?;
		Ok(CourseDetails {
			course,
			dependencies,
		})
	}

	/// Listing URL; only filters with a value become query parameters.
	pub fn courses_url(&self, filters: &CourseFilters) -> ApiResult<Url> {
		let mut url = self.endpoint(&["courses"])?;
		let pairs = filters.query_pairs();
		if !pairs.is_empty() {
			url.query_pairs_mut().extend_pairs(pairs);
		}
		Ok(url)
	}

	/// Single-course URL. `id` is percent-encoded as one path segment.
	pub fn course_url(&self, id: &str) -> ApiResult<Url> {
		self.endpoint(&["courses", id])
	}

	/// Dependency-graph URL for course `id`.
	pub fn dependencies_url(&self, id: &str) -> ApiResult<Url> {
		self.endpoint(&["courses", id, "dependencies"])
	}

	fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
		let mut url = self
			.base_url
			.clone()
			.ok_or_else(|| ApiError::InvalidUrl("no API address configured".to_string()))?;
		url.path_segments_mut()
			.map_err(|()| ApiError::InvalidUrl("API address cannot carry a path".to_string()))?
			.pop_if_empty()
			.extend(segments);
		Ok(url)
	}
}

async fn get_json<T: DeserializeOwned>(url: &Url) -> ApiResult<T> {
	debug!("course-atlas: GET {}", url);
	let response = Request::get(url.as_str()).send().await?;
	decode(response, url).await
}

async fn decode<T: DeserializeOwned>(response: Response, url: &Url) -> ApiResult<T> {
	if !response.ok() {
		return Err(ApiError::Status {
			status: response.status(),
			url: url.to_string(),
		});
	}
	Ok(response.json::<T>().await?)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn client(base: &str) -> ApiClient {
		ApiClient::new(base).expect("valid base URL")
	}

	#[test]
	fn test_urls() {
		let client = client("http://localhost:8000/");
		assert_eq!(
			client.course_url("IN1010").expect("url").as_str(),
			"http://localhost:8000/courses/IN1010"
		);
		assert_eq!(
			client.dependencies_url("IN2010").expect("url").as_str(),
			"http://localhost:8000/courses/IN2010/dependencies"
		);
		assert_eq!(
			client.courses_url(&CourseFilters::default()).expect("url").as_str(),
			"http://localhost:8000/courses"
		);
	}

	#[test]
	fn test_base_path_is_kept() {
		for base in ["https://api.example.org/v1", "https://api.example.org/v1/"] {
			assert_eq!(
				client(base).course_url("IN1010").expect("url").as_str(),
				"https://api.example.org/v1/courses/IN1010"
			);
		}
	}

	#[test]
	fn test_path_segment_is_encoded() {
		let client = client("http://localhost:8000");
		assert_eq!(
			client.course_url("a/b c").expect("url").as_str(),
			"http://localhost:8000/courses/a%2Fb%20c"
		);
		assert_eq!(
			client.dependencies_url("ø").expect("url").path(),
			"/courses/%C3%B8/dependencies"
		);
	}

	#[test]
	fn test_listing_url_carries_set_filters_only() {
		let filters = CourseFilters {
			level: Some("master".into()),
			search: Some(String::new()),
			..Default::default()
		};
		let url = client("http://localhost:8000").courses_url(&filters).expect("url");
		assert_eq!(url.as_str(), "http://localhost:8000/courses?level=master");
	}

	#[test]
	fn test_unusable_base_url_is_rejected() {
		assert!(matches!(ApiClient::new(""), Err(ApiError::InvalidUrl(_))));
		assert!(matches!(ApiClient::new("mailto:courses@example.org"), Err(ApiError::InvalidUrl(_))));

		let empty = ApiClient { base_url: None };
		assert!(matches!(empty.course_url("IN1010"), Err(ApiError::InvalidUrl(_))));
	}
}
