//! Catalog filter options and their query-string encoding.

/// Optional filters for `GET /courses`. Empty values mean "no filter".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CourseFilters {
	/// Department name.
	pub department: Option<String>,
	/// Study level wire name.
	pub level: Option<String>,
	/// Teaching language.
	pub language: Option<String>,
	/// Term wire name.
	pub semester: Option<String>,
	/// Free-text search over code, title and description.
	pub search: Option<String>,
}

impl CourseFilters {
	/// Query parameters to send, in a fixed key order. Absent and blank values
	/// are left out rather than sent as empty strings.
	pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
		[
			("department", &self.department),
			("level", &self.level),
			("language", &self.language),
			("semester", &self.semester),
			("search", &self.search),
		]
		.into_iter()
		.filter_map(|(key, value)| {
			let value = value.as_deref()?.trim();
			(!value.is_empty()).then(|| (key, value.to_string()))
		})
		.collect()
	}

	/// Whether any filter (including search) is active.
	pub fn is_active(&self) -> bool {
		!self.query_pairs().is_empty()
	}

	/// Set one filter by its query key, as the dropdowns do. Unknown keys are ignored.
	pub fn set(&mut self, key: &str, value: &str) {
		let value = (!value.is_empty()).then(|| value.to_string());
		match key {
			"department" => self.department = value,
			"level" => self.level = value,
			"language" => self.language = value,
			"semester" => self.semester = value,
			"search" => self.search = value,
			_ => log::warn!("course-atlas: ignoring unknown filter key {key:?}"),
		}
	}

	/// Current value for a query key, empty when unset.
	pub fn get(&self, key: &str) -> String {
		match key {
			"department" => self.department.clone(),
			"level" => self.level.clone(),
			"language" => self.language.clone(),
			"semester" => self.semester.clone(),
			"search" => self.search.clone(),
			_ => None,
		}
		.unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_search_is_omitted() {
		let filters = CourseFilters {
			level: Some("master".into()),
			search: Some(String::new()),
			..Default::default()
		};
		assert_eq!(filters.query_pairs(), vec![("level", "master".to_string())]);
	}

	#[test]
	fn test_pairs_follow_key_order() {
		let mut filters = CourseFilters::default();
		filters.set("search", " graphs ");
		filters.set("semester", "fall");
		filters.set("department", "Informatics");
		assert_eq!(
			filters.query_pairs(),
			vec![
				("department", "Informatics".to_string()),
				("semester", "fall".to_string()),
				("search", "graphs".to_string()),
			]
		);
	}

	#[test]
	fn test_set_empty_clears() {
		let mut filters = CourseFilters::default();
		filters.set("language", "English");
		assert!(filters.is_active());
		assert_eq!(filters.get("language"), "English");
		filters.set("language", "");
		assert!(!filters.is_active());
		assert_eq!(filters.get("language"), "");
	}

	#[test]
	fn test_unknown_key_is_ignored() {
		let mut filters = CourseFilters::default();
		filters.set("instructor", "Knuth");
		assert_eq!(filters, CourseFilters::default());
	}
}
