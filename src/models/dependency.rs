//! Prerequisite graph as returned by `GET /courses/{id}/dependencies`.

use serde::{Deserialize, Serialize};

use super::course::CourseLevel;

/// A course in a dependency graph. Everything but the id is optional on the wire.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct DependencyNode {
	/// Course code.
	pub id: String,
	/// Display label, typically `"{id}\n{title}"`.
	#[serde(default)]
	pub label: Option<String>,
	/// Course title.
	#[serde(default)]
	pub title: Option<String>,
	/// Owning department.
	#[serde(default)]
	pub department: Option<String>,
	/// Study points.
	#[serde(default)]
	pub credits: Option<u32>,
	/// Study level.
	#[serde(default)]
	pub level: Option<CourseLevel>,
	/// Distance from the root course; 0 for the course itself.
	#[serde(default)]
	pub depth: Option<u32>,
}

impl DependencyNode {
	/// Node with only an id, as a bare graph endpoint.
	pub fn bare(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			label: None,
			title: None,
			department: None,
			credits: None,
			level: None,
			depth: None,
		}
	}

	/// Human-readable title: explicit title, else the last line of the label.
	pub fn display_title(&self) -> Option<&str> {
		self.title
			.as_deref()
			.or_else(|| self.label.as_deref().and_then(|l| l.lines().last()))
			.filter(|t| *t != self.id)
	}
}

/// Directed edge: `source` is a prerequisite of `target`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct DependencyEdge {
	/// Prerequisite course code.
	pub source: String,
	/// Course that requires `source`.
	pub target: String,
	/// Relation kind reported by the API, e.g. `prerequisite`.
	#[serde(default, rename = "type")]
	pub kind: Option<String>,
}

impl DependencyEdge {
	/// Edge without a kind.
	pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
			kind: None,
		}
	}
}

/// Dependency graph rooted at one course.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct DependencyGraph {
	/// Root course id, when the API reports it.
	#[serde(default)]
	pub course: Option<String>,
	/// The root course and everything it requires.
	#[serde(default)]
	pub nodes: Vec<DependencyNode>,
	/// Prerequisite relations between `nodes`.
	#[serde(default)]
	pub edges: Vec<DependencyEdge>,
}

impl DependencyGraph {
	/// Nodes other than the root course, i.e. the courses it requires.
	pub fn required_courses<'a>(
		&'a self,
		root_id: &'a str,
	) -> impl Iterator<Item = &'a DependencyNode> + 'a {
		self.nodes.iter().filter(move |n| n.id != root_id)
	}
}
