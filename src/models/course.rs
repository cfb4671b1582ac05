//! Course records as returned by the catalog API.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Study level of a course.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
	/// Bachelor level.
	Bachelor,
	/// Master level.
	Master,
	/// Doctoral level.
	Phd,
}

impl CourseLevel {
	/// All levels in display order.
	pub const ALL: [CourseLevel; 3] = [Self::Bachelor, Self::Master, Self::Phd];

	/// Wire value, also used as the filter query value.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Bachelor => "bachelor",
			Self::Master => "master",
			Self::Phd => "phd",
		}
	}

	/// Capitalised name for the UI.
	pub fn display_name(self) -> &'static str {
		match self {
			Self::Bachelor => "Bachelor",
			Self::Master => "Master",
			Self::Phd => "PhD",
		}
	}
}

impl fmt::Display for CourseLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.display_name())
	}
}

/// Teaching language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Language {
	/// Taught in Norwegian.
	#[default]
	Norwegian,
	/// Taught in English.
	English,
}

impl Language {
	/// Every language, in filter order.
	pub const ALL: [Language; 2] = [Self::Norwegian, Self::English];

	/// Wire name, also used as the filter value.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Norwegian => "Norwegian",
			Self::English => "English",
		}
	}
}

impl fmt::Display for Language {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Semester a course is offered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Semester {
	/// Autumn term.
	Fall,
	/// Spring term.
	Spring,
}

impl Semester {
	/// Both terms, in filter order.
	pub const ALL: [Semester; 2] = [Self::Fall, Self::Spring];

	/// Wire name, also used as the filter value.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Fall => "fall",
			Self::Spring => "spring",
		}
	}

	/// Term name for the UI.
	pub fn display_name(self) -> &'static str {
		match self {
			Self::Fall => "Autumn",
			Self::Spring => "Spring",
		}
	}
}

/// Weak reference to another course. The API nests whole course objects here;
/// only the id is kept.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct CourseRef {
	/// Course code.
	pub id: String,
}

/// A course from the catalog.
///
/// The listing and single-course endpoints share this shape; the optional fields
/// are usually only filled by the latter. Anything absent is simply not shown.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Course {
	/// Unique course code, e.g. `IN1010`.
	pub id: String,
	/// Title in the teaching language.
	pub title: String,
	/// English title, when different.
	#[serde(default)]
	pub title_english: Option<String>,
	/// Course description.
	#[serde(default)]
	pub description: Option<String>,
	/// Study points.
	pub credits: u32,
	/// Owning department.
	#[serde(default)]
	pub department: Option<String>,
	/// Study level.
	pub level: CourseLevel,
	/// Teaching language.
	#[serde(default)]
	pub language: Language,
	/// Terms the course is taught in.
	#[serde(default)]
	pub semester: BTreeSet<Semester>,
	/// Required courses, in API order.
	#[serde(default)]
	pub prerequisites: Vec<CourseRef>,
	/// Responsible lecturer.
	#[serde(default)]
	pub instructor: Option<String>,
	/// How the course is assessed.
	#[serde(default)]
	pub exam_form: Option<String>,
	/// Lectures, seminars, labs.
	#[serde(default)]
	pub teaching_form: Option<String>,
	/// Scheduled hours per week.
	#[serde(default)]
	pub weekly_hours: Option<u32>,
}

impl Course {
	/// Whether the course builds on any other course.
	pub fn has_prerequisites(&self) -> bool {
		!self.prerequisites.is_empty()
	}

	/// Semester names joined for display, e.g. "Autumn, Spring".
	pub fn semester_label(&self) -> String {
		self.semester
			.iter()
			.map(|s| s.display_name())
			.collect::<Vec<_>>()
			.join(", ")
	}
}

/// Courses worth showing on the course map: those with at least one prerequisite.
pub fn with_prerequisites(courses: Vec<Course>) -> Vec<Course> {
	courses.into_iter().filter(Course::has_prerequisites).collect()
}
