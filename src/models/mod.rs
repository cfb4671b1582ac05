//! Wire types shared by the API client, layout and views.

mod course;
mod dependency;
mod filters;

pub use course::{Course, CourseLevel, CourseRef, Language, Semester, with_prerequisites};
pub use dependency::{DependencyEdge, DependencyGraph, DependencyNode};
pub use filters::CourseFilters;
