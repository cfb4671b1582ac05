//! Top-level pages of the app shell.

mod catalog;
mod course_map;

pub use catalog::CourseCatalog;
pub use course_map::CourseMap;
