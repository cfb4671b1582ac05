//! UI components.

pub mod course_card;
pub mod course_detail_modal;
pub mod course_filters;
pub mod course_graph;
pub mod feedback;
pub mod search_bar;

pub use course_card::CourseCard;
pub use course_detail_modal::CourseDetailModal;
pub use course_filters::CourseFilterPanel;
pub use course_graph::CourseGraphCanvas;
pub use feedback::{EmptyState, ErrorMessage, LoadingSpinner};
pub use search_bar::SearchBar;
