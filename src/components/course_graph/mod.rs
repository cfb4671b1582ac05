//! Interactive course dependency graph.
//!
//! Renders a [`GraphLayout`](crate::layout::GraphLayout) on an HTML canvas with:
//! - Nodes at their layout positions, coloured by study level
//! - Directed edges with arrowheads and a flowing dash animation
//! - Pan, zoom, node dragging and click-to-select
//! - Smooth highlight transitions on hover
//!
//! # Example
//!
//! ```ignore
//! let layout = RwSignal::new(build_layout(&graph));
//! view! {
//!     <CourseGraphCanvas
//!         layout=layout
//!         on_select=Callback::new(move |id: String| selected.set(Some(id)))
//!     />
//! }
//! ```

mod component;
mod render;
mod scale;
mod state;
pub mod theme;

pub use component::CourseGraphCanvas;
pub use theme::Theme;
