//! View state shared between async fetches and rendering.

mod fetch;
mod reactive;

pub use fetch::FetchState;
pub use reactive::spawn_fetch;
