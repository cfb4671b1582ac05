//! Course map state transitions: selection changes and racing responses.

#![allow(unused_crate_dependencies)]

use course_atlas::error::ApiError;
use course_atlas::layout::{GraphLayout, build_layout};
use course_atlas::models::{DependencyEdge, DependencyGraph, DependencyNode};
use course_atlas::state::FetchState;

fn dependencies_of_in2010() -> DependencyGraph {
	DependencyGraph {
		course: Some("IN2010".into()),
		nodes: ["IN2010", "IN1010", "IN1000"]
			.into_iter()
			.map(DependencyNode::bare)
			.collect(),
		edges: vec![
			DependencyEdge::new("IN1010", "IN2010"),
			DependencyEdge::new("IN1000", "IN1010"),
		],
	}
}

fn dependencies_of_in1000() -> DependencyGraph {
	DependencyGraph {
		course: Some("IN1000".into()),
		nodes: vec![DependencyNode::bare("IN1000")],
		edges: Vec::new(),
	}
}

#[test]
fn test_selecting_course_without_prerequisites_replaces_layout() {
	let mut graph = FetchState::<GraphLayout>::default();

	let first = graph.begin();
	assert!(graph.resolve(first, Ok(build_layout(&dependencies_of_in2010()))));
	assert_eq!(graph.data.as_ref().map(|l| l.nodes.len()), Some(3));

	// New selection: previous graph stays visible while loading.
	let second = graph.begin();
	assert!(graph.loading);
	assert_eq!(graph.data.as_ref().map(|l| l.nodes.len()), Some(3));

	assert!(graph.resolve(second, Ok(build_layout(&dependencies_of_in1000()))));
	let layout = graph.data.as_ref().expect("layout after resolve");
	assert_eq!(layout.nodes.len(), 1);
	assert_eq!(layout.nodes[0].id, "IN1000");
	assert!(layout.edges.is_empty());
	assert!(layout.node("IN2010").is_none());
	assert!(!graph.loading);
}

#[test]
fn test_slow_response_for_previous_selection_is_ignored() {
	let mut graph = FetchState::<GraphLayout>::default();

	let slow = graph.begin();
	let fast = graph.begin();

	assert!(graph.resolve(fast, Ok(build_layout(&dependencies_of_in1000()))));
	assert!(!graph.resolve(slow, Ok(build_layout(&dependencies_of_in2010()))));

	let layout = graph.data.as_ref().expect("current layout");
	assert_eq!(layout.nodes.len(), 1);
	assert_eq!(layout.nodes[0].id, "IN1000");
}

#[test]
fn test_failure_surfaces_error_and_stops_loading() {
	let mut graph = FetchState::<GraphLayout>::default();
	let g = graph.begin();
	assert!(graph.resolve(
		g,
		Err(ApiError::Status {
			status: 500,
			url: "http://localhost:8000/courses/IN2010/dependencies".into(),
		})
	));
	assert!(!graph.loading);
	assert_eq!(
		graph.error.as_deref(),
		Some("request to http://localhost:8000/courses/IN2010/dependencies failed with status 500")
	);
	assert!(graph.data.is_none());
}

#[test]
fn test_clearing_selection_invalidates_in_flight_request() {
	let mut graph = FetchState::<GraphLayout>::default();
	let g = graph.begin();
	graph.clear();
	assert!(!graph.resolve(g, Ok(build_layout(&dependencies_of_in2010()))));
	assert!(graph.data.is_none());
	assert!(!graph.loading);
}
