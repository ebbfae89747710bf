use graph_path_editor::components::graph_editor::exchange::{PathResponse, decode_response};
use graph_path_editor::components::graph_editor::mode::Tool;
use graph_path_editor::components::graph_editor::types::{Edge, Point};
use graph_path_editor::components::graph_editor::{
	EditorConfig, EditorError, EditorState, PointerOutcome,
};

fn editor() -> EditorState {
	EditorState::new(1024.0, 768.0, &EditorConfig::default())
}

fn select(s: &mut EditorState, start: u32, stops: &[u32]) {
	s.begin_select_start();
	s.node_click(start);
	s.begin_select_stops();
	for &id in stops {
		s.node_click(id);
	}
	s.finish_selecting();
}

#[test]
fn draw_an_edge_between_two_placed_nodes() {
	let mut s = editor();
	assert_eq!(s.pointer_down(Point::new(10.0, 10.0)), PointerOutcome::NodeAdded(0));
	assert_eq!(s.pointer_down(Point::new(30.0, 10.0)), PointerOutcome::NodeAdded(1));

	s.use_tool(Tool::Path);
	assert_eq!(s.pointer_down(Point::new(10.0, 10.0)), PointerOutcome::Armed(0));
	assert_eq!(
		s.pointer_down(Point::new(30.0, 10.0)),
		PointerOutcome::EdgeAdded(Edge { from: 0, to: 1 })
	);
	assert_eq!(s.graph().edges(), &[Edge { from: 0, to: 1 }]);
	assert_eq!(s.mode().armed(), None);
}

#[test]
fn eraser_removes_edge_near_segment_and_keeps_nodes() {
	let mut s = editor();
	s.pointer_down(Point::new(10.0, 10.0));
	s.pointer_down(Point::new(50.0, 10.0));
	s.use_tool(Tool::Path);
	s.node_click(0);
	s.node_click(1);

	s.toggle_eraser();
	// Over 20px from both node centres, 5px from the segment.
	let outcome = s.pointer_down(Point::new(30.0, 15.0));
	assert_eq!(outcome, PointerOutcome::EdgeRemoved(Edge { from: 0, to: 1 }));
	assert!(s.graph().edges().is_empty());
	assert_eq!(s.graph().nodes().len(), 2);
}

#[test]
fn grid_generation_and_connection_counts() {
	for n in [1u32, 2, 5, 8] {
		let mut s = editor();
		s.generate_grid(n).unwrap();
		assert_eq!(s.graph().nodes().len() as u32, n * n);
		assert!(s.graph().edges().is_empty());
		assert_eq!(s.connect_grid_all(), Ok((2 * n * (n - 1)) as usize));
	}
}

#[test]
fn connecting_twice_does_not_duplicate_edges() {
	let mut s = editor();
	s.generate_grid(4).unwrap();
	s.connect_grid_all().unwrap();
	assert_eq!(s.connect_grid_all(), Ok(24));
}

#[test]
fn submit_requires_start_and_stops() {
	let mut s = editor();
	s.pointer_down(Point::new(100.0, 100.0));
	s.pointer_down(Point::new(200.0, 100.0));
	assert_eq!(s.prepare_submit().unwrap_err(), EditorError::MissingStart);

	s.begin_select_start();
	s.node_click(0);
	let err = s.prepare_submit().unwrap_err();
	assert_eq!(err, EditorError::MissingStops);
	assert!(err.is_validation());
	assert!(!EditorError::StaleResponse.is_validation());

	s.begin_select_stops();
	s.node_click(1);
	let (_, request) = s.prepare_submit().unwrap();
	assert_eq!(request.start_node, 0);
	assert_eq!(request.stop_nodes, vec![1]);
}

#[test]
fn returned_path_is_revealed_one_edge_per_step() {
	let mut s = editor();
	for x in [100.0, 200.0, 300.0, 400.0, 500.0, 600.0] {
		s.pointer_down(Point::new(x, 100.0));
	}
	select(&mut s, 2, &[5]);
	let (ticket, _) = s.prepare_submit().unwrap();
	s.apply_path(ticket, decode_response(r#"{"path":[2,0,5]}"#).unwrap())
		.unwrap();

	let mut cursors = vec![s.animator().cursor()];
	while let Some(step) = s.next_step() {
		let revealed = s.animator().revealed_segments().count();
		assert!(s.fire_step(step));
		assert_eq!(s.animator().revealed_segments().count(), revealed + 1);
		cursors.push(s.animator().cursor());
	}
	assert_eq!(cursors, vec![0, 1, 2]);
	assert_eq!(
		s.animator().revealed_segments().collect::<Vec<_>>(),
		vec![(2, 0), (0, 5)]
	);
}

#[test]
fn new_response_restarts_animation() {
	let mut s = editor();
	for x in [100.0, 200.0, 300.0] {
		s.pointer_down(Point::new(x, 100.0));
	}
	select(&mut s, 0, &[2]);
	let (ticket, _) = s.prepare_submit().unwrap();
	s.apply_path(ticket, PathResponse { path: vec![0, 1, 2] }).unwrap();
	let stale = s.next_step().unwrap();
	s.fire_step(stale);

	s.apply_path(ticket, PathResponse { path: vec![0, 2] }).unwrap();
	assert_eq!(s.animator().cursor(), 0);
	assert!(!s.fire_step(stale));
}

#[test]
fn image_normalizes_submitted_coordinates() {
	let mut s = editor();
	// 512×384 image fits 1024×768 at scale 2 with no offset.
	s.set_background(512.0, 384.0).unwrap();
	s.pointer_down(Point::new(100.0, 60.0));
	s.pointer_down(Point::new(300.0, 200.0));
	select(&mut s, 0, &[1]);
	let (_, request) = s.prepare_submit().unwrap();
	assert_eq!((request.nodes[0].x, request.nodes[0].y), (50.0, 30.0));
	assert_eq!((request.nodes[1].x, request.nodes[1].y), (150.0, 100.0));
}

#[test]
fn grid_size_above_limit_is_reported_not_fatal() {
	let mut s = editor();
	s.generate_grid(3).unwrap();
	let err = s.generate_grid(70_000).unwrap_err();
	assert!(matches!(err, EditorError::GridTooLarge { requested: 70_000, .. }));
	assert_eq!(s.graph().nodes().len(), 9);
	assert_eq!(s.connect_grid_all(), Ok(12));
}
