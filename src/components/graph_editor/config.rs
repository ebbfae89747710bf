use std::time::Duration;

/// Default endpoint of the shortest-path service.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:5000/calculate-path";

pub const NODE_RADIUS: f64 = 8.0;
pub const PICK_RADIUS: f64 = 10.0;
pub const EDGE_TOLERANCE: f64 = 10.0;
pub const STEP_INTERVAL: Duration = Duration::from_millis(500);
pub const MAX_GRID_SIZE: u32 = 100;

/// Tunables for one editor instance.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
	pub service_url: String,
	/// Drawn node radius.
	pub node_radius: f64,
	/// Pointer distance under which a node counts as hit.
	pub pick_radius: f64,
	/// Pointer distance under which an edge counts as hit (eraser only).
	pub edge_tolerance: f64,
	/// Delay between two revealed path edges.
	pub step_interval: Duration,
	/// Largest accepted lattice side.
	pub max_grid_size: u32,
}

impl Default for EditorConfig {
	fn default() -> Self {
		Self {
			service_url: option_env!("PATH_SERVICE_URL")
				.unwrap_or(DEFAULT_SERVICE_URL)
				.to_string(),
			node_radius: NODE_RADIUS,
			pick_radius: PICK_RADIUS,
			edge_tolerance: EDGE_TOLERANCE,
			step_interval: STEP_INTERVAL,
			max_grid_size: MAX_GRID_SIZE,
		}
	}
}
