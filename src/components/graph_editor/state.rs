use log::{debug, warn};

use super::animator::{PathAnimator, StepTicket};
use super::config::EditorConfig;
use super::error::EditorError;
use super::exchange::{self, PathRequest, PathResponse, PathTicket};
use super::graph::GraphStore;
use super::grid::{GridArea, Lattice, lattice_points};
use super::mode::{EditorMode, Tool};
use super::selection::Selection;
use super::transform::{BackgroundImage, Normalization};
use super::types::{Edge, NodeId, Point};

/// What a pointer press ended up doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerOutcome {
	NodeAdded(NodeId),
	NodeRemoved(NodeId),
	EdgeAdded(Edge),
	EdgeRemoved(Edge),
	Armed(NodeId),
	StartSelected(NodeId),
	StopAdded { id: NodeId, label: u32 },
	Ignored,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

/// Everything the editor knows, owned in one place. Each operation keeps
/// the selection, the armed node and the edges consistent with the node
/// set.
pub struct EditorState {
	pub viewport: Viewport,
	pick_radius: f64,
	edge_tolerance: f64,
	max_grid_size: u32,
	graph: GraphStore,
	mode: EditorMode,
	selection: Selection,
	background: Option<BackgroundImage>,
	lattice: Option<Lattice>,
	animator: PathAnimator,
}

impl EditorState {
	pub fn new(width: f64, height: f64, config: &EditorConfig) -> Self {
		Self {
			viewport: Viewport { width, height },
			pick_radius: config.pick_radius,
			edge_tolerance: config.edge_tolerance,
			max_grid_size: config.max_grid_size,
			graph: GraphStore::default(),
			mode: EditorMode::default(),
			selection: Selection::default(),
			background: None,
			lattice: None,
			animator: PathAnimator::default(),
		}
	}

	pub fn graph(&self) -> &GraphStore {
		&self.graph
	}

	pub fn mode(&self) -> EditorMode {
		self.mode
	}

	pub fn selection(&self) -> &Selection {
		&self.selection
	}

	pub fn background(&self) -> Option<&BackgroundImage> {
		self.background.as_ref()
	}

	pub fn lattice(&self) -> Option<Lattice> {
		self.lattice
	}

	pub fn animator(&self) -> &PathAnimator {
		&self.animator
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.viewport = Viewport { width, height };
	}

	pub fn normalization(&self) -> Normalization {
		self.background
			.map(|b| b.normalization())
			.unwrap_or_default()
	}

	// Pointer input

	/// Route a press to [`Self::node_click`] when it lands on a node and to
	/// [`Self::canvas_click`] otherwise.
	pub fn pointer_down(&mut self, at: Point) -> PointerOutcome {
		let outcome = match self.graph.node_at(at, self.pick_radius) {
			Some(id) => self.node_click(id),
			None => self.canvas_click(at),
		};
		debug!("pointer at ({:.1}, {:.1}) in {:?}: {:?}", at.x, at.y, self.mode, outcome);
		outcome
	}

	pub fn canvas_click(&mut self, at: Point) -> PointerOutcome {
		match self.mode {
			EditorMode::Erasing { .. } => {
				if let Some(id) = self.graph.node_at(at, self.pick_radius) {
					self.remove_node(id);
					PointerOutcome::NodeRemoved(id)
				} else if let Some(edge) = self
					.graph
					.edge_at(at, self.edge_tolerance)
					.and_then(|i| self.graph.remove_edge(i))
				{
					PointerOutcome::EdgeRemoved(edge)
				} else {
					PointerOutcome::Ignored
				}
			}
			EditorMode::Placing { .. } => PointerOutcome::NodeAdded(self.graph.add_node(at)),
			_ => PointerOutcome::Ignored,
		}
	}

	pub fn node_click(&mut self, id: NodeId) -> PointerOutcome {
		if !self.graph.contains(id) {
			return PointerOutcome::Ignored;
		}
		match self.mode {
			EditorMode::Erasing { .. } => {
				self.remove_node(id);
				PointerOutcome::NodeRemoved(id)
			}
			EditorMode::Drawing { armed: Some(from) } => {
				self.mode = self.mode.disarm();
				let edge = Edge { from, to: id };
				if self.graph.add_edge(from, id) {
					PointerOutcome::EdgeAdded(edge)
				} else {
					PointerOutcome::Ignored
				}
			}
			EditorMode::SelectingStart { .. } => {
				self.selection.set_start(id);
				self.mode = self.mode.finish_selecting();
				PointerOutcome::StartSelected(id)
			}
			EditorMode::SelectingStop { .. } => match self.selection.add_stop(id) {
				Some(label) => PointerOutcome::StopAdded { id, label },
				None => PointerOutcome::Ignored,
			},
			EditorMode::Placing { .. } | EditorMode::Drawing { armed: None } => {
				self.mode = self.mode.arm(id);
				PointerOutcome::Armed(id)
			}
		}
	}

	fn remove_node(&mut self, id: NodeId) {
		if self.graph.remove_node(id) {
			self.selection.forget(id);
			self.mode = self.mode.forget(id);
		}
	}

	// Commands

	pub fn use_tool(&mut self, tool: Tool) {
		self.mode = self.mode.use_tool(tool);
	}

	pub fn toggle_eraser(&mut self) {
		self.mode = self.mode.toggle_eraser();
	}

	pub fn begin_select_start(&mut self) {
		self.mode = self.mode.begin_select_start();
	}

	pub fn begin_select_stops(&mut self) {
		self.mode = self.mode.begin_select_stops();
	}

	pub fn finish_selecting(&mut self) {
		self.mode = self.mode.finish_selecting();
	}

	pub fn clear_start(&mut self) {
		self.selection.clear_start();
	}

	pub fn clear_stops(&mut self) {
		self.selection.clear_stops();
	}

	pub fn clear_path(&mut self) {
		self.animator.clear();
	}

	/// Drop every node, edge, selection and the current path. The
	/// background image stays.
	pub fn clear_all(&mut self) {
		self.graph.clear();
		self.selection.clear();
		self.mode = self.mode.disarm();
		self.lattice = None;
		self.animator.clear();
	}

	/// Fit a freshly decoded image of the given pixel size to the viewport.
	pub fn set_background(&mut self, natural_width: f64, natural_height: f64) -> Option<BackgroundImage> {
		self.background = BackgroundImage::fit(
			natural_width,
			natural_height,
			self.viewport.width,
			self.viewport.height,
		);
		self.background
	}

	// Grid

	/// Replace the graph with an `n × n` lattice over the background image,
	/// or over the viewport's largest top-left square when there is none.
	/// Sizes above the configured maximum leave the graph untouched.
	pub fn generate_grid(&mut self, n: u32) -> Result<Lattice, EditorError> {
		if n > self.max_grid_size {
			return Err(EditorError::GridTooLarge {
				requested: n,
				max: self.max_grid_size,
			});
		}
		let area = match self.background {
			Some(b) => GridArea {
				left: b.offset_x,
				top: b.offset_y,
				width: b.width,
				height: b.height,
			},
			None => GridArea::viewport(self.viewport.width, self.viewport.height),
		};
		self.clear_all();
		let ids = self.graph.replace_nodes(lattice_points(n, area));
		let lattice = Lattice {
			size: n,
			first_id: ids.start,
		};
		self.lattice = Some(lattice);
		Ok(lattice)
	}

	/// Replace the edge set with the 4-neighbour wiring of the last
	/// generated lattice. Lattice nodes removed since then are skipped.
	pub fn connect_grid_all(&mut self) -> Result<usize, EditorError> {
		let lattice = self.lattice.ok_or(EditorError::NoLattice)?;
		self.graph.set_edges(lattice.edges());
		Ok(self.graph.edges().len())
	}

	// Path exchange

	/// Validate the selection and build the request for the current graph.
	pub fn prepare_submit(&self) -> Result<(PathTicket, PathRequest), EditorError> {
		let request = exchange::build_request(&self.graph, &self.selection, self.normalization())?;
		let ticket = PathTicket {
			generation: self.graph.generation(),
		};
		Ok((ticket, request))
	}

	/// Start animating a returned path, unless the graph it was computed
	/// for is gone or it names nodes that no longer exist.
	pub fn apply_path(&mut self, ticket: PathTicket, response: PathResponse) -> Result<(), EditorError> {
		if ticket.generation != self.graph.generation() {
			warn!(
				"discarding path for graph generation {} (now {})",
				ticket.generation,
				self.graph.generation()
			);
			return Err(EditorError::StaleResponse);
		}
		if let Some(&id) = response.path.iter().find(|&&id| !self.graph.contains(id)) {
			warn!("discarding path with unknown node {id}");
			return Err(EditorError::UnknownNode(id));
		}
		self.animator.set_path(response.path);
		Ok(())
	}

	// Animation

	pub fn next_step(&self) -> Option<StepTicket> {
		self.animator.next_step()
	}

	pub fn fire_step(&mut self, ticket: StepTicket) -> bool {
		self.animator.fire(ticket)
	}

	/// Whether the pending animation step differs from `before`, i.e. a
	/// scheduled step must be cancelled or a new one scheduled.
	pub fn needs_reschedule(&self, before: Option<StepTicket>) -> bool {
		self.next_step() != before
	}
}
