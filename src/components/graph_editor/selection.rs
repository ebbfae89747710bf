use super::types::{NodeId, StopNode};

/// Start node and ordered stop nodes chosen for the next path request.
#[derive(Clone, Debug, Default)]
pub struct Selection {
	start: Option<NodeId>,
	stops: Vec<StopNode>,
}

impl Selection {
	pub fn start(&self) -> Option<NodeId> {
		self.start
	}

	pub fn stops(&self) -> &[StopNode] {
		&self.stops
	}

	pub fn stop_label(&self, id: NodeId) -> Option<u32> {
		self.stops.iter().find(|s| s.id == id).map(|s| s.label)
	}

	pub fn set_start(&mut self, id: NodeId) {
		self.start = Some(id);
	}

	/// Appends a stop labelled with its 1-based position at insertion time.
	/// Labels of existing stops never change. Returns `None` if `id` is
	/// already a stop.
	pub fn add_stop(&mut self, id: NodeId) -> Option<u32> {
		if self.stop_label(id).is_some() {
			return None;
		}
		let label = self.stops.len() as u32 + 1;
		self.stops.push(StopNode { id, label });
		Some(label)
	}

	/// Drops `id` from the start slot and the stop list.
	pub fn forget(&mut self, id: NodeId) {
		if self.start == Some(id) {
			self.start = None;
		}
		self.stops.retain(|s| s.id != id);
	}

	pub fn clear_start(&mut self) {
		self.start = None;
	}

	pub fn clear_stops(&mut self) {
		self.stops.clear();
	}

	pub fn clear(&mut self) {
		self.clear_start();
		self.clear_stops();
	}
}
