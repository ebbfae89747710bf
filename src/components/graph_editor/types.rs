use serde::{Deserialize, Serialize};

/// Node identifier handed out by the graph store.
pub type NodeId = u32;

/// A position on the canvas, in screen pixels unless stated otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
	pub id: NodeId,
	pub x: f64,
	pub y: f64,
}

impl Node {
	pub fn position(&self) -> Point {
		Point::new(self.x, self.y)
	}
}

/// Connection between two nodes. Stored ordered, drawn and picked undirected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
	pub from: NodeId,
	pub to: NodeId,
}

impl Edge {
	pub fn touches(&self, id: NodeId) -> bool {
		self.from == id || self.to == id
	}
}

/// A stop with the label it was given when it was added.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StopNode {
	pub id: NodeId,
	pub label: u32,
}
