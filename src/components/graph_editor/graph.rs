//! In-memory node and edge collections.

use std::ops::Range;

use super::geometry::{distance, point_to_segment_distance};
use super::types::{Edge, Node, NodeId, Point};

#[derive(Clone, Debug, Default)]
pub struct GraphStore {
	nodes: Vec<Node>,
	edges: Vec<Edge>,
	next_id: NodeId,
	/// Bumped whenever the whole node set is replaced.
	generation: u64,
}

impl GraphStore {
	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	pub fn generation(&self) -> u64 {
		self.generation
	}

	pub fn node(&self, id: NodeId) -> Option<&Node> {
		self.nodes.iter().find(|n| n.id == id)
	}

	pub fn contains(&self, id: NodeId) -> bool {
		self.node(id).is_some()
	}

	pub fn add_node(&mut self, at: Point) -> NodeId {
		let id = self.next_id;
		self.next_id += 1;
		self.nodes.push(Node { id, x: at.x, y: at.y });
		id
	}

	/// Adds an edge between two existing nodes. Returns `false` and leaves
	/// the store untouched if either endpoint is missing.
	pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> bool {
		if !self.contains(from) || !self.contains(to) {
			return false;
		}
		self.edges.push(Edge { from, to });
		true
	}

	/// Removes a node and every edge touching it.
	pub fn remove_node(&mut self, id: NodeId) -> bool {
		let before = self.nodes.len();
		self.nodes.retain(|n| n.id != id);
		if self.nodes.len() == before {
			return false;
		}
		self.edges.retain(|e| !e.touches(id));
		true
	}

	pub fn remove_edge(&mut self, index: usize) -> Option<Edge> {
		(index < self.edges.len()).then(|| self.edges.remove(index))
	}

	/// Replaces every node with fresh ones at `points`, ids counting from 0.
	/// Edges are dropped.
	pub fn replace_nodes(&mut self, points: impl IntoIterator<Item = Point>) -> Range<NodeId> {
		self.clear();
		let first = self.next_id;
		for p in points {
			self.add_node(p);
		}
		first..self.next_id
	}

	/// Replaces the edge set, dropping edges with a missing endpoint.
	pub fn set_edges(&mut self, edges: impl IntoIterator<Item = Edge>) {
		let edges: Vec<Edge> = edges
			.into_iter()
			.filter(|e| self.contains(e.from) && self.contains(e.to))
			.collect();
		self.edges = edges;
	}

	pub fn clear(&mut self) {
		self.nodes.clear();
		self.edges.clear();
		self.next_id = 0;
		self.generation += 1;
	}

	/// Closest node strictly within `radius` of `p`.
	pub fn node_at(&self, p: Point, radius: f64) -> Option<NodeId> {
		self.nodes
			.iter()
			.map(|n| (n.id, distance(p, n.position())))
			.filter(|&(_, d)| d < radius)
			.min_by(|a, b| a.1.total_cmp(&b.1))
			.map(|(id, _)| id)
	}

	/// Index of the closest edge strictly within `tolerance` of `p`.
	pub fn edge_at(&self, p: Point, tolerance: f64) -> Option<usize> {
		self.edges
			.iter()
			.enumerate()
			.filter_map(|(i, e)| Some((i, self.segment(e)?)))
			.map(|(i, (a, b))| (i, point_to_segment_distance(p, a, b)))
			.filter(|&(_, d)| d < tolerance)
			.min_by(|a, b| a.1.total_cmp(&b.1))
			.map(|(i, _)| i)
	}

	/// Endpoint positions of an edge, if both nodes exist.
	pub fn segment(&self, edge: &Edge) -> Option<(Point, Point)> {
		Some((
			self.node(edge.from)?.position(),
			self.node(edge.to)?.position(),
		))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn triangle() -> GraphStore {
		let mut g = GraphStore::default();
		let a = g.add_node(Point::new(0.0, 0.0));
		let b = g.add_node(Point::new(100.0, 0.0));
		let c = g.add_node(Point::new(0.0, 100.0));
		assert!(g.add_edge(a, b));
		assert!(g.add_edge(b, c));
		assert!(g.add_edge(c, a));
		g
	}

	fn edges_are_consistent(g: &GraphStore) -> bool {
		g.edges().iter().all(|e| g.contains(e.from) && g.contains(e.to))
	}

	#[test]
	fn ids_follow_creation_order() {
		let g = triangle();
		let ids: Vec<_> = g.nodes().iter().map(|n| n.id).collect();
		assert_eq!(ids, vec![0, 1, 2]);
	}

	#[test]
	fn remove_node_cascades_to_edges() {
		let mut g = triangle();
		assert!(g.remove_node(1));
		assert_eq!(g.edges(), &[Edge { from: 2, to: 0 }]);
		assert!(edges_are_consistent(&g));
		assert!(!g.remove_node(1));
	}

	#[test]
	fn ids_stay_unique_after_removal() {
		let mut g = triangle();
		g.remove_node(0);
		let id = g.add_node(Point::new(5.0, 5.0));
		assert_eq!(id, 3);
	}

	#[test]
	fn mixed_add_remove_keeps_edges_consistent() {
		let mut g = GraphStore::default();
		for i in 0..12 {
			g.add_node(Point::new(i as f64 * 10.0, 0.0));
		}
		for i in 0..11 {
			g.add_edge(i, i + 1);
			g.add_edge(i, (i * 5) % 12);
		}
		for id in [3, 7, 0, 11, 5] {
			g.remove_node(id);
			assert!(edges_are_consistent(&g));
			g.add_node(Point::new(1.0, 1.0));
		}
	}

	#[test]
	fn edge_to_missing_node_is_refused() {
		let mut g = triangle();
		assert!(!g.add_edge(0, 42));
		assert_eq!(g.edges().len(), 3);
	}

	#[test]
	fn duplicate_edges_are_allowed() {
		let mut g = triangle();
		assert!(g.add_edge(0, 1));
		assert_eq!(g.edges().len(), 4);
	}

	#[test]
	fn node_pick_prefers_the_closest() {
		let mut g = GraphStore::default();
		g.add_node(Point::new(0.0, 0.0));
		let near = g.add_node(Point::new(6.0, 0.0));
		assert_eq!(g.node_at(Point::new(4.0, 0.0), 10.0), Some(near));
		assert_eq!(g.node_at(Point::new(30.0, 0.0), 10.0), None);
	}

	#[test]
	fn pick_radius_is_exclusive() {
		let mut g = GraphStore::default();
		g.add_node(Point::new(0.0, 0.0));
		assert_eq!(g.node_at(Point::new(10.0, 0.0), 10.0), None);
		assert_eq!(g.node_at(Point::new(9.99, 0.0), 10.0), Some(0));
	}

	#[test]
	fn edge_pick_uses_segment_distance() {
		let g = triangle();
		assert_eq!(g.edge_at(Point::new(50.0, 4.0), 10.0), Some(0));
		assert_eq!(g.edge_at(Point::new(50.0, 50.0), 10.0), Some(1));
		assert_eq!(g.edge_at(Point::new(150.0, 150.0), 10.0), None);
	}

	#[test]
	fn replace_nodes_restarts_ids() {
		let mut g = triangle();
		let generation = g.generation();
		let ids = g.replace_nodes([Point::new(1.0, 1.0), Point::new(2.0, 2.0)]);
		assert_eq!(ids, 0..2);
		assert!(g.edges().is_empty());
		assert!(g.generation() > generation);
	}
}
