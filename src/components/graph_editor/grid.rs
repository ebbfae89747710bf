//! Procedural n × n lattices and their 4-neighbour wiring.

use super::types::{Edge, NodeId, Point};

/// Rectangle the lattice is spread over, in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridArea {
	pub left: f64,
	pub top: f64,
	pub width: f64,
	pub height: f64,
}

impl GridArea {
	/// Square in the viewport's top-left corner sized by its shorter side.
	pub fn viewport(width: f64, height: f64) -> Self {
		let side = width.min(height);
		Self {
			left: 0.0,
			top: 0.0,
			width: side,
			height: side,
		}
	}
}

/// Describes a generated lattice so the connector does not depend on the
/// node array still being in generation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lattice {
	/// Nodes per row (and rows per lattice).
	pub size: u32,
	/// Id of the node at lattice index 0; the rest follow contiguously.
	pub first_id: NodeId,
}

impl Lattice {
	pub fn node_count(&self) -> u32 {
		self.size * self.size
	}

	pub fn id_at(&self, index: u32) -> NodeId {
		self.first_id + index
	}

	/// Right and down neighbour edges for every lattice index.
	pub fn edges(&self) -> Vec<Edge> {
		let n = self.size;
		let mut edges = Vec::with_capacity((2 * n * n.saturating_sub(1)) as usize);
		for k in 0..self.node_count() {
			let (row, col) = (k / n, k % n);
			if col + 1 < n {
				edges.push(Edge {
					from: self.id_at(k),
					to: self.id_at(k + 1),
				});
			}
			if row + 1 < n {
				edges.push(Edge {
					from: self.id_at(k),
					to: self.id_at(k + n),
				});
			}
		}
		edges
	}
}

/// Lattice positions in generation order: outer loop over x, inner over y,
/// indices `1..=n` on both axes with spacing `dimension / (n + 1)`.
pub fn lattice_points(n: u32, area: GridArea) -> Vec<Point> {
	let spacing_x = area.width / (n as f64 + 1.0);
	let spacing_y = area.height / (n as f64 + 1.0);
	let mut points = Vec::with_capacity((n * n) as usize);
	for i in 1..=n {
		for j in 1..=n {
			points.push(Point::new(
				area.left + i as f64 * spacing_x,
				area.top + j as f64 * spacing_y,
			));
		}
	}
	points
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn points_cover_interior_of_area() {
		let area = GridArea {
			left: 100.0,
			top: 50.0,
			width: 300.0,
			height: 600.0,
		};
		let pts = lattice_points(2, area);
		assert_eq!(
			pts,
			vec![
				Point::new(200.0, 250.0),
				Point::new(200.0, 450.0),
				Point::new(300.0, 250.0),
				Point::new(300.0, 450.0),
			]
		);
	}

	#[test]
	fn viewport_area_uses_shorter_side() {
		let area = GridArea::viewport(1200.0, 800.0);
		assert_eq!((area.width, area.height), (800.0, 800.0));
		let pts = lattice_points(3, area);
		assert_eq!(pts[0], Point::new(200.0, 200.0));
		assert_eq!(pts[8], Point::new(600.0, 600.0));
	}

	#[test]
	fn edge_count_is_two_n_n_minus_one() {
		for n in 0..7u32 {
			let lattice = Lattice { size: n, first_id: 0 };
			assert_eq!(lattice.edges().len() as u32, 2 * n * n.saturating_sub(1));
		}
	}

	#[test]
	fn neighbours_are_adjacent_lattice_points() {
		let lattice = Lattice { size: 3, first_id: 10 };
		let pts = lattice_points(3, GridArea::viewport(400.0, 400.0));
		for e in lattice.edges() {
			let (a, b) = (pts[(e.from - 10) as usize], pts[(e.to - 10) as usize]);
			let step = (a.x - b.x).abs() + (a.y - b.y).abs();
			assert!((step - 100.0).abs() < 1e-9, "{e:?} spans {step}");
		}
	}
}
