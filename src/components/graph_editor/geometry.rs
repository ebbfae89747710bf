//! Distance helpers used by hit-testing.

use super::types::Point;

pub fn distance(p: Point, q: Point) -> f64 {
	(p.x - q.x).hypot(p.y - q.y)
}

/// Distance from `p` to the closest point of segment `a`–`b`.
///
/// The projection parameter onto the line through `a` and `b` is clamped to
/// `[0, 1]`, so points beyond either end measure to that endpoint. A
/// zero-length segment degrades to `distance(p, a)`.
pub fn point_to_segment_distance(p: Point, a: Point, b: Point) -> f64 {
	let (dx, dy) = (b.x - a.x, b.y - a.y);
	let len_sq = dx * dx + dy * dy;
	if len_sq == 0.0 {
		return distance(p, a);
	}
	let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
	distance(p, Point::new(a.x + t * dx, a.y + t * dy))
}
