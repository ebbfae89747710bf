//! Mapping between screen pixels and the image-normalized space the path
//! service works in.

use super::types::Point;

/// Placement of the background image, computed once when it is loaded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundImage {
	pub natural_width: f64,
	pub natural_height: f64,
	/// Displayed size in screen pixels.
	pub width: f64,
	pub height: f64,
	pub offset_x: f64,
	pub offset_y: f64,
	pub scale: f64,
}

impl BackgroundImage {
	/// Fit an image of the given pixel size inside the viewport, preserving
	/// aspect ratio and centring it. Returns `None` for empty images or
	/// viewports.
	pub fn fit(natural_width: f64, natural_height: f64, viewport_w: f64, viewport_h: f64) -> Option<Self> {
		if natural_width <= 0.0 || natural_height <= 0.0 || viewport_w <= 0.0 || viewport_h <= 0.0 {
			return None;
		}
		let scale = (viewport_w / natural_width).min(viewport_h / natural_height);
		let (width, height) = (natural_width * scale, natural_height * scale);
		Some(Self {
			natural_width,
			natural_height,
			width,
			height,
			offset_x: (viewport_w - width) / 2.0,
			offset_y: (viewport_h - height) / 2.0,
			scale,
		})
	}

	pub fn normalization(&self) -> Normalization {
		Normalization {
			offset_x: self.offset_x,
			offset_y: self.offset_y,
			scale: self.scale,
		}
	}
}

/// Affine screen → image-normalized transform. Identity when no image is
/// loaded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normalization {
	pub offset_x: f64,
	pub offset_y: f64,
	pub scale: f64,
}

impl Default for Normalization {
	fn default() -> Self {
		Self {
			offset_x: 0.0,
			offset_y: 0.0,
			scale: 1.0,
		}
	}
}

impl Normalization {
	pub fn to_normalized(&self, p: Point) -> Point {
		Point::new((p.x - self.offset_x) / self.scale, (p.y - self.offset_y) / self.scale)
	}

	pub fn to_screen(&self, p: Point) -> Point {
		Point::new(p.x * self.scale + self.offset_x, p.y * self.scale + self.offset_y)
	}
}
