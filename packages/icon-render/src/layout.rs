use thiserror::Error;

/// Largest edge length accepted before a canvas is allocated.
pub const MAX_SIZE: u32 = 16_384;
/// Smallest edge length whose margin keeps the glyph off the outermost pixels.
pub const MIN_SIZE: u32 = 12;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum RenderError {
	#[error("icon size must be between 1 and {max} pixels, got {size}")]
	InvalidSize { size: u32, max: u32 },

	#[error("icon size {size} is too small for the glyph (needs at least {min} pixels)")]
	DegenerateGlyph { size: u32, min: u32 },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Point {
	pub x: i32,
	pub y: i32,
}
impl Point {
	#[must_use]
	pub const fn new(x: i32, y: i32) -> Self {
		Self { x, y }
	}
}

/// Axis-aligned rectangle whose corners are both painted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rect {
	pub left: i32,
	pub top: i32,
	pub right: i32,
	pub bottom: i32,
}
impl Rect {
	#[must_use]
	pub fn from_points(a: Point, b: Point) -> Self {
		let (left, right) = if a.x <= b.x { (a.x, b.x) } else { (b.x, a.x) };
		let (top, bottom) = if a.y <= b.y { (a.y, b.y) } else { (b.y, a.y) };

		Self { left, top, right, bottom }
	}
}

/// Stroke geometry of the "N" glyph for one square icon size.
///
/// The glyph spans `margin..=size - margin` on both axes and is built from a left
/// bar, a diagonal quadrilateral and a right bar. Since the far edge is painted,
/// the right and bottom inset is `margin - 1` pixels, which stays positive only
/// for sizes of at least [`MIN_SIZE`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GlyphLayout {
	pub size: u32,
	pub margin: u32,
	pub thickness: u32,
}
impl GlyphLayout {
	pub fn for_size(size: u32) -> Result<Self, RenderError> {
		if size == 0 || size > MAX_SIZE {
			return Err(RenderError::InvalidSize { size, max: MAX_SIZE });
		}

		if size < MIN_SIZE {
			return Err(RenderError::DegenerateGlyph { size, min: MIN_SIZE });
		}

		let margin = size / 6;
		let thickness = size / 8;

		Ok(Self { size, margin, thickness })
	}

	#[must_use]
	pub fn left_stroke(&self) -> Rect {
		let (size, margin, thickness) = self.signed();

		Rect::from_points(
			Point::new(margin, margin),
			Point::new(margin + thickness, size - margin),
		)
	}

	/// Corners in drawing order: top-left, bottom-left, bottom-right, top-right.
	#[must_use]
	pub fn diagonal_stroke(&self) -> [Point; 4] {
		let (size, margin, thickness) = self.signed();

		[
			Point::new(margin + thickness, margin),
			Point::new(size - margin - thickness, size - margin),
			Point::new(size - margin, size - margin),
			Point::new(margin + thickness * 2, margin),
		]
	}

	#[must_use]
	pub fn right_stroke(&self) -> Rect {
		let (size, margin, thickness) = self.signed();

		Rect::from_points(
			Point::new(size - margin - thickness, margin),
			Point::new(size - margin, size - margin),
		)
	}

	// Bounded by `MAX_SIZE`, so the casts are lossless.
	fn signed(&self) -> (i32, i32, i32) {
		(self.size as i32, self.margin as i32, self.thickness as i32)
	}
}

#[cfg(test)]
mod tests {
	use crate::layout::{GlyphLayout, MAX_SIZE, MIN_SIZE, Point, Rect, RenderError};

	#[test]
	fn margin_and_thickness_truncate() {
		for (size, margin, thickness) in [(16, 2, 2), (48, 8, 6), (128, 21, 16)] {
			let layout = GlyphLayout::for_size(size).unwrap();

			assert_eq!(layout.margin, margin, "margin for {size}");
			assert_eq!(layout.thickness, thickness, "thickness for {size}");
		}
	}

	#[test]
	fn strokes_match_glyph_outline_at_48() {
		let layout = GlyphLayout::for_size(48).unwrap();

		assert_eq!(layout.left_stroke(), Rect { left: 8, top: 8, right: 14, bottom: 40 });
		assert_eq!(layout.right_stroke(), Rect { left: 34, top: 8, right: 40, bottom: 40 });
		assert_eq!(
			layout.diagonal_stroke(),
			[Point::new(14, 8), Point::new(34, 40), Point::new(40, 40), Point::new(20, 8)]
		);
	}

	#[test]
	fn zero_and_oversized_are_rejected() {
		assert_eq!(
			GlyphLayout::for_size(0),
			Err(RenderError::InvalidSize { size: 0, max: MAX_SIZE })
		);
		assert_eq!(
			GlyphLayout::for_size(MAX_SIZE + 1),
			Err(RenderError::InvalidSize { size: MAX_SIZE + 1, max: MAX_SIZE })
		);
	}

	#[test]
	fn sizes_below_twelve_are_degenerate() {
		for size in 1..MIN_SIZE {
			assert_eq!(
				GlyphLayout::for_size(size),
				Err(RenderError::DegenerateGlyph { size, min: MIN_SIZE }),
				"size {size}"
			);
		}

		let layout = GlyphLayout::for_size(MIN_SIZE).unwrap();

		assert_eq!(layout.margin, 2);
		assert_eq!(layout.right_stroke().right, 10);
		assert_eq!(layout.right_stroke().bottom, 10);
	}

	#[test]
	fn rect_from_points_is_normalized() {
		let rect = Rect::from_points(Point::new(10, 20), Point::new(5, 15));

		assert_eq!(rect, Rect { left: 5, top: 15, right: 10, bottom: 20 });
	}
}
