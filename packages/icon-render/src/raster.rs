use image::RgbImage;

use crate::color::Rgb;
use crate::layout::{Point, Rect};

/// Paints `rect` (both corners included), clipped to the canvas.
pub fn fill_rect(canvas: &mut RgbImage, rect: Rect, color: Rgb) {
	let Some((x0, x1)) = clip_span(canvas.width(), i64::from(rect.left), i64::from(rect.right))
	else {
		return;
	};
	let Some((y0, y1)) = clip_span(canvas.height(), i64::from(rect.top), i64::from(rect.bottom))
	else {
		return;
	};
	let pixel = image::Rgb::from(color);

	for y in y0..=y1 {
		for x in x0..=x1 {
			canvas.put_pixel(x, y, pixel);
		}
	}
}

/// Scanline fill of a convex polygon, edges included.
///
/// Each row between the lowest and highest vertex is painted from the leftmost
/// to the rightmost edge crossing. Pixels whose center lies exactly on an edge
/// are painted. Fewer than three points paint nothing.
pub fn fill_convex_polygon(canvas: &mut RgbImage, points: &[Point], color: Rgb) {
	if points.len() < 3 {
		return;
	}

	let (Some(min_y), Some(max_y)) =
		(points.iter().map(|p| p.y).min(), points.iter().map(|p| p.y).max())
	else {
		return;
	};
	let Some((y0, y1)) = clip_span(canvas.height(), i64::from(min_y), i64::from(max_y)) else {
		return;
	};
	let pixel = image::Rgb::from(color);

	for y in y0..=y1 {
		let Some((lo, hi)) = row_extent(points, y as i32) else {
			continue;
		};
		let Some((x0, x1)) = clip_span(canvas.width(), lo.ceil() as i64, hi.floor() as i64)
		else {
			continue;
		};

		for x in x0..=x1 {
			canvas.put_pixel(x, y, pixel);
		}
	}
}

fn row_extent(points: &[Point], y: i32) -> Option<(f64, f64)> {
	let mut extent: Option<(f64, f64)> = None;

	for (i, &a) in points.iter().enumerate() {
		let b = points[(i + 1) % points.len()];
		let Some((lo, hi)) = edge_crossing(a, b, y) else {
			continue;
		};

		extent = Some(match extent {
			Some((min, max)) => (min.min(lo), max.max(hi)),
			None => (lo, hi),
		});
	}

	extent
}

fn edge_crossing(a: Point, b: Point, y: i32) -> Option<(f64, f64)> {
	if y < a.y.min(b.y) || y > a.y.max(b.y) {
		return None;
	}
	if a.y == b.y {
		let (lo, hi) = if a.x <= b.x { (a.x, b.x) } else { (b.x, a.x) };

		return Some((f64::from(lo), f64::from(hi)));
	}

	let t = f64::from(y - a.y) / f64::from(b.y - a.y);
	let x = f64::from(a.x) + t * f64::from(b.x - a.x);

	Some((x, x))
}

/// Intersects the inclusive span `lo..=hi` with `0..len`.
fn clip_span(len: u32, lo: i64, hi: i64) -> Option<(u32, u32)> {
	if len == 0 {
		return None;
	}

	let lo = lo.max(0);
	let hi = hi.min(i64::from(len) - 1);

	if lo > hi {
		return None;
	}

	Some((lo as u32, hi as u32))
}
