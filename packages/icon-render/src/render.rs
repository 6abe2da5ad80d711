use std::fs;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use image::RgbImage;

use crate::color::{BACKGROUND, FOREGROUND};
use crate::layout::{GlyphLayout, RenderError};
use crate::png::rgb_image_to_png_bytes;
use crate::raster::{fill_convex_polygon, fill_rect};

/// Draws the "N" glyph on a fresh `size` x `size` canvas.
///
/// Strokes are painted left bar, diagonal, right bar, all in [`FOREGROUND`] over a
/// [`BACKGROUND`] fill. The output depends on `size` alone.
pub fn render_icon(size: u32) -> Result<RgbImage, RenderError> {
	let layout = GlyphLayout::for_size(size)?;

	tracing::debug!(
		size = layout.size,
		margin = layout.margin,
		thickness = layout.thickness,
		"Computed glyph layout."
	);

	let mut canvas = RgbImage::from_pixel(size, size, BACKGROUND.into());

	fill_rect(&mut canvas, layout.left_stroke(), FOREGROUND);
	fill_convex_polygon(&mut canvas, &layout.diagonal_stroke(), FOREGROUND);
	fill_rect(&mut canvas, layout.right_stroke(), FOREGROUND);

	Ok(canvas)
}

/// Renders the icon and writes it to `path` as PNG, replacing any existing file.
pub fn write_icon(size: u32, path: &Path) -> Result<()> {
	let canvas = render_icon(size)?;
	let bytes = rgb_image_to_png_bytes(&canvas)?;

	fs::write(path, bytes)
		.wrap_err_with(|| format!("Failed to write icon to {}", path.display()))?;

	tracing::debug!(size, path = %path.display(), "Wrote icon.");

	Ok(())
}
