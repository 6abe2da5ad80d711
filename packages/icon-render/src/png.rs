use color_eyre::eyre::{Result, WrapErr};
use image::{ImageFormat, RgbImage};

/// Encodes an opaque RGB canvas; the PNG carries no alpha channel.
pub fn rgb_image_to_png_bytes(image: &RgbImage) -> Result<Vec<u8>> {
	let mut bytes = Vec::new();
	image
		.write_to(&mut std::io::Cursor::new(&mut bytes), ImageFormat::Png)
		.wrap_err("failed to encode icon as PNG")?;
	Ok(bytes)
}

#[cfg(test)]
mod tests {
	use image::{ColorType, GenericImageView};

	use super::*;

	#[test]
	fn png_signature_is_correct() {
		let image = RgbImage::from_pixel(2, 2, image::Rgb([1, 2, 3]));
		let png = rgb_image_to_png_bytes(&image).unwrap();
		assert!(png.starts_with(b"\x89PNG\r\n\x1a\n"));
	}

	#[test]
	fn decodes_as_rgb8_without_alpha() {
		let image = RgbImage::from_pixel(3, 5, image::Rgb([41, 128, 185]));
		let png = rgb_image_to_png_bytes(&image).unwrap();
		let decoded = image::load_from_memory_with_format(&png, ImageFormat::Png).unwrap();

		assert_eq!(decoded.color(), ColorType::Rgb8);
		assert_eq!(decoded.dimensions(), (3, 5));
		assert_eq!(decoded.to_rgb8(), image);
	}
}
