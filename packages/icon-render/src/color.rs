/// Icon background, a saturated blue.
pub const BACKGROUND: Rgb = Rgb::new(41, 128, 185);
/// Glyph color.
pub const FOREGROUND: Rgb = Rgb::new(255, 255, 255);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rgb {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}
impl Rgb {
	#[must_use]
	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}
}

impl From<Rgb> for image::Rgb<u8> {
	fn from(value: Rgb) -> Self {
		image::Rgb([value.r, value.g, value.b])
	}
}

impl From<image::Rgb<u8>> for Rgb {
	fn from(value: image::Rgb<u8>) -> Self {
		let [r, g, b] = value.0;

		Self { r, g, b }
	}
}

#[cfg(test)]
mod tests {
	use crate::color::{BACKGROUND, Rgb};

	#[test]
	fn converts_to_and_from_image_pixels() {
		let pixel: image::Rgb<u8> = BACKGROUND.into();

		assert_eq!(pixel, image::Rgb([41, 128, 185]));
		assert_eq!(Rgb::from(pixel), BACKGROUND);
	}
}
