mod color;
mod layout;
mod png;
mod raster;
mod render;

pub use crate::color::{BACKGROUND, FOREGROUND, Rgb};
pub use crate::layout::{GlyphLayout, MAX_SIZE, MIN_SIZE, Point, Rect, RenderError};
pub use crate::png::rgb_image_to_png_bytes;
pub use crate::raster::{fill_convex_polygon, fill_rect};
pub use crate::render::{render_icon, write_icon};
