//! The mutable output buffer tiles are pasted into.

use image::{DynamicImage, Rgb, RgbImage, imageops};

use crate::config::PosterSize;

/// Background-filled RGB buffer of fixed size. Planners mutate it only through
/// [`PosterCanvas::paste`]; once composition finishes it is handed off intact.
#[derive(Debug)]
pub struct PosterCanvas {
    buffer: RgbImage,
}

impl PosterCanvas {
    #[must_use]
    pub fn new(size: PosterSize, background: [u8; 3]) -> Self {
        Self {
            buffer: RgbImage::from_pixel(size.width, size.height, Rgb(background)),
        }
    }

    /// Overwrite the pixels under `tile` at offset `(x, y)`.
    ///
    /// Planners only produce in-bounds offsets; anything hanging past the edge
    /// is clipped by the blit.
    pub fn paste(&mut self, tile: &DynamicImage, x: u32, y: u32) {
        imageops::replace(&mut self.buffer, &tile.to_rgb8(), i64::from(x), i64::from(y));
    }

    #[must_use]
    pub fn into_image(self) -> RgbImage {
        self.buffer
    }
}
