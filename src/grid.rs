//! Mode 1: near-square grid poster.
//!
//! Every image gets its own cell in input order. Landscape and square images
//! are stretch-resized to the full cell; a portrait image takes the left half
//! of its cell and the portrait that follows it in the input takes the right
//! half, tracked by an explicit cursor over the portrait subsequence.

use image::DynamicImage;
use image::imageops::FilterType;
use tracing::info;

use crate::canvas::PosterCanvas;
use crate::config::PosterSize;
use crate::error::Error;
use crate::layout::{Grid, is_portrait};

/// Cursor over the portrait subsequence of the input, in input order.
///
/// Advances once per portrait placed; `partner()` peeks at the portrait that
/// will be placed next, which is the one sharing the current cell.
#[derive(Debug)]
struct PortraitCursor {
    indices: Vec<usize>,
    pos: usize,
}

impl PortraitCursor {
    fn new(images: &[DynamicImage]) -> Self {
        let indices = images
            .iter()
            .enumerate()
            .filter(|(_, img)| is_portrait(img.width(), img.height()))
            .map(|(i, _)| i)
            .collect();
        Self { indices, pos: 0 }
    }

    /// Image index of the portrait immediately after the one being placed.
    fn partner(&self) -> Option<usize> {
        self.indices.get(self.pos + 1).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }
}

/// Compose the near-square grid poster.
///
/// # Errors
/// Returns [`Error::EmptyScan`] when `images` is empty.
pub fn compose(
    images: &[DynamicImage],
    poster: PosterSize,
    background: [u8; 3],
) -> Result<image::RgbImage, Error> {
    if images.is_empty() {
        return Err(Error::EmptyScan);
    }

    let grid = Grid::near_square(images.len(), poster);
    info!(
        cols = grid.cols,
        rows = grid.rows,
        cell_w = grid.cell_w,
        cell_h = grid.cell_h,
        "grid layout"
    );

    let mut canvas = PosterCanvas::new(poster, background);
    let mut portraits = PortraitCursor::new(images);

    for (i, img) in images.iter().enumerate() {
        let (x, y) = grid.cell_origin(i / grid.cols, i % grid.cols);
        if is_portrait(img.width(), img.height()) {
            let half_w = grid.cell_w / 2;
            let left = img.resize_exact(half_w, grid.cell_h, FilterType::Lanczos3);
            canvas.paste(&left, x, y);
            if let Some(p) = portraits.partner() {
                let right =
                    images[p].resize_exact(grid.cell_w - half_w, grid.cell_h, FilterType::Lanczos3);
                canvas.paste(&right, x + half_w, y);
            }
            portraits.advance();
        } else {
            let fitted = img.resize_exact(grid.cell_w, grid.cell_h, FilterType::Lanczos3);
            canvas.paste(&fitted, x, y);
        }
    }

    Ok(canvas.into_image())
}
