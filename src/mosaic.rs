//! Mode 2: full-coverage mosaic poster.
//!
//! Portraits are paired into shared tiles, tiles are shuffled with the caller's
//! RNG, and a covering grid is filled edge-to-edge with cover-fit crops,
//! cycling through the tiles when the grid has more cells than tiles.

use image::DynamicImage;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::info;

use crate::canvas::PosterCanvas;
use crate::config::PosterSize;
use crate::cover::cover_fit;
use crate::error::Error;
use crate::layout::{CellRect, Grid, is_portrait};

/// What goes into one grid cell: a single image, or two portraits sharing it.
#[derive(Debug)]
pub enum Tile<'a> {
    Single(&'a DynamicImage),
    Pair(&'a DynamicImage, &'a DynamicImage),
}

/// Pair up portraits (in input order, odd one out stays single) and append the
/// non-portrait images as single tiles.
#[must_use]
pub fn build_tiles(images: &[DynamicImage]) -> Vec<Tile<'_>> {
    let (portraits, landscapes): (Vec<_>, Vec<_>) = images
        .iter()
        .partition(|img| is_portrait(img.width(), img.height()));

    let mut tiles: Vec<Tile<'_>> = portraits
        .chunks(2)
        .map(|pair| match *pair {
            [a, b] => Tile::Pair(a, b),
            [a] => Tile::Single(a),
            _ => unreachable!("chunks(2) yields one or two items"),
        })
        .collect();
    tiles.extend(landscapes.into_iter().map(Tile::Single));
    tiles
}

/// Compose the mosaic poster using `rng` to shuffle tile order.
///
/// # Errors
/// Returns [`Error::EmptyScan`] when `images` is empty.
pub fn compose<R: Rng>(
    images: &[DynamicImage],
    poster: PosterSize,
    background: [u8; 3],
    rng: &mut R,
) -> Result<image::RgbImage, Error> {
    if images.is_empty() {
        return Err(Error::EmptyScan);
    }

    let mut tiles = build_tiles(images);
    tiles.shuffle(rng);
    let n = tiles.len();

    let grid = Grid::covering(n, poster);
    info!(
        tiles = n,
        cols = grid.cols,
        rows = grid.rows,
        cell_w = grid.cell_w,
        cell_h = grid.cell_h,
        "mosaic layout"
    );

    let mut canvas = PosterCanvas::new(poster, background);
    let mut tile_index = 0usize;

    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let cell = grid.covering_cell(row, col, poster);
            place_tile(&mut canvas, &tiles[tile_index % n], cell);
            tile_index += 1;
        }
    }

    Ok(canvas.into_image())
}

fn place_tile(canvas: &mut PosterCanvas, tile: &Tile<'_>, cell: CellRect) {
    match tile {
        Tile::Single(img) => {
            canvas.paste(&cover_fit(img, cell.w, cell.h), cell.x, cell.y);
        }
        Tile::Pair(left, right) => {
            let half_w = cell.w / 2;
            canvas.paste(&cover_fit(left, half_w, cell.h), cell.x, cell.y);
            canvas.paste(
                &cover_fit(right, cell.w - half_w, cell.h),
                cell.x + half_w,
                cell.y,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn solid(w: u32, h: u32, rgb: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(w, h, Rgb(rgb)))
    }

    const BG: [u8; 3] = [0, 0, 0];

    fn poster(width: u32, height: u32) -> PosterSize {
        PosterSize { width, height }
    }

    #[test]
    fn empty_input_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = compose(&[], poster(100, 100), BG, &mut rng).unwrap_err();
        assert!(matches!(err, Error::EmptyScan));
    }

    #[test]
    fn portrait_pairing_tile_count() {
        // 5 portraits + 4 landscapes: 2 pairs + 1 leftover + 4 singles = 7.
        let mut images: Vec<_> = (0..5).map(|_| solid(10, 20, [1, 1, 1])).collect();
        images.extend((0..4).map(|_| solid(20, 10, [2, 2, 2])));
        let tiles = build_tiles(&images);
        assert_eq!(tiles.len(), 7);
        assert_eq!(
            tiles.iter().filter(|t| matches!(t, Tile::Pair(..))).count(),
            2
        );
    }

    #[test]
    fn odd_portrait_becomes_single_tile() {
        let images = vec![solid(10, 20, [1, 1, 1])];
        let tiles = build_tiles(&images);
        assert!(matches!(tiles.as_slice(), [Tile::Single(_)]));
    }

    #[test]
    fn covers_the_whole_poster() {
        // 7 tiles on a 103x97 poster: odd dimensions, remainder absorbed by the
        // last row/column, so no background pixel survives.
        let mut images: Vec<_> = (0..5).map(|i| solid(10, 20, [10 + i, 0, 0])).collect();
        images.extend((0..4).map(|i| solid(20, 10, [0, 10 + i, 0])));
        let mut rng = StdRng::seed_from_u64(42);
        let out = compose(&images, poster(103, 97), BG, &mut rng).unwrap();
        assert_eq!((out.width(), out.height()), (103, 97));
        assert!(out.pixels().all(|p| p.0 != BG), "uncovered pixel found");
    }

    #[test]
    fn cells_beyond_tile_count_reuse_tiles() {
        // 2 tiles on a covering 2x1 grid is exact; 3 tiles -> 2x2 grid with one
        // extra cell, which wraps around to tile 0.
        let images: Vec<_> = (0..3).map(|i| solid(20, 10, [50 + i, 0, 0])).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let out = compose(&images, poster(80, 80), BG, &mut rng).unwrap();
        // 4 cells, 3 tiles: every pixel painted, nothing left for background.
        assert!(out.pixels().all(|p| p.0 != BG));
    }

    #[test]
    fn fixed_seed_is_reproducible() {
        let mut images: Vec<_> = (0..3).map(|i| solid(10, 20, [100 + i, 0, 0])).collect();
        images.extend((0..3).map(|i| solid(20, 10, [0, 100 + i, 0])));
        let a = compose(
            &images,
            poster(90, 90),
            BG,
            &mut StdRng::seed_from_u64(99),
        )
        .unwrap();
        let b = compose(
            &images,
            poster(90, 90),
            BG,
            &mut StdRng::seed_from_u64(99),
        )
        .unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn pair_tile_splits_its_cell() {
        // Exactly one pair tile filling a 1x1 grid.
        let images = vec![solid(10, 20, [200, 0, 0]), solid(10, 20, [0, 0, 200])];
        let mut rng = StdRng::seed_from_u64(0);
        let out = compose(&images, poster(60, 40), BG, &mut rng).unwrap();
        let left = out.get_pixel(10, 20).0;
        let right = out.get_pixel(50, 20).0;
        assert_ne!(left, right);
        assert!(left == [200, 0, 0] || left == [0, 0, 200]);
        assert!(right == [200, 0, 0] || right == [0, 0, 200]);
    }
}
