//! Pure grid geometry shared by both planners.

use crate::config::PosterSize;

/// Regular grid over a poster. Cell sizes come from integer division, so
/// `cols * cell_w` and `rows * cell_h` may fall short of the poster edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub cols: usize,
    pub rows: usize,
    pub cell_w: u32,
    pub cell_h: u32,
}

/// One cell's rectangle on the poster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Grid {
    /// Near-square grid for mode 1: `cols = floor(sqrt(n))`, `rows = ceil(n/cols)`.
    #[must_use]
    pub fn near_square(n: usize, poster: PosterSize) -> Self {
        let cols = floor_sqrt(n).max(1);
        let rows = n.div_ceil(cols);
        Self::with_dims(cols, rows, poster)
    }

    /// Covering grid for mode 2: `cols = ceil(sqrt(n))`, `rows = ceil(n/cols)`,
    /// so `rows * cols >= n`.
    #[must_use]
    pub fn covering(n: usize, poster: PosterSize) -> Self {
        let cols = ceil_sqrt(n).max(1);
        let rows = n.div_ceil(cols);
        Self::with_dims(cols, rows, poster)
    }

    fn with_dims(cols: usize, rows: usize, poster: PosterSize) -> Self {
        Self {
            cols,
            rows,
            cell_w: poster.width / cols as u32,
            cell_h: poster.height / rows as u32,
        }
    }

    /// Top-left corner of the cell at `(row, col)`.
    #[must_use]
    pub fn cell_origin(&self, row: usize, col: usize) -> (u32, u32) {
        (col as u32 * self.cell_w, row as u32 * self.cell_h)
    }

    /// Cell rectangle with the division remainder absorbed into the last row
    /// and column, so the grid tiles the poster edge-to-edge.
    #[must_use]
    pub fn covering_cell(&self, row: usize, col: usize, poster: PosterSize) -> CellRect {
        let (x, y) = self.cell_origin(row, col);
        let w = if col + 1 == self.cols {
            poster.width - x
        } else {
            self.cell_w
        };
        let h = if row + 1 == self.rows {
            poster.height - y
        } else {
            self.cell_h
        };
        CellRect { x, y, w, h }
    }
}

/// `true` when the image is taller than it is wide; squares count as landscape.
#[must_use]
pub const fn is_portrait(width: u32, height: u32) -> bool {
    height > width
}

/// Largest integer whose square does not exceed `n`.
fn floor_sqrt(n: usize) -> usize {
    let mut r = (n as f64).sqrt() as usize;
    // Float roundoff can land one off in either direction.
    while r * r > n {
        r -= 1;
    }
    while (r + 1) * (r + 1) <= n {
        r += 1;
    }
    r
}

/// Smallest integer whose square is at least `n`.
fn ceil_sqrt(n: usize) -> usize {
    let r = floor_sqrt(n);
    if r * r == n { r } else { r + 1 }
}
