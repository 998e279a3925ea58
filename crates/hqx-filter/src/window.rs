//! 3x3 neighborhood sampling
//!
//! ```text
//!   +----+----+----+
//!   | w0 | w1 | w2 |
//!   +----+----+----+
//!   | w3 | w4 | w5 |
//!   +----+----+----+
//!   | w6 | w7 | w8 |
//!   +----+----+----+
//! ```
//!
//! `w4` is the source pixel. Neighbors outside the raster either wrap to
//! the opposite edge or replicate the edge row/column, per axis.

use std::ops::Index;

/// Index of the center pixel in a [`Window`].
pub const CENTER: usize = 4;

/// Edge handling per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Wrap {
    /// Column 0 and column `width - 1` are neighbors
    pub x: bool,
    /// Row 0 and row `height - 1` are neighbors
    pub y: bool,
}

impl Wrap {
    /// Edge replication on both axes.
    pub const NONE: Wrap = Wrap { x: false, y: false };
    /// Toroidal addressing on both axes.
    pub const BOTH: Wrap = Wrap { x: true, y: true };

    /// Create a wrap setting.
    pub const fn new(x: bool, y: bool) -> Self {
        Self { x, y }
    }
}

/// Start offsets of the rows above and below a source row.
///
/// Computed once per row and shared by every column of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowNeighbors {
    pub above: usize,
    pub center: usize,
    pub below: usize,
}

impl RowNeighbors {
    pub fn new(row: u32, width: u32, height: u32, wrap_y: bool) -> Self {
        let (above, below) = neighbor_indices(row, height, wrap_y);
        let width = width as usize;
        Self {
            above: above as usize * width,
            center: row as usize * width,
            below: below as usize * width,
        }
    }
}

/// Columns to the left and right of a source column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnNeighbors {
    pub left: usize,
    pub center: usize,
    pub right: usize,
}

impl ColumnNeighbors {
    pub fn new(col: u32, width: u32, wrap_x: bool) -> Self {
        let (left, right) = neighbor_indices(col, width, wrap_x);
        Self {
            left: left as usize,
            center: col as usize,
            right: right as usize,
        }
    }
}

/// Previous and next coordinate along one axis of length `len`.
///
/// At the edges the coordinate either wraps or repeats itself.
fn neighbor_indices(pos: u32, len: u32, wrap: bool) -> (u32, u32) {
    let prev = match pos {
        0 if wrap => len - 1,
        0 => 0,
        _ => pos - 1,
    };
    let next = if pos + 1 < len {
        pos + 1
    } else if wrap {
        0
    } else {
        pos
    };
    (prev, next)
}

/// The 3x3 colors around one source pixel, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window([u32; 9]);

impl Window {
    /// Build a window from nine colors in row-major order.
    pub const fn from_colors(colors: [u32; 9]) -> Self {
        Window(colors)
    }

    /// A window whose nine colors are all `color`.
    pub const fn uniform(color: u32) -> Self {
        Window([color; 9])
    }

    /// Gather the window from precomputed row and column neighbors.
    ///
    /// `src` must cover every offset named by `rows` and `cols`.
    #[inline]
    pub fn gather(src: &[u32], rows: &RowNeighbors, cols: &ColumnNeighbors) -> Self {
        let mut w = [0u32; 9];
        for (i, base) in [rows.above, rows.center, rows.below].into_iter().enumerate() {
            w[i * 3] = src[base + cols.left];
            w[i * 3 + 1] = src[base + cols.center];
            w[i * 3 + 2] = src[base + cols.right];
        }
        Window(w)
    }

    /// Sample the window around (`row`, `col`) of a `width` x `height`
    /// row-major raster.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the raster or `src` is
    /// shorter than `width * height`.
    pub fn sample(src: &[u32], width: u32, height: u32, row: u32, col: u32, wrap: Wrap) -> Self {
        assert!(row < height && col < width, "({col}, {row}) outside {width}x{height}");
        let rows = RowNeighbors::new(row, width, height, wrap.y);
        let cols = ColumnNeighbors::new(col, width, wrap.x);
        Self::gather(src, &rows, &cols)
    }

    /// The source pixel.
    #[inline]
    pub fn center(&self) -> u32 {
        self.0[CENTER]
    }

    /// All nine colors.
    #[inline]
    pub fn colors(&self) -> &[u32; 9] {
        &self.0
    }
}

impl Index<usize> for Window {
    type Output = u32;

    #[inline]
    fn index(&self, index: usize) -> &u32 {
        &self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 3x3 raster with values 0..9
    const GRID: [u32; 9] = [0, 1, 2, 3, 4, 5, 6, 7, 8];

    #[test]
    fn test_interior_window() {
        let w = Window::sample(&GRID, 3, 3, 1, 1, Wrap::NONE);
        assert_eq!(w.colors(), &GRID);
        assert_eq!(w.center(), 4);
    }

    #[test]
    fn test_corner_replicates_edges() {
        let w = Window::sample(&GRID, 3, 3, 0, 0, Wrap::NONE);
        assert_eq!(w.colors(), &[0, 0, 1, 0, 0, 1, 3, 3, 4]);
        let w = Window::sample(&GRID, 3, 3, 2, 2, Wrap::NONE);
        assert_eq!(w.colors(), &[4, 5, 5, 7, 8, 8, 7, 8, 8]);
    }

    #[test]
    fn test_corner_wraps() {
        let w = Window::sample(&GRID, 3, 3, 0, 0, Wrap::BOTH);
        assert_eq!(w.colors(), &[8, 6, 7, 2, 0, 1, 5, 3, 4]);
    }

    #[test]
    fn test_single_axis_wrap() {
        let w = Window::sample(&GRID, 3, 3, 0, 0, Wrap::new(true, false));
        assert_eq!(w.colors(), &[2, 0, 1, 2, 0, 1, 5, 3, 4]);
        let w = Window::sample(&GRID, 3, 3, 0, 0, Wrap::new(false, true));
        assert_eq!(w.colors(), &[6, 6, 7, 0, 0, 1, 3, 3, 4]);
    }

    #[test]
    fn test_single_pixel_raster() {
        let w = Window::sample(&[7], 1, 1, 0, 0, Wrap::BOTH);
        assert_eq!(w, Window::uniform(7));
        let w = Window::sample(&[7], 1, 1, 0, 0, Wrap::NONE);
        assert_eq!(w, Window::uniform(7));
    }

    #[test]
    fn test_neighbor_indices() {
        assert_eq!(neighbor_indices(0, 5, false), (0, 1));
        assert_eq!(neighbor_indices(0, 5, true), (4, 1));
        assert_eq!(neighbor_indices(4, 5, false), (3, 4));
        assert_eq!(neighbor_indices(4, 5, true), (3, 0));
        assert_eq!(neighbor_indices(2, 5, true), (1, 3));
    }
}
