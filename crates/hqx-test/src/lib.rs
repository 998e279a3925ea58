//! hqx-test - Regression test framework for the hqx filters
//!
//! Provides [`RegParams`], which numbers and records the checks of one
//! regression test, and synthetic fixture rasters, so tests need no
//! binary image files.
//!
//! # Usage
//!
//! ```ignore
//! use hqx_test::{RegParams, fixtures};
//!
//! let mut rp = RegParams::new("scale");
//! let src = fixtures::checkerboard(4, 4, 1, BLACK, WHITE)?;
//! rp.compare_values(12.0, out.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: `compare` (default) or `display`; display mode also
//!   writes rasters passed to [`RegParams::display_raster`] to
//!   `tests/regout/`

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // hqx-test is at crates/hqx-test
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Synthetic source rasters.
pub mod fixtures {
    use crate::TestResult;
    use hqx_core::Raster;

    /// A raster of one color.
    pub fn solid(width: u32, height: u32, color: u32) -> TestResult<Raster> {
        Ok(Raster::new_filled(width, height, color)?)
    }

    /// Alternating `cell` x `cell` squares, `a` at the origin.
    pub fn checkerboard(width: u32, height: u32, cell: u32, a: u32, b: u32) -> TestResult<Raster> {
        let cell = cell.max(1);
        from_fn(width, height, |x, y| {
            if (x / cell + y / cell) % 2 == 0 { a } else { b }
        })
    }

    /// `background` everywhere except `foreground` at (width/2, height/2).
    pub fn isolated_pixel(
        width: u32,
        height: u32,
        background: u32,
        foreground: u32,
    ) -> TestResult<Raster> {
        from_fn(width, height, |x, y| {
            if x == width / 2 && y == height / 2 {
                foreground
            } else {
                background
            }
        })
    }

    /// A square with `foreground` on the main diagonal.
    pub fn diagonal_line(size: u32, background: u32, foreground: u32) -> TestResult<Raster> {
        from_fn(size, size, |x, y| if x == y { foreground } else { background })
    }

    /// Horizontal gray ramp from black at the left to white at the right.
    pub fn gradient(width: u32, height: u32) -> TestResult<Raster> {
        let span = width.saturating_sub(1).max(1);
        from_fn(width, height, |x, _| hqx_core::color::gray((x * 255 / span) as u8))
    }

    fn from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> u32) -> TestResult<Raster> {
        let data = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        Ok(Raster::from_pixels(width, height, data)?)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use hqx_core::color::{BLACK, WHITE, gray};

        #[test]
        fn test_checkerboard() {
            let r = checkerboard(4, 2, 2, BLACK, WHITE).unwrap();
            assert_eq!(r.row_data(0), &[BLACK, BLACK, WHITE, WHITE]);
            assert_eq!(r.row_data(1), &[BLACK, BLACK, WHITE, WHITE]);
        }

        #[test]
        fn test_isolated_pixel() {
            let r = isolated_pixel(3, 3, BLACK, WHITE).unwrap();
            assert_eq!(r.data().iter().filter(|&&c| c == WHITE).count(), 1);
            assert_eq!(r.get_pixel(1, 1), Some(WHITE));
        }

        #[test]
        fn test_gradient_and_diagonal() {
            let g = gradient(3, 1).unwrap();
            assert_eq!(g.data(), &[gray(0), gray(127), gray(255)]);
            let d = diagonal_line(3, BLACK, WHITE).unwrap();
            assert_eq!(d.get_pixel(2, 2), Some(WHITE));
            assert_eq!(d.get_pixel(1, 0), Some(BLACK));
            assert!(solid(0, 1, WHITE).is_err());
        }
    }
}
