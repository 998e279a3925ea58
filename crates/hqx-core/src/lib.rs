//! hqx-core - Basic data structures for the hqx magnification filters
//!
//! This crate provides the fundamental types shared by the filter engine,
//! the image I/O crate and the regression tests:
//!
//! - [`Raster`] / [`RasterMut`] - Packed 32-bit color image (immutable / mutable)
//! - [`color`] - Channel extraction and composition for packed colors
//! - [`Error`] - Core error type

pub mod error;
pub mod raster;

pub use error::{Error, Result};
pub use raster::{Raster, RasterMut};

/// Channel helpers for packed 32-bit colors.
///
/// # Pixel format
///
/// Colors are stored as `0xAARRGGBB` (alpha in MSB, blue in LSB).
/// In little-endian memory this is B, G, R, A byte order.
pub mod color {
    /// Shift amounts for extracting color channels
    pub const ALPHA_SHIFT: u32 = 24;
    pub const RED_SHIFT: u32 = 16;
    pub const GREEN_SHIFT: u32 = 8;
    pub const BLUE_SHIFT: u32 = 0;

    /// Mask selecting the alpha channel in place.
    pub const ALPHA_MASK: u32 = 0xff00_0000;

    /// Opaque black.
    pub const BLACK: u32 = 0xff00_0000;
    /// Opaque white.
    pub const WHITE: u32 = 0xffff_ffff;

    /// Extract red component from a packed color.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a packed color.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a packed color.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Extract alpha component from a packed color.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Compose an opaque color (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_rgba(r, g, b, 255)
    }

    /// Compose a color with explicit alpha.
    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        ((a as u32) << ALPHA_SHIFT)
            | ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
    }

    /// Extract RGB values from a packed color.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    /// Extract RGBA values from a packed color.
    #[inline]
    pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel), alpha(pixel))
    }

    /// Opaque gray with all three color channels set to `v`.
    #[inline]
    pub fn gray(v: u8) -> u32 {
        compose_rgb(v, v, v)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_compose_layout() {
            assert_eq!(compose_rgba(0x11, 0x22, 0x33, 0x44), 0x4411_2233);
            assert_eq!(compose_rgb(0xff, 0, 0), 0xffff_0000);
        }

        #[test]
        fn test_extract_rgba() {
            let pixel = compose_rgba(10, 20, 30, 40);
            assert_eq!(extract_rgba(pixel), (10, 20, 30, 40));
            assert_eq!(extract_rgb(pixel), (10, 20, 30));
        }

        #[test]
        fn test_constants() {
            assert_eq!(extract_rgba(BLACK), (0, 0, 0, 255));
            assert_eq!(extract_rgba(WHITE), (255, 255, 255, 255));
            assert_eq!(gray(0x80), 0xff80_8080);
        }
    }
}
