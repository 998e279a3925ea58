//! Pixel access functions
//!
//! Bounds-checked and unchecked getters and setters for single pixels.

use super::{Raster, RasterMut};
use crate::color;
use crate::error::{Error, Result};

impl Raster {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking against the width.
    ///
    /// # Panics
    ///
    /// Panics if the computed index lies outside the data.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data()[y as usize * self.width() as usize + x as usize]
    }

    /// Get RGB values at (x, y).
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        self.get_pixel(x, y).map(color::extract_rgb)
    }

    /// Get RGBA values at (x, y).
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        self.get_pixel(x, y).map(color::extract_rgba)
    }
}

impl RasterMut {
    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking against the width.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data()[y as usize * self.width() as usize + x as usize]
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinates are outside
    /// the raster.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.width() {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.width() as usize,
            });
        }
        if y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.height() as usize,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking against the width.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let idx = y as usize * self.width() as usize + x as usize;
        self.data_mut()[idx] = val;
    }

    /// Set an opaque RGB color at (x, y).
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        self.set_pixel(x, y, color::compose_rgb(r, g, b))
    }

    /// Set an RGBA color at (x, y).
    pub fn set_rgba(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) -> Result<()> {
        self.set_pixel(x, y, color::compose_rgba(r, g, b, a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_pixel() {
        let mut raster = RasterMut::new(5, 4).unwrap();
        raster.set_pixel(4, 3, 0x1234_5678).unwrap();
        assert_eq!(raster.get_pixel(4, 3), Some(0x1234_5678));
        assert_eq!(raster.get_pixel(5, 3), None);
        assert!(raster.set_pixel(5, 0, 0).is_err());
        assert!(raster.set_pixel(0, 4, 0).is_err());
    }

    #[test]
    fn test_rgb_access() {
        let mut raster = RasterMut::new(2, 2).unwrap();
        raster.set_rgb(1, 0, 10, 20, 30).unwrap();
        raster.set_rgba(0, 1, 1, 2, 3, 4).unwrap();
        let raster: Raster = raster.into();
        assert_eq!(raster.get_rgb(1, 0), Some((10, 20, 30)));
        assert_eq!(raster.get_rgba(1, 0), Some((10, 20, 30, 255)));
        assert_eq!(raster.get_rgba(0, 1), Some((1, 2, 3, 4)));
        assert_eq!(raster.get_rgb(2, 0), None);
    }
}
