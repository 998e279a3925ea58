//! Raster - The packed-color image container
//!
//! `Raster` holds a row-major grid of `0xAARRGGBB` colors with no row
//! padding, so row `y` starts at `y * width`. This is the layout the
//! magnification engine reads and writes directly.
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for cheap cloning (shared ownership) and is never
//! modified. Pixels are written through a `RasterMut`, which is frozen
//! into a `Raster` with `Into<Raster>`.

mod access;

use crate::color;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal raster data
#[derive(Debug, Clone)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Whether the alpha channel carries information
    has_alpha: bool,
    /// The image data, `width * height` packed colors
    data: Vec<u32>,
}

/// Raster - Main image container
///
/// # Examples
///
/// ```
/// use hqx_core::Raster;
///
/// let raster = Raster::new(64, 48).unwrap();
/// assert_eq!(raster.width(), 64);
/// assert_eq!(raster.height(), 48);
/// assert_eq!(raster.data().len(), 64 * 48);
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new raster filled with opaque black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_filled(width, height, color::BLACK)
    }

    /// Create a new raster with every pixel set to `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new_filled(width: u32, height: u32, fill: u32) -> Result<Self> {
        let len = Self::checked_len(width, height)?;
        Ok(Self::from_parts(width, height, vec![fill; len]))
    }

    /// Wrap existing packed colors as a raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::DataLength`] if `data.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        let expected = Self::checked_len(width, height)?;
        if data.len() != expected {
            return Err(Error::DataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self::from_parts(width, height, data))
    }

    fn from_parts(width: u32, height: u32, data: Vec<u32>) -> Self {
        Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                has_alpha: false,
                data,
            }),
        }
    }

    /// Number of pixels for the given geometry.
    ///
    /// Uses u64 arithmetic so oversized requests fail instead of wrapping.
    fn checked_len(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        usize::try_from(u64::from(width) * u64::from(height))
            .map_err(|_| Error::InvalidDimension { width, height })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Whether the alpha channel carries information.
    ///
    /// Alpha is always stored; this flag only tells encoders whether to
    /// write it.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.inner.has_alpha
    }

    /// Get raw access to the packed colors.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let start = y as usize * self.inner.width as usize;
        &self.inner.data[start..start + self.inner.width as usize]
    }

    /// Check if two rasters have the same width and height.
    pub fn sizes_equal(&self, other: &Raster) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

}

/// Mutable raster
///
/// Allows modification of image data. Convert back to an immutable
/// [`Raster`] using `Into<Raster>`.
#[derive(Debug)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Create a mutable raster filled with opaque black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = Raster::checked_len(width, height)?;
        Ok(RasterMut {
            inner: RasterData {
                width,
                height,
                has_alpha: false,
                data: vec![color::BLACK; len],
            },
        })
    }

    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Whether the alpha channel carries information.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.inner.has_alpha
    }

    /// Mark whether the alpha channel carries information.
    pub fn set_has_alpha(&mut self, has_alpha: bool) {
        self.inner.has_alpha = has_alpha;
    }

    /// Get raw access to the packed colors.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable access to the packed colors.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Get mutable access to row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let width = self.inner.width as usize;
        let start = y as usize * width;
        &mut self.inner.data[start..start + width]
    }
}

impl From<RasterMut> for Raster {
    fn from(raster: RasterMut) -> Self {
        Raster {
            inner: Arc::new(raster.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_creation() {
        let raster = Raster::new(100, 200).unwrap();
        assert_eq!(raster.width(), 100);
        assert_eq!(raster.height(), 200);
        assert_eq!(raster.data().len(), 20_000);
        assert!(raster.data().iter().all(|&p| p == color::BLACK));
        assert!(!raster.has_alpha());
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            Raster::new(0, 10),
            Err(Error::InvalidDimension {
                width: 0,
                height: 10
            })
        ));
        assert!(Raster::new(10, 0).is_err());
    }

    #[test]
    fn test_from_pixels_length_check() {
        let err = Raster::from_pixels(3, 3, vec![0; 8]).unwrap_err();
        assert!(matches!(
            err,
            Error::DataLength {
                expected: 9,
                actual: 8
            }
        ));
        assert!(Raster::from_pixels(3, 3, vec![0; 9]).is_ok());
    }

    #[test]
    fn test_clone_shares_data() {
        let raster = Raster::new(4, 4).unwrap();
        let shared = raster.clone();
        assert!(std::ptr::eq(raster.data(), shared.data()));
    }

    #[test]
    fn test_freeze_keeps_alpha_flag() {
        let mut raster_mut = RasterMut::new(4, 4).unwrap();
        raster_mut.data_mut()[5] = color::WHITE;
        raster_mut.set_has_alpha(true);
        let raster: Raster = raster_mut.into();
        assert!(raster.has_alpha());
        assert_eq!(raster.data()[5], color::WHITE);
        assert_eq!(raster.data()[4], color::BLACK);
    }

    #[test]
    fn test_raster_mut_new() {
        let raster_mut = RasterMut::new(3, 2).unwrap();
        assert_eq!(raster_mut.data().len(), 6);
        assert!(RasterMut::new(0, 2).is_err());
    }

    #[test]
    fn test_row_data() {
        let data: Vec<u32> = (0..12).collect();
        let raster = Raster::from_pixels(4, 3, data).unwrap();
        assert_eq!(raster.row_data(1), &[4, 5, 6, 7]);

        let mut raster_mut = RasterMut::new(4, 3).unwrap();
        raster_mut.row_data_mut(2)[0] = 99;
        assert_eq!(raster_mut.data()[8], 99);
        assert_eq!(raster_mut.data()[7], color::BLACK);
    }
}
