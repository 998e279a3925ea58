//! Raster scanning
//!
//! Drives the engine over a whole raster: every source pixel is sampled,
//! encoded and expanded into an N×N block written at `(row·N, col·N)` of
//! the output, whose stride is `width·N`.
//!
//! The N output rows produced by one source row form an independent band.
//! With the `parallel` feature the bands are filled concurrently; the
//! result is identical to a sequential scan.

use crate::classify::{Classifier, Thresholds};
use crate::error::{FilterError, FilterResult};
use crate::pattern::Pattern;
use crate::rules::{HQ2X, HQ3X, HQ4X, RuleTable};
use crate::window::{ColumnNeighbors, RowNeighbors, Window, Wrap};
use hqx_core::{Raster, RasterMut};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Magnification factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScaleFactor {
    /// 2× (hq2x)
    X2,
    /// 3× (hq3x)
    #[default]
    X3,
    /// 4× (hq4x)
    X4,
}

impl ScaleFactor {
    /// The factor as a number.
    pub fn factor(self) -> u32 {
        match self {
            ScaleFactor::X2 => 2,
            ScaleFactor::X3 => 3,
            ScaleFactor::X4 => 4,
        }
    }

    /// Parse a numeric factor.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidScaleFactor`] for anything but 2, 3 or 4.
    pub fn from_factor(factor: u32) -> FilterResult<Self> {
        match factor {
            2 => Ok(ScaleFactor::X2),
            3 => Ok(ScaleFactor::X3),
            4 => Ok(ScaleFactor::X4),
            _ => Err(FilterError::InvalidScaleFactor(factor)),
        }
    }

    /// The rule table for this factor.
    pub fn table(self) -> &'static RuleTable {
        match self {
            ScaleFactor::X2 => &HQ2X,
            ScaleFactor::X3 => &HQ3X,
            ScaleFactor::X4 => &HQ4X,
        }
    }
}

impl TryFrom<u32> for ScaleFactor {
    type Error = FilterError;

    fn try_from(factor: u32) -> FilterResult<Self> {
        Self::from_factor(factor)
    }
}

/// Options for magnification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HqxOptions {
    /// Output block size
    pub scale: ScaleFactor,
    /// Color-distance strategy
    pub classifier: Classifier,
    /// Per-component difference thresholds
    pub thresholds: Thresholds,
    /// Edge handling
    pub wrap: Wrap,
}

impl HqxOptions {
    /// Create options with a specific scale factor
    pub fn with_scale(scale: ScaleFactor) -> Self {
        Self {
            scale,
            ..Default::default()
        }
    }

    /// Set the color-distance strategy
    pub fn classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Set the difference thresholds
    pub fn thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Set horizontal and vertical wrap-around
    pub fn wrap(mut self, x: bool, y: bool) -> Self {
        self.wrap = Wrap::new(x, y);
        self
    }
}

/// Number of colors in the magnified raster, or `None` on overflow.
pub fn output_len(width: u32, height: u32, scale: ScaleFactor) -> Option<usize> {
    let n = u64::from(scale.factor());
    let len = u64::from(width)
        .checked_mul(n)?
        .checked_mul(u64::from(height))?
        .checked_mul(n)?;
    usize::try_from(len).ok()
}

/// Magnify `src` into `dst`.
///
/// `src` is a row-major `width` x `height` raster; `dst` receives the
/// `width·N` x `height·N` result with stride `width·N`. Colors of `dst`
/// past the result are left untouched.
///
/// Returns the number of colors written.
///
/// # Errors
///
/// Nothing is written when an error is returned.
///
/// - [`FilterError::InvalidDimension`] if width or height is zero, or the
///   output size overflows
/// - [`FilterError::SourceTooSmall`] if `src` has fewer than `width·height`
///   colors
/// - [`FilterError::OutputTooSmall`] if `dst` is shorter than the result
pub fn hqx_into(
    src: &[u32],
    width: u32,
    height: u32,
    dst: &mut [u32],
    options: &HqxOptions,
) -> FilterResult<usize> {
    if width == 0 || height == 0 {
        return Err(FilterError::InvalidDimension { width, height });
    }
    let src_len = width as usize * height as usize;
    if src.len() < src_len {
        return Err(FilterError::SourceTooSmall {
            needed: src_len,
            actual: src.len(),
        });
    }
    let needed = output_len(width, height, options.scale)
        .ok_or(FilterError::InvalidDimension { width, height })?;
    if dst.len() < needed {
        return Err(FilterError::OutputTooSmall {
            needed,
            actual: dst.len(),
        });
    }

    let n = options.scale.factor() as usize;
    let band_len = width as usize * n * n;
    let scan = RowScan {
        src: &src[..src_len],
        width,
        height,
        table: options.scale.table(),
        options,
    };

    log::debug!(
        "hqx: {}x{} -> {}x{} ({:?}, classifier {:?}, wrap {:?})",
        width,
        height,
        width as usize * n,
        height as usize * n,
        options.scale,
        options.classifier,
        options.wrap
    );

    #[cfg(feature = "parallel")]
    dst[..needed]
        .par_chunks_mut(band_len)
        .enumerate()
        .for_each(|(row, band)| scan.fill_band(row as u32, band));

    #[cfg(not(feature = "parallel"))]
    dst[..needed]
        .chunks_mut(band_len)
        .enumerate()
        .for_each(|(row, band)| scan.fill_band(row as u32, band));

    Ok(needed)
}

/// Shared, read-only state of one scan.
struct RowScan<'a> {
    src: &'a [u32],
    width: u32,
    height: u32,
    table: &'static RuleTable,
    options: &'a HqxOptions,
}

impl RowScan<'_> {
    /// Expand source row `row` into its band of N output rows.
    fn fill_band(&self, row: u32, band: &mut [u32]) {
        let n = self.table.scale();
        let stride = self.width as usize * n;
        let opts = self.options;
        let rows = RowNeighbors::new(row, self.width, self.height, opts.wrap.y);

        log::trace!("hqx: band {row}");

        for col in 0..self.width {
            let cols = ColumnNeighbors::new(col, self.width, opts.wrap.x);
            let window = Window::gather(self.src, &rows, &cols);
            let pattern = Pattern::encode(&window, &opts.thresholds, opts.classifier);
            let block = self.table.apply(pattern, &window, opts.classifier, &opts.thresholds);
            let x = col as usize * n;
            for r in 0..n {
                let start = r * stride + x;
                band[start..start + n].copy_from_slice(block.row(r));
            }
        }
    }
}

/// Magnify a raster.
///
/// The result keeps the source's alpha flag.
///
/// # Errors
///
/// Returns [`FilterError::InvalidDimension`] if the magnified size does
/// not fit in a raster.
pub fn hqx(raster: &Raster, options: &HqxOptions) -> FilterResult<Raster> {
    let n = options.scale.factor();
    let (w, h) = (raster.width(), raster.height());
    let (out_w, out_h) = w
        .checked_mul(n)
        .zip(h.checked_mul(n))
        .ok_or(FilterError::InvalidDimension {
            width: w,
            height: h,
        })?;

    let mut out = RasterMut::new(out_w, out_h)?;
    out.set_has_alpha(raster.has_alpha());
    hqx_into(raster.data(), w, h, out.data_mut(), options)?;
    Ok(out.into())
}

/// 2× magnification with default options.
pub fn hq2x(raster: &Raster) -> FilterResult<Raster> {
    hqx(raster, &HqxOptions::with_scale(ScaleFactor::X2))
}

/// 3× magnification with default options.
pub fn hq3x(raster: &Raster) -> FilterResult<Raster> {
    hqx(raster, &HqxOptions::with_scale(ScaleFactor::X3))
}

/// 4× magnification with default options.
pub fn hq4x(raster: &Raster) -> FilterResult<Raster> {
    hqx(raster, &HqxOptions::with_scale(ScaleFactor::X4))
}

/// 3× magnification of raw colors with classifier A, default thresholds
/// and no wrap.
///
/// See [`hqx_into`] for the buffer contract.
pub fn hq3x_a(src: &[u32], width: u32, height: u32, dst: &mut [u32]) -> FilterResult<usize> {
    hqx_into(src, width, height, dst, &HqxOptions::default())
}

/// 3× magnification of raw colors with classifier B, default thresholds
/// and no wrap.
///
/// See [`hqx_into`] for the buffer contract.
pub fn hq3x_b(src: &[u32], width: u32, height: u32, dst: &mut [u32]) -> FilterResult<usize> {
    hqx_into(
        src,
        width,
        height,
        dst,
        &HqxOptions::default().classifier(Classifier::B),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use hqx_core::color::{BLACK, WHITE, gray};

    #[test]
    fn test_scale_factor() {
        assert_eq!(ScaleFactor::default(), ScaleFactor::X3);
        for f in 2..=4 {
            assert_eq!(ScaleFactor::from_factor(f).unwrap().factor(), f);
        }
        assert!(matches!(
            ScaleFactor::try_from(5),
            Err(FilterError::InvalidScaleFactor(5))
        ));
        assert_eq!(ScaleFactor::X4.table().scale(), 4);
    }

    #[test]
    fn test_options_builder() {
        let opts = HqxOptions::with_scale(ScaleFactor::X2)
            .classifier(Classifier::B)
            .thresholds(Thresholds::exact())
            .wrap(true, false);
        assert_eq!(opts.scale, ScaleFactor::X2);
        assert_eq!(opts.classifier, Classifier::B);
        assert_eq!(opts.thresholds, Thresholds::exact());
        assert_eq!(opts.wrap, Wrap::new(true, false));
        let d = HqxOptions::default();
        assert_eq!(d.wrap, Wrap::NONE);
        assert_eq!(d.thresholds, Thresholds::default());
    }

    #[test]
    fn test_output_len() {
        assert_eq!(output_len(4, 3, ScaleFactor::X2), Some(48));
        assert_eq!(output_len(4, 3, ScaleFactor::X4), Some(192));
    }

    #[test]
    fn test_uniform_gray_3x() {
        let src = [gray(128); 4];
        let mut dst = [0u32; 36];
        let written = hq3x_a(&src, 2, 2, &mut dst).unwrap();
        assert_eq!(written, 36);
        assert!(dst.iter().all(|&c| c == gray(128)));
    }

    #[test]
    fn test_isolated_pixel_3x() {
        let mut src = [BLACK; 9];
        src[4] = WHITE;
        let mut dst = [0u32; 81];
        hq3x_a(&src, 3, 3, &mut dst).unwrap();
        let corner = 0xff7f_7f7f;
        let at = |x: usize, y: usize| dst[y * 9 + x];
        assert_eq!(at(3, 3), corner);
        assert_eq!(at(4, 3), WHITE);
        assert_eq!(at(5, 3), corner);
        assert_eq!(at(3, 4), WHITE);
        assert_eq!(at(4, 4), WHITE);
        assert_eq!(at(5, 4), WHITE);
        assert_eq!(at(3, 5), corner);
        assert_eq!(at(4, 5), WHITE);
        assert_eq!(at(5, 5), corner);
    }

    #[test]
    fn test_rejects_bad_buffers() {
        let src = [WHITE; 4];
        let mut dst = [7u32; 35];
        assert!(matches!(
            hq3x_a(&src, 2, 2, &mut dst),
            Err(FilterError::OutputTooSmall {
                needed: 36,
                actual: 35
            })
        ));
        assert!(dst.iter().all(|&c| c == 7));
        assert!(matches!(
            hq3x_a(&src[..3], 2, 2, &mut [0; 36]),
            Err(FilterError::SourceTooSmall { needed: 4, actual: 3 })
        ));
        assert!(matches!(
            hq3x_b(&src, 0, 2, &mut [0; 36]),
            Err(FilterError::InvalidDimension { width: 0, height: 2 })
        ));
    }

    #[test]
    fn test_extra_output_untouched() {
        let src = [WHITE; 1];
        let mut dst = [7u32; 6];
        assert_eq!(hq2x_into_default(&src, &mut dst), 4);
        assert_eq!(&dst[..4], &[WHITE; 4]);
        assert_eq!(&dst[4..], &[7, 7]);
    }

    fn hq2x_into_default(src: &[u32], dst: &mut [u32]) -> usize {
        hqx_into(src, 1, 1, dst, &HqxOptions::with_scale(ScaleFactor::X2)).unwrap()
    }

    #[test]
    fn test_raster_wrappers_keep_alpha_flag() {
        let mut src = RasterMut::new(2, 2).unwrap();
        src.set_has_alpha(true);
        let src: Raster = src.into();
        let out = hq4x(&src).unwrap();
        assert_eq!((out.width(), out.height()), (8, 8));
        assert!(out.has_alpha());
        let out = hq2x(&src).unwrap();
        assert_eq!((out.width(), out.height()), (4, 4));
        assert!(hq3x(&src).unwrap().data().iter().all(|&c| c == BLACK));
    }
}
