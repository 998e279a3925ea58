//! Perceptual color-distance classification
//!
//! Two colors are "different" when any of their luma, chroma or alpha
//! components differ by more than the matching threshold. The components
//! come from one of two integer YUV approximations, selected per call
//! with [`Classifier`].
//!
//! Both conversions produce a packed `0xAAYYUUVV` value: the threshold
//! for each component is compared against the difference in its own
//! byte lane (A at bits 24..31, Y at 16..23, U at 8..15, V at 0..7).

use hqx_core::color;

/// Per-component thresholds for the distance test.
///
/// A component difference strictly greater than its threshold makes two
/// colors different.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Thresholds {
    /// Luma threshold
    pub y: u32,
    /// Blue-difference chroma threshold
    pub u: u32,
    /// Red-difference chroma threshold
    pub v: u32,
    /// Alpha threshold
    pub a: u32,
}

impl Thresholds {
    /// Default luma threshold.
    pub const DEFAULT_Y: u32 = 0x30;
    /// Default U threshold.
    pub const DEFAULT_U: u32 = 0x07;
    /// Default V threshold.
    pub const DEFAULT_V: u32 = 0x06;
    /// Default alpha threshold.
    pub const DEFAULT_A: u32 = 0x50;

    /// Create a threshold vector.
    pub const fn new(y: u32, u: u32, v: u32, a: u32) -> Self {
        Self { y, u, v, a }
    }

    /// Thresholds of zero: any component change counts as different.
    pub const fn exact() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_Y,
            Self::DEFAULT_U,
            Self::DEFAULT_V,
            Self::DEFAULT_A,
        )
    }
}

/// Color-distance strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Classifier {
    /// Variant A: BT.601 weights in integer thousandths
    #[default]
    A,
    /// Variant B: cheaper shift-based weights, coarser chroma
    B,
}

impl Classifier {
    /// Select a classifier from a mode character.
    ///
    /// `'B'` (or `'b'`) selects [`Classifier::B`]; anything else selects
    /// [`Classifier::A`].
    pub fn from_mode(mode: char) -> Self {
        match mode {
            'B' | 'b' => Classifier::B,
            _ => Classifier::A,
        }
    }

    /// Convert a packed `0xAARRGGBB` color to packed `0xAAYYUUVV`.
    pub fn to_ayuv(self, pixel: u32) -> u32 {
        let r = color::red(pixel) as i32;
        let g = color::green(pixel) as i32;
        let b = color::blue(pixel) as i32;
        let (y, u, v) = match self {
            Classifier::A => (
                (299 * r + 587 * g + 114 * b) / 1000,
                (-169 * r - 331 * g + 500 * b) / 1000 + 128,
                (500 * r - 419 * g - 81 * b) / 1000 + 128,
            ),
            Classifier::B => (
                (r + g + b) >> 2,
                128 + ((r - b) >> 2),
                128 + ((2 * g - r - b) >> 3),
            ),
        };
        (pixel & color::ALPHA_MASK) | ((y as u32) << 16) | ((u as u32) << 8) | v as u32
    }

    /// Decide whether two colors are perceptually different.
    ///
    /// Bitwise-equal colors are never different; the conversion is skipped
    /// for them.
    pub fn is_different(self, c1: u32, c2: u32, thresholds: &Thresholds) -> bool {
        if c1 == c2 {
            return false;
        }
        let p1 = self.to_ayuv(c1);
        let p2 = self.to_ayuv(c2);
        lane_diff(p1, p2, 16) > thresholds.y
            || lane_diff(p1, p2, 8) > thresholds.u
            || lane_diff(p1, p2, 0) > thresholds.v
            || lane_diff(p1, p2, 24) > thresholds.a
    }
}

/// Absolute difference of the byte lanes at `shift`.
#[inline]
fn lane_diff(p1: u32, p2: u32, shift: u32) -> u32 {
    ((p1 >> shift) & 0xff).abs_diff((p2 >> shift) & 0xff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hqx_core::color::{BLACK, WHITE, compose_rgb, compose_rgba, gray};

    #[test]
    fn test_equal_colors_never_differ() {
        let t = Thresholds::exact();
        for c in [0, BLACK, WHITE, 0x1234_5678] {
            assert!(!Classifier::A.is_different(c, c, &t));
            assert!(!Classifier::B.is_different(c, c, &t));
        }
    }

    #[test]
    fn test_black_white_differ() {
        let t = Thresholds::default();
        assert!(Classifier::A.is_different(BLACK, WHITE, &t));
        assert!(Classifier::B.is_different(BLACK, WHITE, &t));
    }

    #[test]
    fn test_small_luma_step_is_similar() {
        let t = Thresholds::default();
        assert!(!Classifier::A.is_different(gray(100), gray(110), &t));
        assert!(!Classifier::B.is_different(gray(100), gray(110), &t));
    }

    #[test]
    fn test_ayuv_gray_is_neutral() {
        // Gray has no chroma under either weighting
        let p = Classifier::A.to_ayuv(gray(200));
        assert_eq!(p, 0xffc8_8080);
        let p = Classifier::B.to_ayuv(gray(200));
        assert_eq!((p >> 8) & 0xff, 128);
        assert_eq!(p & 0xff, 128);
        assert_eq!((p >> 16) & 0xff, 150);
    }

    #[test]
    fn test_alpha_lane() {
        let t = Thresholds::default();
        let opaque = compose_rgba(10, 10, 10, 255);
        let faint = compose_rgba(10, 10, 10, 255 - 0x50);
        let clear = compose_rgba(10, 10, 10, 255 - 0x51);
        assert!(!Classifier::A.is_different(opaque, faint, &t));
        assert!(Classifier::A.is_different(opaque, clear, &t));
    }

    #[test]
    fn test_variants_disagree_on_chroma() {
        // Pure red vs a slightly bluer red: A sees the U shift, B rounds it away
        let t = Thresholds::default();
        let a = compose_rgb(200, 0, 0);
        let b = compose_rgb(200, 0, 16);
        assert!(Classifier::A.is_different(a, b, &t));
        assert!(!Classifier::B.is_different(a, b, &t));
    }

    #[test]
    fn test_from_mode() {
        assert_eq!(Classifier::from_mode('A'), Classifier::A);
        assert_eq!(Classifier::from_mode('B'), Classifier::B);
        assert_eq!(Classifier::from_mode('b'), Classifier::B);
        assert_eq!(Classifier::from_mode('x'), Classifier::A);
    }
}
