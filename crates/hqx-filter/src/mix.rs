//! Weighted color mixing
//!
//! Output sub-pixels are weighted averages of up to three window colors.
//! Each channel (alpha included) is mixed independently and the sum is
//! truncated toward zero.
//!
//! Rule tables use [`Blend`], whose denominators are powers of two so
//! that the division reduces to a shift. [`mix`] is the general form
//! for arbitrary weights.

use crate::error::{FilterError, FilterResult};
use crate::window::{CENTER, Window};

const CHANNEL_SHIFTS: [u32; 4] = [24, 16, 8, 0];

/// A precomputed weighted average over window positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Blend {
    taps: [(u8, u8); 3],
    len: u8,
    shift: u8,
}

/// The center color, unchanged.
pub const fn center() -> Blend {
    Blend {
        taps: [(CENTER as u8, 1), (0, 0), (0, 0)],
        len: 1,
        shift: 0,
    }
}

/// Blend of two window colors with weights `wa` and `wb`.
///
/// # Panics
///
/// Panics (at compile time when used in a constant) if an index is
/// outside the window or the weights do not sum to 2, 4, 8 or 16.
pub const fn blend2(a: u8, wa: u8, b: u8, wb: u8) -> Blend {
    build([(a, wa), (b, wb), (0, 0)], 2)
}

/// Blend of three window colors with weights `wa`, `wb` and `wc`.
///
/// # Panics
///
/// Same conditions as [`blend2`].
pub const fn blend3(a: u8, wa: u8, b: u8, wb: u8, c: u8, wc: u8) -> Blend {
    build([(a, wa), (b, wb), (c, wc)], 3)
}

const fn build(taps: [(u8, u8); 3], len: u8) -> Blend {
    let mut total = 0u32;
    let mut i = 0;
    while i < len as usize {
        assert!(taps[i].0 < 9, "window index out of range");
        assert!(taps[i].1 > 0, "zero weight");
        total += taps[i].1 as u32;
        i += 1;
    }
    assert!(
        total.is_power_of_two() && total >= 2 && total <= 16,
        "weights must sum to 2, 4, 8 or 16"
    );
    Blend {
        taps,
        len,
        shift: total.trailing_zeros() as u8,
    }
}

impl Blend {
    /// Mix the window colors named by this blend.
    #[inline]
    pub fn apply(&self, window: &Window) -> u32 {
        let mut out = 0u32;
        for shift in CHANNEL_SHIFTS {
            let mut sum = 0u32;
            for &(idx, weight) in self.taps() {
                sum += ((window[idx as usize] >> shift) & 0xff) * weight as u32;
            }
            out |= (sum >> self.shift) << shift;
        }
        out
    }

    /// The (window index, weight) pairs of this blend.
    pub fn taps(&self) -> &[(u8, u8)] {
        &self.taps[..self.len as usize]
    }

    /// Sum of the weights.
    pub fn denominator(&self) -> u32 {
        1 << self.shift
    }
}

/// Weighted average of `colors`, channel by channel.
///
/// Each channel of the result is `floor(sum(weight_i * channel_i) / denom)`.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] unless there are one to
/// three colors, one weight per color, and the weights sum to `denom`.
pub fn mix(colors: &[u32], weights: &[u32], denom: u32) -> FilterResult<u32> {
    if !(1..=3).contains(&colors.len()) || colors.len() != weights.len() {
        return Err(FilterError::InvalidParameters(format!(
            "{} colors for {} weights",
            colors.len(),
            weights.len()
        )));
    }
    let total: u64 = weights.iter().map(|&w| w as u64).sum();
    if denom == 0 || total != denom as u64 {
        return Err(FilterError::InvalidParameters(format!(
            "weight sum {total} does not match denominator {denom}"
        )));
    }

    let mut out = 0u32;
    for shift in CHANNEL_SHIFTS {
        let sum: u64 = colors
            .iter()
            .zip(weights)
            .map(|(&c, &w)| ((c >> shift) & 0xff) as u64 * w as u64)
            .sum();
        out |= ((sum / denom as u64) as u32) << shift;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hqx_core::color::{BLACK, WHITE, compose_rgba, gray};

    fn window_with(center: u32, others: u32) -> Window {
        let mut colors = [others; 9];
        colors[CENTER] = center;
        Window::from_colors(colors)
    }

    #[test]
    fn test_center_passthrough() {
        let w = window_with(0x8012_3456, BLACK);
        assert_eq!(center().apply(&w), 0x8012_3456);
        assert_eq!(center().denominator(), 1);
    }

    #[test]
    fn test_blend_truncates() {
        // (2 * 255 + 0 + 0) / 4 = 127.5 -> 127
        let w = window_with(WHITE, BLACK);
        let c = blend3(4, 2, 1, 1, 3, 1).apply(&w);
        assert_eq!(c, compose_rgba(127, 127, 127, 255));
    }

    #[test]
    fn test_blend_of_equal_colors_is_identity() {
        let w = Window::uniform(0x7f31_c2e9);
        for b in [
            blend2(4, 3, 0, 1),
            blend2(4, 7, 1, 1),
            blend3(4, 14, 1, 1, 3, 1),
            blend3(4, 5, 1, 2, 0, 1),
        ] {
            assert_eq!(b.apply(&w), 0x7f31_c2e9);
        }
    }

    #[test]
    fn test_taps_and_denominator() {
        let b = blend3(4, 2, 7, 7, 5, 7);
        assert_eq!(b.taps(), &[(4, 2), (7, 7), (5, 7)]);
        assert_eq!(b.denominator(), 16);
        assert_eq!(blend2(4, 1, 1, 1).denominator(), 2);
    }

    #[test]
    #[should_panic]
    fn test_blend_rejects_bad_weights() {
        let _ = blend2(4, 2, 1, 1);
    }

    #[test]
    fn test_mix_general() {
        let c = mix(&[gray(0), gray(255)], &[1, 2], 3).unwrap();
        assert_eq!(c & 0xff, 170);
        assert_eq!(c >> 24, 255);
        assert_eq!(mix(&[0x8012_3456], &[5], 5).unwrap(), 0x8012_3456);
    }

    #[test]
    fn test_mix_matches_blend() {
        let w = Window::from_colors([
            0xff10_2030, 0xff40_5060, 0xff70_8090, 0xffa0_b0c0, 0x80d0_e0f0,
            0xff01_0203, 0xff04_0506, 0xff07_0809, 0xff0a_0b0c,
        ]);
        let b = blend3(4, 5, 1, 2, 0, 1);
        let m = mix(&[w[4], w[1], w[0]], &[5, 2, 1], 8).unwrap();
        assert_eq!(b.apply(&w), m);
    }

    #[test]
    fn test_mix_rejects_bad_input() {
        assert!(mix(&[], &[], 1).is_err());
        assert!(mix(&[WHITE; 4], &[1; 4], 4).is_err());
        assert!(mix(&[WHITE], &[1, 1], 2).is_err());
        assert!(mix(&[WHITE, BLACK], &[0, 0], 0).is_err());
        assert!(mix(&[WHITE, BLACK], &[2, 1], 2).is_err());
        assert!(mix(&[WHITE, BLACK], &[1, 1], 4).is_err());
    }
}
