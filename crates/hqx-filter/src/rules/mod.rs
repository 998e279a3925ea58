//! Pattern-to-output rule tables
//!
//! For each scale factor N there is one table mapping each of the 256
//! [`Pattern`] codes to N×N output operations, one per sub-pixel in
//! row-major order. An operation either mixes fixed window colors or
//! first checks whether the two orthogonal neighbors of a corner are
//! themselves different, and picks one of two mixes accordingly.
//!
//! Patterns that produce identical blocks share one rule body; the
//! `INDEX` array of each table maps a pattern code to its body.

mod hq2x;
mod hq3x;
mod hq4x;

pub use hq2x::HQ2X;
pub use hq3x::HQ3X;
pub use hq4x::HQ4X;

pub use crate::mix::{Blend, blend2, blend3, center};

use crate::classify::{Classifier, Thresholds};
use crate::pattern::Pattern;
use crate::window::Window;

/// Largest supported scale factor.
pub const MAX_SCALE: usize = 4;

/// A corner of the window, named by the pair of orthogonal neighbors
/// that bound it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Between w3 and w1
    TopLeft,
    /// Between w1 and w5
    TopRight,
    /// Between w5 and w7
    BottomRight,
    /// Between w7 and w3
    BottomLeft,
}

impl Corner {
    /// The two window indices compared for this corner.
    pub const fn pair(self) -> (usize, usize) {
        match self {
            Corner::TopLeft => (3, 1),
            Corner::TopRight => (1, 5),
            Corner::BottomRight => (5, 7),
            Corner::BottomLeft => (7, 3),
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

/// Operation producing one output sub-pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Unconditional mix
    Mix(Blend),
    /// Use the first mix when the corner's neighbor pair is different,
    /// the second otherwise
    Edge(Corner, Blend, Blend),
}

/// Rule table for one scale factor.
#[derive(Debug)]
pub struct RuleTable {
    scale: usize,
    index: &'static [u8; 256],
    rules: &'static [&'static [Op]],
}

impl RuleTable {
    /// Side length of the output block.
    pub fn scale(&self) -> usize {
        self.scale
    }

    /// The N×N operations for a pattern, row-major.
    pub fn rule(&self, pattern: Pattern) -> &'static [Op] {
        self.rules[self.index[pattern.bits() as usize] as usize]
    }

    /// Number of distinct rule bodies in the table.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Compute the output block for one window.
    ///
    /// Corner neighbor tests are evaluated at most once per call and only
    /// when a rule asks for them.
    pub fn apply(
        &self,
        pattern: Pattern,
        window: &Window,
        classifier: Classifier,
        thresholds: &Thresholds,
    ) -> Block {
        let mut corners: [Option<bool>; 4] = [None; 4];
        let mut block = Block {
            scale: self.scale,
            colors: [0; MAX_SCALE * MAX_SCALE],
        };
        for (slot, op) in block.colors.iter_mut().zip(self.rule(pattern)) {
            *slot = match op {
                Op::Mix(blend) => blend.apply(window),
                Op::Edge(corner, split, join) => {
                    let different = *corners[corner.slot()].get_or_insert_with(|| {
                        let (a, b) = corner.pair();
                        classifier.is_different(window[a], window[b], thresholds)
                    });
                    if different {
                        split.apply(window)
                    } else {
                        join.apply(window)
                    }
                }
            };
        }
        block
    }
}

/// The N×N output colors for one source pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    scale: usize,
    colors: [u32; MAX_SCALE * MAX_SCALE],
}

impl Block {
    /// Side length of the block.
    pub fn scale(&self) -> usize {
        self.scale
    }

    /// One output row of the block.
    #[inline]
    pub fn row(&self, r: usize) -> &[u32] {
        &self.colors[r * self.scale..(r + 1) * self.scale]
    }

    /// All sub-pixels, row-major.
    pub fn colors(&self) -> &[u32] {
        &self.colors[..self.scale * self.scale]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hqx_core::color::{BLACK, WHITE};

    const TABLES: [&RuleTable; 3] = [&HQ2X, &HQ3X, &HQ4X];

    #[test]
    fn test_every_pattern_fills_block() {
        for table in TABLES {
            let n = table.scale();
            for code in 0..=255u8 {
                assert_eq!(
                    table.rule(Pattern::from_bits(code)).len(),
                    n * n,
                    "{n}x pattern {code}"
                );
            }
        }
    }

    #[test]
    fn test_every_body_is_reachable() {
        for table in TABLES {
            let mut used = vec![false; table.rule_count()];
            for &i in table.index.iter() {
                used[i as usize] = true;
            }
            assert!(used.iter().all(|&u| u), "{}x", table.scale());
        }
    }

    #[test]
    fn test_uniform_window_is_fixed_point() {
        let w = Window::uniform(0x8040_c020);
        let t = Thresholds::default();
        for table in TABLES {
            for code in 0..=255u8 {
                let block = table.apply(Pattern::from_bits(code), &w, Classifier::A, &t);
                assert!(block.colors().iter().all(|&c| c == 0x8040_c020));
            }
        }
    }

    #[test]
    fn test_hq3x_middle_is_center() {
        let mut colors = [BLACK; 9];
        colors[4] = WHITE;
        let w = Window::from_colors(colors);
        let t = Thresholds::default();
        for code in 0..=255u8 {
            let block = HQ3X.apply(Pattern::from_bits(code), &w, Classifier::A, &t);
            assert_eq!(block.row(1)[1], WHITE, "pattern {code}");
        }
    }

    #[test]
    fn test_isolated_pixel_3x() {
        let mut colors = [BLACK; 9];
        colors[4] = WHITE;
        let w = Window::from_colors(colors);
        let t = Thresholds::default();
        let block = HQ3X.apply(Pattern::ISOLATED, &w, Classifier::A, &t);
        let corner = 0xff7f_7f7f;
        assert_eq!(block.row(0), &[corner, WHITE, corner]);
        assert_eq!(block.row(1), &[WHITE, WHITE, WHITE]);
        assert_eq!(block.row(2), &[corner, WHITE, corner]);
    }

    #[test]
    fn test_corner_pairs() {
        assert_eq!(Corner::TopLeft.pair(), (3, 1));
        assert_eq!(Corner::TopRight.pair(), (1, 5));
        assert_eq!(Corner::BottomRight.pair(), (5, 7));
        assert_eq!(Corner::BottomLeft.pair(), (7, 3));
    }
}
