//! Neighbor-difference pattern codes

use crate::classify::{Classifier, Thresholds};
use crate::window::Window;

/// Window indices of the eight neighbors, in bit order.
///
/// Bit `k` of a pattern describes `NEIGHBORS[k]`.
pub const NEIGHBORS: [usize; 8] = [0, 1, 2, 3, 5, 6, 7, 8];

/// 8-bit descriptor of which neighbors differ from the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(u8);

impl Pattern {
    /// Every neighbor matches the center.
    pub const FLAT: Pattern = Pattern(0);
    /// Every neighbor differs from the center.
    pub const ISOLATED: Pattern = Pattern(0xff);

    /// Wrap a raw pattern code.
    pub const fn from_bits(bits: u8) -> Self {
        Pattern(bits)
    }

    /// The raw pattern code.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Classify each neighbor of `window` against its center.
    pub fn encode(window: &Window, thresholds: &Thresholds, classifier: Classifier) -> Self {
        let center = window.center();
        let mut bits = 0u8;
        for (k, &idx) in NEIGHBORS.iter().enumerate() {
            if classifier.is_different(center, window[idx], thresholds) {
                bits |= 1 << k;
            }
        }
        Pattern(bits)
    }

    /// Whether the neighbor at window index `neighbor` was classified
    /// different. The center and out-of-range indices report `false`.
    pub fn is_set(self, neighbor: usize) -> bool {
        NEIGHBORS
            .iter()
            .position(|&idx| idx == neighbor)
            .is_some_and(|k| self.0 & (1 << k) != 0)
    }
}

impl From<Pattern> for u8 {
    fn from(pattern: Pattern) -> u8 {
        pattern.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hqx_core::color::{BLACK, WHITE};

    #[test]
    fn test_uniform_window_is_flat() {
        let w = Window::uniform(WHITE);
        let p = Pattern::encode(&w, &Thresholds::default(), Classifier::A);
        assert_eq!(p, Pattern::FLAT);
    }

    #[test]
    fn test_isolated_center() {
        let mut colors = [BLACK; 9];
        colors[4] = WHITE;
        let w = Window::from_colors(colors);
        let p = Pattern::encode(&w, &Thresholds::default(), Classifier::A);
        assert_eq!(p, Pattern::ISOLATED);
    }

    #[test]
    fn test_bit_order() {
        for (k, &idx) in NEIGHBORS.iter().enumerate() {
            let mut colors = [BLACK; 9];
            colors[idx] = WHITE;
            let w = Window::from_colors(colors);
            let p = Pattern::encode(&w, &Thresholds::default(), Classifier::B);
            assert_eq!(p.bits(), 1 << k, "neighbor {idx}");
            assert!(p.is_set(idx));
            assert!(!p.is_set(4));
        }
    }
}
