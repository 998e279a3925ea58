//! hqx-filter - Edge-directed pixel-art magnification
//!
//! This crate implements the hq2x, hq3x and hq4x filters:
//!
//! - Perceptual color-distance classification (two YUV weightings)
//! - 3x3 neighborhood sampling with wrap-around or edge replication
//! - 8-bit neighbor-difference pattern codes
//! - Per-scale rule tables mapping each pattern to N×N weighted mixes
//! - Whole-raster scanning into a caller-provided buffer, optionally
//!   parallel over source rows
//!
//! # Example
//!
//! ```
//! use hqx_filter::{HqxOptions, ScaleFactor, hqx_into};
//!
//! let src = [0xff80_8080u32; 4];
//! let mut dst = [0u32; 16];
//! let opts = HqxOptions::with_scale(ScaleFactor::X2);
//! let written = hqx_into(&src, 2, 2, &mut dst, &opts).unwrap();
//! assert_eq!(written, 16);
//! ```

pub mod classify;
mod error;
pub mod mix;
pub mod pattern;
pub mod rules;
pub mod scale;
pub mod window;

pub use classify::{Classifier, Thresholds};
pub use error::{FilterError, FilterResult};
pub use mix::{Blend, mix};
pub use pattern::Pattern;
pub use rules::{Block, Corner, HQ2X, HQ3X, HQ4X, Op, RuleTable};
pub use scale::{
    HqxOptions, ScaleFactor, hq2x, hq3x, hq3x_a, hq3x_b, hq4x, hqx, hqx_into, output_len,
};
pub use window::{ColumnNeighbors, RowNeighbors, Window, Wrap};
