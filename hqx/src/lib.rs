//! hqx - Edge-directed pixel-art magnification for Rust
//!
//! Implements the hq2x, hq3x and hq4x family of filters: every source
//! pixel becomes an N×N block whose colors are blended from its 3x3
//! neighborhood according to which neighbors look different from it.
//! Edges stay sharp and diagonals are smoothed instead of stair-stepped.
//!
//! # Overview
//!
//! - [`Raster`] - packed `0xAARRGGBB` image container
//! - [`filter`] - the magnification engine ([`hqx`], [`hq3x_a`], ...)
//! - [`io`] - PNG and PNM reading and writing
//!
//! # Example
//!
//! ```
//! use hqx::{HqxOptions, Raster, ScaleFactor, hqx};
//!
//! let src = Raster::new_filled(16, 8, 0xff33_6699).unwrap();
//! let out = hqx(&src, &HqxOptions::with_scale(ScaleFactor::X4)).unwrap();
//! assert_eq!((out.width(), out.height()), (64, 32));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use hqx_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use hqx_filter as filter;
pub use hqx_io as io;

// The engine entry points
pub use hqx_filter::{
    Classifier, FilterError, FilterResult, HqxOptions, ScaleFactor, Thresholds, Wrap, hq2x,
    hq3x, hq3x_a, hq3x_b, hq4x, hqx, hqx_into,
};
