//! Error types for hqx-filter
//!
//! Every precondition violation of the scanner is reported before any
//! output pixel is written.

use thiserror::Error;

/// Errors that can occur during magnification
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] hqx_core::Error),

    /// Source width or height is zero
    #[error("invalid source dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Source slice holds fewer colors than width * height
    #[error("source too small: need {needed} colors, got {actual}")]
    SourceTooSmall { needed: usize, actual: usize },

    /// Output slice holds fewer colors than the magnified raster
    #[error("output too small: need {needed} colors, got {actual}")]
    OutputTooSmall { needed: usize, actual: usize },

    /// Scale factor other than 2, 3 or 4
    #[error("invalid scale factor: {0} (expected 2, 3 or 4)")]
    InvalidScaleFactor(u32),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
