//! Error types for TEX parsing.

use thiserror::Error;

/// Errors that can occur when parsing a TEX file.
#[derive(Debug, Error)]
pub enum Error {
    /// Common library error.
    #[error("{0}")]
    Common(#[from] tex2bmp_common::Error),

    /// Width or height outside `1..=4096`.
    #[error("invalid dimensions in header: {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    /// Stream ends before the packed pixel data does.
    #[error("pixel data truncated: needed {needed} bytes but only {available} available")]
    TruncatedData { needed: usize, available: usize },

    /// Stream too short to hold the palette after the pixel data.
    #[error("palette truncated: stream is {len} bytes, need at least {required}")]
    TruncatedPalette { len: usize, required: usize },
}

/// Result type for TEX operations.
pub type Result<T> = std::result::Result<T, Error>;
