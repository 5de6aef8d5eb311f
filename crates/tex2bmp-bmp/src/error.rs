//! Error types for bitmap encoding.

use thiserror::Error;

/// Errors that can occur when encoding a bitmap.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image too large for the header's 32-bit fields.
    #[error("image too large for a bitmap: {width}x{height}")]
    TooLarge { width: u32, height: u32 },

    /// Index buffer does not cover every pixel.
    #[error("pixel count mismatch: expected {expected}, got {actual}")]
    PixelCountMismatch { expected: usize, actual: usize },

    /// Index with no palette entry.
    #[error("palette index {index} out of range at pixel {position}")]
    IndexOutOfRange { index: u8, position: usize },
}

/// Result type for bitmap operations.
pub type Result<T> = std::result::Result<T, Error>;
