//! Error types for file conversion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can abort the conversion of a single file.
#[derive(Debug, Error)]
pub enum Error {
    /// Source file could not be read.
    #[error("could not open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source is not a usable TEX file.
    #[error("{0}")]
    Texture(#[from] tex2bmp_tex::Error),

    /// Bitmap could not be encoded.
    #[error("{0}")]
    Bitmap(#[from] tex2bmp_bmp::Error),

    /// Destination could not be written.
    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
