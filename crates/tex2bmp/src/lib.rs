//! tex2bmp - TEX paletted texture to bitmap conversion library.
//!
//! This crate provides a unified interface to the tex2bmp crates.
//!
//! # Crates
//!
//! - [`tex2bmp_common`] - Bounds-checked binary reading
//! - [`tex2bmp_tex`] - TEX header, palette and nibble unpacking
//! - [`tex2bmp_bmp`] - 24-bit bottom-up bitmap encoding
//!
//! # Example
//!
//! ```no_run
//! use tex2bmp::prelude::*;
//!
//! let conversion = convert_file("textures/stone.tex", None)?;
//! println!(
//!     "{}x{} -> {}",
//!     conversion.width,
//!     conversion.height,
//!     conversion.output.display()
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod convert;
mod error;

pub use convert::{
    convert_all, convert_bytes, convert_file, output_path_for, BatchEvent, BatchSummary,
    Conversion, OUTPUT_EXTENSION,
};
pub use error::{Error, Result};

// Re-export all sub-crates
pub use tex2bmp_bmp as bmp;
pub use tex2bmp_common as common;
pub use tex2bmp_tex as tex;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        convert_all, convert_bytes, convert_file, output_path_for, BatchEvent, BatchSummary,
        Conversion,
    };
    pub use tex2bmp_bmp::{encode_bitmap, encode_texture, BmpHeader};
    pub use tex2bmp_common::BinaryReader;
    pub use tex2bmp_tex::{decode_rgb555, parse_texture, Palette, Rgb, Texture};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
