//! 24-bit bitmap encoding for TEX textures.
//!
//! The output is a standard 54-byte bitmap header followed by bottom-up
//! pixel rows. Two behaviours are kept byte-for-byte from the asset
//! pipeline these files come from, even though they deviate from the
//! container's nominal layout:
//!
//! - Channels are written in **R, G, B** order rather than B, G, R.
//! - Rows are not padded to a 4-byte boundary, so the file is always
//!   exactly `54 + width * height * 3` bytes.
//!
//! Palette index 0 is rendered as [`TRANSPARENT_COLOR`] without consulting
//! the palette.
//!
//! # Example
//!
//! ```no_run
//! use tex2bmp_bmp::encode_texture;
//! use tex2bmp_tex::parse_texture;
//!
//! let texture = parse_texture(&std::fs::read("texture.tex")?)?;
//! std::fs::write("texture.bmp", encode_texture(&texture)?)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod encode;
mod error;
mod header;

pub use encode::{encode_bitmap, encode_texture, write_bitmap};
pub use error::{Error, Result};
pub use header::BmpHeader;

use tex2bmp_tex::Rgb;

/// Bitmap signature ("BM").
pub const BMP_MAGIC: &[u8; 2] = b"BM";

/// Combined size of the file header and the info header.
pub const BMP_HEADER_SIZE: u32 = 54;

/// Size of the info header.
pub const BMP_INFO_HEADER_SIZE: u32 = 40;

/// Colour emitted for the transparency index.
pub const TRANSPARENT_COLOR: Rgb = Rgb::BLACK;
