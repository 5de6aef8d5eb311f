//! TEX texture parsing.
//!
//! A TEX file is a 4-bit paletted raster:
//!
//! | Offset | Size | Field |
//! |---|---|---|
//! | `0x00` | 8 | ignored |
//! | `0x08` | 4 | width (`i32`, little-endian) |
//! | `0x0C` | 4 | height (`i32`, little-endian) |
//! | `0x10` | 8 | ignored |
//! | `0x18` | `width * height / 2` | packed pixel indices, low nibble first |
//! | `end - 32` | 32 | 16 RGB555 palette entries |
//!
//! Palette index 0 is a transparency key and is never looked up; see
//! [`Texture::color_at`].
//!
//! # Example
//!
//! ```no_run
//! use tex2bmp_tex::parse_texture;
//!
//! let data = std::fs::read("path/to/texture.tex")?;
//! let texture = parse_texture(&data)?;
//! println!("{}x{}", texture.width(), texture.height());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod color;
mod error;
mod header;
mod palette;
mod texture;

pub use color::{decode_rgb555, scale_5_to_8, Rgb};
pub use error::{Error, Result};
pub use header::TexHeader;
pub use palette::Palette;
pub use texture::{parse_texture, unpack_nibbles, Texture};

/// Size of the fixed header that precedes the packed pixel data.
pub const HEADER_SIZE: usize = 24;

/// Offset of the width field.
pub const WIDTH_OFFSET: usize = 0x08;

/// Offset of the height field.
pub const HEIGHT_OFFSET: usize = 0x0C;

/// Number of palette entries.
pub const PALETTE_ENTRIES: usize = 16;

/// Size in bytes of the trailing palette.
pub const PALETTE_SIZE: usize = PALETTE_ENTRIES * 2;

/// Largest width or height accepted by the parser.
pub const MAX_DIMENSION: i32 = 4096;

/// Palette index reserved as the transparency key.
pub const TRANSPARENT_INDEX: u8 = 0;
