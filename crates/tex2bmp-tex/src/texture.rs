//! Texture parsing and nibble unpacking.

use tex2bmp_common::BinaryReader;
use tracing::{debug, trace, warn};

use crate::{
    Error, Palette, Result, Rgb, TexHeader, HEADER_SIZE, PALETTE_SIZE, TRANSPARENT_INDEX,
};

/// A decoded TEX image: one palette index per pixel plus the palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    width: u32,
    height: u32,
    indices: Vec<u8>,
    palette: Palette,
}

impl Texture {
    /// Build a texture from already unpacked indices.
    ///
    /// `indices` is row-major, top-down. A short buffer is padded with the
    /// transparency index so every pixel has a value.
    pub fn new(width: u32, height: u32, mut indices: Vec<u8>, palette: Palette) -> Self {
        let pixel_count = width as usize * height as usize;
        if indices.len() < pixel_count {
            warn!(
                have = indices.len(),
                expected = pixel_count,
                "padding missing trailing pixels with the transparency index"
            );
            indices.resize(pixel_count, TRANSPARENT_INDEX);
        }
        indices.truncate(pixel_count);
        Self {
            width,
            height,
            indices,
            palette,
        }
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Palette indices, row-major, top row first.
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// The decoded palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Palette index of the pixel at `(x, y)`, with `y = 0` the top row.
    pub fn pixel_index(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.indices
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Resolved colour of the pixel at `(x, y)`.
    ///
    /// Index 0 is the transparency key and always resolves to black.
    pub fn color_at(&self, x: u32, y: u32) -> Option<Rgb> {
        match self.pixel_index(x, y)? {
            TRANSPARENT_INDEX => Some(Rgb::BLACK),
            index => self.palette.get(index),
        }
    }
}

/// Split each byte into two 4-bit indices, low nibble first.
///
/// ```
/// assert_eq!(tex2bmp_tex::unpack_nibbles(&[0x21, 0xF0]), vec![1, 2, 0, 15]);
/// ```
pub fn unpack_nibbles(packed: &[u8]) -> Vec<u8> {
    let mut indices = Vec::with_capacity(packed.len() * 2);
    for &byte in packed {
        indices.push(byte & 0x0F);
        indices.push((byte >> 4) & 0x0F);
    }
    indices
}

/// Parse a complete TEX file.
///
/// Checks run in stream order: palette presence, dimensions, pixel data,
/// then that the pixel data ends before the palette begins.
pub fn parse_texture(data: &[u8]) -> Result<Texture> {
    if data.len() < PALETTE_SIZE {
        return Err(Error::TruncatedPalette {
            len: data.len(),
            required: PALETTE_SIZE,
        });
    }

    let mut reader = BinaryReader::new(data);
    let header = TexHeader::read(&mut reader)?;
    debug!(width = header.width, height = header.height, "read TEX header");
    header.validate()?;

    let data_size = header.data_size();
    reader.seek(HEADER_SIZE);
    let packed = reader.read_bytes(data_size).map_err(|e| match e {
        tex2bmp_common::Error::UnexpectedEof { needed, available } => {
            Error::TruncatedData { needed, available }
        }
    })?;

    let palette_offset = data.len() - PALETTE_SIZE;
    if reader.position() > palette_offset {
        return Err(Error::TruncatedPalette {
            len: data.len(),
            required: reader.position() + PALETTE_SIZE,
        });
    }
    reader.seek_from_end(PALETTE_SIZE)?;
    let palette = Palette::read(&mut reader)?;
    trace!(
        data_size,
        palette_offset,
        slack = palette_offset - HEADER_SIZE - data_size,
        "located pixel and palette regions"
    );

    let indices = unpack_nibbles(packed);

    // Both dimensions were validated positive.
    Ok(Texture::new(
        header.width as u32,
        header.height as u32,
        indices,
        palette,
    ))
}
