//! TEX header.

use tex2bmp_common::BinaryReader;

use crate::{Error, Result, HEIGHT_OFFSET, MAX_DIMENSION, WIDTH_OFFSET};

/// Dimensions stored in a TEX header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TexHeader {
    /// Image width in pixels.
    pub width: i32,
    /// Image height in pixels.
    pub height: i32,
}

impl TexHeader {
    /// Read the width and height fields.
    ///
    /// The reader is repositioned to the fixed field offsets, so its current
    /// position does not matter.
    pub fn read(reader: &mut BinaryReader<'_>) -> Result<Self> {
        reader.seek(WIDTH_OFFSET);
        let width = reader.read_i32()?;
        reader.seek(HEIGHT_OFFSET);
        let height = reader.read_i32()?;
        Ok(Self { width, height })
    }

    /// Read the width and height fields from the start of a TEX stream.
    ///
    /// No range check is made; see [`validate`](Self::validate).
    pub fn parse(data: &[u8]) -> Result<Self> {
        Self::read(&mut BinaryReader::new(data))
    }

    /// Check both dimensions are in `1..=MAX_DIMENSION`.
    pub fn validate(&self) -> Result<()> {
        let valid = |v: i32| (1..=MAX_DIMENSION).contains(&v);
        if !valid(self.width) || !valid(self.height) {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Number of pixels in the image.
    ///
    /// Only meaningful after [`validate`](Self::validate) succeeded.
    pub fn pixel_count(&self) -> usize {
        self.width.max(0) as usize * self.height.max(0) as usize
    }

    /// Size of the packed pixel region: two pixels per byte.
    ///
    /// An odd pixel count drops the final nibble.
    pub fn data_size(&self) -> usize {
        self.pixel_count() / 2
    }
}
