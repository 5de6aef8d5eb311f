//! Bitmap file and info headers.

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use crate::{Error, Result, BMP_HEADER_SIZE, BMP_INFO_HEADER_SIZE, BMP_MAGIC};

/// Combined bitmap file header and info header for a 24-bit image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpHeader {
    /// Signature, always `BM`.
    pub magic: [u8; 2],
    /// Total file size in bytes.
    pub file_size: u32,
    /// Reserved.
    pub reserved: u32,
    /// Offset of the pixel data.
    pub data_offset: u32,
    /// Info header size (40).
    pub info_size: u32,
    /// Image width.
    pub width: i32,
    /// Image height. Positive means rows are stored bottom-up.
    pub height: i32,
    /// Colour planes (1).
    pub planes: u16,
    /// Bits per pixel (24).
    pub bits_per_pixel: u16,
    /// Compression (0 = none).
    pub compression: u32,
    /// Pixel data size; 0 is allowed for uncompressed images.
    pub image_size: u32,
    /// Horizontal resolution.
    pub x_pixels_per_meter: i32,
    /// Vertical resolution.
    pub y_pixels_per_meter: i32,
    /// Colour table entries.
    pub colors_used: u32,
    /// Important colours.
    pub colors_important: u32,
}

impl BmpHeader {
    /// Header size in bytes.
    pub const SIZE: usize = BMP_HEADER_SIZE as usize;

    /// Build the header for a `width` x `height` 24-bit image.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let too_large = || Error::TooLarge { width, height };
        let file_size = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(3))
            .and_then(|bytes| bytes.checked_add(BMP_HEADER_SIZE))
            .ok_or_else(too_large)?;

        Ok(Self {
            magic: *BMP_MAGIC,
            file_size,
            reserved: 0,
            data_offset: BMP_HEADER_SIZE,
            info_size: BMP_INFO_HEADER_SIZE,
            width: i32::try_from(width).map_err(|_| too_large())?,
            height: i32::try_from(height).map_err(|_| too_large())?,
            planes: 1,
            bits_per_pixel: 24,
            compression: 0,
            image_size: 0,
            x_pixels_per_meter: 0,
            y_pixels_per_meter: 0,
            colors_used: 0,
            colors_important: 0,
        })
    }

    /// Serialize the 54 header bytes.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.magic)?;
        writer.write_u32::<LittleEndian>(self.file_size)?;
        writer.write_u32::<LittleEndian>(self.reserved)?;
        writer.write_u32::<LittleEndian>(self.data_offset)?;

        writer.write_u32::<LittleEndian>(self.info_size)?;
        writer.write_i32::<LittleEndian>(self.width)?;
        writer.write_i32::<LittleEndian>(self.height)?;
        writer.write_u16::<LittleEndian>(self.planes)?;
        writer.write_u16::<LittleEndian>(self.bits_per_pixel)?;
        writer.write_u32::<LittleEndian>(self.compression)?;
        writer.write_u32::<LittleEndian>(self.image_size)?;
        writer.write_i32::<LittleEndian>(self.x_pixels_per_meter)?;
        writer.write_i32::<LittleEndian>(self.y_pixels_per_meter)?;
        writer.write_u32::<LittleEndian>(self.colors_used)?;
        writer.write_u32::<LittleEndian>(self.colors_important)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_layout() {
        let header = BmpHeader::new(3, 2).unwrap();
        let mut bytes = Vec::new();
        header.write_to(&mut bytes).unwrap();

        assert_eq!(bytes.len(), BmpHeader::SIZE);
        assert_eq!(&bytes[0..2], b"BM");
        assert_eq!(bytes[2..6], (54u32 + 18).to_le_bytes());
        assert_eq!(bytes[6..10], [0; 4]);
        assert_eq!(bytes[10..14], 54u32.to_le_bytes());
        assert_eq!(bytes[14..18], 40u32.to_le_bytes());
        assert_eq!(bytes[18..22], 3i32.to_le_bytes());
        assert_eq!(bytes[22..26], 2i32.to_le_bytes());
        assert_eq!(bytes[26..28], 1u16.to_le_bytes());
        assert_eq!(bytes[28..30], 24u16.to_le_bytes());
        assert!(bytes[30..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_too_large() {
        assert!(matches!(
            BmpHeader::new(u32::MAX, 2),
            Err(Error::TooLarge { .. })
        ));
        assert!(BmpHeader::new(4096, 4096).is_ok());
    }
}
