//! 16-entry RGB555 palette.

use tex2bmp_common::BinaryReader;

use crate::{decode_rgb555, Result, Rgb, PALETTE_ENTRIES};

/// A decoded 16-colour palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Palette([Rgb; PALETTE_ENTRIES]);

impl Palette {
    /// Create a palette from decoded colours.
    pub const fn new(colors: [Rgb; PALETTE_ENTRIES]) -> Self {
        Self(colors)
    }

    /// Read 16 little-endian RGB555 entries from the reader's position.
    pub fn read(reader: &mut BinaryReader<'_>) -> Result<Self> {
        let mut colors = [Rgb::BLACK; PALETTE_ENTRIES];
        for color in &mut colors {
            *color = decode_rgb555(reader.read_u16()?);
        }
        Ok(Self(colors))
    }

    /// Colour for a palette index, or `None` past the last entry.
    #[inline]
    pub fn get(&self, index: u8) -> Option<Rgb> {
        self.0.get(usize::from(index)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_palette() {
        let mut data = Vec::new();
        for i in 0..16u16 {
            // Blue channel only, 2 * i.
            data.extend_from_slice(&(i * 2).to_le_bytes());
        }
        let mut reader = BinaryReader::new(&data);
        let palette = Palette::read(&mut reader).unwrap();

        assert!(reader.is_empty());
        assert_eq!(palette.get(0), Some(Rgb::BLACK));
        assert_eq!(palette.get(15), Some(Rgb::new(0, 0, 246)));
        assert_eq!(palette.get(16), None);
    }

    #[test]
    fn test_short_palette() {
        let data = [0u8; 31];
        let mut reader = BinaryReader::new(&data);
        assert!(Palette::read(&mut reader).is_err());
    }
}
