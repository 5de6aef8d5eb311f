//! RGB555 colour decoding.

/// An 8-bit-per-channel colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black, also used as the transparency key colour.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Create a colour from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Scale a 5-bit channel value to 8 bits (`v * 255 / 31`, truncating).
///
/// Bits above the low five are ignored.
#[inline]
pub const fn scale_5_to_8(value: u8) -> u8 {
    ((value as u16 & 0x1F) * 255 / 31) as u8
}

/// Decode a packed `0RRRRRGGGGGBBBBB` value.
///
/// The top bit is unused and ignored.
#[inline]
pub const fn decode_rgb555(packed: u16) -> Rgb {
    Rgb::new(
        scale_5_to_8((packed >> 10) as u8),
        scale_5_to_8((packed >> 5) as u8),
        scale_5_to_8(packed as u8),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_endpoints() {
        assert_eq!(scale_5_to_8(0), 0);
        assert_eq!(scale_5_to_8(31), 255);
        assert_eq!(scale_5_to_8(1), 8);
        assert_eq!(scale_5_to_8(16), 131);
    }

    #[test]
    fn test_scale_is_monotonic() {
        for v in 1..=31u8 {
            assert!(scale_5_to_8(v) >= scale_5_to_8(v - 1), "not monotonic at {v}");
        }
    }

    #[test]
    fn test_decode_channels() {
        assert_eq!(decode_rgb555(0x0000), Rgb::BLACK);
        assert_eq!(decode_rgb555(0x7FFF), Rgb::new(255, 255, 255));
        assert_eq!(decode_rgb555(0x7C00), Rgb::new(255, 0, 0));
        assert_eq!(decode_rgb555(0x03E0), Rgb::new(0, 255, 0));
        assert_eq!(decode_rgb555(0x001F), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_decode_ignores_high_bit() {
        for packed in [0x0000u16, 0x1234, 0x7FFF, 0x4210] {
            assert_eq!(decode_rgb555(packed), decode_rgb555(packed | 0x8000));
        }
    }
}
