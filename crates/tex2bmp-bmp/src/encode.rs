//! Pixel serialization.

use std::io::Write;

use tex2bmp_tex::{Palette, Texture, TRANSPARENT_INDEX};
use tracing::trace;

use crate::{BmpHeader, Error, Result, TRANSPARENT_COLOR};

/// Encode a parsed texture as a bitmap.
pub fn encode_texture(texture: &Texture) -> Result<Vec<u8>> {
    encode_bitmap(
        texture.width(),
        texture.height(),
        texture.indices(),
        texture.palette(),
    )
}

/// Encode palette indices as a bitmap held in memory.
///
/// `indices` is row-major with the top row first; it must hold exactly
/// `width * height` entries.
pub fn encode_bitmap(width: u32, height: u32, indices: &[u8], palette: &Palette) -> Result<Vec<u8>> {
    let header = BmpHeader::new(width, height)?;
    let mut output = Vec::with_capacity(header.file_size as usize);
    write_with_header(&mut output, &header, indices, palette)?;
    Ok(output)
}

/// Stream a bitmap to `writer`.
///
/// Rows are emitted bottom-up, left to right, three bytes per pixel in
/// R, G, B order, with no row padding.
pub fn write_bitmap<W: Write>(
    writer: &mut W,
    width: u32,
    height: u32,
    indices: &[u8],
    palette: &Palette,
) -> Result<()> {
    let header = BmpHeader::new(width, height)?;
    write_with_header(writer, &header, indices, palette)
}

fn write_with_header<W: Write>(
    writer: &mut W,
    header: &BmpHeader,
    indices: &[u8],
    palette: &Palette,
) -> Result<()> {
    // Both dimensions were checked to fit an i32 by `BmpHeader::new`.
    let (width, height) = (header.width as usize, header.height as usize);

    let expected = width * height;
    if indices.len() != expected {
        return Err(Error::PixelCountMismatch {
            expected,
            actual: indices.len(),
        });
    }

    header.write_to(writer)?;

    let mut row = Vec::with_capacity(width * 3);
    for y in (0..height).rev() {
        row.clear();
        for (x, &index) in indices[y * width..(y + 1) * width].iter().enumerate() {
            let color = match index {
                TRANSPARENT_INDEX => TRANSPARENT_COLOR,
                index => palette.get(index).ok_or(Error::IndexOutOfRange {
                    index,
                    position: y * width + x,
                })?,
            };
            row.extend_from_slice(&[color.r, color.g, color.b]);
        }
        writer.write_all(&row)?;
    }

    trace!(width, height, bytes = header.file_size, "wrote bitmap");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BMP_HEADER_SIZE;
    use tex2bmp_tex::{decode_rgb555, Rgb};

    fn palette() -> Palette {
        let mut colors = [Rgb::new(1, 2, 3); 16];
        colors[0] = Rgb::new(200, 100, 50);
        colors[1] = decode_rgb555(0x7FFF);
        colors[2] = Rgb::new(10, 20, 30);
        colors[3] = Rgb::new(40, 50, 60);
        Palette::new(colors)
    }

    fn pixels(bitmap: &[u8]) -> Vec<[u8; 3]> {
        bitmap[BMP_HEADER_SIZE as usize..]
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect()
    }

    #[test]
    fn test_bottom_up_with_transparency() {
        // Top row: [1, 0], bottom row: [1, 1].
        let bitmap = encode_bitmap(2, 2, &[1, 0, 1, 1], &palette()).unwrap();
        let white = [255, 255, 255];

        assert_eq!(bitmap.len(), 54 + 2 * 2 * 3);
        assert_eq!(pixels(&bitmap), vec![white, white, white, [0, 0, 0]]);
    }

    #[test]
    fn test_channel_order_is_rgb() {
        let bitmap = encode_bitmap(2, 1, &[2, 3], &palette()).unwrap();
        assert_eq!(&bitmap[54..], &[10, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn test_rows_are_not_padded() {
        for (w, h) in [(1, 1), (3, 5), (5, 2), (7, 3)] {
            let indices = vec![1u8; (w * h) as usize];
            let bitmap = encode_bitmap(w, h, &indices, &palette()).unwrap();
            assert_eq!(bitmap.len(), 54 + (w * h * 3) as usize);
            assert_eq!(bitmap[2..6], (bitmap.len() as u32).to_le_bytes());
        }
    }

    #[test]
    fn test_streamed_matches_in_memory() {
        let indices = [1, 2, 3, 0, 0, 3, 2, 1, 1];
        let bitmap = encode_bitmap(3, 3, &indices, &palette()).unwrap();
        assert_eq!(bitmap.len(), 54 + 3 * 3 * 3);

        let mut streamed = Vec::new();
        write_bitmap(&mut streamed, 3, 3, &indices, &palette()).unwrap();
        assert_eq!(streamed, bitmap);
    }

    #[test]
    fn test_pixel_count_mismatch() {
        assert!(matches!(
            encode_bitmap(2, 2, &[1, 1, 1], &palette()),
            Err(Error::PixelCountMismatch {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_index_out_of_range() {
        assert!(matches!(
            encode_bitmap(2, 1, &[1, 16], &palette()),
            Err(Error::IndexOutOfRange {
                index: 16,
                position: 1
            })
        ));
    }

    #[test]
    fn test_decodes_as_bitmap() {
        // Width 4 keeps rows 4-byte aligned, so a standard reader accepts it.
        let indices = [1, 2, 3, 0, 0, 3, 2, 1];
        let bitmap = encode_bitmap(4, 2, &indices, &palette()).unwrap();

        let image = image::load_from_memory_with_format(&bitmap, image::ImageFormat::Bmp)
            .unwrap()
            .to_rgb8();
        assert_eq!(image.dimensions(), (4, 2));

        // Readers interpret the bytes as B, G, R, so channels appear reversed.
        assert_eq!(image.get_pixel(1, 0).0, [30, 20, 10]);
        assert_eq!(image.get_pixel(3, 0).0, [0, 0, 0]);
        assert_eq!(image.get_pixel(1, 1).0, [60, 50, 40]);
    }
}
