//! Binary reader for fixed-offset parsing of byte slices.
//!
//! This module provides [`BinaryReader`], a cursor over a borrowed byte slice.
//! Every read checks the remaining length first, so a short or corrupt file
//! surfaces as [`Error::UnexpectedEof`] instead of a panic.

use crate::{Error, Result};

/// A cursor that reads little-endian values from a byte slice.
///
/// # Example
///
/// ```
/// use tex2bmp_common::BinaryReader;
///
/// let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06];
/// let mut reader = BinaryReader::new(&data);
///
/// assert_eq!(reader.read_i32().unwrap(), 0x04030201);
/// assert_eq!(reader.read_u16().unwrap(), 0x0605);
/// assert!(reader.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct BinaryReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> BinaryReader<'a> {
    /// Create a new reader from a byte slice.
    #[inline]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Get the current position in the buffer.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Get the number of bytes remaining to read.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Check if there are no more bytes to read.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Seek to an absolute position.
    ///
    /// Seeking past the end is allowed; the next read reports the shortfall.
    #[inline]
    pub fn seek(&mut self, position: usize) {
        self.position = position;
    }

    /// Seek to `count` bytes before the end of the buffer.
    pub fn seek_from_end(&mut self, count: usize) -> Result<()> {
        let position = self
            .data
            .len()
            .checked_sub(count)
            .ok_or(Error::UnexpectedEof {
                needed: count,
                available: self.data.len(),
            })?;
        self.position = position;
        Ok(())
    }

    /// Peek at bytes without advancing the position.
    #[inline]
    pub fn peek_bytes(&self, count: usize) -> Result<&'a [u8]> {
        self.position
            .checked_add(count)
            .and_then(|end| self.data.get(self.position..end))
            .ok_or(Error::UnexpectedEof {
                needed: count,
                available: self.remaining(),
            })
    }

    /// Read bytes and advance the position.
    #[inline]
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        let bytes = self.peek_bytes(count)?;
        self.position += count;
        Ok(bytes)
    }

    /// Read a single byte.
    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        self.read_bytes(1).map(|b| b[0])
    }

    /// Read a little-endian u16.
    #[inline]
    pub fn read_u16(&mut self) -> Result<u16> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// Read a little-endian i32.
    #[inline]
    pub fn read_i32(&mut self) -> Result<i32> {
        let bytes = self.read_bytes(4)?;
        Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_primitives() {
        let data = [
            0x01u8, 0x02, 0x03, 0x04, // i32: 0x04030201
            0xFF, 0xFF, 0xFF, 0xFF, // i32: -1
            0x34, 0x12, // u16: 0x1234
        ];
        let mut reader = BinaryReader::new(&data);

        assert_eq!(reader.read_i32().unwrap(), 0x04030201);
        assert_eq!(reader.read_i32().unwrap(), -1);
        assert_eq!(reader.read_u16().unwrap(), 0x1234);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_peek_does_not_advance() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let mut reader = BinaryReader::new(&data);
        reader.seek(2);

        assert_eq!(reader.peek_bytes(2).unwrap(), &[0x03, 0x04]);
        assert_eq!(reader.position(), 2);
        assert_eq!(reader.remaining(), 2);
    }

    #[test]
    fn test_seek_from_end() {
        let data = [0u8, 1, 2, 3, 4, 5];
        let mut reader = BinaryReader::new(&data);

        reader.seek_from_end(2).unwrap();
        assert_eq!(reader.position(), 4);
        assert_eq!(reader.read_u8().unwrap(), 4);

        assert!(matches!(
            reader.seek_from_end(7),
            Err(Error::UnexpectedEof {
                needed: 7,
                available: 6
            })
        ));
    }

    #[test]
    fn test_eof_error() {
        let data = [0x01, 0x02];
        let mut reader = BinaryReader::new(&data);

        assert!(reader.read_i32().is_err());
        // A failed read leaves the cursor where it was.
        assert_eq!(reader.position(), 0);

        reader.seek(10);
        assert_eq!(reader.remaining(), 0);
        assert!(reader.read_u8().is_err());
    }
}
