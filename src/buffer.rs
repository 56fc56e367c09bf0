//! A bounds-checked cursor over the raw bytes of a file.
//!
//! Every read goes through [`ByteBuffer::validate_read`] before touching the data, and a failed
//! read leaves the cursor where it was.

use crate::error::{DecodeError, Result};

/// A read cursor over a borrowed slice of bytes.
///
/// The cursor never moves past the end of the data: `0 <= index <= len`.
#[derive(Debug, Clone)]
pub struct ByteBuffer<'data> {
    bytes: &'data [u8],
    index: usize,
}

impl<'data> ByteBuffer<'data> {
    /// Creates a buffer positioned at the start of `bytes`.
    pub fn new(bytes: &'data [u8]) -> Self {
        Self { bytes, index: 0 }
    }

    /// Returns the current cursor position.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the total size of the data.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the buffer holds no data.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Checks that `n` bytes can be read at the cursor.
    pub fn validate_read(&self, n: usize) -> Result<()> {
        match self.index.checked_add(n) {
            Some(end) if end <= self.bytes.len() => Ok(()),
            _ => Err(DecodeError::OutOfBounds {
                requested: n,
                index: self.index,
                size: self.bytes.len(),
            }),
        }
    }

    /// Reads one byte and advances the cursor past it.
    pub fn u8(&mut self) -> Result<u8> {
        self.validate_read(1)?;
        let value = self.bytes[self.index];
        self.index += 1;

        Ok(value)
    }

    /// Reads `length` raw bytes without interpreting them.
    pub fn fixed_length_string(&mut self, length: usize) -> Result<&'data [u8]> {
        self.validate_read(length)?;
        let bytes = &self.bytes[self.index..self.index + length];
        self.index += length;

        Ok(bytes)
    }

    /// Moves the cursor to `position`. Seeking to the very end is allowed; reads from there fail.
    pub fn seek(&mut self, position: u64) -> Result<()> {
        match usize::try_from(position) {
            Ok(index) if index <= self.bytes.len() => {
                log::trace!("seek {} -> {index}", self.index);
                self.index = index;
                Ok(())
            }
            _ => Err(DecodeError::SeekOutOfBounds {
                position,
                size: self.bytes.len(),
            }),
        }
    }

    /// Skips `n` bytes without reading them.
    pub fn advance(&mut self, n: usize) -> Result<()> {
        self.validate_read(n)?;
        self.index += n;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_read_bounds() {
        let bytes = [0u8; 8];
        let mut buffer = ByteBuffer::new(&bytes);
        assert_eq!(buffer.len(), 8);

        for size in 0..=8 {
            assert!(buffer.validate_read(size).is_ok());
        }
        assert!(buffer.validate_read(9).is_err());

        buffer.seek(5).unwrap();
        assert!(buffer.validate_read(3).is_ok());
        assert_eq!(
            buffer.validate_read(4).unwrap_err().to_string(),
            "attempting to read 4 byte(s) at index 5 when buffer size is 8"
        );
        assert!(buffer.validate_read(usize::MAX).is_err());
    }

    #[test]
    fn u8_advances() {
        let mut buffer = ByteBuffer::new(&[0x12, 0x34]);

        assert_eq!(buffer.u8().unwrap(), 0x12);
        assert_eq!(buffer.u8().unwrap(), 0x34);
        assert_eq!(buffer.index(), 2);
        assert_eq!(
            buffer.u8().unwrap_err().to_string(),
            "attempting to read 1 byte(s) at index 2 when buffer size is 2"
        );
        assert_eq!(buffer.index(), 2);
    }

    #[test]
    fn empty_buffer() {
        let mut buffer = ByteBuffer::new(&[]);

        assert!(buffer.is_empty());
        assert_eq!(
            buffer.u8().unwrap_err().to_string(),
            "attempting to read 1 byte(s) at index 0 when buffer size is 0"
        );
    }

    #[test]
    fn fixed_length_string() {
        let mut buffer = ByteBuffer::new(b"\x7fELF\x02");

        assert_eq!(buffer.fixed_length_string(4).unwrap(), b"\x7fELF");
        assert_eq!(buffer.index(), 4);
        assert!(buffer.fixed_length_string(2).is_err());
        assert_eq!(buffer.index(), 4);
        assert_eq!(buffer.fixed_length_string(0).unwrap(), b"");
    }

    #[test]
    fn seek_and_advance() {
        let mut buffer = ByteBuffer::new(&[1, 2, 3, 4]);

        buffer.seek(3).unwrap();
        assert_eq!(buffer.u8().unwrap(), 4);
        buffer.seek(4).unwrap();
        assert_eq!(buffer.index(), 4);
        assert_eq!(
            buffer.seek(5).unwrap_err().to_string(),
            "attempting to seek to index 5 when buffer size is 4"
        );
        assert_eq!(buffer.index(), 4);

        buffer.seek(0).unwrap();
        buffer.advance(2).unwrap();
        assert_eq!(buffer.u8().unwrap(), 3);
        assert!(buffer.advance(2).is_err());
        assert_eq!(buffer.index(), 3);
    }
}
