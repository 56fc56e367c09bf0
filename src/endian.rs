//! Byte-order dependent integer readers.
//!
//! A wide integer is read as two halves of half the width, and the halves are combined according
//! to the byte order: `u16` from two `u8`, `u32` from two `u16`, `u64` from two `u32`. The full
//! width is validated before the first half is read, so a short buffer reports the size of the
//! whole integer and leaves the cursor untouched.

use crate::{buffer::ByteBuffer, error::Result};

/// Assembles multi-byte integers from a [`ByteBuffer`] in a fixed byte order.
///
/// The implementation is picked once per file from `ei_data` through
/// [`Endianness::reader`](crate::Endianness::reader) and passed down to every decoder.
pub trait EndianReader: Sync {
    /// Combines two bytes, in the order they appear in the file, into a [`u16`].
    fn join_u16(&self, first: u8, second: u8) -> u16;

    /// Combines two [`u16`] halves, in the order they appear in the file, into a [`u32`].
    fn join_u32(&self, first: u16, second: u16) -> u32;

    /// Combines two [`u32`] halves, in the order they appear in the file, into a [`u64`].
    fn join_u64(&self, first: u32, second: u32) -> u64;

    /// Reads a [`u16`] at the cursor.
    fn u16(&self, buffer: &mut ByteBuffer<'_>) -> Result<u16> {
        buffer.validate_read(2)?;
        let first = buffer.u8()?;
        let second = buffer.u8()?;

        Ok(self.join_u16(first, second))
    }

    /// Reads a [`u32`] at the cursor.
    fn u32(&self, buffer: &mut ByteBuffer<'_>) -> Result<u32> {
        buffer.validate_read(4)?;
        let first = self.u16(buffer)?;
        let second = self.u16(buffer)?;

        Ok(self.join_u32(first, second))
    }

    /// Reads a [`u64`] at the cursor.
    fn u64(&self, buffer: &mut ByteBuffer<'_>) -> Result<u64> {
        buffer.validate_read(8)?;
        let first = self.u32(buffer)?;
        let second = self.u32(buffer)?;

        Ok(self.join_u64(first, second))
    }
}

/// Least significant half first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LittleEndian;

/// Most significant half first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BigEndian;

impl EndianReader for LittleEndian {
    fn join_u16(&self, first: u8, second: u8) -> u16 {
        u16::from(second) << 8 | u16::from(first)
    }

    fn join_u32(&self, first: u16, second: u16) -> u32 {
        u32::from(second) << 16 | u32::from(first)
    }

    fn join_u64(&self, first: u32, second: u32) -> u64 {
        u64::from(second) << 32 | u64::from(first)
    }
}

impl EndianReader for BigEndian {
    fn join_u16(&self, first: u8, second: u8) -> u16 {
        u16::from(first) << 8 | u16::from(second)
    }

    fn join_u32(&self, first: u16, second: u16) -> u32 {
        u32::from(first) << 16 | u32::from(second)
    }

    fn join_u64(&self, first: u32, second: u32) -> u64 {
        u64::from(first) << 32 | u64::from(second)
    }
}
