//! elfcheck is a library for decoding and validating the header of ELF files.
//!
//! It decodes the identification bytes, the file header and the program header table of 32-bit
//! and 64-bit, little endian and big endian ELF files, and rejects files whose fields are
//! reserved, unknown or inconsistent with each other. Every read is bounds-checked.
//!
//! # Limitations
//!
//! Section headers, symbols and relocations are not decoded, and ELF files cannot be written.
//!
//! # Examples
//!
//! See [`reader`].

#![warn(missing_docs)]

pub mod buffer;
mod consts;
pub mod endian;
mod error;
pub mod reader;

pub use flagset;

#[doc(inline)]
pub use buffer::ByteBuffer;
pub use consts::{
    ElfClass, ElfKind, ElfVersion, Endianness, MachineKind, OsAbi, SegmentFlag, SegmentKind,
};
#[doc(inline)]
pub use endian::{BigEndian, EndianReader, LittleEndian};
pub use error::{DecodeError, Result};
#[doc(inline)]
pub use reader::{check_magic, Elf, ElfValue, Header, Ident, ProgramHeader};
