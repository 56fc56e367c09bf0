//! The error type returned by every decoding step.
//!
//! Each variant corresponds to one message template; the [`Display`](std::fmt::Display)
//! implementation produces the exact text, so callers can either match on the variant or compare
//! the rendered string.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Shorthand for results produced while decoding an ELF file.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Represents an error that can occur while decoding an ELF file.
///
/// Errors are permanent: they describe the first structural problem found in the input and the
/// decoder stops there.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file could not be read.
    #[error("{action} {} {source}", .path.display())]
    Io {
        /// What was being attempted, e.g. `open`.
        action: &'static str,
        /// The file the action was applied to.
        path: PathBuf,
        /// The underlying system error.
        #[source]
        source: io::Error,
    },
    /// A read would go past the end of the data.
    #[error("attempting to read {requested} byte(s) at index {index} when buffer size is {size}")]
    OutOfBounds {
        /// Number of bytes the read needed.
        requested: usize,
        /// Cursor position at the time of the read.
        index: usize,
        /// Total size of the data.
        size: usize,
    },
    /// A seek target lies past the end of the data.
    #[error("attempting to seek to index {position} when buffer size is {size}")]
    SeekOutOfBounds {
        /// Requested cursor position.
        position: u64,
        /// Total size of the data.
        size: usize,
    },
    /// The file does not start with `\x7fELF`.
    #[error("invalid ELF magic number: {}", HexBytes(.0))]
    InvalidMagic([u8; 4]),
    /// `ei_class` is `ELFCLASSNONE`.
    #[error("invalid ELF class: ELFCLASSNONE")]
    InvalidClass,
    /// `ei_class` is not a defined class.
    #[error("unknown ELF class: 0x{0:02x}")]
    UnknownClass(u8),
    /// `ei_data` is `ELFDATANONE`.
    #[error("invalid ELF data encoding: ELFDATANONE")]
    InvalidEncoding,
    /// `ei_data` is not a defined byte order.
    #[error("unknown ELF data encoding: 0x{0:02x}")]
    UnknownEncoding(u8),
    /// `ei_version` or `e_version` is `EV_NONE`.
    #[error("invalid ELF version: EV_NONE")]
    InvalidVersion,
    /// `ei_version` or `e_version` is neither `EV_NONE` nor `EV_CURRENT`.
    #[error("unknown ELF version: 0x{0:02x}")]
    UnknownVersion(u32),
    /// `ei_osabi` is not in the table of known operating systems.
    #[error("unknown OS ABI: 0x{0:02x}")]
    UnknownOsAbi(u8),
    /// `e_type` is `ET_NONE`.
    #[error("invalid ELF type: ET_NONE")]
    InvalidType,
    /// `e_type` is neither a defined type nor inside a reserved range.
    #[error("unknown ELF type: 0x{0:04x}")]
    UnknownType(u16),
    /// `e_machine` is not a known architecture.
    #[error("unknown machine type: 0x{0:04x}")]
    UnknownMachine(u16),
    /// `e_phentsize` is too small for the class while program headers are present.
    #[error("invalid e_phentsize: {0}")]
    InvalidPhentsize(u16),
    /// `e_shentsize` is too small for the class while section headers are present.
    #[error("invalid e_shentsize: {0}")]
    InvalidShentsize(u16),
    /// Section headers are declared but `e_shoff` is zero.
    #[error("invalid e_shnum {0} for e_shoff=0")]
    InvalidShnum(u16),
    /// `e_shstrndx` does not index into the section header table.
    #[error("invalid e_shstrndx {shstrndx} since e_shnum is {shnum}")]
    InvalidShstrndx {
        /// The decoded `e_shstrndx`.
        shstrndx: u16,
        /// The decoded `e_shnum`.
        shnum: u16,
    },
    /// `ei_version` and `e_version` disagree.
    #[error("ELF version mismatch")]
    VersionMismatch,
    /// `p_type` is neither a defined type nor inside the processor-specific range.
    #[error("unknown program header type: 0x{0:04x}")]
    UnknownSegmentType(u32),
}

impl DecodeError {
    /// Returns true if the error reports a well-formed value this decoder does not recognize.
    pub fn is_unknown(&self) -> bool {
        matches!(
            self,
            DecodeError::UnknownClass(_)
                | DecodeError::UnknownEncoding(_)
                | DecodeError::UnknownVersion(_)
                | DecodeError::UnknownOsAbi(_)
                | DecodeError::UnknownType(_)
                | DecodeError::UnknownMachine(_)
                | DecodeError::UnknownSegmentType(_)
        )
    }

    /// Returns true if the error reports a reserved value or an inconsistency between fields.
    pub fn is_invalid(&self) -> bool {
        matches!(
            self,
            DecodeError::InvalidMagic(_)
                | DecodeError::InvalidClass
                | DecodeError::InvalidEncoding
                | DecodeError::InvalidVersion
                | DecodeError::InvalidType
                | DecodeError::InvalidPhentsize(_)
                | DecodeError::InvalidShentsize(_)
                | DecodeError::InvalidShnum(_)
                | DecodeError::InvalidShstrndx { .. }
                | DecodeError::VersionMismatch
        )
    }
}

struct HexBytes<'a>(&'a [u8]);

impl fmt::Display for HexBytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{byte:02x}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            DecodeError::OutOfBounds {
                requested: 4,
                index: 62,
                size: 64
            }
            .to_string(),
            "attempting to read 4 byte(s) at index 62 when buffer size is 64"
        );
        assert_eq!(
            DecodeError::InvalidMagic([0x7f, 0x45, 0x4c, 0x00]).to_string(),
            "invalid ELF magic number: 7f 45 4c 00"
        );
        assert_eq!(
            DecodeError::UnknownClass(3).to_string(),
            "unknown ELF class: 0x03"
        );
        assert_eq!(
            DecodeError::UnknownVersion(0x1234).to_string(),
            "unknown ELF version: 0x1234"
        );
        assert_eq!(
            DecodeError::UnknownType(0x00ab).to_string(),
            "unknown ELF type: 0x00ab"
        );
        assert_eq!(
            DecodeError::UnknownSegmentType(0x6474e551).to_string(),
            "unknown program header type: 0x6474e551"
        );
        assert_eq!(
            DecodeError::InvalidShstrndx {
                shstrndx: 61680,
                shnum: 3598
            }
            .to_string(),
            "invalid e_shstrndx 61680 since e_shnum is 3598"
        );
    }

    #[test]
    fn io_message() {
        let error = DecodeError::Io {
            action: "open",
            path: PathBuf::from("missing.elf"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };

        assert_eq!(
            error.to_string(),
            "open missing.elf No such file or directory"
        );
    }

    #[test]
    fn unknown_and_invalid_are_distinct() {
        assert!(DecodeError::UnknownMachine(0xbeef).is_unknown());
        assert!(!DecodeError::UnknownMachine(0xbeef).is_invalid());
        assert!(DecodeError::InvalidType.is_invalid());
        assert!(!DecodeError::InvalidType.is_unknown());
        assert!(!DecodeError::VersionMismatch.is_unknown());
    }
}
