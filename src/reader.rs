//! Decoders for the ELF header and the program header table.
//!
//! The root of the decoding is [`Elf`], which runs every stage in order and stops at the first
//! error. The stages are also available on their own: [`check_magic`], [`Ident::decode`],
//! [`Header::decode`] and [`ProgramHeader::decode_table`].
//!
//! # Examples
//!
//! ```no_run
//! let elf = elfcheck::Elf::open("/usr/bin/bash")?;
//! println!("File target architecture: {:?}", elf.header().machine());
//! for segment in elf.program_headers() {
//!     println!("{:?} at {:?}", segment.kind(), segment.offset());
//! }
//! # Ok::<(), elfcheck::DecodeError>(())
//! ```

use std::path::Path;

use flagset::FlagSet;
use num_traits::FromPrimitive;

use crate::{
    buffer::ByteBuffer,
    consts::{
        ElfClass, ElfKind, ElfVersion, Endianness, MachineKind, OsAbi, SegmentFlag, SegmentKind,
        EI_PAD_LEN, ELF_MAGIC, ET_HIOS, ET_HIPROC, ET_LOOS, ET_LOPROC, PT_HIPROC, PT_LOPROC,
        P_TYPE_LEN,
    },
    endian::EndianReader,
    error::{DecodeError, Result},
};

/// A fully decoded ELF header together with its program header table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elf {
    header: Header,
    program_headers: Vec<ProgramHeader>,
}

impl Elf {
    /// Reads the file at `path` and decodes it with [`Elf::parse`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| DecodeError::Io {
            action: "open",
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("read {} bytes from {}", bytes.len(), path.display());

        Self::parse(&bytes)
    }

    /// Decodes the magic number, the identification bytes, the file header and every program
    /// header, in that order. The first violation found is returned and nothing else is decoded.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let mut buffer = ByteBuffer::new(bytes);

        check_magic(&mut buffer)?;
        let ident = Ident::decode(&mut buffer)?;
        let header = Header::decode(&mut buffer, ident)?;
        let program_headers = ProgramHeader::decode_table(&mut buffer, &header)?;

        Ok(Self {
            header,
            program_headers,
        })
    }

    /// The ELF header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// The program headers, in table order.
    pub fn program_headers(&self) -> &[ProgramHeader] {
        &self.program_headers
    }
}

/// Reads the four magic bytes at the cursor and checks that they are `\x7fELF`.
pub fn check_magic(buffer: &mut ByteBuffer<'_>) -> Result<()> {
    let magic = buffer.fixed_length_string(ELF_MAGIC.len())?;

    if magic != ELF_MAGIC {
        let mut actual = [0; 4];
        actual.copy_from_slice(magic);
        return Err(DecodeError::InvalidMagic(actual));
    }

    Ok(())
}

/// The identification bytes following the magic number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ident {
    class: ElfClass,
    endianness: Endianness,
    version: ElfVersion,
    osabi: OsAbi,
    abiversion: u8,
}

impl Ident {
    /// Decodes `ei_class`, `ei_data`, `ei_version`, `ei_osabi` and `ei_abiversion`, one byte each.
    /// The cursor must be right after the magic number.
    pub fn decode(buffer: &mut ByteBuffer<'_>) -> Result<Self> {
        let class = match buffer.u8()? {
            1 => ElfClass::Elf32,
            2 => ElfClass::Elf64,
            0 => return Err(DecodeError::InvalidClass),
            other => return Err(DecodeError::UnknownClass(other)),
        };

        let endianness = match buffer.u8()? {
            1 => Endianness::Little,
            2 => Endianness::Big,
            0 => return Err(DecodeError::InvalidEncoding),
            other => return Err(DecodeError::UnknownEncoding(other)),
        };

        let version = decode_version(buffer.u8()?.into())?;

        let osabi = buffer.u8()?;
        let osabi = OsAbi::from_u8(osabi).ok_or(DecodeError::UnknownOsAbi(osabi))?;

        let abiversion = buffer.u8()?;

        let ident = Self {
            class,
            endianness,
            version,
            osabi,
            abiversion,
        };
        log::debug!("decoded identification: {ident:?}");

        Ok(ident)
    }

    /// Whether addresses are 32 or 64 bits wide. `ei_class`.
    pub fn class(&self) -> ElfClass {
        self.class
    }

    /// The byte order of every multi-byte field after the identification bytes. `ei_data`.
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// The version of the identification bytes. `ei_version`.
    pub fn version(&self) -> ElfVersion {
        self.version
    }

    /// The operating system or ABI of the ELF file. `ei_osabi`.
    pub fn osabi(&self) -> OsAbi {
        self.osabi
    }

    /// The ABI version, left uninterpreted. `ei_abiversion`.
    pub fn abiversion(&self) -> u8 {
        self.abiversion
    }
}

fn decode_version(value: u32) -> Result<ElfVersion> {
    match value {
        1 => Ok(ElfVersion::Current),
        0 => Err(DecodeError::InvalidVersion),
        other => Err(DecodeError::UnknownVersion(other)),
    }
}

fn decode_kind(value: u16) -> Result<ElfValue<ElfKind, u16>> {
    match value {
        0 => Err(DecodeError::InvalidType),
        ET_LOOS..=ET_HIOS => Ok(ElfValue::OsSpecific(value)),
        ET_LOPROC..=ET_HIPROC => Ok(ElfValue::ProcessorSpecific(value)),
        _ => ElfKind::from_u16(value)
            .map(ElfValue::Known)
            .ok_or(DecodeError::UnknownType(value)),
    }
}

fn decode_segment_kind(value: u32) -> Result<ElfValue<SegmentKind, u32>> {
    match value {
        PT_LOPROC..=PT_HIPROC => Ok(ElfValue::ProcessorSpecific(value)),
        _ => SegmentKind::from_u32(value)
            .map(ElfValue::Known)
            .ok_or(DecodeError::UnknownSegmentType(value)),
    }
}

/// Reads an address or offset field, 4 bytes wide for 32-bit files and 8 bytes for 64-bit files.
fn read_address(
    buffer: &mut ByteBuffer<'_>,
    class: ElfClass,
    reader: &dyn EndianReader,
) -> Result<u64> {
    match class {
        ElfClass::Elf32 => reader.u32(buffer).map(u64::from),
        ElfClass::Elf64 => reader.u64(buffer),
    }
}

/// The ELF file header.
///
/// Address and offset fields are widened to [`u64`] for 32-bit files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    ident: Ident,
    kind: ElfValue<ElfKind, u16>,
    machine: MachineKind,
    version: ElfVersion,
    entry: u64,
    phoff: u64,
    shoff: u64,
    flags: u32,
    ehsize: u16,
    phentsize: u16,
    phnum: u16,
    shentsize: u16,
    shnum: u16,
    shstrndx: u16,
}

impl Header {
    /// Decodes the rest of the header. The cursor must be right after the identification bytes;
    /// the padding that ends `e_ident` is skipped first.
    ///
    /// Fields are read in file order, and each check only uses fields read before it. Multi-byte
    /// fields use the byte order selected by `ident`.
    pub fn decode(buffer: &mut ByteBuffer<'_>, ident: Ident) -> Result<Self> {
        let class = ident.class();
        let reader = ident.endianness().reader();

        buffer.advance(EI_PAD_LEN)?;

        let kind = decode_kind(reader.u16(buffer)?)?;

        let machine = reader.u16(buffer)?;
        let machine = MachineKind::from_u16(machine).ok_or(DecodeError::UnknownMachine(machine))?;

        let version = decode_version(reader.u32(buffer)?)?;

        let entry = read_address(buffer, class, reader)?;
        let phoff = read_address(buffer, class, reader)?;
        let shoff = read_address(buffer, class, reader)?;
        let flags = reader.u32(buffer)?;
        let ehsize = reader.u16(buffer)?;

        let phentsize = reader.u16(buffer)?;
        let phnum = reader.u16(buffer)?;
        if phnum > 0 && phentsize < class.min_phentsize() {
            return Err(DecodeError::InvalidPhentsize(phentsize));
        }

        let shentsize = reader.u16(buffer)?;
        let shnum = reader.u16(buffer)?;
        if shnum > 0 {
            if shentsize < class.min_shentsize() {
                return Err(DecodeError::InvalidShentsize(shentsize));
            }
            if shoff == 0 {
                return Err(DecodeError::InvalidShnum(shnum));
            }
        }

        let shstrndx = reader.u16(buffer)?;
        if shnum > 0 && shstrndx >= shnum {
            return Err(DecodeError::InvalidShstrndx { shstrndx, shnum });
        }

        if version != ident.version() {
            return Err(DecodeError::VersionMismatch);
        }

        let header = Self {
            ident,
            kind,
            machine,
            version,
            entry,
            phoff,
            shoff,
            flags,
            ehsize,
            phentsize,
            phnum,
            shentsize,
            shnum,
            shstrndx,
        };
        log::debug!(
            "decoded header: {:?} {} entry=0x{entry:x} phnum={phnum} shnum={shnum}",
            header.kind,
            header.machine.symbol()
        );

        Ok(header)
    }

    /// The identification bytes the header was decoded with.
    pub fn ident(&self) -> &Ident {
        &self.ident
    }

    /// Shorthand for `self.ident().class()`.
    pub fn class(&self) -> ElfClass {
        self.ident.class()
    }

    /// The type of the ELF file. `e_type`.
    pub fn kind(&self) -> ElfValue<ElfKind, u16> {
        self.kind
    }

    /// The required architecture of the ELF file. `e_machine`.
    pub fn machine(&self) -> MachineKind {
        self.machine
    }

    /// The version of the ELF file. `e_version`.
    pub fn version(&self) -> ElfVersion {
        self.version
    }

    /// The entrypoint address of the program, or 0 if unspecified. `e_entry`.
    pub fn entry(&self) -> u64 {
        self.entry
    }

    /// The offset at which the program headers are located in the ELF file. `e_phoff`.
    pub fn phoff(&self) -> u64 {
        self.phoff
    }

    /// The offset at which the section headers are located in the ELF file. `e_shoff`.
    pub fn shoff(&self) -> u64 {
        self.shoff
    }

    /// Processor-specific flags. `e_flags`.
    pub fn flags(&self) -> u32 {
        self.flags
    }

    /// The size of the ELF header. `e_ehsize`.
    pub fn ehsize(&self) -> u16 {
        self.ehsize
    }

    /// The size of a program header table entry. `e_phentsize`.
    pub fn phentsize(&self) -> u16 {
        self.phentsize
    }

    /// The number of program headers in the ELF file. `e_phnum`.
    pub fn phnum(&self) -> u16 {
        self.phnum
    }

    /// The size of a section header table entry. `e_shentsize`.
    pub fn shentsize(&self) -> u16 {
        self.shentsize
    }

    /// The number of section headers in the ELF file. `e_shnum`.
    pub fn shnum(&self) -> u16 {
        self.shnum
    }

    /// The index of the section containing the section name string table. `e_shstrndx`.
    pub fn shstrndx(&self) -> u16 {
        self.shstrndx
    }
}

/// An entry of the program header table.
///
/// Only `p_type` is required. The remaining fields are decoded when the whole class-sized entry
/// lies inside the data, and are `None` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramHeader {
    kind: ElfValue<SegmentKind, u32>,
    fields: Option<SegmentFields>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SegmentFields {
    flags: u32,
    offset: u64,
    vaddr: u64,
    paddr: u64,
    filesz: u64,
    memsz: u64,
    align: u64,
}

impl ProgramHeader {
    /// Decodes every entry of the program header table, starting with index 0.
    ///
    /// Entry `i` is read at `e_phoff + i * e_phentsize`, so entries larger than the fields decoded
    /// here are handled.
    pub fn decode_table(buffer: &mut ByteBuffer<'_>, header: &Header) -> Result<Vec<Self>> {
        let reader = header.ident().endianness().reader();
        let mut program_headers = Vec::with_capacity(header.phnum().into());

        for index in 0..header.phnum() {
            // an overflowing offset saturates and fails the seek
            let offset = header
                .phoff()
                .saturating_add(u64::from(index).saturating_mul(header.phentsize().into()));

            buffer.seek(offset)?;
            let program_header = Self::decode(buffer, header.class(), reader)?;
            log::debug!("decoded program header {index} at 0x{offset:x}: {program_header:?}");

            program_headers.push(program_header);
        }

        Ok(program_headers)
    }

    /// Decodes one entry at the cursor. The field order depends on the class.
    pub fn decode(
        buffer: &mut ByteBuffer<'_>,
        class: ElfClass,
        reader: &dyn EndianReader,
    ) -> Result<Self> {
        let kind = decode_segment_kind(reader.u32(buffer)?)?;

        let rest = usize::from(class.min_phentsize()) - P_TYPE_LEN;
        if buffer.validate_read(rest).is_err() {
            log::debug!("program header at {} holds only p_type", buffer.index() - P_TYPE_LEN);
            return Ok(Self { kind, fields: None });
        }

        // p_flags comes right after p_type in 64-bit entries, before p_align in 32-bit ones
        let fields = match class {
            ElfClass::Elf32 => {
                let offset = read_address(buffer, class, reader)?;
                let vaddr = read_address(buffer, class, reader)?;
                let paddr = read_address(buffer, class, reader)?;
                let filesz = read_address(buffer, class, reader)?;
                let memsz = read_address(buffer, class, reader)?;
                let flags = reader.u32(buffer)?;
                let align = read_address(buffer, class, reader)?;

                SegmentFields {
                    flags,
                    offset,
                    vaddr,
                    paddr,
                    filesz,
                    memsz,
                    align,
                }
            }
            ElfClass::Elf64 => {
                let flags = reader.u32(buffer)?;

                SegmentFields {
                    flags,
                    offset: read_address(buffer, class, reader)?,
                    vaddr: read_address(buffer, class, reader)?,
                    paddr: read_address(buffer, class, reader)?,
                    filesz: read_address(buffer, class, reader)?,
                    memsz: read_address(buffer, class, reader)?,
                    align: read_address(buffer, class, reader)?,
                }
            }
        };

        Ok(Self {
            kind,
            fields: Some(fields),
        })
    }

    /// Type of segment. `p_type`.
    pub fn kind(&self) -> ElfValue<SegmentKind, u32> {
        self.kind
    }

    /// Returns true if the fields after `p_type` were present and decoded.
    pub fn is_complete(&self) -> bool {
        self.fields.is_some()
    }

    /// Segment permissions during execution. OS- and processor-specific bits are dropped; see
    /// [`ProgramHeader::raw_flags`]. `p_flags`.
    pub fn flags(&self) -> Option<FlagSet<SegmentFlag>> {
        self.fields.map(|fields| FlagSet::new_truncated(fields.flags))
    }

    /// The undecoded `p_flags` word.
    pub fn raw_flags(&self) -> Option<u32> {
        self.fields.map(|fields| fields.flags)
    }

    /// The offset at which the segment's data is located in the ELF file. `p_offset`.
    pub fn offset(&self) -> Option<u64> {
        self.fields.map(|fields| fields.offset)
    }

    /// The virtual address which the segment should be loaded at during execution. `p_vaddr`.
    pub fn vaddr(&self) -> Option<u64> {
        self.fields.map(|fields| fields.vaddr)
    }

    /// The physical address which the segment should be loaded at during execution. `p_paddr`.
    pub fn paddr(&self) -> Option<u64> {
        self.fields.map(|fields| fields.paddr)
    }

    /// The number of bytes stored in the ELF file starting at [`ProgramHeader::offset`].
    /// `p_filesz`.
    pub fn filesz(&self) -> Option<u64> {
        self.fields.map(|fields| fields.filesz)
    }

    /// The number of bytes the segment occupies in memory during execution. `p_memsz`.
    pub fn memsz(&self) -> Option<u64> {
        self.fields.map(|fields| fields.memsz)
    }

    /// The required alignment of the segment's addresses. `p_align`.
    pub fn align(&self) -> Option<u64> {
        self.fields.map(|fields| fields.align)
    }
}

/// Represents the value of an enumerated field that also reserves ranges for extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElfValue<K, U> {
    /// The value is one of the generic values and `Known` contains its parsed representation.
    Known(K),
    /// The value lies in the range reserved for operating system specific semantics.
    OsSpecific(U),
    /// The value lies in the range reserved for processor specific semantics.
    ProcessorSpecific(U),
}

impl<K, U> ElfValue<K, U> {
    /// Returns true if the variant is [`ElfValue::Known`].
    pub fn is_known(&self) -> bool {
        matches!(self, ElfValue::Known(_))
    }

    /// Returns the parsed representation, if the value is a generic one.
    pub fn known(&self) -> Option<&K> {
        match self {
            ElfValue::Known(value) => Some(value),
            ElfValue::OsSpecific(_) | ElfValue::ProcessorSpecific(_) => None,
        }
    }
}

impl ElfValue<ElfKind, u16> {
    /// Returns the numeric value regardless of which range it falls into.
    pub fn to_u16(&self) -> u16 {
        match self {
            ElfValue::Known(kind) => *kind as u16,
            ElfValue::OsSpecific(value) | ElfValue::ProcessorSpecific(value) => *value,
        }
    }
}

impl ElfValue<SegmentKind, u32> {
    /// Returns the numeric value regardless of which range it falls into.
    pub fn to_u32(&self) -> u32 {
        match self {
            ElfValue::Known(kind) => *kind as u32,
            ElfValue::OsSpecific(value) | ElfValue::ProcessorSpecific(value) => *value,
        }
    }
}
