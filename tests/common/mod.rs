//! Writes synthetic ELF images for the integration tests. Every field can be overridden,
//! including to values the decoder is expected to reject.

#![allow(dead_code)]

/// One program header table entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct Phdr {
    pub p_type: u32,
    pub flags: u32,
    pub offset: u64,
    pub vaddr: u64,
    pub paddr: u64,
    pub filesz: u64,
    pub memsz: u64,
    pub align: u64,
}

impl Phdr {
    pub fn new(p_type: u32) -> Self {
        Self {
            p_type,
            ..Default::default()
        }
    }
}

/// The raw field values of an ELF header plus its program header table.
#[derive(Debug, Clone)]
pub struct Image {
    pub magic: [u8; 4],
    pub class: u8,
    pub data: u8,
    pub ei_version: u8,
    pub osabi: u8,
    pub abiversion: u8,
    pub e_type: u16,
    pub machine: u16,
    pub version: u32,
    pub entry: u64,
    pub phoff: u64,
    pub shoff: u64,
    pub flags: u32,
    pub ehsize: u16,
    pub phentsize: u16,
    pub phnum: u16,
    pub shentsize: u16,
    pub shnum: u16,
    pub shstrndx: u16,
    pub phdrs: Vec<Phdr>,
}

impl Image {
    /// A 64-bit little endian x86-64 executable without program or section headers.
    pub fn elf64_le() -> Self {
        Self {
            magic: [0x7f, b'E', b'L', b'F'],
            class: 2,
            data: 1,
            ei_version: 1,
            osabi: 0,
            abiversion: 0,
            e_type: 2,
            machine: 62,
            version: 1,
            entry: 0x40_1000,
            phoff: 64,
            shoff: 0,
            flags: 0,
            ehsize: 64,
            phentsize: 56,
            phnum: 0,
            shentsize: 64,
            shnum: 0,
            shstrndx: 0,
            phdrs: Vec::new(),
        }
    }

    /// A 32-bit big endian MIPS executable without program or section headers.
    pub fn elf32_be() -> Self {
        Self {
            class: 1,
            data: 2,
            machine: 8,
            entry: 0x0040_0100,
            phoff: 52,
            ehsize: 52,
            phentsize: 32,
            shentsize: 40,
            ..Self::elf64_le()
        }
    }

    /// Replaces the program header table and updates `e_phnum` to match.
    pub fn with_phdrs(mut self, phdrs: Vec<Phdr>) -> Self {
        self.phnum = u16::try_from(phdrs.len()).unwrap();
        self.phdrs = phdrs;
        self
    }

    fn is_64bit(&self) -> bool {
        self.class != 1
    }

    fn u16(&self, out: &mut Vec<u8>, value: u16) {
        if self.data == 2 {
            out.extend_from_slice(&value.to_be_bytes());
        } else {
            out.extend_from_slice(&value.to_le_bytes());
        }
    }

    fn u32(&self, out: &mut Vec<u8>, value: u32) {
        if self.data == 2 {
            out.extend_from_slice(&value.to_be_bytes());
        } else {
            out.extend_from_slice(&value.to_le_bytes());
        }
    }

    fn addr(&self, out: &mut Vec<u8>, value: u64) {
        if !self.is_64bit() {
            self.u32(out, u32::try_from(value).unwrap());
        } else if self.data == 2 {
            out.extend_from_slice(&value.to_be_bytes());
        } else {
            out.extend_from_slice(&value.to_le_bytes());
        }
    }

    fn phdr(&self, phdr: &Phdr) -> Vec<u8> {
        let mut out = Vec::new();

        self.u32(&mut out, phdr.p_type);
        if self.is_64bit() {
            self.u32(&mut out, phdr.flags);
        }
        self.addr(&mut out, phdr.offset);
        self.addr(&mut out, phdr.vaddr);
        self.addr(&mut out, phdr.paddr);
        self.addr(&mut out, phdr.filesz);
        self.addr(&mut out, phdr.memsz);
        if !self.is_64bit() {
            self.u32(&mut out, phdr.flags);
        }
        self.addr(&mut out, phdr.align);

        out
    }

    /// Serializes the image. Program header `i` is placed at `phoff + i * phentsize`, and the gap
    /// after each entry is filled with `fill`.
    pub fn build_with_fill(&self, fill: u8) -> Vec<u8> {
        let mut out = Vec::new();

        out.extend_from_slice(&self.magic);
        out.extend_from_slice(&[
            self.class,
            self.data,
            self.ei_version,
            self.osabi,
            self.abiversion,
        ]);
        out.extend_from_slice(&[0; 7]);

        self.u16(&mut out, self.e_type);
        self.u16(&mut out, self.machine);
        self.u32(&mut out, self.version);
        self.addr(&mut out, self.entry);
        self.addr(&mut out, self.phoff);
        self.addr(&mut out, self.shoff);
        self.u32(&mut out, self.flags);
        self.u16(&mut out, self.ehsize);
        self.u16(&mut out, self.phentsize);
        self.u16(&mut out, self.phnum);
        self.u16(&mut out, self.shentsize);
        self.u16(&mut out, self.shnum);
        self.u16(&mut out, self.shstrndx);

        for (index, phdr) in self.phdrs.iter().enumerate() {
            let start = usize::try_from(self.phoff).unwrap() + index * usize::from(self.phentsize);
            let entry = self.phdr(phdr);
            let end = start + entry.len().max(usize::from(self.phentsize));

            if out.len() < end {
                out.resize(end, fill);
            }
            out[start..start + entry.len()].copy_from_slice(&entry);
        }

        out
    }

    pub fn build(&self) -> Vec<u8> {
        self.build_with_fill(0)
    }
}
