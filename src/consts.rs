use flagset::flags;
use num_derive::FromPrimitive;
use phf::phf_map;

use crate::endian::{BigEndian, EndianReader, LittleEndian};

pub(crate) const ELF_MAGIC: [u8; 4] = [0x7f, b'E', b'L', b'F'];
/// Bytes between `EI_ABIVERSION` and the end of `e_ident`.
pub(crate) const EI_PAD_LEN: usize = 7;

pub(crate) const ELF32_PROGRAM_HEADER_SIZE: u16 = 32;
pub(crate) const ELF64_PROGRAM_HEADER_SIZE: u16 = 56;
pub(crate) const ELF32_SECTION_HEADER_SIZE: u16 = 40;
pub(crate) const ELF64_SECTION_HEADER_SIZE: u16 = 64;
/// Width of `p_type`, the only program header field every entry must hold.
pub(crate) const P_TYPE_LEN: usize = 4;

pub(crate) const ET_LOOS: u16 = 0xfe00;
pub(crate) const ET_HIOS: u16 = 0xfeff;
pub(crate) const ET_LOPROC: u16 = 0xff00;
pub(crate) const ET_HIPROC: u16 = 0xffff;

pub(crate) const PT_LOPROC: u32 = 0x7000_0000;
pub(crate) const PT_HIPROC: u32 = 0x7fff_ffff;

flags! {
    /// Permission a segment is loaded with
    pub enum SegmentFlag: u32 {
        /// The segment's contents can be executed as instructions.
        Execute,
        /// The segment's contents can be written to by the program
        Write,
        /// The segment's contents can be read by the program.
        Read,
    }
}

/// Width of the addresses and offsets in an ELF file. `ei_class`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElfClass {
    /// 32-bit objects
    Elf32,
    /// 64-bit objects
    Elf64,
}

impl ElfClass {
    /// Size in bytes of an address or offset field.
    pub fn address_size(&self) -> usize {
        match self {
            ElfClass::Elf32 => 4,
            ElfClass::Elf64 => 8,
        }
    }

    /// Smallest `e_phentsize` able to hold a program header of this class.
    pub fn min_phentsize(&self) -> u16 {
        match self {
            ElfClass::Elf32 => ELF32_PROGRAM_HEADER_SIZE,
            ElfClass::Elf64 => ELF64_PROGRAM_HEADER_SIZE,
        }
    }

    /// Smallest `e_shentsize` able to hold a section header of this class.
    pub fn min_shentsize(&self) -> u16 {
        match self {
            ElfClass::Elf32 => ELF32_SECTION_HEADER_SIZE,
            ElfClass::Elf64 => ELF64_SECTION_HEADER_SIZE,
        }
    }
}

/// Represents the endianness of a system, i.e. the order in which order bytes of an integer are
/// stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    /// Little endian. Least significant byte is stored first.
    Little,
    /// Big endian. Most significant byte is stored first.
    Big,
}

impl Endianness {
    /// Returns the reader that assembles integers in this byte order.
    pub fn reader(&self) -> &'static dyn EndianReader {
        match self {
            Endianness::Little => &LittleEndian,
            Endianness::Big => &BigEndian,
        }
    }
}

/// Version of the object file format. Only the original version exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElfVersion {
    /// `EV_CURRENT`
    Current,
}

/// ELF file type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive)]
pub enum ElfKind {
    /// Relocatable file
    Relocatable = 1,
    /// Executable file
    Executable = 2,
    /// Shared object file
    Dynamic = 3,
    /// Core file
    Core = 4,
}

/// ELF segment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive)]
pub enum SegmentKind {
    /// Unused entry
    Null = 0,
    /// The segment contents are loaded into memory at runtime
    Load = 1,
    /// Dynamic linking information
    Dynamic = 2,
    /// Defines the program interpreter to be used for the executable
    Interp = 3,
    /// Defines the location and size of extra information
    Note = 4,
    /// Reserved
    Shlib = 5,
    /// Defines the location and size of the program header table
    Phdr = 6,
}

/// Operating system or ABI of an ELF file. Determines which ELF extensions are used by the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive)]
#[non_exhaustive]
pub enum OsAbi {
    /// No extensions or unspecified, also known as System V
    None = 0,
    /// HP-UX
    HpUx = 1,
    /// NetBSD
    NetBsd = 2,
    /// GNU, also known as Linux
    Gnu = 3,
    /// GNU Hurd
    Hurd = 4,
    /// 86Open common IA32 ABI
    Open86 = 5,
    /// Solaris
    Solaris = 6,
    /// AIX, also known as Monterey
    Aix = 7,
    /// IRIX
    Irix = 8,
    /// FreeBSD
    FreeBsd = 9,
    /// TRU64 UNIX
    Tru64 = 10,
    /// Novell Modesto
    Modesto = 11,
    /// OpenBSD
    OpenBsd = 12,
    /// OpenVMS
    OpenVms = 13,
    /// HP Non-Stop Kernel
    Nsk = 14,
    /// Amiga Research OS
    Aros = 15,
    /// FenixOS
    FenixOs = 16,
    /// Nuxi CloudABI
    CloudAbi = 17,
    /// OpenVOS
    OpenVos = 18,
    /// ARM EABI
    ArmAeabi = 64,
    /// ARM
    Arm = 97,
    /// Standalone (embedded) application
    Standalone = 255,
}

/// The target architecture of an ELF file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive)]
#[non_exhaustive]
pub enum MachineKind {
    /// No machine
    None = 0,
    /// AT&T WE 32100
    M32 = 1,
    /// SUN SPARC
    Sparc = 2,
    /// Intel 80386
    Ia386 = 3,
    /// Motorola m68k family
    M68K = 4,
    /// Motorola m88k family
    M88K = 5,
    /// Intel MCU
    IaMcu = 6,
    /// Intel 80860
    Ia860 = 7,
    /// MIPS R3000 big-endian
    Mips = 8,
    /// IBM System/370
    S370 = 9,
    /// MIPS R3000 little-endian
    MipsRs3Le = 10,
    /// HPPA
    PaRisc = 15,
    /// Fujitsu VPP500
    Vp500 = 17,
    /// Sun's "v8plus"
    Sparc32Plus = 18,
    /// Intel 80960
    Ia960 = 19,
    /// PowerPC
    Ppc = 20,
    /// PowerPC 64-bit
    Ppc64 = 21,
    /// IBM S390
    S390 = 22,
    /// IBM SPU/SPC
    Spu = 23,
    /// NEC V800 series
    V800 = 36,
    /// Fujitsu FR20
    Fr20 = 37,
    /// TRW RH-32
    Rh32 = 38,
    /// Motorola RCE
    Rce = 39,
    /// ARM
    Arm = 40,
    /// Digital Alpha
    FakeAlpha = 41,
    /// Hitachi SH
    Sh = 42,
    /// SPARC v9 64-bit
    SparcV9 = 43,
    /// Siemens Tricore
    Tricore = 44,
    /// Argonaut RISC Core
    Arc = 45,
    /// Hitachi H8/300
    H8_300 = 46,
    /// Hitachi H8/300H
    H8_300H = 47,
    /// Hitachi H8S
    H8S = 48,
    /// Hitachi H8/500
    H8_500 = 49,
    /// Intel Merced
    Ia64 = 50,
    /// Stanford MIPS-X
    MipsX = 51,
    /// Motorola Coldfire
    Coldfire = 52,
    /// Motorola M68HC12
    M68HC12 = 53,
    /// Fujitsu MMA Multimedia Accelerator
    Mma = 54,
    /// Siemens PCP
    Pcp = 55,
    /// Sony nCPU embedded RISC
    Ncpu = 56,
    /// Denso NDR1 microprocessor
    Ndr1 = 57,
    /// Motorola Start*Core processor
    StarCore = 58,
    /// Toyota ME16 processor
    Mu16 = 59,
    /// STMicroelectronic ST100 processor
    St100 = 60,
    /// Advanced Logic Corp. Tinyj emb.fam
    Tinyj = 61,
    /// AMD x86-64 architecture
    X86_64 = 62,
    /// Sony DSP Processor
    Pdsp = 63,
    /// Digital PDP-10
    Pdp10 = 64,
    /// Digital PDP-11
    Pdp11 = 65,
    /// Siemens FX66 microcontroller
    Fx66 = 66,
    /// STMicroelectronics ST9+ 8/16 mc
    St9Plus = 67,
    /// STmicroelectronics ST7 8 bit mc
    St7 = 68,
    /// Motorola MC68HC16 microcontroller
    M68HC16 = 69,
    /// Motorola MC68HC11 microcontroller
    M68HC11 = 70,
    /// Motorola MC68HC08 microcontroller
    M68HC08 = 71,
    /// Motorola MC68HC05 microcontroller
    M68HC05 = 72,
    /// Silicon Graphics SVx
    Svx = 73,
    /// STMicroelectronics ST19 8 bit mc
    St19 = 74,
    /// Digital VAX
    Vax = 75,
    /// Axis Communications 32-bit emb.proc
    Cris = 76,
    /// Infineon Technologies 32-bit emb.proc
    Javelin = 77,
    /// Element 14 64-bit DSP Processor
    Firepath = 78,
    /// LSI Logic 16-bit DSP Processor
    Zsp = 79,
    /// Donald Knuth's educational 64-bit proc
    Mmix = 80,
    /// Harvard University machine-independent object files
    Huany = 81,
    /// SiTera Prism
    Prism = 82,
    /// Atmel AVR 8-bit microcontroller
    Avr = 83,
    /// Fujitsu FR30
    Fr30 = 84,
    /// Mitsubishi D10V
    D10V = 85,
    /// Mitsubishi D30V
    D30V = 86,
    /// NEC v850
    V850 = 87,
    /// Mitsubishi M32R
    M32R = 88,
    /// Matsushita MN10300
    Mn10300 = 89,
    /// Matsushita MN10200
    Mn10200 = 90,
    /// picoJava
    PJ = 91,
    /// OpenRISC 32-bit embedded processor
    OpenRisc = 92,
    /// ARC International ARCompact
    ArcCompact = 93,
    /// Tensilica Xtensa Architecture
    Xtensa = 94,
    /// Alphamosaic VideoCore
    VideoCore = 95,
    /// Thompson Multimedia General Purpose Proc
    TmmGpp = 96,
    /// National Semi. 32000
    Ns32K = 97,
    /// Tenor Network TPC
    Tpc = 98,
    /// Trebia SNP 1000
    SnP1K = 99,
    /// STMicroelectronics ST200
    St200 = 100,
    /// Ubicom IP2xxx
    Ip2K = 101,
    /// MAX processor
    Max = 102,
    /// National Semi. CompactRISC
    Cr = 103,
    /// Fujitsu F2MC16
    F2MC16 = 104,
    /// Texas Instruments msp430
    Msp430 = 105,
    /// Analog Devices Blackfin DSP
    Blackfin = 106,
    /// Seiko Epson S1C33 family
    SeC33 = 107,
    /// Sharp embedded microprocessor
    Sep = 108,
    /// Arca RISC
    Arca = 109,
    /// PKU-Unity & MPRC Peking Uni. mc series
    Unicore = 110,
    /// eXcess configurable cpu
    Excess = 111,
    /// Icera Semi. Deep Execution Processor
    Dxp = 112,
    /// Altera Nios II
    AlteraNios2 = 113,
    /// National Semi. CompactRISC CRX
    Crx = 114,
    /// Motorola XGATE
    Xgate = 115,
    /// Infineon C16x/XC16x
    C166 = 116,
    /// Renesas M16C
    M16C = 117,
    /// Microchip Technology dsPIC30F
    DsPic30F = 118,
    /// Freescale Communication Engine RISC
    Ce = 119,
    /// Renesas M32C
    M32C = 120,
    /// Altium TSK3000
    Tsk3000 = 131,
    /// Freescale RS08
    Rs08 = 132,
    /// Analog Devices SHARC family
    Sharc = 133,
    /// Cyan Technology eCOG2
    Ecog2 = 134,
    /// Sunplus S+core7 RISC
    Score7 = 135,
    /// New Japan Radio (NJR) 24-bit DSP
    Dsp24 = 136,
    /// Broadcom VideoCore III
    VideoCore3 = 137,
    /// RISC for Lattice FPGA
    LatticeMico32 = 138,
    /// Seiko Epson C17
    SeC17 = 139,
    /// Texas Instruments TMS320C6000 DSP
    TiC6000 = 140,
    /// Texas Instruments TMS320C2000 DSP
    TiC2000 = 141,
    /// Texas Instruments TMS320C55x DSP
    TiC5500 = 142,
    /// Texas Instruments App. Specific RISC
    TiArp32 = 143,
    /// Texas Instruments Prog. Realtime Unit
    TiPru = 144,
    /// STMicroelectronics 64bit VLIW DSP
    MmdspPlus = 160,
    /// Cypress M8C
    CypressM8C = 161,
    /// Renesas R32C
    R32C = 162,
    /// NXP Semi. TriMedia
    TriMedia = 163,
    /// QUALCOMM DSP6
    Qdsp6 = 164,
    /// Intel 8051 and variants
    Ia8051 = 165,
    /// STMicroelectronics STxP7x
    StxP7x = 166,
    /// Andes Tech. compact code emb. RISC
    Nds32 = 167,
    /// Cyan Technology eCOG1X
    Ecog1X = 168,
    /// Dallas Semi. MAXQ30 mc
    Maxq30 = 169,
    /// New Japan Radio (NJR) 16-bit DSP
    Ximo16 = 170,
    /// M2000 Reconfigurable RISC
    Manik = 171,
    /// Cray NV2 vector architecture
    CrayNv2 = 172,
    /// Renesas RX
    Rx = 173,
    /// Imagination Tech. META
    Metag = 174,
    /// MCST Elbrus
    McstElbrus = 175,
    /// Cyan Technology eCOG16
    Ecog16 = 176,
    /// National Semi. CompactRISC CR16
    Cr16 = 177,
    /// Freescale Extended Time Processing Unit
    Etpu = 178,
    /// Infineon Tech. SLE9X
    Sle9X = 179,
    /// Intel L10M
    L10M = 180,
    /// Intel K10M
    K10M = 181,
    /// ARM AARCH64
    Aarch64 = 183,
    /// Amtel 32-bit microprocessor
    Avr32 = 185,
    /// STMicroelectronics STM8
    Stm8 = 186,
    /// Tilera TILE64
    Tile64 = 187,
    /// Tilera TILEPro
    TilePro = 188,
    /// Xilinx MicroBlaze
    MicroBlaze = 189,
    /// NVIDIA CUDA
    Cuda = 190,
    /// Tilera TILE-Gx
    TileGx = 191,
    /// CloudShield
    CloudShield = 192,
    /// KIPO-KAIST Core-A 1st gen.
    CoreA1st = 193,
    /// KIPO-KAIST Core-A 2nd gen.
    CoreA2nd = 194,
    /// Synopsys ARCv2 ISA.
    ArcV2 = 195,
    /// Open8 RISC
    Open8 = 196,
    /// Renesas RL78
    Rl78 = 197,
    /// Broadcom VideoCore V
    VideoCore5 = 198,
    /// Renesas 78KOR
    Renesas78Kor = 199,
    /// Freescale 56800EX DSC
    Fs56800Ex = 200,
    /// Beyond BA1
    Ba1 = 201,
    /// Beyond BA2
    Ba2 = 202,
    /// XMOS xCORE
    XCore = 203,
    /// Microchip 8-bit PIC(r)
    MchpPic = 204,
    /// Intel Graphics Technology
    IntelGt = 205,
    /// KM211 KM32
    Km32 = 210,
    /// KM211 KMX32
    Kmx32 = 211,
    /// KM211 KMX16
    Emx16 = 212,
    /// KM211 KMX8
    Emx8 = 213,
    /// KM211 KVARC
    Kvarc = 214,
    /// Paneve CDP
    Cdp = 215,
    /// Cognitive Smart Memory Processor
    Coge = 216,
    /// Bluechip CoolEngine
    Cool = 217,
    /// Nanoradio Optimized RISC
    Norc = 218,
    /// CSR Kalimba
    CsrKalimba = 219,
    /// Zilog Z80
    Z80 = 220,
    /// Controls and Data Services VISIUMcore
    Visium = 221,
    /// FTDI Chip FT32
    Ft32 = 222,
    /// Moxie processor
    Moxie = 223,
    /// AMD GPU
    Amdgpu = 224,
    /// RISC-V
    RiscV = 243,
    /// Linux BPF -- in-kernel virtual machine
    Bpf = 247,
    /// C-SKY
    CSky = 252,
    /// LoongArch
    LoongArch = 258,
    /// ChipON KungFu32
    Kf32 = 259,
    /// LAPIS nX-U16/U8
    U16U8Core = 260,
    /// Tachyum processor
    Tachyum = 261,
    /// NXP 56800EF Digital Signal Controller (DSC)
    Fs56800Ef = 262,
    /// Solana Bytecode Format
    Sbf = 263,
    /// AMD/Xilinx AIEngine architecture
    AiEngine = 264,
    /// SiMa MLA
    SimaMla = 265,
    /// Cambricon BANG
    Bang = 266,
    /// Loongson Loongarch
    LoongGpu = 267,
    /// Alpha
    Alpha = 0x9026,
}

impl MachineKind {
    /// Returns the `EM_*` constant name of the machine, as used by `elf.h`.
    pub fn symbol(&self) -> &'static str {
        MACHINE_SYMBOLS
            .get(&(*self as u16))
            .copied()
            .unwrap_or("EM_UNKNOWN")
    }
}

static MACHINE_SYMBOLS: phf::Map<u16, &'static str> = phf_map! {
    0u16 => "EM_NONE",
    1u16 => "EM_M32",
    2u16 => "EM_SPARC",
    3u16 => "EM_386",
    4u16 => "EM_68K",
    5u16 => "EM_88K",
    6u16 => "EM_IAMCU",
    7u16 => "EM_860",
    8u16 => "EM_MIPS",
    9u16 => "EM_S370",
    10u16 => "EM_MIPS_RS3_LE",
    15u16 => "EM_PARISC",
    17u16 => "EM_VPP500",
    18u16 => "EM_SPARC32PLUS",
    19u16 => "EM_960",
    20u16 => "EM_PPC",
    21u16 => "EM_PPC64",
    22u16 => "EM_S390",
    23u16 => "EM_SPU",
    36u16 => "EM_V800",
    37u16 => "EM_FR20",
    38u16 => "EM_RH32",
    39u16 => "EM_RCE",
    40u16 => "EM_ARM",
    41u16 => "EM_FAKE_ALPHA",
    42u16 => "EM_SH",
    43u16 => "EM_SPARCV9",
    44u16 => "EM_TRICORE",
    45u16 => "EM_ARC",
    46u16 => "EM_H8_300",
    47u16 => "EM_H8_300H",
    48u16 => "EM_H8S",
    49u16 => "EM_H8_500",
    50u16 => "EM_IA_64",
    51u16 => "EM_MIPS_X",
    52u16 => "EM_COLDFIRE",
    53u16 => "EM_68HC12",
    54u16 => "EM_MMA",
    55u16 => "EM_PCP",
    56u16 => "EM_NCPU",
    57u16 => "EM_NDR1",
    58u16 => "EM_STARCORE",
    59u16 => "EM_ME16",
    60u16 => "EM_ST100",
    61u16 => "EM_TINYJ",
    62u16 => "EM_X86_64",
    63u16 => "EM_PDSP",
    64u16 => "EM_PDP10",
    65u16 => "EM_PDP11",
    66u16 => "EM_FX66",
    67u16 => "EM_ST9PLUS",
    68u16 => "EM_ST7",
    69u16 => "EM_68HC16",
    70u16 => "EM_68HC11",
    71u16 => "EM_68HC08",
    72u16 => "EM_68HC05",
    73u16 => "EM_SVX",
    74u16 => "EM_ST19",
    75u16 => "EM_VAX",
    76u16 => "EM_CRIS",
    77u16 => "EM_JAVELIN",
    78u16 => "EM_FIREPATH",
    79u16 => "EM_ZSP",
    80u16 => "EM_MMIX",
    81u16 => "EM_HUANY",
    82u16 => "EM_PRISM",
    83u16 => "EM_AVR",
    84u16 => "EM_FR30",
    85u16 => "EM_D10V",
    86u16 => "EM_D30V",
    87u16 => "EM_V850",
    88u16 => "EM_M32R",
    89u16 => "EM_MN10300",
    90u16 => "EM_MN10200",
    91u16 => "EM_PJ",
    92u16 => "EM_OPENRISC",
    93u16 => "EM_ARC_COMPACT",
    94u16 => "EM_XTENSA",
    95u16 => "EM_VIDEOCORE",
    96u16 => "EM_TMM_GPP",
    97u16 => "EM_NS32K",
    98u16 => "EM_TPC",
    99u16 => "EM_SNP1K",
    100u16 => "EM_ST200",
    101u16 => "EM_IP2K",
    102u16 => "EM_MAX",
    103u16 => "EM_CR",
    104u16 => "EM_F2MC16",
    105u16 => "EM_MSP430",
    106u16 => "EM_BLACKFIN",
    107u16 => "EM_SE_C33",
    108u16 => "EM_SEP",
    109u16 => "EM_ARCA",
    110u16 => "EM_UNICORE",
    111u16 => "EM_EXCESS",
    112u16 => "EM_DXP",
    113u16 => "EM_ALTERA_NIOS2",
    114u16 => "EM_CRX",
    115u16 => "EM_XGATE",
    116u16 => "EM_C166",
    117u16 => "EM_M16C",
    118u16 => "EM_DSPIC30F",
    119u16 => "EM_CE",
    120u16 => "EM_M32C",
    131u16 => "EM_TSK3000",
    132u16 => "EM_RS08",
    133u16 => "EM_SHARC",
    134u16 => "EM_ECOG2",
    135u16 => "EM_SCORE7",
    136u16 => "EM_DSP24",
    137u16 => "EM_VIDEOCORE3",
    138u16 => "EM_LATTICEMICO32",
    139u16 => "EM_SE_C17",
    140u16 => "EM_TI_C6000",
    141u16 => "EM_TI_C2000",
    142u16 => "EM_TI_C5500",
    143u16 => "EM_TI_ARP32",
    144u16 => "EM_TI_PRU",
    160u16 => "EM_MMDSP_PLUS",
    161u16 => "EM_CYPRESS_M8C",
    162u16 => "EM_R32C",
    163u16 => "EM_TRIMEDIA",
    164u16 => "EM_QDSP6",
    165u16 => "EM_8051",
    166u16 => "EM_STXP7X",
    167u16 => "EM_NDS32",
    168u16 => "EM_ECOG1X",
    169u16 => "EM_MAXQ30",
    170u16 => "EM_XIMO16",
    171u16 => "EM_MANIK",
    172u16 => "EM_CRAYNV2",
    173u16 => "EM_RX",
    174u16 => "EM_METAG",
    175u16 => "EM_MCST_ELBRUS",
    176u16 => "EM_ECOG16",
    177u16 => "EM_CR16",
    178u16 => "EM_ETPU",
    179u16 => "EM_SLE9X",
    180u16 => "EM_L10M",
    181u16 => "EM_K10M",
    183u16 => "EM_AARCH64",
    185u16 => "EM_AVR32",
    186u16 => "EM_STM8",
    187u16 => "EM_TILE64",
    188u16 => "EM_TILEPRO",
    189u16 => "EM_MICROBLAZE",
    190u16 => "EM_CUDA",
    191u16 => "EM_TILEGX",
    192u16 => "EM_CLOUDSHIELD",
    193u16 => "EM_COREA_1ST",
    194u16 => "EM_COREA_2ND",
    195u16 => "EM_ARCV2",
    196u16 => "EM_OPEN8",
    197u16 => "EM_RL78",
    198u16 => "EM_VIDEOCORE5",
    199u16 => "EM_78KOR",
    200u16 => "EM_56800EX",
    201u16 => "EM_BA1",
    202u16 => "EM_BA2",
    203u16 => "EM_XCORE",
    204u16 => "EM_MCHP_PIC",
    205u16 => "EM_INTELGT",
    210u16 => "EM_KM32",
    211u16 => "EM_KMX32",
    212u16 => "EM_EMX16",
    213u16 => "EM_EMX8",
    214u16 => "EM_KVARC",
    215u16 => "EM_CDP",
    216u16 => "EM_COGE",
    217u16 => "EM_COOL",
    218u16 => "EM_NORC",
    219u16 => "EM_CSR_KALIMBA",
    220u16 => "EM_Z80",
    221u16 => "EM_VISIUM",
    222u16 => "EM_FT32",
    223u16 => "EM_MOXIE",
    224u16 => "EM_AMDGPU",
    243u16 => "EM_RISCV",
    247u16 => "EM_BPF",
    252u16 => "EM_CSKY",
    258u16 => "EM_LOONGARCH",
    259u16 => "EM_KF32",
    260u16 => "EM_U16_U8CORE",
    261u16 => "EM_TACHYUM",
    262u16 => "EM_56800EF",
    263u16 => "EM_SBF",
    264u16 => "EM_AIENGINE",
    265u16 => "EM_SIMA_MLA",
    266u16 => "EM_BANG",
    267u16 => "EM_LOONGGPU",
    0x9026u16 => "EM_ALPHA",
};
