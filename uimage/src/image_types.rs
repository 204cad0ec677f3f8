//! Image type definitions and constants
//!
//! Numeric values follow the `IH_OS_*`, `IH_ARCH_*`, `IH_TYPE_*` and
//! `IH_COMP_*` tables of U-Boot's `image.h`.

use std::fmt;

/// Symbolic name lookup shared by all header code tables
pub trait CodeName: TryFrom<u8, Error = u8> + Copy {
    /// Human readable name as printed by U-Boot
    fn long_name(self) -> &'static str;
}

/// Resolve `code` to its long name, or a numeric fallback for unknown codes
pub fn code_name<T: CodeName>(code: u8) -> String {
    match T::try_from(code) {
        Ok(v) => v.long_name().to_string(),
        Err(code) => format!("<not supported 0x{:02X}>", code),
    }
}

/// U-Boot image types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageType {
    /// Invalid/unknown image type
    Invalid = 0,
    /// Standalone program
    Standalone = 1,
    /// OS kernel image
    Kernel = 2,
    /// RAM disk image
    Ramdisk = 3,
    /// Multi-file image
    Multi = 4,
    /// Firmware image
    Firmware = 5,
    /// Script file
    Script = 6,
    /// Filesystem image
    Filesystem = 7,
    /// Flat device tree
    FlattenedDeviceTree = 8,
    /// Kirkwood boot image
    Kwbimage = 9,
    /// Freescale i.MX boot image
    Imximage = 10,
    /// Davinci UBL image
    Ublimage = 11,
    /// TI OMAP boot image
    Omapimage = 12,
    /// Davinci AIS image
    Aisimage = 13,
    /// Kernel image executed in place
    KernelNoload = 14,
}

/// Architecture types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    Invalid = 0,
    Alpha = 1,
    Arm = 2,
    I386 = 3,
    Ia64 = 4,
    Mips = 5,
    Mips64 = 6,
    Powerpc = 7,
    S390 = 8,
    Sh = 9,
    Sparc = 10,
    Sparc64 = 11,
    M68k = 12,
    Nios = 13,
    Microblaze = 14,
    Nios2 = 15,
    Blackfin = 16,
    Avr32 = 17,
    St200 = 18,
    Sandbox = 19,
    Nds32 = 20,
    Openrisc = 21,
    Arm64 = 22,
    Arc = 23,
    X86_64 = 24,
    Xtensa = 25,
    Riscv = 26,
}

/// Compression types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compression {
    None = 0,
    Gzip = 1,
    Bzip2 = 2,
    Lzma = 3,
    Lzo = 4,
    Lz4 = 5,
    Zstd = 6,
}

/// Operating system types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsType {
    Invalid = 0,
    Openbsd = 1,
    Netbsd = 2,
    Freebsd = 3,
    Bsd4_4 = 4,
    Linux = 5,
    SvR4 = 6,
    Esix = 7,
    Solaris = 8,
    Irix = 9,
    Sco = 10,
    Dell = 11,
    Ncr = 12,
    Lynxos = 13,
    Vxworks = 14,
    Psos = 15,
    Qnx = 16,
    Uboot = 17,
    Rtems = 18,
    Artos = 19,
    Unity = 20,
    Integrity = 21,
    Ose = 22,
    Plan9 = 23,
    Openrtos = 24,
}

impl ImageType {
    /// Short name as accepted by `mkimage -T`
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Standalone => "standalone",
            Self::Kernel => "kernel",
            Self::Ramdisk => "ramdisk",
            Self::Multi => "multi",
            Self::Firmware => "firmware",
            Self::Script => "script",
            Self::Filesystem => "filesystem",
            Self::FlattenedDeviceTree => "flat_dt",
            Self::Kwbimage => "kwbimage",
            Self::Imximage => "imximage",
            Self::Ublimage => "ublimage",
            Self::Omapimage => "omapimage",
            Self::Aisimage => "aisimage",
            Self::KernelNoload => "kernel_noload",
        }
    }
}

impl CodeName for ImageType {
    fn long_name(self) -> &'static str {
        match self {
            Self::Invalid => "Invalid Image",
            Self::Standalone => "Standalone Program",
            Self::Kernel => "Kernel Image",
            Self::Ramdisk => "RAMDisk Image",
            Self::Multi => "Multi-File Image",
            Self::Firmware => "Firmware",
            Self::Script => "Script",
            Self::Filesystem => "Filesystem Image",
            Self::FlattenedDeviceTree => "Flat Device Tree",
            Self::Kwbimage => "Kirkwood Boot Image",
            Self::Imximage => "Freescale i.MX Boot Image",
            Self::Ublimage => "Davinci UBL image",
            Self::Omapimage => "TI OMAP SPL With GP CH",
            Self::Aisimage => "Davinci AIS image",
            Self::KernelNoload => "Kernel Image (no loading done)",
        }
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl Arch {
    /// Short name as accepted by `mkimage -A`
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Alpha => "alpha",
            Self::Arm => "arm",
            Self::I386 => "x86",
            Self::Ia64 => "ia64",
            Self::Mips => "mips",
            Self::Mips64 => "mips64",
            Self::Powerpc => "powerpc",
            Self::S390 => "s390",
            Self::Sh => "sh",
            Self::Sparc => "sparc",
            Self::Sparc64 => "sparc64",
            Self::M68k => "m68k",
            Self::Nios => "nios",
            Self::Microblaze => "microblaze",
            Self::Nios2 => "nios2",
            Self::Blackfin => "blackfin",
            Self::Avr32 => "avr32",
            Self::St200 => "st200",
            Self::Sandbox => "sandbox",
            Self::Nds32 => "nds32",
            Self::Openrisc => "or1k",
            Self::Arm64 => "arm64",
            Self::Arc => "arc",
            Self::X86_64 => "x86_64",
            Self::Xtensa => "xtensa",
            Self::Riscv => "riscv",
        }
    }
}

impl CodeName for Arch {
    fn long_name(self) -> &'static str {
        match self {
            Self::Invalid => "Invalid ARCH",
            Self::Alpha => "Alpha",
            Self::Arm => "ARM",
            Self::I386 => "Intel x86",
            Self::Ia64 => "IA64",
            Self::Mips => "MIPS",
            Self::Mips64 => "MIPS 64 Bit",
            Self::Powerpc => "PowerPC",
            Self::S390 => "IBM S390",
            Self::Sh => "SuperH",
            Self::Sparc => "SPARC",
            Self::Sparc64 => "SPARC 64 Bit",
            Self::M68k => "M68K",
            Self::Nios => "NIOS",
            Self::Microblaze => "MicroBlaze",
            Self::Nios2 => "NIOS II",
            Self::Blackfin => "Blackfin",
            Self::Avr32 => "AVR32",
            Self::St200 => "STMicroelectronics ST200",
            Self::Sandbox => "Sandbox",
            Self::Nds32 => "NDS32",
            Self::Openrisc => "OpenRISC 1000",
            Self::Arm64 => "AArch64",
            Self::Arc => "ARC",
            Self::X86_64 => "AMD x86_64",
            Self::Xtensa => "Xtensa",
            Self::Riscv => "RISC-V",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl Compression {
    /// Short name as accepted by `mkimage -C`
    pub fn short_name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Gzip => "gzip",
            Self::Bzip2 => "bzip2",
            Self::Lzma => "lzma",
            Self::Lzo => "lzo",
            Self::Lz4 => "lz4",
            Self::Zstd => "zstd",
        }
    }
}

impl CodeName for Compression {
    fn long_name(self) -> &'static str {
        match self {
            Self::None => "uncompressed",
            Self::Gzip => "gzip compressed",
            Self::Bzip2 => "bzip2 compressed",
            Self::Lzma => "lzma compressed",
            Self::Lzo => "lzo compressed",
            Self::Lz4 => "lz4 compressed",
            Self::Zstd => "zstd compressed",
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl OsType {
    /// Short name as accepted by `mkimage -O`
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Openbsd => "openbsd",
            Self::Netbsd => "netbsd",
            Self::Freebsd => "freebsd",
            Self::Bsd4_4 => "4_4bsd",
            Self::Linux => "linux",
            Self::SvR4 => "svr4",
            Self::Esix => "esix",
            Self::Solaris => "solaris",
            Self::Irix => "irix",
            Self::Sco => "sco",
            Self::Dell => "dell",
            Self::Ncr => "ncr",
            Self::Lynxos => "lynxos",
            Self::Vxworks => "vxworks",
            Self::Psos => "psos",
            Self::Qnx => "qnx",
            Self::Uboot => "u-boot",
            Self::Rtems => "rtems",
            Self::Artos => "artos",
            Self::Unity => "unity",
            Self::Integrity => "integrity",
            Self::Ose => "ose",
            Self::Plan9 => "plan9",
            Self::Openrtos => "openrtos",
        }
    }
}

impl CodeName for OsType {
    fn long_name(self) -> &'static str {
        match self {
            Self::Invalid => "Invalid OS",
            Self::Openbsd => "OpenBSD",
            Self::Netbsd => "NetBSD",
            Self::Freebsd => "FreeBSD",
            Self::Bsd4_4 => "4_4BSD",
            Self::Linux => "Linux",
            Self::SvR4 => "SVR4",
            Self::Esix => "Esix",
            Self::Solaris => "Solaris",
            Self::Irix => "Irix",
            Self::Sco => "SCO",
            Self::Dell => "Dell",
            Self::Ncr => "NCR",
            Self::Lynxos => "LynxOS",
            Self::Vxworks => "VxWorks",
            Self::Psos => "pSOS",
            Self::Qnx => "QNX",
            Self::Uboot => "U-Boot",
            Self::Rtems => "RTEMS",
            Self::Artos => "ARTOS",
            Self::Unity => "Unity OS",
            Self::Integrity => "INTEGRITY",
            Self::Ose => "Enea OSE",
            Self::Plan9 => "Plan 9",
            Self::Openrtos => "OpenRTOS",
        }
    }
}

impl fmt::Display for OsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

// Unknown codes are handed back as the error value
impl TryFrom<u8> for OsType {
    type Error = u8;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Invalid),
            1 => Ok(Self::Openbsd),
            2 => Ok(Self::Netbsd),
            3 => Ok(Self::Freebsd),
            4 => Ok(Self::Bsd4_4),
            5 => Ok(Self::Linux),
            6 => Ok(Self::SvR4),
            7 => Ok(Self::Esix),
            8 => Ok(Self::Solaris),
            9 => Ok(Self::Irix),
            10 => Ok(Self::Sco),
            11 => Ok(Self::Dell),
            12 => Ok(Self::Ncr),
            13 => Ok(Self::Lynxos),
            14 => Ok(Self::Vxworks),
            15 => Ok(Self::Psos),
            16 => Ok(Self::Qnx),
            17 => Ok(Self::Uboot),
            18 => Ok(Self::Rtems),
            19 => Ok(Self::Artos),
            20 => Ok(Self::Unity),
            21 => Ok(Self::Integrity),
            22 => Ok(Self::Ose),
            23 => Ok(Self::Plan9),
            24 => Ok(Self::Openrtos),
            other => Err(other),
        }
    }
}

impl TryFrom<u8> for Arch {
    type Error = u8;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Invalid),
            1 => Ok(Self::Alpha),
            2 => Ok(Self::Arm),
            3 => Ok(Self::I386),
            4 => Ok(Self::Ia64),
            5 => Ok(Self::Mips),
            6 => Ok(Self::Mips64),
            7 => Ok(Self::Powerpc),
            8 => Ok(Self::S390),
            9 => Ok(Self::Sh),
            10 => Ok(Self::Sparc),
            11 => Ok(Self::Sparc64),
            12 => Ok(Self::M68k),
            13 => Ok(Self::Nios),
            14 => Ok(Self::Microblaze),
            15 => Ok(Self::Nios2),
            16 => Ok(Self::Blackfin),
            17 => Ok(Self::Avr32),
            18 => Ok(Self::St200),
            19 => Ok(Self::Sandbox),
            20 => Ok(Self::Nds32),
            21 => Ok(Self::Openrisc),
            22 => Ok(Self::Arm64),
            23 => Ok(Self::Arc),
            24 => Ok(Self::X86_64),
            25 => Ok(Self::Xtensa),
            26 => Ok(Self::Riscv),
            other => Err(other),
        }
    }
}

impl TryFrom<u8> for ImageType {
    type Error = u8;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Invalid),
            1 => Ok(Self::Standalone),
            2 => Ok(Self::Kernel),
            3 => Ok(Self::Ramdisk),
            4 => Ok(Self::Multi),
            5 => Ok(Self::Firmware),
            6 => Ok(Self::Script),
            7 => Ok(Self::Filesystem),
            8 => Ok(Self::FlattenedDeviceTree),
            9 => Ok(Self::Kwbimage),
            10 => Ok(Self::Imximage),
            11 => Ok(Self::Ublimage),
            12 => Ok(Self::Omapimage),
            13 => Ok(Self::Aisimage),
            14 => Ok(Self::KernelNoload),
            other => Err(other),
        }
    }
}

impl TryFrom<u8> for Compression {
    type Error = u8;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Gzip),
            2 => Ok(Self::Bzip2),
            3 => Ok(Self::Lzma),
            4 => Ok(Self::Lzo),
            5 => Ok(Self::Lz4),
            6 => Ok(Self::Zstd),
            other => Err(other),
        }
    }
}
