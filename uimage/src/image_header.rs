//! U-Boot legacy image header decoding and validation
//!
//! The header is 64 bytes, every multi-byte field big-endian:
//!
//! ```text
//!  0  ih_magic   4  ih_hcrc   8  ih_time  12  ih_size
//! 16  ih_load   20  ih_ep    24  ih_dcrc  28  os arch type comp
//! 32  ih_name[32]
//! ```

use std::fmt;
use std::io::{Cursor, Read};

use byte_unit::Byte;
use byteorder::{BigEndian, ReadBytesExt};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::crc::{HCRC_RANGE, calculate_crc32, header_crc32};
use crate::error::{Result, UImageError};
use crate::image_types::{Arch, Compression, ImageType, OsType, code_name};
use crate::{IH_HEADER_SIZE, IH_MAGIC};

/// Maximum length of image name
pub const IH_NMLEN: usize = 32;

/// Decoded U-Boot legacy image header
///
/// OS, architecture, image type and compression are kept as the raw codes
/// found on the wire so that headers with codes newer than our tables still
/// decode; use the typed accessors to resolve them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHeader {
    /// Magic number (always IH_MAGIC once decoded)
    pub magic: u32,
    /// Stored header CRC32
    pub hcrc: u32,
    /// Creation time, seconds since the epoch
    pub time: u32,
    /// Size of the payload region
    pub size: u32,
    /// Load address of the image
    pub load: u32,
    /// Entry point address
    pub ep: u32,
    /// Stored CRC32 of the payload region
    pub dcrc: u32,
    /// Operating system code
    pub os: u8,
    /// Architecture code
    pub arch: u8,
    /// Image type code
    pub type_: u8,
    /// Compression code
    pub comp: u8,
    /// Image name, up to the first NUL
    pub name: String,
}

/// Cheap sanity check: does `data` start with the uImage magic?
///
/// Buffers shorter than four bytes are reported as not an image.
pub fn check_magic(data: &[u8]) -> bool {
    read_magic(data) == Some(IH_MAGIC)
}

fn read_magic(data: &[u8]) -> Option<u32> {
    let word: [u8; 4] = data.get(..4)?.try_into().ok()?;
    Some(u32::from_be_bytes(word))
}

/// Check the header CRC of the image in `data`
///
/// Fails with [`UImageError::TruncatedInput`] when `data` holds less than a
/// full header and with [`UImageError::HeaderChecksumMismatch`] when the
/// stored and recomputed values differ.
pub fn verify_header_checksum(data: &[u8]) -> Result<()> {
    let computed = header_crc32(data)?;

    let mut stored = [0u8; 4];
    stored.copy_from_slice(&data[HCRC_RANGE]);
    let stored = u32::from_be_bytes(stored);

    if stored != computed {
        return Err(UImageError::HeaderChecksumMismatch { stored, computed });
    }
    Ok(())
}

/// Boolean form of [`verify_header_checksum`]
pub fn validate_header_checksum(data: &[u8]) -> bool {
    verify_header_checksum(data).is_ok()
}

impl ImageHeader {
    /// Decode the header at the start of `data`
    ///
    /// Only the magic is checked here; the header CRC is left to
    /// [`verify_header_checksum`] so callers can inspect damaged headers.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < IH_HEADER_SIZE {
            return Err(UImageError::truncated(IH_HEADER_SIZE, data.len()));
        }

        let mut cursor = Cursor::new(&data[..IH_HEADER_SIZE]);

        let magic = cursor.read_u32::<BigEndian>()?;
        if magic != IH_MAGIC {
            return Err(UImageError::BadMagic {
                expected: IH_MAGIC,
                found: magic,
            });
        }

        let hcrc = cursor.read_u32::<BigEndian>()?;
        let time = cursor.read_u32::<BigEndian>()?;
        let size = cursor.read_u32::<BigEndian>()?;
        let load = cursor.read_u32::<BigEndian>()?;
        let ep = cursor.read_u32::<BigEndian>()?;
        let dcrc = cursor.read_u32::<BigEndian>()?;
        let os = cursor.read_u8()?;
        let arch = cursor.read_u8()?;
        let type_ = cursor.read_u8()?;
        let comp = cursor.read_u8()?;

        let mut name_bytes = [0u8; IH_NMLEN];
        cursor.read_exact(&mut name_bytes)?;
        let name_len = name_bytes.iter().position(|&b| b == 0).unwrap_or(IH_NMLEN);
        let name = String::from_utf8_lossy(&name_bytes[..name_len]).into_owned();

        Ok(Self {
            magic,
            hcrc,
            time,
            size,
            load,
            ep,
            dcrc,
            os,
            arch,
            type_,
            comp,
            name,
        })
    }

    /// Operating system, if the code is known
    pub fn os_type(&self) -> Option<OsType> {
        OsType::try_from(self.os).ok()
    }

    /// Target architecture, if the code is known
    pub fn arch(&self) -> Option<Arch> {
        Arch::try_from(self.arch).ok()
    }

    /// Image type, if the code is known
    pub fn image_type(&self) -> Option<ImageType> {
        ImageType::try_from(self.type_).ok()
    }

    /// Compression algorithm, if the code is known
    pub fn compression(&self) -> Option<Compression> {
        Compression::try_from(self.comp).ok()
    }

    /// Get the timestamp as a DateTime
    pub fn timestamp(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.time as i64, 0).unwrap_or_default()
    }

    /// Total image size (header + data)
    pub fn total_size(&self) -> u64 {
        IH_HEADER_SIZE as u64 + self.size as u64
    }

    /// The payload region of `image`, which must start with this header
    pub fn payload<'a>(&self, image: &'a [u8]) -> Result<&'a [u8]> {
        let end = usize::try_from(self.total_size())
            .map_err(|_| UImageError::truncated(usize::MAX, image.len()))?;
        image
            .get(IH_HEADER_SIZE..end)
            .ok_or_else(|| UImageError::truncated(end, image.len()))
    }

    /// Check the data CRC over the `size` bytes following the header
    ///
    /// Fails with [`UImageError::TruncatedInput`] if `image` is too short and
    /// with [`UImageError::DataChecksumMismatch`] on a CRC mismatch.
    pub fn verify_data_checksum(&self, image: &[u8]) -> Result<()> {
        let computed = calculate_crc32(self.payload(image)?);
        if computed != self.dcrc {
            return Err(UImageError::DataChecksumMismatch {
                stored: self.dcrc,
                computed,
            });
        }
        Ok(())
    }

    /// Boolean form of [`ImageHeader::verify_data_checksum`]
    ///
    /// A short buffer is still an error; only a mismatch maps to `false`.
    pub fn validate_data_checksum(&self, image: &[u8]) -> Result<bool> {
        match self.verify_data_checksum(image) {
            Ok(()) => Ok(true),
            Err(UImageError::DataChecksumMismatch { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Human readable projection of the header
    pub fn describe(&self) -> ImageInfo {
        ImageInfo {
            magic: self.magic,
            header_crc: self.hcrc,
            timestamp: self.time,
            created: self.timestamp().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            data_size: self.size,
            load_address: self.load,
            entry_point: self.ep,
            data_crc: self.dcrc,
            os: code_name::<OsType>(self.os),
            arch: code_name::<Arch>(self.arch),
            image_type: code_name::<ImageType>(self.type_),
            compression: code_name::<Compression>(self.comp),
            name: self.name.clone(),
            parts: None,
        }
    }
}

/// Symbolic view of a header, as printed by `uimage list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageInfo {
    pub magic: u32,
    pub header_crc: u32,
    pub timestamp: u32,
    pub created: String,
    pub data_size: u32,
    pub load_address: u32,
    pub entry_point: u32,
    pub data_crc: u32,
    pub os: String,
    pub arch: String,
    pub image_type: String,
    pub compression: String,
    pub name: String,
    /// Part sizes, filled in once the payload has been split
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<usize>>,
}

impl ImageInfo {
    /// Field name to value mapping, in header order
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("magic", format!("0x{:08x}", self.magic)),
            ("header_crc", format!("0x{:08x}", self.header_crc)),
            ("timestamp", self.timestamp.to_string()),
            ("data_size", self.data_size.to_string()),
            ("load_address", format!("0x{:08x}", self.load_address)),
            ("entry_point", format!("0x{:08x}", self.entry_point)),
            ("data_crc", format!("0x{:08x}", self.data_crc)),
            ("os", self.os.clone()),
            ("arch", self.arch.clone()),
            ("image_type", self.image_type.clone()),
            ("compression", self.compression.clone()),
            ("name", self.name.clone()),
        ];
        if let Some(parts) = &self.parts {
            fields.push(("parts", parts.len().to_string()));
        }
        fields
    }
}

impl fmt::Display for ImageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Image Name:   {}", self.name)?;
        writeln!(f, "Created:      {}", self.created)?;
        writeln!(
            f,
            "Image Type:   {} {} {} ({})",
            self.arch, self.os, self.image_type, self.compression
        )?;
        writeln!(
            f,
            "Data Size:    {} Bytes = {:#}",
            self.data_size,
            Byte::from_u64(self.data_size as u64)
        )?;
        writeln!(f, "Load Address: {:08x}", self.load_address)?;
        write!(f, "Entry Point:  {:08x}", self.entry_point)?;
        if let Some(parts) = &self.parts {
            write!(f, "\nContents:")?;
            for (i, len) in parts.iter().enumerate() {
                write!(f, "\n   Image {}: {} Bytes", i, len)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{encode, sample_header, seal};

    #[test]
    fn test_check_magic() {
        assert!(check_magic(&[0x27, 0x05, 0x19, 0x56]));
        assert!(check_magic(&[0x27, 0x05, 0x19, 0x56, 0xff, 0xff]));
        assert!(!check_magic(&[0x56, 0x19, 0x05, 0x27]));
        assert!(!check_magic(&[0x27, 0x05, 0x19]));
        assert!(!check_magic(&[]));
    }

    #[test]
    fn test_header_decode() {
        let header = sample_header();
        let bytes = encode(&header);
        let parsed = ImageHeader::from_bytes(&bytes).unwrap();
        assert_eq!(parsed, header);
        assert_eq!(parsed.os_type(), Some(OsType::Linux));
        assert_eq!(parsed.arch(), Some(Arch::Arm));
        assert_eq!(parsed.image_type(), Some(ImageType::Kernel));
        assert_eq!(parsed.compression(), Some(Compression::Gzip));
    }

    #[test]
    fn test_header_fields_are_big_endian() {
        let mut bytes = encode(&sample_header());
        bytes[12..16].copy_from_slice(&[0x00, 0x00, 0x01, 0x02]);
        let parsed = ImageHeader::from_bytes(&bytes).unwrap();
        assert_eq!(parsed.size, 0x0102);
    }

    #[test]
    fn test_header_too_short() {
        let bytes = encode(&sample_header());
        for len in [0, 4, 63] {
            match ImageHeader::from_bytes(&bytes[..len]) {
                Err(UImageError::TruncatedInput { needed, available }) => {
                    assert_eq!(needed, IH_HEADER_SIZE);
                    assert_eq!(available, len);
                }
                other => panic!("unexpected result: {other:?}"),
            }
        }
    }

    #[test]
    fn test_header_bad_magic() {
        let mut bytes = encode(&sample_header());
        bytes[0] = 0;
        assert!(matches!(
            ImageHeader::from_bytes(&bytes),
            Err(UImageError::BadMagic { found: 0x00051956, .. })
        ));
    }

    #[test]
    fn test_name_stops_at_nul() {
        let mut header = sample_header();
        header.name = "abc".into();
        let mut bytes = encode(&header);
        bytes[32 + 5] = b'x';
        assert_eq!(ImageHeader::from_bytes(&bytes).unwrap().name, "abc");
    }

    #[test]
    fn test_name_full_length() {
        let mut header = sample_header();
        header.name = "N".repeat(IH_NMLEN);
        let bytes = encode(&header);
        assert_eq!(ImageHeader::from_bytes(&bytes).unwrap().name, header.name);
    }

    #[test]
    fn test_header_checksum() {
        let mut bytes = seal(encode(&sample_header()));
        assert!(validate_header_checksum(&bytes));

        bytes[40] ^= 0x01;
        assert!(matches!(
            verify_header_checksum(&bytes),
            Err(UImageError::HeaderChecksumMismatch { .. })
        ));
        assert!(!validate_header_checksum(&bytes));
        assert!(!validate_header_checksum(&bytes[..10]));
    }

    #[test]
    fn test_data_checksum() {
        let payload = b"payload bytes";
        let mut header = sample_header();
        header.size = payload.len() as u32;
        header.dcrc = calculate_crc32(payload);

        let mut image = encode(&header).to_vec();
        image.extend_from_slice(payload);
        image.extend_from_slice(b"trailing");
        assert!(header.validate_data_checksum(&image).unwrap());

        image[IH_HEADER_SIZE] ^= 0xff;
        assert!(!header.validate_data_checksum(&image).unwrap());
        assert!(matches!(
            header.verify_data_checksum(&image),
            Err(UImageError::DataChecksumMismatch { .. })
        ));

        let short = &image[..IH_HEADER_SIZE + 3];
        assert!(matches!(
            header.validate_data_checksum(short),
            Err(UImageError::TruncatedInput { .. })
        ));
    }

    #[test]
    fn test_describe() {
        let mut header = sample_header();
        header.time = 1_704_110_400;
        let info = header.describe();
        assert_eq!(info.os, "Linux");
        assert_eq!(info.arch, "ARM");
        assert_eq!(info.image_type, "Kernel Image");
        assert_eq!(info.compression, "gzip compressed");
        assert_eq!(info.created, "2024-01-01 12:00:00 UTC");
        assert_eq!(info.parts, None);

        let fields = info.fields();
        assert_eq!(fields.len(), 12);
        assert_eq!(fields[0], ("magic", "0x27051956".to_string()));
        assert_eq!(fields[11], ("name", header.name.clone()));
    }

    #[test]
    fn test_describe_unknown_codes() {
        let mut header = sample_header();
        header.os = 0x80;
        header.comp = 0xff;
        let info = header.describe();
        assert_eq!(info.os, "<not supported 0x80>");
        assert_eq!(info.compression, "<not supported 0xFF>");
        assert_eq!(header.os_type(), None);
    }

    #[test]
    fn test_summary_text() {
        let text = sample_header().describe().to_string();
        assert!(text.contains("Image Name:   Test Kernel"));
        assert!(text.contains("Load Address: 80008000"));
        assert!(!text.contains("Contents:"));
    }
}
