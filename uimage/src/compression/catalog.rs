//! Compression code to file extension table

use crate::error::{Result, UImageError};
use crate::image_types::Compression;

/// Canonical lowercase extension for every known compression code
///
/// Uncompressed payloads carry no suffix.
pub const CATALOG: &[(Compression, &str)] = &[
    (Compression::None, ""),
    (Compression::Gzip, "gz"),
    (Compression::Bzip2, "bz2"),
    (Compression::Lzma, "lzma"),
    (Compression::Lzo, "lzo"),
    (Compression::Lz4, "lz4"),
    (Compression::Zstd, "zst"),
];

impl Compression {
    /// Conventional file extension for payloads compressed this way
    pub fn extension(self) -> &'static str {
        CATALOG
            .iter()
            .find(|(c, _)| *c == self)
            .map(|(_, ext)| *ext)
            .unwrap_or("")
    }
}

/// Look up the extension for a raw `compression_type` header code
pub fn extension_for(code: u8) -> Result<&'static str> {
    Compression::try_from(code)
        .map(Compression::extension)
        .map_err(UImageError::UnknownCompressionCode)
}
