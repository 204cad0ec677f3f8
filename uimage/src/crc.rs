//! CRC-32 helpers
//!
//! uImage uses the zlib/gzip CRC-32 (reflected polynomial 0xEDB88320, init and
//! final xor 0xFFFFFFFF) for both the header and the data checksum.

use crc32fast::Hasher;

use crate::IH_HEADER_SIZE;
use crate::error::{Result, UImageError};

/// Byte range of the `ih_hcrc` field inside the header
pub const HCRC_RANGE: std::ops::Range<usize> = 4..8;

/// Calculate the CRC-32 of `data`
pub fn calculate_crc32(data: &[u8]) -> u32 {
    crc32fast::hash(data)
}

/// Calculate the header CRC-32 with the checksum field taken as zero
///
/// Only the first [`IH_HEADER_SIZE`] bytes of `header` are hashed. Fails with
/// [`UImageError::TruncatedInput`] when fewer are available.
pub fn header_crc32(header: &[u8]) -> Result<u32> {
    let header = header
        .get(..IH_HEADER_SIZE)
        .ok_or_else(|| UImageError::truncated(IH_HEADER_SIZE, header.len()))?;
    let mut hasher = Hasher::new();
    hasher.update(&header[..HCRC_RANGE.start]);
    hasher.update(&[0u8; 4]);
    hasher.update(&header[HCRC_RANGE.end..]);
    Ok(hasher.finalize())
}
