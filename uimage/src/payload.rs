//! Payload splitting for single and multi-file images
//!
//! A multi-file payload starts with a table of big-endian `u32` part sizes
//! closed by a zero entry. The parts follow the table back to back, each one
//! padded to a 4-byte boundary except the last.

use std::io::Cursor;

use byteorder::{BigEndian, ReadBytesExt};

use crate::IH_HEADER_SIZE;
use crate::error::{Result, UImageError};
use crate::image_header::ImageHeader;
use crate::image_types::ImageType;

/// Alignment of parts inside a multi-file payload
pub const PART_ALIGN: usize = 4;

/// True iff `header` describes a multi-file image
pub fn is_multi_file(header: &ImageHeader) -> bool {
    header.type_ == ImageType::Multi as u8
}

/// Payload parts borrowed from the image buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadSet<'a> {
    multi: bool,
    parts: Vec<&'a [u8]>,
}

impl<'a> PayloadSet<'a> {
    /// Parts in image order
    pub fn parts(&self) -> &[&'a [u8]] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Whether the parts came out of a length table
    pub fn is_multi_file(&self) -> bool {
        self.multi
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a [u8]> + '_ {
        self.parts.iter().copied()
    }

    /// Size of every part
    pub fn sizes(&self) -> Vec<usize> {
        self.parts.iter().map(|p| p.len()).collect()
    }

    /// Copy every part out of the source buffer
    pub fn to_owned_parts(&self) -> Vec<Vec<u8>> {
        self.parts.iter().map(|p| p.to_vec()).collect()
    }
}

/// Read the zero-terminated part size table at the start of `data`
///
/// The terminator itself is consumed but not returned.
pub fn read_length_table(data: &[u8]) -> Result<Vec<u32>> {
    let mut cursor = Cursor::new(data);
    let mut lengths = Vec::new();

    while let Ok(len) = cursor.read_u32::<BigEndian>() {
        if len == 0 {
            return Ok(lengths);
        }
        lengths.push(len);
    }

    Err(UImageError::corrupt_table(format!(
        "no terminating zero entry within {} bytes",
        data.len()
    )))
}

/// Size of a length table holding `parts` entries plus its terminator
pub fn length_table_size(parts: usize) -> usize {
    4 * (parts + 1)
}

/// Split the payload of `image` according to `header`
///
/// Single-file images yield exactly `header.size` bytes, ignoring anything
/// after the payload region. Multi-file images yield one slice per length
/// table entry, read from whatever follows the header: the table and the
/// parts are bounded by the available bytes, not by `header.size`.
pub fn split_payload<'a>(image: &'a [u8], header: &ImageHeader) -> Result<PayloadSet<'a>> {
    if !is_multi_file(header) {
        return Ok(PayloadSet {
            multi: false,
            parts: vec![header.payload(image)?],
        });
    }

    let data = image
        .get(IH_HEADER_SIZE..)
        .ok_or_else(|| UImageError::truncated(IH_HEADER_SIZE, image.len()))?;
    let lengths = read_length_table(data)?;
    let mut offset = length_table_size(lengths.len());
    let mut parts = Vec::with_capacity(lengths.len());

    for len in lengths {
        let end = offset
            .checked_add(len as usize)
            .ok_or_else(|| UImageError::corrupt_table(format!("part size {} overflows", len)))?;
        let part = data
            .get(offset..end)
            .ok_or_else(|| UImageError::truncated(IH_HEADER_SIZE + end, image.len()))?;
        parts.push(part);
        offset = end.next_multiple_of(PART_ALIGN);
    }

    Ok(PayloadSet { multi: true, parts })
}
