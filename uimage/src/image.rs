//! Whole-image decoding
//!
//! [`UbootImage::parse`] runs the complete pipeline over a borrowed buffer:
//! magic, header decode, header CRC, data CRC, payload split. It either
//! returns a fully validated image or the first error met.

use serde::Deserialize;

use crate::IH_MAGIC;
use crate::compression::extension_for;
use crate::error::{Result, UImageError};
use crate::image_header::{ImageHeader, ImageInfo, check_magic, verify_header_checksum};
use crate::payload::{PayloadSet, split_payload};

/// Knobs for [`UbootImage::parse_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Fail on a data CRC mismatch
    pub verify_data_checksum: bool,
    /// Reject multi-file images whose length table is empty
    pub require_parts: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            verify_data_checksum: true,
            require_parts: false,
        }
    }
}

/// A validated uImage and its payload parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UbootImage<'a> {
    header: ImageHeader,
    payload: PayloadSet<'a>,
}

impl<'a> UbootImage<'a> {
    /// Parse with default options
    pub fn parse(image: &'a [u8]) -> Result<Self> {
        Self::parse_with(image, &ParseOptions::default())
    }

    pub fn parse_with(image: &'a [u8], opts: &ParseOptions) -> Result<Self> {
        if image.len() >= 4 && !check_magic(image) {
            return Err(UImageError::BadMagic {
                expected: IH_MAGIC,
                found: u32::from_be_bytes([image[0], image[1], image[2], image[3]]),
            });
        }

        let header = ImageHeader::from_bytes(image)?;
        verify_header_checksum(image)?;

        if opts.verify_data_checksum {
            header.verify_data_checksum(image)?;
        }

        let payload = split_payload(image, &header)?;
        if opts.require_parts && payload.is_multi_file() && payload.is_empty() {
            return Err(UImageError::corrupt_table(
                "multi-file image declares no parts",
            ));
        }

        Ok(Self { header, payload })
    }

    pub fn header(&self) -> &ImageHeader {
        &self.header
    }

    pub fn payload(&self) -> &PayloadSet<'a> {
        &self.payload
    }

    pub fn parts(&self) -> &[&'a [u8]] {
        self.payload.parts()
    }

    /// File extension matching the payload compression
    pub fn extension(&self) -> Result<&'static str> {
        extension_for(self.header.comp)
    }

    /// Header description including the part sizes
    pub fn describe(&self) -> ImageInfo {
        let mut info = self.header.describe();
        info.parts = Some(self.payload.sizes());
        info
    }
}
