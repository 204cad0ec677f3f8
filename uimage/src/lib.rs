//! # uimage
//!
//! Decoder and validator for U-Boot legacy images (`uImage`).
//!
//! A legacy image is a 64-byte big-endian header followed by a payload. The
//! payload is either a single blob or, for multi-file images, a length table
//! followed by several 4-byte aligned parts. Everything here works on a
//! borrowed byte buffer and hands out slices into it.
//!
//! ## Example
//!
//! ```no_run
//! use uimage::{UbootImage, extension_for};
//!
//! let data = std::fs::read("uImage")?;
//! let image = UbootImage::parse(&data)?;
//! println!("{}", image.describe());
//! for (i, part) in image.parts().iter().enumerate() {
//!     println!("part {}: {} bytes", i, part.len());
//! }
//! println!("extension: {}", extension_for(image.header().comp)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod compression;
pub mod config;
pub mod crc;
pub mod error;
pub mod extract;
pub mod image;
pub mod image_header;
pub mod image_types;
pub mod payload;

#[cfg(test)]
mod test_util;

// Re-export main types for convenience
pub use compression::extension_for;
pub use crc::calculate_crc32;
pub use error::{Result, UImageError};
pub use image::{ParseOptions, UbootImage};
pub use image_header::{
    ImageHeader, ImageInfo, check_magic, validate_header_checksum, verify_header_checksum,
};
pub use image_types::*;
pub use payload::{PayloadSet, is_multi_file, split_payload};

/// Current version of the uimage implementation
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Magic number for U-Boot legacy images
pub const IH_MAGIC: u32 = 0x27051956;

/// Size of the legacy image header
pub const IH_HEADER_SIZE: usize = 64;
