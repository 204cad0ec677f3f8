//! Writing payload parts to disk

use std::{
    fs,
    path::{Path, PathBuf},
};

use byte_unit::Byte;
use log::{debug, info};

use crate::config::ExtractConfig;
use crate::error::Result;
use crate::image::UbootImage;
use crate::payload::PayloadSet;

/// File name for part `index`, e.g. `part_00.gz`
///
/// An empty extension produces no trailing dot.
pub fn part_file_name(prefix: &str, index: usize, extension: &str) -> String {
    if extension.is_empty() {
        format!("{}{:02}", prefix, index)
    } else {
        format!("{}{:02}.{}", prefix, index, extension)
    }
}

/// Write every part of `payload` into `dir`, creating it if needed
///
/// Returns the written paths in part order.
pub fn write_parts(
    dir: &Path,
    payload: &PayloadSet<'_>,
    prefix: &str,
    extension: &str,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(payload.len());
    for (index, part) in payload.iter().enumerate() {
        let path = dir.join(part_file_name(prefix, index, extension));
        debug!(
            "writing part {} ({:#}) to {}",
            index,
            Byte::from_u64(part.len() as u64),
            path.display()
        );
        fs::write(&path, part)?;
        written.push(path);
    }
    Ok(written)
}

/// Parse `data` and write its parts as configured
pub fn extract_image(data: &[u8], config: &ExtractConfig) -> Result<Vec<PathBuf>> {
    let image = UbootImage::parse_with(data, &config.parse)?;
    let extension = config.extension(image.extension()?);

    info!(
        "extracting {} part(s) of '{}' to {}",
        image.payload().len(),
        image.header().name,
        config.output_dir.display()
    );

    write_parts(
        &config.output_dir,
        image.payload(),
        &config.file_prefix,
        extension,
    )
}
