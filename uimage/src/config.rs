//! Extraction settings loaded from TOML
//!
//! ```toml
//! output_dir = "out"
//! file_prefix = "part_"
//! default_extension = "bin"
//! verify_data_checksum = true
//! require_parts = false
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::error::{Result, UImageError};
use crate::image::ParseOptions;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ExtractConfig {
    /// Directory receiving the extracted parts
    pub output_dir: PathBuf,
    /// File name prefix, followed by the two-digit part index
    pub file_prefix: String,
    /// Extension used when the payload is not compressed
    pub default_extension: Option<String>,
    #[serde(flatten)]
    pub parse: ParseOptions,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            file_prefix: "part_".to_string(),
            default_extension: None,
            parse: ParseOptions::default(),
        }
    }
}

impl ExtractConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| UImageError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            UImageError::Config(format!("can not open config file {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Extension for a part given the catalog extension of its image
    pub fn extension<'a>(&'a self, catalog: &'a str) -> &'a str {
        match (&self.default_extension, catalog) {
            (Some(ext), "") => ext.as_str(),
            _ => catalog,
        }
    }
}
