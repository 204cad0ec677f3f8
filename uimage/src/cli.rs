//! Command line interface for uimage

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{info, warn};

use crate::VERSION;
use crate::config::ExtractConfig;
use crate::error::UImageError;
use crate::extract::extract_image;
use crate::image::{ParseOptions, UbootImage};

/// Command line arguments for uimage
#[derive(Parser, Debug)]
#[command(name = "uimage")]
#[command(version = VERSION)]
#[command(about = "Inspect, verify and split U-Boot legacy images", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode - only output errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List information about an existing image
    List(ListArgs),
    /// Verify header and data checksums
    Verify(VerifyArgs),
    /// Write every payload part to its own file
    Extract(ExtractArgs),
}

/// Arguments for listing image information
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Image file to examine
    pub image_file: PathBuf,

    /// Print in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for verifying an image
#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// Image file to verify
    pub image_file: PathBuf,
}

/// Arguments for extracting parts
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Image file to split
    pub image_file: PathBuf,

    /// Output directory
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// TOML file with extraction settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Prefix of the written file names
    #[arg(long)]
    pub prefix: Option<String>,

    /// Extension for uncompressed parts
    #[arg(long)]
    pub default_extension: Option<String>,

    /// Skip the data CRC check
    #[arg(long)]
    pub no_verify: bool,

    /// Fail on a multi-file image without parts
    #[arg(long)]
    pub require_parts: bool,
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            log::LevelFilter::Error
        } else if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}

/// Main CLI handler
pub fn run_cli(args: Args) -> Result<()> {
    match args.command {
        Commands::List(list_args) => handle_list(list_args),
        Commands::Verify(verify_args) => handle_verify(verify_args),
        Commands::Extract(extract_args) => handle_extract(extract_args),
    }
}

fn read_image(path: &Path) -> Result<Vec<u8>> {
    info!("Reading image: {}", path.display());
    fs::read(path).map_err(|e| UImageError::from(e).into())
}

fn handle_list(args: ListArgs) -> Result<()> {
    let data = read_image(&args.image_file)?;

    // Listing still works on images with a damaged payload
    let opts = ParseOptions {
        verify_data_checksum: false,
        ..Default::default()
    };
    let image = UbootImage::parse_with(&data, &opts)?;
    if !image.header().validate_data_checksum(&data)? {
        warn!("data checksum mismatch in {}", args.image_file.display());
    }

    let info = image.describe();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("{}", info);
    }

    Ok(())
}

fn handle_verify(args: VerifyArgs) -> Result<()> {
    let data = read_image(&args.image_file)?;

    let image = UbootImage::parse(&data)?;

    println!("Header CRC32: 0x{:08x} - OK", image.header().hcrc);
    println!("Data CRC32:   0x{:08x} - OK", image.header().dcrc);
    println!("Parts:        {}", image.payload().len());
    info!("Image verification successful");

    Ok(())
}

fn handle_extract(args: ExtractArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => ExtractConfig::load(path)?,
        None => ExtractConfig::default(),
    };

    if let Some(dir) = args.output_dir {
        config.output_dir = dir;
    }
    if let Some(prefix) = args.prefix {
        config.file_prefix = prefix;
    }
    if let Some(ext) = args.default_extension {
        config.default_extension = Some(ext);
    }
    if args.no_verify {
        config.parse.verify_data_checksum = false;
    }
    if args.require_parts {
        config.parse.require_parts = true;
    }

    let data = read_image(&args.image_file)?;
    for path in extract_image(&data, &config)? {
        println!("{}", path.display());
    }

    Ok(())
}

/// Exit status for an error returned by [`run_cli`]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<UImageError>()
        .map(UImageError::exit_code)
        .unwrap_or(1)
}
