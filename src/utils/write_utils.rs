//! Output writing utilities
//!
//! Writes the bilevel raster either as raw samples or encoded through the
//! `image` crate.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{GrayImage, ImageFormat};
use log::info;

use crate::tiff::errors::{TiffError, TiffResult};

/// Output encoding for the dithered raster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `width * height` bytes, one per pixel, no header
    Raw,
    /// PNG, 8-bit greyscale
    Png,
    /// Binary PGM (P5)
    Pgm,
}

impl OutputFormat {
    /// Parses the command-line name of a format
    pub fn from_name(name: &str) -> TiffResult<Self> {
        match name {
            "raw" => Ok(OutputFormat::Raw),
            "png" => Ok(OutputFormat::Png),
            "pgm" => Ok(OutputFormat::Pgm),
            other => Err(TiffError::GenericError(format!("Unknown output format: {}", other))),
        }
    }
}

/// Writes `image` to `path` in `format`
pub fn write_bilevel(image: &GrayImage, path: &Path, format: OutputFormat) -> TiffResult<()> {
    info!("Writing {}x{} image to file: {}", image.width(), image.height(), path.display());

    match format {
        OutputFormat::Raw => write_raw(image.as_raw(), path),
        OutputFormat::Png => Ok(image.save_with_format(path, ImageFormat::Png)?),
        OutputFormat::Pgm => Ok(image.save_with_format(path, ImageFormat::Pnm)?),
    }
}

/// Writes the samples unchanged
pub fn write_raw(samples: &[u8], path: &Path) -> TiffResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(samples)?;
    writer.flush()?;
    Ok(())
}
