//! Library entry points
//!
//! The full pipeline: decode, load pixels, reduce to greyscale, dither,
//! optionally write.

use std::path::Path;

use image::GrayImage;
use log::info;

use crate::raster::DitherMethod;
use crate::tiff::errors::{TiffError, TiffResult};
use crate::tiff::{TiffReader, TIFF};
use crate::utils::write_utils::{self, OutputFormat};

/// Converts a decoded TIFF to a bilevel greyscale image
pub fn to_bilevel(tiff: &TIFF, method: DitherMethod) -> TiffResult<GrayImage> {
    let raster = tiff.load_raster()?;
    let mut grey = raster.to_grey()?;
    method.apply(&mut grey);
    Ok(grey)
}

/// Decodes TIFF bytes and converts them to a bilevel image
pub fn dither_bytes(data: Vec<u8>, method: DitherMethod) -> TiffResult<GrayImage> {
    let tiff = TiffReader::new().read(data)?;
    to_bilevel(&tiff, method)
}

/// Reads `input`, dithers it and writes the result to `output`
pub fn convert_file(
    input: &Path,
    output: &Path,
    method: DitherMethod,
    format: OutputFormat,
) -> TiffResult<GrayImage> {
    let input_str = input
        .to_str()
        .ok_or_else(|| TiffError::GenericError(format!("Non UTF-8 path: {}", input.display())))?;

    let mut reader = TiffReader::new();
    let tiff = reader.load(input_str)?;

    let image = to_bilevel(&tiff, method)?;
    info!("Dithered {}x{} image", image.width(), image.height());

    write_utils::write_bilevel(&image, output, format)?;
    Ok(image)
}
