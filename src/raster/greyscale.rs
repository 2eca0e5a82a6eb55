//! Greyscale reduction
//!
//! Collapses a multi-sample raster to a single 8-bit channel.

use image::GrayImage;

use crate::raster::Raster;
use crate::tiff::errors::{TiffError, TiffResult};

impl Raster {
    /// Reduces the raster to one channel
    ///
    /// Three or more samples per pixel are treated as RGB and reduced to the
    /// root mean square of the first three; one sample is copied; two
    /// samples (grey plus alpha) keep the first.
    pub fn to_grey(&self) -> TiffResult<GrayImage> {
        let grey: Vec<u8> = match self.samples_per_pixel {
            0 | 1 => self.samples.clone(),
            2 => self.samples.chunks_exact(2).map(|pixel| pixel[0]).collect(),
            spp => self
                .samples
                .chunks_exact(spp as usize)
                .map(|pixel| rms_luminance(pixel[0], pixel[1], pixel[2]))
                .collect(),
        };

        GrayImage::from_raw(self.width, self.height, grey).ok_or_else(|| {
            TiffError::GenericError(format!(
                "Greyscale buffer does not match {}x{}",
                self.width, self.height
            ))
        })
    }
}

/// `floor(sqrt((r² + g² + b²) / 3))`
pub fn rms_luminance(r: u8, g: u8, b: u8) -> u8 {
    let (r, g, b) = (r as f64, g as f64, b as f64);
    ((r * r + g * g + b * b) / 3.0).sqrt() as u8
}
