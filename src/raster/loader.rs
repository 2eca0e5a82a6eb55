//! Pixel loader
//!
//! Copies the single uncompressed strip described by an `ImageDescriptor`
//! out of the file buffer.

use log::debug;

use crate::io::byte_order;
use crate::tiff::constants::compression;
use crate::tiff::descriptor::ImageDescriptor;
use crate::tiff::errors::{TiffError, TiffResult};

/// Interleaved 8-bit samples in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub samples_per_pixel: u32,
    /// `width * height * samples_per_pixel` samples
    pub samples: Vec<u8>,
}

impl Raster {
    /// Wraps already-loaded samples, checking the length against the geometry
    pub fn new(width: u32, height: u32, samples_per_pixel: u32, samples: Vec<u8>) -> TiffResult<Self> {
        let expected = sample_count(width, height, samples_per_pixel)?;
        if samples.len() != expected {
            return Err(TiffError::GenericError(format!(
                "Raster of {}x{}x{} needs {} samples, got {}",
                width, height, samples_per_pixel, expected, samples.len()
            )));
        }

        Ok(Self {
            width,
            height,
            samples_per_pixel,
            samples,
        })
    }

    /// Loads the pixel data of `descriptor` from the file buffer
    ///
    /// An absent SamplesPerPixel tag means one sample per pixel.
    pub fn load(data: &[u8], descriptor: &ImageDescriptor) -> TiffResult<Self> {
        check_supported(descriptor)?;

        let samples_per_pixel = descriptor.samples_per_pixel.max(1);
        let len = sample_count(descriptor.width, descriptor.height, samples_per_pixel)?;
        let start = descriptor.strip_offset as usize;

        byte_order::ensure_available(data, start, len)?;
        debug!("Loading {} samples from strip offset {}", len, start);

        if descriptor.strip_byte_count != 0 && (descriptor.strip_byte_count as usize) < len {
            debug!("StripByteCounts {} is smaller than the {} samples the geometry requires",
                   descriptor.strip_byte_count, len);
        }

        Raster::new(
            descriptor.width,
            descriptor.height,
            samples_per_pixel,
            data[start..start + len].to_vec(),
        )
    }

    /// Number of pixels
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

fn check_supported(descriptor: &ImageDescriptor) -> TiffResult<()> {
    if descriptor.compression != 0 && descriptor.compression != compression::NONE as u32 {
        return Err(TiffError::UnsupportedCompression(descriptor.compression));
    }

    if descriptor.strip_count > 1 {
        return Err(TiffError::UnsupportedLayout(format!(
            "{} strips, only single-strip images are supported",
            descriptor.strip_count
        )));
    }

    // A multi-sample BitsPerSample entry holds an offset, not a depth.
    let inline_depth = descriptor.samples_per_pixel <= 1;
    if inline_depth && descriptor.bits_per_sample != 0 && descriptor.bits_per_sample != 8 {
        return Err(TiffError::UnsupportedLayout(format!(
            "{} bits per sample, only 8-bit samples are supported",
            descriptor.bits_per_sample
        )));
    }

    Ok(())
}

fn sample_count(width: u32, height: u32, samples_per_pixel: u32) -> TiffResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(samples_per_pixel as usize))
        .ok_or_else(|| {
            TiffError::UnsupportedLayout(format!(
                "{}x{}x{} samples overflow the address space",
                width, height, samples_per_pixel
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(width: u32, height: u32, spp: u32, offset: u32) -> ImageDescriptor {
        ImageDescriptor {
            width,
            height,
            samples_per_pixel: spp,
            strip_offset: offset,
            strip_count: 1,
            ..ImageDescriptor::default()
        }
    }

    #[test]
    fn test_loads_rgb_strip() {
        let mut data = vec![0xEE; 4];
        data.extend_from_slice(&[1, 2, 3, 4, 5, 6]);
        let raster = Raster::load(&data, &descriptor(2, 1, 3, 4)).unwrap();
        assert_eq!(raster.samples, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(raster.samples_per_pixel, 3);
    }

    #[test]
    fn test_missing_samples_per_pixel_means_one() {
        let data = [9, 8, 7, 6];
        let raster = Raster::load(&data, &descriptor(2, 2, 0, 0)).unwrap();
        assert_eq!(raster.samples_per_pixel, 1);
        assert_eq!(raster.samples, vec![9, 8, 7, 6]);
    }

    #[test]
    fn test_short_buffer_is_truncated() {
        let data = [0u8; 10];
        let result = Raster::load(&data, &descriptor(2, 2, 3, 4));
        assert!(matches!(result, Err(TiffError::TruncatedInput { offset: 4, needed: 12, available: 10 })));
    }

    #[test]
    fn test_compressed_rejected() {
        let mut d = descriptor(1, 1, 1, 0);
        d.compression = compression::LZW as u32;
        assert!(matches!(Raster::load(&[0], &d), Err(TiffError::UnsupportedCompression(5))));
    }

    #[test]
    fn test_multiple_strips_rejected() {
        let mut d = descriptor(1, 1, 1, 0);
        d.strip_count = 2;
        assert!(matches!(Raster::load(&[0], &d), Err(TiffError::UnsupportedLayout(_))));
    }

    #[test]
    fn test_non_byte_samples_rejected() {
        let mut d = descriptor(1, 1, 1, 0);
        d.bits_per_sample = 16;
        assert!(matches!(Raster::load(&[0, 0], &d), Err(TiffError::UnsupportedLayout(_))));
    }

    #[test]
    fn test_new_checks_length() {
        assert!(Raster::new(2, 2, 1, vec![0; 3]).is_err());
        assert!(Raster::new(2, 2, 1, vec![0; 4]).is_ok());
    }
}
