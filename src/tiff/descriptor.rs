//! Image descriptor
//!
//! Folds the directory entries into the geometry and format fields needed
//! to locate and interpret the pixel data.

use std::fmt;

use log::{trace, warn};

use crate::tiff::constants::tags;
use crate::tiff::errors::{TiffError, TiffResult};
use crate::tiff::ifd::IFDEntry;
use crate::utils::tag_utils;

/// Geometry and format of the image described by a directory
///
/// Fields whose tag is absent stay at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageDescriptor {
    pub width: u32,
    pub height: u32,
    pub rows_per_strip: u32,
    pub strip_offset: u32,
    pub strip_byte_count: u32,
    pub samples_per_pixel: u32,
    pub bits_per_sample: u32,
    pub compression: u32,
    pub photometric: u32,
    /// Element count of the StripOffsets tag
    pub strip_count: u32,
}

impl ImageDescriptor {
    /// Builds a descriptor from directory entries in a single pass
    ///
    /// Recognized tags are copied as inline values; unknown tags are
    /// ignored. Width, height and strip offset are required.
    pub fn from_entries(entries: &[IFDEntry]) -> TiffResult<Self> {
        let mut descriptor = ImageDescriptor::default();
        let mut seen_width = false;
        let mut seen_height = false;
        let mut seen_strip_offset = false;
        let mut out_of_line = Vec::new();

        for entry in entries {
            let field = match entry.tag {
                tags::IMAGE_WIDTH => {
                    seen_width = true;
                    &mut descriptor.width
                }
                tags::IMAGE_LENGTH => {
                    seen_height = true;
                    &mut descriptor.height
                }
                tags::ROWS_PER_STRIP => &mut descriptor.rows_per_strip,
                tags::STRIP_OFFSETS => {
                    seen_strip_offset = true;
                    descriptor.strip_count = entry.count;
                    &mut descriptor.strip_offset
                }
                tags::STRIP_BYTE_COUNTS => &mut descriptor.strip_byte_count,
                tags::SAMPLES_PER_PIXEL => &mut descriptor.samples_per_pixel,
                tags::BITS_PER_SAMPLE => &mut descriptor.bits_per_sample,
                tags::COMPRESSION => &mut descriptor.compression,
                tags::PHOTOMETRIC_INTERPRETATION => &mut descriptor.photometric,
                _ => {
                    trace!("Ignoring tag {} ({})", entry.tag, tag_utils::get_tag_name(entry.tag));
                    continue;
                }
            };

            if !entry.is_value_inline() {
                out_of_line.push(entry);
            }

            *field = entry.value_offset;
        }

        for entry in out_of_line {
            if expects_inline(entry, descriptor.samples_per_pixel) {
                warn!("Tag {} ({}) holds {} values out of line; using offset {} as its value",
                      entry.tag, tag_utils::get_tag_name(entry.tag), entry.count, entry.value_offset);
            }
        }

        if !seen_width {
            return Err(TiffError::MissingRequiredTag(tags::IMAGE_WIDTH));
        }
        if !seen_height {
            return Err(TiffError::MissingRequiredTag(tags::IMAGE_LENGTH));
        }
        if !seen_strip_offset {
            return Err(TiffError::MissingRequiredTag(tags::STRIP_OFFSETS));
        }

        Ok(descriptor)
    }

    /// Number of pixels in the image
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl fmt::Display for ImageDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Image width:................{}", self.width)?;
        writeln!(f, "Image height:...............{}", self.height)?;
        writeln!(f, "Samples per pixel:..........{}", self.samples_per_pixel)?;
        writeln!(f, "Bits per sample:............{}", self.bits_per_sample)?;
        writeln!(f, "Compression:................{} ({})",
                 self.compression, tag_utils::get_compression_name(self.compression))?;
        writeln!(f, "Photometric:................{} ({})",
                 self.photometric, tag_utils::get_photometric_name(self.photometric))?;
        writeln!(f, "Rows per strip:.............{}", self.rows_per_strip)?;
        writeln!(f, "Strip offsets:..............{}", self.strip_offset)?;
        writeln!(f, "Strip byte counts:..........{}", self.strip_byte_count)?;
        write!(f, "Width * Height * Samples:...{}",
               self.pixel_count() * self.samples_per_pixel.max(1) as u64)
    }
}

/// Whether an out-of-line `entry` is worth a warning
///
/// BitsPerSample carries one value per sample, so multi-sample images
/// store it out of line and the pixel loader does not read it.
fn expects_inline(entry: &IFDEntry, samples_per_pixel: u32) -> bool {
    !(entry.tag == tags::BITS_PER_SAMPLE && samples_per_pixel > 1)
}
