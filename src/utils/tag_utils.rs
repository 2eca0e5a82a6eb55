//! TIFF tag utilities
//!
//! Human-readable names for tags and their coded values, used by the
//! diagnostics output.

use crate::tiff::constants::{compression, photometric, tags};

/// Get the name of a TIFF tag
///
/// Returns "Unknown" for tags outside the recognized set.
pub fn get_tag_name(tag: u16) -> &'static str {
    match tag {
        tags::IMAGE_WIDTH => "ImageWidth",
        tags::IMAGE_LENGTH => "ImageLength",
        tags::BITS_PER_SAMPLE => "BitsPerSample",
        tags::COMPRESSION => "Compression",
        tags::PHOTOMETRIC_INTERPRETATION => "PhotometricInterpretation",
        tags::STRIP_OFFSETS => "StripOffsets",
        tags::SAMPLES_PER_PIXEL => "SamplesPerPixel",
        tags::ROWS_PER_STRIP => "RowsPerStrip",
        tags::STRIP_BYTE_COUNTS => "StripByteCounts",
        _ => "Unknown",
    }
}

/// Get the name of a compression method
pub fn get_compression_name(compression_code: u32) -> &'static str {
    match u16::try_from(compression_code) {
        Ok(compression::NONE) => "None",
        Ok(compression::CCITT_RLE) => "CCITT RLE",
        Ok(compression::CCITT_FAX3) => "CCITT Group 3 Fax",
        Ok(compression::CCITT_FAX4) => "CCITT Group 4 Fax",
        Ok(compression::LZW) => "LZW",
        Ok(compression::JPEG_OLD) => "Old JPEG",
        Ok(compression::JPEG) => "JPEG",
        Ok(compression::DEFLATE) => "Adobe Deflate",
        Ok(compression::PACKBITS) => "PackBits",
        _ => "Unknown",
    }
}

/// Get the name of a photometric interpretation method
pub fn get_photometric_name(photometric_code: u32) -> &'static str {
    match u16::try_from(photometric_code) {
        Ok(photometric::WHITE_IS_ZERO) => "WhiteIsZero",
        Ok(photometric::BLACK_IS_ZERO) => "BlackIsZero",
        Ok(photometric::RGB) => "RGB",
        Ok(photometric::PALETTE) => "Palette",
        Ok(photometric::TRANSPARENCY_MASK) => "TransparencyMask",
        Ok(photometric::CMYK) => "CMYK",
        Ok(photometric::YCBCR) => "YCbCr",
        Ok(photometric::CIELAB) => "CIELAB",
        _ => "Unknown",
    }
}

/// Formats a tag's value, naming coded values where known
pub fn describe_value(tag: u16, value: u32) -> String {
    match tag {
        tags::COMPRESSION => format!("{} ({})", value, get_compression_name(value)),
        tags::PHOTOMETRIC_INTERPRETATION => format!("{} ({})", value, get_photometric_name(value)),
        _ => value.to_string(),
    }
}
