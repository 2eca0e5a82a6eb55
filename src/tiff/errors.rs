//! Custom error types for TIFF processing

use std::fmt;
use std::io;

/// TIFF-specific error types
///
/// Every variant is fatal: decoding is a pure function of the input bytes,
/// so a failure would recur identically on retry.
#[derive(Debug)]
pub enum TiffError {
    /// I/O error
    IoError(io::Error),
    /// Image encoding error while writing output
    ImageError(image::ImageError),
    /// The first four bytes are not a TIFF magic
    NotATiff([u8; 4]),
    /// Field type code outside the twelve TIFF 6.0 types
    UnknownFieldType(u16),
    /// A tag required for pixel loading is absent
    MissingRequiredTag(u16),
    /// The buffer ends before a read could complete
    TruncatedInput {
        offset: usize,
        needed: usize,
        available: usize,
    },
    /// Unsupported compression method
    UnsupportedCompression(u32),
    /// Strip/sample layout this decoder does not handle
    UnsupportedLayout(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for TiffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TiffError::IoError(e) => write!(f, "I/O error: {}", e),
            TiffError::ImageError(e) => write!(f, "Image error: {}", e),
            TiffError::NotATiff(magic) => write!(
                f,
                "Not a TIFF file (header bytes {:02x} {:02x} {:02x} {:02x})",
                magic[0], magic[1], magic[2], magic[3]
            ),
            TiffError::UnknownFieldType(ft) => write!(f, "Unknown field type: {}", ft),
            TiffError::MissingRequiredTag(tag) => write!(f, "Missing required tag: {}", tag),
            TiffError::TruncatedInput { offset, needed, available } => write!(
                f,
                "Truncated input: needed {} bytes at offset {}, buffer holds {}",
                needed, offset, available
            ),
            TiffError::UnsupportedCompression(c) => write!(f, "Unsupported compression method: {}", c),
            TiffError::UnsupportedLayout(msg) => write!(f, "Unsupported image layout: {}", msg),
            TiffError::GenericError(msg) => write!(f, "TIFF error: {}", msg),
        }
    }
}

impl std::error::Error for TiffError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TiffError::IoError(e) => Some(e),
            TiffError::ImageError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for TiffError {
    fn from(error: io::Error) -> Self {
        TiffError::IoError(error)
    }
}

impl From<image::ImageError> for TiffError {
    fn from(error: image::ImageError) -> Self {
        TiffError::ImageError(error)
    }
}

/// Result type for TIFF operations
pub type TiffResult<T> = Result<T, TiffError>;

impl From<String> for TiffError {
    fn from(msg: String) -> Self {
        TiffError::GenericError(msg)
    }
}
