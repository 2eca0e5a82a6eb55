//! TIFF header parsing
//!
//! The header is eight bytes: a byte order marker, the version number 42
//! and the offset of the first IFD.

use log::debug;

use crate::io::byte_order::{self, ByteOrder};
use crate::tiff::errors::TiffResult;

/// Parsed TIFF file header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiffHeader {
    /// Byte order of every multi-byte field in the file
    pub byte_order: ByteOrder,
    /// Offset of the first IFD
    pub first_ifd_offset: u32,
}

impl TiffHeader {
    /// Parses the header at the start of `bytes`
    ///
    /// The magic is checked before anything else is read, so a non-TIFF
    /// buffer fails with `NotATiff` regardless of its length beyond four bytes.
    pub fn parse(bytes: &[u8]) -> TiffResult<Self> {
        byte_order::ensure_available(bytes, 0, 4)?;
        let prefix = [bytes[0], bytes[1], bytes[2], bytes[3]];
        let byte_order = ByteOrder::detect(prefix)?;
        debug!("Detected byte order: {}", byte_order.name());

        let first_ifd_offset = byte_order::checked_u32(bytes, 4, byte_order)?;
        debug!("First IFD offset: {}", first_ifd_offset);

        Ok(Self {
            byte_order,
            first_ifd_offset,
        })
    }
}
