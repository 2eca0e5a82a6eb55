//! Byte order handling for TIFF files
//!
//! This module detects the byte order of a TIFF stream from its header and
//! provides the primitive slice decoders used by the directory reader.

use byteorder::{BigEndian, ByteOrder as _, LittleEndian};

use crate::tiff::constants::header;
use crate::tiff::errors::{TiffError, TiffResult};

/// Represents the byte order of a TIFF file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Little-endian byte order (II)
    LittleEndian,
    /// Big-endian byte order (MM)
    BigEndian,
}

impl ByteOrder {
    /// Detects the byte order from the first four header bytes
    ///
    /// Both the byte order marker and the magic number must match one of
    /// the two valid TIFF prefixes, otherwise the stream is not a TIFF.
    pub fn detect(prefix: [u8; 4]) -> TiffResult<Self> {
        match prefix {
            header::LITTLE_ENDIAN_MAGIC => Ok(ByteOrder::LittleEndian),
            header::BIG_ENDIAN_MAGIC => Ok(ByteOrder::BigEndian),
            other => Err(TiffError::NotATiff(other)),
        }
    }

    /// Returns a string representation of this byte order
    pub fn name(&self) -> &'static str {
        match self {
            ByteOrder::LittleEndian => "Little Endian (II)",
            ByteOrder::BigEndian => "Big Endian (MM)",
        }
    }

    /// Reads a u16 at `offset`
    ///
    /// The caller guarantees `offset + 2 <= bytes.len()`.
    pub fn read_u16(&self, bytes: &[u8], offset: usize) -> u16 {
        read_u16(bytes, offset, *self)
    }

    /// Reads a u32 at `offset`
    ///
    /// The caller guarantees `offset + 4 <= bytes.len()`.
    pub fn read_u32(&self, bytes: &[u8], offset: usize) -> u32 {
        read_u32(bytes, offset, *self)
    }
}

/// Assembles two bytes starting at `offset` into a u16
pub fn read_u16(bytes: &[u8], offset: usize, order: ByteOrder) -> u16 {
    let window = &bytes[offset..offset + 2];
    match order {
        ByteOrder::LittleEndian => LittleEndian::read_u16(window),
        ByteOrder::BigEndian => BigEndian::read_u16(window),
    }
}

/// Assembles four bytes starting at `offset` into a u32
pub fn read_u32(bytes: &[u8], offset: usize, order: ByteOrder) -> u32 {
    let window = &bytes[offset..offset + 4];
    match order {
        ByteOrder::LittleEndian => LittleEndian::read_u32(window),
        ByteOrder::BigEndian => BigEndian::read_u32(window),
    }
}

/// Bounds-checked u16 read for untrusted file content
pub fn checked_u16(bytes: &[u8], offset: usize, order: ByteOrder) -> TiffResult<u16> {
    ensure_available(bytes, offset, 2)?;
    Ok(read_u16(bytes, offset, order))
}

/// Bounds-checked u32 read for untrusted file content
pub fn checked_u32(bytes: &[u8], offset: usize, order: ByteOrder) -> TiffResult<u32> {
    ensure_available(bytes, offset, 4)?;
    Ok(read_u32(bytes, offset, order))
}

/// Fails with `TruncatedInput` unless `needed` bytes exist at `offset`
pub fn ensure_available(bytes: &[u8], offset: usize, needed: usize) -> TiffResult<()> {
    let fits = offset
        .checked_add(needed)
        .map_or(false, |end| end <= bytes.len());

    if fits {
        Ok(())
    } else {
        Err(TiffError::TruncatedInput {
            offset,
            needed,
            available: bytes.len(),
        })
    }
}
