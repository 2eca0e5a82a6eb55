//! Core TIFF data structures

use std::fmt;

use crate::raster::Raster;
use crate::tiff::descriptor::ImageDescriptor;
use crate::tiff::errors::TiffResult;
use crate::tiff::header::TiffHeader;
use crate::tiff::ifd::IFD;

/// A decoded TIFF file: its bytes plus the parsed header and first IFD
#[derive(Debug)]
pub struct TIFF {
    /// Full file content
    pub data: Vec<u8>,
    /// Parsed header
    pub header: TiffHeader,
    /// The first (and only decoded) IFD
    pub ifd: IFD,
    /// Geometry and format folded from the IFD
    pub descriptor: ImageDescriptor,
}

impl TIFF {
    /// Loads the pixel samples described by the descriptor
    pub fn load_raster(&self) -> TiffResult<Raster> {
        Raster::load(&self.data, &self.descriptor)
    }
}

impl fmt::Display for TIFF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "TIFF File:")?;
        writeln!(f, "  Byte order: {}", self.header.byte_order.name())?;
        writeln!(f, "  Size: {} bytes", self.data.len())?;
        write!(f, "{}", self.ifd)?;
        writeln!(f, "{}", self.descriptor)
    }
}
