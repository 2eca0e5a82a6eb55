//! TIFF file format parsing module
//!
//! Header, single-IFD directory and image descriptor decoding for
//! uncompressed baseline TIFF files.

pub mod errors;
pub mod constants;
pub mod field_types;
pub mod header;
pub mod ifd;
pub mod descriptor;
pub mod observer;
pub mod reader;
pub(crate) mod types;
#[cfg(test)]
mod tests;

pub use crate::io::byte_order::ByteOrder;
pub use descriptor::ImageDescriptor;
pub use errors::{TiffError, TiffResult};
pub use header::TiffHeader;
pub use ifd::{read_directory, IFD, IFDEntry};
pub use observer::{DecodeObserver, LogObserver};
pub use reader::{TiffReader, TiffReaderBuilder};
pub use types::TIFF;
