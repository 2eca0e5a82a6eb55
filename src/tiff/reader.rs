//! TIFF file reader implementation
//!
//! Drives the decode stages over an in-memory copy of the file:
//! header, first IFD, image descriptor. Each stage is reported to a
//! `DecodeObserver`.

use log::{debug, info};
use std::fs;
use std::path::Path;

use crate::tiff::descriptor::ImageDescriptor;
use crate::tiff::errors::TiffResult;
use crate::tiff::header::TiffHeader;
use crate::tiff::ifd;
use crate::tiff::observer::{DecodeObserver, LogObserver};
use crate::tiff::types::TIFF;

/// Builder for TiffReader
pub struct TiffReaderBuilder {
    observer: Box<dyn DecodeObserver>,
}

impl TiffReaderBuilder {
    /// Create a new TiffReaderBuilder reporting to the log
    pub fn new() -> Self {
        TiffReaderBuilder {
            observer: Box::new(LogObserver),
        }
    }

    /// Report decode checkpoints to `observer` instead of the log
    pub fn observer(mut self, observer: Box<dyn DecodeObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Build the TiffReader
    pub fn build(self) -> TiffReader {
        TiffReader {
            observer: self.observer,
            current_file: None,
        }
    }
}

impl Default for TiffReaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Reader for baseline TIFF files
pub struct TiffReader {
    observer: Box<dyn DecodeObserver>,
    /// Current file path
    current_file: Option<String>,
}

impl TiffReader {
    /// Creates a new TIFF reader reporting to the log
    pub fn new() -> Self {
        TiffReaderBuilder::new().build()
    }

    /// Loads a TIFF file from the given path
    ///
    /// The whole file is read into memory and handed to `read`.
    pub fn load(&mut self, filepath: &str) -> TiffResult<TIFF> {
        info!("Loading TIFF file: {}", filepath);
        self.current_file = Some(filepath.to_string());

        let data = fs::read(Path::new(filepath))?;
        debug!("Read {} bytes from {}", data.len(), filepath);

        self.read(data)
    }

    /// Decodes a TIFF held in memory
    ///
    /// 1. Validate the magic and read the first IFD offset
    /// 2. Decode every entry of that IFD
    /// 3. Fold the entries into an image descriptor
    ///
    /// Any failure aborts the decode; there is no partial result.
    pub fn read(&self, data: Vec<u8>) -> TiffResult<TIFF> {
        let header = TiffHeader::parse(&data)?;
        self.observer.header_validated(&header);

        let ifd = ifd::read_directory(&data, header.first_ifd_offset as usize, header.byte_order)?;
        self.observer.directory_decoded(&ifd);

        let descriptor = ImageDescriptor::from_entries(&ifd.entries)?;
        self.observer.descriptor_built(&descriptor);

        Ok(TIFF {
            data,
            header,
            ifd,
            descriptor,
        })
    }

    /// Gets the file path if available
    pub fn get_file_path(&self) -> Option<&str> {
        self.current_file.as_deref()
    }
}

impl Default for TiffReader {
    fn default() -> Self {
        Self::new()
    }
}
