//! Decode checkpoints
//!
//! The reader reports progress to an observer after each stage instead of
//! printing from inside the decoders.

use log::{debug, info};

use crate::tiff::descriptor::ImageDescriptor;
use crate::tiff::header::TiffHeader;
use crate::tiff::ifd::IFD;

/// Receives the result of each decode stage
pub trait DecodeObserver: Send + Sync {
    /// Called once the magic and first IFD offset are validated
    fn header_validated(&self, header: &TiffHeader);

    /// Called once every directory entry decoded
    fn directory_decoded(&self, ifd: &IFD);

    /// Called once the image descriptor is built
    fn descriptor_built(&self, descriptor: &ImageDescriptor);
}

/// Observer that writes checkpoints to the `log` facade
pub struct LogObserver;

impl DecodeObserver for LogObserver {
    fn header_validated(&self, header: &TiffHeader) {
        info!("It's a {} TIFF, first IFD at offset {}",
              header.byte_order.name(), header.first_ifd_offset);
    }

    fn directory_decoded(&self, ifd: &IFD) {
        info!("Read IFD with {} entries", ifd.entry_count());
        for line in ifd.to_string().lines() {
            debug!("{}", line);
        }
        if let Some(next) = ifd.next_ifd_offset.filter(|&next| next != 0) {
            info!("Next IFD offset {} ignored, only the first IFD is decoded", next);
        }
    }

    fn descriptor_built(&self, descriptor: &ImageDescriptor) {
        for line in descriptor.to_string().lines() {
            info!("{}", line);
        }
    }
}
