//! Tests for the reader's decode stages and checkpoints

use std::sync::{Arc, Mutex};

use byteorder::{BigEndian, LittleEndian};

use super::test_utils::build_tiff;
use crate::io::byte_order::ByteOrder;
use crate::tiff::constants::tags;
use crate::tiff::descriptor::ImageDescriptor;
use crate::tiff::errors::TiffError;
use crate::tiff::header::TiffHeader;
use crate::tiff::ifd::IFD;
use crate::tiff::observer::DecodeObserver;
use crate::tiff::reader::{TiffReader, TiffReaderBuilder};

#[derive(Clone, Default)]
struct Recording(Arc<Mutex<Vec<&'static str>>>);

impl Recording {
    fn stages(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().clone()
    }
}

impl DecodeObserver for Recording {
    fn header_validated(&self, _header: &TiffHeader) {
        self.0.lock().unwrap().push("header");
    }

    fn directory_decoded(&self, _ifd: &IFD) {
        self.0.lock().unwrap().push("directory");
    }

    fn descriptor_built(&self, _descriptor: &ImageDescriptor) {
        self.0.lock().unwrap().push("descriptor");
    }
}

fn recording_reader() -> (TiffReader, Recording) {
    let recording = Recording::default();
    let reader = TiffReaderBuilder::new()
        .observer(Box::new(recording.clone()))
        .build();
    (reader, recording)
}

#[test]
fn test_little_endian_file() {
    let data = build_tiff::<LittleEndian>(2, 1, 3, &[1, 2, 3, 4, 5, 6], &[(tags::COMPRESSION, 1)]);
    let (reader, recording) = recording_reader();

    let tiff = reader.read(data).unwrap();
    assert_eq!(tiff.header.byte_order, ByteOrder::LittleEndian);
    assert_eq!(tiff.ifd.entry_count(), 6);
    assert_eq!(tiff.descriptor.width, 2);
    assert_eq!(tiff.descriptor.height, 1);
    assert_eq!(tiff.descriptor.samples_per_pixel, 3);
    assert_eq!(tiff.descriptor.compression, 1);
    assert_eq!(tiff.descriptor.strip_byte_count, 6);
    assert_eq!(recording.stages(), vec!["header", "directory", "descriptor"]);

    let raster = tiff.load_raster().unwrap();
    assert_eq!(raster.samples, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_big_endian_file() {
    let data = build_tiff::<BigEndian>(300, 1, 1, &[7; 300], &[]);
    let tiff = TiffReader::new().read(data).unwrap();

    assert_eq!(tiff.header.byte_order, ByteOrder::BigEndian);
    assert_eq!(tiff.descriptor.width, 300);
    assert_eq!(tiff.descriptor.strip_offset, 8 + 2 + 12 * 5 + 4);
    assert_eq!(tiff.load_raster().unwrap().samples.len(), 300);
}

#[test]
fn test_not_a_tiff_stops_before_directory() {
    let (reader, recording) = recording_reader();

    let result = reader.read(vec![0x00, 0x00, 0x00, 0x00]);
    assert!(matches!(result, Err(TiffError::NotATiff(_))));
    assert!(recording.stages().is_empty());
}

#[test]
fn test_missing_width_stops_before_descriptor_checkpoint() {
    let mut data = build_tiff::<LittleEndian>(1, 1, 1, &[0], &[]);
    // Retag ImageWidth (first entry, at offset 10) as an unrecognized tag
    data[10] = 0x34;
    data[11] = 0x12;

    let (reader, recording) = recording_reader();
    let result = reader.read(data);

    assert!(matches!(result, Err(TiffError::MissingRequiredTag(tags::IMAGE_WIDTH))));
    assert_eq!(recording.stages(), vec!["header", "directory"]);
}

#[test]
fn test_compressed_file_rejected_at_pixel_load() {
    let data = build_tiff::<LittleEndian>(1, 1, 1, &[0], &[(tags::COMPRESSION, 5)]);
    let tiff = TiffReader::new().read(data).unwrap();
    assert!(matches!(tiff.load_raster(), Err(TiffError::UnsupportedCompression(5))));
}

#[test]
fn test_truncated_pixel_data() {
    let mut data = build_tiff::<BigEndian>(2, 2, 3, &[0; 12], &[]);
    data.truncate(data.len() - 1);
    let tiff = TiffReader::new().read(data).unwrap();
    assert!(matches!(tiff.load_raster(), Err(TiffError::TruncatedInput { .. })));
}

#[test]
fn test_ifd_offset_at_or_past_end_is_truncated() {
    for offset in [9u8, 10] {
        let data = vec![0x49, 0x49, 0x2A, 0x00, offset, 0x00, 0x00, 0x00, 0x00, 0x00];
        let (reader, recording) = recording_reader();

        let result = reader.read(data);
        assert!(
            matches!(result, Err(TiffError::TruncatedInput { offset: o, needed: 2, available: 10 }) if o == offset as usize),
            "offset {}", offset
        );
        assert_eq!(recording.stages(), vec!["header"]);
    }
}

#[test]
fn test_ifd_offset_inside_header_is_read_as_is() {
    // The count at offset 4 overlaps the offset field itself: 4 entries,
    // so the record run runs past the 10-byte buffer.
    let data = vec![0x49, 0x49, 0x2A, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00];
    let result = TiffReader::new().read(data);
    assert!(matches!(result, Err(TiffError::TruncatedInput { offset: 6, needed: 48, .. })));
}
