//! Tests for the byte order module

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};

use crate::io::byte_order::{read_u16, read_u32, ByteOrder};
use crate::tiff::errors::TiffError;

#[test]
fn test_byte_order_detection_little_endian() {
    let result = ByteOrder::detect([0x49, 0x49, 0x2A, 0x00]);
    assert_eq!(result.unwrap(), ByteOrder::LittleEndian);
}

#[test]
fn test_byte_order_detection_big_endian() {
    let result = ByteOrder::detect([0x4D, 0x4D, 0x00, 0x2A]);
    assert_eq!(result.unwrap(), ByteOrder::BigEndian);
}

#[test]
fn test_byte_order_detection_invalid() {
    let result = ByteOrder::detect([0x00, 0x00, 0x00, 0x00]);
    assert!(matches!(result, Err(TiffError::NotATiff(_))));
}

#[test]
fn test_little_endian_reads() {
    let mut buffer = Vec::new();
    buffer.write_u16::<LittleEndian>(0x1234).unwrap();
    buffer.write_u32::<LittleEndian>(0x12345678).unwrap();

    assert_eq!(read_u16(&buffer, 0, ByteOrder::LittleEndian), 0x1234);
    assert_eq!(read_u32(&buffer, 2, ByteOrder::LittleEndian), 0x12345678);
}

#[test]
fn test_big_endian_reads() {
    let mut buffer = Vec::new();
    buffer.write_u16::<BigEndian>(0x1234).unwrap();
    buffer.write_u32::<BigEndian>(0x12345678).unwrap();

    assert_eq!(read_u16(&buffer, 0, ByteOrder::BigEndian), 0x1234);
    assert_eq!(read_u32(&buffer, 2, ByteOrder::BigEndian), 0x12345678);
}
