//! Field type table
//!
//! Maps TIFF field type codes to their per-element byte width.

use crate::tiff::constants::field_types;
use crate::tiff::errors::{TiffError, TiffResult};

/// Returns the byte width of one element of `field_type`
///
/// Unknown codes are an error rather than a guessed default: a wrong width
/// would silently change how the value slot of the entry is resolved.
pub fn element_width(field_type: u16) -> TiffResult<u32> {
    match field_type {
        field_types::BYTE | field_types::ASCII | field_types::SBYTE | field_types::UNDEFINED => Ok(1),
        field_types::SHORT | field_types::SSHORT => Ok(2),
        field_types::LONG | field_types::SLONG | field_types::FLOAT => Ok(4),
        field_types::RATIONAL | field_types::SRATIONAL | field_types::DOUBLE => Ok(8),
        _ => Err(TiffError::UnknownFieldType(field_type)),
    }
}

/// Total size in bytes of `count` elements of `field_type`
pub fn data_size(field_type: u16, count: u32) -> TiffResult<u64> {
    Ok(element_width(field_type)? as u64 * count as u64)
}

/// Get the name of a TIFF field type
pub fn field_type_name(field_type: u16) -> &'static str {
    match field_type {
        field_types::BYTE => "BYTE",
        field_types::ASCII => "ASCII",
        field_types::SHORT => "SHORT",
        field_types::LONG => "LONG",
        field_types::RATIONAL => "RATIONAL",
        field_types::SBYTE => "SBYTE",
        field_types::UNDEFINED => "UNDEFINED",
        field_types::SSHORT => "SSHORT",
        field_types::SLONG => "SLONG",
        field_types::SRATIONAL => "SRATIONAL",
        field_types::FLOAT => "FLOAT",
        field_types::DOUBLE => "DOUBLE",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_known_widths() {
        let expected = [1, 1, 2, 4, 8, 1, 1, 2, 4, 8, 4, 8];
        for (code, width) in (1u16..=12).zip(expected) {
            assert_eq!(element_width(code).unwrap(), width, "field type {}", code);
        }
    }

    #[test]
    fn test_unknown_codes_rejected() {
        for code in [0u16, 13, 16, 18, u16::MAX] {
            assert!(matches!(element_width(code), Err(TiffError::UnknownFieldType(c)) if c == code));
        }
    }

    #[test]
    fn test_data_size_does_not_overflow() {
        assert_eq!(data_size(field_types::DOUBLE, u32::MAX).unwrap(), 8 * u32::MAX as u64);
    }
}
