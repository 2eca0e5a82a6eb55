//! Image File Directory (IFD) structures and methods
//!
//! An IFD is a count-prefixed run of 12-byte tag records. Each record names
//! a tag, its field type, an element count and a 4-byte slot that holds the
//! value itself when it fits, or a file offset to the value otherwise.

use std::fmt;

use log::{debug, trace};

use crate::io::byte_order::{self, ByteOrder};
use crate::tiff::constants::ifd as layout;
use crate::tiff::errors::TiffResult;
use crate::tiff::field_types;
use crate::utils::tag_utils;

/// Represents the Image File Directory of a TIFF file
#[derive(Debug, Clone)]
pub struct IFD {
    /// Entries in file order
    pub entries: Vec<IFDEntry>,
    /// Offset of the entry count in the file
    pub offset: usize,
    /// Offset of the next IFD, if the file holds the field
    pub next_ifd_offset: Option<u32>,
}

/// Represents an entry in an Image File Directory (IFD)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IFDEntry {
    /// TIFF tag identifier
    pub tag: u16,
    /// Field type
    pub field_type: u16,
    /// Number of values
    pub count: u32,
    /// Inline value, or offset to the values when they don't fit
    pub value_offset: u32,
}

impl IFDEntry {
    /// Creates a new IFD entry
    pub fn new(tag: u16, field_type: u16, count: u32, value_offset: u32) -> Self {
        Self {
            tag,
            field_type,
            count,
            value_offset,
        }
    }

    /// Decodes one 12-byte tag record
    ///
    /// Offsets and values of four bytes or more follow the stream byte order.
    /// Shorter inline values are left-justified in the slot, so they are
    /// assembled from the leading bytes only and the padding is discarded.
    pub fn decode(record: &[u8; layout::ENTRY_SIZE], order: ByteOrder) -> TiffResult<Self> {
        let tag = order.read_u16(record, 0);
        let field_type = order.read_u16(record, 2);
        let count = order.read_u32(record, 4);

        let total_size = field_types::data_size(field_type, count)?;

        let value_offset = match total_size {
            0 => 0,
            1 => record[8] as u32,
            2 => order.read_u16(record, 8) as u32,
            // three single-byte elements, first element in the low byte
            3 => record[8] as u32 | (record[9] as u32) << 8 | (record[10] as u32) << 16,
            _ => order.read_u32(record, 8),
        };

        trace!("Decoded tag {} ({}): type={}, count={}, size={}, value/offset={}",
               tag, tag_utils::get_tag_name(tag), field_type, count, total_size, value_offset);

        Ok(Self::new(tag, field_type, count, value_offset))
    }

    /// Total size in bytes of this entry's data
    pub fn data_size(&self) -> TiffResult<u64> {
        field_types::data_size(self.field_type, self.count)
    }

    /// Determines if the value is stored inline in value_offset
    /// rather than at the offset location
    pub fn is_value_inline(&self) -> bool {
        self.data_size()
            .map(|size| size <= layout::INLINE_CAPACITY)
            .unwrap_or(false)
    }

    /// Returns a human-readable description of this entry
    pub fn description(&self) -> String {
        let tag_name = tag_utils::get_tag_name(self.tag);
        let field_type_name = field_types::field_type_name(self.field_type);

        format!("Tag: {} ({}), Type: {} ({}), Count: {}, {}: {}",
                self.tag, tag_name, self.field_type, field_type_name, self.count,
                if self.is_value_inline() { "Value" } else { "Offset" },
                tag_utils::describe_value(self.tag, self.value_offset))
    }
}

impl IFD {
    /// Creates a new empty IFD read from `offset`
    pub fn new(offset: usize) -> Self {
        Self {
            entries: Vec::new(),
            offset,
            next_ifd_offset: None,
        }
    }

    /// Adds an entry to this IFD
    pub fn add_entry(&mut self, entry: IFDEntry) {
        trace!("Adding entry: {}", entry.description());
        self.entries.push(entry);
    }

    /// Gets an IFD entry by tag
    ///
    /// When a tag appears more than once the last occurrence wins.
    pub fn get_entry(&self, tag: u16) -> Option<&IFDEntry> {
        self.entries.iter().rev().find(|entry| entry.tag == tag)
    }

    /// Gets a tag value (value_offset) directly
    pub fn get_tag_value(&self, tag: u16) -> Option<u32> {
        self.get_entry(tag).map(|entry| entry.value_offset)
    }

    /// Gets the number of entries in this IFD
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

/// Reads the directory whose entry count sits at `offset`
///
/// Records are decoded in file order and the first failure aborts the walk.
/// The trailing next-IFD offset is optional: files that end right after the
/// last record are accepted.
pub fn read_directory(bytes: &[u8], offset: usize, order: ByteOrder) -> TiffResult<IFD> {
    let entry_count = byte_order::checked_u16(bytes, offset, order)? as usize;
    debug!("IFD at offset {} declares {} entries", offset, entry_count);

    let records_start = offset + layout::ENTRY_COUNT_SIZE;
    byte_order::ensure_available(bytes, records_start, entry_count * layout::ENTRY_SIZE)?;

    let mut ifd = IFD::new(offset);
    ifd.entries.reserve(entry_count);

    for (index, record) in bytes[records_start..]
        .chunks_exact(layout::ENTRY_SIZE)
        .take(entry_count)
        .enumerate()
    {
        let mut window = [0u8; layout::ENTRY_SIZE];
        window.copy_from_slice(record);
        let entry = IFDEntry::decode(&window, order).map_err(|e| {
            debug!("Entry #{} of IFD at offset {} failed to decode: {}", index, offset, e);
            e
        })?;
        ifd.add_entry(entry);
    }

    let next_offset_position = records_start + entry_count * layout::ENTRY_SIZE;
    if bytes.len().saturating_sub(next_offset_position) >= layout::NEXT_OFFSET_SIZE {
        ifd.next_ifd_offset = Some(byte_order::read_u32(bytes, next_offset_position, order));
    }

    Ok(ifd)
}

impl fmt::Display for IFD {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "IFD (offset: {})", self.offset)?;
        writeln!(f, "  Number of entries: {}", self.entries.len())?;
        writeln!(f, "  Tags:")?;

        for (index, entry) in self.entries.iter().enumerate() {
            let size = entry
                .data_size()
                .map(|s| s.to_string())
                .unwrap_or_else(|_| "?".to_string());

            writeln!(f, "    #{:<2} {:>5} {:<26} {:<9} count {:>5} | {} {:>10} | size {:>6}",
                     index,
                     entry.tag,
                     tag_utils::get_tag_name(entry.tag),
                     field_types::field_type_name(entry.field_type),
                     entry.count,
                     if entry.is_value_inline() { "value " } else { "offset" },
                     entry.value_offset,
                     size)?;
        }

        match self.next_ifd_offset {
            Some(next) => writeln!(f, "  Next IFD offset: {}", next)?,
            None => writeln!(f, "  Next IFD offset: <absent>")?,
        }

        Ok(())
    }
}
