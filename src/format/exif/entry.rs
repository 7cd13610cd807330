//! Directory entry decoding.
//!
//! # Entry Structure (12 bytes)
//!
//! ```text
//! Bytes 0-1:  Tag id
//! Bytes 2-3:  Format code
//! Bytes 4-7:  Item count
//! Bytes 8-11: Value (when count * item width <= 4) or offset to the value
//! ```
//!
//! Inline values are left-aligned in the data field. Offset values are
//! relative to the TIFF header.

use crate::error::ExifError;
use crate::io::ByteCodec;

use super::header::rebase;
use super::tags::Format;

/// Size of a directory entry record in bytes.
pub const ENTRY_SIZE: usize = 12;

const TAG_OFFSET: usize = 0;
const FORMAT_OFFSET: usize = 2;
const COUNT_OFFSET: usize = 4;
const DATA_OFFSET: usize = 8;

/// A decoded entry record with its value still in raw form.
///
/// Each item is a slice of the segment in the document's byte order. Items
/// that fall outside the segment are empty and convert to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntry<'a> {
    pub tag_id: u16,
    pub format: Format,
    /// Declared item count
    pub count: u32,
    pub items: Vec<&'a [u8]>,
    /// Whether the value was stored in the record itself
    pub is_inline: bool,
}

impl<'a> RawEntry<'a> {
    /// Decode the 12-byte record at `position`.
    ///
    /// # Errors
    /// - `OutOfBounds` if the record itself lies outside the segment
    /// - `UnknownFormat` if the format code is past the format table
    pub fn decode(codec: &ByteCodec<'a>, position: usize) -> Result<Self, ExifError> {
        let record = codec.slice_checked(position, ENTRY_SIZE)?;
        let order = codec.byte_order();

        let tag_id = order.read_u16(&record[TAG_OFFSET..]);
        let format_code = order.read_u16(&record[FORMAT_OFFSET..]);
        let format = Format::from_u16(format_code).ok_or(ExifError::UnknownFormat(format_code))?;
        let count = order.read_u32(&record[COUNT_OFFSET..]);
        let width = format.item_width();

        // Items past the end of the segment would all be empty; there is no
        // reason to materialize more of them than the segment has bytes.
        let materialized = (count as usize).min(codec.len());
        let is_inline = format.fits_inline(count);

        let items = if is_inline {
            (0..materialized)
                .map(|i| {
                    let start = DATA_OFFSET + i * width;
                    &record[start..start + width]
                })
                .collect()
        } else {
            let base = rebase(order.read_u32(&record[DATA_OFFSET..]))?;
            (0..materialized)
                .map(|i| match i.checked_mul(width).and_then(|o| o.checked_add(base)) {
                    Some(start) => codec.slice(start, width),
                    None => &[][..],
                })
                .collect()
        };

        Ok(RawEntry {
            tag_id,
            format,
            count,
            items,
            is_inline,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
