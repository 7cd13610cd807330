//! Exif segment header validation.
//!
//! # Segment Header Structure
//!
//! ```text
//! Bytes 0-1:   Segment size, big-endian (must equal the buffer length)
//! Bytes 2-7:   "Exif\0\0"
//! Bytes 8-9:   Byte order (0x4949 = little-endian "II", 0x4D4D = big-endian "MM")
//! Bytes 10-11: Tag mark (42 = 0x002A, in the declared byte order)
//! Bytes 12-15: Offset to first IFD, relative to byte 8
//! ```
//!
//! Bytes 8-15 are a classic TIFF header. Every offset inside the segment is
//! relative to its start and must be rebased by [`TIFF_HEADER_OFFSET`] before
//! indexing the segment.

use tracing::trace;

use crate::error::ExifError;
use crate::io::{read_u16_be, ByteCodec, ByteOrder};

// =============================================================================
// Constants
// =============================================================================

/// Start of the TIFF header within the segment; base of all offsets.
pub const TIFF_HEADER_OFFSET: usize = 8;

/// Exif header literal
pub const EXIF_HEADER: [u8; 6] = *b"Exif\0\0";

/// Tag mark of a classic TIFF header
pub const TAG_MARK: u16 = 0x002A;

/// Byte order mark for little-endian ("II")
const BYTE_ORDER_LITTLE_ENDIAN: [u8; 2] = *b"II";

/// Byte order mark for big-endian ("MM")
const BYTE_ORDER_BIG_ENDIAN: [u8; 2] = *b"MM";

const SIZE_OFFSET: usize = 0;
const SIZE_LENGTH: usize = 2;
const EXIF_HEADER_OFFSET: usize = 2;
const BYTE_ORDER_OFFSET: usize = 8;
const BYTE_ORDER_LENGTH: usize = 2;
const TAG_MARK_OFFSET: usize = 10;
const FIRST_IFD_OFFSET: usize = 12;

/// Rebase a TIFF-relative offset onto the segment.
#[inline]
pub fn rebase(offset: u32) -> Result<usize, ExifError> {
    (offset as usize)
        .checked_add(TIFF_HEADER_OFFSET)
        .ok_or(ExifError::OutOfBounds {
            offset: offset as usize,
            len: TIFF_HEADER_OFFSET,
            size: usize::MAX,
        })
}

// =============================================================================
// ExifHeader
// =============================================================================

/// Validated header of an Exif segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExifHeader {
    /// Byte order for all multi-byte values in the segment
    pub byte_order: ByteOrder,

    /// Offset of the first IFD, relative to the TIFF header
    pub first_ifd_offset: u32,
}

impl ExifHeader {
    /// Validate the header of a segment.
    ///
    /// # Errors
    /// - `OutOfBounds` if the segment is too short to hold a header
    /// - `SizeMismatch` if the size field disagrees with the segment length
    /// - `InvalidHeader` if the Exif literal is missing
    /// - `InvalidByteOrder` if the byte order mark is not II or MM
    /// - `InvalidTagMark` if the tag mark is not 42
    pub fn parse(segment: &[u8]) -> Result<Self, ExifError> {
        // The size field is always big-endian, as in every JPEG segment
        let raw = ByteCodec::new(segment, ByteOrder::BigEndian);

        let declared = read_u16_be(raw.slice_checked(SIZE_OFFSET, SIZE_LENGTH)?) as usize;
        if declared != segment.len() {
            return Err(ExifError::SizeMismatch {
                declared,
                actual: segment.len(),
            });
        }

        if raw.slice(EXIF_HEADER_OFFSET, EXIF_HEADER.len()) != EXIF_HEADER {
            return Err(ExifError::InvalidHeader);
        }

        let mark = raw.slice_checked(BYTE_ORDER_OFFSET, BYTE_ORDER_LENGTH)?;
        let byte_order = if mark == BYTE_ORDER_LITTLE_ENDIAN {
            ByteOrder::LittleEndian
        } else if mark == BYTE_ORDER_BIG_ENDIAN {
            ByteOrder::BigEndian
        } else {
            return Err(ExifError::InvalidByteOrder(read_u16_be(mark)));
        };

        let codec = ByteCodec::new(segment, byte_order);
        let tag_mark = codec.read_u16(TAG_MARK_OFFSET)?;
        if tag_mark != TAG_MARK {
            return Err(ExifError::InvalidTagMark(tag_mark));
        }

        let first_ifd_offset = codec.read_u32(FIRST_IFD_OFFSET)?;
        trace!(
            ?byte_order,
            first_ifd = %codec.read_hex(FIRST_IFD_OFFSET, 4),
            "Validated Exif header"
        );

        Ok(ExifHeader {
            byte_order,
            first_ifd_offset,
        })
    }

    /// Segment position of the first IFD.
    #[inline]
    pub fn first_ifd_position(&self) -> Result<usize, ExifError> {
        rebase(self.first_ifd_offset)
    }
}

// =============================================================================
// Tests
// =============================================================================
