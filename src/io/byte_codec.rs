//! Endianness-aware primitive reads over a fixed buffer.
//!
//! Exif segments declare their byte order once, in the TIFF header, and every
//! multi-byte field after that must be read respecting it. Two flavors of
//! read are provided:
//!
//! - **Structural** reads (`read_u16`, `read_u32`, `slice_checked`) fail with
//!   [`ExifError::OutOfBounds`] when the field lies outside the buffer. They
//!   are used for directory counts, entry records and next-IFD links.
//! - **Lenient** reads (`slice`, and the free `read_*` helpers) return an
//!   empty slice or zero instead. Tag values are read this way, so a bad value
//!   offset degrades one entry rather than the whole document.

use crate::error::ExifError;

// =============================================================================
// ByteOrder
// =============================================================================

/// Byte order (endianness) of an Exif segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Little-endian ("II" = Intel)
    LittleEndian,
    /// Big-endian ("MM" = Motorola)
    BigEndian,
}

impl ByteOrder {
    /// Read a u16 from a byte slice using this byte order.
    ///
    /// Missing bytes read as zero.
    #[inline]
    pub fn read_u16(self, bytes: &[u8]) -> u16 {
        match self {
            ByteOrder::LittleEndian => read_u16_le(bytes),
            ByteOrder::BigEndian => read_u16_be(bytes),
        }
    }

    /// Read a u32 from a byte slice using this byte order.
    ///
    /// Missing bytes read as zero.
    #[inline]
    pub fn read_u32(self, bytes: &[u8]) -> u32 {
        match self {
            ByteOrder::LittleEndian => read_u32_le(bytes),
            ByteOrder::BigEndian => read_u32_be(bytes),
        }
    }

    /// Copy a field into big-endian (most significant byte first) order.
    pub fn to_big_endian(self, bytes: &[u8]) -> Vec<u8> {
        match self {
            ByteOrder::LittleEndian => bytes.iter().rev().copied().collect(),
            ByteOrder::BigEndian => bytes.to_vec(),
        }
    }
}

// =============================================================================
// Endian Helper Functions
// =============================================================================

/// Copy up to `N` bytes into a zero-filled array.
#[inline]
fn padded<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut buf = [0u8; N];
    let n = bytes.len().min(N);
    buf[..n].copy_from_slice(&bytes[..n]);
    buf
}

/// Read a little-endian u16 from a byte slice.
#[inline]
pub fn read_u16_le(bytes: &[u8]) -> u16 {
    u16::from_le_bytes(padded(bytes))
}

/// Read a big-endian u16 from a byte slice.
#[inline]
pub fn read_u16_be(bytes: &[u8]) -> u16 {
    u16::from_be_bytes(padded(bytes))
}

/// Read a little-endian u32 from a byte slice.
#[inline]
pub fn read_u32_le(bytes: &[u8]) -> u32 {
    u32::from_le_bytes(padded(bytes))
}

/// Read a big-endian u32 from a byte slice.
#[inline]
pub fn read_u32_be(bytes: &[u8]) -> u32 {
    u32::from_be_bytes(padded(bytes))
}

// =============================================================================
// ByteCodec
// =============================================================================

/// Primitive reads over a fully buffered segment in a fixed byte order.
#[derive(Debug, Clone, Copy)]
pub struct ByteCodec<'a> {
    data: &'a [u8],
    byte_order: ByteOrder,
}

impl<'a> ByteCodec<'a> {
    /// Create a codec over `data`.
    pub fn new(data: &'a [u8], byte_order: ByteOrder) -> Self {
        Self { data, byte_order }
    }

    /// The underlying buffer.
    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Length of the underlying buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the underlying buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Byte order applied to multi-byte reads.
    #[inline]
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Sub-slice of `len` bytes at `offset`, or an empty slice when the range
    /// does not fit.
    pub fn slice(&self, offset: usize, len: usize) -> &'a [u8] {
        match offset.checked_add(len) {
            Some(end) if end <= self.data.len() => &self.data[offset..end],
            _ => &[],
        }
    }

    /// Sub-slice of `len` bytes at `offset`, failing when the range does not fit.
    pub fn slice_checked(&self, offset: usize, len: usize) -> Result<&'a [u8], ExifError> {
        match offset.checked_add(len) {
            Some(end) if end <= self.data.len() => Ok(&self.data[offset..end]),
            _ => Err(ExifError::OutOfBounds {
                offset,
                len,
                size: self.data.len(),
            }),
        }
    }

    /// Structural u16 read.
    pub fn read_u16(&self, offset: usize) -> Result<u16, ExifError> {
        self.slice_checked(offset, 2)
            .map(|bytes| self.byte_order.read_u16(bytes))
    }

    /// Structural u32 read.
    pub fn read_u32(&self, offset: usize) -> Result<u32, ExifError> {
        self.slice_checked(offset, 4)
            .map(|bytes| self.byte_order.read_u32(bytes))
    }

    /// Uppercase hex rendering of a field, most significant byte first.
    ///
    /// Returns an empty string when the field does not fit.
    pub fn read_hex(&self, offset: usize, len: usize) -> String {
        hex::encode_upper(self.byte_order.to_big_endian(self.slice(offset, len)))
    }
}
