//! Entry formats and the tag ids the decoder itself acts on.
//!
//! The format code of a directory entry decides how wide each item is, which
//! in turn decides whether the value sits inline in the entry or behind an
//! offset.

// =============================================================================
// Entry Formats
// =============================================================================

/// Item widths in bytes, indexed by format code.
const ITEM_WIDTHS: [usize; 13] = [0, 1, 1, 2, 4, 8, 1, 1, 2, 4, 8, 4, 8];

/// Bytes available for an inline value in a directory entry.
pub const INLINE_CAPACITY: usize = 4;

/// Format code of a directory entry.
///
/// Only `UByte`, `AsciiString`, `UShort`, `ULong` and `URational` are
/// converted to values; the rest decode with their correct width but carry
/// [`TagValue::Unsupported`](super::TagValue::Unsupported).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Format {
    Unused = 0,
    UByte = 1,
    AsciiString = 2,
    UShort = 3,
    ULong = 4,
    URational = 5,
    SByte = 6,
    Undefined = 7,
    SShort = 8,
    SLong = 9,
    SRational = 10,
    SFloat = 11,
    DFloat = 12,
}

impl Format {
    /// Create a Format from its numeric code.
    ///
    /// Returns `None` for codes past the end of the format table.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            0 => Some(Format::Unused),
            1 => Some(Format::UByte),
            2 => Some(Format::AsciiString),
            3 => Some(Format::UShort),
            4 => Some(Format::ULong),
            5 => Some(Format::URational),
            6 => Some(Format::SByte),
            7 => Some(Format::Undefined),
            8 => Some(Format::SShort),
            9 => Some(Format::SLong),
            10 => Some(Format::SRational),
            11 => Some(Format::SFloat),
            12 => Some(Format::DFloat),
            _ => None,
        }
    }

    /// Width of a single item of this format in bytes.
    #[inline]
    pub const fn item_width(self) -> usize {
        ITEM_WIDTHS[self as usize]
    }

    /// Whether `count` items of this format fit in the entry's 4-byte data field.
    #[inline]
    pub fn fits_inline(self, count: u32) -> bool {
        self.item_width() as u64 * count as u64 <= INLINE_CAPACITY as u64
    }

    /// Whether values of this format are converted.
    #[inline]
    pub const fn is_convertible(self) -> bool {
        matches!(
            self,
            Format::UByte | Format::AsciiString | Format::UShort | Format::ULong | Format::URational
        )
    }

    /// Display name, used when synthesizing names for unknown tags.
    pub const fn name(self) -> &'static str {
        match self {
            Format::Unused => "Unused",
            Format::UByte => "UByte",
            Format::AsciiString => "AsciiString",
            Format::UShort => "UShort",
            Format::ULong => "ULong",
            Format::URational => "URational",
            Format::SByte => "SByte",
            Format::Undefined => "Undefined",
            Format::SShort => "SShort",
            Format::SLong => "SLong",
            Format::SRational => "SRational",
            Format::SFloat => "SFloat",
            Format::DFloat => "DFloat",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Tag Ids
// =============================================================================

/// Compression scheme of the image the directory describes
pub const COMPRESSION: u16 = 0x0103;

/// Offset of the embedded JPEG thumbnail, relative to the TIFF header
pub const THUMBNAIL_OFFSET: u16 = 0x0201;

/// Length of the embedded JPEG thumbnail in bytes
pub const THUMBNAIL_LENGTH: u16 = 0x0202;

/// Compression value marking a JPEG thumbnail
pub const JPEG_COMPRESSION: u32 = 6;

/// Render a tag id as four uppercase hex digits ("0103").
pub fn tag_id_hex(tag_id: u16) -> String {
    hex::encode_upper(tag_id.to_be_bytes())
}

// =============================================================================
// Tests
// =============================================================================
