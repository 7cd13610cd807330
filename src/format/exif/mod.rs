//! Exif segment decoder.
//!
//! This module turns a buffered Exif segment into named, typed directories.
//!
//! # Key Concepts
//!
//! - **Byte order**: the TIFF header inside the segment declares II
//!   (little-endian) or MM (big-endian). Every multi-byte field after it is
//!   read in that order.
//!
//! - **Offsets**: all offsets are relative to the TIFF header, which starts
//!   8 bytes into the segment.
//!
//! - **Inline vs offset values**: values of 4 bytes or less live in the entry
//!   itself; larger ones live at an offset the entry points to.
//!
//! - **Sub-directories**: some entries point at nested directories (Exif,
//!   GPS, Interop). Which entries do, and which dictionary decodes the target,
//!   comes from the [`TagRegistry`], not from a fixed schema.
//!
//! - **Fail closed**: a structural problem anywhere invalidates the whole
//!   document. Problems confined to one value (unsupported format, value
//!   offset out of range) only degrade that entry.

mod dictionary;
mod directory;
mod document;
mod entry;
mod header;
mod standard;
mod tags;
mod thumbnail;
mod values;

pub use dictionary::{
    parse_tag_id, ResolvedTag, TagDefinition, TagDictionary, TagRegistry, ROOT_DICTIONARY,
};
pub use directory::{Directory, Entry};
pub use document::{decode, ExifDocument};
pub use entry::{RawEntry, ENTRY_SIZE};
pub use header::{rebase, ExifHeader, EXIF_HEADER, TAG_MARK, TIFF_HEADER_OFFSET};
pub use standard::{EXIF_DICTIONARY, GPS_DICTIONARY, INTEROP_DICTIONARY};
pub use tags::{
    tag_id_hex, Format, COMPRESSION, INLINE_CAPACITY, JPEG_COMPRESSION, THUMBNAIL_LENGTH,
    THUMBNAIL_OFFSET,
};
pub use thumbnail::extract_thumbnail;
pub use values::TagValue;

/// Display form of an entry's value: sequences joined by commas, empty when
/// no value is available.
pub fn display_value(entry: &Entry) -> String {
    entry.value.to_string()
}
