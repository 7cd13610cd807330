//! Embedded JPEG thumbnail extraction.
//!
//! A directory carries a JPEG thumbnail when its Compression entry is 6 and
//! it has both ThumbnailOffset and ThumbnailLength entries. The thumbnail is a
//! zero-copy slice of the segment.

use bytes::Bytes;

use super::directory::Entry;
use super::header::TIFF_HEADER_OFFSET;
use super::tags::{COMPRESSION, JPEG_COMPRESSION, THUMBNAIL_LENGTH, THUMBNAIL_OFFSET};

fn scalar(entries: &[Entry], tag_id: u16) -> Option<u32> {
    entries
        .iter()
        .find(|entry| entry.tag_id == tag_id)
        .and_then(|entry| entry.value.as_u32())
}

/// Slice the thumbnail described by `entries` out of `segment`.
///
/// Returns `None` when the directory does not describe a JPEG thumbnail. A
/// thumbnail range that runs past the segment yields an empty buffer.
pub fn extract_thumbnail(entries: &[Entry], segment: &Bytes) -> Option<Bytes> {
    if scalar(entries, COMPRESSION)? != JPEG_COMPRESSION {
        return None;
    }
    let offset = scalar(entries, THUMBNAIL_OFFSET)?;
    let length = scalar(entries, THUMBNAIL_LENGTH)?;

    let start = (offset as usize).checked_add(TIFF_HEADER_OFFSET);
    let end = start.and_then(|start| start.checked_add(length as usize));
    match (start, end) {
        (Some(start), Some(end)) if end <= segment.len() => Some(segment.slice(start..end)),
        _ => Some(Bytes::new()),
    }
}
