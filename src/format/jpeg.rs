//! Locating the Exif segment in a JPEG stream.
//!
//! A JPEG stream opens with SOI (FFD8) and carries Exif metadata in an APP1
//! (FFE1) segment. The locator reads the stream two bytes at a time, so it
//! stops as soon as the marker shows up and never buffers image data.
//!
//! # Segment Layout
//!
//! ```text
//! FF E1          APP1 marker (not part of the returned segment)
//! SS SS          Segment size, big-endian, counts itself
//! "Exif\0\0"     Exif header literal
//! ...            TIFF header and directories
//! ```
//!
//! The returned segment starts at the size field, which is how the header
//! validator expects to see it.

use std::io::{ErrorKind, Read};

use bytes::Bytes;
use tracing::{debug, trace};

use crate::config::LocatorOptions;
use crate::error::IoError;
use crate::io::read_u16_be;

// =============================================================================
// JPEG Markers
// =============================================================================

/// Start Of Image marker
pub const SOI: [u8; 2] = [0xFF, 0xD8];

/// Application segment 1 (Exif) marker
pub const APP1: [u8; 2] = [0xFF, 0xE1];

/// Width of the segment size field that follows APP1
pub const SEGMENT_SIZE_LENGTH: usize = 2;

// =============================================================================
// HeaderContent
// =============================================================================

/// What the locator found at the front of a stream.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeaderContent {
    /// Every byte consumed before the Exif segment, in stream order.
    pub preamble: Vec<u8>,

    /// The Exif segment, starting at its size field.
    pub exif_segment: Option<Bytes>,
}

impl HeaderContent {
    /// Whether an Exif segment was found.
    #[inline]
    pub fn has_exif(&self) -> bool {
        self.exif_segment.is_some()
    }
}

// =============================================================================
// Locator
// =============================================================================

/// Read from `reader` until `buf` is full or the stream ends.
///
/// Returns the number of bytes actually read.
fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize, IoError> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}

/// Read the size field and body of an APP1 segment.
///
/// The buffer is sized from the declared length and keeps the size field in
/// its first two bytes. A short stream leaves the tail zero-filled; a declared
/// size below two still yields the size field alone so the validator can
/// reject it.
fn read_segment<R: Read>(reader: &mut R) -> Result<Bytes, IoError> {
    let mut size_field = [0u8; SEGMENT_SIZE_LENGTH];
    read_up_to(reader, &mut size_field)?;
    let declared = read_u16_be(&size_field) as usize;

    let mut segment = vec![0u8; declared.max(SEGMENT_SIZE_LENGTH)];
    segment[..SEGMENT_SIZE_LENGTH].copy_from_slice(&size_field);
    let filled = read_up_to(reader, &mut segment[SEGMENT_SIZE_LENGTH..])?;

    debug!(declared, filled, "Found Exif segment");
    Ok(Bytes::from(segment))
}

/// Scan a JPEG stream for its Exif segment.
///
/// The first marker pair must be SOI; otherwise the bytes read so far come
/// back as the preamble with no segment. While scanning, marker pairs that
/// are not APP1 accumulate in the preamble. The scan stops when the segment
/// is found, the stream ends, or the preamble outgrows
/// [`LocatorOptions::max_header_length`]. A trailing unpaired byte is kept in
/// the preamble.
///
/// # Errors
/// Only failures of the underlying reader are reported. A missing or
/// malformed segment is not an error.
pub fn locate_exif_segment<R: Read>(
    reader: &mut R,
    options: &LocatorOptions,
) -> Result<HeaderContent, IoError> {
    let max_header_length = options.effective_max_header_length();
    let mut preamble = Vec::new();
    let mut exif_segment = None;

    let mut pair = [0u8; 2];
    let mut count = read_up_to(reader, &mut pair)?;

    if count == 2 && pair == SOI {
        while count == 2 && exif_segment.is_none() && preamble.len() <= max_header_length {
            if pair == APP1 {
                exif_segment = Some(read_segment(reader)?);
            } else {
                preamble.extend_from_slice(&pair);
                count = read_up_to(reader, &mut pair)?;
            }
        }

        if count == 1 {
            preamble.push(pair[0]);
        }
        if exif_segment.is_none() && preamble.len() > max_header_length {
            debug!(
                scanned = preamble.len(),
                max_header_length, "Stopped scanning for Exif segment"
            );
        }
    } else {
        trace!(count, "Stream does not start with SOI");
        preamble.extend_from_slice(&pair[..count]);
    }

    Ok(HeaderContent {
        preamble,
        exif_segment,
    })
}

// =============================================================================
// Tests
// =============================================================================
