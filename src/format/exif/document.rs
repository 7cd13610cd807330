//! The decoded Exif document.
//!
//! [`decode`] is the fallible core: it validates the header and walks every
//! directory, returning the first structural error it meets. [`ExifDocument`]
//! wraps that result for callers that only want a validity flag; an invalid
//! document exposes no directories at all.

use std::io::Read;

use bytes::Bytes;
use tracing::debug;

use crate::config::{LocatorOptions, ParseOptions};
use crate::error::{ExifError, IoError};
use crate::format::jpeg::locate_exif_segment;
use crate::io::ByteCodec;

use super::dictionary::TagRegistry;
use super::directory::{Directory, DirectoryWalker};
use super::header::ExifHeader;

/// Decode an Exif segment (starting at its size field) into directories.
///
/// # Errors
/// Any [`ExifError`]: bad options, a header check failure, or a structural
/// field outside the segment.
pub fn decode(
    segment: &Bytes,
    registry: &TagRegistry,
    options: &ParseOptions,
) -> Result<Vec<Directory>, ExifError> {
    options.validate().map_err(ExifError::InvalidOptions)?;

    let header = ExifHeader::parse(segment)?;
    let codec = ByteCodec::new(segment, header.byte_order);
    DirectoryWalker::new(codec, segment, registry, options).walk(header.first_ifd_offset)
}

/// An Exif segment and everything decoded from it.
#[derive(Debug, Clone)]
pub struct ExifDocument {
    raw_data: Bytes,
    directories: Vec<Directory>,
    error: Option<ExifError>,
}

impl ExifDocument {
    /// Decode a segment. Failures are recorded, never returned.
    pub fn parse(segment: impl Into<Bytes>, registry: &TagRegistry, options: &ParseOptions) -> Self {
        let raw_data = segment.into();
        match decode(&raw_data, registry, options) {
            Ok(directories) => Self {
                raw_data,
                directories,
                error: None,
            },
            Err(error) => {
                debug!(%error, size = raw_data.len(), "Exif segment is invalid");
                Self {
                    raw_data,
                    directories: Vec::new(),
                    error: Some(error),
                }
            }
        }
    }

    /// Locate the Exif segment in a JPEG stream and decode it.
    ///
    /// Returns `Ok(None)` when the stream has no Exif segment.
    ///
    /// # Errors
    /// Only failures of the underlying reader.
    pub fn from_reader<R: Read>(
        reader: &mut R,
        registry: &TagRegistry,
        locator: &LocatorOptions,
        options: &ParseOptions,
    ) -> Result<Option<Self>, IoError> {
        let content = locate_exif_segment(reader, locator)?;
        Ok(content
            .exif_segment
            .map(|segment| Self::parse(segment, registry, options)))
    }

    /// The segment as given, including its size field.
    #[inline]
    pub fn raw_data(&self) -> &Bytes {
        &self.raw_data
    }

    /// Whether the segment decoded without structural errors.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Why the segment is invalid, if it is.
    #[inline]
    pub fn error(&self) -> Option<&ExifError> {
        self.error.as_ref()
    }

    /// Decoded directories, top-level and nested, in discovery order.
    #[inline]
    pub fn directories(&self) -> &[Directory] {
        &self.directories
    }

    /// First directory with the given name ("IFD0", "Exif", ...).
    pub fn directory(&self, name: &str) -> Option<&Directory> {
        self.directories.iter().find(|directory| directory.name == name)
    }

    /// First thumbnail found in any directory.
    pub fn thumbnail(&self) -> Option<&Bytes> {
        self.directories
            .iter()
            .find_map(|directory| directory.thumbnail.as_ref())
    }

    /// Consume the document, returning its directories.
    pub fn into_directories(self) -> Vec<Directory> {
        self.directories
    }
}
