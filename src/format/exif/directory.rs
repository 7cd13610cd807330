//! Image File Directory (IFD) decoding and traversal.
//!
//! # IFD Structure
//!
//! ```text
//! Bytes 0-1:          Entry count N
//! Bytes 2..2+12N:     N entries of 12 bytes
//! Bytes 2+12N..+4:    Offset of the next IFD (0 = end of chain)
//! ```
//!
//! Top-level IFDs form a chain through their next-IFD offsets and are named
//! after the root dictionary plus their chain index ("IFD0", "IFD1"). Entries
//! flagged as offsets point at nested directories (Exif, GPS, Interop), which
//! are decoded with the dictionary the flag names and take its bare name.
//! Nested directories are listed right after their parent, depth first.

use std::collections::HashSet;

use bytes::Bytes;
use tracing::{debug, trace, warn};

use crate::config::ParseOptions;
use crate::error::ExifError;
use crate::io::ByteCodec;

use super::dictionary::{TagDictionary, TagRegistry, ROOT_DICTIONARY};
use super::entry::{RawEntry, ENTRY_SIZE};
use super::header::rebase;
use super::tags::{tag_id_hex, Format};
use super::thumbnail::extract_thumbnail;
use super::values::TagValue;

const COUNT_LENGTH: usize = 2;

// =============================================================================
// Entry
// =============================================================================

/// A decoded, named directory entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub tag_id: u16,
    pub tag_name: String,
    pub format: Format,
    pub value: TagValue,
    /// More than one item, for any format except ASCII
    pub is_array: bool,
    pub is_offset: bool,
    pub offset_name: String,
    pub is_padding: bool,
}

impl Entry {
    /// Convert a raw entry and resolve its name against `dictionary`.
    pub fn from_raw(raw: &RawEntry<'_>, dictionary: &TagDictionary, codec: &ByteCodec<'_>) -> Self {
        let resolved = dictionary.resolve(raw.tag_id, raw.format, raw.count);
        Entry {
            tag_id: raw.tag_id,
            tag_name: resolved.name,
            format: raw.format,
            value: TagValue::convert(raw.format, &raw.items, codec.byte_order()),
            is_array: raw.format != Format::AsciiString && raw.items.len() > 1,
            is_offset: resolved.is_offset,
            offset_name: resolved.offset_name,
            is_padding: resolved.is_padding,
        }
    }

    /// Tag id as four uppercase hex digits.
    pub fn tag_id_hex(&self) -> String {
        tag_id_hex(self.tag_id)
    }

    /// Display form of the value.
    pub fn display_value(&self) -> String {
        self.value.to_string()
    }

    /// Target of a sub-directory pointer, when this entry is one.
    fn subdirectory_pointer(&self) -> Option<(u32, &str)> {
        if !self.is_offset {
            return None;
        }
        match self.value.as_u32() {
            Some(0) | None => None,
            Some(offset) => Some((offset, self.offset_name.as_str())),
        }
    }
}

// =============================================================================
// Directory
// =============================================================================

/// A decoded directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Directory {
    pub name: String,
    pub entries: Vec<Entry>,
    pub thumbnail: Option<Bytes>,
    next_ifd_offset: u32,
}

impl Directory {
    /// First entry with the given tag id.
    pub fn entry(&self, tag_id: u16) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.tag_id == tag_id)
    }

    /// First entry with the given tag name.
    pub fn find(&self, tag_name: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.tag_name == tag_name)
    }

    /// Iterate over the entries in directory order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Offset of the next IFD in the chain (0 at the end).
    pub fn next_ifd_offset(&self) -> u32 {
        self.next_ifd_offset
    }

    fn subdirectory_pointers(&self) -> Vec<(u32, String)> {
        self.entries
            .iter()
            .filter_map(Entry::subdirectory_pointer)
            .map(|(offset, name)| (offset, name.to_string()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// =============================================================================
// DirectoryWalker
// =============================================================================

/// Walks the IFD chain and every nested directory it points to.
///
/// Each segment position is decoded at most once; reaching one again is
/// treated as a cycle.
pub(crate) struct DirectoryWalker<'a> {
    codec: ByteCodec<'a>,
    segment: &'a Bytes,
    registry: &'a TagRegistry,
    options: &'a ParseOptions,
    visited: HashSet<usize>,
    directories: Vec<Directory>,
}

impl<'a> DirectoryWalker<'a> {
    pub(crate) fn new(
        codec: ByteCodec<'a>,
        segment: &'a Bytes,
        registry: &'a TagRegistry,
        options: &'a ParseOptions,
    ) -> Self {
        Self {
            codec,
            segment,
            registry,
            options,
            visited: HashSet::new(),
            directories: Vec::new(),
        }
    }

    /// Decode the chain starting at `first_ifd_offset` (TIFF-relative).
    pub(crate) fn walk(mut self, first_ifd_offset: u32) -> Result<Vec<Directory>, ExifError> {
        let registry = self.registry;
        let root = registry.dictionary(ROOT_DICTIONARY);

        let mut offset = first_ifd_offset;
        let mut index = 0usize;
        while offset != 0 {
            let directory = self.read_directory(rebase(offset)?, &root, Some(index))?;
            offset = directory.next_ifd_offset;
            let pointers = directory.subdirectory_pointers();
            self.directories.push(directory);
            self.walk_subdirectories(pointers, 1)?;
            index += 1;
        }

        debug!(directories = self.directories.len(), "Decoded Exif directories");
        Ok(self.directories)
    }

    fn walk_subdirectories(
        &mut self,
        pointers: Vec<(u32, String)>,
        depth: usize,
    ) -> Result<(), ExifError> {
        let registry = self.registry;
        for (offset, name) in pointers {
            if depth > self.options.max_depth {
                warn!(depth, directory = %name, "Sub-directory nesting too deep");
                return Err(ExifError::DepthExceeded(self.options.max_depth));
            }

            trace!(offset, directory = %name, depth, "Following sub-directory");
            let dictionary = registry.dictionary(&name);
            let directory = self.read_directory(rebase(offset)?, &dictionary, None)?;
            let nested = directory.subdirectory_pointers();
            self.directories.push(directory);
            self.walk_subdirectories(nested, depth + 1)?;
        }
        Ok(())
    }

    /// Decode one directory at a segment position.
    fn read_directory(
        &mut self,
        position: usize,
        dictionary: &TagDictionary,
        chain_index: Option<usize>,
    ) -> Result<Directory, ExifError> {
        if !self.visited.insert(position) {
            warn!(position, "Directory offset revisited");
            return Err(ExifError::DirectoryCycle(position));
        }

        let count = self.codec.read_u16(position)? as usize;
        let first_entry = position + COUNT_LENGTH;

        let mut entries = Vec::with_capacity(count);
        for i in 0..count {
            let raw = RawEntry::decode(&self.codec, first_entry + i * ENTRY_SIZE)?;
            entries.push(Entry::from_raw(&raw, dictionary, &self.codec));
        }

        let next_ifd_offset = self.codec.read_u32(first_entry + count * ENTRY_SIZE)?;

        let thumbnail = if self.options.read_thumbnails {
            extract_thumbnail(&entries, self.segment)
        } else {
            None
        };

        let name = match chain_index {
            Some(index) => format!("{}{}", dictionary.name(), index),
            None => dictionary.name().to_string(),
        };
        trace!(directory = %name, position, entries = count, "Decoded directory");

        Ok(Directory {
            name,
            entries,
            thumbnail,
            next_ifd_offset,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
