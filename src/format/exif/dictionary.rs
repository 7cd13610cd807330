//! Tag dictionaries: tag id to name and traversal flags.
//!
//! A dictionary is an ordered list of tag definitions keyed by a directory
//! name ("IFD", "Exif", "GPS", "Interop"). Lookups scan the list in order and
//! the first matching id wins, so a dictionary that repeats an id resolves
//! deterministically.
//!
//! Dictionaries are collected in a [`TagRegistry`] that is built once and
//! passed into each parse. The registry is read-only afterwards and can be
//! shared between threads parsing independent documents.
//!
//! # JSON Layout
//!
//! ```json
//! {
//!   "IFD": [
//!     { "id": "0103", "name": "Compression" },
//!     { "id": "8769", "name": "ExifOffset", "is_offset": true, "offset_name": "Exif" }
//!   ],
//!   "Exif": [
//!     { "id": "EA1C", "name": "Padding", "is_padding": true }
//!   ]
//! }
//! ```

use std::borrow::Cow;
use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

use crate::error::DictionaryError;

use super::tags::{tag_id_hex, Format};

/// Name of the dictionary used for top-level directories.
pub const ROOT_DICTIONARY: &str = "IFD";

// =============================================================================
// TagDefinition
// =============================================================================

/// One tag in a dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TagDefinition {
    /// Tag id, written as hex in dictionary documents
    #[serde(deserialize_with = "deserialize_tag_id")]
    pub id: u16,

    /// Human-readable tag name
    pub name: String,

    /// The tag's value is the offset of a nested directory
    #[serde(default)]
    pub is_offset: bool,

    /// Dictionary to decode the nested directory with
    #[serde(default)]
    pub offset_name: String,

    /// The tag only reserves space
    #[serde(default)]
    pub is_padding: bool,
}

impl TagDefinition {
    /// A plain named tag.
    pub fn new(id: u16, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_offset: false,
            offset_name: String::new(),
            is_padding: false,
        }
    }

    /// A tag pointing at a nested directory decoded with `offset_name`.
    pub fn offset(id: u16, name: impl Into<String>, offset_name: impl Into<String>) -> Self {
        Self {
            is_offset: true,
            offset_name: offset_name.into(),
            ..Self::new(id, name)
        }
    }

    /// A padding tag.
    pub fn padding(id: u16, name: impl Into<String>) -> Self {
        Self {
            is_padding: true,
            ..Self::new(id, name)
        }
    }
}

/// Parse a tag id from hex ("0103", "0x0103").
pub fn parse_tag_id(text: &str) -> Result<u16, DictionaryError> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    let mut buf = [0u8; 2];
    hex::decode_to_slice(digits, &mut buf)
        .map_err(|_| DictionaryError::InvalidTagId(text.to_string()))?;
    Ok(u16::from_be_bytes(buf))
}

fn deserialize_tag_id<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_tag_id(&text).map_err(serde::de::Error::custom)
}

// =============================================================================
// TagDictionary
// =============================================================================

/// Name and flags for a tag as seen in one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTag {
    pub name: String,
    pub is_offset: bool,
    pub offset_name: String,
    pub is_padding: bool,
}

/// An ordered list of tag definitions for one kind of directory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagDictionary {
    name: String,
    tags: Vec<TagDefinition>,
}

impl TagDictionary {
    /// Create a dictionary from its definitions.
    pub fn new(name: impl Into<String>, tags: Vec<TagDefinition>) -> Self {
        Self {
            name: name.into(),
            tags,
        }
    }

    /// A dictionary with no definitions.
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    /// Directory name this dictionary decodes.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Definitions in lookup order.
    #[inline]
    pub fn tags(&self) -> &[TagDefinition] {
        &self.tags
    }

    /// First definition with the given id.
    pub fn lookup(&self, tag_id: u16) -> Option<&TagDefinition> {
        self.tags.iter().find(|tag| tag.id == tag_id)
    }

    /// Resolve a tag's name and flags.
    ///
    /// Unknown ids get a placeholder name such as `[C4A5 (Unknown Undefined)]`
    /// or `[0132 (Unknown array of 3 UShort)]`, and no flags.
    pub fn resolve(&self, tag_id: u16, format: Format, count: u32) -> ResolvedTag {
        match self.lookup(tag_id) {
            Some(tag) => ResolvedTag {
                name: tag.name.clone(),
                is_offset: tag.is_offset,
                offset_name: tag.offset_name.clone(),
                is_padding: tag.is_padding,
            },
            None => {
                let array = if count > 1 {
                    format!("array of {count} ")
                } else {
                    String::new()
                };
                ResolvedTag {
                    name: format!("[{} (Unknown {}{})]", tag_id_hex(tag_id), array, format),
                    is_offset: false,
                    offset_name: String::new(),
                    is_padding: false,
                }
            }
        }
    }
}

// =============================================================================
// TagRegistry
// =============================================================================

/// Dictionaries available to a parse, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct TagRegistry {
    dictionaries: HashMap<String, TagDictionary>,
}

impl TagRegistry {
    /// An empty registry. Every tag decodes with a placeholder name.
    pub fn new() -> Self {
        Self::default()
    }

    /// The compiled-in IFD / Exif / GPS / Interop dictionaries.
    pub fn standard() -> Self {
        super::standard::standard_registry()
    }

    /// Load dictionaries from a JSON document.
    ///
    /// # Errors
    /// - `Json` if the document is malformed
    /// - `InvalidTagId` (wrapped in `Json`) if an id is not a 16-bit hex number
    pub fn from_json(json: &str) -> Result<Self, DictionaryError> {
        let raw: HashMap<String, Vec<TagDefinition>> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for (name, tags) in raw {
            registry.insert(TagDictionary::new(name, tags));
        }
        Ok(registry)
    }

    /// Add a dictionary, replacing any with the same name.
    pub fn insert(&mut self, dictionary: TagDictionary) -> &mut Self {
        self.dictionaries
            .insert(dictionary.name.clone(), dictionary);
        self
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, dictionary: TagDictionary) -> Self {
        self.insert(dictionary);
        self
    }

    /// Look up a dictionary by name.
    pub fn get(&self, name: &str) -> Option<&TagDictionary> {
        self.dictionaries.get(name)
    }

    /// The dictionary for `name`, or an empty one carrying that name.
    pub fn dictionary(&self, name: &str) -> Cow<'_, TagDictionary> {
        match self.get(name) {
            Some(dictionary) => Cow::Borrowed(dictionary),
            None => Cow::Owned(TagDictionary::empty(name)),
        }
    }

    /// Number of dictionaries.
    pub fn len(&self) -> usize {
        self.dictionaries.len()
    }

    /// Whether the registry has no dictionaries.
    pub fn is_empty(&self) -> bool {
        self.dictionaries.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
