//! # Quixif
//!
//! Extracts EXIF metadata embedded in JPEG byte streams.
//!
//! The decoder locates the Exif (APP1) segment at the front of a JPEG stream,
//! validates its header, and walks the TIFF-style directories inside it into
//! named, typed tag values. Embedded JPEG thumbnails can be sliced out along
//! the way.
//!
//! ## Architecture
//!
//! - [`io`] - Endianness-aware reads over a buffered segment
//! - [`mod@format`] - Segment locator and Exif directory decoder
//! - [`config`] - Locator and parse options
//! - [`error`] - Error types
//!
//! Parsing is synchronous and keeps no shared mutable state. A [`TagRegistry`]
//! is built once and can be shared by concurrent parses.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::fs::File;
//! use quixif::{ExifDocument, LocatorOptions, ParseOptions, TagRegistry};
//!
//! let registry = TagRegistry::standard();
//! let mut file = File::open("photo.jpg").unwrap();
//! let document = ExifDocument::from_reader(
//!     &mut file,
//!     &registry,
//!     &LocatorOptions::default(),
//!     &ParseOptions::default(),
//! )
//! .unwrap();
//!
//! if let Some(document) = document.filter(|d| d.is_valid()) {
//!     for directory in document.directories() {
//!         for entry in directory {
//!             println!("{} {} = {}", directory.name, entry.tag_name, entry.display_value());
//!         }
//!     }
//! }
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod io;

// Re-export commonly used types
pub use config::{LocatorOptions, ParseOptions};
pub use error::{DictionaryError, ExifError, IoError};
pub use format::exif::{
    decode, display_value, Directory, Entry, ExifDocument, Format, TagDefinition, TagDictionary,
    TagRegistry, TagValue,
};
pub use format::{locate_exif_segment, HeaderContent};
pub use io::{ByteCodec, ByteOrder};
