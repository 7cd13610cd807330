//! Format parsers for JPEG-embedded Exif metadata.
//!
//! - [`jpeg`] finds the APP1 segment in a JPEG stream
//! - [`exif`] decodes the segment's TIFF directories

pub mod exif;
pub mod jpeg;

pub use jpeg::{locate_exif_segment, HeaderContent, APP1, SOI};
