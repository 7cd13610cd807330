use thiserror::Error;

/// I/O errors raised by the byte source while locating the Exif segment
#[derive(Debug, Clone, Error)]
pub enum IoError {
    /// The underlying reader failed
    #[error("Read error: {0}")]
    Read(String),
}

impl From<std::io::Error> for IoError {
    fn from(err: std::io::Error) -> Self {
        IoError::Read(err.to_string())
    }
}

/// Errors that make an Exif segment structurally invalid.
///
/// Any of these aborts the parse of the whole document; no partial
/// directory tree is exposed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExifError {
    /// Declared segment size does not match the buffer length
    #[error("Segment size mismatch: declared {declared} bytes, got {actual}")]
    SizeMismatch { declared: usize, actual: usize },

    /// The 6-byte "Exif\0\0" literal is missing
    #[error("Invalid Exif header literal")]
    InvalidHeader,

    /// Byte order mark is neither II nor MM
    #[error("Invalid byte order mark: expected 0x4949 (II) or 0x4D4D (MM), got 0x{0:04X}")]
    InvalidByteOrder(u16),

    /// TIFF tag mark is not 42
    #[error("Invalid tag mark: expected 0x002A, got 0x{0:04X}")]
    InvalidTagMark(u16),

    /// A structural field lies outside the segment
    #[error("Read out of bounds: {len} bytes at offset {offset}, segment size is {size}")]
    OutOfBounds { offset: usize, len: usize, size: usize },

    /// Format code outside the 0..=12 table
    #[error("Unknown entry format: {0}")]
    UnknownFormat(u16),

    /// A directory offset was reached twice (cycle or shared target)
    #[error("Directory cycle detected at offset {0}")]
    DirectoryCycle(usize),

    /// Sub-directory nesting went deeper than allowed
    #[error("Directory nesting exceeds maximum depth of {0}")]
    DepthExceeded(usize),

    /// Parse options failed validation
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

/// Errors raised while loading a tag dictionary
#[derive(Debug, Clone, Error)]
pub enum DictionaryError {
    /// Malformed dictionary document
    #[error("Dictionary JSON error: {0}")]
    Json(String),

    /// Tag id is not a 16-bit hex number
    #[error("Invalid tag id: {0}")]
    InvalidTagId(String),
}

impl From<serde_json::Error> for DictionaryError {
    fn from(err: serde_json::Error) -> Self {
        DictionaryError::Json(err.to_string())
    }
}
