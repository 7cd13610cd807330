//! Options controlling segment location and directory decoding.
//!
//! Both option sets implement `Default` and `Deserialize`, so a host can embed
//! them in its own configuration file and omit any field it does not care
//! about.
//!
//! # Example
//!
//! ```
//! use quixif::config::ParseOptions;
//!
//! let options: ParseOptions = serde_json::from_str(r#"{ "read_thumbnails": false }"#).unwrap();
//! assert!(!options.read_thumbnails);
//! assert_eq!(options.max_depth, quixif::config::DEFAULT_MAX_DEPTH);
//! ```

use serde::Deserialize;

// =============================================================================
// Default Values
// =============================================================================

/// Extract embedded JPEG thumbnails by default.
pub const DEFAULT_READ_THUMBNAILS: bool = true;

/// Default limit on sub-directory nesting below a top-level IFD.
///
/// Real files nest at most two levels (IFD -> Exif -> Interop).
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Largest accepted `max_depth`. The walker recurses once per level, so the
/// cap keeps hostile nesting from exhausting the stack.
pub const MAX_DEPTH_LIMIT: usize = 64;

/// Default cap on preamble bytes scanned before giving up on the Exif marker.
pub const DEFAULT_MAX_HEADER_LENGTH: usize = usize::MAX;

/// Smallest usable scan cap: one marker pair.
pub const MIN_HEADER_LENGTH: usize = 2;

// =============================================================================
// ParseOptions
// =============================================================================

/// Options for decoding an Exif segment into directories.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Slice the embedded thumbnail out of each directory that declares one.
    pub read_thumbnails: bool,

    /// Maximum sub-directory nesting depth below a top-level IFD.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            read_thumbnails: DEFAULT_READ_THUMBNAILS,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    /// Options that skip thumbnail extraction.
    pub fn without_thumbnails() -> Self {
        Self {
            read_thumbnails: false,
            ..Self::default()
        }
    }

    /// Validate the options and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_depth == 0 {
            return Err("max_depth must be greater than 0".to_string());
        }
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(format!(
                "max_depth must be at most {}, got {}",
                MAX_DEPTH_LIMIT, self.max_depth
            ));
        }
        Ok(())
    }
}

// =============================================================================
// LocatorOptions
// =============================================================================

/// Options for scanning a JPEG stream for the Exif segment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LocatorOptions {
    /// Stop scanning once the preamble grows past this many bytes.
    pub max_header_length: usize,
}

impl Default for LocatorOptions {
    fn default() -> Self {
        Self {
            max_header_length: DEFAULT_MAX_HEADER_LENGTH,
        }
    }
}

impl LocatorOptions {
    /// Options with the given scan cap.
    pub fn with_max_header_length(max_header_length: usize) -> Self {
        Self { max_header_length }
    }

    /// The scan cap actually applied, never below one marker pair.
    #[inline]
    pub fn effective_max_header_length(&self) -> usize {
        self.max_header_length.max(MIN_HEADER_LENGTH)
    }
}

// =============================================================================
// Tests
// =============================================================================
