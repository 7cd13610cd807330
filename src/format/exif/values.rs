//! Conversion of raw entry items into typed values.
//!
//! Integer and rational items are read in the document's byte order. A
//! rational is two u32 halves, numerator first; each half is read on its own,
//! so the pair keeps its order under either byte order.
//!
//! Items that were out of range arrive empty and read as zero. A rational
//! with a zero denominator yields infinity or NaN.

use std::fmt;

use crate::io::ByteOrder;

use super::tags::Format;

/// Width of one half of a rational item.
const RATIONAL_HALF: usize = 4;

/// A typed tag value.
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    Byte(u8),
    Short(u16),
    Long(u32),
    Rational(f64),
    Ascii(String),
    Bytes(Vec<u8>),
    Shorts(Vec<u16>),
    Longs(Vec<u32>),
    Rationals(Vec<f64>),
    /// Format outside the converted set; no value is available.
    Unsupported,
}

impl TagValue {
    /// Convert raw items of the given format.
    ///
    /// A single item unwraps to a scalar. ASCII items always concatenate into
    /// one string with trailing NULs trimmed.
    pub fn convert(format: Format, items: &[&[u8]], byte_order: ByteOrder) -> Self {
        let scalar = items.len() == 1;
        match format {
            Format::UByte => {
                let values: Vec<u8> = items
                    .iter()
                    .map(|item| item.first().copied().unwrap_or(0))
                    .collect();
                if scalar {
                    TagValue::Byte(values[0])
                } else {
                    TagValue::Bytes(values)
                }
            }
            Format::AsciiString => {
                let bytes: Vec<u8> = items.concat();
                let text = String::from_utf8_lossy(&bytes);
                TagValue::Ascii(text.trim_end_matches('\0').to_string())
            }
            Format::UShort => {
                let values: Vec<u16> = items.iter().map(|item| byte_order.read_u16(item)).collect();
                if scalar {
                    TagValue::Short(values[0])
                } else {
                    TagValue::Shorts(values)
                }
            }
            Format::ULong => {
                let values: Vec<u32> = items.iter().map(|item| byte_order.read_u32(item)).collect();
                if scalar {
                    TagValue::Long(values[0])
                } else {
                    TagValue::Longs(values)
                }
            }
            Format::URational => {
                let values: Vec<f64> = items
                    .iter()
                    .map(|item| read_rational(item, byte_order))
                    .collect();
                if scalar {
                    TagValue::Rational(values[0])
                } else {
                    TagValue::Rationals(values)
                }
            }
            _ => TagValue::Unsupported,
        }
    }

    /// Whether the value holds more than one item.
    pub fn is_sequence(&self) -> bool {
        matches!(
            self,
            TagValue::Bytes(_) | TagValue::Shorts(_) | TagValue::Longs(_) | TagValue::Rationals(_)
        )
    }

    /// Whether no value is available.
    #[inline]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, TagValue::Unsupported)
    }

    /// The value as an unsigned integer, when it is a scalar integer.
    pub fn as_u32(&self) -> Option<u32> {
        match *self {
            TagValue::Byte(v) => Some(v as u32),
            TagValue::Short(v) => Some(v as u32),
            TagValue::Long(v) => Some(v),
            _ => None,
        }
    }

    /// The value as a float, when it is a scalar number.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            TagValue::Rational(v) => Some(v),
            _ => self.as_u32().map(f64::from),
        }
    }

    /// The value as text, when it is an ASCII string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TagValue::Ascii(s) => Some(s),
            _ => None,
        }
    }
}

fn read_rational(item: &[u8], byte_order: ByteOrder) -> f64 {
    let numerator = byte_order.read_u32(item.get(..RATIONAL_HALF).unwrap_or(&[]));
    let denominator = byte_order.read_u32(item.get(RATIONAL_HALF..).unwrap_or(&[]));
    numerator as f64 / denominator as f64
}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, values: &[T]) -> fmt::Result {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{value}")?;
    }
    Ok(())
}

/// Display form: sequences joined by commas, nothing for unsupported values.
impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Byte(v) => write!(f, "{v}"),
            TagValue::Short(v) => write!(f, "{v}"),
            TagValue::Long(v) => write!(f, "{v}"),
            TagValue::Rational(v) => write!(f, "{v}"),
            TagValue::Ascii(s) => f.write_str(s),
            TagValue::Bytes(v) => write_joined(f, v),
            TagValue::Shorts(v) => write_joined(f, v),
            TagValue::Longs(v) => write_joined(f, v),
            TagValue::Rationals(v) => write_joined(f, v),
            TagValue::Unsupported => Ok(()),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
