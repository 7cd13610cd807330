//! Test utilities for integration tests.
//!
//! This module provides a builder for Exif segments in either byte order and
//! helpers for wrapping them in JPEG streams.

// =============================================================================
// Byte Order
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrderType {
    LittleEndian,
    BigEndian,
}

impl ByteOrderType {
    pub fn u16_bytes(self, value: u16) -> [u8; 2] {
        match self {
            ByteOrderType::LittleEndian => value.to_le_bytes(),
            ByteOrderType::BigEndian => value.to_be_bytes(),
        }
    }

    pub fn u32_bytes(self, value: u32) -> [u8; 4] {
        match self {
            ByteOrderType::LittleEndian => value.to_le_bytes(),
            ByteOrderType::BigEndian => value.to_be_bytes(),
        }
    }
}

// =============================================================================
// Test Entries
// =============================================================================

/// Value of a test entry; encoded in the builder's byte order.
#[derive(Debug, Clone)]
pub enum TestValue {
    Bytes(Vec<u8>),
    Ascii(String),
    Shorts(Vec<u16>),
    Longs(Vec<u32>),
    Rationals(Vec<(u32, u32)>),
    /// Format code, item count and already-encoded bytes
    Raw(u16, u32, Vec<u8>),
}

#[derive(Debug, Clone)]
pub struct TestEntry {
    pub tag: u16,
    pub value: TestValue,
}

impl TestEntry {
    pub fn short(tag: u16, value: u16) -> Self {
        Self {
            tag,
            value: TestValue::Shorts(vec![value]),
        }
    }

    pub fn shorts(tag: u16, values: &[u16]) -> Self {
        Self {
            tag,
            value: TestValue::Shorts(values.to_vec()),
        }
    }

    pub fn long(tag: u16, value: u32) -> Self {
        Self {
            tag,
            value: TestValue::Longs(vec![value]),
        }
    }

    pub fn bytes(tag: u16, values: &[u8]) -> Self {
        Self {
            tag,
            value: TestValue::Bytes(values.to_vec()),
        }
    }

    pub fn ascii(tag: u16, text: &str) -> Self {
        Self {
            tag,
            value: TestValue::Ascii(text.to_string()),
        }
    }

    pub fn rationals(tag: u16, values: &[(u32, u32)]) -> Self {
        Self {
            tag,
            value: TestValue::Rationals(values.to_vec()),
        }
    }

    pub fn raw(tag: u16, format: u16, count: u32, data: &[u8]) -> Self {
        Self {
            tag,
            value: TestValue::Raw(format, count, data.to_vec()),
        }
    }

    fn encode(&self, order: ByteOrderType) -> (u16, u32, Vec<u8>) {
        match &self.value {
            TestValue::Bytes(v) => (1, v.len() as u32, v.clone()),
            TestValue::Ascii(s) => {
                let mut data = s.as_bytes().to_vec();
                data.push(0);
                (2, data.len() as u32, data)
            }
            TestValue::Shorts(v) => (
                3,
                v.len() as u32,
                v.iter().flat_map(|&x| order.u16_bytes(x)).collect(),
            ),
            TestValue::Longs(v) => (
                4,
                v.len() as u32,
                v.iter().flat_map(|&x| order.u32_bytes(x)).collect(),
            ),
            TestValue::Rationals(v) => (
                5,
                v.len() as u32,
                v.iter()
                    .flat_map(|&(n, d)| {
                        let mut item = order.u32_bytes(n).to_vec();
                        item.extend_from_slice(&order.u32_bytes(d));
                        item
                    })
                    .collect(),
            ),
            TestValue::Raw(format, count, data) => (*format, *count, data.clone()),
        }
    }
}

// =============================================================================
// Segment Builder
// =============================================================================

/// Where an IFD landed, so callers can patch links into it afterwards.
#[derive(Debug, Clone)]
pub struct IfdLocation {
    /// TIFF-relative offset of the IFD
    pub offset: u32,
    /// TIFF-relative position of the next-IFD field
    pub next_field: usize,
    /// TIFF-relative position of each entry's value field
    pub value_fields: Vec<usize>,
}

/// Builds the TIFF body of an Exif segment.
///
/// Positions are TIFF-relative: position 0 is the byte order mark.
pub struct ExifSegmentBuilder {
    order: ByteOrderType,
    tiff: Vec<u8>,
}

impl ExifSegmentBuilder {
    /// Start a TIFF body whose first IFD is at offset 8.
    pub fn new(order: ByteOrderType) -> Self {
        let mut tiff = match order {
            ByteOrderType::LittleEndian => b"II".to_vec(),
            ByteOrderType::BigEndian => b"MM".to_vec(),
        };
        tiff.extend_from_slice(&order.u16_bytes(0x002A));
        tiff.extend_from_slice(&order.u32_bytes(8));
        Self { order, tiff }
    }

    /// Current end of the TIFF body.
    pub fn position(&self) -> u32 {
        self.tiff.len() as u32
    }

    pub fn set_first_ifd_offset(&mut self, offset: u32) {
        self.patch_u32(4, offset);
    }

    pub fn patch_u32(&mut self, position: usize, value: u32) {
        let bytes = self.order.u32_bytes(value);
        self.tiff[position..position + 4].copy_from_slice(&bytes);
    }

    pub fn push_bytes(&mut self, data: &[u8]) -> u32 {
        let offset = self.position();
        self.tiff.extend_from_slice(data);
        offset
    }

    /// Append an IFD followed by its out-of-line values.
    pub fn write_ifd(&mut self, entries: &[TestEntry], next_offset: u32) -> IfdLocation {
        let offset = self.position();
        let count = entries.len();
        let mut data_cursor = offset as usize + 2 + 12 * count + 4;

        let mut records = Vec::new();
        let mut out_of_line = Vec::new();
        let mut value_fields = Vec::new();

        for (i, entry) in entries.iter().enumerate() {
            let (format, item_count, data) = entry.encode(self.order);
            records.extend_from_slice(&self.order.u16_bytes(entry.tag));
            records.extend_from_slice(&self.order.u16_bytes(format));
            records.extend_from_slice(&self.order.u32_bytes(item_count));
            value_fields.push(offset as usize + 2 + 12 * i + 8);

            if data.len() <= 4 {
                let mut inline = [0u8; 4];
                inline[..data.len()].copy_from_slice(&data);
                records.extend_from_slice(&inline);
            } else {
                records.extend_from_slice(&self.order.u32_bytes(data_cursor as u32));
                data_cursor += data.len();
                out_of_line.extend_from_slice(&data);
            }
        }

        self.tiff.extend_from_slice(&self.order.u16_bytes(count as u16));
        self.tiff.extend_from_slice(&records);
        let next_field = self.tiff.len();
        self.tiff.extend_from_slice(&self.order.u32_bytes(next_offset));
        self.tiff.extend_from_slice(&out_of_line);

        IfdLocation {
            offset,
            next_field,
            value_fields,
        }
    }

    /// The complete segment: size field, Exif literal, TIFF body.
    pub fn build(&self) -> Vec<u8> {
        let len = 2 + 6 + self.tiff.len();
        let mut segment = (len as u16).to_be_bytes().to_vec();
        segment.extend_from_slice(b"Exif\0\0");
        segment.extend_from_slice(&self.tiff);
        segment
    }
}

// =============================================================================
// JPEG Streams
// =============================================================================

/// Fake JPEG payload following the metadata.
pub const IMAGE_TAIL: [u8; 6] = [0xFF, 0xDB, 0x00, 0x04, 0x01, 0x02];

/// A minimal JPEG thumbnail.
pub const THUMBNAIL_JPEG: [u8; 8] = [0xFF, 0xD8, 0xFF, 0xDB, 0x00, 0x02, 0xFF, 0xD9];

/// SOI, optional extra marker pairs, APP1 with `segment`, then image data.
pub fn jpeg_with_segment(prefix_pairs: &[[u8; 2]], segment: &[u8]) -> Vec<u8> {
    let mut stream = vec![0xFF, 0xD8];
    for pair in prefix_pairs {
        stream.extend_from_slice(pair);
    }
    stream.extend_from_slice(&[0xFF, 0xE1]);
    stream.extend_from_slice(segment);
    stream.extend_from_slice(&IMAGE_TAIL);
    stream
}

/// A camera-like segment: IFD0 -> Exif -> Interop, GPS, and IFD1 with a
/// JPEG thumbnail.
pub fn create_camera_segment(order: ByteOrderType) -> Vec<u8> {
    let mut builder = ExifSegmentBuilder::new(order);

    let ifd0 = builder.write_ifd(
        &[
            TestEntry::ascii(0x010F, "Canon"),
            TestEntry::ascii(0x0110, "EOS"),
            TestEntry::short(0x0112, 1),
            TestEntry::rationals(0x011A, &[(72, 1)]),
            TestEntry::long(0x8769, 0),
            TestEntry::long(0x8825, 0),
        ],
        0,
    );

    let exif = builder.write_ifd(
        &[
            TestEntry::rationals(0x829A, &[(1, 250)]),
            TestEntry::shorts(0x8827, &[100]),
            TestEntry::raw(0x9000, 7, 4, b"0230"),
            TestEntry::long(0xA005, 0),
        ],
        0,
    );
    builder.patch_u32(ifd0.value_fields[4], exif.offset);

    let interop = builder.write_ifd(&[TestEntry::ascii(0x0001, "R98")], 0);
    builder.patch_u32(exif.value_fields[3], interop.offset);

    let gps = builder.write_ifd(
        &[
            TestEntry::bytes(0x0000, &[2, 2, 0, 0]),
            TestEntry::ascii(0x0001, "N"),
            TestEntry::rationals(0x0002, &[(35, 1), (41, 1), (30, 2)]),
        ],
        0,
    );
    builder.patch_u32(ifd0.value_fields[5], gps.offset);

    let ifd1 = builder.write_ifd(
        &[
            TestEntry::short(0x0103, 6),
            TestEntry::long(0x0201, 0),
            TestEntry::long(0x0202, THUMBNAIL_JPEG.len() as u32),
        ],
        0,
    );
    builder.patch_u32(ifd0.next_field, ifd1.offset);
    let thumbnail_offset = builder.push_bytes(&THUMBNAIL_JPEG);
    builder.patch_u32(ifd1.value_fields[1], thumbnail_offset);

    builder.build()
}
