//! JPEG stream tests.
//!
//! Tests verify:
//! - The Exif segment is found after SOI and other markers
//! - The preamble holds every marker pair scanned before APP1
//! - Streams without SOI or without APP1 yield no segment
//! - A located segment decodes into the same document as the raw segment

use std::io::Cursor;

use quixif::{
    locate_exif_segment, ExifDocument, ExifError, LocatorOptions, ParseOptions, TagRegistry,
};

use super::test_utils::{create_camera_segment, jpeg_with_segment, ByteOrderType, IMAGE_TAIL};

// =============================================================================
// Locating
// =============================================================================

#[test]
fn test_segment_after_soi() {
    let segment = create_camera_segment(ByteOrderType::LittleEndian);
    let stream = jpeg_with_segment(&[], &segment);

    let content = locate_exif_segment(&mut Cursor::new(stream), &LocatorOptions::default()).unwrap();
    assert!(content.has_exif());
    assert_eq!(content.preamble, vec![0xFF, 0xD8]);
    assert_eq!(content.exif_segment.as_deref(), Some(&segment[..]));
}

#[test]
fn test_segment_after_other_markers() {
    let segment = create_camera_segment(ByteOrderType::BigEndian);
    let stream = jpeg_with_segment(&[[0xFF, 0xE0], [0x00, 0x10]], &segment);

    let content = locate_exif_segment(&mut Cursor::new(stream), &LocatorOptions::default()).unwrap();
    assert_eq!(content.preamble, vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]);
    assert_eq!(content.exif_segment.as_deref(), Some(&segment[..]));
}

#[test]
fn test_reader_left_after_segment() {
    let segment = create_camera_segment(ByteOrderType::LittleEndian);
    let mut cursor = Cursor::new(jpeg_with_segment(&[], &segment));

    locate_exif_segment(&mut cursor, &LocatorOptions::default()).unwrap();
    let position = cursor.position() as usize;
    assert_eq!(&cursor.get_ref()[position..], &IMAGE_TAIL[..]);
}

#[test]
fn test_no_soi() {
    let content =
        locate_exif_segment(&mut Cursor::new(vec![0x89, 0x50, 0x4E, 0x47]), &LocatorOptions::default())
            .unwrap();

    assert!(!content.has_exif());
    assert_eq!(content.preamble, vec![0x89, 0x50]);
}

#[test]
fn test_no_app1() {
    let stream = vec![0xFF, 0xD8, 0xFF, 0xDB, 0x00, 0x04, 0x01];

    let content = locate_exif_segment(&mut Cursor::new(stream.clone()), &LocatorOptions::default())
        .unwrap();
    assert!(content.exif_segment.is_none());
    assert_eq!(content.preamble, stream);
}

#[test]
fn test_scan_limit() {
    let segment = create_camera_segment(ByteOrderType::LittleEndian);
    let stream = jpeg_with_segment(&[[0xFF, 0xE0], [0x00, 0x10]], &segment);

    let content = locate_exif_segment(
        &mut Cursor::new(stream),
        &LocatorOptions::with_max_header_length(2),
    )
    .unwrap();
    assert!(content.exif_segment.is_none());
    assert_eq!(content.preamble, vec![0xFF, 0xD8, 0xFF, 0xE0]);
}

// =============================================================================
// Locate Then Decode
// =============================================================================

#[test]
fn test_document_from_reader() {
    let segment = create_camera_segment(ByteOrderType::BigEndian);
    let stream = jpeg_with_segment(&[[0xFF, 0xE0]], &segment);
    let registry = TagRegistry::standard();

    let from_stream = ExifDocument::from_reader(
        &mut Cursor::new(stream),
        &registry,
        &LocatorOptions::default(),
        &ParseOptions::default(),
    )
    .unwrap()
    .unwrap();
    let direct = ExifDocument::parse(segment, &registry, &ParseOptions::default());

    assert!(from_stream.is_valid());
    assert_eq!(from_stream.directories(), direct.directories());
    assert_eq!(from_stream.raw_data(), direct.raw_data());
}

#[test]
fn test_document_from_reader_without_exif() {
    let stream = vec![0xFF, 0xD8, 0xFF, 0xD9];

    let document = ExifDocument::from_reader(
        &mut Cursor::new(stream),
        &TagRegistry::standard(),
        &LocatorOptions::default(),
        &ParseOptions::default(),
    )
    .unwrap();
    assert!(document.is_none());
}

#[test]
fn test_truncated_stream_yields_invalid_document() {
    let segment = create_camera_segment(ByteOrderType::LittleEndian);
    let mut stream = jpeg_with_segment(&[], &segment);
    // Keep the size field, the Exif literal and the byte order mark
    stream.truncate(2 + 2 + 10);

    let document = ExifDocument::from_reader(
        &mut Cursor::new(stream),
        &TagRegistry::standard(),
        &LocatorOptions::default(),
        &ParseOptions::default(),
    )
    .unwrap()
    .unwrap();

    // Zero fill keeps the declared size; the tag mark reads as zero
    assert_eq!(document.raw_data().len(), segment.len());
    assert_eq!(document.error(), Some(&ExifError::InvalidTagMark(0)));
}
