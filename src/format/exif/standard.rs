//! Compiled-in baseline dictionaries.
//!
//! Covers the tags cameras commonly write. Hosts with fuller tables load them
//! through [`TagRegistry::from_json`] instead.

use super::dictionary::{TagDefinition, TagDictionary, TagRegistry, ROOT_DICTIONARY};

/// Dictionary for the Exif sub-directory (camera settings).
pub const EXIF_DICTIONARY: &str = "Exif";
/// Dictionary for the GPS sub-directory.
pub const GPS_DICTIONARY: &str = "GPS";
/// Dictionary for the Interoperability sub-directory.
pub const INTEROP_DICTIONARY: &str = "Interop";

const PADDING: u16 = 0xEA1C;

const IFD_TAGS: &[(u16, &str)] = &[
    (0x0100, "ImageWidth"),
    (0x0101, "ImageLength"),
    (0x0102, "BitsPerSample"),
    (0x0103, "Compression"),
    (0x0106, "PhotometricInterpretation"),
    (0x010E, "ImageDescription"),
    (0x010F, "Make"),
    (0x0110, "Model"),
    (0x0111, "StripOffsets"),
    (0x0112, "Orientation"),
    (0x0115, "SamplesPerPixel"),
    (0x0116, "RowsPerStrip"),
    (0x0117, "StripByteCounts"),
    (0x011A, "XResolution"),
    (0x011B, "YResolution"),
    (0x011C, "PlanarConfiguration"),
    (0x0128, "ResolutionUnit"),
    (0x0131, "Software"),
    (0x0132, "DateTime"),
    (0x013B, "Artist"),
    (0x013E, "WhitePoint"),
    (0x013F, "PrimaryChromaticities"),
    (0x0201, "ThumbnailOffset"),
    (0x0202, "ThumbnailLength"),
    (0x0211, "YCbCrCoefficients"),
    (0x0212, "YCbCrSubSampling"),
    (0x0213, "YCbCrPositioning"),
    (0x0214, "ReferenceBlackWhite"),
    (0x8298, "Copyright"),
];

const EXIF_TAGS: &[(u16, &str)] = &[
    (0x829A, "ExposureTime"),
    (0x829D, "FNumber"),
    (0x8822, "ExposureProgram"),
    (0x8827, "ISOSpeedRatings"),
    (0x9000, "ExifVersion"),
    (0x9003, "DateTimeOriginal"),
    (0x9004, "DateTimeDigitized"),
    (0x9101, "ComponentsConfiguration"),
    (0x9102, "CompressedBitsPerPixel"),
    (0x9201, "ShutterSpeedValue"),
    (0x9202, "ApertureValue"),
    (0x9203, "BrightnessValue"),
    (0x9204, "ExposureBiasValue"),
    (0x9205, "MaxApertureValue"),
    (0x9206, "SubjectDistance"),
    (0x9207, "MeteringMode"),
    (0x9208, "LightSource"),
    (0x9209, "Flash"),
    (0x920A, "FocalLength"),
    (0x927C, "MakerNote"),
    (0x9286, "UserComment"),
    (0x9290, "SubSecTime"),
    (0x9291, "SubSecTimeOriginal"),
    (0x9292, "SubSecTimeDigitized"),
    (0xA000, "FlashpixVersion"),
    (0xA001, "ColorSpace"),
    (0xA002, "ExifImageWidth"),
    (0xA003, "ExifImageHeight"),
    (0xA20E, "FocalPlaneXResolution"),
    (0xA20F, "FocalPlaneYResolution"),
    (0xA210, "FocalPlaneResolutionUnit"),
    (0xA217, "SensingMethod"),
    (0xA300, "FileSource"),
    (0xA301, "SceneType"),
    (0xA401, "CustomRendered"),
    (0xA402, "ExposureMode"),
    (0xA403, "WhiteBalance"),
    (0xA404, "DigitalZoomRatio"),
    (0xA405, "FocalLengthIn35mmFilm"),
    (0xA406, "SceneCaptureType"),
    (0xA420, "ImageUniqueID"),
];

const GPS_TAGS: &[(u16, &str)] = &[
    (0x0000, "GPSVersionID"),
    (0x0001, "GPSLatitudeRef"),
    (0x0002, "GPSLatitude"),
    (0x0003, "GPSLongitudeRef"),
    (0x0004, "GPSLongitude"),
    (0x0005, "GPSAltitudeRef"),
    (0x0006, "GPSAltitude"),
    (0x0007, "GPSTimeStamp"),
    (0x0008, "GPSSatellites"),
    (0x0010, "GPSImgDirectionRef"),
    (0x0011, "GPSImgDirection"),
    (0x0012, "GPSMapDatum"),
    (0x001D, "GPSDateStamp"),
];

const INTEROP_TAGS: &[(u16, &str)] = &[
    (0x0001, "InteroperabilityIndex"),
    (0x0002, "InteroperabilityVersion"),
];

fn plain(tags: &[(u16, &str)]) -> Vec<TagDefinition> {
    tags.iter()
        .map(|&(id, name)| TagDefinition::new(id, name))
        .collect()
}

pub(crate) fn standard_registry() -> TagRegistry {
    let mut ifd = plain(IFD_TAGS);
    ifd.push(TagDefinition::offset(0x8769, "ExifOffset", EXIF_DICTIONARY));
    ifd.push(TagDefinition::offset(0x8825, "GPSInfo", GPS_DICTIONARY));
    ifd.push(TagDefinition::padding(PADDING, "Padding"));

    let mut exif = plain(EXIF_TAGS);
    exif.push(TagDefinition::offset(
        0xA005,
        "InteroperabilityOffset",
        INTEROP_DICTIONARY,
    ));
    exif.push(TagDefinition::padding(PADDING, "Padding"));

    TagRegistry::new()
        .with(TagDictionary::new(ROOT_DICTIONARY, ifd))
        .with(TagDictionary::new(EXIF_DICTIONARY, exif))
        .with(TagDictionary::new(GPS_DICTIONARY, plain(GPS_TAGS)))
        .with(TagDictionary::new(INTEROP_DICTIONARY, plain(INTEROP_TAGS)))
}
