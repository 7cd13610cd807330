//! Byte-level access to buffered Exif data.

mod byte_codec;

pub use byte_codec::{
    read_u16_be, read_u16_le, read_u32_be, read_u32_le, ByteCodec, ByteOrder,
};
