//! Minimal NBT (Named Binary Tag) writer.
//!
//! NBT is Minecraft's binary serialization format: a tree of typed, named
//! tags, all multi-byte values big-endian. Only writing is implemented -
//! the schematic container is produced, never re-read.
//!
//! # Wire Layout
//!
//! ```text
//! named tag    = UINT8 id, UINT16 name length, name bytes (UTF-8), payload
//! Byte      1  = INT8
//! Short     2  = INT16
//! Int       3  = INT32
//! Long      4  = INT64
//! Float     5  = IEEE754 f32
//! Double    6  = IEEE754 f64
//! ByteArray 7  = INT32 length, raw bytes
//! String    8  = UINT16 length, UTF-8 bytes
//! List      9  = UINT8 element id, INT32 count, payloads (unnamed)
//! Compound 10  = named tags..., UINT8 0x00 terminator
//! ```
//!
//! An empty list is written with element id 0 (`TAG_End`), matching what
//! the reference Minecraft codecs emit.

use std::io::Write;

use crate::error::{SchematicError, SchematicResult};

/// An NBT value.
///
/// Compounds keep their fields in insertion order as `(name, value)` pairs;
/// the schematic format does not require a particular field order, but a
/// stable one keeps output byte-for-byte reproducible.
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    /// Signed 8-bit integer.
    Byte(i8),
    /// Signed 16-bit integer.
    Short(i16),
    /// Signed 32-bit integer.
    Int(i32),
    /// Signed 64-bit integer.
    Long(i64),
    /// 32-bit float.
    Float(f32),
    /// 64-bit float.
    Double(f64),
    /// Raw byte array with a 32-bit length prefix.
    ByteArray(Vec<u8>),
    /// Length-prefixed UTF-8 string.
    String(String),
    /// Homogeneous list of unnamed tags.
    List(Vec<Tag>),
    /// Ordered set of named tags.
    Compound(Vec<(String, Tag)>),
}

impl Tag {
    /// The wire id of this tag type.
    #[must_use]
    pub const fn id(&self) -> u8 {
        match self {
            Self::Byte(_) => 1,
            Self::Short(_) => 2,
            Self::Int(_) => 3,
            Self::Long(_) => 4,
            Self::Float(_) => 5,
            Self::Double(_) => 6,
            Self::ByteArray(_) => 7,
            Self::String(_) => 8,
            Self::List(_) => 9,
            Self::Compound(_) => 10,
        }
    }

    /// Write this tag as a named root tag.
    ///
    /// # Errors
    ///
    /// Returns [`SchematicError::PayloadTooLarge`] if an array or string
    /// exceeds its length prefix, or [`SchematicError::Io`] on write
    /// failure.
    pub fn write_named<W: Write>(&self, name: &str, writer: &mut W) -> SchematicResult<()> {
        writer.write_all(&[self.id()])?;
        write_string(name, writer)?;
        self.write_payload(writer)
    }

    /// Write this tag's payload (no id, no name).
    fn write_payload<W: Write>(&self, writer: &mut W) -> SchematicResult<()> {
        match self {
            Self::Byte(v) => writer.write_all(&v.to_be_bytes())?,
            Self::Short(v) => writer.write_all(&v.to_be_bytes())?,
            Self::Int(v) => writer.write_all(&v.to_be_bytes())?,
            Self::Long(v) => writer.write_all(&v.to_be_bytes())?,
            Self::Float(v) => writer.write_all(&v.to_be_bytes())?,
            Self::Double(v) => writer.write_all(&v.to_be_bytes())?,
            Self::ByteArray(bytes) => {
                let len = i32::try_from(bytes.len())
                    .map_err(|_| SchematicError::PayloadTooLarge { len: bytes.len() })?;
                writer.write_all(&len.to_be_bytes())?;
                writer.write_all(bytes)?;
            }
            Self::String(s) => write_string(s, writer)?,
            Self::List(items) => {
                // All items must share a tag type; the first item's id is
                // written, and 0 (TAG_End) for an empty list.
                let element_id = items.first().map_or(0, Tag::id);
                let len = i32::try_from(items.len())
                    .map_err(|_| SchematicError::PayloadTooLarge { len: items.len() })?;
                writer.write_all(&[element_id])?;
                writer.write_all(&len.to_be_bytes())?;
                for item in items {
                    item.write_payload(writer)?;
                }
            }
            Self::Compound(fields) => {
                for (name, tag) in fields {
                    tag.write_named(name, writer)?;
                }
                writer.write_all(&[0])?;
            }
        }
        Ok(())
    }
}

fn write_string<W: Write>(s: &str, writer: &mut W) -> SchematicResult<()> {
    let len = u16::try_from(s.len())
        .map_err(|_| SchematicError::PayloadTooLarge { len: s.len() })?;
    writer.write_all(&len.to_be_bytes())?;
    writer.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn bytes_of(tag: &Tag, name: &str) -> Vec<u8> {
        let mut out = Vec::new();
        tag.write_named(name, &mut out).unwrap();
        out
    }

    #[test]
    fn short_is_big_endian() {
        let out = bytes_of(&Tag::Short(0x1234), "W");
        assert_eq!(out, vec![2, 0, 1, b'W', 0x12, 0x34]);
    }

    #[test]
    fn negative_short_sign_extends() {
        let out = bytes_of(&Tag::Short(-1), "s");
        assert_eq!(&out[4..], &[0xFF, 0xFF]);
    }

    #[test]
    fn string_has_u16_length_prefix() {
        let out = bytes_of(&Tag::String("Alpha".into()), "Materials");
        // id, name len, name, payload len, payload
        assert_eq!(out[0], 8);
        assert_eq!(&out[1..3], &[0, 9]);
        assert_eq!(&out[3..12], b"Materials");
        assert_eq!(&out[12..14], &[0, 5]);
        assert_eq!(&out[14..], b"Alpha");
    }

    #[test]
    fn byte_array_has_i32_length_prefix() {
        let out = bytes_of(&Tag::ByteArray(vec![1, 2, 3]), "B");
        assert_eq!(out[0], 7);
        assert_eq!(&out[4..8], &[0, 0, 0, 3]);
        assert_eq!(&out[8..], &[1, 2, 3]);
    }

    #[test]
    fn empty_list_uses_end_element_id() {
        let out = bytes_of(&Tag::List(Vec::new()), "E");
        assert_eq!(out[0], 9);
        assert_eq!(out[4], 0); // element id TAG_End
        assert_eq!(&out[5..9], &[0, 0, 0, 0]); // count 0
    }

    #[test]
    fn list_of_shorts() {
        let out = bytes_of(&Tag::List(vec![Tag::Short(1), Tag::Short(2)]), "L");
        assert_eq!(out[4], 2); // element id Short
        assert_eq!(&out[5..9], &[0, 0, 0, 2]);
        assert_eq!(&out[9..], &[0, 1, 0, 2]);
    }

    #[test]
    fn compound_is_terminated() {
        let tag = Tag::Compound(vec![("a".into(), Tag::Byte(7))]);
        let out = bytes_of(&tag, "c");
        assert_eq!(out[0], 10);
        assert_eq!(*out.last().unwrap(), 0);
        // Inner named byte tag: id 1, name len 1, 'a', value 7.
        assert_eq!(&out[4..9], &[1, 0, 1, b'a', 7]);
    }

    #[test]
    fn compound_preserves_field_order() {
        let tag = Tag::Compound(vec![
            ("zz".into(), Tag::Byte(1)),
            ("aa".into(), Tag::Byte(2)),
        ]);
        let out = bytes_of(&tag, "c");
        let zz = out.windows(2).position(|w| w == b"zz").unwrap();
        let aa = out.windows(2).position(|w| w == b"aa").unwrap();
        assert!(zz < aa);
    }
}
