// Copyright 2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! The values that flow into `pack` and out of `unpack`.

use bytes::Bytes;
use std::fmt::{self, Display};

use super::{ArgumentError, BufferSize};

/// One argument to `pack`.
///
/// Integers of every width travel as `Int`; the format code decides the
/// range it must fit. An `s` field accepts either `Text` (NUL padded to the
/// field size) or `Bytes` (which must match the field size exactly).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum PackValue {
    Int(i64),
    Text(String),
    Bytes(Bytes),
}

impl PackValue {
    /// Short description of the variant, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            PackValue::Int(_) => "an integer",
            PackValue::Text(_) => "a string",
            PackValue::Bytes(_) => "a byte buffer",
        }
    }
}

/// Text is one byte per char, bytes are themselves; integers have no
/// intrinsic size outside of a format.
impl BufferSize for PackValue {
    fn buffer_size(&self) -> usize {
        match self {
            PackValue::Int(_) => 0,
            PackValue::Text(s) => s.chars().count(),
            PackValue::Bytes(b) => b.len(),
        }
    }
}

macro_rules! pack_value_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for PackValue {
                fn from(v: $t) -> Self {
                    PackValue::Int(i64::from(v))
                }
            }
        )*
    };
}

pack_value_from_int!(u8, i8, u16, i16, u32, i32, i64);

impl From<&str> for PackValue {
    fn from(v: &str) -> Self {
        PackValue::Text(v.to_owned())
    }
}

impl From<String> for PackValue {
    fn from(v: String) -> Self {
        PackValue::Text(v)
    }
}

impl From<Bytes> for PackValue {
    fn from(v: Bytes) -> Self {
        PackValue::Bytes(v)
    }
}

impl From<Vec<u8>> for PackValue {
    fn from(v: Vec<u8>) -> Self {
        PackValue::Bytes(Bytes::from(v))
    }
}

impl From<&[u8]> for PackValue {
    fn from(v: &[u8]) -> Self {
        PackValue::Bytes(Bytes::copy_from_slice(v))
    }
}

/// One value produced by `unpack`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum UnpackedValue {
    Int(i64),
    /// An `s` field, one char per byte.
    Text(String),
}

impl UnpackedValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            UnpackedValue::Int(v) => Some(*v),
            UnpackedValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            UnpackedValue::Int(_) => None,
            UnpackedValue::Text(s) => Some(s),
        }
    }

    /// Recover the raw bytes of a string field.
    pub fn to_bytes(&self) -> Option<Bytes> {
        self.as_text()
            .map(|s| Bytes::from(s.chars().map(|c| c as u8).collect::<Vec<u8>>()))
    }
}

impl Display for UnpackedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnpackedValue::Int(v) => write!(f, "{}", v),
            UnpackedValue::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl PartialEq<i64> for UnpackedValue {
    fn eq(&self, other: &i64) -> bool {
        self.as_int() == Some(*other)
    }
}

impl PartialEq<&str> for UnpackedValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

/// Map each char to the byte with the same code point.
pub(crate) fn text_to_bytes(s: &str) -> Result<Vec<u8>, ArgumentError> {
    s.chars()
        .map(|c| {
            if (c as u32) <= 0xFF {
                Ok(c as u8)
            } else {
                Err(ArgumentError::NonByteCharacter(c))
            }
        })
        .collect()
}

/// Map each byte to the char with the same code point.
pub(crate) fn bytes_to_text(b: &[u8]) -> String {
    b.iter().map(|&byte| char::from(byte)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        assert_eq!(PackValue::from(18u8), PackValue::Int(18));
        assert_eq!(PackValue::from(-45i32), PackValue::Int(-45));
        assert_eq!(PackValue::from(u32::MAX), PackValue::Int(4_294_967_295));
        assert_eq!(PackValue::from("AB"), PackValue::Text("AB".to_string()));
        assert_eq!(
            PackValue::from(&b"\x32\x33"[..]),
            PackValue::Bytes(Bytes::from_static(b"23"))
        );
        assert_eq!(PackValue::from(vec![1u8, 2]).buffer_size(), 2);
        assert_eq!(PackValue::from("\u{e9}t\u{e9}").buffer_size(), 3);
    }

    #[test]
    fn byte_text_mapping() {
        assert_eq!(text_to_bytes("23EF").unwrap(), b"23EF".to_vec());
        assert_eq!(text_to_bytes("\u{ff}\0").unwrap(), vec![0xFF, 0x00]);
        assert_eq!(
            text_to_bytes("\u{100}"),
            Err(ArgumentError::NonByteCharacter('\u{100}'))
        );
        assert_eq!(bytes_to_text(&[0x41, 0xE9, 0x00]), "A\u{e9}\0");
    }

    #[test]
    fn unpacked_accessors() {
        let text = UnpackedValue::Text("\u{80}A".to_string());
        assert_eq!(text.as_int(), None);
        assert_eq!(text.to_bytes().unwrap(), Bytes::from_static(b"\x80A"));
        assert_eq!(UnpackedValue::Int(7), 7i64);
        assert_eq!(text, "\u{80}A");
        assert_eq!(UnpackedValue::Int(-3).to_string(), "-3");
    }
}
