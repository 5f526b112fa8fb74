// Copyright 2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! String and encoding helpers that sit alongside the codec.

use base64::{engine::general_purpose::STANDARD, Engine};
use bytes::Bytes;

use crate::{buffer_unbuffer::text_to_bytes, ArgumentError, Result};

/// Encode a string as one byte per char.
///
/// # Errors
/// `ArgumentError::NonByteCharacter` for any char above U+00FF.
pub fn string_to_buffer(s: &str) -> Result<Bytes> {
    Ok(Bytes::from(text_to_bytes(s)?))
}

/// Right-pad `input` with `pad` until it is `length` chars long.
///
/// # Errors
/// `ArgumentError::TextTooLong` if `input` is already longer than `length`.
pub fn pad_string(input: &str, pad: char, length: usize) -> Result<String> {
    let current = input.chars().count();
    if current > length {
        return Err(ArgumentError::TextTooLong {
            expected: length,
            actual: current,
        }
        .into());
    }
    let mut padded = String::with_capacity(input.len() + (length - current) * pad.len_utf8());
    padded.push_str(input);
    padded.extend(std::iter::repeat(pad).take(length - current));
    Ok(padded)
}

/// Reinterpret the bits of a signed 32-bit value as unsigned.
pub fn to_uint32(value: i32) -> u32 {
    value as u32
}

/// Decode standard-alphabet, padded base64.
pub fn base64_to_buffer(encoded: &str) -> Result<Bytes> {
    Ok(Bytes::from(STANDARD.decode(encoded)?))
}

pub fn buffer_to_base64(buf: &[u8]) -> String {
    STANDARD.encode(buf)
}

/// Join two path segments with exactly one `/` between them.
///
/// ```
/// use structpack::join_path;
/// assert_eq!(join_path("file:///data", "abc/def"), "file:///data/abc/def");
/// assert_eq!(join_path("/abcd/", "/dev"), "/abcd/dev");
/// ```
pub fn join_path(first: &str, second: &str) -> String {
    let first = first.strip_suffix('/').unwrap_or(first);
    let second = second.strip_prefix('/').unwrap_or(second);
    format!("{}/{}", first, second)
}
