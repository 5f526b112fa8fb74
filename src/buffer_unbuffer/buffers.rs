// Copyright 2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! Bounds-checked operations on raw byte buffers.
//!
//! None of these ever grow a destination: a copy that does not fit is an
//! error, not a reallocation.

use bytes::{BufMut, Bytes, BytesMut};

use crate::{Error, Result};

/// Copy `length` bytes of `src` starting at `src_offset` into `dest` at `dest_offset`.
///
/// In slicing syntax: `dest[dest_offset..dest_offset + length] = src[src_offset..src_offset + length]`.
///
/// ```
/// use structpack::copy_buffer;
/// let mut dest = [0u8; 4];
/// copy_buffer(&mut dest, b"abcd", 1, 2, 2).unwrap();
/// assert_eq!(&dest, b"\0\0bc");
/// assert!(copy_buffer(&mut dest, b"abcd", 0, 3, 2).is_err());
/// ```
///
/// # Errors
/// `Error::InsufficientSpace` if `dest` cannot hold the copied range, or
/// `Error::SourceOutOfRange` if `src` does not contain it.
pub fn copy_buffer(
    dest: &mut [u8],
    src: &[u8],
    src_offset: usize,
    dest_offset: usize,
    length: usize,
) -> Result<()> {
    let dest_end = dest_offset
        .checked_add(length)
        .filter(|&end| end <= dest.len())
        .ok_or(Error::InsufficientSpace {
            required: dest_offset.saturating_add(length),
            available: dest.len(),
        })?;
    let src_end = src_offset
        .checked_add(length)
        .filter(|&end| end <= src.len())
        .ok_or(Error::SourceOutOfRange {
            offset: src_offset,
            length,
            available: src.len(),
        })?;

    dest[dest_offset..dest_end].copy_from_slice(&src[src_offset..src_end]);
    Ok(())
}

/// Concatenate two buffers into a newly allocated one, leaving both untouched.
pub fn append_buffer(first: &[u8], second: &[u8]) -> Bytes {
    let mut result = BytesMut::with_capacity(first.len() + second.len());
    result.put_slice(first);
    result.put_slice(second);
    result.freeze()
}

/// Extend `buf` with NUL bytes until it is `length` bytes long.
///
/// A buffer that is already `length` bytes is returned as-is.
///
/// # Errors
/// `Error::InsufficientSpace` if `buf` is already longer than `length`.
pub fn pad_buffer(buf: Bytes, length: usize) -> Result<Bytes> {
    if buf.len() == length {
        return Ok(buf);
    }
    if buf.len() > length {
        return Err(Error::InsufficientSpace {
            required: buf.len(),
            available: length,
        });
    }
    let mut padded = BytesMut::with_capacity(length);
    padded.put_slice(&buf);
    padded.put_bytes(0, length - buf.len());
    Ok(padded.freeze())
}
