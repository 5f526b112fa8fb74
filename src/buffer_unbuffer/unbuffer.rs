// Copyright 2018, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! Unpacking ("unbuffering") a byte buffer according to a format string.

use bytes::Buf;
use tracing::debug;

use super::{
    primitives::IntegerField,
    value::{bytes_to_text, UnpackedValue},
    BufferSize, SizeRequirement,
};
use crate::{
    format::{parse_format, resolve_variable_length, Direction, FieldCode, FieldToken},
    Error,
};

pub type UnbufferResult<T> = std::result::Result<T, Error>;

/// Check whether a buffer has enough bytes remaining to unbuffer a given length
pub fn check_unbuffer_remaining<T: Buf>(buf: &T, required_len: usize) -> UnbufferResult<()> {
    let actual = buf.remaining();
    if actual < required_len {
        Err(Error::SizeMismatch {
            required: SizeRequirement::AtLeast(required_len),
            actual,
        })
    } else {
        Ok(())
    }
}

/// Unpack a buffer into a list of values using a format string.
///
/// This is the equivalent of Python's `struct.unpack`. The buffer must be
/// exactly the size the format describes, except that a trailing `V` takes
/// whatever the fixed fields leave over. Padding is dropped from the output,
/// and each `s` field comes back as one `Text` holding one char per byte.
///
/// ```
/// use structpack::{unpack, UnpackedValue};
/// let values = unpack("xB3xBx", &[0u8, 18, 0, 3, 0, 234, 0]).unwrap();
/// assert_eq!(values, vec![UnpackedValue::Int(18), UnpackedValue::Int(234)]);
/// ```
///
/// # Errors
/// If the format string is invalid or does not describe a buffer of this size.
pub fn unpack<B: AsRef<[u8]>>(fmt: &str, buf: B) -> UnbufferResult<Vec<UnpackedValue>> {
    let buf = buf.as_ref();
    unpack_checked(fmt, buf).map_err(|e| {
        debug!(format = fmt, len = buf.len(), error = %e, "unpack rejected its input");
        e
    })
}

fn unpack_checked(fmt: &str, buf: &[u8]) -> UnbufferResult<Vec<UnpackedValue>> {
    let fmt = resolve_variable_length(fmt, buf.len(), Direction::Unpack)?;
    let parsed = parse_format(&fmt)?;

    let required = SizeRequirement::Exactly(parsed.buffer_size());
    if !required.satisfied_by(buf.len()) {
        return Err(Error::SizeMismatch {
            required,
            actual: buf.len(),
        });
    }

    let mut data = buf;
    let mut values = Vec::with_capacity(parsed.argument_count());
    for token in parsed.tokens() {
        if let Some(value) = unbuffer_field(token, &mut data)? {
            values.push(value);
        }
    }
    debug_assert!(!data.has_remaining());
    debug_assert_eq!(values.len(), parsed.argument_count());
    Ok(values)
}

/// Read one field, returning `None` for padding.
fn unbuffer_field<T: Buf>(token: &FieldToken, buf: &mut T) -> UnbufferResult<Option<UnpackedValue>> {
    let value = match token.code() {
        FieldCode::U8 => UnpackedValue::Int(u8::unbuffer_value(buf)?),
        FieldCode::U16 => UnpackedValue::Int(u16::unbuffer_value(buf)?),
        FieldCode::U32 => UnpackedValue::Int(u32::unbuffer_value(buf)?),
        FieldCode::I32 => UnpackedValue::Int(i32::unbuffer_value(buf)?),
        FieldCode::Padding => {
            check_unbuffer_remaining(buf, token.buffer_size())?;
            buf.advance(token.buffer_size());
            return Ok(None);
        }
        FieldCode::FixedBytes => {
            check_unbuffer_remaining(buf, token.buffer_size())?;
            let bytes = buf.copy_to_bytes(token.buffer_size());
            UnpackedValue::Text(bytes_to_text(&bytes))
        }
    };
    Ok(Some(value))
}
