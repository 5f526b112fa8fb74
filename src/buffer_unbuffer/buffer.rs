// Copyright 2018-2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! Packing ("buffering") a list of values according to a format string.

use std::borrow::Cow;

use bytes::{BufMut, Bytes, BytesMut};
use tracing::debug;

use super::{
    buffers::pad_buffer,
    primitives::IntegerField,
    value::{text_to_bytes, PackValue},
    ArgumentError, BufferSize,
};
use crate::{
    format::{
        expected_argument_count, parse_format, resolve_variable_length, Direction, FieldCode,
        FieldToken, VARIABLE_LENGTH_CODE,
    },
    Error,
};

/// Shorthand name for what a buffering operation should return.
pub type BufferResult = std::result::Result<(), Error>;

/// Check whether a buffer has enough space remaining to buffer a given length
pub fn check_buffer_remaining<T: BufMut>(buf: &mut T, required_len: usize) -> BufferResult {
    let available = buf.remaining_mut();
    if available < required_len {
        Err(Error::InsufficientSpace {
            required: required_len,
            available,
        })
    } else {
        Ok(())
    }
}

/// Pack a series of values into a new buffer using a format string.
///
/// This is the equivalent of Python's `struct.pack` restricted to
/// little-endian `B`, `H`, `L`, `l`, `s`, `x` and a trailing `V`. There must
/// be exactly one value per non-padding field. A zero-length value for a
/// trailing `V` produces no field, so it is left over and rejected as an
/// extra argument.
///
/// ```
/// use structpack::{pack, PackValue};
/// let packed = pack("H2xL", &[PackValue::from(18), PackValue::from(234)]).unwrap();
/// assert_eq!(&packed[..], &[18, 0, 0, 0, 234, 0, 0, 0][..]);
/// ```
///
/// # Errors
/// If the format string is invalid, or the values do not match it in
/// number, type or range.
pub fn pack(fmt: &str, args: &[PackValue]) -> Result<Bytes, Error> {
    pack_checked(fmt, args).map_err(|e| {
        debug!(format = fmt, error = %e, "pack rejected its arguments");
        e
    })
}

fn pack_checked(fmt: &str, args: &[PackValue]) -> Result<Bytes, Error> {
    let fmt = resolve_pack_format(fmt, args)?;
    let parsed = parse_format(&fmt)?;

    let expected = parsed.argument_count();
    if args.len() != expected {
        return Err(ArgumentError::WrongArgumentCount {
            expected,
            actual: args.len(),
        }
        .into());
    }

    let size = parsed.buffer_size();
    let mut buf = BytesMut::with_capacity(size);
    let mut values = args.iter().enumerate();
    for token in parsed.tokens() {
        if token.code() == FieldCode::Padding {
            buffer_padding(token.buffer_size(), &mut buf)?;
            continue;
        }
        let (index, arg) = values.next().ok_or(ArgumentError::WrongArgumentCount {
            expected,
            actual: args.len(),
        })?;
        buffer_field(token, index, arg, &mut buf)?;
    }
    debug_assert_eq!(buf.len(), size);
    Ok(buf.freeze())
}

/// Resolve a trailing `V` against the size of the last argument.
fn resolve_pack_format<'a>(fmt: &'a str, args: &[PackValue]) -> Result<Cow<'a, str>, Error> {
    if !fmt.ends_with(VARIABLE_LENGTH_CODE) {
        return Ok(Cow::Borrowed(fmt));
    }

    let (last, rest) = match args.split_last() {
        Some(split) => split,
        None => {
            let prefix = &fmt[..fmt.len() - VARIABLE_LENGTH_CODE.len_utf8()];
            return Err(ArgumentError::WrongArgumentCount {
                expected: expected_argument_count(prefix)? + 1,
                actual: 0,
            }
            .into());
        }
    };
    if let PackValue::Int(_) = last {
        return Err(ArgumentError::TypeMismatch {
            index: rest.len(),
            code: FieldCode::FixedBytes,
            expected: "a string or a byte buffer",
            found: last.kind(),
        }
        .into());
    }

    resolve_variable_length(fmt, last.buffer_size(), Direction::Pack)
}

fn buffer_field<T: BufMut>(
    token: &FieldToken,
    index: usize,
    arg: &PackValue,
    buf: &mut T,
) -> BufferResult {
    let code = token.code();
    match (code, arg) {
        (FieldCode::U8, PackValue::Int(v)) => u8::buffer_value(*v, buf),
        (FieldCode::U16, PackValue::Int(v)) => u16::buffer_value(*v, buf),
        (FieldCode::U32, PackValue::Int(v)) => u32::buffer_value(*v, buf),
        (FieldCode::I32, PackValue::Int(v)) => i32::buffer_value(*v, buf),
        (FieldCode::FixedBytes, PackValue::Text(s)) => buffer_text(s, token.buffer_size(), buf),
        (FieldCode::FixedBytes, PackValue::Bytes(b)) => {
            buffer_bytes(b, token.buffer_size(), buf)
        }
        (FieldCode::Padding, _) => buffer_padding(token.buffer_size(), buf),
        (FieldCode::FixedBytes, _) => Err(ArgumentError::TypeMismatch {
            index,
            code,
            expected: "a string or a byte buffer",
            found: arg.kind(),
        }
        .into()),
        (_, _) => Err(ArgumentError::TypeMismatch {
            index,
            code,
            expected: "an integer",
            found: arg.kind(),
        }
        .into()),
    }
}

fn buffer_padding<T: BufMut>(size: usize, buf: &mut T) -> BufferResult {
    check_buffer_remaining(buf, size)?;
    buf.put_bytes(0, size);
    Ok(())
}

/// Strings are NUL padded out to the field size.
fn buffer_text<T: BufMut>(s: &str, size: usize, buf: &mut T) -> BufferResult {
    let bytes = text_to_bytes(s)?;
    if bytes.len() > size {
        return Err(ArgumentError::TextTooLong {
            expected: size,
            actual: bytes.len(),
        }
        .into());
    }
    let padded = pad_buffer(Bytes::from(bytes), size)?;
    check_buffer_remaining(buf, size)?;
    buf.put_slice(&padded);
    Ok(())
}

/// Byte buffers must already be exactly the field size.
fn buffer_bytes<T: BufMut>(b: &Bytes, size: usize, buf: &mut T) -> BufferResult {
    if b.len() != size {
        return Err(ArgumentError::BufferLengthMismatch {
            expected: size,
            actual: b.len(),
        }
        .into());
    }
    check_buffer_remaining(buf, size)?;
    buf.put_slice(b);
    Ok(())
}
