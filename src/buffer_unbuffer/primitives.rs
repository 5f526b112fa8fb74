// Copyright 2018-2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! Little-endian integer fields.

use bytes::{Buf, BufMut};
use std::convert::TryFrom;

use super::{
    buffer::check_buffer_remaining, unbuffer::check_unbuffer_remaining, ArgumentError,
    BufferResult, UnbufferResult,
};
use crate::format::FieldCode;

/// An integer type that a single-letter format code maps to.
pub trait IntegerField: Sized {
    /// The format code for this type.
    const CODE: FieldCode;

    /// Range-check `value`, then write it little-endian.
    ///
    /// Values that do not fit are an error: they are never truncated or masked.
    fn buffer_value<T: BufMut>(value: i64, buf: &mut T) -> BufferResult;

    /// Read one little-endian value.
    fn unbuffer_value<T: Buf>(buf: &mut T) -> UnbufferResult<i64>;
}

macro_rules! integer_field {
    ($t:ty, $code:expr, $put:ident, $get:ident) => {
        impl IntegerField for $t {
            const CODE: FieldCode = $code;

            fn buffer_value<T: BufMut>(value: i64, buf: &mut T) -> BufferResult {
                let v = <$t>::try_from(value).map_err(|_| ArgumentError::OutOfRange {
                    code: Self::CODE,
                    value,
                    min: i64::from(<$t>::MIN),
                    max: i64::from(<$t>::MAX),
                })?;
                check_buffer_remaining(buf, std::mem::size_of::<$t>())?;
                buf.$put(v);
                Ok(())
            }

            fn unbuffer_value<T: Buf>(buf: &mut T) -> UnbufferResult<i64> {
                check_unbuffer_remaining(buf, std::mem::size_of::<$t>())?;
                Ok(i64::from(buf.$get()))
            }
        }
    };
}

integer_field!(u8, FieldCode::U8, put_u8, get_u8);
integer_field!(u16, FieldCode::U16, put_u16_le, get_u16_le);
integer_field!(u32, FieldCode::U32, put_u32_le, get_u32_le);
integer_field!(i32, FieldCode::I32, put_i32_le, get_i32_le);
