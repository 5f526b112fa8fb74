// Copyright 2018-2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! Format-string driven packing and unpacking of little-endian binary
//! records, plus a pair of small asynchronous synchronization primitives.

#[cfg(test)]
#[macro_use]
extern crate hex_literal;

/// Pack values of mixed types without wrapping each one in `PackValue`.
///
/// ```
/// let packed = structpack::pack!("BH3s", 1, 0x0203, "ab").unwrap();
/// assert_eq!(&packed[..], &[1, 3, 2, b'a', b'b', 0][..]);
/// ```
#[macro_export]
macro_rules! pack {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::pack($fmt, &[$($crate::PackValue::from($arg)),*])
    };
}

pub mod buffer_unbuffer;
mod error;
pub mod format;
mod signature;
mod slug;
mod stream_name;
pub mod sync;
mod text;
#[cfg(feature = "async-tokio")]
mod time;

pub use crate::{
    buffer_unbuffer::{
        append_buffer, copy_buffer, pack, pad_buffer, unpack, ArgumentError, BufferSize,
        PackValue, SizeRequirement, UnpackedValue,
    },
    error::{Error, Result},
    format::{
        expected_argument_count, expected_buffer_size, parse_format, resolve_variable_length,
        Direction, FormatError,
    },
    signature::{calculate_signature, compare_signatures},
    slug::{create_streamer_slug, device_id_to_slug, guid, number_to_hex_string},
    stream_name::{map_stream_name, StreamKind, MAX_STREAM_INDEX},
    sync::{BlockingEvent, Mutex, MutexReleaser},
    text::{
        base64_to_buffer, buffer_to_base64, join_path, pad_string, string_to_buffer, to_uint32,
    },
};

#[cfg(feature = "async-tokio")]
pub use crate::time::delay;
