// Copyright 2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! Routines to pack/unpack values to/from byte buffers.

pub mod buffer;
mod buffers;
mod error;
mod primitives;
mod size;
mod size_requirement;
pub mod unbuffer;
mod value;

#[doc(inline)]
pub use crate::buffer_unbuffer::{
    error::ArgumentError,
    primitives::IntegerField,
    size::BufferSize,
    size_requirement::SizeRequirement,
    value::{PackValue, UnpackedValue},
};

pub use crate::buffer_unbuffer::{
    buffer::{check_buffer_remaining, pack, BufferResult},
    buffers::{append_buffer, copy_buffer, pad_buffer},
    unbuffer::{check_unbuffer_remaining, unpack, UnbufferResult},
};

pub(crate) use crate::buffer_unbuffer::value::text_to_bytes;
