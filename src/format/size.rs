// Copyright 2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! Sizes derived from a format string.
//!
//! Both reductions go through `parse_format` so that they always agree with
//! what the encoder and decoder actually do. Padding bytes always count
//! toward the byte size.

use super::{parse_format, FormatError};
use crate::buffer_unbuffer::BufferSize;

/// Determine how large a buffer is given its format string.
///
/// Alignment is not taken into account: insert `x` padding where a
/// platform layout needs it.
///
/// ```
/// use structpack::format::expected_buffer_size;
/// assert_eq!(expected_buffer_size("BBHL").unwrap(), 8);
/// assert_eq!(expected_buffer_size("H18s").unwrap(), 20);
/// ```
pub fn expected_buffer_size(fmt: &str) -> Result<usize, FormatError> {
    Ok(parse_format(fmt)?.buffer_size())
}

/// Determine how many logical values a format string packs or unpacks.
pub fn expected_argument_count(fmt: &str) -> Result<usize, FormatError> {
    Ok(parse_format(fmt)?.argument_count())
}
