// Copyright 2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

use std::borrow::Cow;

use super::{expected_buffer_size, VARIABLE_LENGTH_CODE};
use crate::{buffer_unbuffer::SizeRequirement, Error, Result};

/// Whether a variable length field is being resolved for packing or unpacking.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    /// The buffer is the trailing argument to pack: the field takes all of it.
    Pack,
    /// The buffer is the whole input: the field takes what the fixed part leaves.
    Unpack,
}

/// Convert a trailing variable length code (`V`) into a fixed length code (`<N>s`).
///
/// Formats without a trailing `V` are returned unchanged. A variable part of
/// length zero produces no field at all rather than an empty string field.
///
/// ```
/// use structpack::format::{resolve_variable_length, Direction};
/// assert_eq!(resolve_variable_length("BBV", 6, Direction::Pack).unwrap(), "BB6s");
/// assert_eq!(resolve_variable_length("BBV", 6, Direction::Unpack).unwrap(), "BB4s");
/// assert_eq!(resolve_variable_length("BBV", 2, Direction::Unpack).unwrap(), "BB");
/// ```
///
/// # Errors
/// If the fixed prefix is not a valid format, or when unpacking a buffer
/// shorter than the fixed prefix.
pub fn resolve_variable_length(
    fmt: &str,
    buffer_len: usize,
    direction: Direction,
) -> Result<Cow<'_, str>> {
    let prefix = match fmt.strip_suffix(VARIABLE_LENGTH_CODE) {
        Some(prefix) => prefix,
        None => return Ok(Cow::Borrowed(fmt)),
    };

    let fixed_size = expected_buffer_size(prefix)?;
    let var_size = match direction {
        Direction::Pack => buffer_len,
        Direction::Unpack => {
            buffer_len
                .checked_sub(fixed_size)
                .ok_or(Error::SizeMismatch {
                    required: SizeRequirement::AtLeast(fixed_size),
                    actual: buffer_len,
                })?
        }
    };

    if var_size == 0 {
        Ok(Cow::Borrowed(prefix))
    } else {
        Ok(Cow::Owned(format!("{}{}s", prefix, var_size)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FormatError;

    #[test]
    fn unchanged_without_marker() {
        let resolved = resolve_variable_length("HB", 1, Direction::Pack).unwrap();
        assert_eq!(resolved, "HB");
        assert!(matches!(resolved, Cow::Borrowed(_)));
    }

    #[test]
    fn pack_uses_argument_length() {
        assert_eq!(
            resolve_variable_length("BBV", 6, Direction::Pack).unwrap(),
            "BB6s"
        );
        assert_eq!(resolve_variable_length("V", 3, Direction::Pack).unwrap(), "3s");
    }

    #[test]
    fn unpack_uses_remainder() {
        assert_eq!(
            resolve_variable_length("BBV", 6, Direction::Unpack).unwrap(),
            "BB4s"
        );
        assert_eq!(
            resolve_variable_length("H2xV", 10, Direction::Unpack).unwrap(),
            "H2x6s"
        );
    }

    #[test]
    fn zero_length_omits_field() {
        assert_eq!(
            resolve_variable_length("BBV", 2, Direction::Unpack).unwrap(),
            "BB"
        );
        assert_eq!(resolve_variable_length("BBV", 0, Direction::Pack).unwrap(), "BB");
        assert_eq!(resolve_variable_length("V", 0, Direction::Unpack).unwrap(), "");
    }

    #[test]
    fn short_buffer() {
        match resolve_variable_length("LV", 3, Direction::Unpack) {
            Err(Error::SizeMismatch { required, actual }) => {
                assert_eq!(required, SizeRequirement::AtLeast(4));
                assert_eq!(actual, 3);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn invalid_prefix() {
        assert!(matches!(
            resolve_variable_length("HsV", 8, Direction::Unpack),
            Err(Error::Format(FormatError::MissingCount))
        ));
    }
}
