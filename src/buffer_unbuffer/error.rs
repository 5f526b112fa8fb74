// Copyright 2018-2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

use thiserror::Error;

use crate::format::FieldCode;

/// Error type returned when the values handed to `pack` do not fit the format.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ArgumentError {
    #[error("format expects {expected} arguments, got {actual}")]
    WrongArgumentCount { expected: usize, actual: usize },
    #[error("value {value} is out of range for format code '{code}' ({min}..={max})")]
    OutOfRange {
        code: FieldCode,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("argument {index} is {found}, but format code '{code}' needs {expected}")]
    TypeMismatch {
        index: usize,
        code: FieldCode,
        expected: &'static str,
        found: &'static str,
    },
    #[error("byte buffer size does not match format code: expected={expected}, actual={actual}")]
    BufferLengthMismatch { expected: usize, actual: usize },
    #[error("string of length {actual} is longer than its {expected} byte field")]
    TextTooLong { expected: usize, actual: usize },
    #[error("character {0:?} does not fit in a single byte")]
    NonByteCharacter(char),
}
