// Copyright 2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

use thiserror::Error;

use super::FieldCode;

/// Error type returned when a format string is malformed.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum FormatError {
    #[error("format code '{code}' does not take a count, got {count}")]
    UnexpectedCount { code: FieldCode, count: usize },
    #[error("format code 's' must be prefixed with a non-zero count")]
    MissingCount,
    #[error("format string ended in a count with no format code: {0}")]
    TrailingCount(usize),
    #[error("unknown format code '{0}'")]
    UnknownCode(char),
    #[error("variable length code 'V' may only be the last format code")]
    MisplacedVariableLength,
    #[error("variable length code 'V' must be resolved against a buffer before parsing")]
    UnresolvedVariableLength,
    #[error("count in format string is too large")]
    CountOverflow,
}
