// Copyright 2018-2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

use thiserror::Error;

use crate::{buffer_unbuffer::ArgumentError, format::FormatError, SizeRequirement};

/// Error type for the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid format string: {0}")]
    Format(#[from] FormatError),
    #[error("invalid argument: {0}")]
    Argument(#[from] ArgumentError),
    #[error("buffer size mismatch: required {required}, got {actual}")]
    SizeMismatch {
        required: SizeRequirement,
        actual: usize,
    },
    #[error("insufficient space: {required} bytes needed, {available} available")]
    InsufficientSpace { required: usize, available: usize },
    #[error("source range {offset}+{length} exceeds its {available} bytes")]
    SourceOutOfRange {
        offset: usize,
        length: usize,
        available: usize,
    },
    #[error("unknown stream name: {0:?}")]
    UnknownStreamName(String),
    #[error("invalid stream id: {0:?}")]
    InvalidStreamId(String),
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        let e: Error = FormatError::MissingCount.into();
        assert!(matches!(e, Error::Format(FormatError::MissingCount)));

        let e: Error = ArgumentError::NonByteCharacter('\u{263A}').into();
        assert!(matches!(e, Error::Argument(_)));
    }

    #[test]
    fn messages() {
        let e = Error::SizeMismatch {
            required: SizeRequirement::AtLeast(4),
            actual: 2,
        };
        assert_eq!(e.to_string(), "buffer size mismatch: required at least 4, got 2");
    }
}
