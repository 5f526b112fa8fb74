// Copyright 2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! The units a format string is made of.

use std::fmt::{self, Display};

use crate::buffer_unbuffer::BufferSize;

/// The kind of a single field in a binary layout.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum FieldCode {
    /// `B`: unsigned 8 bit integer
    U8,
    /// `H`: unsigned 16 bit little-endian integer
    U16,
    /// `L`: unsigned 32 bit little-endian integer
    U32,
    /// `l`: signed 32 bit little-endian integer
    I32,
    /// `s`: fixed length string or byte field, must carry a count
    FixedBytes,
    /// `x`: zero-filled padding, discarded when unpacking
    Padding,
}

impl FieldCode {
    /// Map a format character to its code, if it is one.
    pub fn from_char(c: char) -> Option<FieldCode> {
        match c {
            'B' => Some(FieldCode::U8),
            'H' => Some(FieldCode::U16),
            'L' => Some(FieldCode::U32),
            'l' => Some(FieldCode::I32),
            's' => Some(FieldCode::FixedBytes),
            'x' => Some(FieldCode::Padding),
            _ => None,
        }
    }

    /// The character spelling this code in a format string.
    pub fn as_char(self) -> char {
        match self {
            FieldCode::U8 => 'B',
            FieldCode::U16 => 'H',
            FieldCode::U32 => 'L',
            FieldCode::I32 => 'l',
            FieldCode::FixedBytes => 's',
            FieldCode::Padding => 'x',
        }
    }

    /// Width in bytes of the integer codes, `None` for codes sized by their count.
    pub fn integer_width(self) -> Option<usize> {
        match self {
            FieldCode::U8 => Some(1),
            FieldCode::U16 => Some(2),
            FieldCode::U32 | FieldCode::I32 => Some(4),
            FieldCode::FixedBytes | FieldCode::Padding => None,
        }
    }
}

impl Display for FieldCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One parsed unit of a format string.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FieldToken {
    code: FieldCode,
    count: usize,
}

impl FieldToken {
    /// Construct a token.
    ///
    /// Validation of the count happens in the parser; this only records it.
    pub(crate) fn new(code: FieldCode, count: usize) -> FieldToken {
        FieldToken { code, count }
    }

    pub fn code(&self) -> FieldCode {
        self.code
    }

    /// The numeric prefix, 0 when there was none.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of logical arguments this field reads or produces.
    pub fn arguments_consumed(&self) -> usize {
        match self.code {
            FieldCode::Padding => 0,
            _ => 1,
        }
    }
}

impl BufferSize for FieldToken {
    fn buffer_size(&self) -> usize {
        match self.code {
            FieldCode::FixedBytes => self.count,
            FieldCode::Padding => self.count.max(1),
            code => code.integer_width().unwrap_or_default(),
        }
    }
}

impl Display for FieldToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count != 0 {
            write!(f, "{}", self.count)?;
        }
        write!(f, "{}", self.code)
    }
}
