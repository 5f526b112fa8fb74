// Copyright 2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! Tokenizer for the format string mini-language.

use std::{
    fmt::{self, Display},
    iter::Peekable,
    str::{Chars, FromStr},
};

use super::{FieldCode, FieldToken, FormatError};
use crate::buffer_unbuffer::BufferSize;

/// The marker for a trailing variable length field.
pub const VARIABLE_LENGTH_CODE: char = 'V';

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum ScanState {
    /// No digits pending.
    AwaitingCode,
    /// Digits seen, accumulated so far.
    Counting(usize),
}

impl ScanState {
    fn count(self) -> usize {
        match self {
            ScanState::AwaitingCode => 0,
            ScanState::Counting(n) => n,
        }
    }
}

/// Finite-state scanner yielding one `FieldToken` per format code.
///
/// Stops after the first error.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    chars: Peekable<Chars<'a>>,
    state: ScanState,
    failed: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(fmt: &'a str) -> Tokenizer<'a> {
        Tokenizer {
            chars: fmt.chars().peekable(),
            state: ScanState::AwaitingCode,
            failed: false,
        }
    }

    fn accept_digit(&mut self, digit: u32) -> Result<(), FormatError> {
        let count = self
            .state
            .count()
            .checked_mul(10)
            .and_then(|n| n.checked_add(digit as usize))
            .ok_or(FormatError::CountOverflow)?;
        self.state = ScanState::Counting(count);
        Ok(())
    }

    fn accept_code(&mut self, c: char) -> Result<FieldToken, FormatError> {
        let count = self.state.count();
        self.state = ScanState::AwaitingCode;

        let code = match FieldCode::from_char(c) {
            Some(code) => code,
            None if c == VARIABLE_LENGTH_CODE => {
                return Err(if self.chars.peek().is_none() {
                    FormatError::UnresolvedVariableLength
                } else {
                    FormatError::MisplacedVariableLength
                });
            }
            None => return Err(FormatError::UnknownCode(c)),
        };

        match code {
            FieldCode::FixedBytes if count == 0 => Err(FormatError::MissingCount),
            FieldCode::FixedBytes | FieldCode::Padding => Ok(FieldToken::new(code, count)),
            _ if count != 0 => Err(FormatError::UnexpectedCount { code, count }),
            _ => Ok(FieldToken::new(code, 0)),
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<FieldToken, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let result = match self.chars.next() {
                Some(c) => match c.to_digit(10) {
                    Some(digit) => match self.accept_digit(digit) {
                        Ok(()) => continue,
                        Err(e) => Err(e),
                    },
                    None => self.accept_code(c),
                },
                None => match self.state {
                    ScanState::AwaitingCode => return None,
                    ScanState::Counting(n) => {
                        self.state = ScanState::AwaitingCode;
                        Err(FormatError::TrailingCount(n))
                    }
                },
            };
            self.failed = result.is_err();
            return Some(result);
        }
    }
}

/// An immutable, validated sequence of field tokens.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Default)]
pub struct ParsedFormat {
    tokens: Vec<FieldToken>,
}

impl ParsedFormat {
    pub fn tokens(&self) -> &[FieldToken] {
        &self.tokens[..]
    }

    /// Total number of logical arguments packed from, or unpacked into, this layout.
    pub fn argument_count(&self) -> usize {
        self.tokens.iter().map(FieldToken::arguments_consumed).sum()
    }
}

impl BufferSize for ParsedFormat {
    fn buffer_size(&self) -> usize {
        self.tokens.iter().map(BufferSize::buffer_size).sum()
    }
}

impl FromStr for ParsedFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = Tokenizer::new(s).collect::<Result<Vec<_>, _>>()?;
        Ok(ParsedFormat { tokens })
    }
}

/// Canonical spelling, e.g. `01xB` becomes `1xB`.
impl Display for ParsedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            Display::fmt(token, f)?;
        }
        Ok(())
    }
}

/// Parse a format string into its field tokens.
///
/// ```
/// use structpack::format::{parse_format, FieldCode};
/// let parsed = parse_format("H18s").unwrap();
/// assert_eq!(parsed.tokens().len(), 2);
/// assert_eq!(parsed.tokens()[1].code(), FieldCode::FixedBytes);
/// assert_eq!(parsed.tokens()[1].count(), 18);
/// ```
pub fn parse_format(fmt: &str) -> Result<ParsedFormat, FormatError> {
    fmt.parse()
}
