// Copyright 2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! The format string mini-language describing a binary layout.
//!
//! | code  | meaning                                   | size         |
//! |-------|-------------------------------------------|--------------|
//! | `B`   | unsigned 8 bit integer                    | 1            |
//! | `H`   | unsigned 16 bit little-endian integer     | 2            |
//! | `L`   | unsigned 32 bit little-endian integer     | 4            |
//! | `l`   | signed 32 bit little-endian integer       | 4            |
//! | `Ns`  | fixed length string or bytes, N required  | N            |
//! | `[N]x`| padding, zero on pack, dropped on unpack  | max(N, 1)    |
//! | `V`   | trailing variable length bytes            | rest of data |

mod error;
mod parse;
mod size;
mod token;
mod variable;

#[doc(inline)]
pub use crate::format::{
    error::FormatError,
    parse::{parse_format, ParsedFormat, Tokenizer, VARIABLE_LENGTH_CODE},
    size::{expected_argument_count, expected_buffer_size},
    token::{FieldCode, FieldToken},
    variable::{resolve_variable_length, Direction},
};
