// Copyright 2018-2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! Trait describing the size of things we can read from or write to a buffer.

/// Trait for computing the buffer size needed for things
/// that can be "buffered" (serialized to a byte buffer).
pub trait BufferSize {
    /// Indicates the number of bytes required in the buffer to store this.
    fn buffer_size(&self) -> usize;
}
