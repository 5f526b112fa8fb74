// Copyright 2018-2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

use std::fmt::{self, Display};

/// Expresses how many bytes a format requires of a buffer being unpacked.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum SizeRequirement {
    Exactly(usize),
    AtLeast(usize),
}

impl SizeRequirement {
    /// Compares a size requirement to the length of a buffer.
    ///
    /// Unlike a streaming requirement, `Exactly(c)` is only satisfied by `c`.
    pub fn satisfied_by(&self, buf_size: usize) -> bool {
        match *self {
            SizeRequirement::Exactly(c) => c == buf_size,
            SizeRequirement::AtLeast(c) => c <= buf_size,
        }
    }
}

impl Display for SizeRequirement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SizeRequirement::Exactly(n) => write!(f, "exactly {}", n),
            SizeRequirement::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn satisfied() {
        assert!(SizeRequirement::Exactly(4).satisfied_by(4));
        assert!(!SizeRequirement::Exactly(4).satisfied_by(5));
        assert!(!SizeRequirement::Exactly(4).satisfied_by(3));
        assert!(SizeRequirement::AtLeast(4).satisfied_by(5));
        assert!(!SizeRequirement::AtLeast(4).satisfied_by(3));
    }

    #[test]
    fn display() {
        assert_eq!(SizeRequirement::Exactly(8).to_string(), "exactly 8");
        assert_eq!(SizeRequirement::AtLeast(2).to_string(), "at least 2");
    }
}
