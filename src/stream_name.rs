// Copyright 2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! Mapping of textual stream names to their 16-bit stream identifiers.
//!
//! A stream id packs the kind into bits 12-15, a "system" flag into bit 11
//! and the index into bits 0-10.

use std::fmt::{self, Display};

use crate::{Error, Result};

/// Largest index a stream id can hold.
pub const MAX_STREAM_INDEX: u16 = 0x07FF;

const SYSTEM_PREFIX: &str = "system";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamKind {
    BufferedNode = 0,
    UnbufferedNode = 1,
    Constant = 2,
    Input = 3,
    Counter = 4,
    Output = 5,
}

impl StreamKind {
    const ALL: [StreamKind; 6] = [
        StreamKind::BufferedNode,
        StreamKind::UnbufferedNode,
        StreamKind::Constant,
        StreamKind::Input,
        StreamKind::Counter,
        StreamKind::Output,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StreamKind::BufferedNode => "buffered node",
            StreamKind::UnbufferedNode => "unbuffered node",
            StreamKind::Constant => "constant",
            StreamKind::Input => "input",
            StreamKind::Counter => "counter",
            StreamKind::Output => "output",
        }
    }

    pub fn from_name(name: &str) -> Option<StreamKind> {
        StreamKind::ALL.iter().copied().find(|kind| kind.name() == name)
    }
}

impl Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Convert a name like `"output 1"` or `"system buffered node 3"` to its
/// stream id.
///
/// ```
/// use structpack::map_stream_name;
/// assert_eq!(map_stream_name("output 1").unwrap(), 0x5001);
/// assert_eq!(map_stream_name("system input 3").unwrap(), 0x3803);
/// ```
///
/// # Errors
/// `Error::UnknownStreamName` if the kind is not recognized, and
/// `Error::InvalidStreamId` if the index is not a number up to
/// `MAX_STREAM_INDEX`.
pub fn map_stream_name(name: &str) -> Result<u16> {
    let mut words: Vec<&str> = name.split_whitespace().collect();
    let system = words.first() == Some(&SYSTEM_PREFIX);
    if system {
        words.remove(0);
    }
    let (index, kind_words) = words
        .split_last()
        .ok_or_else(|| Error::UnknownStreamName(name.to_owned()))?;

    let kind_name = kind_words.join(" ");
    let kind = StreamKind::from_name(&kind_name).ok_or(Error::UnknownStreamName(kind_name))?;
    let index = index
        .parse::<u16>()
        .ok()
        .filter(|&i| i <= MAX_STREAM_INDEX)
        .ok_or_else(|| Error::InvalidStreamId((*index).to_owned()))?;

    Ok(((kind as u16) << 12) | (u16::from(system) << 11) | index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(map_stream_name("buffered node 10").unwrap(), 0x000A);
        assert_eq!(map_stream_name("unbuffered node 2").unwrap(), 0x1002);
        assert_eq!(map_stream_name("constant 0").unwrap(), 0x2000);
        assert_eq!(map_stream_name("input 3").unwrap(), 0x3003);
        assert_eq!(map_stream_name("counter 4").unwrap(), 0x4004);
        assert_eq!(map_stream_name("output 1").unwrap(), 0x5001);
    }

    #[test]
    fn system_flag() {
        assert_eq!(map_stream_name("system output 1").unwrap(), 0x5801);
        assert_eq!(map_stream_name("system buffered node 2047").unwrap(), 0x0FFF);
    }

    #[test]
    fn unknown_kind() {
        assert_eq!(
            map_stream_name("bogus 1"),
            Err(Error::UnknownStreamName("bogus".to_owned()))
        );
        assert_eq!(
            map_stream_name("buffered 1"),
            Err(Error::UnknownStreamName("buffered".to_owned()))
        );
        assert!(matches!(
            map_stream_name(""),
            Err(Error::UnknownStreamName(_))
        ));
        assert!(matches!(
            map_stream_name("output"),
            Err(Error::UnknownStreamName(_))
        ));
    }

    #[test]
    fn bad_index() {
        assert_eq!(
            map_stream_name("input x"),
            Err(Error::InvalidStreamId("x".to_owned()))
        );
        assert_eq!(
            map_stream_name("input 2048"),
            Err(Error::InvalidStreamId("2048".to_owned()))
        );
        assert!(map_stream_name("input -1").is_err());
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in StreamKind::ALL.iter() {
            assert_eq!(StreamKind::from_name(kind.name()), Some(*kind));
            assert_eq!(kind.to_string(), kind.name());
        }
    }
}
