// Copyright 2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! Human-readable identifiers ("slugs") for devices and their streamers, and
//! random unique ids.

use uuid::Uuid;

/// Lowercase hexadecimal, left-padded with zeros to at least `width` digits.
pub fn number_to_hex_string(value: u64, width: usize) -> String {
    format!("{:0width$x}", value, width = width)
}

/// Device id as 16 hex digits in four dash-separated groups.
fn device_groups(device_id: u64) -> String {
    let hex = number_to_hex_string(device_id, 16);
    format!(
        "{}-{}-{}-{}",
        &hex[0..4],
        &hex[4..8],
        &hex[8..12],
        &hex[12..16]
    )
}

/// Slug for a device: `d--XXXX-XXXX-XXXX-XXXX`.
///
/// ```
/// assert_eq!(structpack::device_id_to_slug(0xab), "d--0000-0000-0000-00ab");
/// ```
pub fn device_id_to_slug(device_id: u64) -> String {
    format!("d--{}", device_groups(device_id))
}

/// Slug for one streamer of a device: `t--XXXX-XXXX-XXXX-XXXX--YYYY`.
pub fn create_streamer_slug(device_id: u64, streamer: u16) -> String {
    format!(
        "t--{}--{}",
        device_groups(device_id),
        number_to_hex_string(streamer.into(), 4)
    )
}

/// A random (version 4) UUID in lowercase hyphenated form.
pub fn guid() -> String {
    Uuid::new_v4().to_string()
}
