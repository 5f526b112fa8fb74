// Copyright 2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! SHA-256 signatures over byte buffers.

use bytes::Bytes;
use sha2::{Digest, Sha256};

/// The SHA-256 digest of `data`, 32 bytes long.
pub fn calculate_signature(data: &[u8]) -> Bytes {
    Bytes::copy_from_slice(&Sha256::digest(data))
}

/// Whether `signature` matches the start of `reference`.
///
/// Only the length of `signature` is compared, so a truncated signature
/// matches the full one it was cut from.
///
/// ```
/// use structpack::{calculate_signature, compare_signatures};
/// let full = calculate_signature(b"abc");
/// assert!(compare_signatures(&full[..8], &full));
/// assert!(!compare_signatures(&full, &full[..8]));
/// ```
pub fn compare_signatures(signature: &[u8], reference: &[u8]) -> bool {
    reference.starts_with(signature)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_digests() {
        assert_eq!(
            &calculate_signature(b"abc")[..],
            &hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")[..]
        );
        assert_eq!(
            &calculate_signature(b"")[..],
            &hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")[..]
        );
    }

    #[test]
    fn prefix_comparison() {
        let full = calculate_signature(b"abc");
        let other = calculate_signature(b"abd");

        assert!(compare_signatures(&full, &full));
        assert!(compare_signatures(&full[..16], &full));
        assert!(compare_signatures(&[], &full));
        assert!(!compare_signatures(&other, &full));
        assert!(!compare_signatures(&other[..4], &full));
        // A longer signature never matches a shorter reference.
        assert!(!compare_signatures(&full, &full[..31]));
    }
}
