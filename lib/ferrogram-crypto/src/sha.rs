// Copyright 2024 - developers of the `ferrogram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Digest helpers.
//!
//! The protocol hashes concatenations of byte regions everywhere, and
//! materializing the concatenation first would copy key material
//! around. These helpers feed each region to the hasher in turn and
//! hand back the digest as a plain array.
use sha1::Digest;

/// SHA-1 over the concatenation of `parts`.
pub fn sha1(parts: &[&[u8]]) -> [u8; 20] {
    let mut hasher = sha1::Sha1::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// SHA-256 over the concatenation of `parts`.
pub fn sha256(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = sha2::Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_input_hashes_like_contiguous_input() {
        let data = b"some bytes worth hashing";
        let whole = sha1(&[data]);
        let split = sha1(&[&data[..7], &data[7..]]);
        assert_eq!(whole, split);

        let whole = sha256(&[data]);
        let split = sha256(&[&data[..3], &data[3..17], &data[17..]]);
        assert_eq!(whole, split);
    }

    #[test]
    fn empty_input_is_the_empty_digest() {
        // Well-known digests of the empty string.
        assert_eq!(
            crate::hex::to_hex(&sha1(&[])),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
        assert_eq!(
            crate::hex::to_hex(&sha256(&[])),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
