// Copyright 2024 - developers of the `ferrogram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use ferrogram_crypto::{calc_msg_key, decrypt_data_v1, encrypt_data_v1, AuthKey};

/// A tiny deterministic generator so the buffers differ across lengths
/// without pulling randomness into assertions.
fn pseudo_random(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed.wrapping_mul(0x9e3779b97f4a7c15) | 1;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 24) as u8
        })
        .collect()
}

fn test_key(seed: u8) -> AuthKey {
    let mut data = [0u8; 256];
    data.iter_mut()
        .enumerate()
        .for_each(|(i, x)| *x = (i as u8).wrapping_mul(seed).wrapping_add(seed));
    AuthKey::from_bytes(data)
}

#[test]
fn encrypt_decrypt_round_trip_across_sizes() {
    let key = test_key(3);

    // Word-aligned plaintexts from tiny to a mebibyte.
    for (i, len) in [4usize, 16, 20, 32, 1024, 65536, 1024 * 1024]
        .into_iter()
        .enumerate()
    {
        let plaintext = pseudo_random(len, i as u64);
        let frame = encrypt_data_v1(&plaintext, &key);

        let (decrypted, msg_key) = decrypt_data_v1(&frame, &key).unwrap();
        assert_eq!(&decrypted[..len], &plaintext[..], "length {}", len);
        assert_eq!(msg_key, calc_msg_key(&plaintext), "length {}", len);
    }
}

#[test]
fn different_plaintexts_have_different_message_keys() {
    let a = calc_msg_key(&pseudo_random(64, 1));
    let b = calc_msg_key(&pseudo_random(64, 2));
    assert_ne!(a, b);
}

#[test]
fn auth_key_id_is_the_sha1_tail() {
    let key = test_key(5);
    let sha = {
        use sha1::{Digest, Sha1};
        let mut hasher = Sha1::new();
        hasher.update(key.to_bytes());
        hasher.finalize()
    };
    assert_eq!(key.id().to_le_bytes(), sha[12..20]);
}
