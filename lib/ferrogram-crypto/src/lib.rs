// Copyright 2024 - developers of the `ferrogram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Cryptographic primitives used by the wire engine: AES-IGE, the
//! SHA1-based message-key scheme, RSA with an integrity tag, PQ
//! factorization and the authorization-key type.
pub mod aes;
mod auth_key;
pub mod dh;
pub mod factorize;
pub mod hex;
pub mod password;
pub mod rsa;
pub mod sha;

pub use auth_key::AuthKey;
use getrandom::getrandom;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// The ciphertext is either too small or not padded correctly.
    InvalidBuffer,

    /// The frame carries the ID of a different authorization key.
    AuthKeyMismatch,
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::InvalidBuffer => write!(f, "invalid ciphertext buffer length"),
            Error::AuthKeyMismatch => write!(f, "server authkey mismatches with ours"),
        }
    }
}

pub enum Side {
    Client,
    Server,
}

impl Side {
    // "where x = 0 for messages from client to server and x = 8 for those
    // from server to client."
    fn x(&self) -> usize {
        match *self {
            Side::Client => 0,
            Side::Server => 8,
        }
    }
}

/// The authenticator for an encrypted message: the middle bytes of the
/// SHA1 over the plaintext region, excluding padding.
pub fn calc_msg_key(plaintext: &[u8]) -> [u8; 16] {
    let sha = sha::sha1(&[plaintext]);
    sha[4..20].try_into().unwrap()
}

/// Calculate the AES key and IV for a message, following the original
/// (SHA1-based) key-derivation scheme, returning the pair `(key, iv)`
/// for use in AES-IGE mode.
pub fn calc_key(auth_key: &AuthKey, msg_key: &[u8; 16], side: Side) -> ([u8; 32], [u8; 32]) {
    let x = side.x();
    let key = &auth_key.data;

    // sha1_a = SHA1 (msg_key + substr (auth_key, x, 32));
    let sha1_a = sha::sha1(&[&msg_key[..], &key[x..x + 32]]);

    // sha1_b = SHA1 (substr (auth_key, 32+x, 16) + msg_key + substr (auth_key, 48+x, 16));
    let sha1_b = sha::sha1(&[
        &key[32 + x..32 + x + 16],
        &msg_key[..],
        &key[48 + x..48 + x + 16],
    ]);

    // sha1_c = SHA1 (substr (auth_key, 64+x, 32) + msg_key);
    let sha1_c = sha::sha1(&[&key[64 + x..64 + x + 32], &msg_key[..]]);

    // sha1_d = SHA1 (msg_key + substr (auth_key, 96+x, 32));
    let sha1_d = sha::sha1(&[&msg_key[..], &key[96 + x..96 + x + 32]]);

    // aes_key = substr (sha1_a, 0, 8) + substr (sha1_b, 8, 12) + substr (sha1_c, 4, 12);
    let aes_key = {
        let mut buffer = [0; 32];
        buffer[0..8].copy_from_slice(&sha1_a[0..8]);
        buffer[8..20].copy_from_slice(&sha1_b[8..20]);
        buffer[20..32].copy_from_slice(&sha1_c[4..16]);
        buffer
    };

    // aes_iv = substr (sha1_a, 8, 12) + substr (sha1_b, 0, 8) + substr (sha1_c, 16, 4) + substr (sha1_d, 0, 8);
    let aes_iv = {
        let mut buffer = [0; 32];
        buffer[0..12].copy_from_slice(&sha1_a[8..20]);
        buffer[12..20].copy_from_slice(&sha1_b[0..8]);
        buffer[20..24].copy_from_slice(&sha1_c[16..20]);
        buffer[24..32].copy_from_slice(&sha1_d[0..8]);
        buffer
    };

    (aes_key, aes_iv)
}

// Inner body of `encrypt_data_v1`, separated so tests can pin the padding.
fn do_encrypt_data_v1(plaintext: &[u8], auth_key: &AuthKey, random_padding: &[u8; 16]) -> Vec<u8> {
    let msg_key = calc_msg_key(plaintext);
    let (key, iv) = calc_key(auth_key, &msg_key, Side::Client);

    // Pad the plaintext region with up to 15 random bytes so its length
    // becomes a multiple of the AES block size.
    let pad_len = (16 - (plaintext.len() % 16)) % 16;
    let mut buffer = Vec::with_capacity(8 + 16 + plaintext.len() + pad_len);
    buffer.extend(auth_key.key_id);
    buffer.extend(msg_key);
    buffer.extend(plaintext);
    buffer.extend(&random_padding[..pad_len]);

    aes::ige_encrypt(&mut buffer[24..], &key, &iv);
    buffer
}

/// Encrypt the plaintext region of a message (everything from the salt
/// through the payload) and frame it with `auth_key_id ‖ msg_key`.
pub fn encrypt_data_v1(plaintext: &[u8], auth_key: &AuthKey) -> Vec<u8> {
    let random_padding = {
        let mut rnd = [0; 16];
        getrandom(&mut rnd).expect("failed to generate a secure padding");
        rnd
    };

    do_encrypt_data_v1(plaintext, auth_key, &random_padding)
}

/// The inverse of [`encrypt_data_v1`]: strips and checks the key id,
/// and returns the decrypted region together with the frame's `msg_key`.
///
/// The message key cannot be verified here because the padding length is
/// only known once `msg_len` has been parsed out of the plaintext; the
/// caller performs that check.
pub fn decrypt_data_v1(ciphertext: &[u8], auth_key: &AuthKey) -> Result<(Vec<u8>, [u8; 16]), Error> {
    if ciphertext.len() < 24 || (ciphertext.len() - 24) % 16 != 0 {
        return Err(Error::InvalidBuffer);
    }

    if auth_key.key_id != ciphertext[..8] {
        return Err(Error::AuthKeyMismatch);
    }

    let msg_key: [u8; 16] = ciphertext[8..24].try_into().unwrap();
    let (key, iv) = calc_key(auth_key, &msg_key, Side::Server);
    let plaintext = aes::ige_decrypt(&ciphertext[24..], &key, &iv);

    Ok((plaintext, msg_key))
}

/// Generate the AES key and initialization vector from the server nonce
/// and the new client nonce. This is done after the DH exchange.
pub fn generate_key_data_from_nonce(
    server_nonce: &[u8; 16],
    new_nonce: &[u8; 32],
) -> ([u8; 32], [u8; 32]) {
    let hash1 = sha::sha1(&[&new_nonce[..], &server_nonce[..]]);
    let hash2 = sha::sha1(&[&server_nonce[..], &new_nonce[..]]);
    let hash3 = sha::sha1(&[&new_nonce[..], &new_nonce[..]]);

    // key = hash1 + hash2[:12]
    let key = {
        let mut buffer = [0; 32];
        buffer[..hash1.len()].copy_from_slice(&hash1);
        buffer[hash1.len()..].copy_from_slice(&hash2[..12]);
        buffer
    };

    // iv = hash2[12:20] + hash3 + new_nonce[:4]
    let iv = {
        let mut buffer = [0; 32];
        buffer[..8].copy_from_slice(&hash2[12..]);
        buffer[8..28].copy_from_slice(&hash3);
        buffer[28..].copy_from_slice(&new_nonce[..4]);
        buffer
    };

    (key, iv)
}

/// Encrypt data using AES-IGE, padding the plaintext with random bytes
/// if it does not span whole blocks.
pub fn encrypt_ige(plaintext: &[u8], key: &[u8; 32], iv: &[u8; 32]) -> Vec<u8> {
    let mut padded = if plaintext.len() % 16 == 0 {
        plaintext.to_vec()
    } else {
        let pad_len = 16 - (plaintext.len() % 16);
        let mut padded = Vec::with_capacity(plaintext.len() + pad_len);
        padded.extend(plaintext);

        let mut buffer = vec![0; pad_len];
        getrandom(&mut buffer).expect("failed to generate random padding for encryption");
        padded.extend(&buffer);
        padded
    };

    aes::ige_encrypt(padded.as_mut(), key, iv);
    padded
}

/// Decrypt data using AES-IGE. Panics if the ciphertext is not padded
/// to 16 bytes.
pub fn decrypt_ige(padded_ciphertext: &[u8], key: &[u8; 32], iv: &[u8; 32]) -> Vec<u8> {
    aes::ige_decrypt(padded_ciphertext, key, iv)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_auth_key() -> AuthKey {
        let mut buffer = [0u8; 256];
        buffer
            .iter_mut()
            .enumerate()
            .for_each(|(i, x)| *x = i as u8);

        AuthKey::from_bytes(buffer)
    }

    fn get_test_msg_key() -> [u8; 16] {
        let mut buffer = [0u8; 16];
        buffer
            .iter_mut()
            .enumerate()
            .for_each(|(i, x)| *x = i as u8);

        buffer
    }

    #[test]
    fn client_and_server_keys_differ() {
        let auth_key = get_test_auth_key();
        let msg_key = get_test_msg_key();

        let client = calc_key(&auth_key, &msg_key, Side::Client);
        let server = calc_key(&auth_key, &msg_key, Side::Server);
        assert_ne!(client, server);
    }

    #[test]
    fn frame_starts_with_key_id_and_msg_key() {
        let auth_key = get_test_auth_key();
        let plaintext: Vec<u8> = (0..48u8).collect();

        let frame = do_encrypt_data_v1(&plaintext, &auth_key, &[0; 16]);
        assert_eq!(&frame[..8], &auth_key.key_id);
        assert_eq!(&frame[8..24], &calc_msg_key(&plaintext));
        assert_eq!((frame.len() - 24) % 16, 0);
    }

    #[test]
    fn encrypt_then_decrypt_v1_round_trip() {
        let auth_key = get_test_auth_key();

        for len in [4usize, 20, 48, 52, 1024] {
            let plaintext: Vec<u8> = (0..len).map(|i| (i * 3) as u8).collect();
            let frame = encrypt_data_v1(&plaintext, &auth_key);
            let (decrypted, msg_key) = decrypt_data_v1(&frame, &auth_key).unwrap();

            // The decrypted region includes padding; the prefix must match.
            assert_eq!(&decrypted[..plaintext.len()], &plaintext[..]);
            assert!(decrypted.len() - plaintext.len() < 16);
            assert_eq!(msg_key, calc_msg_key(&plaintext));
        }
    }

    #[test]
    fn foreign_key_id_is_rejected() {
        let auth_key = get_test_auth_key();
        let other_key = AuthKey::from_bytes([0x5a; 256]);

        let frame = encrypt_data_v1(&[0; 32], &auth_key);
        assert_eq!(
            decrypt_data_v1(&frame, &other_key).unwrap_err(),
            Error::AuthKeyMismatch
        );
    }

    #[test]
    fn truncated_frames_are_rejected() {
        let auth_key = get_test_auth_key();
        assert_eq!(
            decrypt_data_v1(&[0; 23], &auth_key).unwrap_err(),
            Error::InvalidBuffer
        );
        assert_eq!(
            decrypt_data_v1(&[0; 30], &auth_key).unwrap_err(),
            Error::InvalidBuffer
        );
    }

    #[test]
    fn key_from_nonce() {
        let server_nonce = {
            let mut buffer = [0u8; 16];
            buffer
                .iter_mut()
                .enumerate()
                .for_each(|(i, x)| *x = i as u8);
            buffer
        };
        let new_nonce = {
            let mut buffer = [0u8; 32];
            buffer
                .iter_mut()
                .enumerate()
                .for_each(|(i, x)| *x = i as u8);
            buffer
        };

        let (key, iv) = generate_key_data_from_nonce(&server_nonce, &new_nonce);
        assert_eq!(
            key,
            [
                7, 88, 241, 83, 59, 97, 93, 36, 246, 232, 169, 74, 111, 203, 238, 10, 85, 234, 171,
                34, 23, 215, 41, 92, 169, 33, 61, 26, 45, 125, 22, 166
            ]
        );
        assert_eq!(
            iv,
            [
                90, 132, 16, 142, 152, 5, 101, 108, 232, 100, 7, 14, 22, 110, 98, 24, 246, 120, 62,
                133, 17, 71, 26, 90, 183, 128, 44, 242, 0, 1, 2, 3
            ]
        );
    }
}
