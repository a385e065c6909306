// Copyright 2024 - developers of the `ferrogram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};

const BLOCK: usize = 16;

fn xor_into(dst: &mut [u8; BLOCK], src: &[u8]) {
    dst.iter_mut().zip(src).for_each(|(d, s)| *d ^= s);
}

/// Encrypt the input plaintext in-place using the AES-IGE mode.
///
/// Panics unless the buffer length is a multiple of the block size.
pub fn ige_encrypt(buffer: &mut [u8], key: &[u8; 32], iv: &[u8; 32]) {
    assert!(buffer.len() % BLOCK == 0);

    let cipher = aes::Aes256::new(GenericArray::from_slice(key));

    // In IGE each block is chained to both the previous ciphertext block
    // (iv1) and the previous plaintext block (iv2).
    let mut prev_cipher: [u8; BLOCK] = iv[..BLOCK].try_into().unwrap();
    let mut prev_plain: [u8; BLOCK] = iv[BLOCK..].try_into().unwrap();

    for block in buffer.chunks_mut(BLOCK) {
        let plain: [u8; BLOCK] = block.try_into().unwrap();

        let mut work = plain;
        xor_into(&mut work, &prev_cipher);
        cipher.encrypt_block(GenericArray::from_mut_slice(&mut work));
        xor_into(&mut work, &prev_plain);

        block.copy_from_slice(&work);
        prev_cipher = work;
        prev_plain = plain;
    }
}

/// Decrypt the input ciphertext using the AES-IGE mode.
///
/// Panics unless the ciphertext length is a multiple of the block size.
pub fn ige_decrypt(ciphertext: &[u8], key: &[u8; 32], iv: &[u8; 32]) -> Vec<u8> {
    assert!(ciphertext.len() % BLOCK == 0);

    let cipher = aes::Aes256::new(GenericArray::from_slice(key));
    let mut plaintext = vec![0; ciphertext.len()];

    let mut prev_cipher: [u8; BLOCK] = iv[..BLOCK].try_into().unwrap();
    let mut prev_plain: [u8; BLOCK] = iv[BLOCK..].try_into().unwrap();

    for (cipher_block, plain_block) in ciphertext.chunks(BLOCK).zip(plaintext.chunks_mut(BLOCK)) {
        let mut work: [u8; BLOCK] = cipher_block.try_into().unwrap();
        xor_into(&mut work, &prev_plain);
        cipher.decrypt_block(GenericArray::from_mut_slice(&mut work));
        xor_into(&mut work, &prev_cipher);

        plain_block.copy_from_slice(&work);
        prev_cipher.copy_from_slice(cipher_block);
        prev_plain = work;
    }

    plaintext
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(len: usize) -> Vec<u8> {
        (0..len).map(|i| i as u8).collect()
    }

    #[test]
    fn encrypt_then_decrypt_is_identity() {
        let key: [u8; 32] = pattern(32).try_into().unwrap();
        let iv: [u8; 32] = pattern(32).try_into().unwrap();
        let plaintext = pattern(64);

        let mut buffer = plaintext.clone();
        ige_encrypt(&mut buffer, &key, &iv);
        assert_ne!(buffer, plaintext);
        assert_eq!(ige_decrypt(&buffer, &key, &iv), plaintext);
    }

    #[test]
    fn known_vector() {
        let key: [u8; 32] = pattern(32).try_into().unwrap();
        let iv: [u8; 32] = pattern(32).try_into().unwrap();

        let mut buffer = pattern(32);
        ige_encrypt(&mut buffer, &key, &iv);
        assert_eq!(
            buffer,
            vec![
                226, 129, 18, 165, 62, 92, 137, 199, 177, 234, 128, 113, 193, 51, 105, 159, 212,
                232, 107, 38, 196, 186, 201, 252, 90, 241, 171, 140, 226, 122, 68, 164,
            ]
        );
    }
}
