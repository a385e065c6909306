// Copyright 2024 - developers of the `ferrogram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::sha::sha1;
use num_bigint::BigUint;

/// A server RSA public key.
#[derive(Clone)]
pub struct Key {
    n: BigUint,
    e: BigUint,
}

impl Key {
    /// Creates a key from the decimal representation of its modulus and
    /// public exponent.
    pub fn new(n: &str, e: &str) -> Option<Self> {
        Some(Self {
            n: BigUint::parse_bytes(n.as_bytes(), 10)?,
            e: BigUint::parse_bytes(e.as_bytes(), 10)?,
        })
    }

    /// The 64-bit fingerprint the server uses to reference this key:
    /// the low 64 bits of the SHA1 over the serialized `(n, e)` pair.
    pub fn fingerprint(&self) -> i64 {
        let mut buffer = Vec::new();
        extend_tl_bytes(&mut buffer, &self.n.to_bytes_be());
        extend_tl_bytes(&mut buffer, &self.e.to_bytes_be());

        let sha = sha1(&[&buffer[..]]);
        i64::from_le_bytes(sha[12..20].try_into().unwrap())
    }
}

// The fingerprint hashes the TL representation of the key, so the
// byte-string framing has to match the wire codec exactly.
fn extend_tl_bytes(buffer: &mut Vec<u8>, data: &[u8]) {
    let len = if data.len() <= 253 {
        buffer.push(data.len() as u8);
        data.len() + 1
    } else {
        buffer.push(254);
        buffer.extend(&(data.len() as u32).to_le_bytes()[..3]);
        data.len()
    };
    buffer.extend(data);
    buffer.extend(std::iter::repeat(0).take((4 - (len % 4)) % 4));
}

/// Encrypt the given data with a leading SHA1 integrity tag, using RSA.
///
/// The plaintext is `SHA1(data) ‖ data ‖ random padding` for a total of
/// 255 bytes, interpreted as a big-endian number and raised to the public
/// exponent. The result always spans exactly 256 bytes.
pub fn encrypt_hashed(data: &[u8], key: &Key, random_bytes: &[u8]) -> Vec<u8> {
    assert!(data.len() <= 255 - 20);

    let mut plaintext = Vec::with_capacity(255);
    plaintext.extend(sha1(&[data]));
    plaintext.extend(data);

    let padding = 255 - plaintext.len();
    assert!(random_bytes.len() >= padding);
    plaintext.extend(&random_bytes[..padding]);

    let payload = BigUint::from_bytes_be(&plaintext);
    let encrypted = payload.modpow(&key.e, &key.n);

    let mut block = encrypted.to_bytes_be();
    while block.len() < 256 {
        block.insert(0, 0);
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_key() -> Key {
        // The production key that the registry ships by default.
        Key::new(
            "29379598170669337022986177149456128565388431120058863768162556424047512191330847455146576344487764408661701890505066208632169112269581063774293102577308490531282748465986139880977280302242772832972539403531316010870401287642763009136156734339538042419388722777357134487746169093539093850251243897188928735903389451772730245253062963384108812842079887538976360465290946139638691491496062099570836476454855996319192747663615955633778034897140982517446405334423701359108810182097749467210509584293428076654573384828809574217079944388301239431309115013843331317877374435868468779972014486325557807783825502498215169806323",
            "65537",
        )
        .unwrap()
    }

    #[test]
    fn production_key_fingerprint() {
        assert_eq!(test_key().fingerprint(), -3414540481677951611);
    }

    #[test]
    fn encrypted_block_is_always_256_bytes() {
        let random = [7u8; 256];
        let block = encrypt_hashed(b"hello", &test_key(), &random);
        assert_eq!(block.len(), 256);
    }
}
