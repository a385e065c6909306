// Copyright 2024 - developers of the `ferrogram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Validation of server-provided Diffie-Hellman parameters.
use num_bigint::BigUint;
use num_traits::One;

/// Checks that `dh_prime` is a safe 2048-bit prime and that the generator
/// `g` meets the congruence conditions that make it a generator of the
/// full quadratic-residue subgroup:
///
/// * `g = 2`: `dh_prime mod 8 = 7`
/// * `g = 3`: `dh_prime mod 3 = 2`
/// * `g = 4`: no extra condition
/// * `g = 5`: `dh_prime mod 5 ∈ {1, 4}`
/// * `g = 6`: `dh_prime mod 24 ∈ {19, 23}`
/// * `g = 7`: `dh_prime mod 7 ∈ {3, 5, 6}`
pub fn check_dh_prime(dh_prime: &BigUint, g: i32) -> bool {
    if dh_prime.bits() != 2048 {
        return false;
    }

    let rem = |m: u32| (dh_prime % BigUint::from(m)).to_u32_digits().first().copied().unwrap_or(0);

    let generator_ok = match g {
        2 => rem(8) == 7,
        3 => rem(3) == 2,
        4 => true,
        5 => matches!(rem(5), 1 | 4),
        6 => matches!(rem(24), 19 | 23),
        7 => matches!(rem(7), 3 | 5 | 6),
        _ => false,
    };
    if !generator_ok {
        return false;
    }

    glass_pumpkin::safe_prime::check(dh_prime)
}

/// Checks that `1 < value < dh_prime - 1`. Both sides must validate the
/// public values they exchange.
pub fn check_g_in_range(value: &BigUint, dh_prime: &BigUint) -> bool {
    let one = BigUint::one();
    &one < value && value < &(dh_prime - &one)
}

/// The stricter range recommendation, `2^{2048-64} ≤ value ≤
/// dh_prime - 2^{2048-64}`, which also guarantees a large modular order.
pub fn check_g_in_safe_range(value: &BigUint, dh_prime: &BigUint) -> bool {
    let margin = BigUint::one() << (2048 - 64);
    &margin <= value && value <= &(dh_prime - &margin)
}

/// `base ^ exponent mod modulus` over big-endian byte strings. The
/// callers deal in raw key material; the bignum type never escapes this
/// module.
pub fn mod_exp(base: &[u8], exponent: &[u8], modulus: &[u8]) -> Vec<u8> {
    let base = BigUint::from_bytes_be(base);
    let exponent = BigUint::from_bytes_be(exponent);
    let modulus = BigUint::from_bytes_be(modulus);
    base.modpow(&exponent, &modulus).to_bytes_be()
}

/// [`mod_exp`] with a small integer generator as the base.
pub fn mod_exp_g(g: i32, exponent: &[u8], modulus: &[u8]) -> Vec<u8> {
    let base = BigUint::from(g as u32);
    let exponent = BigUint::from_bytes_be(exponent);
    let modulus = BigUint::from_bytes_be(modulus);
    base.modpow(&exponent, &modulus).to_bytes_be()
}

/// Byte-level variant of [`check_dh_prime`].
pub fn check_dh_prime_bytes(prime: &[u8], g: i32) -> bool {
    check_dh_prime(&BigUint::from_bytes_be(prime), g)
}

/// Byte-level variant of both range checks on a public DH value.
pub fn check_g_bytes(value: &[u8], prime: &[u8]) -> bool {
    let value = BigUint::from_bytes_be(value);
    let prime = BigUint::from_bytes_be(prime);
    check_g_in_range(&value, &prime) && check_g_in_safe_range(&value, &prime)
}

/// Left-pads a big-endian value to exactly 256 bytes, the storage size
/// of every shared key.
pub fn pad_to_256(value: &[u8]) -> [u8; 256] {
    assert!(value.len() <= 256);
    let mut padded = [0u8; 256];
    padded[256 - value.len()..].copy_from_slice(value);
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mod_exp_small_numbers() {
        // 4^13 mod 497 = 445
        assert_eq!(mod_exp(&[4], &[13], &[0x01, 0xf1]), vec![0x01, 0xbd]);
        assert_eq!(mod_exp_g(4, &[13], &[0x01, 0xf1]), vec![0x01, 0xbd]);
    }

    #[test]
    fn padding_preserves_the_value() {
        let padded = pad_to_256(&[1, 2, 3]);
        assert_eq!(&padded[..253], &[0u8; 253][..]);
        assert_eq!(&padded[253..], &[1, 2, 3]);
    }

    #[test]
    fn range_checks_are_exclusive() {
        let prime = BigUint::from(23u32);
        assert!(!check_g_in_range(&BigUint::from(1u32), &prime));
        assert!(check_g_in_range(&BigUint::from(2u32), &prime));
        assert!(check_g_in_range(&BigUint::from(21u32), &prime));
        assert!(!check_g_in_range(&BigUint::from(22u32), &prime));
    }

    #[test]
    fn short_primes_are_rejected() {
        // A perfectly good safe prime, but nowhere near 2048 bits.
        assert!(!check_dh_prime(&BigUint::from(23u32), 7));
    }

    #[test]
    fn unknown_generators_are_rejected() {
        let prime = BigUint::one() << 2047;
        assert!(!check_dh_prime(&prime, 11));
    }
}
