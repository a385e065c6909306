// Copyright 2024 - developers of the `ferrogram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

fn modpow(mut n: u128, mut e: u128, m: u128) -> u128 {
    if m == 1 {
        return 0;
    }

    let mut result = 1;
    n %= m;
    while e > 0 {
        if e % 2 == 1 {
            result = (result * n) % m;
        }
        e >>= 1;
        n = (n * n) % m;
    }
    result
}

fn abs_sub(a: u128, b: u128) -> u128 {
    a.max(b) - a.min(b)
}

/// Factorize the given number into its two prime factors, `p < q`.
///
/// The server chooses `pq` as a product of two primes that fits in 63
/// bits, so the arithmetic here works on `u128` to avoid overflow when
/// squaring.
///
/// The algorithm is [Brent's variant] of [Pollard's rho algorithm].
/// A single walk is not guaranteed to surface a nontrivial factor; when
/// one collapses without finding anything, the polynomial is changed
/// (by picking a new additive constant) and the walk re-run. Small
/// primes are used for the constants in the hope they behave better.
///
/// [Brent's variant]: https://maths-people.anu.edu.au/~brent/pd/rpb051i.pdf
/// [Pollard's rho algorithm]: https://en.wikipedia.org/wiki/Pollard%27s_rho_algorithm
pub fn factorize(pq: u64) -> (u64, u64) {
    const POLYNOMIAL_CONSTANTS: [u64; 5] = [43, 47, 53, 59, 61];

    for constant in POLYNOMIAL_CONSTANTS {
        let c = constant.wrapping_mul(pq / 97) | 1;
        let (p, q) = factorize_with_constant(pq, c);
        if p != 1 {
            return (p, q);
        }
    }
    panic!("failed to factorize after retrying with every polynomial")
}

/// One run of Pollard-ρ-Brent with `f(x) = x² + c`. Returns `(1, pq)`
/// when the walk collapses without revealing a factor.
#[allow(clippy::many_single_char_names)]
fn factorize_with_constant(pq: u64, c: u64) -> (u64, u64) {
    if pq % 2 == 0 {
        return (2, pq / 2);
    }

    let pq = pq as u128;
    let c = c as u128 % pq;

    // Starting point and batch size; any values in 1..pq do.
    let m = 3 * (pq / 4);
    let mut y = pq / 4;
    let mut g = 1u128;
    let mut r = 1u128;
    let mut q = 1u128;
    let mut x = 0u128;
    let mut ys = 0u128;

    while g == 1 {
        x = y;
        for _ in 0..r {
            y = (modpow(y, 2, pq) + c) % pq;
        }

        let mut k = 0;
        while k < r && g == 1 {
            ys = y;
            for _ in 0..m.min(r - k) {
                y = (modpow(y, 2, pq) + c) % pq;
                q = (q * abs_sub(x, y)) % pq;
            }

            g = gcd(q, pq);
            k += m;
        }

        r *= 2;
    }

    if g == pq {
        // The batched gcd skipped past the factor; retrace one step at
        // a time from the last saved position. Reaching the start of
        // the cycle leaves g = pq, which the caller reads as failure.
        loop {
            ys = (modpow(ys, 2, pq) + c) % pq;
            g = gcd(abs_sub(x, ys), pq);
            if g > 1 {
                break;
            }
        }
    }

    let (p, q) = (g as u64, (pq / g) as u64);
    (p.min(q), p.max(q))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factorizes_semiprimes() {
        assert_eq!(factorize(1470626929934143021), (1206429347, 1218991343));
        assert_eq!(factorize(2363612107535801713), (1518968219, 1556064227));
        assert_eq!(factorize(2804275833720261793), (1555252417, 1803100129));
    }

    #[test]
    fn factorizes_the_documented_sample() {
        // The pq sample from the public auth-key documentation.
        assert_eq!(factorize(0x17ED48941A08F981), (1229739323, 1402015859));
    }

    #[test]
    fn factorizes_even_numbers() {
        assert_eq!(factorize(2 * 1398101), (2, 1398101));
    }

    #[test]
    fn every_retry_constant_is_usable() {
        // Each constant yields either both prime factors or the failure
        // marker that sends the caller to the next constant; none may
        // produce a bogus split.
        for constant in [43u64, 47, 53, 59, 61] {
            let pq = 1470626929934143021;
            let c = constant.wrapping_mul(pq / 97) | 1;
            let (p, q) = factorize_with_constant(pq, c);
            if p != 1 {
                assert_eq!((p, q), (1206429347, 1218991343));
            } else {
                assert_eq!(q, pq);
            }
        }
    }
}
