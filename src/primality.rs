//! Solovay-Strassen probabilistic primality test.

use rug::Integer;

use crate::bigint::Rng;
use crate::error::Result;
use crate::jacobi::{jacobi, JacobiSymbol};

/// Number of independent witness rounds. Error rate is at most `2^-100` per
/// composite input, at the cost of a fixed, deterministic worst-case
/// running time.
pub const PRIMALITY_ROUNDS: u32 = 100;

/// Tests whether `k` is probably prime using Solovay-Strassen with
/// [`PRIMALITY_ROUNDS`] independent witnesses.
pub fn is_probable_prime(k: &Integer, rng: &mut Rng) -> Result<bool> {
    if *k == 2 || *k == 3 {
        return Ok(true);
    }
    if *k == 1 || k.is_even() {
        return Ok(false);
    }

    let k_minus_one = Integer::from(k - 1);
    let exponent = Integer::from(&k_minus_one / 2);

    for _ in 0..PRIMALITY_ROUNDS {
        let a = rng.uniform_range(&Integer::from(2), &k_minus_one);

        if Integer::from(a.gcd_ref(k)) > 1 {
            return Ok(false);
        }

        let symbol = jacobi(&a, k)?;
        let x = match symbol {
            JacobiSymbol::Zero => Integer::from(0),
            JacobiSymbol::PlusOne => Integer::from(1),
            JacobiSymbol::MinusOne => Integer::from(k - 1),
        };
        if x == 0 {
            return Ok(false);
        }

        let y = Integer::from(a.pow_mod_ref(&exponent, k).unwrap());
        if x != y {
            return Ok(false);
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primes_below_10000() -> Vec<u32> {
        let mut sieve = vec![true; 10_000];
        sieve[0] = false;
        sieve[1] = false;
        for i in 2..10_000 {
            if sieve[i] {
                let mut j = i * i;
                while j < 10_000 {
                    sieve[j] = false;
                    j += i;
                }
            }
        }
        (0..10_000).filter(|&i| sieve[i as usize]).collect()
    }

    #[test]
    fn small_primes_are_detected() {
        let mut rng = Rng::from_entropy();
        for p in primes_below_10000() {
            assert!(
                is_probable_prime(&Integer::from(p), &mut rng).unwrap(),
                "{p} should be prime"
            );
        }
    }

    #[test]
    fn small_composites_are_rejected() {
        let mut rng = Rng::from_entropy();
        let primes: std::collections::HashSet<u32> = primes_below_10000().into_iter().collect();
        for n in 4..10_000u32 {
            if primes.contains(&n) {
                continue;
            }
            assert!(
                !is_probable_prime(&Integer::from(n), &mut rng).unwrap(),
                "{n} should be composite"
            );
        }
    }

    #[test]
    fn rejects_one_and_even_numbers() {
        let mut rng = Rng::from_entropy();
        assert!(!is_probable_prime(&Integer::from(1), &mut rng).unwrap());
        assert!(!is_probable_prime(&Integer::from(4), &mut rng).unwrap());
        assert!(!is_probable_prime(&Integer::from(100), &mut rng).unwrap());
    }

    #[test]
    fn accepts_two_and_three() {
        let mut rng = Rng::from_entropy();
        assert!(is_probable_prime(&Integer::from(2), &mut rng).unwrap());
        assert!(is_probable_prime(&Integer::from(3), &mut rng).unwrap());
    }
}
