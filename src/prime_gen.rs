//! Random prime generation with bit-length enforcement.

use rug::Integer;
use tracing::debug;

use crate::bigint::Rng;
use crate::error::{Result, RsaError};
use crate::primality::is_probable_prime;

/// Cap on the number of `x += 2` steps tried from a single starting point
/// before resampling a fresh candidate. A plain incrementing search has no
/// upper bound and could in principle never terminate on an adversarial
/// seed. Resampling instead of looping forever bounds worst-case work
/// between samples while preserving the "this always eventually succeeds"
/// behavior.
const PRIME_SEARCH_CAP_MULTIPLIER: u32 = 2;

fn candidate(bits: u32, rng: &mut Rng) -> Integer {
    let mut x = rng.uniform_bits(bits);
    // Force bit 0 (odd), and the top two bits (so p*q lands in the target
    // bit range with high probability). Do not collapse this to a plain
    // "set the top bit and the low bit" pattern.
    x.set_bit(0, true);
    x.set_bit(bits - 2, true);
    x.set_bit(bits - 1, true);
    x
}

/// Returns a probable prime of exactly `bits` bits.
pub fn generate_prime(bits: u32, rng: &mut Rng) -> Result<Integer> {
    if bits < 3 {
        return Err(RsaError::InvalidDomain(
            "generate_prime requires a bit length of at least 3",
        ));
    }

    let cap = PRIME_SEARCH_CAP_MULTIPLIER.saturating_mul(bits).max(1);
    let mut x = candidate(bits, rng);
    let mut steps_since_resample = 0u32;

    while x.significant_bits() != bits || !is_probable_prime(&x, rng)? {
        if x.significant_bits() != bits {
            debug!(bits, "prime search carried past target width, resampling");
            x = candidate(bits, rng);
            steps_since_resample = 0;
            continue;
        }
        x += 2;
        steps_since_resample += 1;
        if steps_since_resample > cap {
            debug!(bits, cap, "prime search exceeded step cap, resampling");
            x = candidate(bits, rng);
            steps_since_resample = 0;
        }
    }

    Ok(x)
}
