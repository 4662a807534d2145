//! RSA key generation: composes prime generation and modular inverse into a
//! full `(p, q, n, e, d)` key pair.

use rug::Integer;
use tracing::{debug, info};

use crate::bigint::Rng;
use crate::error::{Result, RsaError};
use crate::mod_inverse::mod_inv;
use crate::prime_gen::generate_prime;

/// An RSA key pair: both secret primes, the public modulus, and the
/// public/private exponents.
///
/// No `Serialize`/`Deserialize` impl: key persistence in a wire or file
/// format (PEM/DER or otherwise) is out of scope for this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub p: Integer,
    pub q: Integer,
    pub n: Integer,
    pub e: Integer,
    pub d: Integer,
}

/// Generates an RSA key pair whose public modulus `n` has exactly `bits`
/// bits.
pub fn generate(bits: u32, rng: &mut Rng) -> Result<KeyPair> {
    if bits <= 6 {
        return Err(RsaError::BitLengthTooSmall);
    }

    let bits_p = (bits + 1) / 2; // ceil(bits / 2)
    let bits_q = bits - bits_p;

    info!(bits, bits_p, bits_q, "generating RSA key pair");

    let (p, q, n) = loop {
        let p = generate_prime(bits_p, rng)?;
        let q = generate_prime(bits_q, rng)?;
        if p == q {
            debug!("generated primes collided, retrying");
            continue;
        }
        let n = Integer::from(&p * &q);
        if n.significant_bits() != bits {
            debug!(
                got = n.significant_bits(),
                want = bits,
                "modulus bit length mismatch, retrying"
            );
            continue;
        }
        break (p, q, n);
    };

    let phi = Integer::from(&p - 1) * Integer::from(&q - 1);

    let e = loop {
        let candidate = rng.uniform_range(&Integer::from(2), &phi);
        if Integer::from(candidate.gcd_ref(&phi)) == 1 {
            break candidate;
        }
    };

    let d = mod_inv(&e, &phi)?;

    Ok(KeyPair { p, q, n, e, d })
}
