//! Plain RSA encryption and decryption: a single modular exponentiation
//! each, with no padding or message-length checks.

use rug::Integer;

use crate::error::{Result, RsaError};

/// `c = m^e mod n`.
pub fn encrypt(m: &Integer, e: &Integer, n: &Integer) -> Result<Integer> {
    m.pow_mod_ref(e, n)
        .map(Integer::from)
        .ok_or(RsaError::InvalidDomain(
            "encrypt requires a non-negative exponent and a positive modulus",
        ))
}

/// `m = c^d mod n`.
pub fn decrypt(c: &Integer, d: &Integer, n: &Integer) -> Result<Integer> {
    c.pow_mod_ref(d, n)
        .map(Integer::from)
        .ok_or(RsaError::InvalidDomain(
            "decrypt requires a non-negative exponent and a positive modulus",
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wiki_rsa_round_trip() {
        let n = Integer::from(3233);
        let e = Integer::from(17);
        let d = Integer::from(413);
        let m = Integer::from(65);

        let c = encrypt(&m, &e, &n).unwrap();
        assert_eq!(c, Integer::from(2790));

        let recovered = decrypt(&c, &d, &n).unwrap();
        assert_eq!(recovered, m);
    }

    #[test]
    fn round_trip_over_small_modulus_range() {
        // n = 0xC3 = 13 * 15, e = 17 is coprime to phi = 12 * 14 = 168.
        let n = Integer::from(0xC3);
        let phi = Integer::from(12 * 14);
        let e = Integer::from(17);
        let d = crate::mod_inverse::mod_inv(&e, &phi).unwrap();

        for m in 0..0xC3u32 {
            let m = Integer::from(m);
            let c = encrypt(&m, &e, &n).unwrap();
            let recovered = decrypt(&c, &d, &n).unwrap();
            assert_eq!(recovered, m);
        }
    }
}
