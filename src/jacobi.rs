//! The Jacobi symbol, the building block of the Solovay-Strassen primality
//! test.

use rug::Integer;

use crate::error::{Result, RsaError};

/// The three possible values of a Jacobi symbol `(a/n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JacobiSymbol {
    Zero,
    PlusOne,
    MinusOne,
}

impl JacobiSymbol {
    pub fn as_i32(self) -> i32 {
        match self {
            JacobiSymbol::Zero => 0,
            JacobiSymbol::PlusOne => 1,
            JacobiSymbol::MinusOne => -1,
        }
    }

    fn from_i32(t: i32) -> Self {
        match t {
            0 => JacobiSymbol::Zero,
            1 => JacobiSymbol::PlusOne,
            -1 => JacobiSymbol::MinusOne,
            other => unreachable!("jacobi running sign collapsed to {other}, not in {{-1,0,1}}"),
        }
    }

    fn flip(self) -> Self {
        match self {
            JacobiSymbol::MinusOne => JacobiSymbol::PlusOne,
            JacobiSymbol::PlusOne => JacobiSymbol::MinusOne,
            JacobiSymbol::Zero => JacobiSymbol::Zero,
        }
    }
}

/// Computes the Jacobi symbol `(a/n)`.
///
/// Preconditions: `a > 0`, `n > a`, `n` odd. These are internal invariants.
/// Every call site in this crate (the Solovay-Strassen witness loop)
/// satisfies them by construction, so a violation is reported as
/// [`RsaError::InvalidDomain`] rather than panicking.
pub fn jacobi(a_in: &Integer, n_in: &Integer) -> Result<JacobiSymbol> {
    if *a_in <= 0 || *n_in <= *a_in || n_in.is_even() {
        return Err(RsaError::InvalidDomain(
            "jacobi requires 0 < a < n and n odd",
        ));
    }

    let mut a = a_in.clone();
    let mut n = n_in.clone();
    let mut t = JacobiSymbol::PlusOne;

    while a != 0 {
        while a.is_even() {
            a /= 2;
            let r = n.mod_u(8);
            if r == 3 || r == 5 {
                t = t.flip();
            }
        }
        std::mem::swap(&mut a, &mut n);
        if a.mod_u(4) == 3 && n.mod_u(4) == 3 {
            t = t.flip();
        }
        a %= &n;
    }

    if n == 1 {
        Ok(t)
    } else {
        Ok(JacobiSymbol::Zero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        assert_eq!(
            jacobi(&Integer::from(1001), &Integer::from(9907))
                .unwrap()
                .as_i32(),
            -1
        );
        assert_eq!(
            jacobi(&Integer::from(19), &Integer::from(45))
                .unwrap()
                .as_i32(),
            1
        );
        assert_eq!(
            jacobi(&Integer::from(8), &Integer::from(21))
                .unwrap()
                .as_i32(),
            -1
        );
    }

    #[test]
    fn legendre_agreement_for_odd_prime() {
        // n = 13 is an odd prime; jacobi must equal the Legendre symbol for
        // every a in [1, n).
        let n = Integer::from(13);
        let quadratic_residues: Vec<i32> = (1..13)
            .map(|a| Integer::from(a).pow_mod(&Integer::from(6), &n).unwrap())
            .map(|r| if r == 1 { 1 } else { -1 })
            .collect();
        for a in 1..13 {
            let j = jacobi(&Integer::from(a), &n).unwrap().as_i32();
            assert_eq!(j, quadratic_residues[(a - 1) as usize], "a = {a}");
        }
    }

    #[test]
    fn rejects_even_modulus() {
        assert!(jacobi(&Integer::from(3), &Integer::from(8)).is_err());
    }

    #[test]
    fn rejects_a_not_smaller_than_n() {
        assert!(jacobi(&Integer::from(10), &Integer::from(7)).is_err());
    }
}
