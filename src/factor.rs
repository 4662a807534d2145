//! Integer factorization via Brent's variant of Pollard's Rho, and the
//! "break" operation that turns a factorization into a recovered plaintext.

use rug::Integer;
use tracing::{debug, warn};

use crate::bigint::Rng;
use crate::cipher::decrypt;
use crate::error::{Result, RsaError};
use crate::mod_inverse::mod_inv;

/// Number of fresh attempts the break operation gives Brent's Rho before
/// giving up and surfacing [`RsaError::FactorizationFailed`].
pub const BREAK_RETRIES: u32 = 20;

/// Upper bound on the cycle-length parameter `r`, which doubles every outer
/// iteration. Without a cap, a pathological `(y, C, M)` sample could spin
/// forever; hitting the cap is treated the same as any other failed
/// attempt and simply retried with a fresh sample.
fn cycle_length_cap() -> Integer {
    Integer::from(1u64 << 20)
}

fn f(y: &Integer, c: &Integer, n: &Integer) -> Integer {
    let mut next = Integer::from(y.pow_mod_ref(&Integer::from(2), n).unwrap());
    next += c;
    next %= n;
    next
}

/// One attempt at factoring `n` via Brent's Rho. Trivial cases (`n = 1`,
/// `n` even) are handled directly; otherwise samples fresh `(y, C, M)` from
/// `rng` and runs the cycle-detection loop. Returns `None` if this attempt
/// could not separate a non-trivial factor (e.g. `n` is prime, or the
/// sampled parameters happened to produce a degenerate cycle). The caller
/// is expected to retry with a fresh sample.
fn brent_attempt(n: &Integer, rng: &mut Rng) -> Option<Integer> {
    let one = Integer::from(1);
    let cap = cycle_length_cap();

    let mut y = rng.uniform_range(&one, n);
    let c = rng.uniform_range(&one, n);
    let m_bound = rng.uniform_range(&one, n);

    let mut g = Integer::from(1);
    let mut r = Integer::from(1);
    let mut q = Integer::from(1);
    let mut x = Integer::from(0);
    let mut ys = Integer::from(0);

    while g == 1 {
        x = y.clone();

        let mut i = Integer::from(0);
        while i < r {
            y = f(&y, &c, n);
            i += 1;
        }

        let mut k = Integer::from(0);
        while k < r && g == 1 {
            ys = y.clone();
            let remaining = Integer::from(&r - &k);
            let steps = if m_bound < remaining {
                m_bound.clone()
            } else {
                remaining
            };

            let mut s = Integer::from(0);
            while s < steps {
                y = f(&y, &c, n);
                let diff = Integer::from(&x - &y).abs();
                q = Integer::from(&q * diff);
                q %= n;
                s += 1;
            }

            g = Integer::from(q.gcd_ref(n));
            k += &m_bound;
        }

        r = Integer::from(&r * 2);
        if r > cap {
            debug!("brent attempt exceeded cycle-length cap");
            return None;
        }
    }

    if g == *n {
        let start = ys.clone();
        loop {
            ys = f(&ys, &c, n);
            g = Integer::from(Integer::from(&x - &ys).abs().gcd_ref(n));
            if g > one && g < *n {
                break;
            }
            if ys == start {
                // Cycled back to the start without separating a factor:
                // n is very likely prime (or a prime power), and Rho
                // cannot help here. Correct behavior is to report failure.
                return None;
            }
        }
    }

    if g > one && g < *n {
        Some(g)
    } else {
        None
    }
}

/// Returns a non-trivial factor `p` of `n` with `1 < p < n`, trying once.
/// When `n` is prime or a prime power, this legitimately fails; that is
/// correct behavior, not a bug. Callers that need persistence should retry
/// (see [`break_rsa`]).
pub fn factor(n: &Integer, rng: &mut Rng) -> Result<Integer> {
    if *n == 1 {
        return Ok(Integer::from(1));
    }
    if n.is_even() {
        return Ok(Integer::from(2));
    }

    brent_attempt(n, rng).ok_or(RsaError::FactorizationFailed(1))
}

/// Breaks an RSA instance: factors `n`, recovers the private exponent, and
/// decrypts `c`. Retries factorization up to [`BREAK_RETRIES`] times with
/// fresh random samples before giving up.
pub fn break_rsa(e: &Integer, n: &Integer, c: &Integer, rng: &mut Rng) -> Result<(Integer, Integer, Integer)> {
    for attempt in 1..=BREAK_RETRIES {
        match factor(n, rng) {
            Ok(p) if p > 1 && p < *n => {
                let q = Integer::from(n / &p);
                let phi = Integer::from(&p - 1) * Integer::from(&q - 1);
                let d = mod_inv(e, &phi)?;
                let m = decrypt(c, &d, n)?;
                return Ok((p, q, m));
            }
            _ => {
                warn!(attempt, "factorization attempt failed, retrying");
            }
        }
    }

    Err(RsaError::FactorizationFailed(BREAK_RETRIES))
}
