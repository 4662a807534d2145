//! Thin glue around the bignum substrate (`rug::Integer`) and its RNG.
//!
//! The CORE algorithms in this crate only ever need three things from a
//! bignum substrate: bit operations, modular exponentiation, and a
//! cryptographically-seeded uniform random integer generator. This module
//! is the only place that substrate detail (GMP via `rug`) leaks into.

use std::time::{SystemTime, UNIX_EPOCH};

use rug::{rand::RandState, Integer};
use tracing::warn;

/// Process-wide random source for bignum sampling, seeded once from OS
/// entropy. Threaded explicitly through every call site that needs
/// randomness rather than hidden behind a global, so a single invocation of
/// this crate stays deterministic given a fixed seed.
pub struct Rng {
    state: RandState<'static>,
}

impl Rng {
    /// Seeds from the OS entropy source, falling back to wall-clock time if
    /// the entropy source is unavailable (e.g. in a restricted sandbox).
    /// The fallback is a known weakness, logged rather than treated as an
    /// error: a tool that refuses to run without `/dev/urandom` is less
    /// useful than one that degrades loudly.
    pub fn from_entropy() -> Self {
        let seed = Self::seed_word();
        let mut state = RandState::new();
        state.seed(&Integer::from(seed));
        Rng { state }
    }

    fn seed_word() -> u64 {
        let mut buf = [0u8; 8];
        match getrandom::getrandom(&mut buf) {
            Ok(()) => u64::from_ne_bytes(buf),
            Err(err) => {
                warn!(
                    error = %err,
                    "OS entropy source unavailable, falling back to wall-clock seed"
                );
                SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_nanos() as u64)
                    .unwrap_or(0)
            }
        }
    }

    /// A uniformly random integer of exactly `bits` bits (the high bit is
    /// not forced; callers that need a specific bit pattern set it
    /// themselves, see `prime_gen::generate_prime`).
    pub fn uniform_bits(&mut self, bits: u32) -> Integer {
        Integer::from(Integer::random_bits(bits, &mut self.state))
    }

    /// A uniformly random integer in `[0, bound)`. `bound` must be positive.
    pub fn uniform_below(&mut self, bound: &Integer) -> Integer {
        debug_assert!(*bound > 0, "uniform_below requires a positive bound");
        bound.clone().random_below(&mut self.state)
    }

    /// A uniformly random integer in `[low, high)`. `high` must be strictly
    /// greater than `low`.
    pub fn uniform_range(&mut self, low: &Integer, high: &Integer) -> Integer {
        debug_assert!(high > low, "uniform_range requires high > low");
        let span = Integer::from(high - low);
        low.clone() + self.uniform_below(&span)
    }
}
