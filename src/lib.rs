//! Core algorithms for a small RSA toolkit: Solovay-Strassen primality
//! testing over a Jacobi-symbol routine, bit-length-enforced random prime
//! generation, modular inverse via the extended Euclidean algorithm, RSA
//! key generation, plain encrypt/decrypt, and Brent's variant of Pollard's
//! Rho for breaking an RSA instance by factoring its modulus.

pub mod bigint;
pub mod cipher;
pub mod cli;
pub mod error;
pub mod factor;
pub mod jacobi;
pub mod keygen;
pub mod mod_inverse;
pub mod prime_gen;
pub mod primality;

pub use bigint::Rng;
pub use error::{Result, RsaError};
pub use keygen::KeyPair;
