use thiserror::Error;

/// Every failure this crate can surface, from CLI input validation down to
/// the internal algorithmic invariants of key generation, factoring, and
/// the Jacobi/Solovay-Strassen primality routines.
///
/// All fallible functions in this crate return `Result<T, RsaError>`; `main`
/// prints the `Display` impl to stderr and exits with status 1 on `Err`, so
/// every variant's message doubles as the user-facing error line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RsaError {
    #[error("a required size of a public modulus (B) should be a number of bits > 6")]
    BitLengthTooSmall,

    #[error("expected a hexadecimal number (prefix 0x or 0X), got {0:?}")]
    MalformedHex(String),

    #[error("N = 0 is not a valid modulus")]
    ZeroModulus,

    #[error("internal invariant violated: {0}")]
    InvalidDomain(&'static str),

    #[error("factorization failed after {0} attempts")]
    FactorizationFailed(u32),
}

pub type Result<T> = std::result::Result<T, RsaError>;
