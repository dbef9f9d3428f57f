use thiserror::Error;

/// Core error type shared across Tablice crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The region table violates internal invariants.
    #[error("invalid registry: {0}")]
    InvalidRegistry(String),
}

/// Convenience alias for results returned by Tablice crates.
pub type Result<T> = std::result::Result<T, Error>;
