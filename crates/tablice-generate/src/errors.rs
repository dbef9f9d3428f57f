use thiserror::Error;

/// Errors emitted at the provider boundary. Plate generation itself never
/// fails.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid params: {0}")]
    InvalidParams(String),
    #[error("unknown generator: {0}")]
    UnknownGenerator(String),
    #[error("registry error: {0}")]
    Registry(#[from] tablice_core::Error),
}
