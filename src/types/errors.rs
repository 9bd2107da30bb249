use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonetaryError {
    #[error("Monetary error: {0}")]
    InvalidFormat(#[from] rust_decimal::Error),
    #[error("Monetary error: Overflow")]
    Overflow
}
