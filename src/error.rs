//! Error types for bimerkle
//!
//! Tree operations themselves never fail: hashing absent data or merging an
//! absent child is a no-op. These errors cover parsing at the crate's edges.

use thiserror::Error;

/// Result type alias for bimerkle operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bimerkle operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid hash: {0}")]
    InvalidHash(String),

    #[error("Unknown digest algorithm: {0}")]
    UnknownAlgorithm(String),
}
