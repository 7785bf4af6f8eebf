//! Error types for header decoding and node assembly.

use btc_ipld_types::TypeError;

/// Errors from decoding a block header.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CodecError {
    /// The buffer is not exactly one header long.
    #[error("invalid header length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Hex input could not be decoded.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// A link could not be built from a header digest.
    #[error("link error: {0}")]
    Link(#[from] TypeError),
}

/// Result alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
