use btc_ipld_codec::CodecError;

/// Errors from resolving a path.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The block bytes could not be decoded into a node.
    #[error("decode error: {0}")]
    Decode(#[from] CodecError),

    /// A path segment does not name a key of the node.
    #[error("path not found: no key {segment:?} (path {path:?})")]
    NotFound { segment: String, path: String },

    /// The path continues past a scalar, which has no children.
    #[error("invalid path: {segment:?} is a scalar and cannot be traversed (path {path:?})")]
    InvalidPath { segment: String, path: String },
}

impl ResolveError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_invalid_path(&self) -> bool {
        matches!(self, Self::InvalidPath { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}
