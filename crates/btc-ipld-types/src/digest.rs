use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Length in bytes of every hash carried by a block header.
pub const DIGEST_LEN: usize = 32;

/// A 32-byte double-SHA-256 digest in stored order.
///
/// Bitcoin keeps hashes exactly as the hash function emits them. Block
/// explorers and RPC interfaces print them reversed; that is the "display"
/// order exposed by [`HashDigest::to_display_hex`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HashDigest([u8; DIGEST_LEN]);

impl HashDigest {
    /// Wrap a digest that is already in stored order.
    pub const fn from_hash(hash: [u8; DIGEST_LEN]) -> Self {
        Self(hash)
    }

    /// Copy a digest out of a slice, failing unless it is exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, TypeError> {
        let arr: [u8; DIGEST_LEN] = bytes.try_into().map_err(|_| TypeError::InvalidLength {
            expected: DIGEST_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }

    /// The all-zero digest (the genesis block's parent).
    pub const fn null() -> Self {
        Self([0u8; DIGEST_LEN])
    }

    /// Returns `true` if every byte is zero.
    pub fn is_null(&self) -> bool {
        self.0 == [0u8; DIGEST_LEN]
    }

    /// The raw bytes in stored order.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// The same digest with its byte order reversed.
    pub fn reversed(&self) -> Self {
        let mut bytes = self.0;
        bytes.reverse();
        Self(bytes)
    }

    /// Hex of the stored bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Hex in conventional display order (byte-reversed).
    pub fn to_display_hex(&self) -> String {
        self.reversed().to_hex()
    }

    /// Short display-order hex (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.reversed().0[..4])
    }

    /// Parse hex given in stored order.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    /// Parse hex given in display order, as printed by block explorers.
    pub fn from_display_hex(s: &str) -> Result<Self, TypeError> {
        Self::from_hex(s).map(|d| d.reversed())
    }
}

impl fmt::Debug for HashDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashDigest({})", self.short_hex())
    }
}

impl fmt::Display for HashDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_display_hex())
    }
}

impl From<[u8; DIGEST_LEN]> for HashDigest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<HashDigest> for [u8; DIGEST_LEN] {
    fn from(digest: HashDigest) -> Self {
        digest.0
    }
}
