//! Fixed-layout 80-byte block header.
//!
//! ```text
//! offset  len  field
//!      0    4  version            i32 LE
//!      4   32  previous hash      stored order
//!     36   32  merkle root        stored order
//!     68    4  timestamp          u32 LE, unix seconds
//!     72    4  difficulty target  u32 LE, compact encoding
//!     76    4  nonce              u32 LE
//! ```

use btc_ipld_types::{HashDigest, DIGEST_LEN};
use tracing::debug;

use crate::error::{CodecError, CodecResult};

/// Serialized header size in bytes.
pub const HEADER_LEN: usize = 80;

const VERSION_AT: usize = 0;
const PREVIOUS_HASH_AT: usize = 4;
const MERKLE_ROOT_AT: usize = PREVIOUS_HASH_AT + DIGEST_LEN;
const TIMESTAMP_AT: usize = MERKLE_ROOT_AT + DIGEST_LEN;
const DIFFICULTY_AT: usize = TIMESTAMP_AT + 4;
const NONCE_AT: usize = DIFFICULTY_AT + 4;

/// The six raw fields of a block header.
///
/// Only length is checked on decode. Field contents (timestamp
/// plausibility, target validity) are taken as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawHeader {
    pub version: i32,
    pub previous_hash: HashDigest,
    pub merkle_root: HashDigest,
    pub timestamp: u32,
    pub difficulty_target: u32,
    pub nonce: u32,
}

impl RawHeader {
    /// Decode a header from exactly [`HEADER_LEN`] bytes.
    pub fn decode(bytes: &[u8]) -> CodecResult<Self> {
        let buf: &[u8; HEADER_LEN] = bytes.try_into().map_err(|_| CodecError::InvalidLength {
            expected: HEADER_LEN,
            actual: bytes.len(),
        })?;

        let header = Self {
            version: i32::from_le_bytes(read_array(buf, VERSION_AT)),
            previous_hash: HashDigest::from_hash(read_array(buf, PREVIOUS_HASH_AT)),
            merkle_root: HashDigest::from_hash(read_array(buf, MERKLE_ROOT_AT)),
            timestamp: u32::from_le_bytes(read_array(buf, TIMESTAMP_AT)),
            difficulty_target: u32::from_le_bytes(read_array(buf, DIFFICULTY_AT)),
            nonce: u32::from_le_bytes(read_array(buf, NONCE_AT)),
        };
        debug!(
            version = header.version,
            parent = %header.previous_hash.short_hex(),
            timestamp = header.timestamp,
            "decoded block header"
        );
        Ok(header)
    }

    /// Decode a header from its hex encoding. Surrounding whitespace is ignored.
    pub fn from_hex(s: &str) -> CodecResult<Self> {
        let bytes = hex::decode(s.trim()).map_err(|e| CodecError::InvalidHex(e.to_string()))?;
        Self::decode(&bytes)
    }

    /// Serialize back to the 80-byte wire layout.
    pub fn encode(&self) -> [u8; HEADER_LEN] {
        let mut buf = [0u8; HEADER_LEN];
        write_at(&mut buf, VERSION_AT, &self.version.to_le_bytes());
        write_at(&mut buf, PREVIOUS_HASH_AT, self.previous_hash.as_bytes());
        write_at(&mut buf, MERKLE_ROOT_AT, self.merkle_root.as_bytes());
        write_at(&mut buf, TIMESTAMP_AT, &self.timestamp.to_le_bytes());
        write_at(&mut buf, DIFFICULTY_AT, &self.difficulty_target.to_le_bytes());
        write_at(&mut buf, NONCE_AT, &self.nonce.to_le_bytes());
        buf
    }

    /// Returns `true` for a header whose parent is the null hash.
    pub fn is_genesis(&self) -> bool {
        self.previous_hash.is_null()
    }
}

fn read_array<const N: usize>(buf: &[u8; HEADER_LEN], offset: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&buf[offset..offset + N]);
    out
}

fn write_at(buf: &mut [u8; HEADER_LEN], offset: usize, bytes: &[u8]) {
    buf[offset..offset + bytes.len()].copy_from_slice(bytes);
}
