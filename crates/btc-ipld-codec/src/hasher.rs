use btc_ipld_types::{HashDigest, Link, LinkKind};
use sha2::{Digest, Sha256};

use crate::error::{CodecError, CodecResult};
use crate::header::HEADER_LEN;

/// Double SHA-256, Bitcoin's block and merkle hash.
///
/// The output is in stored order, the same order the header uses for
/// `previous_hash` and `merkle_root`.
pub struct BlockHasher;

impl BlockHasher {
    /// `SHA-256(SHA-256(data))`.
    pub fn hash(data: &[u8]) -> HashDigest {
        let first = Sha256::digest(data);
        let second = Sha256::digest(first);
        let mut out = [0u8; 32];
        out.copy_from_slice(&second);
        HashDigest::from_hash(out)
    }

    /// Verify that data produces the expected digest.
    pub fn verify(data: &[u8], expected: &HashDigest) -> bool {
        Self::hash(data) == *expected
    }
}

/// The block's own content identifier, computed from its raw header bytes.
///
/// This is the key a host stores the block under; a child block's `parent`
/// link carries the same CID.
pub fn block_link(bytes: &[u8]) -> CodecResult<Link> {
    if bytes.len() != HEADER_LEN {
        return Err(CodecError::InvalidLength {
            expected: HEADER_LEN,
            actual: bytes.len(),
        });
    }
    Ok(Link::new(&BlockHasher::hash(bytes), LinkKind::Block)?)
}
