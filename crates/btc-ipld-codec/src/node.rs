//! The decoded, addressable form of a block header.
//!
//! A [`BlockNode`] has a closed set of six fields. The two hash fields are
//! turned into [`Link`]s; everything else is copied from the [`RawHeader`]
//! verbatim.

use btc_ipld_types::{Link, LinkKind};
use serde::Serialize;

use crate::error::CodecResult;
use crate::header::RawHeader;

/// Field names in node order.
pub const NODE_KEYS: [&str; 6] = ["version", "parent", "tx", "timestamp", "difficulty", "nonce"];

/// An immutable block header node.
///
/// Built once per decode and never mutated. The node exclusively owns its
/// two links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BlockNode {
    version: i32,
    parent: Link,
    tx: Link,
    timestamp: u32,
    difficulty: u32,
    nonce: u32,
}

impl BlockNode {
    /// Assemble a node from decoded header fields.
    pub fn assemble(raw: &RawHeader) -> CodecResult<Self> {
        Ok(Self {
            version: raw.version,
            parent: Link::new(&raw.previous_hash, LinkKind::ParentBlock)?,
            tx: Link::new(&raw.merkle_root, LinkKind::TransactionTreeRoot)?,
            timestamp: raw.timestamp,
            difficulty: raw.difficulty_target,
            nonce: raw.nonce,
        })
    }

    /// Decode and assemble in one step.
    pub fn from_bytes(bytes: &[u8]) -> CodecResult<Self> {
        Self::assemble(&RawHeader::decode(bytes)?)
    }

    /// Block version.
    pub fn version(&self) -> i32 {
        self.version
    }

    /// Link to the previous block.
    pub fn parent(&self) -> &Link {
        &self.parent
    }

    /// Link to the transaction merkle tree root.
    pub fn tx(&self) -> &Link {
        &self.tx
    }

    /// Unix timestamp in seconds.
    pub fn timestamp(&self) -> u32 {
        self.timestamp
    }

    /// Compact-encoded difficulty target.
    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    pub fn nonce(&self) -> u32 {
        self.nonce
    }

    /// Rebuild the raw header the node was assembled from.
    pub fn to_raw(&self) -> RawHeader {
        RawHeader {
            version: self.version,
            previous_hash: self.parent.digest(),
            merkle_root: self.tx.digest(),
            timestamp: self.timestamp,
            difficulty_target: self.difficulty,
            nonce: self.nonce,
        }
    }

    /// Returns a human-readable summary of this node.
    pub fn summary(&self) -> String {
        format!(
            "v{} parent={} ts={} bits=0x{:08x} nonce={}",
            self.version,
            self.parent.digest().short_hex(),
            self.timestamp,
            self.difficulty,
            self.nonce,
        )
    }
}
