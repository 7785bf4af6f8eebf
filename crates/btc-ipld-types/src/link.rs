//! Content-identifier links between Bitcoin IPLD nodes.
//!
//! A [`Link`] is a CIDv1 using the `bitcoin-block` multicodec and a
//! `dbl-sha2-256` multihash, paired with a [`LinkKind`] saying what the
//! referenced node is. The digest goes into the CID exactly as stored in the
//! header, so a child's `parent` link carries the same CID as the parent
//! block's own identifier.

use std::fmt;
use std::str::FromStr;

use cid::multibase::Base;
use cid::Cid;
use multihash::Multihash;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::digest::{HashDigest, DIGEST_LEN};
use crate::error::TypeError;

/// Multicodec for a Bitcoin block header.
pub const BITCOIN_BLOCK: u64 = 0xb0;

/// Multihash code for double SHA-256.
pub const DBL_SHA2_256: u64 = 0x56;

/// Key marking a link when embedded in JSON (`{"/": "<cid>"}`).
pub const LINK_KEY: &str = "/";

/// What kind of node a link points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkKind {
    /// The header's own identifier.
    Block,
    /// The previous block in the chain.
    ParentBlock,
    /// The root of the block's transaction merkle tree.
    TransactionTreeRoot,
}

impl LinkKind {
    /// Stable tag string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::ParentBlock => "parent-block",
            Self::TransactionTreeRoot => "transaction-tree-root",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "block" => Ok(Self::Block),
            "parent-block" => Ok(Self::ParentBlock),
            "transaction-tree-root" => Ok(Self::TransactionTreeRoot),
            other => Err(TypeError::UnknownLinkKind(other.to_string())),
        }
    }
}

/// An immutable, kind-tagged content identifier.
///
/// Two links are equal only when both the CID and the kind match.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Link {
    cid: Cid,
    kind: LinkKind,
}

impl Link {
    /// Build a link from a digest slice in stored order.
    ///
    /// Fails unless the slice is exactly 32 bytes.
    pub fn from_digest(digest: &[u8], kind: LinkKind) -> Result<Self, TypeError> {
        let digest = HashDigest::from_slice(digest)?;
        Self::new(&digest, kind)
    }

    /// Build a link from a typed digest.
    ///
    /// Every kind shares the `bitcoin-block` codec; the kind is carried
    /// beside the CID.
    pub fn new(digest: &HashDigest, kind: LinkKind) -> Result<Self, TypeError> {
        let mh = Multihash::<64>::wrap(DBL_SHA2_256, digest.as_bytes())
            .map_err(|e| TypeError::Multihash(e.to_string()))?;
        Ok(Self {
            cid: Cid::new_v1(BITCOIN_BLOCK, mh),
            kind,
        })
    }

    /// Wrap an existing CID, checking that it is a Bitcoin block CID.
    pub fn from_cid(cid: Cid, kind: LinkKind) -> Result<Self, TypeError> {
        if cid.codec() != BITCOIN_BLOCK {
            return Err(TypeError::InvalidCid(format!(
                "unexpected codec 0x{:x}",
                cid.codec()
            )));
        }
        let mh = cid.hash();
        if mh.code() != DBL_SHA2_256 {
            return Err(TypeError::InvalidCid(format!(
                "unexpected multihash 0x{:x}",
                mh.code()
            )));
        }
        if mh.digest().len() != DIGEST_LEN {
            return Err(TypeError::InvalidLength {
                expected: DIGEST_LEN,
                actual: mh.digest().len(),
            });
        }
        Ok(Self { cid, kind })
    }

    /// Parse a multibase CID string and tag it with `kind`.
    pub fn parse(s: &str, kind: LinkKind) -> Result<Self, TypeError> {
        let cid = Cid::try_from(s).map_err(|e| TypeError::InvalidCid(e.to_string()))?;
        Self::from_cid(cid, kind)
    }

    /// The underlying CID.
    pub fn cid(&self) -> &Cid {
        &self.cid
    }

    /// The kind of node this link points at.
    pub fn kind(&self) -> LinkKind {
        self.kind
    }

    /// The digest embedded in the CID, in stored order.
    pub fn digest(&self) -> HashDigest {
        // from_cid and new both guarantee a 32-byte digest.
        let mut bytes = [0u8; DIGEST_LEN];
        bytes.copy_from_slice(self.cid.hash().digest());
        HashDigest::from_hash(bytes)
    }

    /// Conventional display-order hex of the referenced hash.
    pub fn display_hex(&self) -> String {
        self.digest().to_display_hex()
    }

    /// Binary CID encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.cid.to_bytes()
    }

    /// Multibase string form in the requested base.
    pub fn to_string_of_base(&self, base: Base) -> Result<String, TypeError> {
        self.cid
            .to_string_of_base(base)
            .map_err(|e| TypeError::InvalidCid(e.to_string()))
    }
}

impl fmt::Display for Link {
    /// Base58btc, the form used in `{"/": ...}` embeddings.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.to_string_of_base(Base::Base58Btc).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

impl fmt::Debug for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Link({}, {})", self.kind, self)
    }
}

impl Serialize for Link {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let cid = self
            .to_string_of_base(Base::Base58Btc)
            .map_err(serde::ser::Error::custom)?;
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(LINK_KEY, &cid)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Previous-block hash of mainnet block 0000000000000002909e...c23e.
    const FIXTURE_PARENT: &str =
        "87d6242b27d248a9e145fe764a0bcef03a403883a2e4c8590200000000000000";
    const FIXTURE_PARENT_CID: &str = "z4HFzdHLxSgJvCMJrsDtV7MgqiGALZdbbxgcTLVUUXQGBkGYjLb";

    fn parent_digest() -> HashDigest {
        HashDigest::from_hex(FIXTURE_PARENT).unwrap()
    }

    #[test]
    fn every_kind_uses_bitcoin_block_codec() {
        for kind in [
            LinkKind::Block,
            LinkKind::ParentBlock,
            LinkKind::TransactionTreeRoot,
        ] {
            let link = Link::new(&parent_digest(), kind).unwrap();
            assert_eq!(link.cid().codec(), BITCOIN_BLOCK);
            assert_eq!(link.to_string(), FIXTURE_PARENT_CID);
        }
    }

    #[test]
    fn link_matches_reference_cid() {
        let link = Link::new(&parent_digest(), LinkKind::ParentBlock).unwrap();
        assert_eq!(link.to_string(), FIXTURE_PARENT_CID);
        assert_eq!(link.cid().codec(), BITCOIN_BLOCK);
        assert_eq!(link.cid().hash().code(), DBL_SHA2_256);
    }

    #[test]
    fn from_digest_is_deterministic() {
        let a = Link::from_digest(parent_digest().as_bytes(), LinkKind::ParentBlock).unwrap();
        let b = Link::from_digest(parent_digest().as_bytes(), LinkKind::ParentBlock).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn from_digest_rejects_short_input() {
        let err = Link::from_digest(&[0u8; 20], LinkKind::ParentBlock).unwrap_err();
        assert_eq!(
            err,
            TypeError::InvalidLength {
                expected: 32,
                actual: 20
            }
        );
    }

    #[test]
    fn kind_participates_in_equality() {
        let parent = Link::new(&parent_digest(), LinkKind::ParentBlock).unwrap();
        let block = Link::new(&parent_digest(), LinkKind::Block).unwrap();
        assert_eq!(parent.cid(), block.cid());
        assert_ne!(parent, block);
    }

    #[test]
    fn digest_roundtrips_through_cid() {
        let link = Link::new(&parent_digest(), LinkKind::ParentBlock).unwrap();
        assert_eq!(link.digest(), parent_digest());
        assert!(link.display_hex().starts_with("0000000000000002"));
    }

    #[test]
    fn parse_accepts_reference_cid() {
        let link = Link::parse(FIXTURE_PARENT_CID, LinkKind::ParentBlock).unwrap();
        assert_eq!(link.digest(), parent_digest());
    }

    #[test]
    fn parse_rejects_foreign_codec() {
        // dag-pb CIDv0
        let err = Link::parse(
            "QmdfTbBqBPQ7VNxZEYEj14VmRuZBkqFbiwReogJgS1zR1n",
            LinkKind::ParentBlock,
        )
        .unwrap_err();
        assert!(matches!(err, TypeError::InvalidCid(_)));
    }

    #[test]
    fn base32_form_has_multibase_prefix() {
        let link = Link::new(&parent_digest(), LinkKind::ParentBlock).unwrap();
        let s = link.to_string_of_base(Base::Base32Lower).unwrap();
        assert!(s.starts_with('b'));
        assert_eq!(Link::parse(&s, LinkKind::ParentBlock).unwrap(), link);
    }

    #[test]
    fn serializes_as_slash_map() {
        let link = Link::new(&parent_digest(), LinkKind::ParentBlock).unwrap();
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(json, serde_json::json!({ "/": FIXTURE_PARENT_CID }));
    }

    #[test]
    fn kind_string_roundtrip() {
        for kind in [
            LinkKind::Block,
            LinkKind::ParentBlock,
            LinkKind::TransactionTreeRoot,
        ] {
            assert_eq!(kind.as_str().parse::<LinkKind>().unwrap(), kind);
        }
        assert_eq!(
            "uncle-block".parse::<LinkKind>(),
            Err(TypeError::UnknownLinkKind("uncle-block".into()))
        );
    }
}
