//! Link-stop path resolution for Bitcoin IPLD.
//!
//! Walks a decoded node along a `/`-delimited path and returns one of:
//!
//! - the whole node (empty path),
//! - a scalar leaf,
//! - a link plus the unconsumed remainder of the path.
//!
//! Links are never followed. Crossing into the linked block is the
//! caller's job: fetch it, then resolve the remainder against it.
//!
//! # Rules
//!
//! 1. Empty segments are dropped, so `"/"`, `""` and no path are the same.
//! 2. An unknown segment fails with [`ResolveError::NotFound`].
//! 3. A path continuing past a scalar fails with [`ResolveError::InvalidPath`].
//! 4. The remainder never starts with `/`.

pub mod error;
pub mod node;
pub mod path;
pub mod resolve;

pub use error::ResolveError;
pub use node::{Field, Resolvable, Scalar};
pub use path::Path;
pub use resolve::{link_at, resolve, resolve_block, resolve_with, tree, tree_block, ResolveResult};

#[cfg(test)]
pub(crate) mod tests {
    use btc_ipld_codec::BlockNode;

    /// Mainnet header 0000000000000002909eabb1da3710351faf452374946a0dfdb247d491c6c23e.
    pub(crate) const FIXTURE_HEX: &str = concat!(
        "02000000",
        "87d6242b27d248a9e145fe764a0bcef03a403883a2e4c8590200000000000000",
        "11a5b9a70acebedbbf71ef8ca341e8a98cf279c49eee8f92e10a2227743b6aeb",
        "9fa7ab52",
        "6eba0419",
        "00c44fbc",
    );

    pub(crate) const PARENT_CID: &str = "z4HFzdHLxSgJvCMJrsDtV7MgqiGALZdbbxgcTLVUUXQGBkGYjLb";
    pub(crate) const TX_CID: &str = "z4HFzdHD15kVvtmVzeD7z9sisZ7acSC88wXS3KJGwGrnr2DwcVQ";

    pub(crate) fn fixture_bytes() -> Vec<u8> {
        hex::decode(FIXTURE_HEX).unwrap()
    }

    pub(crate) fn fixture() -> BlockNode {
        BlockNode::from_bytes(&fixture_bytes()).unwrap()
    }
}
