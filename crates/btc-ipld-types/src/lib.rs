//! Foundation types for Bitcoin IPLD.
//!
//! Every other `btc-ipld` crate depends on `btc-ipld-types`.
//!
//! # Key Types
//!
//! - [`HashDigest`] — 32-byte double-SHA-256 digest in stored order
//! - [`Link`] — kind-tagged CIDv1 (`bitcoin-block`, `dbl-sha2-256`)
//! - [`LinkKind`] — what a link points at

pub mod digest;
pub mod error;
pub mod link;

pub use digest::{HashDigest, DIGEST_LEN};
pub use error::TypeError;
pub use link::{Link, LinkKind, BITCOIN_BLOCK, DBL_SHA2_256, LINK_KEY};

/// Re-exported so callers can pick a multibase without a direct dependency.
pub use cid::multibase::Base;
