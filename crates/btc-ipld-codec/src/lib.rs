//! Bitcoin block header codec.
//!
//! Decodes the fixed 80-byte header into a [`RawHeader`], assembles the
//! addressable [`BlockNode`] (the two hash fields become [`Link`]s), and
//! computes a block's own identifier with [`block_link`].
//!
//! All operations are pure functions of their input bytes.
//!
//! [`Link`]: btc_ipld_types::Link

pub mod error;
pub mod hasher;
pub mod header;
pub mod node;

pub use error::{CodecError, CodecResult};
pub use hasher::{block_link, BlockHasher};
pub use header::{RawHeader, HEADER_LEN};
pub use node::{BlockNode, NODE_KEYS};
