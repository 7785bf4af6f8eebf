//! Link-stop path resolution.
//!
//! Resolution consumes one segment per step against the current node and
//! never follows a link. When a link is reached with segments left over,
//! the link is returned with the unconsumed suffix so the caller can fetch
//! the linked node and resolve the remainder there. Resolving any path
//! therefore costs one decode per link hop.

use btc_ipld_codec::BlockNode;
use btc_ipld_types::Link;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::ResolveError;
use crate::node::{Field, Resolvable, Scalar};
use crate::path::Path;

/// Outcome of a successful resolve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolveResult<N> {
    /// The path was empty: the whole node.
    Node(N),
    /// The path ended on a scalar.
    Value(Scalar),
    /// The path reached a link. `remainder` holds the unconsumed segments
    /// joined with `/`, or is empty if the link itself was addressed.
    Link { link: Link, remainder: String },
}

impl<N> ResolveResult<N> {
    /// Unconsumed path; empty unless resolution stopped at a link early.
    pub fn remainder_path(&self) -> &str {
        match self {
            Self::Link { remainder, .. } => remainder,
            Self::Node(_) | Self::Value(_) => "",
        }
    }

    pub fn as_node(&self) -> Option<&N> {
        match self {
            Self::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<Scalar> {
        match self {
            Self::Value(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_link(&self) -> Option<&Link> {
        match self {
            Self::Link { link, .. } => Some(link),
            _ => None,
        }
    }

    /// Returns `true` when the caller has to follow a link to finish.
    pub fn needs_hop(&self) -> bool {
        !self.remainder_path().is_empty()
    }
}

impl<N: Serialize> Serialize for ResolveResult<N> {
    /// `{"value": ..., "remainderPath": "..."}` with links as `{"/": cid}`.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ResolveResult", 2)?;
        match self {
            Self::Node(node) => state.serialize_field("value", node)?,
            Self::Value(v) => state.serialize_field("value", v)?,
            Self::Link { link, .. } => state.serialize_field("value", link)?,
        }
        state.serialize_field("remainderPath", self.remainder_path())?;
        state.end()
    }
}

/// Resolve `path` against `node`.
///
/// `""` and `"/"` return the whole node. Fails with
/// [`ResolveError::NotFound`] if a segment names no key and with
/// [`ResolveError::InvalidPath`] if the path continues past a scalar.
pub fn resolve<N>(node: &N, path: &str) -> Result<ResolveResult<N>, ResolveError>
where
    N: Resolvable + Clone,
{
    let parsed = Path::parse(path);
    let Some((segment, rest)) = parsed.split_first() else {
        return Ok(ResolveResult::Node(node.clone()));
    };

    let Some(field) = node.field(segment) else {
        debug!(segment, path, "path segment not found");
        return Err(ResolveError::NotFound {
            segment: segment.to_string(),
            path: path.to_string(),
        });
    };

    match field {
        Field::Scalar(v) if rest.is_root() => Ok(ResolveResult::Value(v)),
        Field::Scalar(_) => {
            debug!(segment, path, "path continues past scalar");
            Err(ResolveError::InvalidPath {
                segment: segment.to_string(),
                path: path.to_string(),
            })
        }
        Field::Link(link) => {
            let remainder = rest.to_string();
            if !remainder.is_empty() {
                debug!(segment, %link, remainder = %remainder, "stopped at link");
            }
            Ok(ResolveResult::Link {
                link: link.clone(),
                remainder,
            })
        }
    }
}

/// Return the link addressed by `path`, if the path ends exactly on one.
///
/// Scalars, the whole node, and links reached with segments left over all
/// yield `None`.
pub fn link_at<N>(node: &N, path: &str) -> Result<Option<Link>, ResolveError>
where
    N: Resolvable + Clone,
{
    Ok(match resolve(node, path)? {
        ResolveResult::Link { link, remainder } if remainder.is_empty() => Some(link),
        _ => None,
    })
}

/// Every path resolvable within the node, in key order.
///
/// Links are leaves here; their targets live in other blocks.
pub fn tree<N: Resolvable>(node: &N) -> Vec<String> {
    node.keys().iter().map(|k| k.to_string()).collect()
}

/// Decode `block` and resolve `path` against the fresh node.
///
/// `None` behaves like the empty path.
pub fn resolve_block(
    block: &[u8],
    path: Option<&str>,
) -> Result<ResolveResult<BlockNode>, ResolveError> {
    let node = BlockNode::from_bytes(block)?;
    resolve(&node, path.unwrap_or_default())
}

/// Continuation form of [`resolve_block`].
///
/// The callback runs exactly once, synchronously, with either the result
/// or the error.
pub fn resolve_with<F>(block: &[u8], path: Option<&str>, callback: F)
where
    F: FnOnce(Result<ResolveResult<BlockNode>, ResolveError>),
{
    callback(resolve_block(block, path))
}

/// Decode `block` and list its paths.
pub fn tree_block(block: &[u8]) -> Result<Vec<String>, ResolveError> {
    Ok(tree(&BlockNode::from_bytes(block)?))
}
