//! The node shape the resolver walks.
//!
//! The resolver only needs to know which keys a node has and whether each
//! value is a scalar or a link. [`Resolvable`] captures exactly that, so
//! the walk is independent of how the node was decoded.

use std::fmt;

use btc_ipld_codec::{BlockNode, NODE_KEYS};
use btc_ipld_types::Link;
use serde::Serialize;

/// A leaf value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i32),
    UInt(u32),
}

impl Scalar {
    /// Widen to `i64`; every scalar fits.
    pub fn as_i64(&self) -> i64 {
        match *self {
            Self::Int(v) => i64::from(v),
            Self::UInt(v) => i64::from(v),
        }
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<u32> for Scalar {
    fn from(v: u32) -> Self {
        Self::UInt(v)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
        }
    }
}

/// The value stored under one key of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field<'a> {
    Scalar(Scalar),
    Link(&'a Link),
}

impl Field<'_> {
    pub fn is_link(&self) -> bool {
        matches!(self, Self::Link(_))
    }
}

/// A node with a fixed, ordered set of keys.
pub trait Resolvable {
    /// All keys, in node order.
    fn keys(&self) -> &[&'static str];

    /// The value under `key`, or `None` if the node has no such key.
    fn field(&self, key: &str) -> Option<Field<'_>>;
}

impl Resolvable for BlockNode {
    fn keys(&self) -> &[&'static str] {
        &NODE_KEYS
    }

    fn field(&self, key: &str) -> Option<Field<'_>> {
        let field = match key {
            "version" => Field::Scalar(self.version().into()),
            "parent" => Field::Link(self.parent()),
            "tx" => Field::Link(self.tx()),
            "timestamp" => Field::Scalar(self.timestamp().into()),
            "difficulty" => Field::Scalar(self.difficulty().into()),
            "nonce" => Field::Scalar(self.nonce().into()),
            _ => return None,
        };
        Some(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixture;

    #[test]
    fn every_key_has_a_field() {
        let node = fixture();
        for key in node.keys() {
            assert!(node.field(key).is_some(), "missing field for {key}");
        }
    }

    #[test]
    fn only_hash_fields_are_links() {
        let node = fixture();
        let links: Vec<_> = node
            .keys()
            .iter()
            .filter(|k| node.field(k).is_some_and(|f| f.is_link()))
            .copied()
            .collect();
        assert_eq!(links, vec!["parent", "tx"]);
    }

    #[test]
    fn unknown_key_is_none() {
        assert!(fixture().field("merkleRoot").is_none());
        assert!(fixture().field("").is_none());
    }

    #[test]
    fn scalar_display_and_widening() {
        assert_eq!(Scalar::from(-2i32).to_string(), "-2");
        assert_eq!(Scalar::from(3159344128u32).as_i64(), 3159344128);
    }
}
