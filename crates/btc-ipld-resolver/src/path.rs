//! Slash-delimited path expressions.
//!
//! Normalization rules:
//! - Split on `/`
//! - Empty segments are dropped, so leading, trailing and doubled slashes
//!   are all ignored
//! - An absent path, `""` and `"/"` all normalize to the empty path

use std::fmt;

/// Separator between path segments.
pub const SEPARATOR: char = '/';

/// A normalized path borrowing its segments from the input string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path<'a> {
    segments: Vec<&'a str>,
}

impl<'a> Path<'a> {
    /// Normalize a raw path string.
    pub fn parse(raw: &'a str) -> Self {
        Self {
            segments: raw.split(SEPARATOR).filter(|s| !s.is_empty()).collect(),
        }
    }

    /// The empty path, addressing the node itself.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns `true` if there are no segments.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    /// The first segment and the path made of the rest.
    pub fn split_first(&self) -> Option<(&'a str, Path<'a>)> {
        let (first, rest) = self.segments.split_first()?;
        Some((
            *first,
            Path {
                segments: rest.to_vec(),
            },
        ))
    }
}

impl fmt::Display for Path<'_> {
    /// Segments joined with `/`, never with a leading slash.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

impl<'a> From<Option<&'a str>> for Path<'a> {
    fn from(raw: Option<&'a str>) -> Self {
        raw.map(Path::parse).unwrap_or_default()
    }
}
