//! Compiled path types: segment chains and the `Path` handle.

use std::fmt;
use std::sync::Arc;

/// Element selector of an indexed segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Index {
    /// A fixed element (`name[2]`).
    At(usize),
    /// Every element (`name[*]` or `name[]`).
    All,
}

/// How a segment addresses its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Plain named field access (`name`).
    Field,
    /// Element access into a sequence field (`name[N]`, `name[*]`).
    Indexed(Index),
}

/// One compiled token of a path.
///
/// Segments are immutable and point back at their predecessor, so a chain
/// can be extended without copying the segments it already has.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    name: String,
    kind: SegmentKind,
    parent: Option<Arc<Segment>>,
}

impl Segment {
    /// Creates a segment whose parent is the leaf of `parent`, or a root
    /// segment when `parent` is `None`.
    pub fn new(name: impl Into<String>, kind: SegmentKind, parent: Option<&Path>) -> Self {
        Self {
            name: name.into(),
            kind,
            parent: parent.map(|p| Arc::clone(&p.leaf)),
        }
    }

    /// The field name this segment addresses.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    /// The preceding segment, `None` for the root segment.
    pub fn parent(&self) -> Option<&Segment> {
        self.parent.as_deref()
    }

    /// True for wildcard segments, which fan out instead of producing a value.
    pub fn is_expansion(&self) -> bool {
        self.kind == SegmentKind::Indexed(Index::All)
    }

    /// The fixed index of this segment, if it has one.
    pub fn index(&self) -> Option<usize> {
        match self.kind {
            SegmentKind::Indexed(Index::At(n)) => Some(n),
            _ => None,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            SegmentKind::Field => write!(f, "{}", self.name),
            SegmentKind::Indexed(Index::At(n)) => write!(f, "{}[{}]", self.name, n),
            SegmentKind::Indexed(Index::All) => write!(f, "{}[*]", self.name),
        }
    }
}

/// A compiled path: a handle to the leaf of a segment chain.
///
/// Cloning a `Path` clones one `Arc`.
///
/// # Example
///
/// ```
/// use pathval::Path;
///
/// let path: Path = "Members[*].Name".parse().unwrap();
/// assert_eq!(path.len(), 2);
/// assert!(path.has_wildcard());
/// assert_eq!(path.to_string(), "Members[*].Name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    leaf: Arc<Segment>,
}

impl Path {
    /// Wraps a segment as the leaf of a path.
    pub fn from_segment(segment: Segment) -> Self {
        Self {
            leaf: Arc::new(segment),
        }
    }

    /// Starts a new chain with a single field segment.
    pub fn root(name: impl Into<String>) -> Self {
        Self::from_segment(Segment::new(name, SegmentKind::Field, None))
    }

    /// Extends the chain with a field segment.
    pub fn field(&self, name: impl Into<String>) -> Self {
        self.push(name, SegmentKind::Field)
    }

    /// Extends the chain with a fixed-index segment.
    pub fn at(&self, name: impl Into<String>, index: usize) -> Self {
        self.push(name, SegmentKind::Indexed(Index::At(index)))
    }

    /// Extends the chain with a wildcard segment.
    pub fn all(&self, name: impl Into<String>) -> Self {
        self.push(name, SegmentKind::Indexed(Index::All))
    }

    /// Extends the chain with a segment of any kind.
    pub fn push(&self, name: impl Into<String>, kind: SegmentKind) -> Self {
        Self::from_segment(Segment::new(name, kind, Some(self)))
    }

    /// The last segment of the chain.
    pub fn leaf(&self) -> &Segment {
        &self.leaf
    }

    /// The path without its last segment, `None` for a single-segment path.
    pub fn parent(&self) -> Option<Path> {
        self.leaf.parent.as_ref().map(|leaf| Path {
            leaf: Arc::clone(leaf),
        })
    }

    /// Number of segments in the chain.
    pub fn len(&self) -> usize {
        std::iter::successors(Some(self.leaf()), |s| s.parent()).count()
    }

    /// Always false; a path has at least one segment.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the segments root-to-leaf, in the order they were written.
    pub fn split(&self) -> Vec<&Segment> {
        let mut segments: Vec<&Segment> =
            std::iter::successors(Some(self.leaf()), |s| s.parent()).collect();
        segments.reverse();
        segments
    }

    pub fn has_wildcard(&self) -> bool {
        std::iter::successors(Some(self.leaf()), |s| s.parent()).any(Segment::is_expansion)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.split().into_iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_matches_display() {
        let path = Path::root("a").all("b").at("c", 2).field("d");
        assert_eq!(path.to_string(), "a.b[*].c[2].d");
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn test_parent_hops_reach_root() {
        let path = Path::root("a").field("b").field("c");
        let mut hops = 0;
        let mut current = path.leaf();
        while let Some(parent) = current.parent() {
            current = parent;
            hops += 1;
        }
        assert_eq!(hops, path.len() - 1);
        assert_eq!(current.name(), "a");
    }

    #[test]
    fn test_extending_shares_prefix() {
        let base = Path::root("a");
        let left = base.field("x");
        let right = base.field("y");
        assert_eq!(left.parent(), Some(base.clone()));
        assert_eq!(right.parent(), Some(base));
    }

    #[test]
    fn test_segment_kinds() {
        let path = Path::root("a").at("b", 3).all("c");
        let segments = path.split();
        assert_eq!(segments[0].kind(), SegmentKind::Field);
        assert_eq!(segments[1].index(), Some(3));
        assert!(!segments[1].is_expansion());
        assert!(segments[2].is_expansion());
        assert_eq!(segments[2].index(), None);
    }
}
