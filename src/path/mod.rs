//! Path compiler: turns dotted path strings into segment chains.
//!
//! # Supported Syntax
//!
//! - `name` - Named field access
//! - `a.b.c` - Nested field access
//! - `name[N]` - Element `N` of a sequence field
//! - `name[*]` or `name[]` - Every element of a sequence field
//!
//! # Examples
//!
//! ```
//! // Name                - a top-level field
//! // Address.PostalCode  - a nested field
//! // Members[0].Name     - the name of the first member
//! // Ts[*].Vars[2]       - element 2 of `Vars` in every element of `Ts`
//! ```
//!
//! There is no escaping: field names cannot contain `.` or `[`.

pub mod ast;
pub mod error;
pub mod parser;

use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

pub use ast::{Index, Path, Segment, SegmentKind};
pub use error::ParseError;
pub use parser::Parser;

impl Path {
    /// Compiles a path string.
    ///
    /// ```
    /// use pathval::{Path, SegmentKind, Index};
    ///
    /// let path = Path::parse("Ts[*].Vars[2]").unwrap();
    /// let kinds: Vec<_> = path.split().iter().map(|s| s.kind()).collect();
    /// assert_eq!(
    ///     kinds,
    ///     vec![
    ///         SegmentKind::Indexed(Index::All),
    ///         SegmentKind::Indexed(Index::At(2)),
    ///     ]
    /// );
    /// ```
    pub fn parse(input: &str) -> Result<Path, ParseError> {
        Parser::parse(input)
    }
}

impl FromStr for Path {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::parse(s)
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct PathVisitor;

impl Visitor<'_> for PathVisitor {
    type Value = Path;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a dotted field path such as `Members[*].Name`")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Path, E> {
        Parser::parse(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(PathVisitor)
    }
}
