//! Error types for path parsing.

use std::fmt;

/// Errors that can occur while compiling a path string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The path string was empty.
    Empty,
    /// A `.`-separated token had no content (`a..b`, `a.`).
    EmptySegment { position: usize },
    /// Unexpected character at a specific position.
    UnexpectedChar {
        position: usize,
        found: char,
        expected: String,
    },
    /// Unexpected end of input.
    UnexpectedEnd { expected: String },
    /// A bracket held something that is not a usable index.
    InvalidIndex { position: usize, text: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "Path is empty"),
            ParseError::EmptySegment { position } => {
                write!(f, "Empty path segment at position {}", position)
            }
            ParseError::UnexpectedChar {
                position,
                found,
                expected,
            } => write!(
                f,
                "Unexpected character '{}' at position {}, expected {}",
                found, position, expected
            ),
            ParseError::UnexpectedEnd { expected } => {
                write!(f, "Unexpected end of path, expected {}", expected)
            }
            ParseError::InvalidIndex { position, text } => {
                write!(f, "Invalid index '{}' at position {}", text, position)
            }
        }
    }
}

impl std::error::Error for ParseError {}
