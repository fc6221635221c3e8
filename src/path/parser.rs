//! Path string parser.

use super::ast::{Index, Path, Segment, SegmentKind};
use super::error::ParseError;

/// Parser for dotted path strings.
pub struct Parser<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given path string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Parses the path string into a segment chain.
    pub fn parse(input: &str) -> Result<Path, ParseError> {
        Parser::new(input).parse_path()
    }

    fn parse_path(&mut self) -> Result<Path, ParseError> {
        if self.input.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut path: Option<Path> = None;
        loop {
            let segment = self.parse_segment(path.as_ref())?;
            path = Some(Path::from_segment(segment));

            match self.next() {
                None => break,
                Some('.') => {
                    if self.is_eof() {
                        return Err(ParseError::EmptySegment {
                            position: self.position,
                        });
                    }
                }
                Some(ch) => {
                    return Err(ParseError::UnexpectedChar {
                        position: self.position - ch.len_utf8(),
                        found: ch,
                        expected: "'.' or end of path".to_string(),
                    })
                }
            }
        }

        // The loop runs at least once, and every iteration stores a path.
        path.ok_or(ParseError::Empty)
    }

    /// Parses one token: `name`, `name[N]`, `name[*]` or `name[]`.
    fn parse_segment(&mut self, parent: Option<&Path>) -> Result<Segment, ParseError> {
        let start = self.position;
        let name = self.parse_identifier();

        if name.is_empty() {
            return match self.peek() {
                None | Some('.') => Err(ParseError::EmptySegment { position: start }),
                Some(ch) => Err(ParseError::UnexpectedChar {
                    position: start,
                    found: ch,
                    expected: "field name".to_string(),
                }),
            };
        }

        let kind = if self.peek() == Some('[') {
            SegmentKind::Indexed(self.parse_bracket()?)
        } else {
            SegmentKind::Field
        };

        Ok(Segment::new(name, kind, parent))
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Returns the next character and advances position.
    fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Expects a specific character and advances, or returns an error.
    fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        let pos = self.position;
        match self.next() {
            Some(ch) if ch == expected => Ok(()),
            Some(ch) => Err(ParseError::UnexpectedChar {
                position: pos,
                found: ch,
                expected: format!("'{}'", expected),
            }),
            None => Err(ParseError::UnexpectedEnd {
                expected: format!("'{}'", expected),
            }),
        }
    }

    /// Consumes a (possibly empty) run of identifier characters.
    fn parse_identifier(&mut self) -> &'a str {
        let start = self.position;
        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || ch == '_' || ch == '-' {
                self.next();
            } else {
                break;
            }
        }
        &self.input[start..self.position]
    }

    /// Parses a bracket expression: `[N]`, `[*]` or `[]`.
    fn parse_bracket(&mut self) -> Result<Index, ParseError> {
        self.expect('[')?;

        let index = match self.peek() {
            Some(']') => Index::All,
            Some('*') => {
                self.next();
                Index::All
            }
            Some('0'..='9') => Index::At(self.parse_number()?),
            Some(_) => {
                let start = self.position;
                let text: String = self.input[start..]
                    .chars()
                    .take_while(|c| *c != ']' && *c != '.')
                    .collect();
                return Err(ParseError::InvalidIndex {
                    position: start,
                    text,
                });
            }
            None => {
                return Err(ParseError::UnexpectedEnd {
                    expected: "index, '*' or ']'".to_string(),
                })
            }
        };

        self.expect(']')?;
        Ok(index)
    }

    /// Parses a base-10 index.
    fn parse_number(&mut self) -> Result<usize, ParseError> {
        let start = self.position;
        while let Some('0'..='9') = self.peek() {
            self.next();
        }
        let digits = &self.input[start..self.position];
        digits.parse::<usize>().map_err(|_| ParseError::InvalidIndex {
            position: start,
            text: digits.to_string(),
        })
    }
}
