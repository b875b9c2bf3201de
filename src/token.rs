//! Token reading strategies
//!
//! A [`TokenKind`] says how input text is cut into chunks and how a chunk
//! becomes a token. [`TokenReader`] applies a kind to buffered text lazily.
//! Word and line tokens borrow from the input buffer.

use crate::config::DataType;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::str;

/// How raw input is split into chunks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// Runs of whitespace separate chunks
    Whitespace,
    /// Line terminators separate chunks; empty lines are kept
    Line,
}

/// Reading strategy for one data type
pub trait TokenKind<'a> {
    /// Token value; `Ord` is the natural order used for sorting
    type Token: Ord + Hash + Clone + fmt::Display + Send + Sync + 'a;

    const DATA_TYPE: DataType;
    const DELIMITER: Delimiter;

    /// Convert a chunk into a token, `None` if the chunk is malformed
    fn parse(chunk: &'a str) -> Option<Self::Token>;
}

/// Signed 64-bit integers
pub struct Integers;

/// Whitespace-delimited words
pub struct Words;

/// Whole lines
pub struct Lines;

impl<'a> TokenKind<'a> for Integers {
    type Token = i64;

    const DATA_TYPE: DataType = DataType::Long;
    const DELIMITER: Delimiter = Delimiter::Whitespace;

    fn parse(chunk: &'a str) -> Option<i64> {
        chunk.parse().ok()
    }
}

impl<'a> TokenKind<'a> for Words {
    type Token = &'a str;

    const DATA_TYPE: DataType = DataType::Word;
    const DELIMITER: Delimiter = Delimiter::Whitespace;

    fn parse(chunk: &'a str) -> Option<&'a str> {
        Some(chunk)
    }
}

impl<'a> TokenKind<'a> for Lines {
    type Token = &'a str;

    const DATA_TYPE: DataType = DataType::Line;
    const DELIMITER: Delimiter = Delimiter::Line;

    fn parse(chunk: &'a str) -> Option<&'a str> {
        Some(chunk)
    }
}

/// A chunk that could not be converted to a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MalformedToken<'a> {
    pub chunk: &'a str,
}

impl fmt::Display for MalformedToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" is not an int. It will be skipped.", self.chunk)
    }
}

/// Lines ended by `\r\n`, `\n`, a lone `\r`, or a Unicode line or
/// paragraph separator. A terminator at the very end does not start an
/// extra empty line.
struct LineChunks<'a> {
    rest: &'a str,
}

#[inline]
fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

impl<'a> Iterator for LineChunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let rest = self.rest;
        match rest.char_indices().find(|&(_, c)| is_line_terminator(c)) {
            Some((end, c)) => {
                let mut next = end + c.len_utf8();
                if c == '\r' && rest[next..].starts_with('\n') {
                    next += 1;
                }
                self.rest = &rest[next..];
                Some(&rest[..end])
            }
            None => {
                self.rest = "";
                Some(rest)
            }
        }
    }
}

enum Chunks<'a> {
    Whitespace(str::SplitWhitespace<'a>),
    Line(LineChunks<'a>),
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<&'a str> {
        match self {
            Chunks::Whitespace(words) => words.next(),
            Chunks::Line(lines) => lines.next(),
        }
    }
}

/// Lazy, single-pass token sequence over buffered text
pub struct TokenReader<'a, K> {
    chunks: Chunks<'a>,
    _kind: PhantomData<K>,
}

impl<'a, K: TokenKind<'a>> TokenReader<'a, K> {
    pub fn new(text: &'a str) -> Self {
        let chunks = match K::DELIMITER {
            Delimiter::Whitespace => Chunks::Whitespace(text.split_whitespace()),
            Delimiter::Line => Chunks::Line(LineChunks { rest: text }),
        };
        Self {
            chunks,
            _kind: PhantomData,
        }
    }
}

impl<'a, K: TokenKind<'a>> Iterator for TokenReader<'a, K> {
    type Item = Result<K::Token, MalformedToken<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk = self.chunks.next()?;
        Some(K::parse(chunk).ok_or(MalformedToken { chunk }))
    }
}
