//! varcheck Lexer
//!
//! Tokenizes LLVM-IR-like assembly into a stream of classified tokens, each
//! carrying the location of its first character. Handles sigil identifiers
//! (`@global`, `%local`, `#0`), bare words, digit runs, punctuation and
//! significant newlines. The lexer is fail-fast: the first malformed lexeme
//! ends the scan with a [`LexError`].
//!
//! # Example
//!
//! ```
//! use varcheck_lexer::{tokenize, TokenTag};
//!
//! let tokens = tokenize("%1 = load i32").unwrap();
//! assert_eq!(tokens[0].tag, TokenTag::LocalId);
//! assert_eq!(tokens.last().unwrap().tag, TokenTag::EndOfInput);
//! ```

pub mod lexer;
pub mod location;
pub mod token;

use std::fmt;

pub use lexer::Lexer;
pub use location::Location;
pub use token::{Token, TokenTag};

/// Scan `source` to completion. The last token is always the sentinel.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).collect()
}

/// Character class a lexeme required at the failing position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// `[0-9]`, after `#`.
    Digit,
    /// `[A-Za-z0-9._]`, after `@` or `%`.
    AlphaDigitMark,
    /// Any character that can begin a lexeme.
    TokenStart,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Digit => f.write_str("[0-9]"),
            Expected::AlphaDigitMark => f.write_str("[A-Za-z0-9._]"),
            Expected::TokenStart => f.write_str(
                "one of '@', '%', '#', [A-Za-z._], [0-9], \
                 '=', ',', ':', ';', '*', '(', ')', '[', ']', '{', '}', \
                 newline or whitespace",
            ),
        }
    }
}

/// What the lexer actually saw where [`Expected`] did not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    Char(char),
    EndOfInput,
}

impl From<Option<char>> for Found {
    fn from(ch: Option<char>) -> Self {
        ch.map_or(Found::EndOfInput, Found::Char)
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Char(c) => write!(f, "'{}'", c.escape_debug()),
            Found::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// Lexer error with position information.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "Lexer error at line {line}, column {column}: expected {expected}, found {found}",
    line = .location.line,
    column = .location.column
)]
pub struct LexError {
    pub location: Location,
    pub expected: Expected,
    pub found: Found,
}
