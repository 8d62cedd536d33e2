use std::fmt;

/// A position in source text.
///
/// Lines are 1-based, columns are 0-based and count characters, not bytes.
/// Tokens and errors each hold their own copy taken when scanning of the
/// lexeme began, so the live cursor can keep moving without affecting them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    /// Column every line starts at.
    pub const LINE_START: usize = 0;

    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// The location of the first character of a source text.
    pub fn start() -> Self {
        Self::new(1, Self::LINE_START)
    }

    /// Move past `ch`. A newline starts the next line; anything else moves
    /// one column to the right.
    pub fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = Self::LINE_START;
        } else {
            self.column += 1;
        }
    }

    /// An independent copy of this location.
    pub fn snapshot(&self) -> Location {
        *self
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
