use crate::location::Location;
use crate::token::{Token, TokenTag};
use crate::{Expected, LexError};

/// Where the lexer is in its single pass over the source.
#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Scanning,
    /// The sentinel has been produced at least once.
    Ended,
    /// A [`LexError`] was returned; the lexer never scans again.
    Failed(LexError),
}

/// IR source lexer.
///
/// Pull-based: every call to [`Lexer::next_token`] classifies one lexeme and
/// returns it, until the source is exhausted and `END_OF_INPUT` comes back.
///
/// - `Vec<char>` source for index-based navigation
/// - A live [`Location`] kept in step with the cursor
/// - Maximal munch for every multi-character class
/// - Fail-fast: no resynchronization after an error
#[derive(Debug, Clone)]
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    location: Location,
    state: State,
}

impl Lexer {
    /// Create a lexer positioned at line 1, column 0.
    pub fn new(source: &str) -> Self {
        Self::with_location(source, Location::start())
    }

    /// Create a lexer whose first character sits at `location`.
    pub fn with_location(source: &str, location: Location) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            location,
            state: State::Scanning,
        }
    }

    /// The live cursor position.
    pub fn location(&self) -> Location {
        self.location
    }

    /// Scan the next token.
    ///
    /// Once the end of input is reached every further call returns the
    /// `END_OF_INPUT` sentinel again.
    ///
    /// After an error the lexer is left mid-lexeme and does not resume:
    /// every further call returns that same error.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        match &self.state {
            State::Scanning => {}
            State::Ended => return Ok(Token::end(self.location)),
            State::Failed(err) => return Err(err.clone()),
        }

        let result = self.scan_token();
        match &result {
            Ok(token) if token.is_end() => self.state = State::Ended,
            Ok(_) => {}
            Err(err) => self.state = State::Failed(err.clone()),
        }
        result
    }

    fn scan_token(&mut self) -> Result<Token, LexError> {
        loop {
            let start = self.location.snapshot();
            let start_pos = self.pos;

            let Some(ch) = self.peek() else {
                return Ok(Token::end(start));
            };

            let tag = match ch {
                // Separators, never emitted
                ' ' | '\t' | '\r' => {
                    self.advance();
                    continue;
                }

                '\n' => {
                    self.advance();
                    TokenTag::NewLine
                }

                // Sigil words
                '@' => {
                    self.scan_sigil_word(is_alpha_digit_mark, Expected::AlphaDigitMark)?;
                    TokenTag::GlobalId
                }
                '%' => {
                    self.scan_sigil_word(is_alpha_digit_mark, Expected::AlphaDigitMark)?;
                    TokenTag::LocalId
                }
                '#' => {
                    self.scan_sigil_word(is_digit, Expected::Digit)?;
                    TokenTag::AttributeGroup
                }

                // Bare words
                c if is_digit(c) => {
                    self.advance_while(is_digit);
                    TokenTag::Digits
                }
                c if is_alpha_mark(c) => {
                    self.advance_while(is_alpha_digit_mark);
                    TokenTag::Reserved
                }

                c => match TokenTag::punctuation(c) {
                    Some(tag) => {
                        self.advance();
                        tag
                    }
                    None => return Err(self.error(Expected::TokenStart)),
                },
            };

            return Ok(self.token_from(start, start_pos, tag));
        }
    }

    // --- Scanners ---

    /// Consume a sigil, then at least one character matching `continues`,
    /// then every further character matching it.
    fn scan_sigil_word(
        &mut self,
        continues: fn(char) -> bool,
        expected: Expected,
    ) -> Result<(), LexError> {
        self.advance(); // consume sigil
        match self.peek() {
            Some(c) if continues(c) => {
                self.advance_while(continues);
                Ok(())
            }
            _ => Err(self.error(expected)),
        }
    }

    fn advance_while(&mut self, pred: fn(char) -> bool) {
        while self.peek().is_some_and(pred) {
            self.advance();
        }
    }

    // --- Helpers ---

    fn token_from(&self, start: Location, start_pos: usize, tag: TokenTag) -> Token {
        let text: String = self.chars[start_pos..self.pos].iter().collect();
        Token::new(start, tag, text)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.peek() {
            self.pos += 1;
            self.location.advance(ch);
        }
    }

    fn error(&self, expected: Expected) -> LexError {
        LexError {
            location: self.location.snapshot(),
            expected,
            found: self.peek().into(),
        }
    }
}

/// Yields every token up to and including `END_OF_INPUT`, then `None`.
/// Stops for good after the first error.
impl Iterator for Lexer {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Scanning => Some(self.next_token()),
            State::Ended | State::Failed(_) => None,
        }
    }
}

impl std::iter::FusedIterator for Lexer {}

// --- Character classes ---

/// `[._]`
pub fn is_mark(c: char) -> bool {
    c == '.' || c == '_'
}

/// `[A-Za-z._]`
pub fn is_alpha_mark(c: char) -> bool {
    is_mark(c) || c.is_ascii_alphabetic()
}

/// `[A-Za-z0-9._]`
pub fn is_alpha_digit_mark(c: char) -> bool {
    is_alpha_mark(c) || is_digit(c)
}

/// `[0-9]`
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}
