use std::fmt;

use crate::location::Location;

/// Token classification for IR source.
///
/// The matched text always lives on [`Token::text`]; tags carry no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenTag {
    // Words (multi-character, maximal munch)
    Reserved,       // [A-Za-z._][A-Za-z0-9._]*
    GlobalId,       // @[A-Za-z0-9._]+
    LocalId,        // %[A-Za-z0-9._]+
    Digits,         // [0-9]+
    AttributeGroup, // #[0-9]+

    // Punctuation
    Equal,
    Comma,
    Colon,
    Semicolon,
    Asterisk,
    LeftRound,
    RightRound,
    LeftSquare,
    RightSquare,
    LeftCurly,
    RightCurly,

    // Structure
    NewLine,

    // End of input
    EndOfInput,
}

impl TokenTag {
    /// Canonical upper-snake name of the tag.
    pub fn name(self) -> &'static str {
        match self {
            TokenTag::Reserved => "RESERVED",
            TokenTag::GlobalId => "GLOBAL_ID",
            TokenTag::LocalId => "LOCAL_ID",
            TokenTag::Digits => "DIGITS",
            TokenTag::AttributeGroup => "ATTRIBUTE_GROUP",
            TokenTag::Equal => "EQUAL",
            TokenTag::Comma => "COMMA",
            TokenTag::Colon => "COLON",
            TokenTag::Semicolon => "SEMICOLON",
            TokenTag::Asterisk => "ASTERISK",
            TokenTag::LeftRound => "LEFT_ROUND",
            TokenTag::RightRound => "RIGHT_ROUND",
            TokenTag::LeftSquare => "LEFT_SQUARE",
            TokenTag::RightSquare => "RIGHT_SQUARE",
            TokenTag::LeftCurly => "LEFT_CURLY",
            TokenTag::RightCurly => "RIGHT_CURLY",
            TokenTag::NewLine => "NEW_LINE",
            TokenTag::EndOfInput => "END_OF_INPUT",
        }
    }

    /// Tag of a single-character punctuation token.
    pub fn punctuation(ch: char) -> Option<TokenTag> {
        let tag = match ch {
            '=' => TokenTag::Equal,
            ',' => TokenTag::Comma,
            ':' => TokenTag::Colon,
            ';' => TokenTag::Semicolon,
            '*' => TokenTag::Asterisk,
            '(' => TokenTag::LeftRound,
            ')' => TokenTag::RightRound,
            '[' => TokenTag::LeftSquare,
            ']' => TokenTag::RightSquare,
            '{' => TokenTag::LeftCurly,
            '}' => TokenTag::RightCurly,
            _ => return None,
        };
        Some(tag)
    }

    /// Whether the lexeme starts with `@`, `%` or `#`.
    pub fn has_sigil(self) -> bool {
        matches!(
            self,
            TokenTag::GlobalId | TokenTag::LocalId | TokenTag::AttributeGroup
        )
    }
}

impl fmt::Display for TokenTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token produced by the IR lexer.
///
/// `text` is the exact lexeme, sigil included. `location` is where its
/// first character sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub location: Location,
    pub tag: TokenTag,
    pub text: String,
}

impl Token {
    pub fn new(location: Location, tag: TokenTag, text: impl Into<String>) -> Self {
        Self {
            location,
            tag,
            text: text.into(),
        }
    }

    /// The end-of-input sentinel at `location`.
    pub fn end(location: Location) -> Self {
        Self::new(location, TokenTag::EndOfInput, "")
    }

    pub fn is_end(&self) -> bool {
        self.tag == TokenTag::EndOfInput
    }

    /// Whether the token can appear as an instruction operand.
    pub fn is_operand(&self) -> bool {
        matches!(self.tag, TokenTag::LocalId | TokenTag::Digits)
    }

    /// The lexeme with its leading `@`, `%` or `#` removed.
    pub fn text_without_sigil(&self) -> &str {
        if self.tag.has_sigil() {
            self.text
                .strip_prefix(['@', '%', '#'])
                .unwrap_or(&self.text)
        } else {
            &self.text
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:?}", self.location, self.tag, self.text)
    }
}
