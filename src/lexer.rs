use crate::ast::{Keyword, Token};
use crate::{charset, urn};
use std::fmt;
use thiserror::Error;
use tracing::trace;

/// Zero-based offset into the input, counted in characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub offset: usize,
}

impl Position {
    pub fn new(offset: usize) -> Self {
        Position { offset }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "offset {}", self.offset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexErrorReason {
    InvalidNumberLiteral,
    InvalidStringLiteral,
    UnexpectedCharacter,
    /// Text starting with `urn:` that is not a valid URN
    InvalidAttemptedUrnIdentifier,
    InvalidAttributeIdentifier,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("{message} at {position}")]
pub struct LexError {
    pub reason: LexErrorReason,
    pub message: String,
    pub position: Position,
}

impl LexError {
    pub(crate) fn new(reason: LexErrorReason, message: impl Into<String>, offset: usize) -> Self {
        LexError {
            reason,
            message: message.into(),
            position: Position::new(offset),
        }
    }
}

/// A token with the position of its first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedToken {
    pub token: Token,
    pub position: Position,
}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    snapshots: Vec<usize>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            snapshots: Vec::new(),
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.position)
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn advance_by(&mut self, count: usize) {
        self.position += count;
    }

    fn skip_digits(&mut self) {
        while self.current_char().is_some_and(charset::is_digit) {
            self.advance();
        }
    }

    fn text(&self, start: usize, end: usize) -> String {
        self.input[start..end].iter().collect()
    }

    /// Saves the current position.
    pub fn push_snapshot(&mut self) {
        self.snapshots.push(self.position);
    }

    /// Forgets the most recent snapshot without moving.
    pub fn discard_snapshot(&mut self) {
        self.snapshots.pop();
    }

    /// Moves back to the most recent snapshot and forgets it. Does nothing
    /// when no snapshot is saved.
    pub fn pop_snapshot(&mut self) {
        if let Some(position) = self.snapshots.pop() {
            self.position = position;
        }
    }

    /// RFC 7159 number: `[ "-" ] int [ frac ] [ exp ]`, where `int` has no
    /// leading zeros and `frac` is only taken when a digit follows the dot.
    fn read_number(&mut self) -> Result<Token, LexError> {
        let start = self.position;

        if self.current_char() == Some('-') {
            self.advance();
        }

        match self.current_char() {
            Some('0') => self.advance(),
            Some(ch) if charset::is_digit(ch) => self.skip_digits(),
            _ => {
                return Err(LexError::new(
                    LexErrorReason::InvalidNumberLiteral,
                    "Expected digit",
                    self.position,
                ));
            }
        }

        if self.current_char() == Some('.') && self.peek_char(1).is_some_and(charset::is_digit) {
            self.advance();
            self.skip_digits();
        }

        if matches!(self.current_char(), Some('e' | 'E')) {
            let digits_at = if matches!(self.peek_char(1), Some('+' | '-')) {
                2
            } else {
                1
            };
            if !self.peek_char(digits_at).is_some_and(charset::is_digit) {
                return Err(LexError::new(
                    LexErrorReason::InvalidNumberLiteral,
                    "Expected digit in exponent",
                    self.position + digits_at,
                ));
            }
            self.advance_by(digits_at);
            self.skip_digits();
        }

        Ok(Token::Number(self.text(start, self.position)))
    }

    /// RFC 7159 string. The literal keeps its quotes and escape sequences.
    fn read_string(&mut self) -> Result<Token, LexError> {
        let start = self.position;
        self.advance(); // Consume opening quote

        loop {
            match self.current_char() {
                None => {
                    return Err(LexError::new(
                        LexErrorReason::InvalidStringLiteral,
                        "Unexpected end of input",
                        self.position,
                    ));
                }
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => match self.peek_char(1) {
                    Some('"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't') => self.advance_by(2),
                    Some('u') => {
                        if !(2..6).all(|i| self.peek_char(i).is_some_and(charset::is_hex_digit)) {
                            return Err(LexError::new(
                                LexErrorReason::InvalidStringLiteral,
                                "Invalid unicode escape sequence",
                                self.position,
                            ));
                        }
                        self.advance_by(6);
                    }
                    _ => {
                        return Err(LexError::new(
                            LexErrorReason::InvalidStringLiteral,
                            "Invalid escape sequence",
                            self.position,
                        ));
                    }
                },
                Some(_) => self.advance(),
            }
        }

        Ok(Token::String(self.text(start, self.position)))
    }

    /// Reads a keyword, attribute name or URN.
    ///
    /// URNs may contain `(`, `)` and `.`, which the filter grammar also
    /// uses. Those characters only continue the run when the text read so
    /// far starts with `urn:`, so `not(` is a keyword followed by a
    /// parenthesis while `urn:x:not(` stays one run.
    fn read_identifier(&mut self) -> Result<Token, LexError> {
        let start = self.position;
        // Decided at the first `(`, `)` or `.`; only the first four
        // characters of the run matter.
        let mut attempted_urn = None;

        while let Some(ch) = self.current_char() {
            if !charset::is_identifier_run(ch) {
                break;
            }
            if matches!(ch, '(' | ')' | '.') {
                let prefix_end = self.position.min(start + 4);
                let attempted = *attempted_urn
                    .get_or_insert_with(|| urn::is_attempted_urn(&self.text(start, prefix_end)));
                if !attempted {
                    break;
                }
            }
            self.advance();
        }

        let literal = self.text(start, self.position);

        if literal.is_empty() {
            return Err(LexError::new(
                LexErrorReason::InvalidAttributeIdentifier,
                "Nothing found",
                start,
            ));
        }

        if let Ok(keyword) = literal.parse::<Keyword>() {
            return Ok(Token::Keyword(keyword));
        }

        if charset::is_valid_attr_name(&literal) {
            return Ok(Token::Attribute(literal));
        }

        if urn::is_attempted_urn(&literal) {
            if let Some(schema) = self.split_qualified_name(start, &literal) {
                return Ok(Token::Urn(schema));
            }
            if urn::is_valid_urn(&literal) {
                return Ok(Token::Urn(literal));
            }
            return Err(LexError::new(
                LexErrorReason::InvalidAttemptedUrnIdentifier,
                "An attempted URN is malformed or contains invalid characters",
                start,
            ));
        }

        Err(LexError::new(
            LexErrorReason::InvalidAttributeIdentifier,
            "An identifier contains invalid characters",
            start,
        ))
    }

    /// Splits `urn:...:User:userName` (optionally followed by
    /// `.subAttr`) at its last colon when the head is a valid URN and the
    /// tail starts with a valid attribute name. On success the lexer is
    /// rewound to the colon and the URN is returned.
    ///
    /// The whole text would usually be a valid URN as well, but a schema
    /// followed by an attribute is what a filter means by it.
    fn split_qualified_name(&mut self, start: usize, literal: &str) -> Option<String> {
        // The run only holds ASCII, so byte offsets are character offsets.
        let colon = literal.rfind(':')?;
        let (schema, rest) = (&literal[..colon], &literal[colon + 1..]);
        let attribute = rest.split_once('.').map_or(rest, |(head, _)| head);

        if urn::is_valid_urn(schema) && charset::is_valid_attr_name(attribute) {
            trace!(schema = %schema, attribute = %attribute, "split qualified attribute name");
            self.position = start + colon;
            Some(schema.to_string())
        } else {
            None
        }
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        match self.current_char() {
            None => Ok(Token::Eof),
            Some(' ') => {
                self.advance();
                Ok(Token::Space)
            }
            Some('(') => {
                self.advance();
                Ok(Token::LParen)
            }
            Some(')') => {
                self.advance();
                Ok(Token::RParen)
            }
            Some('[') => {
                self.advance();
                Ok(Token::LBracket)
            }
            Some(']') => {
                self.advance();
                Ok(Token::RBracket)
            }
            Some('.') => {
                self.advance();
                Ok(Token::Dot)
            }
            Some(':') => {
                self.advance();
                Ok(Token::Colon)
            }
            Some('"') => self.read_string(),
            Some(ch) if charset::is_digit(ch) || ch == '-' => self.read_number(),
            // Keywords, attribute names and URNs all start with a letter
            Some(ch) if charset::is_alpha(ch) => self.read_identifier(),
            Some(ch) => Err(LexError::new(
                LexErrorReason::UnexpectedCharacter,
                format!("Unexpected character '{ch}'"),
                self.position,
            )),
        }
    }

    /// Lexes the rest of the input. The result ends with exactly one
    /// [`Token::Eof`].
    pub fn tokenize(&mut self) -> Result<Vec<SpannedToken>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let position = self.position();
            let token = self.next_token()?;
            let done = token == Token::Eof;
            tokens.push(SpannedToken { token, position });
            if done {
                return Ok(tokens);
            }
        }
    }
}

#[test]
fn test_keyword_before_paren() {
    let mut lexer = Lexer::new("not(");
    assert_eq!(lexer.next_token(), Ok(Token::Keyword(Keyword::Not)));
    assert_eq!(lexer.next_token(), Ok(Token::LParen));
    assert_eq!(lexer.next_token(), Ok(Token::Eof));
}

#[test]
fn test_split_rewinds_to_colon() {
    let mut lexer = Lexer::new("urn:abc:def:ghi");
    assert_eq!(lexer.next_token(), Ok(Token::Urn("urn:abc:def".to_string())));
    assert_eq!(lexer.position(), Position::new(11));
    assert_eq!(lexer.next_token(), Ok(Token::Colon));
    assert_eq!(lexer.next_token(), Ok(Token::Attribute("ghi".to_string())));
}
