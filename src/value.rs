use crate::ast::{Keyword, Token};
use crate::lexer::{LexError, LexErrorReason, Lexer, SpannedToken};
use rust_decimal::Decimal;
use std::str::FromStr;

/// The right-hand side of an attribute comparison (`compValue`).
///
/// Literals keep the exact text they were parsed from, so that rendering
/// a parsed filter gives back the characters it was read from: `1.10` stays
/// `1.10` and `"\u0041"` is not turned into `"A"`.
///
/// # Examples
///
/// ```
/// use scim_filter::ComparativeValue;
///
/// let value = ComparativeValue::string(r#""bjensen""#);
/// assert_eq!(value.literal(), r#""bjensen""#);
/// assert_eq!(value.as_json_string().unwrap().decode().unwrap(), "bjensen");
///
/// let number = ComparativeValue::number("1.10");
/// assert_eq!(number.literal(), "1.10");
///
/// let checked: ComparativeValue = "1.10".parse().unwrap();
/// assert_eq!(checked, number);
/// assert!("abc".parse::<ComparativeValue>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ComparativeValue {
    /// JSON `false`
    False,

    /// JSON `null`
    Null,

    /// JSON `true`
    True,

    /// JSON number, as scanned
    Number(JsonNumber),

    /// JSON string, quotes and escapes included
    String(JsonString),
}

impl ComparativeValue {
    /// Wraps a number literal without checking it. The text must be a JSON
    /// number token for the value to render to a parseable filter; use
    /// [`str::parse`] to check it.
    pub fn number(literal: impl Into<String>) -> Self {
        ComparativeValue::Number(JsonNumber(literal.into()))
    }

    /// Wraps a string literal, quotes included, without checking it. As
    /// with [`ComparativeValue::number`], [`str::parse`] is the checked form.
    pub fn string(literal: impl Into<String>) -> Self {
        ComparativeValue::String(JsonString(literal.into()))
    }

    /// The source text of the value.
    pub fn literal(&self) -> &str {
        match self {
            ComparativeValue::False => "false",
            ComparativeValue::Null => "null",
            ComparativeValue::True => "true",
            ComparativeValue::Number(number) => number.as_str(),
            ComparativeValue::String(string) => string.literal(),
        }
    }

    pub fn as_json_string(&self) -> Option<&JsonString> {
        match self {
            ComparativeValue::String(string) => Some(string),
            _ => None,
        }
    }

    pub fn as_json_number(&self) -> Option<&JsonNumber> {
        match self {
            ComparativeValue::Number(number) => Some(number),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ComparativeValue::True => Some(true),
            ComparativeValue::False => Some(false),
            _ => None,
        }
    }
}

/// Reads exactly one `compValue` token: `false`, `null`, `true`, a number
/// or a quoted string.
impl FromStr for ComparativeValue {
    type Err = LexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = Lexer::new(s).tokenize()?.into_iter();
        let first = tokens.next();
        let value = match first.as_ref().map(|spanned| &spanned.token) {
            Some(Token::Keyword(Keyword::False)) => ComparativeValue::False,
            Some(Token::Keyword(Keyword::Null)) => ComparativeValue::Null,
            Some(Token::Keyword(Keyword::True)) => ComparativeValue::True,
            Some(Token::Number(literal)) => ComparativeValue::number(literal.as_str()),
            Some(Token::String(literal)) => ComparativeValue::string(literal.as_str()),
            _ => {
                return Err(LexError::new(
                    LexErrorReason::UnexpectedCharacter,
                    "Expected a comparative value",
                    0,
                ));
            }
        };

        match tokens.next() {
            Some(SpannedToken {
                token: Token::Eof, ..
            }) => Ok(value),
            Some(SpannedToken { position, .. }) => Err(LexError::new(
                LexErrorReason::UnexpectedCharacter,
                "Unexpected text after the value",
                position.offset,
            )),
            None => Ok(value),
        }
    }
}

/// A JSON number literal (RFC 7159 §6).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JsonNumber(String);

impl JsonNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value as a decimal. Fails when the literal's magnitude or
    /// precision is outside what [`Decimal`] can hold.
    pub fn to_decimal(&self) -> Result<Decimal, rust_decimal::Error> {
        if self.0.contains(['e', 'E']) {
            Decimal::from_scientific(&self.0.to_ascii_lowercase())
        } else {
            Decimal::from_str(&self.0)
        }
    }
}

/// A JSON string literal (RFC 7159 §7), stored with its surrounding quotes
/// and escape sequences untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JsonString(String);

impl JsonString {
    pub fn literal(&self) -> &str {
        &self.0
    }

    /// The string value with escape sequences resolved.
    ///
    /// The lexer accepts some literals that are not valid JSON text, such as
    /// a `\uD800` with no trailing surrogate or a raw control character;
    /// those fail here rather than during parsing.
    pub fn decode(&self) -> Result<String, serde_json::Error> {
        serde_json::from_str(&self.0)
    }
}
