use std::fmt;
use std::str::FromStr;

/// Reserved words of the filter grammar.
///
/// Comparison operators, logical operators, negation and the three JSON
/// literal names all share one table; the lexer checks it before anything
/// else, so none of these can be used as an attribute name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Eq,
    Ne,
    Co,
    Sw,
    Ew,
    Pr,
    Gt,
    Ge,
    Lt,
    Le,
    And,
    Or,
    Not,
    True,
    False,
    Null,
}

impl Keyword {
    pub const ALL: [Keyword; 16] = [
        Keyword::Eq,
        Keyword::Ne,
        Keyword::Co,
        Keyword::Sw,
        Keyword::Ew,
        Keyword::Pr,
        Keyword::Gt,
        Keyword::Ge,
        Keyword::Lt,
        Keyword::Le,
        Keyword::And,
        Keyword::Or,
        Keyword::Not,
        Keyword::True,
        Keyword::False,
        Keyword::Null,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Eq => "eq",
            Keyword::Ne => "ne",
            Keyword::Co => "co",
            Keyword::Sw => "sw",
            Keyword::Ew => "ew",
            Keyword::Pr => "pr",
            Keyword::Gt => "gt",
            Keyword::Ge => "ge",
            Keyword::Lt => "lt",
            Keyword::Le => "le",
            Keyword::And => "and",
            Keyword::Or => "or",
            Keyword::Not => "not",
            Keyword::True => "true",
            Keyword::False => "false",
            Keyword::Null => "null",
        }
    }
}

impl FromStr for Keyword {
    type Err = ();

    /// Exact, case-sensitive lookup.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Keyword::ALL
            .iter()
            .copied()
            .find(|keyword| keyword.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lexical unit produced by the lexer.
///
/// Spaces are significant: the grammar requires exactly one `SP` between
/// the terms of an expression, so they are tokens rather than skipped
/// whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// End of input
    Eof,

    /// A single space character
    Space,

    /// `(`
    LParen,

    /// `)`
    RParen,

    /// `[` opening a value filter
    LBracket,

    /// `]`
    RBracket,

    /// `.` separating an attribute from its sub-attribute
    Dot,

    /// `:` separating a schema URN from an attribute name
    Colon,

    /// One of the reserved words
    Keyword(Keyword),

    /// Schema URN qualifying an attribute
    ///
    /// # Examples
    /// ```text
    /// urn:ietf:params:scim:schemas:core:2.0:User
    /// ```
    Urn(String),

    /// Attribute or sub-attribute name
    ///
    /// Begins with a letter, followed by letters, digits, `-` or `_`.
    ///
    /// # Examples
    /// ```text
    /// userName
    /// emails
    /// ```
    Attribute(String),

    /// JSON string literal, kept verbatim including quotes and escapes
    ///
    /// # Examples
    /// ```text
    /// "bjensen"
    /// "O'Malley"
    /// "A\n"
    /// ```
    String(String),

    /// JSON number literal, kept verbatim
    ///
    /// # Examples
    /// ```text
    /// 42
    /// -0.5
    /// 10.3e-4
    /// ```
    Number(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Eof => f.write_str("end of input"),
            Token::Space => f.write_str("space"),
            Token::LParen => f.write_str("'('"),
            Token::RParen => f.write_str("')'"),
            Token::LBracket => f.write_str("'['"),
            Token::RBracket => f.write_str("']'"),
            Token::Dot => f.write_str("'.'"),
            Token::Colon => f.write_str("':'"),
            Token::Keyword(keyword) => write!(f, "keyword '{keyword}'"),
            Token::Urn(urn) => write!(f, "URN '{urn}'"),
            Token::Attribute(name) => write!(f, "attribute '{name}'"),
            Token::String(literal) => write!(f, "string {literal}"),
            Token::Number(literal) => write!(f, "number {literal}"),
        }
    }
}
