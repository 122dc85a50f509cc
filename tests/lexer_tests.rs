// tests/lexer_tests.rs

use scim_filter::ast::{Keyword, Token};
use scim_filter::lexer::{LexErrorReason, Lexer, Position};

fn tokens(input: &str) -> Vec<Token> {
    Lexer::new(input)
        .tokenize()
        .unwrap_or_else(|e| panic!("Failed to lex {:?}: {}", input, e))
        .into_iter()
        .map(|spanned| spanned.token)
        .collect()
}

fn attr(name: &str) -> Token {
    Token::Attribute(name.to_string())
}

fn string(literal: &str) -> Token {
    Token::String(literal.to_string())
}

fn number(literal: &str) -> Token {
    Token::Number(literal.to_string())
}

// ============================================================================
// Single Character Tokens
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let test_cases = vec![
        (" ", Token::Space),
        ("(", Token::LParen),
        (")", Token::RParen),
        ("[", Token::LBracket),
        ("]", Token::RBracket),
        (".", Token::Dot),
        (":", Token::Colon),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token().unwrap();
        assert_eq!(token, expected, "Failed for input: {}", input);
        assert_eq!(lexer.next_token().unwrap(), Token::Eof);
    }
}

#[test]
fn test_eof_repeats() {
    let mut lexer = Lexer::new("");
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
    assert_eq!(lexer.position(), Position::new(0));
}

#[test]
fn test_unexpected_characters() {
    for input in ["+", "_", "{", "}", "\t", "é", "=", "!"] {
        let err = Lexer::new(input).next_token().unwrap_err();
        assert_eq!(
            err.reason,
            LexErrorReason::UnexpectedCharacter,
            "Failed for input: {}",
            input
        );
        assert_eq!(err.position, Position::new(0));
    }
}

// ============================================================================
// Keywords
// ============================================================================

#[test]
fn test_keywords() {
    for keyword in Keyword::ALL {
        let mut lexer = Lexer::new(keyword.as_str());
        assert_eq!(lexer.next_token().unwrap(), Token::Keyword(keyword));
        assert_eq!(lexer.next_token().unwrap(), Token::Eof);
    }
}

#[test]
fn test_keywords_are_case_sensitive() {
    let test_cases = vec!["EQ", "And", "True", "NULL", "notAnOperator", "prx"];

    for input in test_cases {
        assert_eq!(tokens(input), vec![attr(input), Token::Eof], "Failed for input: {}", input);
    }
}

#[test]
fn test_not_before_paren() {
    assert_eq!(
        tokens("not(title pr)"),
        vec![
            Token::Keyword(Keyword::Not),
            Token::LParen,
            attr("title"),
            Token::Space,
            Token::Keyword(Keyword::Pr),
            Token::RParen,
            Token::Eof,
        ]
    );
}

// ============================================================================
// Attribute Identifiers and URNs
// ============================================================================

#[test]
fn test_attribute_identifiers() {
    let test_cases = vec!["userName", "a", "t_---_-_t", "test-test-", "x509Certificates"];

    for input in test_cases {
        assert_eq!(tokens(input), vec![attr(input), Token::Eof], "Failed for input: {}", input);
    }
}

#[test]
fn test_sub_attribute_series() {
    assert_eq!(
        tokens("name.familyName"),
        vec![attr("name"), Token::Dot, attr("familyName"), Token::Eof]
    );
}

#[test]
fn test_qualified_attribute_series() {
    let test_cases = vec![
        (
            "urn:abc:def:ghi?=jkl:userName",
            vec![
                Token::Urn("urn:abc:def:ghi?=jkl".to_string()),
                Token::Colon,
                attr("userName"),
                Token::Eof,
            ],
        ),
        (
            "urn:ietf:params:scim:schemas:core:2.0:User:name.givenName",
            vec![
                Token::Urn("urn:ietf:params:scim:schemas:core:2.0:User".to_string()),
                Token::Colon,
                attr("name"),
                Token::Dot,
                attr("givenName"),
                Token::Eof,
            ],
        ),
        (
            "URN:ietf:params:scim:schemas:core:2.0:User:userName",
            vec![
                Token::Urn("URN:ietf:params:scim:schemas:core:2.0:User".to_string()),
                Token::Colon,
                attr("userName"),
                Token::Eof,
            ],
        ),
    ];

    for (input, expected) in test_cases {
        assert_eq!(tokens(input), expected, "Failed for input: {}", input);
    }
}

#[test]
fn test_bare_urn() {
    // The tail after the last colon is not an attribute name, so the whole
    // run is one URN.
    assert_eq!(
        tokens("urn:test:0abc"),
        vec![Token::Urn("urn:test:0abc".to_string()), Token::Eof]
    );
}

#[test]
fn test_urn_keeps_parentheses() {
    assert_eq!(
        tokens("urn:test:test()"),
        vec![Token::Urn("urn:test:test()".to_string()), Token::Eof]
    );
}

#[test]
fn test_urn_split_at_last_colon() {
    assert_eq!(
        tokens("urn:test1:test2:test3.test4"),
        vec![
            Token::Urn("urn:test1:test2".to_string()),
            Token::Colon,
            attr("test3"),
            Token::Dot,
            attr("test4"),
            Token::Eof,
        ]
    );
}

#[test]
fn test_long_urn_run() {
    let dots = ".".repeat(100_000);

    let input = format!("urn:ab:b{}", dots);
    assert_eq!(tokens(&input), vec![Token::Urn(input.clone()), Token::Eof]);

    let input = format!("urn:a:b{}", dots);
    let err = Lexer::new(&input).tokenize().unwrap_err();
    assert_eq!(err.reason, LexErrorReason::InvalidAttemptedUrnIdentifier);
    assert_eq!(err.position, Position::new(0));

    // A run that is not a URN still stops at the first dot
    let input = format!("abc{}", dots);
    assert_eq!(&tokens(&input)[..3], &[attr("abc"), Token::Dot, Token::Dot]);
}

#[test]
fn test_invalid_identifiers() {
    let test_cases = vec![
        ("urn:", LexErrorReason::InvalidAttemptedUrnIdentifier),
        ("urn:a:b", LexErrorReason::InvalidAttemptedUrnIdentifier),
        ("urn:a:b:c", LexErrorReason::InvalidAttemptedUrnIdentifier),
        ("urn:(", LexErrorReason::InvalidAttemptedUrnIdentifier),
        ("urn:urn:test", LexErrorReason::InvalidAttemptedUrnIdentifier),
        ("test:", LexErrorReason::InvalidAttributeIdentifier),
        ("test%", LexErrorReason::InvalidAttributeIdentifier),
    ];

    for (input, reason) in test_cases {
        let err = Lexer::new(input).tokenize().unwrap_err();
        assert_eq!(err.reason, reason, "Failed for input: {}", input);
        assert_eq!(err.position, Position::new(0), "Failed for input: {}", input);
    }
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn test_numbers() {
    let test_cases = vec!["0", "1", "42", "-0", "-7", "0.5", "1.10", "-0.1e2", "1E5", "2e+10", "3.5e-3", "0.1", "10e2", "10.3e-4", "10.3e+4"];

    for input in test_cases {
        assert_eq!(tokens(input), vec![number(input), Token::Eof], "Failed for input: {}", input);
    }
}

#[test]
fn test_number_boundaries() {
    let test_cases = vec![
        // No leading zeros: the zero ends the number
        ("01", vec![number("0"), number("1"), Token::Eof]),
        // A dot without a digit after it is not a fraction
        ("1.", vec![number("1"), Token::Dot, Token::Eof]),
        ("1.a", vec![number("1"), Token::Dot, attr("a"), Token::Eof]),
    ];

    for (input, expected) in test_cases {
        assert_eq!(tokens(input), expected, "Failed for input: {}", input);
    }
}

#[test]
fn test_invalid_numbers() {
    let test_cases = vec![("-", 1), ("-test", 1), ("1e", 2), ("1e+", 3), ("2.5E-x", 5)];

    for (input, offset) in test_cases {
        let err = Lexer::new(input).tokenize().unwrap_err();
        assert_eq!(err.reason, LexErrorReason::InvalidNumberLiteral, "Failed for input: {}", input);
        assert_eq!(err.position, Position::new(offset), "Failed for input: {}", input);
    }
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn test_strings() {
    let test_cases = vec![
        r#""""#,
        r#""bjensen""#,
        r#""O'Malley""#,
        r#""test\"test""#,
        r#""\\\/\b\f\n\r\t""#,
        r#""é😀""#,
        r#""a b[c](d)""#,
        "\"caf\u{e9}\"",
    ];

    for input in test_cases {
        assert_eq!(tokens(input), vec![string(input), Token::Eof], "Failed for input: {}", input);
    }
}

#[test]
fn test_string_errors() {
    let test_cases = vec![
        ("\"", "Unexpected end of input", 1),
        ("\"a", "Unexpected end of input", 2),
        (r#""\""#, "Unexpected end of input", 3),
        (r#""\a""#, "Invalid escape sequence", 1),
        (r#""\u""#, "Invalid unicode escape sequence", 1),
        (r#""\u1""#, "Invalid unicode escape sequence", 1),
        (r#""\u12""#, "Invalid unicode escape sequence", 1),
        (r#""\u123""#, "Invalid unicode escape sequence", 1),
        (r#""\u12g4""#, "Invalid unicode escape sequence", 1),
    ];

    for (input, message, offset) in test_cases {
        let err = Lexer::new(input).tokenize().unwrap_err();
        assert_eq!(err.reason, LexErrorReason::InvalidStringLiteral, "Failed for input: {}", input);
        assert_eq!(err.message, message, "Failed for input: {}", input);
        assert_eq!(err.position, Position::new(offset), "Failed for input: {}", input);
    }
}

#[test]
fn test_comparative_values_series() {
    assert_eq!(
        tokens(r#"false null true 0 1 -0.1e2 "test\"test" false"#),
        vec![
            Token::Keyword(Keyword::False),
            Token::Space,
            Token::Keyword(Keyword::Null),
            Token::Space,
            Token::Keyword(Keyword::True),
            Token::Space,
            number("0"),
            Token::Space,
            number("1"),
            Token::Space,
            number("-0.1e2"),
            Token::Space,
            string(r#""test\"test""#),
            Token::Space,
            Token::Keyword(Keyword::False),
            Token::Eof,
        ]
    );
}

// ============================================================================
// Positions and Snapshots
// ============================================================================

#[test]
fn test_positions_count_characters() {
    let spanned = Lexer::new("\"\u{e9}\" eq").tokenize().unwrap();
    let positions: Vec<usize> = spanned.iter().map(|t| t.position.offset).collect();
    assert_eq!(positions, vec![0, 3, 4, 6]);
}

#[test]
fn test_snapshots() {
    let mut lexer = Lexer::new("0 1 2 3 4 5 6");
    assert_eq!(lexer.next_token().unwrap(), number("0"));

    lexer.push_snapshot();
    assert_eq!(lexer.next_token().unwrap(), Token::Space);
    assert_eq!(lexer.next_token().unwrap(), number("1"));

    lexer.push_snapshot();
    assert_eq!(lexer.next_token().unwrap(), Token::Space);
    assert_eq!(lexer.next_token().unwrap(), number("2"));

    // Back to just after "1"
    lexer.pop_snapshot();
    assert_eq!(lexer.next_token().unwrap(), Token::Space);
    assert_eq!(lexer.next_token().unwrap(), number("2"));

    // Keep the current position and drop the outer snapshot
    lexer.discard_snapshot();
    lexer.pop_snapshot();
    assert_eq!(lexer.next_token().unwrap(), Token::Space);
    assert_eq!(lexer.next_token().unwrap(), number("3"));
}

// ============================================================================
// Complete Filters
// ============================================================================

#[test]
fn test_full_filter() {
    let input = r#"urn:ietf:params:scim:schemas:core:2.0:User:userName sw "J" and title pr and name.familyName co "O'Malley" and emails[type eq "work" or value co "@example.com"] or (id ne "1234")"#;
    let sp = || Token::Space;
    let kw = Token::Keyword;

    let expected = vec![
        Token::Urn("urn:ietf:params:scim:schemas:core:2.0:User".to_string()),
        Token::Colon,
        attr("userName"),
        sp(),
        kw(Keyword::Sw),
        sp(),
        string(r#""J""#),
        sp(),
        kw(Keyword::And),
        sp(),
        attr("title"),
        sp(),
        kw(Keyword::Pr),
        sp(),
        kw(Keyword::And),
        sp(),
        attr("name"),
        Token::Dot,
        attr("familyName"),
        sp(),
        kw(Keyword::Co),
        sp(),
        string(r#""O'Malley""#),
        sp(),
        kw(Keyword::And),
        sp(),
        attr("emails"),
        Token::LBracket,
        attr("type"),
        sp(),
        kw(Keyword::Eq),
        sp(),
        string(r#""work""#),
        sp(),
        kw(Keyword::Or),
        sp(),
        attr("value"),
        sp(),
        kw(Keyword::Co),
        sp(),
        string(r#""@example.com""#),
        Token::RBracket,
        sp(),
        kw(Keyword::Or),
        sp(),
        Token::LParen,
        attr("id"),
        sp(),
        kw(Keyword::Ne),
        sp(),
        string(r#""1234""#),
        Token::RParen,
        Token::Eof,
    ];

    assert_eq!(tokens(input), expected);
}
