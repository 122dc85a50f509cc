//! Character classes used by the lexer.
//!
//! Every class is an ASCII subset taken from the ABNF of the grammars the
//! SCIM filter syntax is built on:
//!
//! - RFC 5234 core rules (`ALPHA`, `DIGIT`, `HEXDIG`)
//! - RFC 3986 URI (`unreserved`, `sub-delims`, `pchar`, ...)
//! - RFC 8141 URN (`NID`, `NSS`, r/q/f-components)
//! - RFC 7159 JSON literal names (`false`, `null`, `true`)
//! - RFC 7644 SCIM `ATTRNAME`
//!
//! Anything outside ASCII is a member of none of them.

/// ABNF `ALPHA`: `A-Z / a-z`.
pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// ABNF `DIGIT`: `0-9`.
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// ABNF `HEXDIG`, accepting both cases.
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// URI `sub-delims`.
pub fn is_uri_sub_delim(c: char) -> bool {
    matches!(
        c,
        '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '='
    )
}

/// URI `unreserved`.
pub fn is_uri_unreserved(c: char) -> bool {
    is_alpha(c) || is_digit(c) || matches!(c, '-' | '.' | '_' | '~')
}

/// Characters that may appear in a URI `pchar`, counting the `%` and hex
/// digits of a percent-encoded triplet individually.
pub fn is_uri_pchar(c: char) -> bool {
    is_uri_unreserved(c) || is_hex_digit(c) || c == '%' || is_uri_sub_delim(c) || c == ':' || c == '@'
}

/// URN `NID` characters (letters, digits and hyphen).
pub fn is_urn_nid(c: char) -> bool {
    is_alpha(c) || is_digit(c) || c == '-'
}

/// URN `NSS` characters.
pub fn is_urn_nss(c: char) -> bool {
    is_uri_pchar(c) || c == '/'
}

/// Characters of the r-, q- and f-components, including the `?+`, `?=` and
/// `#` markers that introduce them.
pub fn is_urn_component(c: char) -> bool {
    is_uri_pchar(c) || matches!(c, '/' | '?' | '+' | '#')
}

/// Every character that can occur anywhere in a URN `namestring`.
pub fn is_urn_namestring(c: char) -> bool {
    is_urn_nid(c) || is_urn_nss(c) || is_urn_component(c) || c == ':'
}

/// Characters of the JSON literal names `false`, `null` and `true`.
pub fn is_json_literal_name(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'f' | 'l' | 'n' | 'r' | 's' | 't' | 'u')
}

/// SCIM `ATTRNAME` characters after the leading letter.
pub fn is_scim_attr_name(c: char) -> bool {
    is_alpha(c) || is_digit(c) || c == '-' || c == '_'
}

/// The union scanned greedily when lexing a keyword, attribute name or URN.
pub fn is_identifier_run(c: char) -> bool {
    is_scim_attr_name(c) || is_json_literal_name(c) || is_urn_namestring(c)
}

/// Syntactic SCIM attribute name: a letter followed by letters, digits,
/// `-` or `_`.
pub fn is_valid_attr_name(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if is_alpha(first) => chars.all(is_scim_attr_name),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_run_covers_urn_punctuation() {
        for c in "azAZ09-_.~!$&'()*+,;=:@%/?#".chars() {
            assert!(is_identifier_run(c), "{c:?} should be scanned");
        }
        for c in " \"[]{}<>\\^`|é".chars() {
            assert!(!is_identifier_run(c), "{c:?} should stop the scan");
        }
    }

    #[test]
    fn attr_names() {
        assert!(is_valid_attr_name("userName"));
        assert!(is_valid_attr_name("t_---_-_t"));
        assert!(is_valid_attr_name("test-test-"));
        assert!(!is_valid_attr_name(""));
        assert!(!is_valid_attr_name("-test"));
        assert!(!is_valid_attr_name("0abc"));
        assert!(!is_valid_attr_name("a.b"));
        assert!(!is_valid_attr_name("test%"));
    }

    #[test]
    fn hex_digits() {
        assert!("0123456789abcdefABCDEF".chars().all(is_hex_digit));
        assert!(!is_hex_digit('g'));
    }
}
