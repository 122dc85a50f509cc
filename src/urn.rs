//! RFC 8141 URN recognition.
//!
//! SCIM uses URNs to qualify attribute names with their schema, e.g.
//! `urn:ietf:params:scim:schemas:core:2.0:User:userName`. The lexer only
//! needs two questions answered: does a piece of text *try* to be a URN,
//! and is it a syntactically valid one.

use regex::Regex;
use std::sync::OnceLock;

const PCHAR: &str = r"(?:[a-z0-9\-._~!$&'()*+,;=:@]|%[0-9a-f]{2})";

fn urn_regex() -> &'static Regex {
    static URN_RE: OnceLock<Regex> = OnceLock::new();
    URN_RE.get_or_init(|| {
        let pattern = format!(
            concat!(
                r"^(?i-u:urn:(?P<nid>[a-z0-9][a-z0-9-]{{0,30}}[a-z0-9])",
                r":(?P<nss>{p}(?:{p}|/)*)",
                r"(?:\?\+(?P<r>{p}(?:{p}|[/?])*))?",
                r"(?:\?=(?P<q>{p}(?:{p}|[/?])*))?",
                r"(?:#(?P<f>{p}(?:{p}|[/?])*))?)$"
            ),
            p = PCHAR
        );
        Regex::new(&pattern).expect("URN regex must compile")
    })
}

/// Whether `text` starts with the case-insensitive prefix `urn:`.
///
/// The colon never occurs in SCIM attribute names or JSON literals, so the
/// prefix alone is enough to tell that a URN was intended.
pub fn is_attempted_urn(text: &str) -> bool {
    text.get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("urn:"))
}

/// Full syntactic validation against the RFC 8141 `namestring` rule.
///
/// The NID `urn` is reserved and rejected.
pub fn is_valid_urn(text: &str) -> bool {
    match urn_regex().captures(text) {
        Some(caps) => caps
            .name("nid")
            .is_some_and(|nid| !nid.as_str().eq_ignore_ascii_case("urn")),
        None => false,
    }
}
