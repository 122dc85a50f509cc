//! Lexer, parser and canonical renderer for SCIM filter and path expressions
//! (RFC 7644 §3.4.2.2).
//!
//! ```
//! use scim_filter::{parse_filter, parse_path, PathExpression};
//!
//! let filter = parse_filter(r#"userName eq "bjensen" and emails[type eq "work"]"#).unwrap();
//! assert_eq!(filter.any.groups().len(), 1);
//! assert_eq!(filter.any.groups()[0].values().len(), 2);
//!
//! let path = parse_path("name.familyName").unwrap();
//! assert!(matches!(path, PathExpression::AttributePath(_)));
//! ```
pub mod ast;
pub mod charset;
pub mod lexer;
pub mod parser;
pub mod render;
pub mod urn;
pub mod value;

pub use ast::{
    AllExpression, AnyExpression, AttributeExpression, AttributePath, ComparativeOperator,
    FilterAllExpression, FilterAnyExpression, FilterExpression, FilterValueExpression, Keyword,
    LogicalOperator, PathExpression, Token, ValueFilterAllExpression, ValueFilterAnyExpression,
    ValueFilterExpression, ValueFilterValueExpression, ValuePathExpression,
};
pub use lexer::{LexError, LexErrorReason, Lexer, Position, SpannedToken};
pub use parser::{
    BacktrackingParser, ParseError, ParseOptions, Parser, PredictiveParser, Strategy,
};
pub use render::Render;
pub use value::{ComparativeValue, JsonNumber, JsonString};

use tracing::debug;

/// Parses a complete `FILTER` with the default options.
pub fn parse_filter(input: &str) -> Result<FilterExpression, ParseError> {
    parse_filter_with(input, &ParseOptions::default())
}

/// Parses a complete `PATH` with the default options.
pub fn parse_path(input: &str) -> Result<PathExpression, ParseError> {
    parse_path_with(input, &ParseOptions::default())
}

/// Parses a complete `FILTER` with the strategy and nesting limit in `options`.
pub fn parse_filter_with(
    input: &str,
    options: &ParseOptions,
) -> Result<FilterExpression, ParseError> {
    debug!(strategy = ?options.strategy, len = input.len(), "parsing filter");
    let result = options
        .strategy
        .parser(input, options)
        .and_then(|mut parser| parser.parse_filter());
    match &result {
        Ok(_) => debug!("parsed filter"),
        Err(error) => debug!(%error, "filter rejected"),
    }
    result
}

/// Parses a complete `PATH` with the strategy and nesting limit in `options`.
pub fn parse_path_with(input: &str, options: &ParseOptions) -> Result<PathExpression, ParseError> {
    debug!(strategy = ?options.strategy, len = input.len(), "parsing path");
    let result = options
        .strategy
        .parser(input, options)
        .and_then(|mut parser| parser.parse_path());
    match &result {
        Ok(_) => debug!("parsed path"),
        Err(error) => debug!(%error, "path rejected"),
    }
    result
}
