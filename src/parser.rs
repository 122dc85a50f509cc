//! Recursive-descent parsers for the `FILTER` and `PATH` start symbols.
//!
//! Two strategies implement the same [`Parser`] contract and produce
//! identical trees:
//!
//! - [`PredictiveParser`] picks every production from the next one or two
//!   tokens and only speculates at `PATH`, where a bare attribute path, an
//!   attribute expression and a value path share an arbitrarily long prefix.
//! - [`BacktrackingParser`] tries alternatives in order everywhere and rolls
//!   back on failure.
//!
//! Both run over the complete token vector of the input, so rolling back a
//! failed attempt only resets an index.

mod backtracking;
mod cursor;
mod list;
mod predictive;

pub use backtracking::BacktrackingParser;
pub use predictive::PredictiveParser;

use crate::ast::{FilterExpression, PathExpression};
use crate::lexer::{LexError, Position};
use thiserror::Error;

/// Nesting limit applied by [`ParseOptions::default`].
pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Lexical error: {0}")]
    Lexical(#[from] LexError),

    #[error("Syntax error: {message}")]
    Syntax { message: String, position: Position },

    #[error("Could not parse the {symbol} (no viable alternative) at {position}")]
    NoViableAlternative {
        symbol: &'static str,
        position: Position,
    },

    #[error("Filter nesting exceeds {limit} levels at {position}")]
    NestingTooDeep { limit: usize, position: Position },
}

impl ParseError {
    pub fn position(&self) -> Position {
        match self {
            ParseError::Lexical(error) => error.position,
            ParseError::Syntax { position, .. }
            | ParseError::NoViableAlternative { position, .. }
            | ParseError::NestingTooDeep { position, .. } => *position,
        }
    }
}

/// Entry points shared by both strategies. Each call parses the whole input
/// from the start and requires it to be consumed completely.
pub trait Parser {
    /// Parses `FILTER`.
    fn parse_filter(&mut self) -> Result<FilterExpression, ParseError>;

    /// Parses `PATH`.
    fn parse_path(&mut self) -> Result<PathExpression, ParseError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    #[default]
    Predictive,
    Backtracking,
}

impl Strategy {
    /// Tokenizes `input` and returns a parser of this strategy over it.
    pub fn parser(self, input: &str, options: &ParseOptions) -> Result<Box<dyn Parser>, ParseError> {
        Ok(match self {
            Strategy::Predictive => Box::new(PredictiveParser::with_options(input, options)?),
            Strategy::Backtracking => Box::new(BacktrackingParser::with_options(input, options)?),
        })
    }
}

/// Options for parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Parsing strategy
    pub strategy: Strategy,
    /// Deepest allowed nesting of parentheses and brackets
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            strategy: Strategy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
