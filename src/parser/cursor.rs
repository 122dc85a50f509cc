//! Token-level parsing shared by both strategies.

use super::{ParseError, ParseOptions};
use crate::ast::{
    AttributeExpression, AttributePath, ComparativeOperator, Keyword, LogicalOperator, Token,
};
use crate::lexer::{Lexer, Position, SpannedToken};
use crate::value::ComparativeValue;
use tracing::trace;

/// Saved parser state for rolling back a failed attempt.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Checkpoint {
    index: usize,
    depth: usize,
}

pub(crate) struct TokenCursor {
    tokens: Vec<SpannedToken>,
    index: usize,
    depth: usize,
    max_depth: usize,
}

/// Parsers that can try a production and undo it when it fails.
pub(crate) trait Speculative: Sized {
    fn cursor(&mut self) -> &mut TokenCursor;

    /// Runs `parse` and keeps its result, or restores the cursor exactly as
    /// it was and returns `None`. The error of a failed attempt is dropped.
    fn attempt<T>(&mut self, parse: impl FnOnce(&mut Self) -> Result<T, ParseError>) -> Option<T> {
        let checkpoint = self.cursor().checkpoint();
        match parse(self) {
            Ok(value) => Some(value),
            Err(_) => {
                trace!(token = checkpoint.index, "rolled back failed attempt");
                self.cursor().rewind(checkpoint);
                None
            }
        }
    }
}

impl TokenCursor {
    pub(crate) fn new(input: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        let tokens = Lexer::new(input).tokenize()?;
        Ok(TokenCursor {
            tokens,
            index: 0,
            depth: 0,
            max_depth: options.max_depth,
        })
    }

    /// Back to the first token.
    pub(crate) fn reset(&mut self) {
        self.index = 0;
        self.depth = 0;
    }

    pub(crate) fn current(&self) -> &Token {
        &self.tokens[self.index].token
    }

    pub(crate) fn position(&self) -> Position {
        self.tokens[self.index].position
    }

    /// Moves to the next token. The trailing `Eof` is never passed.
    pub(crate) fn advance(&mut self) {
        if self.index + 1 < self.tokens.len() {
            self.index += 1;
        }
    }

    pub(crate) fn check(&self, token: &Token) -> bool {
        self.current() == token
    }

    /// Consumes `token` if it is next.
    pub(crate) fn eat(&mut self, token: &Token) -> bool {
        if self.check(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, token: &Token) -> Result<(), ParseError> {
        if self.eat(token) {
            Ok(())
        } else {
            Err(self.unexpected(&token.to_string()))
        }
    }

    pub(crate) fn expect_end(&mut self) -> Result<(), ParseError> {
        self.expect(&Token::Eof)
    }

    /// Syntax error naming what was expected at the current token.
    pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
        ParseError::Syntax {
            message: format!(
                "Expected {expected} at token {} ({}), but found {}",
                self.index,
                self.position(),
                self.current()
            ),
            position: self.position(),
        }
    }

    pub(crate) fn no_viable_alternative(&self, symbol: &'static str) -> ParseError {
        ParseError::NoViableAlternative {
            symbol,
            position: self.position(),
        }
    }

    pub(crate) fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            index: self.index,
            depth: self.depth,
        }
    }

    pub(crate) fn rewind(&mut self, checkpoint: Checkpoint) {
        self.index = checkpoint.index;
        self.depth = checkpoint.depth;
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.max_depth,
                position: self.position(),
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// `["not" [SP]] "("`, returning whether the group is negated.
    pub(crate) fn open_group(&mut self) -> Result<bool, ParseError> {
        let negated = self.eat(&Token::Keyword(Keyword::Not));
        if negated {
            self.eat(&Token::Space);
        }
        if !self.check(&Token::LParen) {
            return Err(self.unexpected(&Token::LParen.to_string()));
        }
        self.enter()?;
        self.advance();
        Ok(negated)
    }

    pub(crate) fn close_group(&mut self) -> Result<(), ParseError> {
        self.expect(&Token::RParen)?;
        self.exit();
        Ok(())
    }

    pub(crate) fn open_bracket(&mut self) -> Result<(), ParseError> {
        if !self.check(&Token::LBracket) {
            return Err(self.unexpected(&Token::LBracket.to_string()));
        }
        self.enter()?;
        self.advance();
        Ok(())
    }

    pub(crate) fn close_bracket(&mut self) -> Result<(), ParseError> {
        self.expect(&Token::RBracket)?;
        self.exit();
        Ok(())
    }

    /// `ATTRNAME` or `subAttr` name.
    pub(crate) fn attribute_identifier(&mut self) -> Result<String, ParseError> {
        match self.current() {
            Token::Attribute(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.unexpected("an attribute identifier")),
        }
    }

    /// `"." ATTRNAME` following a path or value path, if present.
    pub(crate) fn sub_attribute(&mut self) -> Result<Option<String>, ParseError> {
        if self.eat(&Token::Dot) {
            self.attribute_identifier().map(Some)
        } else {
            Ok(None)
        }
    }

    /// `attrPath = [URI ":"] ATTRNAME *1subAttr`
    pub(crate) fn attribute_path(&mut self) -> Result<AttributePath, ParseError> {
        let schema_urn = match self.current() {
            Token::Urn(urn) => {
                let urn = urn.clone();
                self.advance();
                self.expect(&Token::Colon)?;
                Some(urn)
            }
            Token::Attribute(_) => None,
            _ => return Err(self.unexpected("a URN or an attribute identifier")),
        };

        let name = self.attribute_identifier()?;
        let sub_attribute = self.sub_attribute()?;

        Ok(AttributePath {
            schema_urn,
            name,
            sub_attribute,
        })
    }

    /// `compareOp`
    pub(crate) fn comparative_operator(&mut self) -> Result<ComparativeOperator, ParseError> {
        let operator = match self.current() {
            Token::Keyword(keyword) => ComparativeOperator::from_keyword(*keyword),
            _ => None,
        };
        match operator {
            Some(operator) => {
                self.advance();
                Ok(operator)
            }
            None => Err(self.unexpected("a comparative operator")),
        }
    }

    /// `compValue = false / null / true / number / string`
    pub(crate) fn comparative_value(&mut self) -> Result<ComparativeValue, ParseError> {
        let value = match self.current() {
            Token::Keyword(Keyword::False) => ComparativeValue::False,
            Token::Keyword(Keyword::Null) => ComparativeValue::Null,
            Token::Keyword(Keyword::True) => ComparativeValue::True,
            Token::Number(literal) => ComparativeValue::number(literal.clone()),
            Token::String(literal) => ComparativeValue::string(literal.clone()),
            _ => {
                return Err(self.unexpected(
                    "a comparative value (number, string, or constant value)",
                ));
            }
        };
        self.advance();
        Ok(value)
    }

    /// `"and" / "or"`
    pub(crate) fn logical_operator(&mut self) -> Result<LogicalOperator, ParseError> {
        let operator = match self.current() {
            Token::Keyword(keyword) => LogicalOperator::from_keyword(*keyword),
            _ => None,
        };
        match operator {
            Some(operator) => {
                self.advance();
                Ok(operator)
            }
            None => Err(self.unexpected("a logical operator")),
        }
    }

    /// The part of `attrExp` after its path: `SP "pr"` or
    /// `SP compareOp SP compValue`.
    pub(crate) fn attribute_expression_after(
        &mut self,
        path: AttributePath,
    ) -> Result<AttributeExpression, ParseError> {
        self.expect(&Token::Space)?;

        if self.eat(&Token::Keyword(Keyword::Pr)) {
            return Ok(AttributeExpression::Present(path));
        }

        let operator = self.comparative_operator()?;
        self.expect(&Token::Space)?;
        let value = self.comparative_value()?;

        Ok(AttributeExpression::Comparison {
            path,
            operator,
            value,
        })
    }
}
