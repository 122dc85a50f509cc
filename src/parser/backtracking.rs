use super::cursor::{Speculative, TokenCursor};
use super::list::ListExpression;
use super::{ParseError, ParseOptions, Parser};
use crate::ast::{
    AttributeExpression, FilterExpression, FilterValueExpression, Keyword, LogicalOperator,
    PathExpression, Token, ValueFilterExpression, ValueFilterValueExpression, ValuePathExpression,
};

/// Tries each alternative in grammar order and rolls back when it fails.
pub struct BacktrackingParser {
    cursor: TokenCursor,
}

impl Speculative for BacktrackingParser {
    fn cursor(&mut self) -> &mut TokenCursor {
        &mut self.cursor
    }
}

impl BacktrackingParser {
    pub fn new(input: &str) -> Result<Self, ParseError> {
        Self::with_options(input, &ParseOptions::default())
    }

    pub fn with_options(input: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        Ok(BacktrackingParser {
            cursor: TokenCursor::new(input, options)?,
        })
    }

    /// `SP ("and" / "or") SP`
    fn continuation(&mut self) -> Result<LogicalOperator, ParseError> {
        self.cursor.expect(&Token::Space)?;
        let operator = self.cursor.logical_operator()?;
        self.cursor.expect(&Token::Space)?;
        Ok(operator)
    }

    fn filter(&mut self) -> Result<FilterExpression, ParseError> {
        let mut list = ListExpression::new(self.filter_value()?);

        while let Some((operator, value)) =
            self.attempt(|parser| Ok((parser.continuation()?, parser.filter_value()?)))
        {
            list.push(operator, value);
        }

        Ok(FilterExpression::new(list.fold()))
    }

    fn filter_value(&mut self) -> Result<FilterValueExpression, ParseError> {
        if let Some(expression) = self.attempt(Self::attribute_expression) {
            return Ok(FilterValueExpression::Attribute(expression));
        }

        if let Some(value_path) = self.attempt(Self::value_path) {
            return Ok(FilterValueExpression::ValuePath(value_path));
        }

        let negated = self.cursor.open_group()?;
        let filter = Box::new(self.filter()?);
        self.cursor.close_group()?;
        Ok(if negated {
            FilterValueExpression::NegatedGrouped(filter)
        } else {
            FilterValueExpression::Grouped(filter)
        })
    }

    /// `attrPath SP "pr"` or `attrPath SP compareOp SP compValue`
    fn attribute_expression(&mut self) -> Result<AttributeExpression, ParseError> {
        let path = self.cursor.attribute_path()?;
        self.cursor.expect(&Token::Space)?;

        let present = self.attempt(|parser| parser.cursor.expect(&Token::Keyword(Keyword::Pr)));
        if present.is_some() {
            return Ok(AttributeExpression::Present(path));
        }

        let operator = self.cursor.comparative_operator()?;
        self.cursor.expect(&Token::Space)?;
        let value = self.cursor.comparative_value()?;

        Ok(AttributeExpression::Comparison {
            path,
            operator,
            value,
        })
    }

    /// `attrPath "[" valFilter "]"`
    fn value_path(&mut self) -> Result<ValuePathExpression, ParseError> {
        let path = self.cursor.attribute_path()?;
        self.cursor.open_bracket()?;
        let filter = self.value_filter()?;
        self.cursor.close_bracket()?;
        Ok(ValuePathExpression { path, filter })
    }

    fn value_filter(&mut self) -> Result<ValueFilterExpression, ParseError> {
        let mut list = ListExpression::new(self.value_filter_value()?);

        while let Some((operator, value)) =
            self.attempt(|parser| Ok((parser.continuation()?, parser.value_filter_value()?)))
        {
            list.push(operator, value);
        }

        Ok(ValueFilterExpression::new(list.fold()))
    }

    fn value_filter_value(&mut self) -> Result<ValueFilterValueExpression, ParseError> {
        if let Some(expression) = self.attempt(Self::attribute_expression) {
            return Ok(ValueFilterValueExpression::Attribute(expression));
        }

        let negated = self.cursor.open_group()?;
        let filter = Box::new(self.value_filter()?);
        self.cursor.close_group()?;
        Ok(if negated {
            ValueFilterValueExpression::NegatedGrouped(filter)
        } else {
            ValueFilterValueExpression::Grouped(filter)
        })
    }
}

impl Parser for BacktrackingParser {
    fn parse_filter(&mut self) -> Result<FilterExpression, ParseError> {
        self.cursor.reset();
        let filter = self.filter()?;
        self.cursor.expect_end()?;
        Ok(filter)
    }

    /// The first alternative that parses decides the shape. Whatever
    /// follows it must be the end of input.
    fn parse_path(&mut self) -> Result<PathExpression, ParseError> {
        self.cursor.reset();

        let value_path = self.attempt(|parser| {
            let value_path = parser.value_path()?;
            let sub_attribute = parser.cursor.sub_attribute()?;
            Ok(PathExpression::ValuePath {
                value_path,
                sub_attribute,
            })
        });
        let path = match value_path {
            Some(path) => path,
            None => match self.attempt(Self::attribute_expression) {
                Some(expression) => PathExpression::AttributeExpression(expression),
                None => match self.attempt(|parser| parser.cursor.attribute_path()) {
                    Some(path) => PathExpression::AttributePath(path),
                    None => return Err(self.cursor.no_viable_alternative("path")),
                },
            },
        };

        self.cursor.expect_end()?;
        Ok(path)
    }
}
