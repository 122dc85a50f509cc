use super::cursor::{Speculative, TokenCursor};
use super::list::ListExpression;
use super::{ParseError, ParseOptions, Parser};
use crate::ast::{
    AttributePath, FilterExpression, FilterValueExpression, Keyword, PathExpression, Token,
    ValueFilterExpression, ValueFilterValueExpression, ValuePathExpression,
};

/// Chooses each production from the upcoming tokens.
///
/// After an attribute path, a space means an attribute expression follows
/// and `[` means a value path. `not` or `(` open a group, and a space after
/// any operand continues the list with a logical operator.
pub struct PredictiveParser {
    cursor: TokenCursor,
}

impl Speculative for PredictiveParser {
    fn cursor(&mut self) -> &mut TokenCursor {
        &mut self.cursor
    }
}

impl PredictiveParser {
    pub fn new(input: &str) -> Result<Self, ParseError> {
        Self::with_options(input, &ParseOptions::default())
    }

    pub fn with_options(input: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        Ok(PredictiveParser {
            cursor: TokenCursor::new(input, options)?,
        })
    }

    /// `FILTER` without the end of input.
    fn filter(&mut self) -> Result<FilterExpression, ParseError> {
        let mut list = ListExpression::new(self.filter_value()?);

        while self.cursor.eat(&Token::Space) {
            let operator = self.cursor.logical_operator()?;
            self.cursor.expect(&Token::Space)?;
            list.push(operator, self.filter_value()?);
        }

        Ok(FilterExpression::new(list.fold()))
    }

    fn filter_value(&mut self) -> Result<FilterValueExpression, ParseError> {
        match self.cursor.current() {
            Token::Urn(_) | Token::Attribute(_) => {
                let path = self.cursor.attribute_path()?;
                match self.cursor.current() {
                    Token::Space => self
                        .cursor
                        .attribute_expression_after(path)
                        .map(FilterValueExpression::Attribute),
                    Token::LBracket => self.value_path(path).map(FilterValueExpression::ValuePath),
                    _ => Err(self.cursor.unexpected("space or '['")),
                }
            }
            Token::Keyword(Keyword::Not) | Token::LParen => {
                let negated = self.cursor.open_group()?;
                let filter = Box::new(self.filter()?);
                self.cursor.close_group()?;
                Ok(if negated {
                    FilterValueExpression::NegatedGrouped(filter)
                } else {
                    FilterValueExpression::Grouped(filter)
                })
            }
            _ => Err(self.cursor.unexpected("an attribute path, 'not' or '('")),
        }
    }

    /// `"[" valFilter "]"` after its attribute path.
    fn value_path(&mut self, path: AttributePath) -> Result<ValuePathExpression, ParseError> {
        self.cursor.open_bracket()?;
        let filter = self.value_filter()?;
        self.cursor.close_bracket()?;
        Ok(ValuePathExpression { path, filter })
    }

    fn value_filter(&mut self) -> Result<ValueFilterExpression, ParseError> {
        let mut list = ListExpression::new(self.value_filter_value()?);

        while self.cursor.eat(&Token::Space) {
            let operator = self.cursor.logical_operator()?;
            self.cursor.expect(&Token::Space)?;
            list.push(operator, self.value_filter_value()?);
        }

        Ok(ValueFilterExpression::new(list.fold()))
    }

    fn value_filter_value(&mut self) -> Result<ValueFilterValueExpression, ParseError> {
        match self.cursor.current() {
            Token::Urn(_) | Token::Attribute(_) => {
                let path = self.cursor.attribute_path()?;
                self.cursor
                    .attribute_expression_after(path)
                    .map(ValueFilterValueExpression::Attribute)
            }
            Token::Keyword(Keyword::Not) | Token::LParen => {
                let negated = self.cursor.open_group()?;
                let filter = Box::new(self.value_filter()?);
                self.cursor.close_group()?;
                Ok(if negated {
                    ValueFilterValueExpression::NegatedGrouped(filter)
                } else {
                    ValueFilterValueExpression::Grouped(filter)
                })
            }
            _ => Err(self.cursor.unexpected("an attribute path, 'not' or '('")),
        }
    }
}

impl Parser for PredictiveParser {
    fn parse_filter(&mut self) -> Result<FilterExpression, ParseError> {
        self.cursor.reset();
        let filter = self.filter()?;
        self.cursor.expect_end()?;
        Ok(filter)
    }

    /// The three shapes share an attribute path of any length, so each one
    /// is tried in turn over the whole input.
    fn parse_path(&mut self) -> Result<PathExpression, ParseError> {
        self.cursor.reset();

        let value_path = self.attempt(|parser| {
            let path = parser.cursor.attribute_path()?;
            let value_path = parser.value_path(path)?;
            let sub_attribute = parser.cursor.sub_attribute()?;
            parser.cursor.expect_end()?;
            Ok(PathExpression::ValuePath {
                value_path,
                sub_attribute,
            })
        });
        if let Some(path) = value_path {
            return Ok(path);
        }

        let attribute_expression = self.attempt(|parser| {
            let path = parser.cursor.attribute_path()?;
            let expression = parser.cursor.attribute_expression_after(path)?;
            parser.cursor.expect_end()?;
            Ok(PathExpression::AttributeExpression(expression))
        });
        if let Some(path) = attribute_expression {
            return Ok(path);
        }

        let attribute_path = self.attempt(|parser| {
            let path = parser.cursor.attribute_path()?;
            parser.cursor.expect_end()?;
            Ok(PathExpression::AttributePath(path))
        });
        if let Some(path) = attribute_path {
            return Ok(path);
        }

        Err(self.cursor.no_viable_alternative("path"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{AttributeExpression, ComparativeOperator};
    use crate::value::ComparativeValue;

    fn filter(input: &str) -> Result<FilterExpression, ParseError> {
        PredictiveParser::new(input)?.parse_filter()
    }

    #[test]
    fn not_without_space() {
        let expected = FilterExpression::single(FilterValueExpression::NegatedGrouped(Box::new(
            FilterExpression::single(FilterValueExpression::Attribute(
                AttributeExpression::Present(AttributePath::new("title")),
            )),
        )));
        assert_eq!(filter("not(title pr)"), Ok(expected.clone()));
        assert_eq!(filter("not (title pr)"), Ok(expected));
    }

    #[test]
    fn trailing_space_is_an_error() {
        assert!(filter("title pr ").is_err());
        assert!(filter("(title pr )").is_err());
    }

    #[test]
    fn reusable_after_parse() {
        let mut parser = PredictiveParser::new("userName eq 1").unwrap();
        let first = parser.parse_filter().unwrap();
        let second = parser.parse_filter().unwrap();
        assert_eq!(first, second);
        assert_eq!(
            parser.parse_path(),
            Ok(PathExpression::AttributeExpression(
                AttributeExpression::Comparison {
                    path: AttributePath::new("userName"),
                    operator: ComparativeOperator::Equal,
                    value: ComparativeValue::number("1"),
                }
            ))
        );
    }

    #[test]
    fn path_with_trailing_dot() {
        let mut parser = PredictiveParser::new("emails.").unwrap();
        assert!(matches!(
            parser.parse_path(),
            Err(ParseError::NoViableAlternative { symbol: "path", .. })
        ));
    }
}
