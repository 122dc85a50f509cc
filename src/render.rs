//! Canonical text for SCIM filter and path expressions.
//!
//! Rendering is the left inverse of parsing: a filter written canonically
//! parses and renders back to exactly the same characters.
//!
//! # Rules
//!
//! - Operands of `or` and `and` are joined by `" or "` and `" and "`
//! - Groups render as `(inner)`, negated groups as `not (inner)`
//! - Attribute paths render as `[urn ":"] name ["." subAttr]`
//! - Literals render exactly as they were read
//!
//! Non-canonical input such as `not(title pr)` renders canonically.
//!
//! # Examples
//!
//! ```
//! use scim_filter::parse_filter;
//! use scim_filter::render::Render;
//!
//! let filter = parse_filter(r#"title pr and not(userType eq "Intern")"#).unwrap();
//! assert_eq!(filter.render(), r#"title pr and not (userType eq "Intern")"#);
//! assert_eq!(filter.to_string(), filter.render());
//! ```

use crate::ast::{
    AllExpression, AnyExpression, AttributeExpression, AttributePath, ComparativeOperator,
    FilterExpression, FilterValueExpression, LogicalOperator, PathExpression,
    ValueFilterExpression, ValueFilterValueExpression, ValuePathExpression,
};
use crate::value::ComparativeValue;
use std::fmt;

pub trait Render {
    /// Appends the canonical text to `out`.
    fn write_to(&self, out: &mut String);

    fn render(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }
}

fn write_joined<T: Render>(out: &mut String, items: &[T], separator: &str) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        item.write_to(out);
    }
}

fn write_group<T: Render>(out: &mut String, inner: &T, negated: bool) {
    if negated {
        out.push_str("not ");
    }
    out.push('(');
    inner.write_to(out);
    out.push(')');
}

impl Render for ComparativeOperator {
    fn write_to(&self, out: &mut String) {
        out.push_str(self.keyword().as_str());
    }
}

impl Render for LogicalOperator {
    fn write_to(&self, out: &mut String) {
        out.push_str(self.keyword().as_str());
    }
}

impl Render for ComparativeValue {
    fn write_to(&self, out: &mut String) {
        out.push_str(self.literal());
    }
}

impl Render for AttributePath {
    fn write_to(&self, out: &mut String) {
        if let Some(urn) = &self.schema_urn {
            out.push_str(urn);
            out.push(':');
        }
        out.push_str(&self.name);
        if let Some(sub_attribute) = &self.sub_attribute {
            out.push('.');
            out.push_str(sub_attribute);
        }
    }
}

impl Render for AttributeExpression {
    fn write_to(&self, out: &mut String) {
        match self {
            AttributeExpression::Present(path) => {
                path.write_to(out);
                out.push_str(" pr");
            }
            AttributeExpression::Comparison {
                path,
                operator,
                value,
            } => {
                path.write_to(out);
                out.push(' ');
                operator.write_to(out);
                out.push(' ');
                value.write_to(out);
            }
        }
    }
}

impl Render for ValuePathExpression {
    fn write_to(&self, out: &mut String) {
        self.path.write_to(out);
        out.push('[');
        self.filter.write_to(out);
        out.push(']');
    }
}

impl<V: Render> Render for AnyExpression<V> {
    fn write_to(&self, out: &mut String) {
        write_joined(out, self.groups(), " or ");
    }
}

impl<V: Render> Render for AllExpression<V> {
    fn write_to(&self, out: &mut String) {
        write_joined(out, self.values(), " and ");
    }
}

impl Render for FilterExpression {
    fn write_to(&self, out: &mut String) {
        self.any.write_to(out);
    }
}

impl Render for FilterValueExpression {
    fn write_to(&self, out: &mut String) {
        match self {
            FilterValueExpression::Attribute(expression) => expression.write_to(out),
            FilterValueExpression::ValuePath(value_path) => value_path.write_to(out),
            FilterValueExpression::Grouped(filter) => write_group(out, &**filter, false),
            FilterValueExpression::NegatedGrouped(filter) => {
                write_group(out, &**filter, true)
            }
        }
    }
}

impl Render for ValueFilterExpression {
    fn write_to(&self, out: &mut String) {
        self.any.write_to(out);
    }
}

impl Render for ValueFilterValueExpression {
    fn write_to(&self, out: &mut String) {
        match self {
            ValueFilterValueExpression::Attribute(expression) => expression.write_to(out),
            ValueFilterValueExpression::Grouped(filter) => write_group(out, &**filter, false),
            ValueFilterValueExpression::NegatedGrouped(filter) => {
                write_group(out, &**filter, true)
            }
        }
    }
}

impl Render for PathExpression {
    fn write_to(&self, out: &mut String) {
        match self {
            PathExpression::AttributePath(path) => path.write_to(out),
            PathExpression::ValuePath {
                value_path,
                sub_attribute,
            } => {
                value_path.write_to(out);
                if let Some(sub_attribute) = sub_attribute {
                    out.push('.');
                    out.push_str(sub_attribute);
                }
            }
            PathExpression::AttributeExpression(expression) => expression.write_to(out),
        }
    }
}

macro_rules! display_rendered {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.render())
                }
            }
        )*
    };
}

display_rendered!(
    ComparativeOperator,
    LogicalOperator,
    ComparativeValue,
    AttributePath,
    AttributeExpression,
    ValuePathExpression,
    FilterExpression,
    FilterValueExpression,
    ValueFilterExpression,
    ValueFilterValueExpression,
    PathExpression,
);

impl<V: Render> fmt::Display for AnyExpression<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<V: Render> fmt::Display for AllExpression<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email_type(value: &str) -> AttributeExpression {
        AttributeExpression::Comparison {
            path: AttributePath::new("type"),
            operator: ComparativeOperator::Equal,
            value: ComparativeValue::string(format!("\"{value}\"")),
        }
    }

    #[test]
    fn qualified_path() {
        let path = AttributePath::new("name")
            .with_schema_urn("urn:ietf:params:scim:schemas:core:2.0:User")
            .with_sub_attribute("familyName");
        assert_eq!(
            path.render(),
            "urn:ietf:params:scim:schemas:core:2.0:User:name.familyName"
        );
    }

    #[test]
    fn any_of_all() {
        let all = AllExpression::new(ValueFilterValueExpression::Attribute(email_type("work")))
            .and(ValueFilterValueExpression::Attribute(
                AttributeExpression::Present(AttributePath::new("value")),
            ));
        let any = AnyExpression::new(all).or(AllExpression::new(
            ValueFilterValueExpression::Attribute(email_type("home")),
        ));
        assert_eq!(
            any.render(),
            r#"type eq "work" and value pr or type eq "home""#
        );
    }

    #[test]
    fn value_path_with_sub_attribute() {
        let path = PathExpression::ValuePath {
            value_path: ValuePathExpression {
                path: AttributePath::new("emails"),
                filter: ValueFilterExpression::single(ValueFilterValueExpression::NegatedGrouped(
                    Box::new(ValueFilterExpression::single(
                        ValueFilterValueExpression::Attribute(email_type("work")),
                    )),
                )),
            },
            sub_attribute: Some("value".to_string()),
        };
        assert_eq!(path.render(), r#"emails[not (type eq "work")].value"#);
        assert_eq!(path.to_string(), path.render());
    }

    #[test]
    fn operators_render_as_keywords() {
        assert_eq!(ComparativeOperator::GreaterEqual.render(), "ge");
        assert_eq!(LogicalOperator::Or.to_string(), "or");
    }
}
