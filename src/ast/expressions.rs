use crate::ast::{ComparativeOperator, ValueFilterExpression};
use crate::value::ComparativeValue;

/// Reference to an attribute (`attrPath`).
///
/// Sub-attributes nest exactly one level: `name.givenName` is a path,
/// `name.givenName.x` is not.
///
/// # Examples
/// ```text
/// userName
/// name.familyName
/// urn:ietf:params:scim:schemas:core:2.0:User:userName
/// urn:ietf:params:scim:schemas:core:2.0:User:name.givenName
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributePath {
    /// Schema URN qualifying the attribute
    pub schema_urn: Option<String>,

    /// Attribute name
    pub name: String,

    /// Sub-attribute of a complex attribute
    pub sub_attribute: Option<String>,
}

impl AttributePath {
    pub fn new(name: impl Into<String>) -> Self {
        AttributePath {
            schema_urn: None,
            name: name.into(),
            sub_attribute: None,
        }
    }

    pub fn with_schema_urn(mut self, urn: impl Into<String>) -> Self {
        self.schema_urn = Some(urn.into());
        self
    }

    pub fn with_sub_attribute(mut self, sub_attribute: impl Into<String>) -> Self {
        self.sub_attribute = Some(sub_attribute.into());
        self
    }
}

/// Test applied to a single attribute (`attrExp`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeExpression {
    /// Presence test
    ///
    /// # Example
    /// ```text
    /// title pr
    /// ```
    Present(AttributePath),

    /// Comparison against a literal
    ///
    /// # Example
    /// ```text
    /// userName eq "bjensen"
    /// meta.lastModified gt "2011-05-13T04:42:34Z"
    /// ```
    Comparison {
        path: AttributePath,
        operator: ComparativeOperator,
        value: ComparativeValue,
    },
}

impl AttributeExpression {
    pub fn path(&self) -> &AttributePath {
        match self {
            AttributeExpression::Present(path) => path,
            AttributeExpression::Comparison { path, .. } => path,
        }
    }
}

/// Filter over the values of a multi-valued attribute (`valuePath`).
///
/// # Example
/// ```text
/// emails[type eq "work" and value co "@example.com"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValuePathExpression {
    pub path: AttributePath,
    pub filter: ValueFilterExpression,
}
