use crate::ast::{AttributeExpression, AttributePath, ValuePathExpression};

/// Parsed `PATH`, as used by the PATCH `path` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathExpression {
    /// `name.familyName`
    AttributePath(AttributePath),

    /// `emails[type eq "work"]` or `emails[type eq "work"].value`
    ValuePath {
        value_path: ValuePathExpression,
        sub_attribute: Option<String>,
    },

    /// `members pr`
    AttributeExpression(AttributeExpression),
}
