use crate::ast::{AttributeExpression, ValuePathExpression};

/// Operands joined by `or`. Never empty.
///
/// Together with [`AllExpression`] this fixes precedence structurally:
/// `a and b or c` is `Any[All[a, b], All[c]]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnyExpression<V> {
    groups: Vec<AllExpression<V>>,
}

impl<V> AnyExpression<V> {
    pub fn new(first: AllExpression<V>) -> Self {
        AnyExpression {
            groups: vec![first],
        }
    }

    /// Appends another `or` operand.
    pub fn or(mut self, group: AllExpression<V>) -> Self {
        self.groups.push(group);
        self
    }

    pub fn groups(&self) -> &[AllExpression<V>] {
        &self.groups
    }
}

/// Operands joined by `and`. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AllExpression<V> {
    values: Vec<V>,
}

impl<V> AllExpression<V> {
    pub fn new(first: V) -> Self {
        AllExpression {
            values: vec![first],
        }
    }

    /// Appends another `and` operand.
    pub fn and(mut self, value: V) -> Self {
        self.values.push(value);
        self
    }

    pub fn values(&self) -> &[V] {
        &self.values
    }

    pub(crate) fn push(&mut self, value: V) {
        self.values.push(value);
    }
}

pub type FilterAnyExpression = AnyExpression<FilterValueExpression>;
pub type FilterAllExpression = AllExpression<FilterValueExpression>;
pub type ValueFilterAnyExpression = AnyExpression<ValueFilterValueExpression>;
pub type ValueFilterAllExpression = AllExpression<ValueFilterValueExpression>;

/// Root of a parsed `FILTER`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterExpression {
    pub any: FilterAnyExpression,
}

impl FilterExpression {
    pub fn new(any: FilterAnyExpression) -> Self {
        FilterExpression { any }
    }

    /// A filter consisting of one operand.
    pub fn single(value: FilterValueExpression) -> Self {
        FilterExpression::new(AnyExpression::new(AllExpression::new(value)))
    }
}

/// Operand of a filter (`filterValue`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FilterValueExpression {
    /// `userName eq "bjensen"`
    Attribute(AttributeExpression),

    /// `emails[type eq "work"]`
    ValuePath(ValuePathExpression),

    /// `(title pr or nickName pr)`
    Grouped(Box<FilterExpression>),

    /// `not (title pr)`
    NegatedGrouped(Box<FilterExpression>),
}

/// Filter inside the brackets of a value path (`valFilter`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueFilterExpression {
    pub any: ValueFilterAnyExpression,
}

impl ValueFilterExpression {
    pub fn new(any: ValueFilterAnyExpression) -> Self {
        ValueFilterExpression { any }
    }

    pub fn single(value: ValueFilterValueExpression) -> Self {
        ValueFilterExpression::new(AnyExpression::new(AllExpression::new(value)))
    }
}

/// Operand of a value filter (`valFilterValue`).
///
/// Unlike [`FilterValueExpression`] there is no value path variant: RFC 7644
/// does not allow brackets inside brackets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueFilterValueExpression {
    Attribute(AttributeExpression),
    Grouped(Box<ValueFilterExpression>),
    NegatedGrouped(Box<ValueFilterExpression>),
}
