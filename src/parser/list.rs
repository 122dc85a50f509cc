use crate::ast::{AllExpression, AnyExpression, LogicalOperator};
use std::mem;

/// Operands in source order with the operator in front of each one after
/// the first, before precedence is applied.
#[derive(Debug)]
pub(crate) struct ListExpression<V> {
    start: V,
    continued: Vec<(LogicalOperator, V)>,
}

impl<V> ListExpression<V> {
    pub(crate) fn new(start: V) -> Self {
        ListExpression {
            start,
            continued: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, operator: LogicalOperator, value: V) {
        self.continued.push((operator, value));
    }

    /// Groups operands into `or`-joined runs of `and`-joined values.
    pub(crate) fn fold(self) -> AnyExpression<V> {
        let mut current = AllExpression::new(self.start);
        let mut closed = Vec::new();

        for (operator, value) in self.continued {
            match operator {
                LogicalOperator::And => current.push(value),
                LogicalOperator::Or => {
                    closed.push(mem::replace(&mut current, AllExpression::new(value)));
                }
            }
        }

        let mut groups = closed.into_iter();
        match groups.next() {
            None => AnyExpression::new(current),
            Some(first) => groups
                .fold(AnyExpression::new(first), AnyExpression::or)
                .or(current),
        }
    }
}
