use crate::ast::Keyword;

/// Attribute comparison operators (`compareOp`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparativeOperator {
    /// Equal (`eq`)
    Equal,
    /// Not equal (`ne`)
    NotEqual,
    /// Contains (`co`)
    Contains,
    /// Starts with (`sw`)
    StartsWith,
    /// Ends with (`ew`)
    EndsWith,
    /// Greater than (`gt`)
    GreaterThan,
    /// Greater than or equal (`ge`)
    GreaterEqual,
    /// Less than (`lt`)
    LessThan,
    /// Less than or equal (`le`)
    LessEqual,
}

impl ComparativeOperator {
    /// Maps a keyword to its operator. `pr`, the logical operators and the
    /// literal names are not comparison operators.
    pub fn from_keyword(keyword: Keyword) -> Option<Self> {
        match keyword {
            Keyword::Eq => Some(ComparativeOperator::Equal),
            Keyword::Ne => Some(ComparativeOperator::NotEqual),
            Keyword::Co => Some(ComparativeOperator::Contains),
            Keyword::Sw => Some(ComparativeOperator::StartsWith),
            Keyword::Ew => Some(ComparativeOperator::EndsWith),
            Keyword::Gt => Some(ComparativeOperator::GreaterThan),
            Keyword::Ge => Some(ComparativeOperator::GreaterEqual),
            Keyword::Lt => Some(ComparativeOperator::LessThan),
            Keyword::Le => Some(ComparativeOperator::LessEqual),
            _ => None,
        }
    }

    pub fn keyword(self) -> Keyword {
        match self {
            ComparativeOperator::Equal => Keyword::Eq,
            ComparativeOperator::NotEqual => Keyword::Ne,
            ComparativeOperator::Contains => Keyword::Co,
            ComparativeOperator::StartsWith => Keyword::Sw,
            ComparativeOperator::EndsWith => Keyword::Ew,
            ComparativeOperator::GreaterThan => Keyword::Gt,
            ComparativeOperator::GreaterEqual => Keyword::Ge,
            ComparativeOperator::LessThan => Keyword::Lt,
            ComparativeOperator::LessEqual => Keyword::Le,
        }
    }
}

/// Logical operators joining filter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOperator {
    /// Logical AND (`and`), binds tighter than `or`
    And,
    /// Logical OR (`or`)
    Or,
}

impl LogicalOperator {
    pub fn from_keyword(keyword: Keyword) -> Option<Self> {
        match keyword {
            Keyword::And => Some(LogicalOperator::And),
            Keyword::Or => Some(LogicalOperator::Or),
            _ => None,
        }
    }

    pub fn keyword(self) -> Keyword {
        match self {
            LogicalOperator::And => Keyword::And,
            LogicalOperator::Or => Keyword::Or,
        }
    }
}
