use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ast::{Connective, OperatorCode};

/// A filter condition tree.
///
/// Either an atomic `field operator value` comparison or two clauses joined
/// by a connective. Trees are immutable once built; the combination helpers
/// take their operands by value and return a new root.
///
/// # Example
/// ```text
/// Price ge 100 and (Name eq "a" or Name eq "b")
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Clause {
    Leaf(LeafClause),
    Combined(CombinedClause),
}

/// Atomic comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafClause {
    pub field: String,
    pub operator: OperatorCode,
    pub value: ClauseValue,
}

/// Two clauses joined by a connective. Both children are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedClause {
    pub connective: Connective,
    pub left: Box<Clause>,
    pub right: Box<Clause>,
}

/// Right-hand side of a leaf clause.
///
/// `Null` is the "field has no value" marker and is distinct from the
/// four-character text `null`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClauseValue {
    Text(String),
    Null,
}

impl ClauseValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ClauseValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ClauseValue::Text(s) => Some(s.as_str()),
            ClauseValue::Null => None,
        }
    }

    /// Interpret the text as a decimal number.
    ///
    /// The parser accepts any run of digits, dots and minus signs, so this is
    /// where malformed numbers such as `-1.2.3` are first noticed. Returns
    /// `None` for the null marker and for text that is not a decimal.
    pub fn as_decimal(&self) -> Option<Decimal> {
        self.as_str()?.parse::<Decimal>().ok()
    }
}

impl From<String> for ClauseValue {
    fn from(s: String) -> Self {
        ClauseValue::Text(s)
    }
}

impl From<&str> for ClauseValue {
    fn from(s: &str) -> Self {
        ClauseValue::Text(s.to_string())
    }
}

impl From<Option<String>> for ClauseValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(ClauseValue::Null, ClauseValue::Text)
    }
}

/// Join two clauses under a connective.
pub fn combine(left: Clause, connective: Connective, right: Clause) -> Clause {
    Clause::Combined(CombinedClause {
        connective,
        left: Box::new(left),
        right: Box::new(right),
    })
}

impl Clause {
    pub fn leaf(
        field: impl Into<String>,
        operator: OperatorCode,
        value: impl Into<ClauseValue>,
    ) -> Self {
        Clause::Leaf(LeafClause {
            field: field.into(),
            operator,
            value: value.into(),
        })
    }

    /// Extend the tree with `self AND field operator value`.
    pub fn and(
        self,
        field: impl Into<String>,
        operator: OperatorCode,
        value: impl Into<ClauseValue>,
    ) -> Self {
        combine(self, Connective::And, Clause::leaf(field, operator, value))
    }

    /// Extend the tree with `self OR field operator value`.
    pub fn or(
        self,
        field: impl Into<String>,
        operator: OperatorCode,
        value: impl Into<ClauseValue>,
    ) -> Self {
        combine(self, Connective::Or, Clause::leaf(field, operator, value))
    }

    /// Leaf clauses in source order.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves { stack: vec![self] }
    }

    /// Number of levels in the tree; a single leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Clause::Leaf(_) => 1,
            Clause::Combined(c) => 1 + c.left.depth().max(c.right.depth()),
        }
    }
}

/// Iterator returned by [`Clause::leaves`].
pub struct Leaves<'a> {
    stack: Vec<&'a Clause>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a LeafClause;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(clause) = self.stack.pop() {
            match clause {
                Clause::Leaf(leaf) => return Some(leaf),
                Clause::Combined(c) => {
                    self.stack.push(&c.right);
                    self.stack.push(&c.left);
                }
            }
        }
        None
    }
}
