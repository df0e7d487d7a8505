use serde::{Deserialize, Serialize};

/// Comparison semantic of a leaf clause.
///
/// The parser never sees these names directly: keywords in the filter text
/// are mapped to codes by a [`Vocabulary`](crate::Vocabulary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorCode {
    // Equality
    /// Field equals value
    IsEqualTo,
    /// Field differs from value
    IsNotEqualTo,

    // Ordering
    /// Field is strictly less than value
    IsLessThan,
    /// Field is less than or equal to value
    IsLessThanOrEqualTo,
    /// Field is strictly greater than value
    IsGreaterThan,
    /// Field is greater than or equal to value
    IsGreaterThanOrEqualTo,

    // Text
    /// Field text starts with value
    StartsWith,
    /// Field text ends with value
    EndsWith,
    /// Field text contains value
    Contains,
    /// Field text does not contain value
    DoesNotContain,

    // Membership
    /// Field is one of the items the execution layer reads from value
    IsContainedIn,
}

impl OperatorCode {
    pub const ALL: [OperatorCode; 11] = [
        OperatorCode::IsEqualTo,
        OperatorCode::IsNotEqualTo,
        OperatorCode::IsLessThan,
        OperatorCode::IsLessThanOrEqualTo,
        OperatorCode::IsGreaterThan,
        OperatorCode::IsGreaterThanOrEqualTo,
        OperatorCode::StartsWith,
        OperatorCode::EndsWith,
        OperatorCode::Contains,
        OperatorCode::DoesNotContain,
        OperatorCode::IsContainedIn,
    ];
}

/// Logical connective joining two clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Connective {
    /// Both clauses must hold
    And,
    /// Either clause may hold
    Or,
}

/// Sort direction of an order directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Ascending,
    Descending,
}
