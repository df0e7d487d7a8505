use serde::{Deserialize, Serialize};

/// One `field [direction]` entry of an order list.
///
/// # Example
/// ```text
/// Date desc, Price
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderClause {
    pub field: String,
    /// Defaults to `false` when the direction is omitted
    pub descending: bool,
}

impl OrderClause {
    pub fn ascending(field: impl Into<String>) -> Self {
        OrderClause {
            field: field.into(),
            descending: false,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        OrderClause {
            field: field.into(),
            descending: true,
        }
    }
}
