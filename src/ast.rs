//! # Sift Filter Language - Syntax Tree
//!
//! This module defines the tokens and trees produced when parsing the Sift
//! filter and ordering languages, compact textual notations for "which rows"
//! and "in what order" that a separate execution layer turns into real
//! predicates.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[clause]** - Leaf and combined filter clauses, plus combination helpers
//! - **[operators]** - Operator codes, connectives and sort directions
//! - **[order]** - Order-list directives
//!
//! ## Quick Start
//!
//! ```text
//! Price ge 100 and (Name eq "a" or Name eq "b")
//! ```
//!
//! This filter keeps rows priced at 100 or more whose name is `a` or `b`.
//!
//! ## Core Concepts
//!
//! ### Flat Folding
//!
//! There is no precedence between connectives. Clauses fold strictly left to
//! right, so `a and b or c` means `(a and b) or c`. Parentheses are the only
//! way to change grouping.
//!
//! ### Injected Keywords
//!
//! Operator and connective words (`eq`, `and`, `>=`, ...) carry no meaning
//! of their own. A [`Vocabulary`](crate::Vocabulary) maps them to
//! [`OperatorCode`] and [`Connective`] values at parse time.
//!
//! ### Null Marker
//!
//! With null handling enabled, the bare word `null` in value position becomes
//! [`ClauseValue::Null`]. The quoted `"null"` always stays text.
//!
//! ## Examples
//!
//! ### Left Fold
//!
//! ```text
//! A eq 1 and B eq 2 or C eq 3    // ((A and B) or C)
//! ```
//!
//! ### Escaped Quote
//!
//! ```text
//! Name eq "a\"b"                 // value is a"b
//! ```
//!
//! ### Order List
//!
//! ```text
//! Date desc, Price
//! ```
pub mod clause;
pub mod operators;
pub mod order;
pub mod tokens;

pub use clause::{Clause, ClauseValue, CombinedClause, LeafClause, Leaves, combine};
pub use operators::{Connective, Direction, OperatorCode};
pub use order::OrderClause;
pub use tokens::{Token, TokenKind};
