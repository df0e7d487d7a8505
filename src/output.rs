//! Rendering clause trees back into filter text.
//!
//! The printer is the inverse of the parser for a given [`Vocabulary`]:
//! parsing the rendered text with the same vocabulary (and null handling
//! enabled when the tree holds null markers) yields a structurally equal
//! tree.
//!
//! # Layout
//!
//! - **Left fold** - left children are never parenthesised, right children
//!   are whenever they are combined clauses
//! - **Values** - emitted bare when they re-read as the same single word or
//!   number, otherwise double-quoted with `\"` and `\\` escapes
//! - **Null marker** - emitted as the bare word `null`
//!
//! # Examples
//!
//! ```
//! use sift_lang::{Clause, OperatorCode, Vocabulary};
//! use sift_lang::output::FilterPrinter;
//!
//! let vocabulary = Vocabulary::odata();
//! let clause = Clause::leaf("Name", OperatorCode::IsEqualTo, "Item 1");
//!
//! let text = FilterPrinter::new(&vocabulary).print(&clause).unwrap();
//! assert_eq!(text, r#"Name eq "Item 1""#);
//! ```

use thiserror::Error;

use crate::{
    ast::{Clause, ClauseValue, Direction, LeafClause, OrderClause, Token},
    lexer::{Lexer, is_symbol_char},
    vocabulary::{Vocabulary, is_single_word, is_symbolic},
};

/// A tree that the vocabulary cannot express as text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("no keyword for {0} in vocabulary")]
    MissingKeyword(String),

    #[error("field name {0:?} cannot be written as a single word")]
    UnrepresentableField(String),
}

pub struct FilterPrinter<'v> {
    vocabulary: &'v Vocabulary,
}

impl<'v> FilterPrinter<'v> {
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        FilterPrinter { vocabulary }
    }

    pub fn print(&self, clause: &Clause) -> Result<String, RenderError> {
        let mut out = String::new();
        self.print_clause(clause, &mut out)?;
        Ok(out)
    }

    fn print_clause(&self, clause: &Clause, out: &mut String) -> Result<(), RenderError> {
        match clause {
            Clause::Leaf(leaf) => self.print_leaf(leaf, out),
            Clause::Combined(combined) => {
                let connective = self
                    .vocabulary
                    .connective_keyword(combined.connective)
                    .ok_or_else(|| RenderError::MissingKeyword(format!("{:?}", combined.connective)))?;

                self.print_clause(&combined.left, out)?;
                out.push(' ');
                out.push_str(connective);
                out.push(' ');

                if matches!(*combined.right, Clause::Combined(_)) {
                    out.push('(');
                    self.print_clause(&combined.right, out)?;
                    out.push(')');
                } else {
                    self.print_clause(&combined.right, out)?;
                }
                Ok(())
            }
        }
    }

    fn print_leaf(&self, leaf: &LeafClause, out: &mut String) -> Result<(), RenderError> {
        let operator = self
            .vocabulary
            .operator_keyword(leaf.operator)
            .ok_or_else(|| RenderError::MissingKeyword(format!("{:?}", leaf.operator)))?;

        out.push_str(self.field(&leaf.field)?);
        out.push(' ');
        out.push_str(operator);
        out.push(' ');

        match &leaf.value {
            ClauseValue::Null => out.push_str("null"),
            ClauseValue::Text(text) => self.print_value(text, out),
        }
        Ok(())
    }

    fn print_value(&self, text: &str, out: &mut String) {
        // Bare `null` would turn into the null marker when re-read
        if is_bare_value(text) && text != "null" {
            out.push_str(text);
            return;
        }

        out.push('"');
        for ch in text.chars() {
            if ch == '"' || ch == '\\' {
                out.push('\\');
            }
            out.push(ch);
        }
        out.push('"');
    }

    fn field<'a>(&self, field: &'a str) -> Result<&'a str, RenderError> {
        if is_single_word(field) {
            Ok(field)
        } else {
            Err(RenderError::UnrepresentableField(field.to_string()))
        }
    }

    /// Render an order list, e.g. `Date desc, Price`.
    pub fn print_order(&self, clauses: &[OrderClause]) -> Result<String, RenderError> {
        let mut out = String::new();

        for (i, clause) in clauses.iter().enumerate() {
            if i > 0 {
                let delimiter = self
                    .vocabulary
                    .order_delimiter_keyword()
                    .ok_or_else(|| RenderError::MissingKeyword("order delimiter".to_string()))?;
                // A symbolic delimiter hugs the previous entry unless that
                // entry ends in a symbol, which would merge into one word
                let hug = out.chars().next_back().is_some_and(|c| !is_symbol_char(c));
                if is_symbolic(delimiter) && hug {
                    out.push_str(delimiter);
                    out.push(' ');
                } else {
                    out.push(' ');
                    out.push_str(delimiter);
                    out.push(' ');
                }
            }

            out.push_str(self.field(&clause.field)?);

            if clause.descending {
                let direction = self
                    .vocabulary
                    .direction_keyword(Direction::Descending)
                    .ok_or_else(|| RenderError::MissingKeyword("Descending".to_string()))?;
                out.push(' ');
                out.push_str(direction);
            }
        }

        Ok(out)
    }
}

/// True when `text` re-reads as a single word or number token equal to itself.
fn is_bare_value(text: &str) -> bool {
    let mut lexer = Lexer::new(text);
    let matches = match lexer.next_token() {
        Token::Word(word) | Token::Number(word) => word == text,
        _ => false,
    };
    matches && lexer.next_token() == Token::EndOfInput
}
