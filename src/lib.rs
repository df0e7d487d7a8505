pub mod ast;
pub mod cli;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod vocabulary;

pub use ast::{
    Clause, ClauseValue, CombinedClause, Connective, Direction, LeafClause, OperatorCode,
    OrderClause, Token, TokenKind, combine,
};
pub use lexer::Lexer;
pub use output::{FilterPrinter, RenderError};
pub use parser::{KeywordKind, ParseError, ParseOptions, Parser, parse_filter, parse_order};
pub use vocabulary::{Vocabulary, VocabularyError};
