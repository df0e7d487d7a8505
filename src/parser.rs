use std::fmt;

use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    ast::{Clause, ClauseValue, Direction, LeafClause, OrderClause, Token, TokenKind, combine},
    lexer::Lexer,
    vocabulary::Vocabulary,
};

/// Word that becomes the null marker when null handling is enabled.
const NULL_VALUE: &str = "null";

/// Grammar violation. The whole parse is aborted; no partial tree is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected {found} at position {position}, expected {}", join_kinds(.expected))]
    UnexpectedToken {
        found: TokenKind,
        expected: Vec<TokenKind>,
        position: usize,
    },

    #[error("unknown {kind} '{word}' at position {position}")]
    UnresolvedKeyword {
        kind: KeywordKind,
        word: String,
        position: usize,
    },

    #[error("groups nested deeper than {limit} levels at position {position}")]
    NestingTooDeep { limit: usize, position: usize },
}

impl ParseError {
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { position, .. }
            | ParseError::UnresolvedKeyword { position, .. }
            | ParseError::NestingTooDeep { position, .. } => *position,
        }
    }
}

/// Which vocabulary failed to resolve a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordKind {
    Connective,
    Operator,
    OrderDelimiter,
}

impl fmt::Display for KeywordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            KeywordKind::Connective => "connective",
            KeywordKind::Operator => "operator",
            KeywordKind::OrderDelimiter => "order delimiter",
        })
    }
}

fn join_kinds(kinds: &[TokenKind]) -> String {
    kinds
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" or ")
}

/// Switches for a single parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Treat the bare word `null` in value position as the null marker
    pub handle_null_value: bool,
    /// Reject input whose parentheses nest deeper than this
    pub max_depth: Option<usize>,
}

impl ParseOptions {
    pub fn with_null_values(mut self) -> Self {
        self.handle_null_value = true;
        self
    }

    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }
}

/// Single-use recursive-descent parser.
///
/// Both entry points consume the parser, so a cursor that has already run to
/// the end can never be reused.
pub struct Parser<'v> {
    lexer: Lexer,
    vocabulary: &'v Vocabulary,
    options: ParseOptions,
    current_token: Token,
    current_position: usize,
    depth: usize,
}

impl<'v> Parser<'v> {
    pub fn new(mut lexer: Lexer, vocabulary: &'v Vocabulary, options: ParseOptions) -> Self {
        let current_token = lexer.next_token();
        let current_position = lexer.token_start();
        Parser {
            lexer,
            vocabulary,
            options,
            current_token,
            current_position,
            depth: 0,
        }
    }

    /// Take the current token and move to the next one.
    fn advance(&mut self) -> (Token, usize) {
        let next = self.lexer.next_token();
        let position = self.current_position;
        self.current_position = self.lexer.token_start();
        let token = std::mem::replace(&mut self.current_token, next);
        trace!(kind = %token.kind(), position, "token");
        (token, position)
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current_token.kind() == kind
    }

    fn expect(&mut self, expected: &[TokenKind]) -> Result<(Token, usize), ParseError> {
        if !expected.contains(&self.current_token.kind()) {
            return Err(self.unexpected(expected));
        }
        Ok(self.advance())
    }

    fn unexpected(&self, expected: &[TokenKind]) -> ParseError {
        ParseError::UnexpectedToken {
            found: self.current_token.kind(),
            expected: expected.to_vec(),
            position: self.current_position,
        }
    }

    /// Parse a complete filter. Empty input yields `None`.
    pub fn parse_filter(mut self) -> Result<Option<Clause>, ParseError> {
        if self.check(TokenKind::EndOfInput) {
            return Ok(None);
        }
        self.parse_group_body(false).map(Some)
    }

    /// Clause (Connective Clause)*, folded left to right.
    ///
    /// Inside a group the fold ends at the closing parenthesis, which is
    /// consumed; at top level it ends at end of input.
    fn parse_group_body(&mut self, is_group: bool) -> Result<Clause, ParseError> {
        let mut result = self.parse_clause()?;

        let terminator = if is_group {
            TokenKind::CloseGroup
        } else {
            TokenKind::EndOfInput
        };

        loop {
            if self.check(terminator) {
                if is_group {
                    self.advance();
                }
                return Ok(result);
            }

            let (token, position) = self.expect(&[terminator, TokenKind::Word])?;
            let word = token.into_text().unwrap_or_default();
            let connective = self.vocabulary.connective(&word).ok_or_else(|| {
                ParseError::UnresolvedKeyword {
                    kind: KeywordKind::Connective,
                    word,
                    position,
                }
            })?;

            let clause = self.parse_clause()?;
            result = combine(result, connective, clause);
        }
    }

    /// '(' GroupBody ')' | Field Operator Value
    fn parse_clause(&mut self) -> Result<Clause, ParseError> {
        let (token, position) = self.expect(&[TokenKind::OpenGroup, TokenKind::Word])?;

        match token {
            Token::OpenGroup => {
                if let Some(limit) = self.options.max_depth
                    && self.depth >= limit
                {
                    return Err(ParseError::NestingTooDeep { limit, position });
                }

                self.depth += 1;
                let clause = self.parse_group_body(true)?;
                self.depth -= 1;
                Ok(clause)
            }
            Token::Word(field) => self.parse_leaf(field).map(Clause::Leaf),
            _ => unreachable!("expect() admits only '(' or a word here"),
        }
    }

    fn parse_leaf(&mut self, field: String) -> Result<LeafClause, ParseError> {
        let (token, position) = self.expect(&[TokenKind::Word])?;
        let word = token.into_text().unwrap_or_default();
        let operator =
            self.vocabulary
                .operator(&word)
                .ok_or_else(|| ParseError::UnresolvedKeyword {
                    kind: KeywordKind::Operator,
                    word,
                    position,
                })?;

        let (token, _) = self.expect(&[TokenKind::Word, TokenKind::Number, TokenKind::String])?;
        let value = match token {
            Token::Word(word) if self.options.handle_null_value && word == NULL_VALUE => {
                ClauseValue::Null
            }
            token => ClauseValue::from(token.into_text()),
        };

        Ok(LeafClause {
            field,
            operator,
            value,
        })
    }
}

impl<'v> Parser<'v> {
    /// Parse an order list: `field [direction] (delimiter field [direction])*`.
    /// Empty input yields an empty list.
    pub fn parse_order(mut self) -> Result<Vec<OrderClause>, ParseError> {
        let mut clauses = vec![];

        if self.check(TokenKind::EndOfInput) {
            return Ok(clauses);
        }

        loop {
            let (token, _) = self.expect(&[TokenKind::Word])?;
            let field = token.into_text().unwrap_or_default();

            let direction = match &self.current_token {
                Token::Word(word) => self.vocabulary.direction(word),
                _ => None,
            };
            if direction.is_some() {
                self.advance();
            }

            clauses.push(OrderClause {
                field,
                descending: direction == Some(Direction::Descending),
            });

            let (token, position) = self.expect(&[TokenKind::Word, TokenKind::EndOfInput])?;
            match token {
                Token::EndOfInput => break,
                Token::Word(word) if self.vocabulary.is_order_delimiter(&word) => {}
                Token::Word(word) => {
                    return Err(ParseError::UnresolvedKeyword {
                        kind: KeywordKind::OrderDelimiter,
                        word,
                        position,
                    });
                }
                _ => unreachable!("expect() admits only a word or end of input here"),
            }
        }

        Ok(clauses)
    }
}

/// Parse filter text against a vocabulary.
///
/// Returns `Ok(None)` for empty (or whitespace-only) input, which callers
/// treat as "no filter".
pub fn parse_filter(
    text: &str,
    vocabulary: &Vocabulary,
    options: ParseOptions,
) -> Result<Option<Clause>, ParseError> {
    debug!(len = text.len(), ?options, "parsing filter");
    let result = Parser::new(Lexer::new(text), vocabulary, options).parse_filter();
    match &result {
        Ok(clause) => debug!(
            conditions = clause.as_ref().map_or(0, |c| c.leaves().count()),
            "filter parsed"
        ),
        Err(e) => debug!(error = %e, "filter rejected"),
    }
    result
}

/// Parse order-list text against a vocabulary.
pub fn parse_order(text: &str, vocabulary: &Vocabulary) -> Result<Vec<OrderClause>, ParseError> {
    debug!(len = text.len(), "parsing order list");
    let result = Parser::new(Lexer::new(text), vocabulary, ParseOptions::default()).parse_order();
    if let Err(e) = &result {
        debug!(error = %e, "order list rejected");
    }
    result
}
