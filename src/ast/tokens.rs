use std::fmt;

/// Lexical token produced by the [`Lexer`](crate::Lexer).
///
/// Payload-carrying variants hold the exact source text of the token, after
/// string escapes have been applied. No numeric or keyword interpretation
/// happens at this level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Opening parenthesis of a group
    OpenGroup,

    /// Closing parenthesis of a group
    CloseGroup,

    /// Field name, keyword, bare value, or a run of symbol characters
    ///
    /// # Examples
    /// ```text
    /// Price
    /// @user_id
    /// >=
    /// ```
    Word(String),

    /// Maximal run of digits, `.` and `-`; not checked for well-formedness
    ///
    /// # Examples
    /// ```text
    /// 100
    /// -1.5
    /// -1.2.3
    /// ```
    Number(String),

    /// Double-quoted literal with backslash escapes removed
    ///
    /// # Examples
    /// ```text
    /// "Item 1"
    /// "a\"b"
    /// ```
    String(String),

    /// End of input, returned indefinitely once reached
    EndOfInput,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::OpenGroup => TokenKind::OpenGroup,
            Token::CloseGroup => TokenKind::CloseGroup,
            Token::Word(_) => TokenKind::Word,
            Token::Number(_) => TokenKind::Number,
            Token::String(_) => TokenKind::String,
            Token::EndOfInput => TokenKind::EndOfInput,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Token::Word(s) | Token::Number(s) | Token::String(s) => Some(s.as_str()),
            Token::OpenGroup | Token::CloseGroup | Token::EndOfInput => None,
        }
    }

    /// Consume the token, keeping only its text.
    pub fn into_text(self) -> Option<String> {
        match self {
            Token::Word(s) | Token::Number(s) | Token::String(s) => Some(s),
            Token::OpenGroup | Token::CloseGroup | Token::EndOfInput => None,
        }
    }
}

/// Payload-free token classification, used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    OpenGroup,
    CloseGroup,
    Word,
    Number,
    String,
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::OpenGroup => "'('",
            TokenKind::CloseGroup => "')'",
            TokenKind::Word => "word",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::EndOfInput => "end of input",
        };
        f.write_str(name)
    }
}
