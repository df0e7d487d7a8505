use crate::ast::Token;

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    token_start: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            token_start: 0,
        }
    }

    /// Character offset of the most recently returned token.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_while(&mut self, accept: impl Fn(char) -> bool) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if accept(ch) {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    /// Read a double-quoted literal. A backslash makes the next character
    /// literal; no other escape translation happens. Input that ends before
    /// the closing quote yields everything read so far.
    fn read_string(&mut self) -> String {
        let mut result = String::new();
        self.advance(); // Consume opening quote

        while let Some(ch) = self.current_char() {
            match ch {
                '"' => {
                    self.advance();
                    return result;
                }
                '\\' => {
                    self.advance(); // Consume backslash
                    if let Some(escaped) = self.current_char() {
                        result.push(escaped);
                        self.advance();
                    }
                }
                _ => {
                    result.push(ch);
                    self.advance();
                }
            }
        }

        result
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        self.token_start = self.position;

        match self.current_char() {
            None => Token::EndOfInput,
            Some('(') => {
                self.advance();
                Token::OpenGroup
            }
            Some(')') => {
                self.advance();
                Token::CloseGroup
            }
            Some('"') => Token::String(self.read_string()),
            Some(ch) if is_number_char(ch) => Token::Number(self.read_while(is_number_char)),
            Some(ch) if is_word_char(ch) => Token::Word(self.read_while(is_word_char)),
            Some(_) => Token::Word(self.read_while(is_symbol_char)),
        }
    }
}

pub(crate) fn is_number_char(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.' || ch == '-'
}

pub(crate) fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '@' || ch == '_'
}

/// Characters that start no other token. Runs of them form symbolic words
/// such as `>=` or `,`.
pub(crate) fn is_symbol_char(ch: char) -> bool {
    !(ch.is_whitespace()
        || ch == '('
        || ch == ')'
        || ch == '"'
        || is_number_char(ch)
        || is_word_char(ch))
}

#[test]
fn test_filter_tokens() {
    let mut lexer = Lexer::new("Price ge 100 and (Name eq \"a\")");
    assert_eq!(lexer.next_token(), Token::Word("Price".to_string()));
    assert_eq!(lexer.next_token(), Token::Word("ge".to_string()));
    assert_eq!(lexer.next_token(), Token::Number("100".to_string()));
    assert_eq!(lexer.next_token(), Token::Word("and".to_string()));
    assert_eq!(lexer.next_token(), Token::OpenGroup);
    assert_eq!(lexer.next_token(), Token::Word("Name".to_string()));
    assert_eq!(lexer.next_token(), Token::Word("eq".to_string()));
    assert_eq!(lexer.next_token(), Token::String("a".to_string()));
    assert_eq!(lexer.next_token(), Token::CloseGroup);
    assert_eq!(lexer.next_token(), Token::EndOfInput);
}

#[test]
fn test_token_start() {
    let mut lexer = Lexer::new("  A  >=");
    lexer.next_token();
    assert_eq!(lexer.token_start(), 2);
    assert_eq!(lexer.next_token(), Token::Word(">=".to_string()));
    assert_eq!(lexer.token_start(), 5);
    lexer.next_token();
    assert_eq!(lexer.token_start(), 7);
}
