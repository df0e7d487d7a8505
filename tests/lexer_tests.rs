// tests/lexer_tests.rs

use rstest::rstest;
use sift_lang::ast::{Token, TokenKind};
use sift_lang::lexer::Lexer;

fn lex_all(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input);
    let mut tokens = vec![];
    loop {
        let token = lexer.next_token();
        if token == Token::EndOfInput {
            break;
        }
        tokens.push(token);
    }
    tokens
}

fn word(s: &str) -> Token {
    Token::Word(s.to_string())
}

fn number(s: &str) -> Token {
    Token::Number(s.to_string())
}

fn string(s: &str) -> Token {
    Token::String(s.to_string())
}

// ============================================================================
// Groups and Words
// ============================================================================

#[test]
fn test_group_tokens() {
    let test_cases = vec![("(", Token::OpenGroup), (")", Token::CloseGroup)];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(lexer.next_token(), expected, "Failed for input: {}", input);
        assert_eq!(lexer.next_token(), Token::EndOfInput);
    }
}

#[test]
fn test_parens_split_words() {
    assert_eq!(
        lex_all("(A)"),
        vec![Token::OpenGroup, word("A"), Token::CloseGroup]
    );
}

#[rstest]
#[case("Price")]
#[case("item_count")]
#[case("@user")]
#[case("_internal")]
#[case("Größe")]
#[case("a1b2")]
fn test_word_characters(#[case] input: &str) {
    assert_eq!(lex_all(input), vec![word(input)]);
}

#[test]
fn test_word_stops_at_other_characters() {
    assert_eq!(lex_all("a.b"), vec![word("a"), number("."), word("b")]);
    assert_eq!(lex_all("x\"y\""), vec![word("x"), string("y")]);
}

#[rstest]
#[case(">=")]
#[case("!=")]
#[case("<>")]
#[case(",")]
#[case("&&")]
fn test_symbol_words(#[case] input: &str) {
    assert_eq!(lex_all(input), vec![word(input)]);
}

#[test]
fn test_symbol_word_hugging_operands() {
    assert_eq!(
        lex_all("Price>=100"),
        vec![word("Price"), word(">="), number("100")]
    );
    assert_eq!(lex_all("a=-1"), vec![word("a"), word("="), number("-1")]);
    assert_eq!(
        lex_all("Date desc,Price"),
        vec![word("Date"), word("desc"), word(","), word("Price")]
    );
}

// ============================================================================
// Numbers
// ============================================================================

#[rstest]
#[case("100")]
#[case("-1.5")]
#[case("-1.2.3")]
#[case("...")]
#[case("-")]
#[case("1-2")]
fn test_number_runs_are_not_validated(#[case] input: &str) {
    assert_eq!(lex_all(input), vec![number(input)]);
}

#[test]
fn test_number_then_word() {
    assert_eq!(lex_all("1abc"), vec![number("1"), word("abc")]);
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn test_simple_string() {
    assert_eq!(lex_all("\"Item 1\""), vec![string("Item 1")]);
}

#[test]
fn test_escaped_quote() {
    let tokens = lex_all(r#""a\"b""#);
    assert_eq!(tokens, vec![string("a\"b")]);
    assert_eq!(tokens[0].text().map(|s| s.chars().count()), Some(3));
}

#[test]
fn test_escape_is_literal_only() {
    // No translation: \n is just n, \\ is a single backslash
    assert_eq!(lex_all(r#""a\nb""#), vec![string("anb")]);
    assert_eq!(lex_all(r#""a\\b""#), vec![string("a\\b")]);
}

#[test]
fn test_empty_string() {
    assert_eq!(lex_all("\"\""), vec![string("")]);
}

#[test]
fn test_string_keeps_parens_and_spaces() {
    assert_eq!(lex_all("\"(a and b)\""), vec![string("(a and b)")]);
}

#[test]
fn test_unterminated_string_runs_to_end() {
    assert_eq!(lex_all("\"abc def"), vec![string("abc def")]);
    assert_eq!(lex_all("\"abc\\"), vec![string("abc")]);
}

// ============================================================================
// Whitespace, End of Input, Positions
// ============================================================================

#[test]
fn test_whitespace_is_skipped() {
    assert_eq!(
        lex_all(" \t Name\n eq\r\n  1 "),
        vec![word("Name"), word("eq"), number("1")]
    );
}

#[test]
fn test_end_of_input_repeats() {
    let mut lexer = Lexer::new("   ");
    for _ in 0..5 {
        assert_eq!(lexer.next_token(), Token::EndOfInput);
    }
}

#[test]
fn test_token_positions() {
    let mut lexer = Lexer::new("A eq (\"x\")");
    let expected = vec![
        (TokenKind::Word, 0),
        (TokenKind::Word, 2),
        (TokenKind::OpenGroup, 5),
        (TokenKind::String, 6),
        (TokenKind::CloseGroup, 9),
        (TokenKind::EndOfInput, 10),
    ];

    for (kind, position) in expected {
        let token = lexer.next_token();
        assert_eq!(token.kind(), kind);
        assert_eq!(lexer.token_start(), position);
    }
}

#[test]
fn test_token_text() {
    assert_eq!(word("a").text(), Some("a"));
    assert_eq!(Token::OpenGroup.text(), None);
    assert_eq!(Token::EndOfInput.into_text(), None);
    assert_eq!(number("1").into_text(), Some("1".to_string()));
}
