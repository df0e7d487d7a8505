// tests/output_tests.rs

use proptest::prelude::*;
use sift_lang::{
    Clause, ClauseValue, Connective, FilterPrinter, OperatorCode, OrderClause, ParseOptions,
    RenderError, Vocabulary, combine, parse_filter, parse_order,
};

fn print(clause: &Clause) -> String {
    FilterPrinter::new(&Vocabulary::odata()).print(clause).unwrap()
}

fn reparse(text: &str) -> Clause {
    parse_filter(
        text,
        &Vocabulary::odata(),
        ParseOptions::default().with_null_values(),
    )
    .unwrap()
    .unwrap()
}

// ============================================================================
// Filters
// ============================================================================

#[test]
fn test_print_leaf() {
    let clause = Clause::leaf("Price", OperatorCode::IsGreaterThanOrEqualTo, "100");
    assert_eq!(print(&clause), "Price ge 100");
}

#[test]
fn test_print_left_fold_without_parens() {
    let clause = Clause::leaf("A", OperatorCode::IsEqualTo, "1")
        .and("B", OperatorCode::IsEqualTo, "2")
        .or("C", OperatorCode::IsEqualTo, "3");
    assert_eq!(print(&clause), "A eq 1 and B eq 2 or C eq 3");
}

#[test]
fn test_print_right_group_in_parens() {
    let clause = combine(
        Clause::leaf("A", OperatorCode::IsEqualTo, "1"),
        Connective::And,
        Clause::leaf("B", OperatorCode::IsEqualTo, "2").or("C", OperatorCode::IsEqualTo, "3"),
    );
    let text = print(&clause);
    assert_eq!(text, "A eq 1 and (B eq 2 or C eq 3)");
    assert_eq!(reparse(&text), clause);
}

#[test]
fn test_print_quotes_when_needed() {
    let cases = vec![
        ("Item 1", r#""Item 1""#),
        ("a\"b", r#""a\"b""#),
        ("back\\slash", r#""back\\slash""#),
        ("", r#""""#),
        ("1abc", r#""1abc""#),
        ("(x)", r#""(x)""#),
        ("-1.2.3", "-1.2.3"),
        ("Item_1", "Item_1"),
    ];

    for (value, expected) in cases {
        let clause = Clause::leaf("Name", OperatorCode::IsEqualTo, value);
        let text = print(&clause);
        assert_eq!(text, format!("Name eq {}", expected), "Failed for value: {}", value);
        assert_eq!(reparse(&text), clause, "Round trip failed for value: {}", value);
    }
}

#[test]
fn test_print_null_marker_and_null_text() {
    let marker = Clause::leaf("A", OperatorCode::IsEqualTo, ClauseValue::Null);
    assert_eq!(print(&marker), "A eq null");
    assert_eq!(reparse("A eq null"), marker);

    let text = Clause::leaf("A", OperatorCode::IsEqualTo, "null");
    assert_eq!(print(&text), r#"A eq "null""#);
    assert_eq!(reparse(&print(&text)), text);
}

#[test]
fn test_print_missing_keyword() {
    let vocabulary = Vocabulary::new().with_operator("eq", OperatorCode::IsEqualTo);
    let clause = Clause::leaf("A", OperatorCode::IsEqualTo, "1").and("B", OperatorCode::IsEqualTo, "2");

    let err = FilterPrinter::new(&vocabulary).print(&clause).unwrap_err();
    assert!(matches!(err, RenderError::MissingKeyword(_)));
}

#[test]
fn test_print_unrepresentable_field() {
    let clause = Clause::leaf("First Name", OperatorCode::IsEqualTo, "x");
    let err = FilterPrinter::new(&Vocabulary::odata()).print(&clause).unwrap_err();
    assert_eq!(err, RenderError::UnrepresentableField("First Name".to_string()));
}

// ============================================================================
// Order Lists
// ============================================================================

#[test]
fn test_print_order() {
    let vocabulary = Vocabulary::odata();
    let clauses = vec![
        OrderClause::descending("Date"),
        OrderClause::ascending("Price"),
    ];
    let text = FilterPrinter::new(&vocabulary).print_order(&clauses).unwrap();
    assert_eq!(text, "Date desc, Price");
    assert_eq!(parse_order(&text, &vocabulary).unwrap(), clauses);
}

#[test]
fn test_print_order_symbolic_direction_keeps_delimiter_apart() {
    let vocabulary = Vocabulary::new()
        .with_direction("!", sift_lang::Direction::Descending)
        .with_order_delimiter(",");
    let clauses = vec![OrderClause::descending("Date"), OrderClause::ascending("Price")];

    let text = FilterPrinter::new(&vocabulary).print_order(&clauses).unwrap();
    assert_eq!(text, "Date ! , Price");
    assert_eq!(parse_order(&text, &vocabulary).unwrap(), clauses);
}

#[test]
fn test_print_order_symbolic_field_keeps_delimiter_apart() {
    let vocabulary = Vocabulary::odata();
    let clauses = vec![OrderClause::ascending("!"), OrderClause::ascending("B")];

    let text = FilterPrinter::new(&vocabulary).print_order(&clauses).unwrap();
    assert_eq!(text, "! , B");
    assert_eq!(parse_order(&text, &vocabulary).unwrap(), clauses);
}

#[test]
fn test_print_order_word_delimiter() {
    let vocabulary = Vocabulary::new()
        .with_direction("down", sift_lang::Direction::Descending)
        .with_order_delimiter("then");
    let clauses = vec![OrderClause::ascending("A"), OrderClause::descending("B")];
    let text = FilterPrinter::new(&vocabulary).print_order(&clauses).unwrap();
    assert_eq!(text, "A then B down");
}

// ============================================================================
// Round Trip
// ============================================================================

fn operator_strategy() -> impl Strategy<Value = OperatorCode> {
    prop::sample::select(OperatorCode::ALL.to_vec())
}

fn connective_strategy() -> impl Strategy<Value = Connective> {
    prop_oneof![Just(Connective::And), Just(Connective::Or)]
}

fn leaf_strategy() -> impl Strategy<Value = Clause> {
    (
        "[A-Za-z][A-Za-z0-9_]{0,8}",
        operator_strategy(),
        "[A-Za-z0-9]{1,8}",
    )
        .prop_map(|(field, operator, value)| Clause::leaf(field, operator, value))
}

fn clause_strategy() -> impl Strategy<Value = Clause> {
    leaf_strategy().prop_recursive(4, 24, 2, |inner| {
        (inner.clone(), connective_strategy(), inner)
            .prop_map(|(left, connective, right)| combine(left, connective, right))
    })
}

proptest! {
    #[test]
    fn prop_print_then_parse_round_trips(clause in clause_strategy()) {
        let vocabulary = Vocabulary::odata();
        let text = FilterPrinter::new(&vocabulary).print(&clause).unwrap();
        let parsed = parse_filter(&text, &vocabulary, ParseOptions::default()).unwrap();
        prop_assert_eq!(parsed, Some(clause));
    }

    #[test]
    fn prop_quoted_values_round_trip(value in "[ -~]{0,12}") {
        let vocabulary = Vocabulary::odata();
        let clause = Clause::leaf("Name", OperatorCode::Contains, value);
        let text = FilterPrinter::new(&vocabulary).print(&clause).unwrap();
        let parsed = parse_filter(&text, &vocabulary, ParseOptions::default()).unwrap();
        prop_assert_eq!(parsed, Some(clause));
    }
}
