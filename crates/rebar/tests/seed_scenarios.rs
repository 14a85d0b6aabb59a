//! Whole-pipeline tests exercising §8's seed scenarios and lexer scenarios
//! end to end, the way `faxc-drv/tests/integration_test.rs` drives the
//! lexer and parser together rather than testing each phase crate in
//! isolation.

use rebar::{Environment, LexicalUnit, SemanticUnit};

fn analyze(source: &str) -> String {
    let env = Environment::new();
    let mut lexical_unit = LexicalUnit::new(source);
    env.perform_lexical_analysis(&mut lexical_unit).unwrap();

    let mut semantic_unit = SemanticUnit::new();
    env.perform_semantic_analysis(&mut semantic_unit, &lexical_unit).unwrap();
    semantic_unit.root().to_string_compact()
}

#[test]
fn seed_scenario_1_addition() {
    assert_eq!(analyze("3 + 4"), "scope { addition { INTEGER (3), INTEGER (4), }, }");
}

#[test]
fn seed_scenario_2_left_associative_addition_chain() {
    assert_eq!(
        analyze("3 + 4 + 5 + 6"),
        "scope { addition { addition { addition { INTEGER (3), INTEGER (4), }, INTEGER (5), }, INTEGER (6), }, }"
    );
}

#[test]
fn seed_scenario_3_postfix_increment() {
    assert_eq!(
        analyze("some_identifier++"),
        "scope { postfix_increment { IDENTIFIER (some_identifier), }, }"
    );
}

#[test]
fn seed_scenario_4_nested_prefix_increment() {
    assert_eq!(
        analyze("++++some_identifier"),
        "scope { prefix_increment { prefix_increment { IDENTIFIER (some_identifier), }, }, }"
    );
}

#[test]
fn seed_scenario_5_chained_indexing_and_grouping() {
    assert_eq!(
        analyze("(some_identifier[2 + 3] + 3)[(3+5)][12]"),
        "scope { index { index { addition { index { IDENTIFIER (some_identifier), addition { INTEGER (2), INTEGER (3), }, }, INTEGER (3), }, addition { INTEGER (3), INTEGER (5), }, }, INTEGER (12), }, }"
    );
}

#[test]
fn seed_scenario_6_call_with_sequence_arguments() {
    assert_eq!(
        analyze("some_identifier(23, 40 + 4, 10)"),
        "scope { call { IDENTIFIER (some_identifier), sequence { INTEGER (23), addition { INTEGER (40), INTEGER (4), }, INTEGER (10), }, }, }"
    );
}

#[test]
fn seed_scenario_7_chained_assignment_with_dot_index_call() {
    assert_eq!(
        analyze("here = somewhere = (some_identifier.id)((23), (40 + 4), (10))"),
        "scope { assignment { IDENTIFIER (here), assignment { IDENTIFIER (somewhere), call { dot_index { IDENTIFIER (some_identifier), IDENTIFIER (id), }, sequence { INTEGER (23), addition { INTEGER (40), INTEGER (4), }, INTEGER (10), }, }, }, }, }"
    );
}

#[test]
fn boundary_nested_postfix_chain() {
    assert_eq!(
        analyze("x++++"),
        "scope { postfix_increment { postfix_increment { IDENTIFIER (x), }, }, }"
    );
}

#[test]
fn boundary_outer_paren_stripping_is_idempotent() {
    assert_eq!(analyze("(3 + 4)"), analyze("3 + 4"));
}

#[test]
#[should_panic(expected = "NoApplicableOperator")]
fn boundary_angle_bracket_has_no_comparison_reading() {
    // `<`/`>` double as bracket-nesting delimiters (§4.9) and are not wired
    // as comparison operators (see DESIGN.md); a bare `a < b` has no
    // applicable pivot rather than silently parsing as a comparison.
    analyze("a < b");
}

#[test]
fn lexer_scenario_identifier_string_identifier() {
    let env = Environment::new();
    let mut unit = LexicalUnit::new("hello\"Hello, world!\"goodbye");
    env.perform_lexical_analysis(&mut unit).unwrap();
    let rendered: Vec<String> = unit.tokens().iter().map(|t| t.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "IDENTIFIER (hello)".to_string(),
            "STRING (\"Hello, world!\")".to_string(),
            "IDENTIFIER (goodbye)".to_string(),
        ]
    );
}

#[test]
fn lexer_scenario_identifier_safe_symbols_do_not_split_identifiers() {
    let env = Environment::new();
    let mut unit = LexicalUnit::new("truehello+worldtrueworldfalseworld+=worldfalse");
    env.perform_lexical_analysis(&mut unit).unwrap();
    let rendered: Vec<String> = unit.tokens().iter().map(|t| t.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "IDENTIFIER (truehello)".to_string(),
            "SYMBOL (plus)".to_string(),
            "IDENTIFIER (worldtrueworldfalseworld)".to_string(),
            "SYMBOL (plus_equals)".to_string(),
            "IDENTIFIER (worldfalse)".to_string(),
        ]
    );
}

#[test]
fn lexer_scenario_digit_separator_parsing() {
    assert_eq!(rebar_lex::parse_integer("100'000'000", true, 0).unwrap(), 100_000_000);
    let parsed = rebar_lex::parse_number(".123'''45''6", true, 0).unwrap();
    assert!((parsed - 0.123456).abs() < 1e-12);
}
