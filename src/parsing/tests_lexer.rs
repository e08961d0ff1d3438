use super::lexer::Lexer;
use super::token::{TerminalKind, Token};

fn kinds_of(source: &str) -> Vec<TerminalKind> {
    Lexer::new_longhand()
        .read_all(source)
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .filter(|&kind| kind != TerminalKind::Whitespace)
        .collect()
}

#[test]
fn simple_declaration() {
    let tokens = Lexer::new_longhand().read_all("int x").unwrap();

    assert_eq!(
        tokens,
        vec![
            Token {
                kind: TerminalKind::TypeInt,
                slice: "int",
                char_idx: 0
            },
            Token {
                kind: TerminalKind::Whitespace,
                slice: " ",
                char_idx: 3
            },
            Token {
                kind: TerminalKind::VariableIdentifier,
                slice: "x",
                char_idx: 4
            },
        ]
    );
}

#[test]
fn keywords_win_over_identifiers() {
    assert_eq!(
        kinds_of("provided contrarily commence conclude corresponds supposing resultant"),
        vec![
            TerminalKind::If,
            TerminalKind::Else,
            TerminalKind::OpenBrace,
            TerminalKind::CloseBrace,
            TerminalKind::VariableAssignment,
            TerminalKind::While,
            TerminalKind::Print,
        ]
    );
}

#[test]
fn multi_character_operators_win_over_their_prefixes() {
    // ">=" must never come out as GREATER_THAN followed by an assignment
    assert_eq!(kinds_of(">="), vec![TerminalKind::GreaterThanEqual]);
    assert_eq!(kinds_of("<="), vec![TerminalKind::LessThanEqual]);
    assert_eq!(kinds_of("=="), vec![TerminalKind::Equal]);
    assert_eq!(
        kinds_of("> <"),
        vec![TerminalKind::GreaterThan, TerminalKind::LessThan]
    );
}

#[test]
fn comment_markers_win_over_divide() {
    assert_eq!(kinds_of("//"), vec![TerminalKind::LineComment]);
    assert_eq!(kinds_of("/*"), vec![TerminalKind::OpenBlockComment]);
    assert_eq!(kinds_of("*/"), vec![TerminalKind::CloseBlockComment]);
    assert_eq!(kinds_of("/"), vec![TerminalKind::Divide]);
}

#[test]
fn string_literals_keep_their_spaces() {
    let tokens = Lexer::new_longhand().read_all(r#""hi there""#).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TerminalKind::String);
    assert_eq!(tokens[0].slice, r#""hi there""#);
}

#[test]
fn literals_and_identifiers() {
    assert_eq!(
        kinds_of(r#"x corresponds 5 true false "word""#),
        vec![
            TerminalKind::VariableIdentifier,
            TerminalKind::VariableAssignment,
            TerminalKind::Int,
            TerminalKind::BoolTrue,
            TerminalKind::BoolFalse,
            TerminalKind::String,
        ]
    );
}

#[test]
fn unknown_character_is_reported_with_its_offset() {
    let result = Lexer::new_longhand().read_all("int x @");

    assert_eq!(result, Err(6));
}
