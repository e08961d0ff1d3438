use super::lexer::Lexer;
use super::parse_table::TransitionTable;
use super::parser::{Failure, Parser};
use super::token::{TerminalKind, Token};

fn longhand_parser() -> Parser {
    let table = TransitionTable::from_csv(include_str!("../../parse_table.csv")).unwrap();
    Parser::new(table)
}

fn tokens_of(source: &str) -> Vec<Token> {
    Lexer::new_longhand()
        .read_all(source)
        .unwrap()
        .into_iter()
        .filter(|token| token.kind != TerminalKind::Whitespace)
        .collect()
}

#[test]
fn declaration_with_terminator() {
    let tokens = tokens_of("int x corresponds 5 conclude");
    let derivation = longhand_parser().parse(&tokens).unwrap();

    assert_eq!(
        derivation,
        vec![
            TerminalKind::TypeInt,
            TerminalKind::VariableIdentifier,
            TerminalKind::VariableAssignment,
            TerminalKind::Int,
            TerminalKind::CloseBrace,
        ]
    );
}

#[test]
fn sequence_of_statements_reseeds_the_stack() {
    let tokens = tokens_of(
        r#"int x corresponds 5 conclude resultant "done" conclude"#,
    );
    let derivation = longhand_parser().parse(&tokens).unwrap();

    // one derivation, two independent top-level statements
    assert_eq!(derivation.len(), tokens.len());
    assert_eq!(derivation[5], TerminalKind::Print);
}

#[test]
fn if_statement_without_else() {
    let tokens = tokens_of(
        r#"provided x > 5 commence resultant "big" conclude conclude"#,
    );
    let derivation = longhand_parser().parse(&tokens).unwrap();

    assert_eq!(derivation[0], TerminalKind::If);
    assert_eq!(derivation.last(), Some(&TerminalKind::CloseBrace));
}

#[test]
fn bare_else_uses_the_lookahead_override() {
    // "contrarily commence" must select the bare else-block, which the
    // transition table alone cannot decide
    let tokens = tokens_of(
        r#"provided x > 5 commence resultant "big" conclude contrarily commence resultant "small" conclude"#,
    );
    let derivation = longhand_parser().parse(&tokens).unwrap();

    assert_eq!(derivation.len(), tokens.len());
}

#[test]
fn else_if_chain() {
    let tokens = tokens_of(
        r#"provided x > 5 commence resultant "big" conclude contrarily provided x == 5 commence resultant "five" conclude conclude"#,
    );
    let derivation = longhand_parser().parse(&tokens).unwrap();

    assert_eq!(derivation.len(), tokens.len());
}

#[test]
fn while_statement() {
    let tokens = tokens_of(
        r#"supposing x < 10 commence resultant x conclude"#,
    );
    let derivation = longhand_parser().parse(&tokens).unwrap();

    assert_eq!(derivation[0], TerminalKind::While);
}

#[test]
fn do_while_statement() {
    let tokens = tokens_of(
        r#"commence resultant x conclude supposing x < 10"#,
    );
    let derivation = longhand_parser().parse(&tokens).unwrap();

    assert_eq!(derivation[0], TerminalKind::OpenBrace);
    assert_eq!(derivation.last(), Some(&TerminalKind::Int));
}

#[test]
fn empty_table_cell_is_a_syntax_error() {
    // a comparison operator cannot start a statement
    let tokens = tokens_of("> 5");
    let result = longhand_parser().parse(&tokens);

    assert!(matches!(
        result,
        Err(Failure::UnexpectedToken {
            found: TerminalKind::GreaterThan,
            ..
        })
    ));
}

#[test]
fn truncated_input_runs_out_of_tokens() {
    let tokens = tokens_of("int x corresponds");
    let result = longhand_parser().parse(&tokens);

    assert!(matches!(result, Err(Failure::OutOfTokens { .. })));
}

#[test]
fn terminal_mismatch_is_a_hard_failure() {
    // production 23 starts with the PRINT terminal, so a table that selects
    // it on a STRING lookahead forces a stack-top terminal mismatch
    let table_text = ",STRING\n<statement>,23\n";
    let table = TransitionTable::from_csv(table_text).unwrap();
    let parser = Parser::new(table);

    let tokens = tokens_of(r#""hi""#);
    let result = parser.parse(&tokens);

    assert!(matches!(
        result,
        Err(Failure::TokenMismatch {
            expected: TerminalKind::Print,
            found: TerminalKind::String,
            ..
        })
    ));
}

#[test]
fn undefined_production_is_an_automaton_fault() {
    let table_text = ",PRINT\n<statement>,99\n";
    let table = TransitionTable::from_csv(table_text).unwrap();
    let parser = Parser::new(table);

    let tokens = tokens_of(r#"resultant "hi""#);
    let result = parser.parse(&tokens);

    assert!(matches!(result, Err(Failure::UnknownProduction { id: 99 })));
}

#[test]
fn comment_statement_parses() {
    let tokens = tokens_of(r#"// "a note""#);
    let derivation = longhand_parser().parse(&tokens).unwrap();

    assert_eq!(
        derivation,
        vec![TerminalKind::LineComment, TerminalKind::String]
    );
}

#[test]
fn block_comment_statement_parses() {
    let tokens = tokens_of(r#"/* "a note" */"#);
    let derivation = longhand_parser().parse(&tokens).unwrap();

    assert_eq!(
        derivation,
        vec![
            TerminalKind::OpenBlockComment,
            TerminalKind::String,
            TerminalKind::CloseBlockComment,
        ]
    );
}
