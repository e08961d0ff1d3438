use super::grammar::NonTerminal;
use super::parse_table::TransitionTable;
use super::token::TerminalKind;

#[test]
fn small_table_loads() {
    let table_text = "\
,PRINT,STRING
<statement>,4,
<print-statement>,23,
";
    let table = TransitionTable::from_csv(table_text).unwrap();

    assert_eq!(
        table.get(NonTerminal::Statement, TerminalKind::Print),
        Some(4)
    );
    assert_eq!(
        table.get(NonTerminal::PrintStatement, TerminalKind::Print),
        Some(23)
    );
    // empty cell means no valid derivation
    assert_eq!(table.get(NonTerminal::Statement, TerminalKind::String), None);
    // terminals outside the header have no column
    assert_eq!(table.get(NonTerminal::Statement, TerminalKind::If), None);
}

#[test]
fn unknown_terminal_column_is_rejected() {
    let table_text = ",PRINT,NO_SUCH_TERMINAL\n<statement>,4,\n";

    assert!(TransitionTable::from_csv(table_text).is_err());
}

#[test]
fn unknown_non_terminal_row_is_rejected() {
    let table_text = ",PRINT\n<no-such-rule>,4\n";

    assert!(TransitionTable::from_csv(table_text).is_err());
}

#[test]
fn non_numeric_cell_is_rejected() {
    let table_text = ",PRINT\n<statement>,four\n";

    assert!(TransitionTable::from_csv(table_text).is_err());
}

#[test]
fn short_row_is_rejected() {
    let table_text = ",PRINT,STRING\n<statement>,4\n";

    assert!(TransitionTable::from_csv(table_text).is_err());
}

#[test]
fn shipped_table_loads() {
    let table_text = include_str!("../../parse_table.csv");
    let table = TransitionTable::from_csv(table_text).unwrap();

    assert_eq!(table.get(NonTerminal::Statement, TerminalKind::If), Some(2));
    assert_eq!(
        table.get(NonTerminal::ElseClause, TerminalKind::Else),
        Some(14)
    );
    assert_eq!(
        table.get(NonTerminal::Statement, TerminalKind::CloseBrace),
        Some(16)
    );
}
