use std::collections::HashMap;

use super::token::TerminalKind;

// grammar categories; these only exist inside the parser and its table.
// the names returned by `as_str` are the row keys of the transition table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NonTerminal {
    Statement,
    VariableStatement,
    VariableCreation,
    VariableReassignment,
    Assignment,
    IfStatement,
    ElseClause,
    ElseIfStatement,
    ElseStatement,
    LoopStatement,
    WhileStatement,
    DoWhileStatement,
    PrintStatement,
    PrintValue,
    Comment,
    LineComment,
    BlockComment,
    ComparisonExpression,
    ComparisonValue,
    ComparisonOperator,
    ArithmeticStatement,
    ArithmeticValue,
    ArithmeticOperator,
    Type,
    VariableName,
    Value,
    StringValue,
    IntValue,
    BooleanValue,
}

impl NonTerminal {
    pub fn as_str(&self) -> &'static str {
        match self {
            NonTerminal::Statement => "<statement>",
            NonTerminal::VariableStatement => "<variable-statement>",
            NonTerminal::VariableCreation => "<variable-creation>",
            NonTerminal::VariableReassignment => "<variable-reassignment>",
            NonTerminal::Assignment => "<assignment>",
            NonTerminal::IfStatement => "<if-statement>",
            NonTerminal::ElseClause => "<else-clause>",
            NonTerminal::ElseIfStatement => "<else-if-statement>",
            NonTerminal::ElseStatement => "<else-statement>",
            NonTerminal::LoopStatement => "<loop-statement>",
            NonTerminal::WhileStatement => "<while-statement>",
            NonTerminal::DoWhileStatement => "<do-while-statement>",
            NonTerminal::PrintStatement => "<print-statement>",
            NonTerminal::PrintValue => "<print-value>",
            NonTerminal::Comment => "<comment>",
            NonTerminal::LineComment => "<line-comment>",
            NonTerminal::BlockComment => "<block-comment>",
            NonTerminal::ComparisonExpression => "<comparison-expression>",
            NonTerminal::ComparisonValue => "<comparison-value>",
            NonTerminal::ComparisonOperator => "<comparison-operator>",
            NonTerminal::ArithmeticStatement => "<arithmetic-statement>",
            NonTerminal::ArithmeticValue => "<arithmetic-value>",
            NonTerminal::ArithmeticOperator => "<arithmetic-operator>",
            NonTerminal::Type => "<type>",
            NonTerminal::VariableName => "<variable-name>",
            NonTerminal::Value => "<value>",
            NonTerminal::StringValue => "<string>",
            NonTerminal::IntValue => "<int>",
            NonTerminal::BooleanValue => "<boolean>",
        }
    }

    pub fn from_str(string: &str) -> Option<NonTerminal> {
        match string {
            "<statement>" => Some(NonTerminal::Statement),
            "<variable-statement>" => Some(NonTerminal::VariableStatement),
            "<variable-creation>" => Some(NonTerminal::VariableCreation),
            "<variable-reassignment>" => Some(NonTerminal::VariableReassignment),
            "<assignment>" => Some(NonTerminal::Assignment),
            "<if-statement>" => Some(NonTerminal::IfStatement),
            "<else-clause>" => Some(NonTerminal::ElseClause),
            "<else-if-statement>" => Some(NonTerminal::ElseIfStatement),
            "<else-statement>" => Some(NonTerminal::ElseStatement),
            "<loop-statement>" => Some(NonTerminal::LoopStatement),
            "<while-statement>" => Some(NonTerminal::WhileStatement),
            "<do-while-statement>" => Some(NonTerminal::DoWhileStatement),
            "<print-statement>" => Some(NonTerminal::PrintStatement),
            "<print-value>" => Some(NonTerminal::PrintValue),
            "<comment>" => Some(NonTerminal::Comment),
            "<line-comment>" => Some(NonTerminal::LineComment),
            "<block-comment>" => Some(NonTerminal::BlockComment),
            "<comparison-expression>" => Some(NonTerminal::ComparisonExpression),
            "<comparison-value>" => Some(NonTerminal::ComparisonValue),
            "<comparison-operator>" => Some(NonTerminal::ComparisonOperator),
            "<arithmetic-statement>" => Some(NonTerminal::ArithmeticStatement),
            "<arithmetic-value>" => Some(NonTerminal::ArithmeticValue),
            "<arithmetic-operator>" => Some(NonTerminal::ArithmeticOperator),
            "<type>" => Some(NonTerminal::Type),
            "<variable-name>" => Some(NonTerminal::VariableName),
            "<value>" => Some(NonTerminal::Value),
            "<string>" => Some(NonTerminal::StringValue),
            "<int>" => Some(NonTerminal::IntValue),
            "<boolean>" => Some(NonTerminal::BooleanValue),
            _ => None,
        }
    }
}

impl std::fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GrammarSymbol {
    Terminal(TerminalKind),
    NonTerminal(NonTerminal),
}

impl std::fmt::Display for GrammarSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrammarSymbol::Terminal(kind) => f.write_str(kind.as_str()),
            GrammarSymbol::NonTerminal(rule) => f.write_str(rule.as_str()),
        }
    }
}

pub type ProductionId = usize;

// the production whose body is a bare else-block; see Parser::parse
pub const BARE_ELSE_PRODUCTION: ProductionId = 18;

fn t(kind: TerminalKind) -> GrammarSymbol {
    GrammarSymbol::Terminal(kind)
}

fn n(rule: NonTerminal) -> GrammarSymbol {
    GrammarSymbol::NonTerminal(rule)
}

/// The right-hand side of every production of the longhand grammar, in
/// natural (leftmost-first) order, keyed by the production id the transition
/// table refers to. Kept as data so that the grammar stays table-driven end
/// to end; the table decides which of these are reachable.
pub fn production_rules() -> HashMap<ProductionId, Vec<GrammarSymbol>> {
    use NonTerminal::*;

    HashMap::from([
        (1, vec![n(VariableStatement)]),
        (2, vec![n(IfStatement)]),
        (3, vec![n(LoopStatement)]),
        (4, vec![n(PrintStatement)]),
        (5, vec![n(Comment)]),
        (6, vec![n(VariableCreation)]),
        (7, vec![n(VariableReassignment)]),
        (8, vec![n(Type), n(VariableName)]),
        (9, vec![n(Type), n(VariableName), n(Assignment)]),
        (10, vec![n(VariableName), n(Assignment)]),
        (11, vec![
            n(VariableName),
            t(TerminalKind::VariableAssignment),
            n(ArithmeticStatement),
        ]),
        (12, vec![t(TerminalKind::VariableAssignment), n(Value)]),
        (13, vec![
            t(TerminalKind::If),
            n(ComparisonExpression),
            t(TerminalKind::OpenBrace),
            n(Statement),
            t(TerminalKind::CloseBrace),
            n(ElseClause),
        ]),
        (14, vec![n(ElseIfStatement)]),
        (15, vec![n(ElseStatement)]),
        (16, vec![t(TerminalKind::CloseBrace)]),
        (17, vec![t(TerminalKind::Else), n(IfStatement)]),
        (18, vec![
            t(TerminalKind::Else),
            t(TerminalKind::OpenBrace),
            n(Statement),
            t(TerminalKind::CloseBrace),
        ]),
        (19, vec![n(WhileStatement)]),
        (20, vec![n(DoWhileStatement)]),
        (21, vec![
            t(TerminalKind::While),
            n(ComparisonExpression),
            t(TerminalKind::OpenBrace),
            n(Statement),
            t(TerminalKind::CloseBrace),
        ]),
        (22, vec![
            t(TerminalKind::OpenBrace),
            n(Statement),
            t(TerminalKind::CloseBrace),
            t(TerminalKind::While),
            n(ComparisonExpression),
        ]),
        (23, vec![t(TerminalKind::Print), n(PrintValue)]),
        (24, vec![n(VariableName)]),
        (25, vec![n(Value)]),
        (26, vec![n(LineComment)]),
        (27, vec![n(BlockComment)]),
        (28, vec![t(TerminalKind::LineComment), n(StringValue)]),
        (29, vec![
            t(TerminalKind::OpenBlockComment),
            n(StringValue),
            t(TerminalKind::CloseBlockComment),
        ]),
        (30, vec![
            n(ArithmeticValue),
            n(ArithmeticOperator),
            n(ArithmeticValue),
        ]),
        (31, vec![n(ArithmeticStatement)]),
        (32, vec![n(IntValue)]),
        (33, vec![n(VariableName)]),
        (34, vec![t(TerminalKind::Plus)]),
        (35, vec![t(TerminalKind::Minus)]),
        (36, vec![t(TerminalKind::Multiply)]),
        (37, vec![t(TerminalKind::Divide)]),
        (38, vec![
            n(ComparisonValue),
            n(ComparisonOperator),
            n(ComparisonValue),
        ]),
        (39, vec![n(Value)]),
        (40, vec![n(VariableName)]),
        (41, vec![t(TerminalKind::LessThan)]),
        (42, vec![t(TerminalKind::LessThanEqual)]),
        (43, vec![t(TerminalKind::Equal)]),
        (44, vec![t(TerminalKind::GreaterThanEqual)]),
        (45, vec![t(TerminalKind::GreaterThan)]),
        (46, vec![t(TerminalKind::TypeString)]),
        (47, vec![t(TerminalKind::TypeInt)]),
        (48, vec![t(TerminalKind::TypeBoolean)]),
        (49, vec![t(TerminalKind::VariableIdentifier)]),
        (50, vec![n(StringValue)]),
        (51, vec![n(IntValue)]),
        (52, vec![n(BooleanValue)]),
        (53, vec![t(TerminalKind::String)]),
        (54, vec![t(TerminalKind::Int)]),
        (55, vec![t(TerminalKind::BoolTrue)]),
        (56, vec![t(TerminalKind::BoolFalse)]),
    ])
}
