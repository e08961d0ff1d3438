use std::cmp;
use std::collections::HashMap;

use super::grammar::{production_rules, GrammarSymbol, NonTerminal, ProductionId};
use super::grammar::BARE_ELSE_PRODUCTION;
use super::parse_table::TransitionTable;
use super::token::{TerminalKind, Token};

#[derive(Debug, Clone)]
pub enum Failure {
    // there was an error reading the characters of the file
    LexerError {
        char_idx: usize,
    },
    // no transition exists for the current non-terminal and this terminal
    UnexpectedToken {
        char_idx: usize,
        found: TerminalKind,
    },
    // the stack-top terminal disagrees with the lookahead terminal
    TokenMismatch {
        char_idx: usize,
        expected: TerminalKind,
        found: TerminalKind,
    },
    // reached end of file while the stack still expects more
    OutOfTokens {
        expected: GrammarSymbol,
    },
    // the table refers to a production id that has no right-hand side;
    // this only happens when the table resource is malformed
    UnknownProduction {
        id: ProductionId,
    },
}

impl Failure {
    pub fn error_string(&self, source: &str) -> String {
        match self {
            Failure::LexerError { char_idx }
            | Failure::UnexpectedToken { char_idx, .. }
            | Failure::TokenMismatch { char_idx, .. } => {
                let offset = *char_idx;
                let line_number = source[..offset].bytes().filter(|&c| c == b'\n').count() + 1;
                let lower_newline = source[..offset]
                    .rfind(|c| c == '\n' || c == '\r')
                    .map(|v| v + 1)
                    .unwrap_or(0);
                let upper_newline = source[offset..]
                    .find(|c| c == '\n' || c == '\r')
                    .map(|v| v + offset)
                    .unwrap_or(source.len());
                let mut lb = cmp::max(offset as i64 - 40, lower_newline as i64) as usize;
                let mut ub = cmp::min(offset as i64 + 40, upper_newline as i64) as usize;
                // the 40-character window is measured in bytes and may land
                // inside a multi-byte character
                while !source.is_char_boundary(lb) {
                    lb -= 1;
                }
                while !source.is_char_boundary(ub) {
                    ub += 1;
                }
                format!(
                    "{} on line {line_number}:\n\n{:>40}{:<40}\n{:>40}^ when parsing here",
                    self.description(),
                    &source[lb..offset],
                    &source[offset..ub],
                    ""
                )
            },
            _ => self.description(),
        }
    }

    fn description(&self) -> String {
        match self {
            Failure::LexerError { .. } => String::from("Unknown symbol"),
            Failure::UnexpectedToken { found, .. } => {
                format!("Syntax error: unexpected {found}")
            },
            Failure::TokenMismatch { expected, found, .. } => {
                format!("Syntax error: expected {expected}, found {found}")
            },
            Failure::OutOfTokens { expected } => {
                format!("Syntax error: end of file while expecting {expected}")
            },
            Failure::UnknownProduction { id } => {
                format!("Internal error: production {id} has no right-hand side")
            },
        }
    }
}

/// A predictive stack automaton over the token sequence, driven by the
/// transition table. The grammar is a sequence of independent statements, so
/// the start symbol is re-seeded whenever the stack runs dry with input left.
pub struct Parser {
    table: TransitionTable,
    productions: HashMap<ProductionId, Vec<GrammarSymbol>>,
    start_rule: NonTerminal,
}

impl Parser {
    pub fn new(table: TransitionTable) -> Parser {
        Parser {
            table,
            productions: production_rules(),
            start_rule: NonTerminal::Statement,
        }
    }

    /// Consumes the whole token sequence and returns the derivation: the
    /// terminal kinds actually matched, in consumption order. Lexeme values
    /// are not part of the derivation; downstream stages re-derive them from
    /// the token sequence itself.
    pub fn parse(&self, tokens: &[Token]) -> Result<Vec<TerminalKind>, Failure> {
        let mut stack = vec![GrammarSymbol::NonTerminal(self.start_rule)];
        let mut derivation = Vec::new();
        let mut cursor = 0;

        loop {
            if stack.is_empty() {
                if cursor == tokens.len() {
                    return Ok(derivation);
                }
                // start of the next top-level statement
                stack.push(GrammarSymbol::NonTerminal(self.start_rule));
            }

            let top = *stack.last().unwrap();

            let Some(token) = tokens.get(cursor) else {
                return Err(Failure::OutOfTokens { expected: top });
            };

            match top {
                GrammarSymbol::Terminal(expected) => {
                    if expected != token.kind {
                        return Err(Failure::TokenMismatch {
                            char_idx: token.char_idx,
                            expected,
                            found: token.kind,
                        });
                    }
                    derivation.push(expected);
                    stack.pop();
                    cursor += 1;
                },
                GrammarSymbol::NonTerminal(rule) => {
                    let Some(mut production) = self.table.get(rule, token.kind) else {
                        return Err(Failure::UnexpectedToken {
                            char_idx: token.char_idx,
                            found: token.kind,
                        });
                    };

                    // the else/else-if split is not decidable from a single
                    // lookahead: both start with ELSE. The table is consulted
                    // first, then overridden via a one-token-further peek.
                    // This is the only exception to table-driven dispatch.
                    if rule == NonTerminal::ElseClause {
                        if let Some(next) = tokens.get(cursor + 1) {
                            if next.kind == TerminalKind::OpenBrace {
                                production = BARE_ELSE_PRODUCTION;
                            }
                        }
                    }

                    let symbols = self
                        .productions
                        .get(&production)
                        .ok_or(Failure::UnknownProduction { id: production })?;

                    // push in reverse, so the first symbol ends up on top
                    stack.pop();
                    stack.extend(symbols.iter().rev().copied());
                },
            }
        }
    }
}
