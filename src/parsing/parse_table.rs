use simple_error::SimpleError;

use super::grammar::{NonTerminal, ProductionId};
use super::token::TerminalKind;

/// The (non-terminal x terminal) -> production lookup driving the parser.
/// Loaded once from its CSV resource and read-only afterwards. An empty cell
/// means there is no valid derivation for that pair.
pub struct TransitionTable {
    terminals: Vec<TerminalKind>,
    non_terminals: Vec<NonTerminal>,
    // cells are indexed [non-terminal row][terminal column]
    cells: Vec<Vec<Option<ProductionId>>>,
}

impl TransitionTable {
    /// Parses the tabular resource format: row 1 holds the terminal column
    /// keys with an empty first cell, every following row a non-terminal key
    /// and one cell per terminal column.
    pub fn from_csv(text: &str) -> Result<TransitionTable, SimpleError> {
        let mut lines = text.lines().filter(|line| !line.trim().is_empty());

        let header = lines
            .next()
            .ok_or_else(|| SimpleError::new("transition table is empty"))?;

        let mut terminals = Vec::new();
        for name in header.split(',').skip(1) {
            let kind = TerminalKind::from_str(name)
                .ok_or_else(|| SimpleError::new(format!("unknown terminal column '{name}'")))?;
            terminals.push(kind);
        }

        let mut non_terminals = Vec::new();
        let mut cells = Vec::new();

        for line in lines {
            let mut items = line.split(',');
            let key = items.next().unwrap_or("");
            let rule = NonTerminal::from_str(key)
                .ok_or_else(|| SimpleError::new(format!("unknown non-terminal row '{key}'")))?;

            let mut row = Vec::new();
            for cell in items {
                if cell.is_empty() {
                    row.push(None);
                } else {
                    let id = cell.parse::<ProductionId>().map_err(|_| {
                        SimpleError::new(format!("invalid production id '{cell}' in row {key}"))
                    })?;
                    row.push(Some(id));
                }
            }

            if row.len() != terminals.len() {
                return Err(SimpleError::new(format!(
                    "row {key} has {} cells, the header lists {} terminals",
                    row.len(),
                    terminals.len()
                )));
            }

            non_terminals.push(rule);
            cells.push(row);
        }

        Ok(TransitionTable {
            terminals,
            non_terminals,
            cells,
        })
    }

    pub fn get(&self, rule: NonTerminal, lookahead: TerminalKind) -> Option<ProductionId> {
        let row = self.non_terminals.iter().position(|&r| r == rule)?;
        let column = self.terminals.iter().position(|&t| t == lookahead)?;
        self.cells[row][column]
    }
}
