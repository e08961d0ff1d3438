use simple_error::{SimpleError, SimpleResult};

use crate::generator;
use crate::parsing::lexer::Lexer;
use crate::parsing::parse_table::TransitionTable;
use crate::parsing::parser::{Failure, Parser};
use crate::parsing::token::{TerminalKind, Token};
use crate::semantics;

/// The full translation pipeline: lexer, table-driven parser, semantic check
/// and pseudocode generator. Built once per transition table; each
/// `translate` call runs one source file through all stages, stopping at the
/// first error with no partial output.
pub struct Translator {
    lexer: Lexer,
    parser: Parser,
}

#[derive(Debug)]
pub struct Translation {
    pub derivation: Vec<TerminalKind>,
    pub output: String,
}

impl Translator {
    pub fn build(table_text: &str) -> SimpleResult<Translator> {
        let table = TransitionTable::from_csv(table_text)?;

        Ok(Translator {
            lexer: Lexer::new_longhand(),
            parser: Parser::new(table),
        })
    }

    pub fn translate(&self, program: &str) -> SimpleResult<Translation> {
        let tokens = self.lexer.read_all(program).map_err(|char_idx| {
            SimpleError::new(Failure::LexerError { char_idx }.error_string(program))
        })?;

        // whitespace is lexed so that stray characters can be reported, but
        // it is not part of the grammar or the output
        let tokens: Vec<Token> = tokens
            .into_iter()
            .filter(|token| token.kind != TerminalKind::Whitespace)
            .collect();

        let derivation = self
            .parser
            .parse(&tokens)
            .map_err(|failure| SimpleError::new(failure.error_string(program)))?;

        semantics::analyze(&derivation)?;

        let output = generator::generate(&tokens);

        Ok(Translation { derivation, output })
    }
}
