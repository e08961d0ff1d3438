use simple_error::{SimpleError, SimpleResult};

use crate::parsing::token::TerminalKind;

// a declaration derives as `type, identifier, assignment, value`, so the
// initializer sits a fixed three terminals past its type marker. This offset
// is a structural assumption that must stay in lockstep with the grammar.
const INITIALIZER_OFFSET: usize = 3;

/// Walks the derivation positionally and checks that every declared type is
/// initialized with a literal of the matching kind.
pub fn analyze(derivation: &[TerminalKind]) -> SimpleResult<()> {
    for index in 0..derivation.len() {
        match derivation[index] {
            TerminalKind::TypeString => {
                expect_initializer(derivation, index, "STRING", |kind| {
                    kind == TerminalKind::String
                })?;
            },
            TerminalKind::TypeInt => {
                expect_initializer(derivation, index, "INT", |kind| kind == TerminalKind::Int)?;
            },
            TerminalKind::TypeBoolean => {
                expect_initializer(derivation, index, "BOOLEAN", |kind| {
                    matches!(kind, TerminalKind::BoolTrue | TerminalKind::BoolFalse)
                })?;
            },
            _ => {},
        }
    }

    Ok(())
}

fn expect_initializer(
    derivation: &[TerminalKind],
    type_index: usize,
    type_name: &str,
    is_valid: fn(TerminalKind) -> bool,
) -> SimpleResult<()> {
    let initializer = derivation.get(type_index + INITIALIZER_OFFSET);

    match initializer {
        Some(&kind) if is_valid(kind) => Ok(()),
        _ => Err(SimpleError::new(format!(
            "Semantic error: {type_name} type not assigned a {type_name} value"
        ))),
    }
}
