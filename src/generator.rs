use crate::parsing::token::{TerminalKind, Token};

// tokens to drop after a comment marker. These are fixed counts, not
// skip-until-delimiter: the grammar makes a comment body a single string
// literal, and the counts assume exactly that shape.
const LINE_COMMENT_SKIP: usize = 1;
const BLOCK_COMMENT_SKIP: usize = 2;

enum Template {
    // a constant replacement for keywords, operators and braces
    Fixed(&'static str),
    // the token's own lexeme
    Lexeme,
    // the lexeme with its surrounding quotes stripped
    Unquoted,
}

// the closed terminal-to-template mapping of the pseudocode output format
fn template_of(kind: TerminalKind) -> Template {
    match kind {
        TerminalKind::If => Template::Fixed("IF"),
        TerminalKind::Else => Template::Fixed("ELSE"),
        TerminalKind::OpenBrace => Template::Fixed("{"),
        TerminalKind::CloseBrace => Template::Fixed("}"),
        TerminalKind::GreaterThan => Template::Fixed(">"),
        TerminalKind::LessThan => Template::Fixed("<"),
        TerminalKind::GreaterThanEqual => Template::Fixed(">="),
        TerminalKind::LessThanEqual => Template::Fixed("<="),
        TerminalKind::Equal => Template::Fixed("=="),
        TerminalKind::VariableIdentifier => Template::Lexeme,
        TerminalKind::VariableAssignment => Template::Fixed(":="),
        TerminalKind::While => Template::Fixed("WHILE"),
        TerminalKind::Print => Template::Fixed("PRINT"),
        TerminalKind::LineComment => Template::Fixed("#"),
        TerminalKind::OpenBlockComment => Template::Fixed("/*"),
        TerminalKind::CloseBlockComment => Template::Fixed("*/"),
        TerminalKind::TypeInt => Template::Fixed("int var"),
        TerminalKind::TypeString => Template::Fixed("string var"),
        TerminalKind::TypeBoolean => Template::Fixed("bool var"),
        TerminalKind::String => Template::Unquoted,
        TerminalKind::Int => Template::Lexeme,
        TerminalKind::BoolTrue => Template::Fixed("true"),
        TerminalKind::BoolFalse => Template::Fixed("false"),
        TerminalKind::Plus => Template::Fixed("+"),
        TerminalKind::Minus => Template::Fixed("-"),
        TerminalKind::Multiply => Template::Fixed("*"),
        TerminalKind::Divide => Template::Fixed("/"),
        TerminalKind::Whitespace => Template::Fixed(""),
    }
}

/// Walks the token sequence once and renders each token through its output
/// template, joining the fragments with single spaces. Comment markers are
/// dropped along with a fixed number of the tokens that follow them.
pub fn generate(tokens: &[Token]) -> String {
    let mut fragments: Vec<String> = Vec::new();
    let mut comment_skip = 0;

    for token in tokens {
        match token.kind {
            TerminalKind::LineComment => {
                comment_skip = LINE_COMMENT_SKIP;
                continue;
            },
            TerminalKind::OpenBlockComment => {
                comment_skip = BLOCK_COMMENT_SKIP;
                continue;
            },
            _ => {},
        }

        if comment_skip > 0 {
            comment_skip -= 1;
            continue;
        }

        let fragment = match template_of(token.kind) {
            Template::Fixed(text) => String::from(text),
            Template::Lexeme => String::from(token.slice),
            Template::Unquoted => String::from(token.slice.trim_matches('"')),
        };
        fragments.push(fragment);
    }

    fragments.join(" ")
}
