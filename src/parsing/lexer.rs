use regex::Regex;

use super::token::{TerminalKind, Token};

/// A priority-ordered rule lexer: rules are tried in the order they were
/// given, and the first rule that matches at the current position wins.
/// Longest-match does not apply across rules, so multi-character operators
/// and comment markers must be listed before their single-character prefixes,
/// and every fixed keyword before the generic identifier rule.
pub struct Lexer {
    elements: Vec<TokenDefinition>,
}

struct TokenDefinition {
    class: TerminalKind,
    regex: Regex,
}

impl Lexer {
    pub fn new(tokens: Vec<(TerminalKind, &str)>) -> Lexer {
        let mut elements = Vec::new();

        for (class, regex) in tokens {
            let final_regex = String::from("^") + regex;
            elements.push(TokenDefinition {
                class,
                regex: Regex::new(&final_regex).unwrap(),
            })
        }

        Lexer { elements }
    }

    pub fn new_longhand() -> Lexer {
        Lexer::new(vec![
            (TerminalKind::Whitespace, r"\s+"),
            (TerminalKind::LineComment, r"//"),
            (TerminalKind::OpenBlockComment, r"/\*"),
            (TerminalKind::CloseBlockComment, r"\*/"),
            (TerminalKind::If, "provided"),
            (TerminalKind::Else, "contrarily"),
            (TerminalKind::OpenBrace, "commence"),
            (TerminalKind::CloseBrace, "conclude"),
            (TerminalKind::VariableAssignment, "corresponds"),
            (TerminalKind::While, "supposing"),
            (TerminalKind::Print, "resultant"),
            (TerminalKind::GreaterThanEqual, ">="),
            (TerminalKind::LessThanEqual, "<="),
            (TerminalKind::Equal, "=="),
            (TerminalKind::GreaterThan, ">"),
            (TerminalKind::LessThan, "<"),
            (TerminalKind::Plus, r"\+"),
            (TerminalKind::Minus, "-"),
            (TerminalKind::Multiply, r"\*"),
            (TerminalKind::Divide, "/"),
            (TerminalKind::TypeInt, "int"),
            (TerminalKind::TypeString, "string"),
            (TerminalKind::TypeBoolean, "bool"),
            (TerminalKind::BoolTrue, "true"),
            (TerminalKind::BoolFalse, "false"),
            (TerminalKind::String, r#"".+?""#),
            (TerminalKind::Int, r"\d+"),
            // the identifier rule subsumes every keyword, so it comes last
            (TerminalKind::VariableIdentifier, r"\w+"),
        ])
    }

    pub fn read_token(&self, string: &str) -> Option<(TerminalKind, usize)> {
        for def in &self.elements {
            if let Some(found) = def.regex.find(string) {
                return Some((def.class, found.end()));
            }
        }

        None
    }

    // on failure, returns the byte offset of the character that no rule matches
    pub fn read_all<'prog>(&self, string: &'prog str) -> Result<Vec<Token<'prog>>, usize> {
        let mut cursor = 0;
        let mut tokens = Vec::new();

        while cursor < string.len() {
            match self.read_token(&string[cursor..]) {
                Some((class, size)) => {
                    let slice = &string[cursor..(cursor + size)];
                    tokens.push(Token {
                        kind: class,
                        slice,
                        char_idx: cursor,
                    });
                    cursor += size;
                },
                None => return Err(cursor),
            }
        }

        Ok(tokens)
    }
}
