// every terminal of the longhand grammar, doubling as the lexical token class.
// the names returned by `as_str` are the column keys of the transition table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TerminalKind {
    If,
    Else,
    OpenBrace,
    CloseBrace,
    GreaterThan,
    LessThan,
    GreaterThanEqual,
    LessThanEqual,
    Equal,
    VariableIdentifier,
    VariableAssignment,
    While,
    Print,
    LineComment,
    OpenBlockComment,
    CloseBlockComment,
    TypeInt,
    TypeString,
    TypeBoolean,
    String,
    Int,
    BoolTrue,
    BoolFalse,
    Plus,
    Minus,
    Multiply,
    Divide,
    // ignored
    Whitespace,
}

impl TerminalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TerminalKind::If => "IF",
            TerminalKind::Else => "ELSE",
            TerminalKind::OpenBrace => "OPEN_BRACE",
            TerminalKind::CloseBrace => "CLOSE_BRACE",
            TerminalKind::GreaterThan => "GREATER_THAN",
            TerminalKind::LessThan => "LESS_THAN",
            TerminalKind::GreaterThanEqual => "GREATER_THAN_EQUAL",
            TerminalKind::LessThanEqual => "LESS_THAN_EQUAL",
            TerminalKind::Equal => "EQUAL",
            TerminalKind::VariableIdentifier => "VARIABLE_IDENTIFIER",
            TerminalKind::VariableAssignment => "VARIABLE_ASSIGNMENT",
            TerminalKind::While => "WHILE",
            TerminalKind::Print => "PRINT",
            TerminalKind::LineComment => "LINE_COMMENT",
            TerminalKind::OpenBlockComment => "OPEN_BLOCK_COMMENT",
            TerminalKind::CloseBlockComment => "CLOSE_BLOCK_COMMENT",
            TerminalKind::TypeInt => "TYPE_INT",
            TerminalKind::TypeString => "TYPE_STRING",
            TerminalKind::TypeBoolean => "TYPE_BOOLEAN",
            TerminalKind::String => "STRING",
            TerminalKind::Int => "INT",
            TerminalKind::BoolTrue => "BOOL_TRUE",
            TerminalKind::BoolFalse => "BOOL_FALSE",
            TerminalKind::Plus => "PLUS",
            TerminalKind::Minus => "MINUS",
            TerminalKind::Multiply => "MULTIPLY",
            TerminalKind::Divide => "DIVIDE",
            TerminalKind::Whitespace => "WHITESPACE",
        }
    }

    pub fn from_str(string: &str) -> Option<TerminalKind> {
        match string {
            "IF" => Some(TerminalKind::If),
            "ELSE" => Some(TerminalKind::Else),
            "OPEN_BRACE" => Some(TerminalKind::OpenBrace),
            "CLOSE_BRACE" => Some(TerminalKind::CloseBrace),
            "GREATER_THAN" => Some(TerminalKind::GreaterThan),
            "LESS_THAN" => Some(TerminalKind::LessThan),
            "GREATER_THAN_EQUAL" => Some(TerminalKind::GreaterThanEqual),
            "LESS_THAN_EQUAL" => Some(TerminalKind::LessThanEqual),
            "EQUAL" => Some(TerminalKind::Equal),
            "VARIABLE_IDENTIFIER" => Some(TerminalKind::VariableIdentifier),
            "VARIABLE_ASSIGNMENT" => Some(TerminalKind::VariableAssignment),
            "WHILE" => Some(TerminalKind::While),
            "PRINT" => Some(TerminalKind::Print),
            "LINE_COMMENT" => Some(TerminalKind::LineComment),
            "OPEN_BLOCK_COMMENT" => Some(TerminalKind::OpenBlockComment),
            "CLOSE_BLOCK_COMMENT" => Some(TerminalKind::CloseBlockComment),
            "TYPE_INT" => Some(TerminalKind::TypeInt),
            "TYPE_STRING" => Some(TerminalKind::TypeString),
            "TYPE_BOOLEAN" => Some(TerminalKind::TypeBoolean),
            "STRING" => Some(TerminalKind::String),
            "INT" => Some(TerminalKind::Int),
            "BOOL_TRUE" => Some(TerminalKind::BoolTrue),
            "BOOL_FALSE" => Some(TerminalKind::BoolFalse),
            "PLUS" => Some(TerminalKind::Plus),
            "MINUS" => Some(TerminalKind::Minus),
            "MULTIPLY" => Some(TerminalKind::Multiply),
            "DIVIDE" => Some(TerminalKind::Divide),
            "WHITESPACE" => Some(TerminalKind::Whitespace),
            _ => None,
        }
    }
}

impl std::fmt::Display for TerminalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Eq)]
pub struct Token<'prog> {
    pub kind: TerminalKind,
    pub slice: &'prog str,
    pub char_idx: usize,
}

impl<'prog> std::fmt::Display for Token<'prog> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slice)
    }
}

impl<'prog> PartialEq for Token<'prog> {
    // true iff it refers to the exact same token in the program.
    // a token with the same characters at a different place is therefore not equal
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.char_idx == other.char_idx
    }
}
