/// Maps a lexer token name to its source symbol. Tokens that are already symbols,
/// or that the table does not know, are returned unchanged.
pub fn symbol(token: &str) -> &str {
    match token {
        "ASSIGN" => "=",
        "PLUSASSIGN" | "PLUS_ASSIGN" => "+=",
        "MINUSASSIGN" | "MINUS_ASSIGN" => "-=",
        "MULTASSIGN" | "MULASSIGN" | "STARASSIGN" => "*=",
        "DIVASSIGN" | "SLASHASSIGN" => "/=",
        "MODASSIGN" | "PERCENTASSIGN" => "%=",
        "ANDASSIGN" => "&=",
        "ORASSIGN" => "|=",
        "XORASSIGN" => "^=",
        "LSHIFTASSIGN" => "<<=",
        "RSHIFTASSIGN" => ">>=",
        "INCREMENT" => "++",
        "DECREMENT" => "--",
        "PLUS" => "+",
        "MINUS" => "-",
        "MULTIPLY" | "STAR" | "MUL" => "*",
        "DIVIDE" | "SLASH" | "DIV" => "/",
        "MODULO" | "PERCENT" | "MOD" => "%",
        "EQ" | "EQUAL" | "EQUALS" => "==",
        "NEQ" | "NOTEQUAL" | "NOT_EQUAL" => "!=",
        "LT" | "LESS" => "<",
        "GT" | "GREATER" => ">",
        "LE" | "LTE" | "LESSEQUAL" => "<=",
        "GE" | "GTE" | "GREATEREQUAL" => ">=",
        "AND" | "LOGICAL_AND" => "&&",
        "OR" | "LOGICAL_OR" => "||",
        "NOT" | "LOGICAL_NOT" => "!",
        "BITAND" | "AMPERSAND" => "&",
        "BITOR" | "PIPE" => "|",
        "BITXOR" | "CARET" => "^",
        "BITNOT" | "TILDE" => "~",
        "LSHIFT" | "SHL" => "<<",
        "RSHIFT" | "SHR" => ">>",
        "ARROW" => "->",
        "DOT" => ".",
        "COMMA" => ",",
        other => other,
    }
}

/// Binding strength of a binary operator symbol; higher binds tighter.
pub fn binary_precedence(symbol: &str) -> u8 {
    match symbol {
        "," => 1,
        "=" | "+=" | "-=" | "*=" | "/=" | "%=" | "&=" | "|=" | "^=" | "<<=" | ">>=" => 2,
        "||" => 4,
        "&&" => 5,
        "|" => 6,
        "^" => 7,
        "&" => 8,
        "==" | "!=" => 9,
        "<" | ">" | "<=" | ">=" => 10,
        "<<" | ">>" => 11,
        "+" | "-" => 12,
        "*" | "/" | "%" => 13,
        _ => 12,
    }
}

pub const TERNARY_PRECEDENCE: u8 = 3;
pub const UNARY_PRECEDENCE: u8 = 14;
pub const POSTFIX_PRECEDENCE: u8 = 15;
pub const ATOM_PRECEDENCE: u8 = 16;

pub fn is_right_associative(symbol: &str) -> bool {
    binary_precedence(symbol) == 2
}
