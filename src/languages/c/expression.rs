use super::operators::{self, ATOM_PRECEDENCE, POSTFIX_PRECEDENCE, TERNARY_PRECEDENCE, UNARY_PRECEDENCE};
use crate::languages::json::{bool_field, field, scalar_text, str_field, type_tag};
use serde_json::Value;
use std::fmt::{self, Write};

/// A C/C++ expression node, as far as labels need to understand it.
#[derive(Debug, Clone, PartialEq)]
pub enum CExpression {
    Identifier(String),
    IntLiteral(String),
    RealLiteral(String),
    StringLiteral(String),
    CharLiteral(String),
    BoolLiteral(bool),
    BinaryOp {
        operator: String,
        left: Box<CExpression>,
        right: Box<CExpression>,
    },
    UnaryOp {
        operator: String,
        operand: Box<CExpression>,
        postfix: bool,
    },
    Call {
        callee: Box<CExpression>,
        arguments: Vec<CExpression>,
    },
    ArrayAccess {
        array: Box<CExpression>,
        index: Box<CExpression>,
    },
    MemberAccess {
        object: Box<CExpression>,
        member: String,
        arrow: bool,
    },
    Ternary {
        condition: Box<CExpression>,
        when_true: Box<CExpression>,
        when_false: Box<CExpression>,
    },
    Cast {
        target_type: String,
        operand: Box<CExpression>,
    },
    Sizeof(Box<CExpression>),
    /// Absent or unrecognized. Renders as the empty string.
    Unknown,
}

impl CExpression {
    /// Reads an expression node. Never fails: unknown shapes become `Unknown`, and a
    /// bare JSON string is taken as already-rendered source text.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(text) => return CExpression::Identifier(text.clone()),
            Value::Object(_) => {}
            _ => return CExpression::Unknown,
        }

        let child = |keys: &[&str]| Box::new(Self::from_opt(field(value, keys)));
        let literal = || field(value, &["value", "raw"]).and_then(scalar_text).unwrap_or_default();

        let tag = type_tag(value);
        match tag {
            "Identifier" => CExpression::Identifier(
                str_field(value, &["name", "value"]).unwrap_or_default().to_string(),
            ),
            "IntLiteral" | "IntegerLiteral" => CExpression::IntLiteral(literal()),
            "RealLiteral" | "FloatLiteral" => CExpression::RealLiteral(literal()),
            "StringLiteral" => CExpression::StringLiteral(literal()),
            "CharLiteral" => CExpression::CharLiteral(literal()),
            "BoolLiteral" => CExpression::BoolLiteral(bool_field(value, &["value"]).unwrap_or(false)),
            "BinaryOp" | "BinaryExpr" | "AssignExpr" => CExpression::BinaryOp {
                operator: str_field(value, &["operator", "op"])
                    .unwrap_or(if tag == "AssignExpr" { "ASSIGN" } else { "" })
                    .to_string(),
                left: child(&["left", "target"]),
                right: child(&["right", "value"]),
            },
            "UnaryOp" | "UnaryExpr" => {
                let postfix = bool_field(value, &["postfix", "isPostfix"])
                    .or_else(|| bool_field(value, &["prefix", "isPrefix"]).map(|p| !p))
                    .unwrap_or(false);
                CExpression::UnaryOp {
                    operator: str_field(value, &["operator", "op"]).unwrap_or_default().to_string(),
                    operand: child(&["operand", "argument", "expression"]),
                    postfix,
                }
            }
            "CallExpr" | "FunctionCall" => CExpression::Call {
                callee: child(&["callee", "function", "name"]),
                arguments: field(value, &["arguments", "args"])
                    .and_then(Value::as_array)
                    .map(|args| args.iter().map(Self::from_json).collect())
                    .unwrap_or_default(),
            },
            "ArrayAccessExpr" | "ArrayAccess" => CExpression::ArrayAccess {
                array: child(&["array", "object"]),
                index: child(&["index"]),
            },
            "MemberAccessExpr" | "MemberAccess" => {
                let arrow = bool_field(value, &["isArrow", "arrow"]).unwrap_or_else(|| {
                    str_field(value, &["operator", "op"])
                        .is_some_and(|op| operators::symbol(op) == "->")
                });
                CExpression::MemberAccess {
                    object: child(&["object"]),
                    member: Self::from_opt(field(value, &["member", "property"])).to_string(),
                    arrow,
                }
            }
            "TernaryOp" | "ConditionalExpr" => CExpression::Ternary {
                condition: child(&["condition", "test"]),
                when_true: child(&["trueExpr", "consequent", "thenExpr"]),
                when_false: child(&["falseExpr", "alternate", "elseExpr"]),
            },
            "CastExpr" => CExpression::Cast {
                target_type: str_field(value, &["targetType", "castType"]).unwrap_or_default().to_string(),
                operand: child(&["expression", "operand"]),
            },
            "SizeofExpr" => CExpression::Sizeof(child(&["operand", "argument", "typeName"])),
            _ => CExpression::Unknown,
        }
    }

    pub fn from_opt(value: Option<&Value>) -> Self {
        value.map_or(CExpression::Unknown, Self::from_json)
    }

    /// The leftmost operand of a chain of binary operators, e.g. `cout` in
    /// `cout << a << b`.
    pub fn leftmost(&self) -> &CExpression {
        match self {
            CExpression::BinaryOp { left, .. } => left.leftmost(),
            other => other,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, CExpression::Unknown)
    }

    /// First character a prefix operand renders with, when it could fuse with the operator.
    fn leading_char(&self) -> Option<char> {
        match self {
            CExpression::UnaryOp {
                operator,
                postfix: false,
                ..
            } => operators::symbol(operator).chars().next(),
            CExpression::IntLiteral(text) | CExpression::RealLiteral(text) => text.chars().next(),
            _ => None,
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            CExpression::BinaryOp { operator, .. } => operators::binary_precedence(operators::symbol(operator)),
            CExpression::Ternary { .. } => TERNARY_PRECEDENCE,
            CExpression::UnaryOp { postfix: false, .. }
            | CExpression::Cast { .. }
            | CExpression::Sizeof(_) => UNARY_PRECEDENCE,
            CExpression::UnaryOp { postfix: true, .. }
            | CExpression::Call { .. }
            | CExpression::ArrayAccess { .. }
            | CExpression::MemberAccess { .. } => POSTFIX_PRECEDENCE,
            _ => ATOM_PRECEDENCE,
        }
    }

    /// Renders the expression, adding parentheses only where the tree's shape
    /// differs from what precedence alone would parse.
    fn write_with(&self, f: &mut fmt::Formatter<'_>, parent_precedence: u8) -> fmt::Result {
        let precedence = self.precedence();
        let needs_parens = precedence < parent_precedence;
        if needs_parens {
            f.write_str("(")?;
        }

        match self {
            CExpression::Identifier(name) => f.write_str(name)?,
            CExpression::IntLiteral(text) | CExpression::RealLiteral(text) => f.write_str(text)?,
            CExpression::StringLiteral(text) => write_quoted(f, text, '"')?,
            CExpression::CharLiteral(text) => write_quoted(f, text, '\'')?,
            CExpression::BoolLiteral(b) => write!(f, "{}", b)?,
            CExpression::BinaryOp {
                operator,
                left,
                right,
            } => {
                let symbol = operators::symbol(operator);
                let (left_min, right_min) = if operators::is_right_associative(symbol) {
                    (precedence + 1, precedence)
                } else {
                    (precedence, precedence + 1)
                };
                left.write_with(f, left_min)?;
                if symbol == "," {
                    f.write_str(", ")?;
                } else {
                    write!(f, " {} ", symbol)?;
                }
                right.write_with(f, right_min)?;
            }
            CExpression::UnaryOp {
                operator,
                operand,
                postfix,
            } => {
                let symbol = operators::symbol(operator);
                if *postfix {
                    operand.write_with(f, precedence)?;
                    f.write_str(symbol)?;
                } else {
                    f.write_str(symbol)?;
                    // `-(-x)` must not print as `--x`.
                    let merges = match (symbol.chars().last(), operand.leading_char()) {
                        (Some(last), Some(first)) => last == first && matches!(last, '-' | '+' | '&'),
                        _ => false,
                    };
                    if merges {
                        write!(f, "({})", operand)?;
                    } else {
                        operand.write_with(f, precedence)?;
                    }
                }
            }
            CExpression::Call { callee, arguments } => {
                callee.write_with(f, POSTFIX_PRECEDENCE)?;
                f.write_str("(")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    // Arguments sit above the comma operator.
                    argument.write_with(f, 2)?;
                }
                f.write_str(")")?;
            }
            CExpression::ArrayAccess { array, index } => {
                array.write_with(f, POSTFIX_PRECEDENCE)?;
                write!(f, "[{}]", index)?;
            }
            CExpression::MemberAccess {
                object,
                member,
                arrow,
            } => {
                object.write_with(f, POSTFIX_PRECEDENCE)?;
                f.write_str(if *arrow { "->" } else { "." })?;
                f.write_str(member)?;
            }
            CExpression::Ternary {
                condition,
                when_true,
                when_false,
            } => {
                condition.write_with(f, TERNARY_PRECEDENCE + 1)?;
                f.write_str(" ? ")?;
                when_true.write_with(f, TERNARY_PRECEDENCE)?;
                f.write_str(" : ")?;
                when_false.write_with(f, TERNARY_PRECEDENCE)?;
            }
            CExpression::Cast {
                target_type,
                operand,
            } => {
                write!(f, "({})", target_type)?;
                operand.write_with(f, UNARY_PRECEDENCE)?;
            }
            CExpression::Sizeof(operand) => write!(f, "sizeof({})", operand)?,
            CExpression::Unknown => {}
        }

        if needs_parens {
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl fmt::Display for CExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, 0)
    }
}

/// Renders an expression node straight from JSON. Absent or unknown input yields `""`.
pub fn stringify(value: &Value) -> String {
    CExpression::from_json(value).to_string()
}

fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str, quote: char) -> fmt::Result {
    let already_quoted =
        text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote);
    if already_quoted {
        return f.write_str(text);
    }
    write!(f, "{}", quote)?;
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                f.write_char(c)?;
                if let Some(escaped) = chars.next() {
                    f.write_char(escaped)?;
                }
            }
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => write!(f, "\\{}", c)?,
            c => write!(f, "{}", c)?,
        }
    }
    write!(f, "{}", quote)
}
