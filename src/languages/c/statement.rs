use super::expression::CExpression;
use super::operators;
use crate::languages::json::{bool_field, field, str_field, type_tag};
use itertools::Itertools;
use serde_json::Value;

/// A C/C++ statement node.
#[derive(Debug, Clone, PartialEq)]
pub enum CStatement {
    VarDecl {
        var_type: String,
        name: String,
        array_size: Option<CExpression>,
        initializer: Option<CExpression>,
    },
    Assign {
        target: CExpression,
        operator: String,
        value: CExpression,
    },
    If {
        condition: CExpression,
        then_branch: Vec<CStatement>,
        else_branch: Option<Vec<CStatement>>,
    },
    While {
        condition: CExpression,
        body: Vec<CStatement>,
    },
    For {
        init: Option<Box<CStatement>>,
        condition: CExpression,
        update: Option<Box<CStatement>>,
        body: Vec<CStatement>,
    },
    DoWhile {
        body: Vec<CStatement>,
        condition: CExpression,
    },
    Switch {
        selector: CExpression,
        cases: Vec<CCase>,
    },
    Function(CFunction),
    Expr(CExpression),
    Return(Option<CExpression>),
    Break,
    Continue,
    Preprocessor(String),
    Struct {
        name: String,
        members: Vec<CParam>,
    },
    Typedef {
        original: String,
        alias: String,
    },
    Block(Vec<CStatement>),
    /// A statement kind this reader does not know; carries its type tag.
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CCase {
    /// `None` for the `default` arm.
    pub value: Option<CExpression>,
    pub body: Vec<CStatement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CFunction {
    pub return_type: String,
    pub name: String,
    pub params: Vec<CParam>,
    /// `None` for a prototype.
    pub body: Option<Vec<CStatement>>,
}

/// A typed name: a function parameter or a struct member.
#[derive(Debug, Clone, PartialEq)]
pub struct CParam {
    pub param_type: String,
    pub name: String,
}

impl CParam {
    fn from_json(value: &Value) -> Self {
        Self {
            param_type: str_field(value, &["paramType", "memberType", "varType", "type"])
                .unwrap_or_default()
                .to_string(),
            name: str_field(value, &["name"]).unwrap_or_default().to_string(),
        }
    }

    pub fn text(&self) -> String {
        format!("{} {}", self.param_type, self.name).trim().to_string()
    }
}

impl CStatement {
    pub fn from_json(value: &Value) -> Self {
        let expr = |keys: &[&str]| CExpression::from_opt(field(value, keys));
        let text = |keys: &[&str]| str_field(value, keys).unwrap_or_default().to_string();

        let tag = type_tag(value);
        match tag {
            "VarDeclStmt" | "VarDecl" => CStatement::VarDecl {
                var_type: text(&["varType", "dataType"]),
                name: text(&["name"]),
                array_size: field(value, &["arraySize"]).map(CExpression::from_json),
                initializer: field(value, &["initializer", "init", "value"]).map(CExpression::from_json),
            },
            "AssignStmt" => CStatement::Assign {
                target: expr(&["target", "left"]),
                operator: str_field(value, &["operator", "op"]).unwrap_or("ASSIGN").to_string(),
                value: expr(&["value", "right"]),
            },
            "IfStmt" => CStatement::If {
                condition: expr(&["condition"]),
                then_branch: read_body(field(value, &["thenBranch", "then", "body"])),
                else_branch: field(value, &["elseBranch", "else"]).map(|b| read_body(Some(b))),
            },
            "WhileStmt" => CStatement::While {
                condition: expr(&["condition"]),
                body: read_body(field(value, &["body"])),
            },
            "ForStmt" => CStatement::For {
                init: field(value, &["init", "initializer"]).map(|v| Box::new(Self::from_clause(v))),
                condition: expr(&["condition", "test"]),
                update: field(value, &["update", "increment"]).map(|v| Box::new(Self::from_clause(v))),
                body: read_body(field(value, &["body"])),
            },
            "DoWhileStmt" => CStatement::DoWhile {
                body: read_body(field(value, &["body"])),
                condition: expr(&["condition"]),
            },
            "SwitchStmt" => CStatement::Switch {
                selector: expr(&["expression", "discriminant", "condition"]),
                cases: field(value, &["cases"])
                    .and_then(Value::as_array)
                    .map(|cases| cases.iter().map(CCase::from_json).collect())
                    .unwrap_or_default(),
            },
            "FunctionDecl" => CStatement::Function(CFunction {
                return_type: text(&["returnType"]),
                name: text(&["name"]),
                params: field(value, &["params", "parameters"])
                    .and_then(Value::as_array)
                    .map(|params| params.iter().map(CParam::from_json).collect())
                    .unwrap_or_default(),
                body: field(value, &["body"]).map(|b| read_body(Some(b))),
            }),
            "ExprStmt" => CStatement::Expr(expr(&["expression", "expr"])),
            "ReturnStmt" => CStatement::Return(field(value, &["value", "expression"]).map(CExpression::from_json)),
            "BreakStmt" => CStatement::Break,
            "ContinueStmt" => CStatement::Continue,
            "PreprocessorDirective" => CStatement::Preprocessor(text(&["directive", "text", "value"])),
            "StructDecl" => CStatement::Struct {
                name: text(&["name"]),
                members: field(value, &["members", "fields"])
                    .and_then(Value::as_array)
                    .map(|members| members.iter().map(CParam::from_json).collect())
                    .unwrap_or_default(),
            },
            "TypedefDecl" => CStatement::Typedef {
                original: text(&["originalType", "baseType"]),
                alias: text(&["alias", "name", "newType"]),
            },
            "Block" | "CompoundStmt" => CStatement::Block(read_statements(field(value, &["statements", "body"]))),
            other => CStatement::Unknown(other.to_string()),
        }
    }

    /// A `for` header clause: a statement node, or an expression wrapped as one.
    fn from_clause(value: &Value) -> Self {
        if type_tag(value).ends_with("Stmt") {
            Self::from_json(value)
        } else {
            CStatement::Expr(CExpression::from_json(value))
        }
    }

    /// Single-line source text without the trailing semicolon, as used for labels.
    pub fn text(&self) -> String {
        match self {
            CStatement::VarDecl {
                var_type,
                name,
                array_size,
                initializer,
            } => {
                let mut out = format!("{} {}", var_type, name).trim().to_string();
                if let Some(size) = array_size {
                    out.push_str(&format!("[{}]", size));
                }
                if let Some(init) = initializer.as_ref().filter(|i| !i.is_unknown()) {
                    out.push_str(&format!(" = {}", init));
                }
                out
            }
            CStatement::Assign {
                target,
                operator,
                value,
            } => format!("{} {} {}", target, operators::symbol(operator), value),
            CStatement::If { condition, .. } => format!("if ({})", condition),
            CStatement::While { condition, .. } => format!("while ({})", condition),
            CStatement::For {
                init,
                condition,
                update,
                ..
            } => format!("for ({})", for_header(init.as_deref(), condition, update.as_deref())),
            CStatement::DoWhile { condition, .. } => format!("do ... while ({})", condition),
            CStatement::Switch { selector, .. } => format!("switch ({})", selector),
            CStatement::Function(function) => function.signature(),
            CStatement::Expr(expression) => expression.to_string(),
            CStatement::Return(Some(value)) if !value.is_unknown() => format!("return {}", value),
            CStatement::Return(_) => "return".to_string(),
            CStatement::Break => "break".to_string(),
            CStatement::Continue => "continue".to_string(),
            CStatement::Preprocessor(directive) => directive.trim().to_string(),
            CStatement::Struct { name, .. } => format!("struct {}", name).trim().to_string(),
            CStatement::Typedef { original, alias } => format!("typedef {} {}", original, alias),
            CStatement::Block(_) => "{ ... }".to_string(),
            CStatement::Unknown(tag) => tag.clone(),
        }
    }
}

impl CCase {
    fn from_json(value: &Value) -> Self {
        let is_default = bool_field(value, &["isDefault", "default"]).unwrap_or(false)
            || type_tag(value) == "DefaultClause";
        let value_node = field(value, &["value", "test"]);
        Self {
            value: if is_default { None } else { value_node.map(CExpression::from_json) },
            body: read_statements(field(value, &["statements", "body", "consequent"])),
        }
    }

    pub fn label(&self) -> String {
        self.value
            .as_ref()
            .map_or_else(|| "default".to_string(), |value| value.to_string())
    }
}

impl CFunction {
    pub fn signature(&self) -> String {
        let params = self.params.iter().map(CParam::text).join(", ");
        format!("{} {}({})", self.return_type, self.name, params)
            .trim()
            .to_string()
    }
}

/// The `init; condition; update` text of a `for` header.
pub fn for_header(init: Option<&CStatement>, condition: &CExpression, update: Option<&CStatement>) -> String {
    let clause = |s: Option<&CStatement>| s.map(CStatement::text).unwrap_or_default();
    format!("{}; {}; {}", clause(init), condition, clause(update))
}

/// A body that may be a `Block`, a single statement, a bare array, or absent.
/// Anything else reads as an empty block.
pub fn read_body(value: Option<&Value>) -> Vec<CStatement> {
    match value {
        Some(Value::Array(_)) => read_statements(value),
        Some(v @ Value::Object(_)) => match CStatement::from_json(v) {
            CStatement::Block(statements) => statements,
            CStatement::Unknown(tag) if tag.is_empty() => Vec::new(),
            single => vec![single],
        },
        _ => Vec::new(),
    }
}

/// A statement list given as an array, or as a `Block` node wrapping one.
pub fn read_statements(value: Option<&Value>) -> Vec<CStatement> {
    match value {
        Some(Value::Array(items)) => items.iter().map(CStatement::from_json).collect(),
        Some(v @ Value::Object(_)) => read_body(Some(v)),
        _ => Vec::new(),
    }
}
