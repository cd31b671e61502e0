//! C/C++ AST adapter.
//!
//! Reads `{ "type": "Program", "body": { "type": "Block", "statements": [...] } }`
//! and lowers the top-level declarations, in source order, into a single section.
//! Only `main` threads its body into the rest of the chart; other function bodies
//! hang off their declaration node.

pub mod expression;
pub mod operators;
pub mod source;
pub mod statement;

pub use expression::{CExpression, stringify};
pub use statement::{CCase, CFunction, CParam, CStatement};

use statement::for_header;

use crate::error::FlowchartError;
use crate::languages::io::IoVocabulary;
use crate::languages::json::{field, type_tag};
use crate::program::{
    ActionKind, Block, Branch, FunctionDecl, IntoProgram, ProgramDefinition, Section, Statement,
};
use serde_json::Value;
use tracing::{debug, warn};

/// A borrowed C/C++ AST document, ready to be lowered.
pub struct CDocument<'a> {
    root: &'a Value,
    vocabulary: &'a IoVocabulary,
}

impl<'a> CDocument<'a> {
    pub fn new(root: &'a Value, vocabulary: &'a IoVocabulary) -> Self {
        Self { root, vocabulary }
    }

    /// The top-level statement list, or `None` when the root is not a `Program`
    /// wrapping a `Block`.
    fn top_level(&self) -> Option<&'a Vec<Value>> {
        if type_tag(self.root) != "Program" {
            return None;
        }
        let body = field(self.root, &["body"])?;
        if !matches!(type_tag(body), "Block" | "") {
            return None;
        }
        field(body, &["statements"])?.as_array()
    }
}

impl IntoProgram for CDocument<'_> {
    fn into_program(self) -> Result<ProgramDefinition, FlowchartError> {
        let statements = self.top_level().ok_or(FlowchartError::MissingProgramBody)?;
        debug!(statements = statements.len(), "lowering C/C++ top-level declarations");

        let parsed: Vec<CStatement> = statements.iter().map(CStatement::from_json).collect();
        let lowering = Lowering {
            vocabulary: self.vocabulary,
        };
        let block = lowering.lower_all(&parsed);

        Ok(ProgramDefinition {
            name: "program".to_string(),
            start_code: String::new(),
            sections: vec![Section::new("top-level", block)],
        })
    }
}

struct Lowering<'a> {
    vocabulary: &'a IoVocabulary,
}

impl Lowering<'_> {
    fn lower_all(&self, statements: &[CStatement]) -> Block {
        statements.iter().map(|s| self.lower(s)).collect()
    }

    fn lower(&self, statement: &CStatement) -> Statement {
        match statement {
            CStatement::If {
                condition,
                then_branch,
                else_branch,
            } => Statement::If {
                condition: condition_text(condition),
                code: statement.text(),
                then_block: self.lower_all(then_branch),
                else_block: else_branch.as_deref().map(|b| self.lower_all(b)),
            },
            CStatement::While { condition, body } => Statement::Loop {
                condition: condition_text(condition),
                code: statement.text(),
                body: self.lower_all(body),
            },
            CStatement::For {
                init,
                condition,
                update,
                body,
            } => {
                let label = if init.is_none() && update.is_none() {
                    condition_text(condition)
                } else {
                    Some(for_header(init.as_deref(), condition, update.as_deref()))
                };
                Statement::Loop {
                    condition: label,
                    code: statement.text(),
                    body: self.lower_all(body),
                }
            }
            CStatement::DoWhile { body, condition } => Statement::PostTestLoop {
                condition: condition_text(condition),
                code: statement.text(),
                body: self.lower_all(body),
            },
            CStatement::Switch { selector, cases } => Statement::Switch {
                selector: condition_text(selector),
                code: statement.text(),
                branches: cases
                    .iter()
                    .map(|case| Branch {
                        label: case.label(),
                        body: self.lower_all(&case.body),
                    })
                    .collect(),
            },
            CStatement::Function(function) => Statement::Function(FunctionDecl {
                name: function.name.clone(),
                label: function.signature(),
                code: function.signature(),
                full_body: Some(source::function_source(function)),
                body: function.body.as_deref().map(|b| self.lower_all(b)),
                threads_body: function.name == "main",
            }),
            CStatement::Block(statements) => Statement::Block(self.lower_all(statements)),
            CStatement::Unknown(tag) => {
                warn!(kind = %tag, "unrecognized C/C++ statement kind");
                Statement::Skip
            }
            CStatement::Expr(expression) => self.action(statement, self.io_kind(expression)),
            CStatement::Assign { value, .. } => self.action(statement, self.io_kind(value)),
            CStatement::VarDecl { initializer, .. } => {
                self.action(statement, initializer.as_ref().and_then(|i| self.io_kind(i)))
            }
            CStatement::Return(_)
            | CStatement::Break
            | CStatement::Continue
            | CStatement::Preprocessor(_)
            | CStatement::Struct { .. }
            | CStatement::Typedef { .. } => self.action(statement, None),
        }
    }

    fn action(&self, statement: &CStatement, io: Option<ActionKind>) -> Statement {
        Statement::Action {
            kind: io.unwrap_or(ActionKind::Process),
            label: statement.text(),
            code: source::statement_source(statement),
        }
    }

    /// Input/output detection: a call to a vocabulary function, a stream chain
    /// rooted at `cin`/`cout`, or an assignment whose value is either.
    fn io_kind(&self, expression: &CExpression) -> Option<ActionKind> {
        match expression {
            CExpression::Call { callee, .. } => self.vocabulary.classify_name(&callee.to_string()),
            CExpression::BinaryOp {
                operator, right, ..
            } => match operators::symbol(operator) {
                "<<" | ">>" => match expression.leftmost() {
                    CExpression::Identifier(name) => self.vocabulary.classify_name(name),
                    _ => None,
                },
                symbol if operators::is_right_associative(symbol) => self.io_kind(right),
                _ => None,
            },
            _ => None,
        }
    }
}

fn condition_text(expression: &CExpression) -> Option<String> {
    if expression.is_unknown() {
        None
    } else {
        Some(expression.to_string())
    }
}
