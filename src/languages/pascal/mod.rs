//! Pascal SPR (Structured Program Representation) adapter.
//!
//! An SPR document carries four sections, walked in this order: routine
//! declarations, constants, variables, and the main statement block. Each section
//! maps `expr<N>` keys to either declaration text or a typed statement object.
//!
//! SPR flattens `if`/`else` into sibling entries, so an `else` is paired with the
//! `if` immediately before it. An `else` anywhere else is dropped.

pub mod declarations;
pub mod entries;
pub mod source;

use crate::error::FlowchartError;
use crate::languages::io::IoVocabulary;
use crate::languages::json::{field, str_field};
use crate::program::{
    ActionKind, Block, Branch, FunctionDecl, IntoProgram, ProgramDefinition, Section, Statement,
};
use declarations::{is_constant_form, routine_name, statement_text};
use entries::{body_entries, compare_value_text, entry_type, ordered_entries};
use serde_json::Value;
use tracing::{debug, warn};

/// A borrowed Pascal SPR document, ready to be lowered.
pub struct PascalDocument<'a> {
    root: &'a Value,
    vocabulary: &'a IoVocabulary,
}

impl<'a> PascalDocument<'a> {
    pub fn new(root: &'a Value, vocabulary: &'a IoVocabulary) -> Self {
        Self { root, vocabulary }
    }
}

impl IntoProgram for PascalDocument<'_> {
    fn into_program(self) -> Result<ProgramDefinition, FlowchartError> {
        let program = field(self.root, &["program"]).ok_or(FlowchartError::MissingSections)?;
        let sections = field(program, &["sections"])
            .filter(|s| s.is_object())
            .ok_or(FlowchartError::MissingSections)?;
        let name = str_field(program, &["name"]).unwrap_or_default().trim().to_string();

        let lowering = Lowering {
            vocabulary: self.vocabulary,
        };
        let section = |key: &str| {
            let entries = field(sections, &[key]).map(ordered_entries).unwrap_or_default();
            debug!(section = key, entries = entries.len(), "reading SPR section");
            entries
        };

        let functions = lowering.lower_entries(&section("functionBlock"));
        let constants = lowering.lower_constants(&section("constantBlock"));
        let variables = lowering.lower_variables(&section("variableBlock"));
        let main = lowering.lower_entries(&section("mainBlock"));

        Ok(ProgramDefinition {
            start_code: if name.is_empty() {
                String::new()
            } else {
                format!("program {};", name)
            },
            name,
            sections: vec![
                Section::new("functions", functions),
                Section::new("constants", constants),
                Section::new("variables", variables),
                Section::new("main", main),
            ],
        })
    }
}

struct Lowering<'a> {
    vocabulary: &'a IoVocabulary,
}

impl Lowering<'_> {
    /// Lowers an ordered entry list, pairing each `if` with an immediately
    /// following `else`.
    fn lower_entries(&self, entries: &[&Value]) -> Block {
        let mut block = Vec::with_capacity(entries.len());
        let mut index = 0;
        while index < entries.len() {
            let entry = entries[index];
            match entry_type(entry) {
                Some("if") => {
                    let paired_else = entries
                        .get(index + 1)
                        .copied()
                        .filter(|next| entry_type(next) == Some("else"));
                    block.push(self.lower_if(entry, paired_else));
                    if paired_else.is_some() {
                        index += 1;
                    }
                }
                Some("else") => warn!("dropping 'else' with no immediately preceding 'if'"),
                _ => block.push(self.lower_entry(entry)),
            }
            index += 1;
        }
        block
    }

    fn lower_body(&self, value: Option<&Value>) -> Block {
        self.lower_entries(&body_entries(value))
    }

    fn lower_entry(&self, entry: &Value) -> Statement {
        if let Value::String(text) = entry {
            return self.simple(text, None);
        }

        let kind = entry_type(entry).unwrap_or_default();
        let condition = || str_field(entry, &["condition"]).map(statement_text).filter(|c| !c.is_empty());
        let body = || self.lower_body(field(entry, &["body"]));

        match kind {
            "assign" => self.simple(str_field(entry, &["value"]).unwrap_or_default(), None),
            "io" => self.simple(
                str_field(entry, &["value"]).unwrap_or_default(),
                Some(ActionKind::Output),
            ),
            "if" => self.lower_if(entry, None),
            "while" | "for" => {
                let condition = condition();
                Statement::Loop {
                    code: format!("{} {} do", kind, condition.unwrap_or_default()),
                    condition: condition.map(str::to_string),
                    body: body(),
                }
            }
            "until" | "repeat" => {
                let condition = condition();
                Statement::PostTestLoop {
                    code: format!("until {}", condition.unwrap_or_default()),
                    condition: condition.map(str::to_string),
                    body: body(),
                }
            }
            "caseOf" | "case" => self.lower_case(entry),
            "function" | "procedure" => self.lower_routine(entry, kind),
            other => {
                warn!(kind = other, "unrecognized SPR statement kind");
                Statement::Skip
            }
        }
    }

    /// A straight-line statement. I/O calls are detected by callee; `io_default`
    /// applies when an entry is explicitly I/O but its callee is unknown.
    fn simple(&self, text: &str, io_default: Option<ActionKind>) -> Statement {
        let label = statement_text(text);
        let kind = self
            .vocabulary
            .classify_text(label)
            .or(io_default)
            .unwrap_or(ActionKind::Process);
        Statement::Action {
            kind,
            label: label.to_string(),
            code: label.to_string(),
        }
    }

    fn lower_if(&self, entry: &Value, paired_else: Option<&Value>) -> Statement {
        let condition = str_field(entry, &["condition"])
            .map(statement_text)
            .filter(|c| !c.is_empty());
        Statement::If {
            code: format!("if {} then", condition.unwrap_or_default()),
            condition: condition.map(str::to_string),
            then_block: self.lower_body(field(entry, &["body"])),
            else_block: paired_else.map(|e| self.lower_body(field(e, &["body"]))),
        }
    }

    fn lower_case(&self, entry: &Value) -> Statement {
        let selector = str_field(entry, &["condition", "selector", "value"])
            .map(statement_text)
            .filter(|s| !s.is_empty());

        let branches = body_entries(field(entry, &["body"]))
            .into_iter()
            .filter_map(|branch| {
                if matches!(entry_type(branch), Some("else" | "default")) {
                    return Some(Branch {
                        label: "else".to_string(),
                        body: self.lower_body(field(branch, &["body"])),
                    });
                }
                let Some(compare) = field(branch, &["compareValue"]) else {
                    warn!("dropping case branch without 'compareValue'");
                    return None;
                };
                Some(Branch {
                    label: compare_value_text(compare),
                    body: self.lower_body(field(branch, &["body"])),
                })
            })
            .collect();

        Statement::Switch {
            code: format!("case {} of", selector.unwrap_or_default()),
            selector: selector.map(str::to_string),
            branches,
        }
    }

    fn lower_routine(&self, entry: &Value, keyword: &str) -> Statement {
        let declaration = str_field(entry, &["declaration"])
            .map(statement_text)
            .filter(|d| !d.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| {
                format!("{} {}", keyword, str_field(entry, &["name"]).unwrap_or_default())
                    .trim()
                    .to_string()
            });
        let body = field(entry, &["body"]).map(|b| self.lower_body(Some(b)));

        Statement::Function(FunctionDecl {
            name: routine_name(&declaration).to_string(),
            full_body: Some(source::routine_source(&declaration, body.as_deref())),
            label: declaration.clone(),
            code: declaration,
            body,
            threads_body: false,
        })
    }

    /// Keeps true constant declarations; assignments filed under constants are dropped.
    fn lower_constants(&self, entries: &[&Value]) -> Block {
        entries
            .iter()
            .filter_map(|entry| {
                let text = match entry {
                    Value::String(text) => text.as_str(),
                    _ if matches!(entry_type(entry), Some("const" | "constant")) => {
                        str_field(entry, &["value", "declaration"]).unwrap_or_default()
                    }
                    _ => return None,
                };
                let text = statement_text(text);
                if !is_constant_form(text) {
                    debug!(entry = text, "skipping non-constant entry in constant section");
                    return None;
                }
                Some(Statement::Action {
                    kind: ActionKind::Process,
                    label: text.to_string(),
                    code: format!("const {};", text),
                })
            })
            .collect()
    }

    fn lower_variables(&self, entries: &[&Value]) -> Block {
        entries
            .iter()
            .map(|entry| match entry {
                Value::String(text) => {
                    let text = statement_text(text);
                    Statement::Action {
                        kind: ActionKind::Process,
                        label: text.to_string(),
                        code: format!("var {};", text),
                    }
                }
                other => self.lower_entry(other),
            })
            .collect()
    }
}
