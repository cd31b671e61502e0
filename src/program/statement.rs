//! The canonical, language-neutral program model.
//!
//! Language adapters lower their raw documents into these types. Every label and
//! code reference is already rendered text at this point; the processor never looks
//! at the source language again.

use crate::flowchart::NodeKind;

pub type Block = Vec<Statement>;

/// A single statement, classified by the control-flow shape it produces.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Anything that becomes one straight-line node: declarations, assignments,
    /// expressions, jumps, directives and I/O calls.
    Action {
        kind: ActionKind,
        label: String,
        code: String,
    },
    If {
        condition: Option<String>,
        code: String,
        then_block: Block,
        else_block: Option<Block>,
    },
    /// A pre-test loop (`while`, `for`).
    Loop {
        condition: Option<String>,
        code: String,
        body: Block,
    },
    /// A post-test loop (`repeat ... until`, `do ... while`).
    PostTestLoop {
        condition: Option<String>,
        code: String,
        body: Block,
    },
    Switch {
        selector: Option<String>,
        code: String,
        branches: Vec<Branch>,
    },
    Function(FunctionDecl),
    /// A nested compound statement, processed inline.
    Block(Block),
    /// An unrecognized statement kind. Contributes no node.
    Skip,
}

impl Statement {
    /// A process node whose label and code reference are the same text.
    pub fn process(text: impl Into<String>) -> Self {
        Self::action(ActionKind::Process, text)
    }

    pub fn action(kind: ActionKind, text: impl Into<String>) -> Self {
        let text = text.into();
        Statement::Action {
            kind,
            label: text.clone(),
            code: text,
        }
    }

    /// Short name for logging.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Statement::Action { kind, .. } => match kind {
                ActionKind::Process => "process",
                ActionKind::Input => "input",
                ActionKind::Output => "output",
            },
            Statement::If { .. } => "if",
            Statement::Loop { .. } => "loop",
            Statement::PostTestLoop { .. } => "post-test loop",
            Statement::Switch { .. } => "switch",
            Statement::Function(_) => "function",
            Statement::Block(_) => "block",
            Statement::Skip => "skip",
        }
    }
}

/// The node kind a straight-line statement is drawn as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Process,
    Input,
    Output,
}

impl From<ActionKind> for NodeKind {
    fn from(kind: ActionKind) -> Self {
        match kind {
            ActionKind::Process => NodeKind::Process,
            ActionKind::Input => NodeKind::Input,
            ActionKind::Output => NodeKind::Output,
        }
    }
}

/// One arm of a multi-way dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    /// The case value text, or `"default"`/`"else"` for the fallback arm.
    pub label: String,
    pub body: Block,
}

/// A function or procedure declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: String,
    pub label: String,
    pub code: String,
    /// Reconstructed source of the whole declaration.
    pub full_body: Option<String>,
    /// `None` marks a prototype / forward declaration.
    pub body: Option<Block>,
    /// When set, the body's exit points replace the function node as the
    /// statement's exits, so whatever follows continues after the body.
    pub threads_body: bool,
}

impl FunctionDecl {
    pub fn is_main(&self) -> bool {
        self.name == "main"
    }
}

/// A named, ordered run of statements chained into the next section.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub name: String,
    pub block: Block,
}

impl Section {
    pub fn new(name: impl Into<String>, block: Block) -> Self {
        Self {
            name: name.into(),
            block,
        }
    }
}

/// The complete lowered program, ready for flowchart assembly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgramDefinition {
    pub name: String,
    /// Code reference attached to the implicit start node.
    pub start_code: String,
    pub sections: Vec<Section>,
}
