use crate::config::IoConfig;
use crate::program::ActionKind;
use ahash::AHashSet;

const INPUT_OPS: &[&str] = &[
    "read", "readln", "scanf", "cin", "gets", "fgets", "getchar", "getline", "input",
];

const OUTPUT_OPS: &[&str] = &[
    "write", "writeln", "printf", "cout", "puts", "putchar", "print", "println", "cerr",
];

/// Callee names that turn a statement into an input or output node.
///
/// Matching is case-insensitive, so `Read` and `WriteLn` classify like their
/// lowercase forms.
#[derive(Debug, Clone)]
pub struct IoVocabulary {
    input: AHashSet<String>,
    output: AHashSet<String>,
}

impl Default for IoVocabulary {
    fn default() -> Self {
        Self {
            input: INPUT_OPS.iter().map(|op| op.to_string()).collect(),
            output: OUTPUT_OPS.iter().map(|op| op.to_string()).collect(),
        }
    }
}

impl IoVocabulary {
    pub fn from_config(config: &IoConfig) -> Self {
        let mut vocabulary = Self::default();
        for op in &config.extra_input {
            vocabulary.add_input(op);
        }
        for op in &config.extra_output {
            vocabulary.add_output(op);
        }
        vocabulary
    }

    pub fn add_input(&mut self, op: &str) {
        self.input.insert(op.to_lowercase());
    }

    pub fn add_output(&mut self, op: &str) {
        self.output.insert(op.to_lowercase());
    }

    /// Classifies a bare callee name, ignoring a `std::` qualifier.
    pub fn classify_name(&self, name: &str) -> Option<ActionKind> {
        let name = name.trim();
        let name = name.strip_prefix("std::").unwrap_or(name).to_lowercase();
        if self.input.contains(&name) {
            Some(ActionKind::Input)
        } else if self.output.contains(&name) {
            Some(ActionKind::Output)
        } else {
            None
        }
    }

    /// Classifies statement text by its leading identifier, e.g. `writeln(x)`,
    /// `cin >> x` or `ReadLn;`.
    pub fn classify_text(&self, text: &str) -> Option<ActionKind> {
        self.classify_name(leading_identifier(text))
    }

    /// Classifies text, falling back to `Process`.
    pub fn action_kind(&self, text: &str) -> ActionKind {
        self.classify_text(text).unwrap_or(ActionKind::Process)
    }
}

/// The identifier (including `::` qualifiers) a piece of statement text starts with.
pub fn leading_identifier(text: &str) -> &str {
    let text = text.trim_start();
    let end = text
        .char_indices()
        .find(|&(_, c)| !(c.is_alphanumeric() || c == '_' || c == ':'))
        .map_or(text.len(), |(i, _)| i);
    &text[..end]
}
