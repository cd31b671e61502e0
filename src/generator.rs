use crate::config::{GeneratorConfig, LayoutConfig};
use crate::error::FlowchartError;
use crate::flowchart::{Flowchart, GraphBuilder};
use crate::languages::{CDocument, IoVocabulary, PascalDocument};
use crate::processor::assemble;
use crate::program::{IntoProgram, ProgramDefinition};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// The source language a document was produced from, which selects its schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Pascal SPR documents.
    Pascal,
    C,
    /// C++ shares the C AST schema.
    Cpp,
}

impl FromStr for Language {
    type Err = FlowchartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pascal" | "spr" => Ok(Language::Pascal),
            "c" => Ok(Language::C),
            "cpp" | "c++" => Ok(Language::Cpp),
            _ => Err(FlowchartError::UnsupportedLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Language::Pascal => "pascal",
            Language::C => "c",
            Language::Cpp => "cpp",
        })
    }
}

/// Turns program documents of one language into flowcharts.
///
/// A generator holds no per-build state: every call starts from a fresh
/// `GraphBuilder`, so node ids restart at `node-0` and one generator can be
/// shared across threads.
#[derive(Debug, Clone)]
pub struct Generator {
    language: Language,
    config: GeneratorConfig,
    vocabulary: IoVocabulary,
}

pub struct GeneratorBuilder {
    language: Language,
    config: GeneratorConfig,
    extra_input: Vec<String>,
    extra_output: Vec<String>,
}

impl GeneratorBuilder {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            config: GeneratorConfig::default(),
            extra_input: Vec::new(),
            extra_output: Vec::new(),
        }
    }

    /// Replaces the whole configuration. Operations added with `with_input_op`
    /// and `with_output_op` are kept.
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_label_limit(mut self, max_chars: usize) -> Self {
        self.config.label_max_chars = max_chars;
        self
    }

    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.config.layout = layout;
        self
    }

    /// Treats calls to `op` as input nodes.
    pub fn with_input_op(mut self, op: &str) -> Self {
        self.extra_input.push(op.to_string());
        self
    }

    /// Treats calls to `op` as output nodes.
    pub fn with_output_op(mut self, op: &str) -> Self {
        self.extra_output.push(op.to_string());
        self
    }

    pub fn build(self) -> Generator {
        let mut vocabulary = IoVocabulary::from_config(&self.config.io);
        for op in &self.extra_input {
            vocabulary.add_input(op);
        }
        for op in &self.extra_output {
            vocabulary.add_output(op);
        }
        Generator {
            language: self.language,
            config: self.config,
            vocabulary,
        }
    }
}

impl Generator {
    pub fn builder(language: Language) -> GeneratorBuilder {
        GeneratorBuilder::new(language)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Builds the flowchart for a parsed document.
    pub fn generate(&self, document: &Value) -> Result<Flowchart, FlowchartError> {
        let program = match self.language {
            Language::Pascal => PascalDocument::new(document, &self.vocabulary).into_program()?,
            Language::C | Language::Cpp => {
                CDocument::new(document, &self.vocabulary).into_program()?
            }
        };
        Ok(self.generate_program(&program))
    }

    /// Parses `json` and builds its flowchart.
    pub fn generate_str(&self, json: &str) -> Result<Flowchart, FlowchartError> {
        let document: Value = serde_json::from_str(json)
            .map_err(|e| FlowchartError::JsonParseError(e.to_string()))?;
        self.generate(&document)
    }

    /// Builds the flowchart for an already-lowered program.
    pub fn generate_program(&self, program: &ProgramDefinition) -> Flowchart {
        let graph = GraphBuilder::new(self.config.layout.clone(), self.config.label_max_chars);
        let chart = assemble(program, graph);
        debug!(
            language = %self.language,
            program = %program.name,
            nodes = chart.nodes.len(),
            connections = chart.connections.len(),
            "flowchart built"
        );
        chart
    }
}
