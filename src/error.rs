use thiserror::Error;

/// Errors that can occur while turning a program document into a flowchart.
///
/// Missing optional fields and unrecognized statement kinds are never errors; they
/// degrade to placeholders or no-ops. Only a document with no usable root fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowchartError {
    #[error("Failed to parse program JSON: {0}")]
    JsonParseError(String),

    #[error("Pascal document has no 'program.sections' object")]
    MissingSections,

    #[error("C/C++ document has no 'Program' root with a 'Block' body")]
    MissingProgramBody,

    #[error("Unsupported language '{0}', expected one of: pascal, c, cpp")]
    UnsupportedLanguage(String),
}

/// Errors that can occur while loading a `GeneratorConfig`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Io(String),

    #[error("Failed to parse config JSON: {0}")]
    Parse(String),
}
