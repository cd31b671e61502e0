use super::ProgramDefinition;
use crate::error::FlowchartError;

/// A trait for language-specific documents that can be lowered into the canonical
/// `ProgramDefinition` the flowchart processor walks.
///
/// Each language adapter implements this on its document wrapper. The adapter
/// decides what every raw statement is, what text labels it, and which nested
/// blocks it owns; the processor then applies the same wiring rules to all of them.
///
/// # Example
///
/// ```rust
/// use zushiki::prelude::{
///     FlowchartError, Generator, IntoProgram, Language, ProgramDefinition, Section, Statement,
/// };
///
/// struct Script(Vec<&'static str>);
///
/// impl IntoProgram for Script {
///     fn into_program(self) -> Result<ProgramDefinition, FlowchartError> {
///         let block = self.0.into_iter().map(Statement::process).collect();
///         Ok(ProgramDefinition {
///             name: "script".to_string(),
///             start_code: String::new(),
///             sections: vec![Section::new("main", block)],
///         })
///     }
/// }
///
/// let chart = Generator::builder(Language::C)
///     .build()
///     .generate_program(&Script(vec!["a = 1", "b = 2"]).into_program()?);
/// assert_eq!(chart.nodes.len(), 4);
/// # Ok::<(), FlowchartError>(())
/// ```
pub trait IntoProgram {
    /// Consumes the document and converts it into the canonical program model.
    fn into_program(self) -> Result<ProgramDefinition, FlowchartError>;
}
