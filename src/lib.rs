//! # Zushiki - Program-to-Flowchart Generator
//!
//! **Zushiki** turns a structured program representation into a flowchart: a directed
//! graph of start, end, process, decision, input and output nodes joined by labelled
//! edges that follow the program's control flow. Two input schemas are supported, both
//! delivered as JSON by an external parser:
//!
//! - **Pascal SPR** (Structured Program Representation), a sectioned tree of
//!   declarations and statements keyed `expr<N>`.
//! - **C/C++ AST**, a tree of typed statement and expression nodes.
//!
//! ## Core Workflow
//!
//! 1.  **Lower**: a language adapter reads the document and lowers it into the
//!     canonical [`program::ProgramDefinition`]. Your own formats can join in by
//!     implementing [`program::IntoProgram`].
//! 2.  **Process**: one block processor walks the canonical statements, creating nodes
//!     and threading *exit points* (pending edge sources) from each statement into
//!     the next.
//! 3.  **Assemble**: the sections are chained between an implicit `Start` and `End`
//!     node, producing a [`flowchart::Flowchart`] ready to serialize.
//!
//! ## Quick Start
//!
//! ```rust
//! use zushiki::prelude::*;
//! use serde_json::json;
//!
//! # fn main() -> Result<()> {
//! let document = json!({
//!     "program": {
//!         "name": "Counter",
//!         "sections": {
//!             "mainBlock": {
//!                 "expr1": {
//!                     "type": "while",
//!                     "condition": "i < 10",
//!                     "body": { "expr1": { "type": "assign", "value": "i := i + 1" } }
//!                 }
//!             }
//!         }
//!     }
//! });
//!
//! let generator = Generator::builder(Language::Pascal).build();
//! let chart = generator.generate(&document)?;
//!
//! // Start, the loop condition, its body, End.
//! assert_eq!(chart.nodes.len(), 4);
//! println!("{}", chart.outline());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod flowchart;
pub mod generator;
pub mod languages;
pub mod prelude;
pub mod processor;
pub mod program;

#[cfg(feature = "python-bindings")]
mod python;
