//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the zushiki crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use zushiki::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let document = std::fs::read_to_string("path/to/ast.json")?;
//! let config = GeneratorConfig::from_file("path/to/config.json")?;
//!
//! let generator = Generator::builder(Language::C).with_config(config).build();
//! let chart = generator.generate_str(&document)?;
//!
//! println!("{}", chart.to_json()?);
//! # Ok(())
//! # }
//! ```

// Entry point
pub use crate::generator::{Generator, GeneratorBuilder, Language};

// Output graph
pub use crate::flowchart::{Connection, ExitPoint, Flowchart, FlowchartNode, NodeId, NodeKind, Port};

// Canonical program model
pub use crate::program::{
    ActionKind, Block, Branch, FunctionDecl, IntoProgram, ProgramDefinition, Section, Statement,
};

// Configuration
pub use crate::config::{GeneratorConfig, IoConfig, LayoutConfig};

// Error types
pub use crate::error::{ConfigError, FlowchartError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
