use crate::config::GeneratorConfig;
use crate::generator::{Generator, Language};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

/// Generates a flowchart from a program document.
///
/// Args:
///     document_json (str): The Pascal SPR or C/C++ AST document as a JSON string.
///     language (str): One of "pascal", "c" or "cpp".
///     config_json (str | None): Optional generator configuration as a JSON string.
///
/// Returns:
///     str: The flowchart as JSON, `{"nodes": [...], "connections": [...]}`.
///
/// Raises:
///     ValueError: If the language is unknown, the JSON is malformed, or the
///         document has no usable program root.
#[pyfunction]
#[pyo3(signature = (document_json, language, config_json=None))]
fn generate(document_json: &str, language: &str, config_json: Option<&str>) -> PyResult<String> {
    let language: Language = language
        .parse()
        .map_err(|e: crate::error::FlowchartError| PyValueError::new_err(e.to_string()))?;

    let mut builder = Generator::builder(language);
    if let Some(json) = config_json {
        let config =
            GeneratorConfig::from_json(json).map_err(|e| PyValueError::new_err(e.to_string()))?;
        builder = builder.with_config(config);
    }

    let chart = builder
        .build()
        .generate_str(document_json)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    chart
        .to_json()
        .map_err(|e| PyRuntimeError::new_err(e.to_string()))
}

/// Program-to-flowchart generation.
///
/// This module provides Python bindings to the Zushiki Rust library, turning
/// Pascal SPR and C/C++ AST documents into flowchart graphs.
#[pymodule]
fn zushiki(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(generate, m)?)?;
    Ok(())
}
