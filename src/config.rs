//! Generator configuration.
//!
//! Every field has a default, so a config file only needs to name what it changes:
//!
//! ```json
//! { "labelMaxChars": 40, "io": { "extraOutput": ["display"] } }
//! ```

use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Labels longer than this are elided with `...`.
    pub label_max_chars: usize,
    pub layout: LayoutConfig,
    pub io: IoConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            label_max_chars: 50,
            layout: LayoutConfig::default(),
            io: IoConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("Could not read '{}': {}", path, e)))?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Default geometry and the naive top-to-bottom layout hint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub center_x: f64,
    pub origin_y: f64,
    pub terminal_width: f64,
    pub terminal_height: f64,
    pub process_min_width: f64,
    pub process_max_width: f64,
    pub process_height: f64,
    pub decision_min_width: f64,
    pub decision_max_width: f64,
    pub decision_height: f64,
    /// Width contributed by each label character.
    pub char_width: f64,
    pub terminal_step: f64,
    pub process_step: f64,
    pub decision_step: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            center_x: 400.0,
            origin_y: 50.0,
            terminal_width: 120.0,
            terminal_height: 50.0,
            process_min_width: 140.0,
            process_max_width: 360.0,
            process_height: 60.0,
            decision_min_width: 180.0,
            decision_max_width: 420.0,
            decision_height: 100.0,
            char_width: 8.0,
            terminal_step: 90.0,
            process_step: 100.0,
            decision_step: 150.0,
        }
    }
}

/// Additional callee names recognised as input or output operations.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IoConfig {
    pub extra_input: Vec<String>,
    pub extra_output: Vec<String>,
}
