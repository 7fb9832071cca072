// File: src/config.rs
// Purpose: Router configuration parsing from TOML

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Router configuration
///
/// ```toml
/// routes = ["/home", "/user/:id", "/settings/*"]
/// initial_route = "/home"
/// debug_separator = " -> "
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Patterns registered at construction, in order
    #[serde(default)]
    pub routes: Vec<String>,

    /// Input pushed once after registration
    #[serde(default)]
    pub initial_route: Option<String>,

    /// Separator used by the history trace
    #[serde(default = "default_debug_separator")]
    pub debug_separator: String,
}

fn default_debug_separator() -> String {
    " -> ".to_string()
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            routes: Vec::new(),
            initial_route: None,
            debug_separator: default_debug_separator(),
        }
    }
}

impl RouterConfig {
    /// Load configuration from a TOML file
    ///
    /// A missing or blank file yields the default configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read router config: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse router config: {:?}", path))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: RouterConfig = toml::from_str(content)?;
        Ok(config)
    }
}
