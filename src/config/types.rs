//! Config types for tripdeck.
//!
//! Defines structures for parsing and representing configuration files.

use crate::theme::Theme;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Field names of [`RawConfig`], for typo suggestions in parse errors.
pub const KNOWN_FIELDS: &[&str] = &["catalog", "latency_ms", "theme"];

/// Raw config file structure (used for parsing).
///
/// This struct directly mirrors the YAML config file structure.
/// Unknown fields are rejected with an error.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    /// Path to a YAML catalog file replacing the built-in dataset
    /// (may contain tilde).
    pub catalog: Option<PathBuf>,
    /// Artificial search latency in milliseconds. Cosmetic; defaults to 0
    /// so everything runs synchronously.
    #[serde(default)]
    pub latency_ms: Option<u64>,
    /// Theme name (`dark` or `light`).
    #[serde(default)]
    pub theme: Option<String>,
}

/// Validated configuration with paths expanded and the theme resolved.
#[derive(Debug, Default)]
pub struct Config {
    /// Expanded catalog path, if the built-in dataset is overridden.
    pub catalog_path: Option<PathBuf>,
    /// Artificial search latency.
    pub latency: Duration,
    /// Resolved theme.
    pub theme: Theme,
}

impl Config {
    #[cfg(test)]
    pub fn has_catalog_override(&self) -> bool {
        self.catalog_path.is_some()
    }
}
