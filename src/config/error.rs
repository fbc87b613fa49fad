//! Config error types for tripdeck.
//!
//! Provides rich error messages with file locations and typo suggestions.

use std::fmt;
use std::path::PathBuf;
use strsim::jaro_winkler;

/// Minimum similarity for a "did you mean" suggestion.
const SIMILARITY_THRESHOLD: f64 = 0.8;

/// Error loading or parsing a config or catalog file.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading the file.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parse error.
    Parse {
        path: PathBuf,
        message: String,
        suggestion: Option<String>,
    },

    /// Validation error (semantic errors after parsing).
    Validation { path: PathBuf, message: String },
}

impl ConfigError {
    /// Build a parse error from a serde-saphyr failure, attaching a
    /// closest-match suggestion when the message names an unknown field.
    pub fn from_saphyr_error(
        path: PathBuf,
        error: impl fmt::Display,
        known_fields: &'static [&'static str],
    ) -> Self {
        let message = error.to_string();
        let suggestion = unknown_field_in(&message).and_then(|field| suggest(field, known_fields));
        ConfigError::Parse {
            path,
            message,
            suggestion,
        }
    }

    /// Format error in Cargo-style format.
    pub fn format_cargo_style(&self) -> String {
        match self {
            ConfigError::Io { path, source } => {
                format!(
                    "error: cannot read file\n  --> {}\n  |\n  = {}\n",
                    path.display(),
                    source
                )
            }
            ConfigError::Parse {
                path,
                message,
                suggestion,
            } => {
                let mut output = format!("error: {}\n  --> {}\n  |\n", message, path.display());
                if let Some(suggestion) = suggestion {
                    output.push_str(&format!("  = help: did you mean `{}`?\n", suggestion));
                }
                output
            }
            ConfigError::Validation { path, message } => {
                format!("error: {}\n  --> {}\n  |\n", message, path.display())
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_cargo_style())
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Extract the field name out of serde's `unknown field \`x\`` message.
fn unknown_field_in(message: &str) -> Option<&str> {
    let rest = message.split("unknown field `").nth(1)?;
    rest.split('`').next()
}

/// Closest known field by Jaro-Winkler similarity, if any is close enough.
fn suggest(field: &str, known_fields: &'static [&'static str]) -> Option<String> {
    known_fields
        .iter()
        .filter(|&&known| jaro_winkler(field, known) >= SIMILARITY_THRESHOLD)
        .max_by(|a, b| {
            jaro_winkler(field, a)
                .partial_cmp(&jaro_winkler(field, b))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[&str] = &["catalog", "latency_ms", "theme"];

    #[test]
    fn test_unknown_field_extraction() {
        assert_eq!(
            unknown_field_in("unknown field `catalogg`, expected one of ..."),
            Some("catalogg")
        );
        assert_eq!(unknown_field_in("something else entirely"), None);
    }

    #[test]
    fn test_suggestion_for_typo() {
        assert_eq!(suggest("catalogg", FIELDS), Some("catalog".to_string()));
        assert_eq!(suggest("latencyms", FIELDS), Some("latency_ms".to_string()));
    }

    #[test]
    fn test_no_suggestion_for_distant_name() {
        assert_eq!(suggest("hovercraft", FIELDS), None);
    }

    #[test]
    fn test_cargo_style_parse_format() {
        let err = ConfigError::Parse {
            path: PathBuf::from("/tmp/tripdeck.yaml"),
            message: "unknown field `them`".into(),
            suggestion: Some("theme".into()),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("error: unknown field `them`"));
        assert!(rendered.contains("--> /tmp/tripdeck.yaml"));
        assert!(rendered.contains("did you mean `theme`?"));
    }

    #[test]
    fn test_validation_format() {
        let err = ConfigError::Validation {
            path: PathBuf::from("cfg.yaml"),
            message: "unknown theme: 'drak'".into(),
        };
        assert!(err.to_string().contains("unknown theme"));
    }
}
