//! Config validate and show commands for tripdeck.
//!
//! Provides config introspection and validation for scripting and
//! developer debugging.

use crate::config;
use colored::Colorize;

/// Validate the effective config file.
///
/// Follows Unix conventions:
/// - Exit 0 with no output on success (quiet success)
/// - Exit 1 with error message to stderr on failure
///
/// Validates YAML syntax, known field names (typo detection), the theme
/// name, and that a configured catalog file parses.
pub fn validate() -> Result<(), i32> {
    let discovery = config::discover();
    if discovery.effective().is_none() {
        eprintln!("error: No config found to validate");
        return Err(1);
    }

    let cfg = config::load(&discovery).map_err(|e| {
        eprintln!("{}", e);
        1
    })?;

    config::load_catalog(&cfg).map_err(|e| {
        eprintln!("{}", e);
        1
    })?;

    Ok(())
}

/// Show the effective configuration.
///
/// Displays which config file is being used, the catalog source, the
/// artificial latency and the theme. When no config exists, shows the
/// defaults message. Respects NO_COLOR via the colored crate.
pub fn show() -> Result<(), i32> {
    let discovery = config::discover();

    let Some(path) = discovery.effective() else {
        println!("{}", "No config found. Using defaults.".dimmed());
        println!();
        println!("  catalog: {}", "built-in demo dataset".cyan());
        println!("  latency: {}", "0ms".cyan());
        println!("  theme:   {}", "dark".cyan());
        return Ok(());
    };

    let path = path.to_path_buf();
    let cfg = config::load(&discovery).map_err(|e| {
        eprintln!("{}", e);
        1
    })?;

    println!("Using: {}", path.display().to_string().dimmed());
    println!();
    match &cfg.catalog_path {
        Some(catalog) => println!("  catalog: {}", catalog.display().to_string().cyan()),
        None => println!("  catalog: {}", "built-in demo dataset".cyan()),
    }
    println!("  latency: {}", format!("{}ms", cfg.latency.as_millis()).cyan());
    println!("  theme:   {}", cfg.theme.name.cyan());

    Ok(())
}
