//! Subcommand implementations.

pub mod config;
pub mod explore;
pub mod search;
pub mod show;
