//! Configuration: file discovery, parsing and validation.

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{discover, load, load_catalog, DiscoveryResult};
pub use types::Config;
