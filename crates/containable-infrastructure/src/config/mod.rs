//! Configuration management
//!
//! Container options and logging settings, loaded through Figment from
//! defaults, an optional TOML file and `CONTAINABLE__*` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{ContainerConfig, LoggingConfig};
