//! # Containable Infrastructure
//!
//! The registration/resolution engine plus the cross-cutting concerns
//! around it.
//!
//! ## Module Categories
//!
//! ### Container
//! | Module | Description |
//! |--------|-------------|
//! | [`container`] | Store, namespacer, register, resolver, stub overlay, host |
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration (TOML + environment) |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability & Errors
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Error context extension |
//! | [`locks`] | Poison-aware lock helpers |

pub mod config;
pub mod constants;
pub mod container;
pub mod error_ext;
pub mod locks;
pub mod logging;

// Re-export commonly used types
pub use config::{ConfigLoader, ContainerConfig, LoggingConfig};
pub use container::{Container, ContainerBuilder, ContainerHost, Registration};
pub use error_ext::ErrorContext;
