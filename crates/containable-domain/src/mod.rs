//! # Containable Domain
//!
//! Core types shared by every layer of the container: the keys callers use to
//! address dependencies, the providers stored under them, the per-entry
//! evaluation directive, and the error type every operation reports.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error kinds and the crate `Result` alias |
//! | [`value_objects`] | `Key`, `Directive`, `Provider`, `Entry`, `Value` |
//! | [`ports`] | Resolution contract implemented by the infrastructure layer |
//! | [`constants`] | Defaults shared across layers |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::DependencyResolver;
pub use value_objects::{Deferred, Directive, Entry, Key, Provider, Value, value};
