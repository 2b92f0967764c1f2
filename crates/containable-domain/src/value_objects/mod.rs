//! Domain Value Objects
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Key`] | Dependency key in symbol (`:name`) or string (`"name"`) form |
//! | [`Directive`] | Whether an evaluated deferred provider is cached or recomputed |
//! | [`Provider`] | What is stored under a key: literal, deferred or opaque |
//! | [`Entry`] | A provider paired with its directive |

/// Directive value object
pub mod directive;
/// Key value object
pub mod key;
/// Provider, entry and type-erased value definitions
pub mod provider;

pub use directive::Directive;
pub use key::Key;
pub use provider::{Deferred, Entry, Provider, Value, value};
