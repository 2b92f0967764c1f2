//! # Containable
//!
//! In-process dependency registration and resolution: register constants,
//! lazily evaluated closures or factories under hierarchical keys, then
//! resolve them on demand with cached or always-fresh semantics.
//!
//! ## Features
//!
//! - **Namespaces**: nested blocks compose dotted keys (`db.pool.size`)
//! - **Deferred providers**: evaluated on first resolution, cached or fresh per entry
//! - **Freezing**: a one-way switch making the registry immutable
//! - **Stubs**: transient overrides for tests with atomic restore
//! - **Thread safety**: register and resolve from any thread
//!
//! ## Example
//!
//! ```
//! use containable::prelude::*;
//!
//! let container = Container::new();
//!
//! container.register("name", "demo")?;
//! container.register_with("request_id", || 7_u64, Directive::Fresh)?;
//! container.namespace("db", |db| {
//!     db.namespace("pool", |pool| pool.register_fn("size", || 4_usize))
//! })?;
//!
//! assert_eq!(*container.resolve_as::<usize>("db.pool.size")?, 4);
//!
//! container.stub_value(Key::symbol("name"), "stubbed")?;
//! assert_eq!(*container.resolve_as::<&str>("name")?, "stubbed");
//! container.restore()?;
//! assert_eq!(*container.resolve_as::<&str>("name")?, "demo");
//! # Ok::<(), containable::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Keys, providers, directives, errors and the resolver port
//! - `infrastructure` - The container engine, configuration and logging

/// Domain layer - keys, providers and error types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use containable_domain::*;
}

/// Infrastructure layer - container engine, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use containable_infrastructure::*;
}

/// Commonly used types in one import
pub mod prelude {
    pub use containable_domain::{
        DependencyResolver, Directive, Error, Key, Provider, Result, Value, value,
    };
    pub use containable_infrastructure::container::{
        Container, ContainerBuilder, ContainerHost, Register, Registration,
    };
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the container entry points at the crate root
pub use infrastructure::container::{Container, ContainerBuilder, ContainerHost, Registration};
pub use infrastructure::{ConfigLoader, ContainerConfig};
