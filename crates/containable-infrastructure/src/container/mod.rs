//! Dependency Container
//!
//! ## Architecture
//!
//! ```text
//! Container
//! ├── Register ── Namespacer      (key composition)
//! │      │
//! │      ▼
//! │    Store  ◄── Resolver        (evaluate / memoize)
//! │      ▲            ▲
//! └── OverrideLayer ──┘           (stubs, snapshot/restore)
//! ```
//!
//! Every component receives the same [`Store`] explicitly; there is no
//! process-wide registry. [`ContainerHost`] offers a `static` slot for
//! applications that want one container per process.

pub mod builder;
pub mod facade;
pub mod host;
pub mod namespacer;
pub mod override_layer;
pub mod register;
pub mod resolver;
pub mod store;

pub use builder::ContainerBuilder;
pub use facade::Container;
pub use host::ContainerHost;
pub use namespacer::Namespacer;
pub use override_layer::OverrideLayer;
pub use register::{Register, RegisterOptions, Registration};
pub use resolver::Resolver;
pub use store::{Entries, InsertOutcome, Store};
