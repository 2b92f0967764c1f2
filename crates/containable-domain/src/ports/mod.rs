//! Domain Port Interfaces
//!
//! Contracts implemented by the infrastructure layer. The plain resolver and
//! the override layer both satisfy [`DependencyResolver`], which lets the
//! override layer wrap whichever resolver the container was built with.

/// Resolution port
pub mod resolver;

pub use resolver::DependencyResolver;
