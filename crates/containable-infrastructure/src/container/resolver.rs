//! Dependency resolution

use containable_domain::error::{Error, Result};
use containable_domain::ports::DependencyResolver;
use containable_domain::value_objects::{Directive, Key, Provider, Value};
use tracing::trace;

use super::store::Store;

/// Resolves previously registered dependencies
///
/// Deferred providers are evaluated without holding the store lock, so a
/// provider may resolve other dependencies from the same store.
#[derive(Debug, Clone)]
pub struct Resolver {
    store: Store,
}

impl Resolver {
    /// Create a resolver reading from `store`
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Resolve `key`
    ///
    /// # Errors
    /// `UnknownKey` echoing the key in the form it was given.
    pub fn call(&self, key: &Key) -> Result<Value> {
        let normalized_key = key.as_str();
        let entry = self
            .store
            .get(normalized_key)?
            .ok_or_else(|| Error::unknown_key(key))?;

        match entry.provider {
            Provider::Literal(value) | Provider::Opaque(value) => Ok(value),
            Provider::Deferred(deferred) => {
                let evaluated = deferred.call();
                trace!(key = normalized_key, directive = %entry.directive, "Evaluated deferred dependency");

                match entry.directive {
                    Directive::Cache => self.store.memoize(normalized_key, &deferred, evaluated),
                    Directive::Fresh => Ok(evaluated),
                }
            }
        }
    }
}

impl DependencyResolver for Resolver {
    fn resolve(&self, key: &Key) -> Result<Value> {
        self.call(key)
    }
}
