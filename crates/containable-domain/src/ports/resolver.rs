use std::any::Any;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::value_objects::{Key, Value};

/// Looks up dependencies by key
pub trait DependencyResolver: Send + Sync {
    /// Resolve the dependency registered under `key`
    ///
    /// # Errors
    /// `Error::UnknownKey` when nothing is registered under the key.
    fn resolve(&self, key: &Key) -> Result<Value>;

    /// Resolve and downcast to `T`
    ///
    /// # Errors
    /// `Error::TypeMismatch` when the dependency is not a `T`, plus any error
    /// from [`DependencyResolver::resolve`].
    fn resolve_as<T>(&self, key: &Key) -> Result<Arc<T>>
    where
        Self: Sized,
        T: Any + Send + Sync,
    {
        self.resolve(key)?
            .downcast::<T>()
            .map_err(|_| Error::type_mismatch::<T>(key))
    }
}
