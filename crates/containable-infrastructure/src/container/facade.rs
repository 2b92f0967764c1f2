//! Container facade
//!
//! Ties one [`Store`] to its [`Register`], [`Resolver`] and [`OverrideLayer`]
//! and exposes the public registration/resolution surface.

use std::any::Any;
use std::sync::Arc;

use containable_domain::error::Result;
use containable_domain::ports::DependencyResolver;
use containable_domain::value_objects::{Directive, Key, Provider, Value};
use tracing::debug;

use super::builder::ContainerBuilder;
use super::override_layer::OverrideLayer;
use super::register::{Register, RegisterOptions, Registration};
use super::resolver::Resolver;
use super::store::Store;

/// Dependency container
///
/// Intended to be constructed once per use-site and shared (or attached to a
/// [`ContainerHost`](super::host::ContainerHost)), not rebuilt per call.
///
/// ```
/// use containable_infrastructure::container::Container;
///
/// let container = Container::new();
/// container.namespace("db", |db| {
///     db.register("url", "postgres://localhost".to_string())?;
///     db.register_fn("pool_size", || 4_usize)
/// })?;
///
/// let size = container.resolve_as::<usize>("db.pool_size")?;
/// assert_eq!(*size, 4);
/// # Ok::<(), containable_domain::Error>(())
/// ```
#[derive(Debug)]
pub struct Container {
    store: Store,
    register: Register,
    resolver: OverrideLayer<Resolver>,
}

impl Container {
    /// Create an empty container with default options
    pub fn new() -> Self {
        Self::with_options(Store::new(), RegisterOptions::default())
    }

    /// Start configuring a container
    pub fn builder() -> ContainerBuilder {
        ContainerBuilder::new()
    }

    /// Create a container around an existing store
    pub fn with_options(store: Store, options: RegisterOptions) -> Self {
        Self {
            register: Register::with_options(store.clone(), options),
            resolver: OverrideLayer::new(store.clone(), Resolver::new(store.clone())),
            store,
        }
    }

    // ------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------

    /// Validate and insert a registration
    pub fn register_entry(&self, registration: Registration) -> Result<()> {
        self.register.call(registration)
    }

    /// Register a plain value
    pub fn register<T: Any + Send + Sync>(&self, key: impl Into<Key>, value: T) -> Result<()> {
        self.register.register(key, value)
    }

    /// Register a deferred computation with the default directive
    pub fn register_fn<F, T>(&self, key: impl Into<Key>, factory: F) -> Result<()>
    where
        F: Fn() -> T + Send + Sync + 'static,
        T: Any + Send + Sync,
    {
        self.register.register_fn(key, factory)
    }

    /// Register a deferred computation with an explicit directive
    pub fn register_with<F, T>(
        &self,
        key: impl Into<Key>,
        factory: F,
        directive: Directive,
    ) -> Result<()>
    where
        F: Fn() -> T + Send + Sync + 'static,
        T: Any + Send + Sync,
    {
        self.register.register_with(key, factory, directive)
    }

    /// Register a value resolution hands back uninvoked
    pub fn register_opaque<T: Any + Send + Sync>(
        &self,
        key: impl Into<Key>,
        value: T,
    ) -> Result<()> {
        self.register.register_opaque(key, value)
    }

    /// Register dependencies under the `name` namespace
    pub fn namespace<F>(&self, name: impl Into<Key>, block: F) -> Result<()>
    where
        F: FnOnce(&Register) -> Result<()>,
    {
        self.register.namespace(name, block)
    }

    // ------------------------------------------------------------------
    // Resolution
    // ------------------------------------------------------------------

    /// Resolve `key`, consulting active stubs first
    ///
    /// # Errors
    /// `UnknownKey` when nothing is registered under the key.
    pub fn resolve(&self, key: impl Into<Key>) -> Result<Value> {
        self.resolver.resolve(&key.into())
    }

    /// Index-style alias for [`Container::resolve`]
    pub fn get(&self, key: impl Into<Key>) -> Result<Value> {
        self.resolve(key)
    }

    /// Resolve `key` and downcast it to `T`
    ///
    /// # Errors
    /// `TypeMismatch` when the dependency is not a `T`.
    pub fn resolve_as<T: Any + Send + Sync>(&self, key: impl Into<Key>) -> Result<Arc<T>> {
        self.resolver.resolve_as(&key.into())
    }

    // ------------------------------------------------------------------
    // Enumeration
    // ------------------------------------------------------------------

    /// Visit every key with its provider, unevaluated deferreds included
    ///
    /// Iterates a snapshot, so `visit` may register or resolve freely.
    pub fn each<F>(&self, mut visit: F) -> Result<()>
    where
        F: FnMut(&str, &Provider),
    {
        for (key, entry) in self.store.entries()? {
            visit(&key, &entry.provider);
        }
        Ok(())
    }

    /// Visit every key in insertion order
    pub fn each_key<F>(&self, mut visit: F) -> Result<()>
    where
        F: FnMut(&str),
    {
        for key in self.store.keys()? {
            visit(&key);
        }
        Ok(())
    }

    /// Key/provider pairs in insertion order
    pub fn entries(&self) -> Result<Vec<(String, Provider)>> {
        Ok(self
            .store
            .entries()?
            .into_iter()
            .map(|(key, entry)| (key, entry.provider))
            .collect())
    }

    /// Keys in insertion order
    pub fn keys(&self) -> Result<Vec<String>> {
        self.store.keys()
    }

    /// Whether a dependency is registered under `key`
    pub fn contains_key(&self, key: impl Into<Key>) -> Result<bool> {
        self.store.contains_key(key.into().as_str())
    }

    /// Number of registered dependencies
    pub fn len(&self) -> Result<usize> {
        self.store.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> Result<bool> {
        self.store.is_empty()
    }

    // ------------------------------------------------------------------
    // Freezing and copying
    // ------------------------------------------------------------------

    /// Make the container permanently immutable
    pub fn freeze(&self) -> Result<&Self> {
        self.store.freeze()?;
        debug!("Container frozen");
        Ok(self)
    }

    /// Whether the container has been frozen
    pub fn is_frozen(&self) -> bool {
        self.store.is_frozen()
    }

    /// Independent copy that stays frozen if this container is frozen
    ///
    /// Unresolved deferred providers stay unresolved in the copy. Stubs are
    /// not carried over.
    pub fn try_clone(&self) -> Result<Self> {
        self.copy(true)
    }

    /// Independent copy that is always unfrozen, ready for further registration
    pub fn duplicate(&self) -> Result<Self> {
        self.copy(false)
    }

    fn copy(&self, keep_frozen: bool) -> Result<Self> {
        let store = self.store.deep_copy(keep_frozen)?;
        Ok(Self::with_options(store, self.register.options().clone()))
    }

    // ------------------------------------------------------------------
    // Stubbing
    // ------------------------------------------------------------------

    /// Substitute values for registered keys until [`Container::restore`]
    pub fn stub<I, K>(&self, overrides: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<Key>,
    {
        self.resolver.stub(overrides)
    }

    /// Substitute a single value
    pub fn stub_value<T: Any + Send + Sync>(&self, key: impl Into<Key>, value: T) -> Result<()> {
        let value: Value = Arc::new(value);
        self.resolver.stub([(key.into(), value)])
    }

    /// Drop every stub and restore the pre-stub registry
    pub fn restore(&self) -> Result<()> {
        self.resolver.restore()
    }

    /// Whether any stub is active
    pub fn is_stubbed(&self) -> Result<bool> {
        self.resolver.is_stubbed()
    }

    /// Options this container registers with
    pub fn options(&self) -> &RegisterOptions {
        self.register.options()
    }
}

impl DependencyResolver for Container {
    fn resolve(&self, key: &Key) -> Result<Value> {
        DependencyResolver::resolve(&self.resolver, key)
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}
