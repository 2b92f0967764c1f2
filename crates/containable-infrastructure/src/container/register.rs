//! Dependency registration
//!
//! Validates registrations and writes them into the [`Store`]. A register
//! opened by a namespace block carries that block's [`Namespacer`] path and
//! composes every key under it.

use std::any::Any;

use containable_domain::constants::{DEFAULT_KEY_SEPARATOR, VALUE_IGNORED_WARNING};
use containable_domain::error::{Error, Result};
use containable_domain::value_objects::{Deferred, Directive, Entry, Key, Provider};
use tracing::{debug, warn};

use super::namespacer::Namespacer;
use super::store::{InsertOutcome, Store};

/// Options shaping how a [`Register`] composes keys and which directives it accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterOptions {
    /// Separator joining namespace segments
    pub separator: String,
    /// Directives registrations may use
    pub directives: Vec<Directive>,
    /// Directive applied when a registration names none
    pub default_directive: Directive,
}

impl Default for RegisterOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_KEY_SEPARATOR.to_string(),
            directives: Directive::ALL.to_vec(),
            default_directive: Directive::default(),
        }
    }
}

/// A single registration request
///
/// Carries at most one plain value and at most one deferred provider. When
/// both are set the provider takes precedence and a warning is logged.
#[derive(Debug, Clone)]
pub struct Registration {
    key: Key,
    value: Option<Provider>,
    provider: Option<Deferred>,
    directive: Option<Directive>,
}

impl Registration {
    /// Start a registration for `key`
    pub fn new(key: impl Into<Key>) -> Self {
        Self {
            key: key.into(),
            value: None,
            provider: None,
            directive: None,
        }
    }

    /// Register a plain value
    #[must_use]
    pub fn value<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.value = Some(Provider::literal(value));
        self
    }

    /// Register a value the engine must never invoke
    #[must_use]
    pub fn opaque<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.value = Some(Provider::opaque(value));
        self
    }

    /// Register a zero-argument computation evaluated on resolution
    #[must_use]
    pub fn provider<F, T>(mut self, factory: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
        T: Any + Send + Sync,
    {
        self.provider = Some(Deferred::new(factory));
        self
    }

    /// Register an already-built deferred computation
    #[must_use]
    pub fn deferred(mut self, deferred: Deferred) -> Self {
        self.provider = Some(deferred);
        self
    }

    /// Evaluation directive for this entry
    #[must_use]
    pub fn directive(mut self, directive: Directive) -> Self {
        self.directive = Some(directive);
        self
    }

    /// The key as supplied by the caller
    pub fn key(&self) -> &Key {
        &self.key
    }
}

/// Registers dependencies for future resolution
#[derive(Debug, Clone)]
pub struct Register {
    store: Store,
    namespacer: Namespacer,
    options: RegisterOptions,
}

impl Register {
    /// Create a register with default options
    pub fn new(store: Store) -> Self {
        Self::with_options(store, RegisterOptions::default())
    }

    /// Create a register with explicit options
    pub fn with_options(store: Store, options: RegisterOptions) -> Self {
        Self {
            store,
            namespacer: Namespacer::new(&options.separator),
            options,
        }
    }

    /// Options this register was built with
    pub fn options(&self) -> &RegisterOptions {
        &self.options
    }

    /// Validate and insert a registration
    ///
    /// # Errors
    /// `FrozenRegistry` if the store is frozen, `DuplicateKey` if the
    /// namespaced key is taken, `InvalidDirective` if the directive is not
    /// accepted. Checked in that order.
    pub fn call(&self, registration: Registration) -> Result<()> {
        let Registration {
            key,
            value,
            provider,
            directive,
        } = registration;

        if value.is_some() && provider.is_some() {
            warn!(key = %key, "{}", VALUE_IGNORED_WARNING);
        }

        let namespaced_key = self.namespacer.compose(key.as_str());
        let directive = directive.unwrap_or(self.options.default_directive);

        if self.store.is_frozen() {
            return Err(Error::frozen());
        }
        self.check_duplicate(&key, &namespaced_key)?;
        self.check_directive(directive)?;

        let provider = provider
            .map(Provider::Deferred)
            .or(value)
            .unwrap_or_else(|| Provider::literal(()));

        match self
            .store
            .try_insert(namespaced_key.clone(), Entry::new(provider, directive))?
        {
            InsertOutcome::Inserted => {
                debug!(key = %namespaced_key, directive = %directive, "Registered dependency");
                Ok(())
            }
            InsertOutcome::Duplicate => Err(Error::duplicate_key(key)),
            InsertOutcome::Frozen => Err(Error::frozen()),
        }
    }

    /// Register a plain value under `key` with the default directive
    pub fn register<T: Any + Send + Sync>(&self, key: impl Into<Key>, value: T) -> Result<()> {
        self.call(Registration::new(key).value(value))
    }

    /// Register a deferred computation under `key` with the default directive
    pub fn register_fn<F, T>(&self, key: impl Into<Key>, factory: F) -> Result<()>
    where
        F: Fn() -> T + Send + Sync + 'static,
        T: Any + Send + Sync,
    {
        self.call(Registration::new(key).provider(factory))
    }

    /// Register a deferred computation under `key` with an explicit directive
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
        self.call(Registration::new(key).provider(factory).directive(directive))
    }

    /// Register a value that resolution hands back uninvoked
    pub fn register_opaque<T: Any + Send + Sync>(
        &self,
        key: impl Into<Key>,
        value: T,
    ) -> Result<()> {
        self.call(Registration::new(key).opaque(value))
    }

    /// Run `block` with `name` opened as a namespace
    ///
    /// `block` receives a register scoped to `name` (and any enclosing
    /// namespaces). The scope ends with the block, whether it returns an
    /// error or unwinds; `self` keeps composing keys as before.
    pub fn namespace<F>(&self, name: impl Into<Key>, block: F) -> Result<()>
    where
        F: FnOnce(&Register) -> Result<()>,
    {
        let name = name.into();
        let scoped = Self {
            store: self.store.clone(),
            namespacer: self.namespacer.child(name.as_str()),
            options: self.options.clone(),
        };
        block(&scoped)
    }

    /// Namespace path keys are composed under
    pub fn namespacer(&self) -> &Namespacer {
        &self.namespacer
    }

    fn check_duplicate(&self, key: &Key, namespaced_key: &str) -> Result<()> {
        if self.store.contains_key(namespaced_key)? {
            return Err(Error::duplicate_key(key));
        }
        Ok(())
    }

    fn check_directive(&self, directive: Directive) -> Result<()> {
        if self.options.directives.contains(&directive) {
            return Ok(());
        }
        Err(Error::invalid_directive(
            directive.as_str(),
            &self.options.directives,
        ))
    }
}
