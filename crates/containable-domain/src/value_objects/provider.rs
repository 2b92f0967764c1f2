use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::Directive;

/// Type-erased dependency value
///
/// Values are shared, so resolving a cached entry twice hands out the same
/// allocation (`Arc::ptr_eq` holds) while fresh entries hand out new ones.
pub type Value = Arc<dyn Any + Send + Sync>;

/// Wrap any value as a [`Value`]
pub fn value<T: Any + Send + Sync>(inner: T) -> Value {
    Arc::new(inner)
}

/// Zero-argument computation stored in place of a value
#[derive(Clone)]
pub struct Deferred(Arc<dyn Fn() -> Value + Send + Sync>);

impl Deferred {
    /// Wrap a closure producing a concrete type
    pub fn new<F, T>(factory: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
        T: Any + Send + Sync,
    {
        Self(Arc::new(move || -> Value { Arc::new(factory()) }))
    }

    /// Wrap a closure that already produces a type-erased value
    pub fn from_value_fn<F>(factory: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(factory))
    }

    /// Run the computation
    pub fn call(&self) -> Value {
        (self.0)()
    }

    /// Whether two handles refer to the same stored computation
    pub fn ptr_eq(&self, other: &Deferred) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Deferred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Deferred(..)")
    }
}

/// What is stored under a key
///
/// The variant is chosen by the caller at registration time; the resolver
/// never inspects a value to guess whether it should be invoked.
#[derive(Clone)]
pub enum Provider {
    /// Plain value, returned as-is
    Literal(Value),
    /// Zero-argument computation evaluated on resolution
    Deferred(Deferred),
    /// Value the engine must never invoke, such as a callable that needs arguments
    Opaque(Value),
}

impl Provider {
    /// Literal provider from any value
    pub fn literal<T: Any + Send + Sync>(inner: T) -> Self {
        Self::Literal(Arc::new(inner))
    }

    /// Deferred provider from a closure
    pub fn deferred<F, T>(factory: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
        T: Any + Send + Sync,
    {
        Self::Deferred(Deferred::new(factory))
    }

    /// Opaque provider from any value
    pub fn opaque<T: Any + Send + Sync>(inner: T) -> Self {
        Self::Opaque(Arc::new(inner))
    }

    /// Whether this provider still has to be evaluated
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }

    /// Stored value for literal and opaque providers
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Literal(inner) | Self::Opaque(inner) => Some(inner),
            Self::Deferred(_) => None,
        }
    }

    /// Borrow the stored value as `T`, if it is one
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_value().and_then(|inner| inner.downcast_ref::<T>())
    }
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(_) => f.write_str("Literal(..)"),
            Self::Deferred(deferred) => deferred.fmt(f),
            Self::Opaque(_) => f.write_str("Opaque(..)"),
        }
    }
}

/// A provider paired with its evaluation directive
#[derive(Debug, Clone)]
pub struct Entry {
    /// What resolution returns or evaluates
    pub provider: Provider,
    /// Whether an evaluated deferred provider is persisted
    pub directive: Directive,
}

impl Entry {
    /// Create a new entry
    pub fn new(provider: Provider, directive: Directive) -> Self {
        Self {
            provider,
            directive,
        }
    }
}
