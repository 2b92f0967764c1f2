//! Error handling types

use thiserror::Error;

use crate::value_objects::{Directive, Key};

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the container
#[derive(Error, Debug)]
pub enum Error {
    /// A dependency was registered twice under the same fully-qualified key
    #[error("Dependency is already registered: {key}.")]
    DuplicateKey {
        /// The key as the caller supplied it (before namespacing)
        key: Key,
    },

    /// The registration directive is not one the register accepts
    #[error("Invalid directive: :{directive}. Use {allowed}.")]
    InvalidDirective {
        /// The rejected directive name
        directive: String,
        /// Human readable list of accepted directives (`:cache or :fresh`)
        allowed: String,
    },

    /// A mutation was attempted after the container was frozen
    #[error("Can't modify frozen container.")]
    FrozenRegistry,

    /// No dependency is registered under the requested key
    #[error("Unable to resolve dependency: {key}.")]
    UnknownKey {
        /// The key in the form the caller looked it up with
        key: Key,
    },

    /// A stub was requested for a key that was never registered
    #[error("Unable to stub unknown key: {key}.")]
    UnknownStubKey {
        /// The key in the form the caller supplied it
        key: Key,
    },

    /// A container was attached to a host that cannot carry one
    #[error("Invalid host: {message}")]
    InvalidHost {
        /// Why the host was rejected
        message: String,
    },

    /// A resolved dependency is not of the type the caller asked for
    #[error("Dependency {key} is not a {expected}.")]
    TypeMismatch {
        /// The key that was resolved
        key: Key,
        /// Name of the requested type
        expected: &'static str,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Registration errors
impl Error {
    /// Create a duplicate key error
    pub fn duplicate_key(key: impl Into<Key>) -> Self {
        Self::DuplicateKey { key: key.into() }
    }

    /// Create an invalid directive error listing the accepted directives
    pub fn invalid_directive<S: Into<String>>(directive: S, allowed: &[Directive]) -> Self {
        Self::InvalidDirective {
            directive: directive.into(),
            allowed: Directive::describe(allowed),
        }
    }

    /// Create a frozen registry error
    pub fn frozen() -> Self {
        Self::FrozenRegistry
    }
}

// Resolution errors
impl Error {
    /// Create an unknown key error
    pub fn unknown_key(key: impl Into<Key>) -> Self {
        Self::UnknownKey { key: key.into() }
    }

    /// Create an unknown stub key error
    pub fn unknown_stub_key(key: impl Into<Key>) -> Self {
        Self::UnknownStubKey { key: key.into() }
    }

    /// Create a type mismatch error
    pub fn type_mismatch<T: ?Sized>(key: impl Into<Key>) -> Self {
        Self::TypeMismatch {
            key: key.into(),
            expected: std::any::type_name::<T>(),
        }
    }
}

// Host, configuration and internal errors
impl Error {
    /// Create an invalid host error
    pub fn invalid_host<S: Into<String>>(message: S) -> Self {
        Self::InvalidHost {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn config_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl Error {
    /// True for the "key absent" family (`UnknownKey`, `UnknownStubKey`)
    ///
    /// Callers treating a missing dependency as optional can branch on this
    /// instead of matching both variants.
    pub fn is_missing_key(&self) -> bool {
        matches!(self, Self::UnknownKey { .. } | Self::UnknownStubKey { .. })
    }
}
