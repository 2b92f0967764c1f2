use std::fmt;

use crate::constants::SYMBOL_KEY_PREFIX;

/// Key used to register, resolve or stub a dependency.
///
/// Both forms normalize to the same string, so `Key::symbol("logger")` and
/// `Key::from("logger")` address the same entry. The form only matters for
/// display: error messages echo the key the way the caller wrote it.
///
/// ```
/// use containable_domain::Key;
///
/// assert_eq!(Key::symbol("test").to_string(), ":test");
/// assert_eq!(Key::from("test").to_string(), "\"test\"");
/// assert_eq!(Key::symbol("test").as_str(), Key::from("test").as_str());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Identifier-like key, displayed as `:name`
    Symbol(String),
    /// String key, displayed quoted as `"name"`
    Str(String),
}

impl Key {
    /// Create a symbol-form key
    pub fn symbol<S: Into<String>>(name: S) -> Self {
        Self::Symbol(name.into())
    }

    /// Create a string-form key
    pub fn string<S: Into<String>>(name: S) -> Self {
        Self::Str(name.into())
    }

    /// Normalized form used for storage and lookup
    pub fn as_str(&self) -> &str {
        match self {
            Self::Symbol(name) | Self::Str(name) => name,
        }
    }

    /// Whether this key was written in symbol form
    pub fn is_symbol(&self) -> bool {
        matches!(self, Self::Symbol(_))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(name) => write!(f, "{SYMBOL_KEY_PREFIX}{name}"),
            Self::Str(name) => write!(f, "{name:?}"),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::Str(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self::Str(name)
    }
}

impl From<&String> for Key {
    fn from(name: &String) -> Self {
        Self::Str(name.clone())
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
