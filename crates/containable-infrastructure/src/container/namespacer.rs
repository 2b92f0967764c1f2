//! Namespace composition
//!
//! A [`Namespacer`] is an immutable path of open namespace segments. Opening
//! a namespace yields a child path; the parent is never touched, so blocks on
//! different threads cannot see each other's segments.

use std::sync::Arc;

use containable_domain::constants::DEFAULT_KEY_SEPARATOR;

/// Composes nested namespaces into dotted keys
#[derive(Debug, Clone)]
pub struct Namespacer {
    separator: Arc<str>,
    segments: Vec<String>,
}

impl Namespacer {
    /// Create a root namespacer joining segments with `separator`
    pub fn new<S: AsRef<str>>(separator: S) -> Self {
        Self {
            separator: Arc::from(separator.as_ref()),
            segments: Vec::new(),
        }
    }

    /// Separator between segments
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Path with `name` appended as the innermost segment
    #[must_use]
    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        Self {
            separator: Arc::clone(&self.separator),
            segments,
        }
    }

    /// Fully-qualified form of `key` under this path
    pub fn compose(&self, key: &str) -> String {
        if self.segments.is_empty() {
            return key.to_string();
        }
        let mut composed = self.segments.join(&self.separator);
        composed.push_str(&self.separator);
        composed.push_str(key);
        composed
    }

    /// Number of open namespaces
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl Default for Namespacer {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_SEPARATOR)
    }
}
