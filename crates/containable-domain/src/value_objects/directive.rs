use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Evaluation policy for a registered entry
///
/// Only meaningful for deferred providers: literal and opaque values are
/// returned as stored either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Directive {
    /// Evaluate once, then keep the result in place of the provider
    #[default]
    Cache,
    /// Evaluate on every resolution, never persisting the result
    Fresh,
}

impl Directive {
    /// Every directive the engine understands, in canonical order
    pub const ALL: [Directive; 2] = [Directive::Cache, Directive::Fresh];

    /// Lowercase name used in configuration and messages
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cache => "cache",
            Self::Fresh => "fresh",
        }
    }

    /// Describe a set of directives the way error messages list them
    ///
    /// `[Cache, Fresh]` becomes `:cache or :fresh`.
    pub fn describe(directives: &[Directive]) -> String {
        directives
            .iter()
            .map(|directive| format!(":{}", directive.as_str()))
            .collect::<Vec<_>>()
            .join(" or ")
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Directive {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim_start_matches(':') {
            "cache" => Ok(Self::Cache),
            "fresh" => Ok(Self::Fresh),
            other => Err(Error::invalid_directive(other, &Self::ALL)),
        }
    }
}
