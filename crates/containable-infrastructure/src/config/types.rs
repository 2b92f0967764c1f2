//! Configuration types

use std::path::PathBuf;

use containable_domain::constants::DEFAULT_KEY_SEPARATOR;
use containable_domain::error::{Error, Result};
use containable_domain::value_objects::Directive;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOG_LEVEL;
use crate::container::RegisterOptions;

/// Container configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// Separator joining namespace segments into keys
    pub separator: String,

    /// Directive names registrations may use (`cache`, `fresh`)
    pub directives: Vec<String>,

    /// Directive applied when a registration names none
    pub default_directive: String,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_KEY_SEPARATOR.to_string(),
            directives: Directive::ALL
                .iter()
                .map(|directive| directive.as_str().to_string())
                .collect(),
            default_directive: Directive::default().as_str().to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ContainerConfig {
    /// Parsed directive list
    pub fn parsed_directives(&self) -> Result<Vec<Directive>> {
        self.directives.iter().map(|name| name.parse()).collect()
    }

    /// Register options described by this configuration
    ///
    /// # Errors
    /// `InvalidDirective` for unknown directive names or a default directive
    /// outside the allowed list.
    pub fn register_options(&self) -> Result<RegisterOptions> {
        let directives = self.parsed_directives()?;
        let default_directive: Directive = self.default_directive.parse()?;

        if !directives.contains(&default_directive) {
            return Err(Error::invalid_directive(
                default_directive.as_str(),
                &directives,
            ));
        }

        Ok(RegisterOptions {
            separator: self.separator.clone(),
            directives,
            default_directive,
        })
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to file in addition to stdout
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}
