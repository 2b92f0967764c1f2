//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Registration rules live in `containable_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "containable.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "containable";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "CONTAINABLE";

/// Separator between nested keys in environment variables (`CONTAINABLE__LOGGING__LEVEL`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable that overrides the configured log filter
pub const LOG_FILTER_ENV: &str = "CONTAINABLE_LOG";

/// File name prefix for rolling log files
pub const LOG_FILE_PREFIX: &str = "containable";
