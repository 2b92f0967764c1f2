//! Domain layer constants
//!
//! Contains constants that are part of the registration and resolution
//! rules. Infrastructure-specific constants (config file names, env
//! prefixes) remain in the infrastructure crate.

// ============================================================================
// KEY COMPOSITION CONSTANTS
// ============================================================================

/// Separator joining namespace segments into a fully-qualified key
pub const DEFAULT_KEY_SEPARATOR: &str = ".";

/// Prefix used when displaying a symbol-form key (`:name`)
pub const SYMBOL_KEY_PREFIX: char = ':';

// ============================================================================
// DIAGNOSTIC MESSAGES
// ============================================================================

/// Message emitted when both a plain value and a deferred provider are registered
pub const VALUE_IGNORED_WARNING: &str =
    "Registration of value is ignored since block takes precedence.";

/// Message reported by every mutation attempted against a frozen container
pub const FROZEN_CONTAINER_MESSAGE: &str = "Can't modify frozen container.";
