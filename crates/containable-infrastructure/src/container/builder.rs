//! Container builder

use containable_domain::error::Result;
use containable_domain::value_objects::Directive;

use super::facade::Container;
use super::register::RegisterOptions;
use super::store::Store;
use crate::config::ContainerConfig;

/// Builder for [`Container`]
///
/// ```
/// use containable_domain::Directive;
/// use containable_infrastructure::container::ContainerBuilder;
///
/// let container = ContainerBuilder::new()
///     .separator("::")
///     .default_directive(Directive::Fresh)
///     .build();
///
/// container.namespace("app", |app| app.register("name", "demo"))?;
/// assert!(container.contains_key("app::name")?);
/// # Ok::<(), containable_domain::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContainerBuilder {
    options: RegisterOptions,
}

impl ContainerBuilder {
    /// Create a builder with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder seeded from loaded configuration
    ///
    /// # Errors
    /// `InvalidDirective` if the configuration names an unknown directive.
    pub fn from_config(config: &ContainerConfig) -> Result<Self> {
        Ok(Self {
            options: config.register_options()?,
        })
    }

    /// Separator joining namespace segments
    #[must_use]
    pub fn separator<S: Into<String>>(mut self, separator: S) -> Self {
        self.options.separator = separator.into();
        self
    }

    /// Directives registrations may use
    #[must_use]
    pub fn directives<I: IntoIterator<Item = Directive>>(mut self, directives: I) -> Self {
        self.options.directives = directives.into_iter().collect();
        self
    }

    /// Directive applied when a registration names none
    #[must_use]
    pub fn default_directive(mut self, directive: Directive) -> Self {
        self.options.default_directive = directive;
        self
    }

    /// Build an empty container
    pub fn build(self) -> Container {
        Container::with_options(Store::new(), self.options)
    }
}
