//! Singleton container host
//!
//! A host is a `static` slot carrying exactly one container for the lifetime
//! of the process. Attaching a second container is rejected: a host that
//! could hold several independent containers is not a singleton namespace.

use std::sync::OnceLock;

use containable_domain::error::{Error, Result};
use tracing::debug;

use super::facade::Container;

/// Static slot a container is attached to once
///
/// ```
/// use containable_infrastructure::container::{Container, ContainerHost};
///
/// static APP: ContainerHost = ContainerHost::new("app");
///
/// let container = APP.attach(Container::new())?;
/// container.register("port", 8080_u16)?;
///
/// assert!(APP.attach(Container::new()).is_err());
/// # Ok::<(), containable_domain::Error>(())
/// ```
#[derive(Debug)]
pub struct ContainerHost {
    name: &'static str,
    slot: OnceLock<Container>,
}

impl ContainerHost {
    /// Create an empty host
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            slot: OnceLock::new(),
        }
    }

    /// Host name used in diagnostics
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Attach `container`, returning the attached reference
    ///
    /// # Errors
    /// `InvalidHost` when a container is already attached.
    pub fn attach(&'static self, container: Container) -> Result<&'static Container> {
        self.slot.set(container).map_err(|_| {
            Error::invalid_host(format!(
                "host `{}` already carries a container; only one can be attached",
                self.name
            ))
        })?;
        debug!(host = self.name, "Attached container");

        self.slot
            .get()
            .ok_or_else(|| Error::internal(format!("host `{}` lost its container", self.name)))
    }

    /// The attached container, if any
    pub fn get(&self) -> Option<&Container> {
        self.slot.get()
    }

    /// Whether a container has been attached
    pub fn is_attached(&self) -> bool {
        self.slot.get().is_some()
    }
}
