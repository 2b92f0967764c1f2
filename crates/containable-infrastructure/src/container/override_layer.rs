//! Stub/restore overlay
//!
//! Shadows the store during resolution with substituted values. The first
//! stub snapshots the store; restore drops every override and puts that
//! snapshot back, so repeated stub/restore cycles always land on the same
//! baseline. Meant for tests.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use containable_domain::error::{Error, Result};
use containable_domain::ports::DependencyResolver;
use containable_domain::value_objects::{Key, Value};
use tracing::debug;

use super::store::{Entries, Store};
use crate::locks::{lock_rwlock_read, lock_rwlock_write};

#[derive(Default)]
struct OverrideState {
    originals: Option<Entries>,
    overrides: HashMap<String, Value>,
}

/// Resolution overlay wrapping another resolver
///
/// Lock order is overlay state first, then the store.
pub struct OverrideLayer<R> {
    store: Store,
    resolver: R,
    state: RwLock<OverrideState>,
}

impl<R: DependencyResolver> OverrideLayer<R> {
    /// Wrap `resolver`, snapshotting from `store` when stubbing starts
    pub fn new(store: Store, resolver: R) -> Self {
        Self {
            store,
            resolver,
            state: RwLock::new(OverrideState::default()),
        }
    }

    /// The wrapped resolver
    pub fn inner(&self) -> &R {
        &self.resolver
    }

    /// Substitute values for registered keys
    ///
    /// Every key is checked before any override is installed, so a batch with
    /// one unknown key changes nothing.
    ///
    /// # Errors
    /// `UnknownStubKey` if a key is not registered.
    pub fn stub<I, K>(&self, overrides: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<Key>,
    {
        let mut state = lock_rwlock_write(&self.state, "OverrideLayer::stub")?;

        if state.originals.is_none() {
            state.originals = Some(self.store.snapshot()?);
            debug!("Captured registry snapshot for stubbing");
        }

        let mut pending = Vec::new();
        for (key, value) in overrides {
            let key = key.into();
            if !self.store.contains_key(key.as_str())? {
                return Err(Error::unknown_stub_key(key));
            }
            pending.push((key.as_str().to_string(), value));
        }

        for (key, value) in pending {
            debug!(key = %key, "Stubbed dependency");
            state.overrides.insert(key, value);
        }
        Ok(())
    }

    /// Drop every override and return the store to its pre-stub snapshot
    ///
    /// Always succeeds for an un-stubbed container. A frozen store keeps its
    /// entries; only the overrides are cleared. The store is rewritten while
    /// the overlay lock is held and before any override is dropped, so a
    /// failed rewrite leaves the stubs in place.
    pub fn restore(&self) -> Result<()> {
        let mut state = lock_rwlock_write(&self.state, "OverrideLayer::restore")?;

        match &state.originals {
            Some(_) if self.store.is_frozen() => {
                debug!("Store is frozen, clearing stubs without restoring entries");
            }
            Some(originals) => {
                self.store.replace(originals.clone())?;
                debug!("Restored registry from snapshot");
            }
            None => {}
        }

        state.overrides.clear();
        Ok(())
    }

    /// Whether any override is currently installed
    pub fn is_stubbed(&self) -> Result<bool> {
        let state = lock_rwlock_read(&self.state, "OverrideLayer::is_stubbed")?;
        Ok(!state.overrides.is_empty())
    }

    fn override_for(&self, key: &Key) -> Result<Option<Value>> {
        let state = lock_rwlock_read(&self.state, "OverrideLayer::resolve")?;
        Ok(state.overrides.get(key.as_str()).map(Arc::clone))
    }
}

impl<R: DependencyResolver> DependencyResolver for OverrideLayer<R> {
    fn resolve(&self, key: &Key) -> Result<Value> {
        match self.override_for(key)? {
            Some(value) => Ok(value),
            None => self.resolver.resolve(key),
        }
    }
}

impl<R> std::fmt::Debug for OverrideLayer<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverrideLayer")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}
