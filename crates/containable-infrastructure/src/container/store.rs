//! Registry store
//!
//! The one mapping every other component reads or writes. A single `RwLock`
//! guards the insertion-ordered map; the frozen flag is only flipped while
//! the write lock is held, so an insert can never slip past a freeze.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use containable_domain::error::{Error, Result};
use containable_domain::value_objects::{Deferred, Entry, Provider, Value};
use indexmap::IndexMap;

use crate::locks::{lock_rwlock_read, lock_rwlock_write};

/// Insertion-ordered entries keyed by fully-qualified key
pub type Entries = IndexMap<String, Entry>;

/// Outcome of [`Store::try_insert`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The entry was added
    Inserted,
    /// An entry already exists under the key
    Duplicate,
    /// The store is frozen
    Frozen,
}

/// Thread-safe registry store
///
/// Cloning a `Store` shares it. Use [`Store::deep_copy`] for an independent one.
#[derive(Clone, Default)]
pub struct Store {
    entries: Arc<RwLock<Entries>>,
    frozen: Arc<AtomicBool>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unfrozen store holding `entries`
    pub fn from_entries(entries: Entries) -> Self {
        Self {
            entries: Arc::new(RwLock::new(entries)),
            frozen: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Copy of the entry under `key`
    pub fn get(&self, key: &str) -> Result<Option<Entry>> {
        let entries = lock_rwlock_read(&self.entries, "Store::get")?;
        Ok(entries.get(key).cloned())
    }

    /// Whether an entry exists under `key`
    pub fn contains_key(&self, key: &str) -> Result<bool> {
        let entries = lock_rwlock_read(&self.entries, "Store::contains_key")?;
        Ok(entries.contains_key(key))
    }

    /// Insert `entry` unless the key is taken or the store is frozen
    pub fn try_insert(&self, key: String, entry: Entry) -> Result<InsertOutcome> {
        let mut entries = lock_rwlock_write(&self.entries, "Store::try_insert")?;

        if self.is_frozen() {
            return Ok(InsertOutcome::Frozen);
        }
        if entries.contains_key(&key) {
            return Ok(InsertOutcome::Duplicate);
        }

        entries.insert(key, entry);
        Ok(InsertOutcome::Inserted)
    }

    /// Persist the result of evaluating `deferred` under `key`
    ///
    /// Returns the value callers should observe. The entry is only replaced if
    /// it still holds the very computation that produced `evaluated`; if a
    /// concurrent resolution already stored a value, that stored value wins.
    /// A frozen store is never written.
    pub fn memoize(&self, key: &str, deferred: &Deferred, evaluated: Value) -> Result<Value> {
        let mut entries = lock_rwlock_write(&self.entries, "Store::memoize")?;

        if self.is_frozen() {
            return Ok(evaluated);
        }

        match entries.get_mut(key) {
            Some(entry) => match &entry.provider {
                Provider::Deferred(current) if current.ptr_eq(deferred) => {
                    entry.provider = Provider::Literal(Arc::clone(&evaluated));
                    Ok(evaluated)
                }
                Provider::Literal(stored) => Ok(Arc::clone(stored)),
                _ => Ok(evaluated),
            },
            None => Ok(evaluated),
        }
    }

    /// Copy of every entry, unresolved providers included
    pub fn snapshot(&self) -> Result<Entries> {
        let entries = lock_rwlock_read(&self.entries, "Store::snapshot")?;
        Ok(entries.clone())
    }

    /// Replace every entry wholesale
    pub fn replace(&self, replacement: Entries) -> Result<()> {
        let mut entries = lock_rwlock_write(&self.entries, "Store::replace")?;

        if self.is_frozen() {
            return Err(Error::frozen());
        }

        *entries = replacement;
        Ok(())
    }

    /// Keys in insertion order
    pub fn keys(&self) -> Result<Vec<String>> {
        let entries = lock_rwlock_read(&self.entries, "Store::keys")?;
        Ok(entries.keys().cloned().collect())
    }

    /// Key/entry pairs in insertion order
    pub fn entries(&self) -> Result<Vec<(String, Entry)>> {
        let entries = lock_rwlock_read(&self.entries, "Store::entries")?;
        Ok(entries
            .iter()
            .map(|(key, entry)| (key.clone(), entry.clone()))
            .collect())
    }

    /// Number of entries
    pub fn len(&self) -> Result<usize> {
        let entries = lock_rwlock_read(&self.entries, "Store::len")?;
        Ok(entries.len())
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Make the store permanently immutable
    pub fn freeze(&self) -> Result<()> {
        let _entries = lock_rwlock_write(&self.entries, "Store::freeze")?;
        self.frozen.store(true, Ordering::SeqCst);
        Ok(())
    }

    /// Whether the store has been frozen
    pub fn is_frozen(&self) -> bool {
        self.frozen.load(Ordering::SeqCst)
    }

    /// Independent store with the same entries
    ///
    /// When `keep_frozen` is set the copy inherits the frozen flag, otherwise
    /// it always starts unfrozen.
    pub fn deep_copy(&self, keep_frozen: bool) -> Result<Self> {
        let copy = Self::from_entries(self.snapshot()?);
        if keep_frozen && self.is_frozen() {
            copy.freeze()?;
        }
        Ok(copy)
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keys = self.keys().unwrap_or_default();
        f.debug_struct("Store")
            .field("keys", &keys)
            .field("frozen", &self.is_frozen())
            .finish()
    }
}
