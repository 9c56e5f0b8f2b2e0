//! In-memory test doubles for the store and service boundaries.

use crate::error::StoreError;
use crate::service::ServiceCheck;
use crate::store::SettingsStore;

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Value {
    Bool(bool),
    Int(i32),
}

/// An in-memory [`SettingsStore`] for tests and demos.
///
/// Reads of absent keys return [`StoreError::Missing`]; typed reads of a
/// value stored under the other type return [`StoreError::Corrupt`]. Call
/// [`MemoryStore::fail_writes`] to make every subsequent write return
/// [`StoreError::WriteFailed`], which exercises the controller's
/// best-effort persistence path.
///
/// # Example
///
/// ```
/// use doze_core::{MemoryStore, SettingsStore};
///
/// let store = MemoryStore::new();
/// store.set_bool("doze_enabled", true).unwrap();
/// assert!(store.get_bool("doze_enabled").unwrap());
/// ```
pub struct MemoryStore {
    values: Mutex<HashMap<String, Value>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Make every subsequent write fail (or succeed again).
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Seed a boolean value, bypassing write-failure injection.
    pub fn seed_bool(&self, key: &str, value: bool) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_owned(), Value::Bool(value));
    }

    /// Seed an integer value, bypassing write-failure injection.
    pub fn seed_int(&self, key: &str, value: i32) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_owned(), Value::Int(value));
    }

    fn check_write(&self, key: &str) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(StoreError::WriteFailed {
                key: key.to_owned(),
            })
        } else {
            Ok(())
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for MemoryStore {
    fn get_bool(&self, key: &str) -> Result<bool, StoreError> {
        match self.values.lock().unwrap().get(key) {
            Some(Value::Bool(b)) => Ok(*b),
            Some(Value::Int(i)) => Err(StoreError::Corrupt {
                key: key.to_owned(),
                raw: *i,
            }),
            None => Err(StoreError::Missing {
                key: key.to_owned(),
            }),
        }
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<(), StoreError> {
        self.check_write(key)?;
        self.seed_bool(key, value);
        Ok(())
    }

    fn get_int(&self, key: &str) -> Result<i32, StoreError> {
        match self.values.lock().unwrap().get(key) {
            Some(Value::Int(i)) => Ok(*i),
            Some(Value::Bool(b)) => Err(StoreError::Corrupt {
                key: key.to_owned(),
                raw: *b as i32,
            }),
            None => Err(StoreError::Missing {
                key: key.to_owned(),
            }),
        }
    }

    fn set_int(&self, key: &str, value: i32) -> Result<(), StoreError> {
        self.check_write(key)?;
        self.seed_int(key, value);
        Ok(())
    }
}

/// A [`ServiceCheck`] that counts invocations.
#[derive(Debug, Default)]
pub struct CountingServiceCheck {
    count: AtomicUsize,
}

impl CountingServiceCheck {
    /// Create a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// How many rechecks were requested.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl ServiceCheck for CountingServiceCheck {
    fn recheck(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}
