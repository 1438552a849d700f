//! In-memory key-value backend.

use std::collections::HashMap;

use super::backend::StorageBackend;
use crate::error::Result;

/// HashMap-backed storage, used by tests and as an ephemeral backend.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Backend wrapper that counts every call, for asserting that a code path
/// never touched storage.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default)]
pub struct CountingBackend {
    inner: MemoryBackend,
    calls: std::cell::Cell<usize>,
}

#[cfg(any(test, feature = "test-utils"))]
impl CountingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total get/set/remove calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl StorageBackend for CountingBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.calls.set(self.calls.get() + 1);
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.calls.set(self.calls.get() + 1);
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.calls.set(self.calls.get() + 1);
        self.inner.remove(key)
    }
}
