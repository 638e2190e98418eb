//! # Storage Layer
//!
//! The persistence collaborator behind the notebook. The
//! [`KeyValueStore`] trait is a deliberately small string-keyed
//! get/set surface: the notebook owns serialization and hands this
//! layer opaque values.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - One file per key: `<data-dir>/<key>.json`
//!   - Whole-file overwrite on every write
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Write Semantics
//!
//! A `set` replaces the prior value in full; there is no merging and no
//! partial write. On failure the previous value is left as it was; the
//! caller's in-memory state may then be ahead of what is stored.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for string-keyed persistence.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any prior value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
