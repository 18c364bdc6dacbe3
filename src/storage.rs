//! Key-value storage backends for session persistence
//!
//! The session store serializes the full session mapping as one blob under a
//! single fixed key. This module provides the key-value collaborator that
//! blob is written to: an embedded `sled` database for the application and an
//! in-memory map for tests.

use crate::error::{Result, SavantError};
use anyhow::Context;
use directories::ProjectDirs;
use sled::Db;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Minimal key-value contract consumed by the session store
///
/// Mirrors the surface of a browser-style key-value store: `get` returns the
/// raw value if present, `set` overwrites it. Failures propagate to the
/// caller; the session store performs no retries.
pub trait KvStore: Send {
    /// Fetch the raw value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &[u8]) -> Result<()>;
}

/// Embedded `sled`-backed key-value store
///
/// Used as the durable backend for chat sessions. Values are flushed on
/// every `set` so a completed mutation survives a crash.
pub struct SledStore {
    db: Db,
}

impl SledStore {
    /// Open or create a store at the default application data directory
    ///
    /// The path can be overridden with the `SAVANT_HISTORY_DB` environment
    /// variable, which makes it easy to point the binary at a test database
    /// without changing the user's data dir.
    ///
    /// # Errors
    ///
    /// Returns `SavantError::Storage` if the data directory cannot be
    /// determined or the database cannot be opened.
    pub fn open_default() -> Result<Self> {
        if let Ok(override_path) = std::env::var("SAVANT_HISTORY_DB") {
            return Self::open(override_path);
        }

        let proj_dirs = ProjectDirs::from("com", "xbcsmith", "savant")
            .ok_or_else(|| SavantError::Storage("Could not determine data directory".into()))?;

        let data_dir = proj_dirs.data_dir();
        std::fs::create_dir_all(data_dir)
            .context("Failed to create data directory")
            .map_err(|e| SavantError::Storage(e.to_string()))?;

        Self::open(data_dir.join("sessions.db"))
    }

    /// Open or create a store at the given path
    ///
    /// # Errors
    ///
    /// Returns `SavantError::Storage` if the database cannot be opened.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path: PathBuf = path.into();
        if let Some(parent) = path.parent() {
            ensure_parent_dir(parent)?;
        }
        let db = sled::open(&path)
            .map_err(|e| SavantError::Storage(format!("Failed to open database: {}", e)))?;
        Ok(Self { db })
    }
}

fn ensure_parent_dir(parent: &Path) -> Result<()> {
    if !parent.as_os_str().is_empty() {
        std::fs::create_dir_all(parent)
            .context("Failed to create parent directory for database")
            .map_err(|e| SavantError::Storage(e.to_string()))?;
    }
    Ok(())
}

impl KvStore for SledStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let value = self
            .db
            .get(key.as_bytes())
            .map_err(|e| SavantError::Storage(format!("Get failed: {}", e)))?;
        Ok(value.map(|ivec| ivec.to_vec()))
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        self.db
            .insert(key.as_bytes(), value)
            .map_err(|e| SavantError::Storage(format!("Insert failed: {}", e)))?;
        self.db
            .flush()
            .map_err(|e| SavantError::Storage(format!("Flush failed: {}", e)))?;
        Ok(())
    }
}

/// In-memory key-value store for tests
///
/// Behaves like `SledStore` without touching the filesystem.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| SavantError::Storage("Lock poisoned".into()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| SavantError::Storage("Lock poisoned".into()))?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.get("missing").unwrap().is_none());

        store.set("key", b"value").unwrap();
        assert_eq!(store.get("key").unwrap(), Some(b"value".to_vec()));
    }

    #[test]
    fn test_memory_store_overwrite() {
        let store = MemoryStore::new();
        store.set("key", b"first").unwrap();
        store.set("key", b"second").unwrap();
        assert_eq!(store.get("key").unwrap(), Some(b"second".to_vec()));
    }

    #[test]
    fn test_sled_store_roundtrip() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let store = SledStore::open(temp_dir.path().join("test.db")).expect("Failed to open store");

        assert!(store.get("sessions").unwrap().is_none());
        store.set("sessions", b"{}").unwrap();
        assert_eq!(store.get("sessions").unwrap(), Some(b"{}".to_vec()));
    }

    #[test]
    fn test_sled_store_persists_across_reopen() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("test.db");

        {
            let store = SledStore::open(&path).expect("Failed to open store");
            store.set("sessions", b"blob").unwrap();
        }

        let reopened = SledStore::open(&path).expect("Failed to reopen store");
        assert_eq!(reopened.get("sessions").unwrap(), Some(b"blob".to_vec()));
    }

    #[test]
    #[serial]
    fn test_open_default_honors_env_override() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("override.db");
        std::env::set_var("SAVANT_HISTORY_DB", &path);

        let store = SledStore::open_default().expect("Failed to open store");
        store.set("sessions", b"x").unwrap();
        assert!(path.exists());

        std::env::remove_var("SAVANT_HISTORY_DB");
    }
}
