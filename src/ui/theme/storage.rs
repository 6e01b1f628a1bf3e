//! Durable key/value storage for client preferences.
//!
//! One key per file under a storage directory. Reads take a shared lock and
//! writes an exclusive one, so two processes never observe a half-written
//! value.

use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::PathBuf;
use std::sync::Arc;

use fs2::FileExt;
use parking_lot::Mutex;
use thiserror::Error;

/// Errors from preference storage. Stores that consume this absorb them.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Minimal key/value persistence contract.
pub trait PreferenceStorage: Send + Sync {
    /// Stored value for `key`, or `None` if it was never written.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: PreferenceStorage + ?Sized> PreferenceStorage for Arc<T> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

/// File-backed storage rooted at a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file holding `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(key))
    }
}

impl PreferenceStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }

        let read_err = |source: std::io::Error| StorageError::Read {
            path: path.clone(),
            source,
        };

        let mut file = File::open(&path).map_err(read_err)?;
        FileExt::lock_shared(&file).map_err(read_err)?;
        let mut content = String::new();
        let result = file.read_to_string(&mut content);
        let _ = FileExt::unlock(&file);
        result.map_err(read_err)?;

        Ok(Some(content.trim().to_string()))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let write_err = |source: std::io::Error| StorageError::Write {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(write_err)?;

        let mut file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(write_err)?;

        FileExt::lock_exclusive(&file).map_err(write_err)?;
        let result = overwrite(&mut file, value);
        let _ = FileExt::unlock(&file);
        result.map_err(write_err)
    }
}

fn overwrite(file: &mut File, value: &str) -> std::io::Result<()> {
    file.set_len(0)?;
    file.seek(SeekFrom::Start(0))?;
    file.write_all(value.as_bytes())?;
    file.sync_all()
}

/// Process-local storage. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
