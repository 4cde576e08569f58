use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// Filesystem backend. Documents live as plain files under `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    fn read(&self, name: &str) -> Result<Option<Vec<u8>>> {
        let full_path = self.base_path.join(name);
        match fs::read(full_path) {
            Ok(data) => Ok(Some(data)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, name: &str, data: &[u8]) -> Result<()> {
        let full_path = self.base_path.join(name);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}

/// In-memory backend for tests. Clones share the same document map, so a
/// store and its test harness can observe the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    documents: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a document directly, bypassing the `Storage` contract. Used
    /// to stage corrupt or hand-crafted snapshots.
    pub fn put(&self, name: &str, data: &[u8]) {
        self.documents
            .lock()
            .expect("storage mutex poisoned")
            .insert(name.to_string(), data.to_vec());
    }

    pub fn get(&self, name: &str) -> Option<Vec<u8>> {
        self.documents
            .lock()
            .expect("storage mutex poisoned")
            .get(name)
            .cloned()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, name: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.get(name))
    }

    fn write(&self, name: &str, data: &[u8]) -> Result<()> {
        self.put(name, data);
        Ok(())
    }
}
