use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{Unreadable, VfsError};
use crate::provider::{VfsProvider, VfsReader};

struct MemoryEntry {
    data: Arc<Vec<u8>>,
    readable: bool,
}

/// In-memory provider for tests and embedded assets.
///
/// Thread-safe and mutable even after being shared. Entries can be marked
/// unreadable to model a path that exists but cannot be opened.
///
/// # Example
///
/// ```ignore
/// let mem = MemoryProvider::new();
/// mem.insert("meshes/arm.dae", b"<COLLADA/>".to_vec());
/// mem.insert("meshes/arm.dae.osgb", cached_bytes);
/// ```
#[derive(Clone)]
pub struct MemoryProvider {
    files: Arc<RwLock<HashMap<String, MemoryEntry>>>,
}

impl MemoryProvider {
    /// Create an empty in-memory provider.
    pub fn new() -> Self {
        Self {
            files: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Insert a file at the given path.
    ///
    /// Overwrites any existing file at the same path.
    pub fn insert(&self, path: impl Into<String>, data: Vec<u8>) {
        self.files.write().insert(
            path.into(),
            MemoryEntry {
                data: Arc::new(data),
                readable: true,
            },
        );
    }

    /// Insert an entry that exists but refuses to be opened.
    pub fn insert_unreadable(&self, path: impl Into<String>) {
        self.files.write().insert(
            path.into(),
            MemoryEntry {
                data: Arc::new(Vec::new()),
                readable: false,
            },
        );
    }

    /// Remove a file at the given path, returning whether it existed.
    pub fn remove(&self, path: &str) -> bool {
        self.files.write().remove(path).is_some()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.files.read().len()
    }

    /// Whether no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.files.read().is_empty()
    }

    fn data(&self, path: &str) -> Result<Arc<Vec<u8>>, VfsError> {
        let map = self.files.read();
        match map.get(path) {
            Some(entry) if entry.readable => Ok(Arc::clone(&entry.data)),
            Some(_) => Err(VfsError::Unreadable {
                path: path.to_owned(),
                kind: Unreadable::Locked,
            }),
            None => Err(VfsError::Missing(path.to_owned())),
        }
    }
}

impl Default for MemoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl VfsProvider for MemoryProvider {
    fn exists(&self, path: &str) -> bool {
        self.files.read().contains_key(path)
    }

    fn open(&self, path: &str) -> Result<VfsReader, VfsError> {
        let data = self.data(path)?;
        Ok(Box::new(Cursor::new(data.as_ref().clone())))
    }

    fn read(&self, path: &str) -> Result<Vec<u8>, VfsError> {
        self.data(path).map(|data| data.as_ref().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn insert_and_read() {
        let mem = MemoryProvider::new();
        mem.insert("meshes/arm.dae", b"hello".to_vec());
        assert_eq!(mem.read("meshes/arm.dae").unwrap(), b"hello");
    }

    #[test]
    fn read_missing() {
        let mem = MemoryProvider::new();
        assert!(matches!(mem.read("nope"), Err(VfsError::Missing(_))));
    }

    #[test]
    fn open_streams_contents() {
        let mem = MemoryProvider::new();
        mem.insert("a.obj", b"v 0 0 0".to_vec());
        let mut reader = mem.open("a.obj").unwrap();
        let mut text = String::new();
        reader.read_to_string(&mut text).unwrap();
        assert_eq!(text, "v 0 0 0");
    }

    #[test]
    fn unreadable_entry_exists_but_does_not_open() {
        let mem = MemoryProvider::new();
        mem.insert_unreadable("locked.dae");
        assert!(mem.exists("locked.dae"));
        assert!(!mem.is_readable("locked.dae"));
        assert!(matches!(
            mem.open("locked.dae"),
            Err(VfsError::Unreadable { kind: Unreadable::Locked, .. })
        ));
    }

    #[test]
    fn remove_file() {
        let mem = MemoryProvider::new();
        mem.insert("a.txt", b"data".to_vec());
        assert!(mem.remove("a.txt"));
        assert!(!mem.exists("a.txt"));
        assert!(!mem.remove("a.txt"));
    }

    #[test]
    fn clones_share_storage() {
        let mem = MemoryProvider::new();
        let other = mem.clone();
        other.insert("shared.osgb", vec![1, 2, 3]);
        assert!(mem.exists("shared.osgb"));
        assert_eq!(mem.len(), 1);
        assert!(!mem.is_empty());
    }
}
