use std::io::Read;

use crate::VfsError;

/// A readable byte stream handed out by [`VfsProvider::open`].
pub type VfsReader = Box<dyn Read + Send>;

/// Trait for file access backends.
///
/// All operations are synchronous and complete on the caller's thread.
///
/// # Existence vs Openability
///
/// [`exists`](VfsProvider::exists) is a cheap metadata probe (a `stat`).
/// [`open`](VfsProvider::open) actually opens a stream. The two may disagree:
/// a path can exist without being readable (permissions, directories). Callers
/// that need both guarantees check both.
pub trait VfsProvider: Send + Sync + 'static {
    /// Check whether anything exists at the given path.
    fn exists(&self, path: &str) -> bool;

    /// Open the file at the given path as a readable stream.
    fn open(&self, path: &str) -> Result<VfsReader, VfsError>;

    /// Read the entire contents of a file at the given path.
    fn read(&self, path: &str) -> Result<Vec<u8>, VfsError> {
        let mut reader = self.open(path)?;
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(data)
    }

    /// Whether the path can be opened as a stream right now.
    fn is_readable(&self, path: &str) -> bool {
        self.open(path).is_ok()
    }
}
