use std::fs::File;
use std::path::PathBuf;

use crate::error::{Unreadable, VfsError};
use crate::provider::{VfsProvider, VfsReader};

/// File system provider for reading assets on disk.
///
/// The root path is joined with the requested path to form the actual
/// filesystem path. [`FileSystemProvider::native`] uses an empty root, so
/// relative paths resolve against the working directory and absolute paths
/// are used as-is.
///
/// # Example
///
/// ```ignore
/// let fs = FileSystemProvider::native();
/// if fs.exists("/data/meshes/arm.dae") {
///     let bytes = fs.read("/data/meshes/arm.dae")?;
/// }
/// ```
pub struct FileSystemProvider {
    root: PathBuf,
}

impl FileSystemProvider {
    /// Create a provider rooted at the given directory.
    ///
    /// The directory does not need to exist yet; it is checked
    /// at access time.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a provider that passes paths straight to the host filesystem.
    pub fn native() -> Self {
        Self::new(PathBuf::new())
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl Default for FileSystemProvider {
    fn default() -> Self {
        Self::native()
    }
}

impl VfsProvider for FileSystemProvider {
    fn exists(&self, path: &str) -> bool {
        self.resolve(path).exists()
    }

    fn open(&self, path: &str) -> Result<VfsReader, VfsError> {
        let full_path = self.resolve(path);
        if full_path.is_dir() {
            return Err(VfsError::Unreadable {
                path: path.to_owned(),
                kind: Unreadable::Directory,
            });
        }
        let file = File::open(full_path)?;
        Ok(Box::new(file))
    }

    fn read(&self, path: &str) -> Result<Vec<u8>, VfsError> {
        let full_path = self.resolve(path);
        if full_path.is_dir() {
            return Err(VfsError::Unreadable {
                path: path.to_owned(),
                kind: Unreadable::Directory,
            });
        }
        Ok(std::fs::read(full_path)?)
    }
}
