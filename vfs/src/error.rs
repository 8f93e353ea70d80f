use std::fmt;

/// Why an existing entry cannot be opened as a byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unreadable {
    /// The path names a directory.
    Directory,
    /// The entry is present but its contents cannot be read.
    Locked,
}

/// Failure to open or read an asset entry.
#[derive(Debug)]
pub enum VfsError {
    /// No entry exists at the path.
    Missing(String),
    /// An entry exists at the path but is not a readable file.
    Unreadable { path: String, kind: Unreadable },
    /// The host filesystem failed mid-read.
    Io(std::io::Error),
}

impl VfsError {
    /// Whether the failure means the entry is absent.
    pub fn is_missing(&self) -> bool {
        matches!(self, VfsError::Missing(_))
    }
}

impl fmt::Display for VfsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VfsError::Missing(path) => write!(f, "no asset entry at {path}"),
            VfsError::Unreadable {
                path,
                kind: Unreadable::Directory,
            } => write!(f, "{path} is a directory, not a mesh or image file"),
            VfsError::Unreadable {
                path,
                kind: Unreadable::Locked,
            } => write!(f, "{path} exists but cannot be opened for reading"),
            VfsError::Io(err) => write!(f, "reading asset bytes failed: {err}"),
        }
    }
}

impl std::error::Error for VfsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VfsError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VfsError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => VfsError::Missing(err.to_string()),
            _ => VfsError::Io(err),
        }
    }
}
