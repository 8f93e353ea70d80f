//! Error types for mesh and texture loading.

use meshleaf_vfs::VfsError;
use thiserror::Error;

/// Errors that abort construction of a mesh leaf node.
///
/// No node is produced when any of these is returned.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The requested path failed the existence check or the stream-open check.
    #[error("File {path} not found.")]
    FileNotFound { path: String },

    /// The mesh loader produced no usable node.
    #[error("File {path} could not be loaded: {reason}")]
    LoadFailed {
        path: String,
        reason: String,
        /// Advisory conversion command, set for locale-sensitive formats.
        hint: Option<String>,
    },

    /// No loader plugin recognises the format.
    #[error("File {path} found but could not be opened. Check that a plugin exists.")]
    PluginMissing {
        path: String,
        /// Advisory conversion command, set for locale-sensitive formats.
        hint: Option<String>,
    },
}

impl LoadError {
    /// The requested path the error refers to.
    pub fn path(&self) -> &str {
        match self {
            Self::FileNotFound { path }
            | Self::LoadFailed { path, .. }
            | Self::PluginMissing { path, .. } => path,
        }
    }

    /// Remediation hint, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::FileNotFound { .. } => None,
            Self::LoadFailed { hint, .. } | Self::PluginMissing { hint, .. } => hint.as_deref(),
        }
    }

    /// Whether the file was found but the loader could not turn it into a node.
    ///
    /// True for both [`LoadError::LoadFailed`] and [`LoadError::PluginMissing`].
    pub fn is_load_failure(&self) -> bool {
        matches!(self, Self::LoadFailed { .. } | Self::PluginMissing { .. })
    }
}

/// Result alias for load operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors produced by an image loader.
///
/// Texture failures never propagate out of a node; they are reported as
/// diagnostics and the previous appearance is kept.
#[derive(Error, Debug)]
pub enum TextureLoadError {
    #[error("texture {path} not found")]
    NotFound { path: String },

    #[error("texture {path} could not be read: {source}")]
    Io {
        path: String,
        #[source]
        source: VfsError,
    },

    #[error("texture {path} could not be decoded: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("texture {path} decoded to an empty image")]
    Empty { path: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_display() {
        let err = LoadError::FileNotFound {
            path: "arm.dae".into(),
        };
        assert_eq!(err.to_string(), "File arm.dae not found.");
        assert_eq!(err.path(), "arm.dae");
        assert!(err.hint().is_none());
        assert!(!err.is_load_failure());
    }

    #[test]
    fn plugin_missing_is_a_load_failure() {
        let err = LoadError::PluginMissing {
            path: "arm.xyz".into(),
            hint: None,
        };
        assert!(err.is_load_failure());
        assert!(err.to_string().contains("Check that a plugin exists"));
    }

    #[test]
    fn load_failed_carries_hint() {
        let err = LoadError::LoadFailed {
            path: "arm.dae".into(),
            reason: "loader returned no node".into(),
            hint: Some("osgconv arm.dae arm.dae.osgb".into()),
        };
        assert!(err.is_load_failure());
        assert_eq!(err.hint(), Some("osgconv arm.dae arm.dae.osgb"));
        assert_eq!(
            err.to_string(),
            "File arm.dae could not be loaded: loader returned no node"
        );
    }
}
