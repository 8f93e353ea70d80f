//! Mesh loader seam and plugin dispatch.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use meshleaf_core::scene::SharedNode;
use meshleaf_vfs::path::lower_case_extension;
use parking_lot::RwLock;

/// Reader option that suppresses the implicit axis rotation some formats apply.
pub const NO_ROTATION: &str = "noRotation";

/// Opaque set of reader options passed to a mesh loader.
///
/// Options are plain flags. Rendered with [`fmt::Display`] they form a
/// space-separated option string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReaderOptions {
    flags: BTreeSet<String>,
}

impl ReaderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options asking the reader not to rotate the model.
    pub fn no_rotation() -> Self {
        Self::new().with_option(NO_ROTATION)
    }

    /// Add a flag.
    #[must_use]
    pub fn with_option(mut self, option: impl Into<String>) -> Self {
        self.flags.insert(option.into());
        self
    }

    /// Whether a flag is set.
    pub fn has(&self, option: &str) -> bool {
        self.flags.contains(option)
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// The flags in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.flags.iter().map(String::as_str)
    }
}

impl fmt::Display for ReaderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for flag in &self.flags {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(flag)?;
            first = false;
        }
        Ok(())
    }
}

/// Outcome of a mesh read.
#[derive(Debug, Clone)]
pub enum ReadResult {
    /// A sub-tree was produced. It may still be a parse-error placeholder.
    Node(SharedNode),
    /// The reader ran but produced nothing.
    Empty,
    /// No reader handles the file.
    FileNotHandled,
    /// The reader failed.
    Error(String),
}

impl ReadResult {
    /// The produced node, if any.
    pub fn node(&self) -> Option<&SharedNode> {
        match self {
            Self::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn is_node(&self) -> bool {
        matches!(self, Self::Node(_))
    }
}

/// External mesh loader.
///
/// `options` is `None` when the caller wants the reader's defaults.
pub trait MeshLoader: Send + Sync {
    fn read_node(&self, path: &str, options: Option<&ReaderOptions>) -> ReadResult;
}

/// A format reader that can be registered with a [`PluginRegistry`].
pub trait ReaderPlugin: Send + Sync {
    /// Human-readable plugin name.
    fn name(&self) -> &str;

    /// Whether the plugin reads files with this lowercase extension (no dot).
    fn accepts_extension(&self, extension: &str) -> bool;

    fn read_node(&self, path: &str, options: Option<&ReaderOptions>) -> ReadResult;
}

/// Mesh loader that dispatches to registered plugins by file extension.
///
/// Plugins are tried in registration order. A plugin answering
/// [`ReadResult::FileNotHandled`] passes the file on to the next candidate;
/// any other answer is final.
///
/// # Example
///
/// ```
/// use meshleaf::loader::{MeshLoader, PluginRegistry, ReadResult};
///
/// let registry = PluginRegistry::new();
/// assert!(matches!(
///     registry.read_node("robot.dae", None),
///     ReadResult::FileNotHandled
/// ));
/// ```
#[derive(Default)]
pub struct PluginRegistry {
    plugins: RwLock<Vec<Arc<dyn ReaderPlugin>>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin behind the already registered ones.
    pub fn register(&self, plugin: Arc<dyn ReaderPlugin>) {
        log::debug!("Registered mesh reader plugin {}", plugin.name());
        self.plugins.write().push(plugin);
    }

    /// Number of registered plugins.
    pub fn len(&self) -> usize {
        self.plugins.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.read().is_empty()
    }

    /// Plugins accepting an extension, in registration order.
    pub fn plugins_for(&self, extension: &str) -> Vec<Arc<dyn ReaderPlugin>> {
        self.plugins
            .read()
            .iter()
            .filter(|plugin| plugin.accepts_extension(extension))
            .cloned()
            .collect()
    }

    /// Whether any plugin reads files with the extension of `path`.
    pub fn handles(&self, path: &str) -> bool {
        !self.plugins_for(&lower_case_extension(path)).is_empty()
    }
}

impl fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self
            .plugins
            .read()
            .iter()
            .map(|plugin| plugin.name().to_owned())
            .collect();
        f.debug_struct("PluginRegistry")
            .field("plugins", &names)
            .finish()
    }
}

impl MeshLoader for PluginRegistry {
    fn read_node(&self, path: &str, options: Option<&ReaderOptions>) -> ReadResult {
        let extension = lower_case_extension(path);
        for plugin in self.plugins_for(&extension) {
            match plugin.read_node(path, options) {
                ReadResult::FileNotHandled => {
                    log::trace!("{} declined {path}", plugin.name());
                }
                result => return result,
            }
        }
        ReadResult::FileNotHandled
    }
}
