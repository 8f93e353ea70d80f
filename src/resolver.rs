//! Cache-variant resolution.
//!
//! A mesh may have precompiled binary variants stored next to it, named by
//! appending a suffix to the full source path (`arm.dae` → `arm.dae.osgb`).
//! The resolver probes the configured suffixes in order and picks the first
//! variant that exists.

use std::sync::Arc;

use meshleaf_vfs::{path::append_suffix, VfsProvider};

use crate::config::DEFAULT_CACHE_EXTENSIONS;

/// Outcome of resolving a requested path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A cache variant exists and should be loaded instead.
    Cached {
        /// Full path of the variant.
        path: String,
        /// The suffix that matched.
        suffix: String,
    },
    /// No variant exists; load the requested path itself.
    Original,
}

impl Resolution {
    pub fn is_cache_hit(&self) -> bool {
        matches!(self, Self::Cached { .. })
    }

    /// The path to hand to the loader.
    pub fn load_path<'a>(&'a self, requested: &'a str) -> &'a str {
        match self {
            Self::Cached { path, .. } => path,
            Self::Original => requested,
        }
    }
}

/// Probes a filesystem for cache variants.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use meshleaf::resolver::{AssetResolver, Resolution};
/// use meshleaf_vfs::MemoryProvider;
///
/// let fs = MemoryProvider::new();
/// fs.insert("arm.dae", Vec::new());
/// fs.insert("arm.dae.osg", Vec::new());
///
/// let resolver = AssetResolver::with_default_extensions(Arc::new(fs));
/// let resolution = resolver.resolve("arm.dae");
/// assert_eq!(resolution.load_path("arm.dae"), "arm.dae.osg");
/// ```
#[derive(Clone)]
pub struct AssetResolver {
    fs: Arc<dyn VfsProvider>,
    cache_extensions: Vec<String>,
}

impl AssetResolver {
    pub fn new(fs: Arc<dyn VfsProvider>, cache_extensions: Vec<String>) -> Self {
        Self {
            fs,
            cache_extensions,
        }
    }

    /// Resolver probing `.osgb`, `.osg2` and `.osg`.
    pub fn with_default_extensions(fs: Arc<dyn VfsProvider>) -> Self {
        Self::new(
            fs,
            DEFAULT_CACHE_EXTENSIONS
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
        )
    }

    /// Suffixes probed, in priority order.
    pub fn cache_extensions(&self) -> &[String] {
        &self.cache_extensions
    }

    /// Find the preferred representation of `requested`.
    ///
    /// Never fails: a miss means the original path is used.
    pub fn resolve(&self, requested: &str) -> Resolution {
        for suffix in &self.cache_extensions {
            let candidate = append_suffix(requested, suffix);
            let found = self.fs.exists(&candidate);
            log::debug!("Probing cache variant {candidate}: {found}");
            if found {
                return Resolution::Cached {
                    path: candidate,
                    suffix: suffix.clone(),
                };
            }
        }
        Resolution::Original
    }
}

impl std::fmt::Debug for AssetResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetResolver")
            .field("cache_extensions", &self.cache_extensions)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshleaf_vfs::MemoryProvider;

    fn resolver_with(files: &[&str]) -> AssetResolver {
        let fs = MemoryProvider::new();
        for file in files {
            fs.insert(*file, Vec::new());
        }
        AssetResolver::with_default_extensions(Arc::new(fs))
    }

    #[test]
    fn miss_uses_original() {
        let resolver = resolver_with(&["arm.dae"]);
        let resolution = resolver.resolve("arm.dae");
        assert_eq!(resolution, Resolution::Original);
        assert!(!resolution.is_cache_hit());
        assert_eq!(resolution.load_path("arm.dae"), "arm.dae");
    }

    #[test]
    fn first_suffix_wins() {
        let resolver = resolver_with(&["arm.dae", "arm.dae.osg", "arm.dae.osg2", "arm.dae.osgb"]);
        assert_eq!(
            resolver.resolve("arm.dae"),
            Resolution::Cached {
                path: "arm.dae.osgb".into(),
                suffix: ".osgb".into(),
            }
        );
    }

    #[test]
    fn probes_in_priority_order() {
        let resolver = resolver_with(&["arm.dae.osg", "arm.dae.osg2"]);
        assert_eq!(resolver.resolve("arm.dae").load_path("arm.dae"), "arm.dae.osg2");

        let resolver = resolver_with(&["arm.dae.osg"]);
        assert_eq!(resolver.resolve("arm.dae").load_path("arm.dae"), "arm.dae.osg");
    }

    #[test]
    fn suffix_is_appended_not_substituted() {
        let resolver = resolver_with(&["arm.osgb"]);
        assert_eq!(resolver.resolve("arm.dae"), Resolution::Original);
    }

    #[test]
    fn custom_extensions() {
        let fs = MemoryProvider::new();
        fs.insert("arm.dae.osgb", Vec::new());
        fs.insert("arm.dae.bin", Vec::new());
        let resolver = AssetResolver::new(Arc::new(fs), vec![".bin".into()]);
        assert_eq!(resolver.cache_extensions(), &[".bin".to_owned()]);
        assert_eq!(resolver.resolve("arm.dae").load_path("arm.dae"), "arm.dae.bin");
    }
}
