//! Collaborators shared by every mesh leaf node.

use std::fmt;
use std::sync::Arc;

use meshleaf_vfs::VfsProvider;

use crate::config::LeafConfig;
use crate::diagnostics::{Diagnostic, DiagnosticSink, LogSink};
use crate::loader::{ImageFileLoader, ImageLoader, MeshLoader};
use crate::locale::{ProcessNumericLocale, NumericLocale};
use crate::resolver::AssetResolver;

/// Filesystem, loaders, locale and diagnostics used to build nodes.
///
/// A context is built once and shared between nodes through an `Arc`.
/// Clones of a node reuse the context of the original.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use meshleaf::{AssetContext, FixedLocale, LeafConfig, PluginRegistry};
/// use meshleaf_vfs::MemoryProvider;
///
/// let context = AssetContext::new(Arc::new(MemoryProvider::new()), Arc::new(PluginRegistry::new()))
///     .with_locale(Arc::new(FixedLocale::COMMA))
///     .with_config(LeafConfig::default().with_placeholder_prefix("placeholder"));
///
/// assert_eq!(context.locale().decimal_point(), ',');
/// ```
pub struct AssetContext {
    filesystem: Arc<dyn VfsProvider>,
    mesh_loader: Arc<dyn MeshLoader>,
    image_loader: Arc<dyn ImageLoader>,
    locale: Arc<dyn NumericLocale>,
    diagnostics: Arc<dyn DiagnosticSink>,
    config: LeafConfig,
}

impl AssetContext {
    /// Context over `filesystem` with the default image decoder, the
    /// process numeric locale and log diagnostics.
    pub fn new(filesystem: Arc<dyn VfsProvider>, mesh_loader: Arc<dyn MeshLoader>) -> Self {
        let image_loader = Arc::new(ImageFileLoader::new(Arc::clone(&filesystem)));
        Self {
            filesystem,
            mesh_loader,
            image_loader,
            locale: Arc::new(ProcessNumericLocale),
            diagnostics: Arc::new(LogSink),
            config: LeafConfig::default(),
        }
    }

    /// Context over the native filesystem.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn native(mesh_loader: Arc<dyn MeshLoader>) -> Self {
        Self::new(
            Arc::new(meshleaf_vfs::FileSystemProvider::native()),
            mesh_loader,
        )
    }

    #[must_use]
    pub fn with_image_loader(mut self, image_loader: Arc<dyn ImageLoader>) -> Self {
        self.image_loader = image_loader;
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: Arc<dyn NumericLocale>) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: LeafConfig) -> Self {
        self.config = config;
        self
    }

    pub fn filesystem(&self) -> &Arc<dyn VfsProvider> {
        &self.filesystem
    }

    pub fn mesh_loader(&self) -> &Arc<dyn MeshLoader> {
        &self.mesh_loader
    }

    pub fn image_loader(&self) -> &Arc<dyn ImageLoader> {
        &self.image_loader
    }

    pub fn locale(&self) -> &Arc<dyn NumericLocale> {
        &self.locale
    }

    pub fn config(&self) -> &LeafConfig {
        &self.config
    }

    /// Resolver over this context's filesystem and cache suffixes.
    pub fn resolver(&self) -> AssetResolver {
        AssetResolver::new(
            Arc::clone(&self.filesystem),
            self.config.cache_extensions.clone(),
        )
    }

    /// Send a diagnostic to the configured sink.
    pub fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.emit(&diagnostic);
    }
}

impl fmt::Debug for AssetContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetContext")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
