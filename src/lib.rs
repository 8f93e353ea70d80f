//! meshleaf - a scene-graph leaf node backed by a mesh file
//!
//! A [`MeshLeafNode`] loads an externally authored mesh through a pluggable
//! [`MeshLoader`] and attaches the resulting sub-tree into a shared scene
//! graph. Before loading, the node looks for a precompiled cache variant of
//! the file and picks format-specific reader options.
//!
//! # Features
//! - Cache-variant resolution (`.osgb`, `.osg2`, `.osg`) next to the source file
//! - Locale warnings for formats parsed with the process numeric locale
//! - Precise classification of loader failures with remediation hints
//! - Post-load color, transparency and texture controls
//! - Attach on construction, detach exactly once on drop
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use meshleaf::{AssetContext, LoadError, MeshLeafNode, PluginRegistry};
//! use meshleaf_vfs::MemoryProvider;
//!
//! let context = Arc::new(AssetContext::new(
//!     Arc::new(MemoryProvider::new()),
//!     Arc::new(PluginRegistry::new()),
//! ));
//!
//! let err = MeshLeafNode::create("arm", "arm.dae", context).unwrap_err();
//! assert!(matches!(err, LoadError::FileNotFound { .. }));
//! ```

pub mod appearance;
pub mod config;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod leaf;
pub mod loader;
pub mod locale;
pub mod orchestrator;
pub mod resolver;

pub use appearance::AppearanceState;
pub use config::LeafConfig;
pub use context::AssetContext;
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, LogSink, Severity};
pub use error::{LoadError, LoadResult, TextureLoadError};
pub use leaf::MeshLeafNode;
pub use loader::{
    ImageFileLoader, ImageLoader, MeshLoader, PluginRegistry, ReadResult, ReaderOptions,
    ReaderPlugin,
};
pub use locale::{FixedLocale, NumericLocale, ProcessNumericLocale};
pub use orchestrator::{LoadPlan, LoadStage, LoadedAsset, MeshReference};
pub use resolver::{AssetResolver, Resolution};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
