//! Mesh load orchestration.
//!
//! Loading runs in two steps. [`plan`] checks the requested path, resolves a
//! cache variant and picks format-specific reader options without touching
//! the mesh loader. [`execute`] reports the plan's diagnostics, invokes the
//! loader and classifies its answer. [`load`] runs both.
//!
//! ```text
//! Resolving ──▶ Loading ──▶ Attaching ──▶ Ready
//!     │            │            │
//!     └────────────┴────────────┴──▶ Failed
//! ```

use std::fmt;

use meshleaf_core::scene::SharedNode;
use meshleaf_vfs::path::lower_case_extension;

use crate::context::AssetContext;
use crate::diagnostics::Diagnostic;
use crate::error::{LoadError, LoadResult};
use crate::loader::{ReadResult, ReaderOptions};
use crate::resolver::Resolution;

/// Stages of node construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStage {
    Resolving,
    Loading,
    Attaching,
    Ready,
    Failed,
}

impl fmt::Display for LoadStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Resolving => "resolving",
            Self::Loading => "loading",
            Self::Attaching => "attaching",
            Self::Ready => "ready",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

pub(crate) fn trace_stage(path: &str, stage: LoadStage) {
    log::trace!("{path}: {stage}");
}

/// The requested mesh path together with the path actually loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshReference {
    requested: String,
    resolved: String,
    cached: bool,
}

impl MeshReference {
    /// Path given by the caller.
    pub fn requested(&self) -> &str {
        &self.requested
    }

    /// Path handed to the mesh loader. Equal to the requested path unless a
    /// cache variant was found.
    pub fn resolved(&self) -> &str {
        &self.resolved
    }

    /// Whether the resolved path is a cache variant.
    pub fn is_cached(&self) -> bool {
        self.cached
    }
}

/// Everything decided before the mesh loader runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadPlan {
    reference: MeshReference,
    resolution: Resolution,
    extension: String,
    options: Option<ReaderOptions>,
    locale_sensitive: bool,
    locale_mismatch: Option<char>,
}

impl LoadPlan {
    pub fn reference(&self) -> &MeshReference {
        &self.reference
    }

    pub fn requested(&self) -> &str {
        self.reference.requested()
    }

    pub fn load_path(&self) -> &str {
        self.reference.resolved()
    }

    pub fn is_cache_hit(&self) -> bool {
        self.reference.is_cached()
    }

    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    /// Lowercase extension of the requested path, without the dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Options for the loader; `None` means reader defaults.
    pub fn options(&self) -> Option<&ReaderOptions> {
        self.options.as_ref()
    }

    /// Whether the requested format parses numbers with the process locale.
    /// Always false on a cache hit.
    pub fn is_locale_sensitive(&self) -> bool {
        self.locale_sensitive
    }

    /// The offending decimal separator when a locale-sensitive format is
    /// loaded under a locale not using `.`.
    pub fn locale_mismatch(&self) -> Option<char> {
        self.locale_mismatch
    }
}

/// A loaded mesh sub-tree and where it came from.
#[derive(Debug, Clone)]
pub struct LoadedAsset {
    pub reference: MeshReference,
    pub node: SharedNode,
}

/// Fail with [`LoadError::FileNotFound`] unless `path` can be opened as a stream.
///
/// Directories and entries that exist but cannot be read are rejected too.
pub fn ensure_readable(ctx: &AssetContext, path: &str) -> LoadResult<()> {
    if ctx.filesystem().is_readable(path) {
        return Ok(());
    }
    trace_stage(path, LoadStage::Failed);
    Err(LoadError::FileNotFound {
        path: path.to_owned(),
    })
}

/// Decide how `requested` will be loaded.
///
/// Fails with [`LoadError::FileNotFound`] when the path does not exist.
/// Does not emit diagnostics or call the mesh loader.
pub fn plan(ctx: &AssetContext, requested: &str) -> LoadResult<LoadPlan> {
    trace_stage(requested, LoadStage::Resolving);
    if !ctx.filesystem().exists(requested) {
        return Err(LoadError::FileNotFound {
            path: requested.to_owned(),
        });
    }

    let resolution = ctx.resolver().resolve(requested);
    let extension = lower_case_extension(requested);
    let reference = MeshReference {
        requested: requested.to_owned(),
        resolved: resolution.load_path(requested).to_owned(),
        cached: resolution.is_cache_hit(),
    };

    if resolution.is_cache_hit() {
        return Ok(LoadPlan {
            reference,
            resolution,
            extension,
            options: None,
            locale_sensitive: false,
            locale_mismatch: None,
        });
    }

    let config = ctx.config();
    let locale_sensitive = config.is_locale_sensitive(&extension);
    let locale_mismatch = if locale_sensitive {
        let decimal_point = ctx.locale().decimal_point();
        (decimal_point != '.').then_some(decimal_point)
    } else {
        None
    };
    let options = config
        .needs_no_rotation(&extension)
        .then(ReaderOptions::no_rotation);

    Ok(LoadPlan {
        reference,
        resolution,
        extension,
        options,
        locale_sensitive,
        locale_mismatch,
    })
}

/// Run the mesh loader for `plan` and classify the result.
pub fn execute(ctx: &AssetContext, plan: &LoadPlan) -> LoadResult<LoadedAsset> {
    let requested = plan.requested();
    if plan.is_cache_hit() {
        ctx.emit(Diagnostic::CacheHit {
            requested: requested.to_owned(),
            resolved: plan.load_path().to_owned(),
        });
    }
    if let Some(decimal_point) = plan.locale_mismatch() {
        ctx.emit(Diagnostic::LocaleMismatch {
            path: requested.to_owned(),
            decimal_point,
        });
    }

    trace_stage(requested, LoadStage::Loading);
    let result = ctx.mesh_loader().read_node(plan.load_path(), plan.options());

    match classify(ctx, plan, result) {
        Ok(node) => Ok(LoadedAsset {
            reference: plan.reference().clone(),
            node,
        }),
        Err(err) => {
            trace_stage(requested, LoadStage::Failed);
            Err(err)
        }
    }
}

/// Plan and execute in one go.
pub fn load(ctx: &AssetContext, requested: &str) -> LoadResult<LoadedAsset> {
    let plan = match plan(ctx, requested) {
        Ok(plan) => plan,
        Err(err) => {
            trace_stage(requested, LoadStage::Failed);
            return Err(err);
        }
    };
    execute(ctx, &plan)
}

fn classify(ctx: &AssetContext, plan: &LoadPlan, result: ReadResult) -> LoadResult<SharedNode> {
    let config = ctx.config();
    let path = plan.requested().to_owned();
    let hint = plan
        .is_locale_sensitive()
        .then(|| config.conversion_hint(&path));

    let reason = match result {
        ReadResult::Node(node) => {
            let name = node.name();
            if plan.is_cache_hit() || !config.is_placeholder_name(&name) {
                return Ok(node);
            }
            format!("loader returned placeholder node \"{name}\"")
        }
        ReadResult::Empty => "loader returned no node".to_owned(),
        ReadResult::Error(message) => message,
        ReadResult::FileNotHandled => {
            ctx.emit(Diagnostic::PluginMissing { path: path.clone() });
            emit_hint(ctx, &path, hint.as_deref());
            return Err(LoadError::PluginMissing { path, hint });
        }
    };

    ctx.emit(Diagnostic::LoadFailed {
        path: path.clone(),
        reason: reason.clone(),
    });
    emit_hint(ctx, &path, hint.as_deref());
    Err(LoadError::LoadFailed { path, reason, hint })
}

fn emit_hint(ctx: &AssetContext, path: &str, hint: Option<&str>) {
    if let Some(command) = hint {
        ctx.emit(Diagnostic::ConversionHint {
            path: path.to_owned(),
            command: command.to_owned(),
        });
    }
}
