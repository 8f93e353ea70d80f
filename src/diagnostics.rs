//! Structured diagnostics emitted while loading and styling a mesh node.
//!
//! Diagnostics are human-facing messages that do not change control flow.
//! They are delivered to a [`DiagnosticSink`]; the default [`LogSink`]
//! renders them through the `log` facade.

use std::fmt;

use parking_lot::Mutex;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A single diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A precompiled cache variant is used instead of the requested file.
    CacheHit { requested: String, resolved: String },
    /// A locale-sensitive format is loaded while the numeric locale uses a
    /// decimal separator other than `.`.
    LocaleMismatch { path: String, decimal_point: char },
    /// The mesh loader produced no usable node.
    LoadFailed { path: String, reason: String },
    /// No loader plugin handles the file.
    PluginMissing { path: String },
    /// Advisory conversion of a mesh into a cache variant.
    ConversionHint { path: String, command: String },
    /// A texture could not be applied.
    TextureLoadFailed { path: String, reason: String },
}

impl Diagnostic {
    /// Severity of the message.
    pub fn severity(&self) -> Severity {
        match self {
            Self::CacheHit { .. } | Self::ConversionHint { .. } => Severity::Info,
            Self::LocaleMismatch { .. } => Severity::Warning,
            Self::LoadFailed { .. }
            | Self::PluginMissing { .. }
            | Self::TextureLoadFailed { .. } => Severity::Error,
        }
    }

    /// The path the message refers to.
    pub fn path(&self) -> &str {
        match self {
            Self::CacheHit { requested, .. } => requested,
            Self::LocaleMismatch { path, .. }
            | Self::LoadFailed { path, .. }
            | Self::PluginMissing { path }
            | Self::ConversionHint { path, .. }
            | Self::TextureLoadFailed { path, .. } => path,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CacheHit { resolved, .. } => write!(f, "Using {resolved}"),
            Self::LocaleMismatch {
                path,
                decimal_point,
            } => write!(
                f,
                "Current numeric locale uses '{decimal_point}' as decimal point. \
                 Loading {path} may fail; set LC_NUMERIC to a locale using '.'"
            ),
            Self::LoadFailed { path, reason } => {
                write!(f, "File {path} could not be loaded: {reason}")
            }
            Self::PluginMissing { path } => write!(
                f,
                "File {path} found but could not be opened. Check that a plugin exists."
            ),
            Self::ConversionHint { path, command } => write!(
                f,
                "To avoid locale issues, convert {path} ahead of time: {command}"
            ),
            Self::TextureLoadFailed { path, reason } => {
                write!(f, "Could not load texture {path}: {reason}")
            }
        }
    }
}

/// Receiver of diagnostics.
pub trait DiagnosticSink: Send + Sync {
    /// Deliver one diagnostic.
    fn emit(&self, diagnostic: &Diagnostic);
}

/// Sink that forwards every diagnostic to the `log` facade under the
/// `meshleaf` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        match diagnostic.severity() {
            Severity::Info => log::info!(target: "meshleaf", "{diagnostic}"),
            Severity::Warning => log::warn!(target: "meshleaf", "{diagnostic}"),
            Severity::Error => log::error!(target: "meshleaf", "{diagnostic}"),
        }
    }
}

/// Sink that keeps every diagnostic in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything collected so far, oldest first.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().clone()
    }

    /// Number of collected diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.lock().is_empty()
    }

    /// Number of collected diagnostics with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .lock()
            .iter()
            .filter(|d| d.severity() == severity)
            .count()
    }

    /// Drop everything collected so far.
    pub fn clear(&self) {
        self.diagnostics.lock().clear();
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        self.diagnostics.lock().push(diagnostic.clone());
    }
}
