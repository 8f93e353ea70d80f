//! Common utilities for mesh leaf integration tests.
//!
//! Provides an in-memory filesystem, a recording mesh loader and a
//! collecting diagnostic sink wired into one [`TestContext`].

#![allow(dead_code)]

use std::sync::Arc;

use meshleaf::{
    AssetContext, CollectingSink, FixedLocale, MeshLoader, ReadResult, ReaderOptions, Severity,
};
use meshleaf_core::scene::SceneNode;
use meshleaf_core::state::RenderState;
use meshleaf_vfs::MemoryProvider;
use parking_lot::Mutex;

// ============================================================================
// Loader Answers
// ============================================================================

/// What the recording loader answers to every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// A fresh node named after the file, with a render state.
    Mesh,
    /// A fresh node without a render state.
    BareMesh,
    /// A parse-error placeholder node.
    Placeholder,
    /// Nothing.
    Empty,
    /// No plugin for the format.
    NotHandled,
    /// A reader error.
    Error,
}

impl Answer {
    fn read(self, path: &str) -> ReadResult {
        match self {
            Self::Mesh => ReadResult::Node(Arc::new(
                SceneNode::new(path).with_render_state(RenderState::new()),
            )),
            Self::BareMesh => ReadResult::Node(SceneNode::shared(path)),
            Self::Placeholder => ReadResult::Node(SceneNode::shared("empty: could not parse")),
            Self::Empty => ReadResult::Empty,
            Self::NotHandled => ReadResult::FileNotHandled,
            Self::Error => ReadResult::Error("unexpected end of file".into()),
        }
    }
}

// ============================================================================
// Recording Loader
// ============================================================================

/// One invocation of the mesh loader.
#[derive(Debug, Clone, PartialEq)]
pub struct LoaderCall {
    pub path: String,
    pub options: Option<ReaderOptions>,
    /// Warnings already emitted when the loader ran.
    pub warnings_before: usize,
}

/// Mesh loader that records its calls and answers from a script.
pub struct RecordingLoader {
    answer: Mutex<Answer>,
    calls: Mutex<Vec<LoaderCall>>,
    sink: Arc<CollectingSink>,
}

impl RecordingLoader {
    pub fn new(answer: Answer, sink: Arc<CollectingSink>) -> Self {
        Self {
            answer: Mutex::new(answer),
            calls: Mutex::new(Vec::new()),
            sink,
        }
    }

    pub fn set_answer(&self, answer: Answer) {
        *self.answer.lock() = answer;
    }

    pub fn calls(&self) -> Vec<LoaderCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl MeshLoader for RecordingLoader {
    fn read_node(&self, path: &str, options: Option<&ReaderOptions>) -> ReadResult {
        self.calls.lock().push(LoaderCall {
            path: path.to_owned(),
            options: options.cloned(),
            warnings_before: self.sink.count(Severity::Warning),
        });
        let answer = *self.answer.lock();
        answer.read(path)
    }
}

// ============================================================================
// Test Context
// ============================================================================

/// Filesystem, loader and sink behind one shared [`AssetContext`].
pub struct TestContext {
    pub fs: MemoryProvider,
    pub sink: Arc<CollectingSink>,
    pub loader: Arc<RecordingLoader>,
    pub context: Arc<AssetContext>,
}

impl TestContext {
    /// Context with `files` present, a `.` decimal point and `answer` from the loader.
    pub fn new(files: &[&str], answer: Answer) -> Self {
        Self::with_locale(files, answer, '.')
    }

    pub fn with_locale(files: &[&str], answer: Answer, decimal_point: char) -> Self {
        let fs = MemoryProvider::new();
        for file in files {
            fs.insert(*file, Vec::new());
        }
        let sink = Arc::new(CollectingSink::new());
        let loader = Arc::new(RecordingLoader::new(answer, Arc::clone(&sink)));
        let context = AssetContext::new(Arc::new(fs.clone()), loader.clone())
            .with_locale(Arc::new(FixedLocale(decimal_point)))
            .with_diagnostics(sink.clone());

        Self {
            fs,
            sink,
            loader,
            context: Arc::new(context),
        }
    }

    pub fn context(&self) -> Arc<AssetContext> {
        Arc::clone(&self.context)
    }
}

// ============================================================================
// Images
// ============================================================================

/// Encode a solid-color PNG.
pub fn png_bytes(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba(rgba));
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageOutputFormat::Png)
        .expect("encode png");
    out.into_inner()
}
