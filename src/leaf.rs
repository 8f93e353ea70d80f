//! The mesh leaf node.

use std::fmt;
use std::sync::{Arc, Weak};

use meshleaf_core::material::Material;
use meshleaf_core::property::{PropertyRegistry, StringProperty};
use meshleaf_core::scene::{SceneNode, SharedNode};
use meshleaf_core::state::{RenderBin, RenderMode, StateFlags};
use parking_lot::RwLock;

use crate::appearance::{self, AppearanceState};
use crate::context::AssetContext;
use crate::diagnostics::Diagnostic;
use crate::error::LoadResult;
use crate::orchestrator::{self, trace_stage, LoadStage, LoadedAsset, MeshReference};

/// A scene-graph leaf wrapping a mesh loaded from a file.
///
/// The node owns a group [`SceneNode`] that stands for its position in the
/// scene graph. The loaded sub-tree is attached below the group during
/// construction and detached again when the last handle is dropped.
///
/// Construction is all-or-nothing: [`MeshLeafNode::create`] either returns a
/// ready node or an error, with nothing attached.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use meshleaf::{AssetContext, MeshLeafNode, MeshLoader, ReadResult, ReaderOptions};
/// use meshleaf_core::scene::SceneNode;
/// use meshleaf_vfs::MemoryProvider;
///
/// struct Cube;
///
/// impl MeshLoader for Cube {
///     fn read_node(&self, _path: &str, _options: Option<&ReaderOptions>) -> ReadResult {
///         ReadResult::Node(SceneNode::shared("cube"))
///     }
/// }
///
/// let fs = MemoryProvider::new();
/// fs.insert("cube.obj", Vec::new());
/// let context = Arc::new(AssetContext::new(Arc::new(fs), Arc::new(Cube)));
///
/// let node = MeshLeafNode::create("cube", "cube.obj", context).unwrap();
/// node.set_alpha(0.5);
/// assert_eq!(node.mesh_file_path(), "cube.obj");
/// assert_eq!(node.group().num_children(), 1);
/// ```
pub struct MeshLeafNode {
    name: String,
    group: SharedNode,
    asset: LoadedAsset,
    appearance: RwLock<AppearanceState>,
    properties: PropertyRegistry,
    context: Arc<AssetContext>,
    weak_self: Weak<MeshLeafNode>,
}

impl MeshLeafNode {
    /// Load `path` and build a node named `name`.
    pub fn create(
        name: impl Into<String>,
        path: &str,
        context: Arc<AssetContext>,
    ) -> LoadResult<Arc<Self>> {
        orchestrator::ensure_readable(&context, path)?;
        let asset = orchestrator::load(&context, path)?;
        Ok(Self::attach(name.into(), asset, context))
    }

    /// Load `path` and apply `color` to the loaded material.
    pub fn create_with_color(
        name: impl Into<String>,
        path: &str,
        color: [f32; 4],
        context: Arc<AssetContext>,
    ) -> LoadResult<Arc<Self>> {
        let node = Self::create(name, path, context)?;
        node.set_color(color);
        Ok(node)
    }

    fn attach(name: String, asset: LoadedAsset, context: Arc<AssetContext>) -> Arc<Self> {
        trace_stage(asset.reference.requested(), LoadStage::Attaching);

        let group = SceneNode::shared(name.clone());
        group.add_child(Arc::clone(&asset.node));
        asset.node.update_or_create_render_state(|state| {
            state.set_mode(RenderMode::Blend, StateFlags::ON);
        });

        let node = Arc::new_cyclic(|weak_self: &Weak<Self>| {
            let mut properties = PropertyRegistry::new();
            let accessor = Weak::clone(weak_self);
            properties.add(StringProperty::read_only(
                context.config().mesh_path_property.clone(),
                move || {
                    accessor
                        .upgrade()
                        .map(|node| node.mesh_file_path().to_owned())
                        .unwrap_or_default()
                },
            ));

            Self {
                name,
                group,
                asset,
                appearance: RwLock::new(AppearanceState::new()),
                properties,
                context,
                weak_self: Weak::clone(weak_self),
            }
        });

        trace_stage(node.mesh_file_path(), LoadStage::Ready);
        node
    }

    /// Build an independent node by loading the same file again.
    ///
    /// Appearance settings are not carried over.
    pub fn clone_node(&self) -> LoadResult<Arc<Self>> {
        Self::create(
            self.name.clone(),
            self.mesh_file_path(),
            Arc::clone(&self.context),
        )
    }

    /// A new shared handle to this node.
    ///
    /// `None` only while the last handle is being dropped.
    pub fn self_handle(&self) -> Option<Arc<Self>> {
        self.weak_self.upgrade()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path given at construction.
    pub fn mesh_file_path(&self) -> &str {
        self.asset.reference.requested()
    }

    /// Path actually loaded, possibly a cache variant.
    pub fn resolved_path(&self) -> &str {
        self.asset.reference.resolved()
    }

    /// Whether a cache variant was loaded.
    pub fn is_cached(&self) -> bool {
        self.asset.reference.is_cached()
    }

    pub fn reference(&self) -> &MeshReference {
        &self.asset.reference
    }

    /// The node standing for this leaf in the scene graph.
    pub fn group(&self) -> &SharedNode {
        &self.group
    }

    /// The sub-tree produced by the mesh loader.
    pub fn loaded_node(&self) -> &SharedNode {
        &self.asset.node
    }

    pub fn properties(&self) -> &PropertyRegistry {
        &self.properties
    }

    pub fn context(&self) -> &Arc<AssetContext> {
        &self.context
    }

    // -- Appearance --

    /// Replace the material with one derived from `color`.
    pub fn set_color(&self, color: [f32; 4]) {
        appearance::apply_color(&self.asset.node, &mut self.appearance.write(), color);
    }

    /// Set the material transparency and pick the rendering bin.
    pub fn set_alpha(&self, alpha: f32) {
        appearance::apply_alpha(&self.asset.node, &mut self.appearance.write(), alpha);
    }

    /// Load and bind a texture. Failures are reported as diagnostics and
    /// leave the current texture in place.
    pub fn set_texture(&self, path: &str) {
        let result = appearance::apply_texture(
            &self.asset.node,
            &mut self.appearance.write(),
            self.context.image_loader().as_ref(),
            path,
        );
        if let Err(err) = result {
            self.context.emit(Diagnostic::TextureLoadFailed {
                path: path.to_owned(),
                reason: err.to_string(),
            });
        }
    }

    pub fn color(&self) -> Option<[f32; 4]> {
        self.appearance.read().color()
    }

    pub fn alpha(&self) -> Option<f32> {
        self.appearance.read().alpha()
    }

    pub fn texture_file_path(&self) -> Option<String> {
        self.appearance.read().texture_path().map(str::to_owned)
    }

    /// Rendering bin of the loaded sub-tree.
    pub fn render_bin(&self) -> Option<RenderBin> {
        self.asset
            .node
            .read_render_state(|state| state.rendering_hint())
    }

    /// A copy of the loaded sub-tree's material.
    pub fn material(&self) -> Option<Material> {
        self.asset
            .node
            .read_render_state(|state| state.material().cloned())
            .flatten()
    }
}

impl Drop for MeshLeafNode {
    fn drop(&mut self) {
        if self.group.remove_child(&self.asset.node) {
            log::debug!("Detached {} from {}", self.mesh_file_path(), self.name);
        }
    }
}

impl fmt::Debug for MeshLeafNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MeshLeafNode")
            .field("name", &self.name)
            .field("reference", &self.asset.reference)
            .field("appearance", &*self.appearance.read())
            .finish_non_exhaustive()
    }
}
