//! Shared scene graph node.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::state::RenderState;

/// Shared handle to a [`SceneNode`].
///
/// Child identity is pointer identity: the same node may be reachable from
/// several parents, and removal compares handles with [`Arc::ptr_eq`].
pub type SharedNode = Arc<SceneNode>;

/// A node in the scene graph.
///
/// Nodes are shared between the loader that produced them and every parent
/// they are attached to, so all state sits behind locks and every method takes
/// `&self`. A node has a declared name, an optional [`RenderState`], and an
/// ordered list of children.
#[derive(Debug, Default)]
pub struct SceneNode {
    name: RwLock<String>,
    render_state: RwLock<Option<RenderState>>,
    children: RwLock<Vec<SharedNode>>,
}

impl SceneNode {
    /// Creates a node with the given name, no render state and no children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: RwLock::new(name.into()),
            render_state: RwLock::new(None),
            children: RwLock::new(Vec::new()),
        }
    }

    /// Creates a node and wraps it in a [`SharedNode`].
    pub fn shared(name: impl Into<String>) -> SharedNode {
        Arc::new(Self::new(name))
    }

    /// Set the render state.
    #[must_use]
    pub fn with_render_state(self, state: RenderState) -> Self {
        *self.render_state.write() = Some(state);
        self
    }

    /// Set the child nodes.
    #[must_use]
    pub fn with_children(self, children: Vec<SharedNode>) -> Self {
        *self.children.write() = children;
        self
    }

    /// Declared node name.
    pub fn name(&self) -> String {
        self.name.read().clone()
    }

    /// Rename the node.
    pub fn set_name(&self, name: impl Into<String>) {
        *self.name.write() = name.into();
    }

    // -- Render state --

    /// Whether a render state is attached.
    pub fn has_render_state(&self) -> bool {
        self.render_state.read().is_some()
    }

    /// Run `f` against the render state, if one is attached.
    pub fn read_render_state<R>(&self, f: impl FnOnce(&RenderState) -> R) -> Option<R> {
        self.render_state.read().as_ref().map(f)
    }

    /// Run `f` against the render state mutably, if one is attached.
    ///
    /// Never creates a render state.
    pub fn update_render_state<R>(&self, f: impl FnOnce(&mut RenderState) -> R) -> Option<R> {
        self.render_state.write().as_mut().map(f)
    }

    /// Run `f` against the render state mutably, creating an empty one first
    /// if none is attached.
    pub fn update_or_create_render_state<R>(&self, f: impl FnOnce(&mut RenderState) -> R) -> R {
        let mut guard = self.render_state.write();
        f(guard.get_or_insert_with(RenderState::new))
    }

    /// Replace the render state, returning the previous one.
    pub fn set_render_state(&self, state: Option<RenderState>) -> Option<RenderState> {
        std::mem::replace(&mut *self.render_state.write(), state)
    }

    // -- Children --

    /// Append a child.
    pub fn add_child(&self, child: SharedNode) {
        self.children.write().push(child);
    }

    /// Remove the first occurrence of `child`, returning whether it was found.
    pub fn remove_child(&self, child: &SharedNode) -> bool {
        let mut children = self.children.write();
        match children.iter().position(|c| Arc::ptr_eq(c, child)) {
            Some(index) => {
                children.remove(index);
                true
            }
            None => false,
        }
    }

    /// Whether `child` is attached directly below this node.
    pub fn contains_child(&self, child: &SharedNode) -> bool {
        self.children.read().iter().any(|c| Arc::ptr_eq(c, child))
    }

    /// Number of direct children.
    pub fn num_children(&self) -> usize {
        self.children.read().len()
    }

    /// Child at `index`.
    pub fn child(&self, index: usize) -> Option<SharedNode> {
        self.children.read().get(index).cloned()
    }

    /// Snapshot of the direct children.
    pub fn children(&self) -> Vec<SharedNode> {
        self.children.read().clone()
    }
}
