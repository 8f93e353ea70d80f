//! Post-load appearance edits on a loaded mesh sub-tree.
//!
//! The node keeps the values the caller set in an [`AppearanceState`]; the
//! functions here push them into the sub-tree's [`RenderState`]. Color and
//! alpha can be set in either order: a color replaces the whole material and
//! re-applies the last alpha, an alpha edits the transparency of whatever
//! material is present.
//!
//! [`RenderState`]: meshleaf_core::state::RenderState

use meshleaf_core::material::{Face, Material};
use meshleaf_core::scene::SceneNode;
use meshleaf_core::state::{RenderBin, StateFlags};

use crate::error::TextureLoadError;
use crate::loader::ImageLoader;

/// Texture unit textures are bound to.
pub const TEXTURE_UNIT: u32 = 0;

/// Factor applied to the RGB channels of a color to derive the ambient color.
pub const AMBIENT_SCALE: f32 = 0.5;

/// Appearance values last set on a node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppearanceState {
    color: Option<[f32; 4]>,
    alpha: Option<f32>,
    texture_path: Option<String>,
}

impl AppearanceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last color set.
    pub fn color(&self) -> Option<[f32; 4]> {
        self.color
    }

    /// Last alpha set.
    pub fn alpha(&self) -> Option<f32> {
        self.alpha
    }

    /// Path of the texture currently bound.
    pub fn texture_path(&self) -> Option<&str> {
        self.texture_path.as_deref()
    }
}

/// Rendering bin for an alpha value: exactly zero is opaque, anything else
/// (including out-of-range values) is transparent.
pub fn bin_for_alpha(alpha: f32) -> RenderBin {
    if alpha == 0.0 {
        RenderBin::Default
    } else {
        RenderBin::Transparent
    }
}

/// Material for a color: diffuse `color`, ambient at half intensity with the
/// alpha channel kept, on both faces.
pub fn color_material(color: [f32; 4], alpha: Option<f32>) -> Material {
    let [r, g, b, a] = color;
    let mut material = Material::new();
    material.set_diffuse(Face::FrontAndBack, color);
    material.set_ambient(
        Face::FrontAndBack,
        [r * AMBIENT_SCALE, g * AMBIENT_SCALE, b * AMBIENT_SCALE, a],
    );
    if let Some(alpha) = alpha {
        material.set_transparency(Face::FrontAndBack, alpha);
    }
    material
}

/// Replace the sub-tree material with one derived from `color`.
pub fn apply_color(node: &SceneNode, state: &mut AppearanceState, color: [f32; 4]) {
    let material = color_material(color, state.alpha);
    node.update_or_create_render_state(|render_state| {
        render_state.set_material(material, StateFlags::ON);
    });
    state.color = Some(color);
}

/// Set the transparency of the sub-tree material and pick the bin.
///
/// Creates an override material if none is present. Does nothing and returns
/// `false` when the sub-tree has no render state.
pub fn apply_alpha(node: &SceneNode, state: &mut AppearanceState, alpha: f32) -> bool {
    let applied = node
        .update_render_state(|render_state| {
            if render_state.material().is_none() {
                render_state.set_material(Material::new(), StateFlags::OVERRIDE);
            }
            if let Some(material) = render_state.material_mut() {
                material.set_transparency(Face::FrontAndBack, alpha);
            }
            render_state.set_rendering_hint(bin_for_alpha(alpha));
        })
        .is_some();

    if applied {
        state.alpha = Some(alpha);
    } else {
        log::debug!("Ignoring alpha {alpha} on {}: no render state", node.name());
    }
    applied
}

/// Load `path` and bind it on [`TEXTURE_UNIT`].
///
/// On error the sub-tree and `state` are left unchanged.
pub fn apply_texture(
    node: &SceneNode,
    state: &mut AppearanceState,
    loader: &dyn ImageLoader,
    path: &str,
) -> Result<(), TextureLoadError> {
    let texture = loader.load_image(path)?;
    node.update_or_create_render_state(|render_state| {
        render_state.set_texture(TEXTURE_UNIT, texture, StateFlags::ON);
    });
    state.texture_path = Some(path.to_owned());
    Ok(())
}
