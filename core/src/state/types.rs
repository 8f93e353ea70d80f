//! Render state data types.

use std::collections::BTreeMap;
use std::sync::Arc;

use bitflags::bitflags;

use crate::material::Material;
use crate::texture::CpuTexture;

bitflags! {
    /// How a mode or attribute participates in state inheritance.
    ///
    /// An empty set means "off".
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StateFlags: u32 {
        /// The mode or attribute is enabled.
        const ON = 1 << 0;
        /// Overrides the same mode or attribute on descendant nodes.
        const OVERRIDE = 1 << 1;
        /// Cannot be overridden from an ancestor's `OVERRIDE`.
        const PROTECTED = 1 << 2;
        /// Inherit the value from the parent instead of using this one.
        const INHERIT = 1 << 3;
    }
}

impl Default for StateFlags {
    fn default() -> Self {
        Self::ON
    }
}

/// Fixed-function modes that can be toggled on a [`RenderState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RenderMode {
    /// Color blending.
    Blend,
    /// Depth testing.
    DepthTest,
    /// Back-face culling.
    CullFace,
    /// Fixed-function lighting.
    Lighting,
}

/// Draw-order classification of a sub-tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderBin {
    /// Default bin, drawn with opaque geometry.
    #[default]
    Default,
    /// Transparent bin, drawn back-to-front after opaque geometry.
    Transparent,
}

/// A material together with its inheritance flags.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialAttribute {
    /// The material values.
    pub material: Material,
    /// Inheritance flags.
    pub flags: StateFlags,
}

/// A texture bound to a texture unit.
#[derive(Debug, Clone)]
pub struct TextureBinding {
    /// The bound image data.
    pub texture: Arc<CpuTexture>,
    /// Inheritance flags; `ON` enables texturing on the unit.
    pub flags: StateFlags,
}

impl TextureBinding {
    /// Whether texturing is enabled on the unit.
    pub fn is_enabled(&self) -> bool {
        self.flags.contains(StateFlags::ON)
    }
}

/// Shading attributes for a sub-tree: modes, material, texture units and
/// the rendering bin.
///
/// # Example
///
/// ```
/// use meshleaf_core::material::Material;
/// use meshleaf_core::state::{RenderBin, RenderMode, RenderState, StateFlags};
///
/// let mut state = RenderState::new();
/// state.set_mode(RenderMode::Blend, StateFlags::ON);
/// state.set_material(Material::new(), StateFlags::OVERRIDE);
/// state.set_rendering_hint(RenderBin::Transparent);
///
/// assert!(state.is_enabled(RenderMode::Blend));
/// assert!(state.material().is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    modes: BTreeMap<RenderMode, StateFlags>,
    material: Option<MaterialAttribute>,
    texture_units: BTreeMap<u32, TextureBinding>,
    bin: RenderBin,
}

impl RenderState {
    /// Creates an empty render state in the default bin.
    pub fn new() -> Self {
        Self::default()
    }

    // -- Modes --

    /// Set a mode's flags.
    pub fn set_mode(&mut self, mode: RenderMode, flags: StateFlags) {
        self.modes.insert(mode, flags);
    }

    /// Flags of a mode, if it has been set.
    pub fn mode(&self, mode: RenderMode) -> Option<StateFlags> {
        self.modes.get(&mode).copied()
    }

    /// Whether a mode is set and switched on.
    pub fn is_enabled(&self, mode: RenderMode) -> bool {
        self.mode(mode)
            .is_some_and(|flags| flags.contains(StateFlags::ON))
    }

    // -- Material --

    /// Replace the material attribute, returning the previous one.
    pub fn set_material(
        &mut self,
        material: Material,
        flags: StateFlags,
    ) -> Option<MaterialAttribute> {
        self.material.replace(MaterialAttribute { material, flags })
    }

    /// The material attribute, if one is set.
    pub fn material_attribute(&self) -> Option<&MaterialAttribute> {
        self.material.as_ref()
    }

    /// The material, if one is set.
    pub fn material(&self) -> Option<&Material> {
        self.material.as_ref().map(|attr| &attr.material)
    }

    /// Mutable access to the material, if one is set.
    pub fn material_mut(&mut self) -> Option<&mut Material> {
        self.material.as_mut().map(|attr| &mut attr.material)
    }

    /// Remove the material attribute.
    pub fn remove_material(&mut self) -> Option<MaterialAttribute> {
        self.material.take()
    }

    // -- Textures --

    /// Bind a texture on a unit, returning the previous binding.
    pub fn set_texture(
        &mut self,
        unit: u32,
        texture: Arc<CpuTexture>,
        flags: StateFlags,
    ) -> Option<TextureBinding> {
        self.texture_units
            .insert(unit, TextureBinding { texture, flags })
    }

    /// The binding on a texture unit.
    pub fn texture(&self, unit: u32) -> Option<&TextureBinding> {
        self.texture_units.get(&unit)
    }

    /// Remove the binding on a texture unit.
    pub fn remove_texture(&mut self, unit: u32) -> Option<TextureBinding> {
        self.texture_units.remove(&unit)
    }

    /// Number of bound texture units.
    pub fn texture_unit_count(&self) -> usize {
        self.texture_units.len()
    }

    // -- Bin --

    /// Route the sub-tree into a rendering bin.
    pub fn set_rendering_hint(&mut self, bin: RenderBin) {
        self.bin = bin;
    }

    /// Current rendering bin.
    pub fn rendering_hint(&self) -> RenderBin {
        self.bin
    }
}
