//! Render state attached to scene nodes.
//!
//! - [`RenderState`]: Modes, material, texture units and rendering bin
//! - [`StateFlags`]: On/override/protected/inherit flags
//! - [`RenderMode`]: Toggleable fixed-function modes
//! - [`RenderBin`]: Opaque vs transparent draw ordering
//! - [`MaterialAttribute`] / [`TextureBinding`]: Flagged attribute slots

mod types;

pub use types::{
    MaterialAttribute, RenderBin, RenderMode, RenderState, StateFlags, TextureBinding,
};
