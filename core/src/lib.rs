//! # meshleaf core
//!
//! Scene graph collaborator types shared by mesh loaders and leaf nodes:
//! nodes, render state, materials, textures and node properties.

pub mod material;
pub mod property;
pub mod scene;
pub mod state;
pub mod texture;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the core library version.
pub fn init() {
    log::info!("meshleaf core v{} initialized", VERSION);
}
