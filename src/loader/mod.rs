//! Loader seams.
//!
//! Mesh parsing and image decoding are external collaborators reached through
//! the [`MeshLoader`] and [`ImageLoader`] traits.
//!
//! - [`PluginRegistry`]: a [`MeshLoader`] dispatching to [`ReaderPlugin`]s by extension
//! - [`ImageFileLoader`]: an [`ImageLoader`] decoding files with the `image` crate

mod image;
mod mesh;

pub use self::image::{ImageFileLoader, ImageLoader};
pub use self::mesh::{
    MeshLoader, PluginRegistry, ReadResult, ReaderOptions, ReaderPlugin, NO_ROTATION,
};
