//! Scene graph types.
//!
//! These types are format-agnostic and can be produced by any mesh loader
//! or built programmatically.
//!
//! - [`SceneNode`]: A shared node with a name, optional render state and children
//! - [`SharedNode`]: `Arc` handle used for attachment and identity

mod types;

pub use types::{SceneNode, SharedNode};
