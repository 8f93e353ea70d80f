//! Fixed-function material definitions.
//!
//! - [`Material`]: Per-face lighting colors plus transparency
//! - [`FaceColors`]: The colors of one face
//! - [`Face`]: Face selector for setters

mod types;

pub use types::{Face, FaceColors, Material};
