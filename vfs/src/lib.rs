//! Synchronous file access for meshleaf.
//!
//! Provides a small provider abstraction over "where asset bytes come from"
//! through the [`VfsProvider`] trait. Asset resolution only ever needs three
//! questions answered about a path: does it exist, can it be opened as a
//! stream, and what are its bytes.
//!
//! # Providers
//!
//! - [`FileSystemProvider`]: Native filesystem access (native only)
//! - [`MemoryProvider`]: In-memory storage for tests and embedded assets
//!
//! Custom providers can implement [`VfsProvider`] for packed archives or other
//! storage backends.
//!
//! # Paths
//!
//! Paths are plain strings and are passed to the provider untouched. The
//! [`path`] module offers the file-name helpers used during resolution
//! (lowercase extension, suffix appending).

mod error;
#[cfg(all(feature = "filesystem", not(target_arch = "wasm32")))]
mod filesystem;
mod memory;
pub mod path;
mod provider;

pub use error::{Unreadable, VfsError};
#[cfg(all(feature = "filesystem", not(target_arch = "wasm32")))]
pub use filesystem::FileSystemProvider;
pub use memory::MemoryProvider;
pub use provider::{VfsProvider, VfsReader};
