//! Image loader seam and the default decoder.

use std::sync::Arc;

use meshleaf_core::texture::{CpuTexture, TextureFormat};
use meshleaf_vfs::{path::file_name, VfsProvider};

use crate::error::TextureLoadError;

/// External image loader.
pub trait ImageLoader: Send + Sync {
    /// Load the image at `path` as a texture.
    fn load_image(&self, path: &str) -> Result<Arc<CpuTexture>, TextureLoadError>;
}

/// Decodes PNG, JPEG and BMP files read through a [`VfsProvider`] into RGBA8
/// textures.
pub struct ImageFileLoader {
    fs: Arc<dyn VfsProvider>,
}

impl ImageFileLoader {
    pub fn new(fs: Arc<dyn VfsProvider>) -> Self {
        Self { fs }
    }

    /// Decode an in-memory image.
    pub fn decode(path: &str, bytes: &[u8]) -> Result<CpuTexture, TextureLoadError> {
        let img = image::load_from_memory(bytes).map_err(|source| TextureLoadError::Decode {
            path: path.to_owned(),
            source,
        })?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        if width == 0 || height == 0 {
            return Err(TextureLoadError::Empty {
                path: path.to_owned(),
            });
        }

        Ok(
            CpuTexture::new(width, height, TextureFormat::Rgba8Unorm, rgba.into_raw())
                .with_name(file_name(path)),
        )
    }
}

impl ImageLoader for ImageFileLoader {
    fn load_image(&self, path: &str) -> Result<Arc<CpuTexture>, TextureLoadError> {
        if !self.fs.exists(path) {
            return Err(TextureLoadError::NotFound {
                path: path.to_owned(),
            });
        }
        let bytes = self.fs.read(path).map_err(|source| TextureLoadError::Io {
            path: path.to_owned(),
            source,
        })?;
        let texture = Self::decode(path, &bytes)?;
        log::debug!(
            "Loaded texture {path} ({}x{})",
            texture.width,
            texture.height
        );
        Ok(Arc::new(texture))
    }
}
