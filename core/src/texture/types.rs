/// Pixel storage format of a [`CpuTexture`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    /// 8-bit single channel.
    R8Unorm,
    /// 8-bit RGBA, linear.
    Rgba8Unorm,
    /// 8-bit RGBA, sRGB encoded.
    Rgba8UnormSrgb,
}

impl TextureFormat {
    /// Bytes used by one texel.
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Self::R8Unorm => 1,
            Self::Rgba8Unorm | Self::Rgba8UnormSrgb => 4,
        }
    }
}

/// Decoded 2D image data.
#[derive(Debug, Clone, PartialEq)]
pub struct CpuTexture {
    /// Texture name, usually the source path.
    pub name: Option<String>,
    /// Width in texels.
    pub width: u32,
    /// Height in texels.
    pub height: u32,
    /// Pixel storage format.
    pub format: TextureFormat,
    /// Tightly packed rows of texels.
    pub data: Vec<u8>,
}

impl CpuTexture {
    /// Create a texture from already decoded pixel data.
    pub fn new(width: u32, height: u32, format: TextureFormat, data: Vec<u8>) -> Self {
        Self {
            name: None,
            width,
            height,
            format,
            data,
        }
    }

    /// Set the texture name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Number of texels.
    pub fn texel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether `data` holds exactly `width * height` texels.
    pub fn is_valid(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.data.len() == self.texel_count() * self.format.bytes_per_pixel()
    }
}
