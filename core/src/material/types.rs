//! Fixed-function material data.
//!
//! A [`Material`] keeps one set of lighting colors per polygon face. Setters
//! take a [`Face`] selector so both faces can be written at once.

/// Which polygon faces a material operation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// Front-facing polygons only.
    Front,
    /// Back-facing polygons only.
    Back,
    /// Both faces.
    FrontAndBack,
}

/// Lighting colors for a single face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceColors {
    /// Ambient reflectance `[r, g, b, a]`.
    pub ambient: [f32; 4],
    /// Diffuse reflectance `[r, g, b, a]`.
    pub diffuse: [f32; 4],
    /// Specular reflectance `[r, g, b, a]`.
    pub specular: [f32; 4],
    /// Emitted color `[r, g, b, a]`.
    pub emission: [f32; 4],
    /// Specular exponent.
    pub shininess: f32,
    /// Transparency factor. Stored verbatim, not clamped.
    pub transparency: f32,
}

impl FaceColors {
    /// Default lighting colors for a freshly created material.
    pub const DEFAULT: Self = Self {
        ambient: [0.2, 0.2, 0.2, 1.0],
        diffuse: [0.8, 0.8, 0.8, 1.0],
        specular: [0.0, 0.0, 0.0, 1.0],
        emission: [0.0, 0.0, 0.0, 1.0],
        shininess: 0.0,
        transparency: 0.0,
    };
}

impl Default for FaceColors {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// CPU-side fixed-function material.
///
/// # Example
///
/// ```
/// use meshleaf_core::material::{Face, Material};
///
/// let mut mat = Material::new().with_name("red");
/// mat.set_diffuse(Face::FrontAndBack, [1.0, 0.0, 0.0, 1.0]);
/// mat.set_transparency(Face::FrontAndBack, 0.25);
///
/// assert_eq!(mat.diffuse(Face::Back), [1.0, 0.0, 0.0, 1.0]);
/// assert_eq!(mat.transparency(Face::Front), 0.25);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Material name.
    pub name: Option<String>,
    front: FaceColors,
    back: FaceColors,
}

impl Material {
    /// Creates a material with default colors on both faces.
    pub fn new() -> Self {
        Self {
            name: None,
            front: FaceColors::DEFAULT,
            back: FaceColors::DEFAULT,
        }
    }

    /// Set the material name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Colors of a face. [`Face::FrontAndBack`] reads the front face.
    pub fn face(&self, face: Face) -> &FaceColors {
        match face {
            Face::Front | Face::FrontAndBack => &self.front,
            Face::Back => &self.back,
        }
    }

    fn update(&mut self, face: Face, f: impl Fn(&mut FaceColors)) {
        match face {
            Face::Front => f(&mut self.front),
            Face::Back => f(&mut self.back),
            Face::FrontAndBack => {
                f(&mut self.front);
                f(&mut self.back);
            }
        }
    }

    /// Set the diffuse color.
    pub fn set_diffuse(&mut self, face: Face, color: [f32; 4]) {
        self.update(face, |c| c.diffuse = color);
    }

    /// Diffuse color of a face.
    pub fn diffuse(&self, face: Face) -> [f32; 4] {
        self.face(face).diffuse
    }

    /// Set the ambient color.
    pub fn set_ambient(&mut self, face: Face, color: [f32; 4]) {
        self.update(face, |c| c.ambient = color);
    }

    /// Ambient color of a face.
    pub fn ambient(&self, face: Face) -> [f32; 4] {
        self.face(face).ambient
    }

    /// Set the specular color.
    pub fn set_specular(&mut self, face: Face, color: [f32; 4]) {
        self.update(face, |c| c.specular = color);
    }

    /// Set the emission color.
    pub fn set_emission(&mut self, face: Face, color: [f32; 4]) {
        self.update(face, |c| c.emission = color);
    }

    /// Set the specular exponent.
    pub fn set_shininess(&mut self, face: Face, shininess: f32) {
        self.update(face, |c| c.shininess = shininess);
    }

    /// Set the transparency factor.
    pub fn set_transparency(&mut self, face: Face, transparency: f32) {
        self.update(face, |c| c.transparency = transparency);
    }

    /// Transparency factor of a face.
    pub fn transparency(&self, face: Face) -> f32 {
        self.face(face).transparency
    }

    /// Whether both faces carry identical colors.
    pub fn faces_match(&self) -> bool {
        self.front == self.back
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new()
    }
}
