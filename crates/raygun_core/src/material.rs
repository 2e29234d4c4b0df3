//! Surface materials for Whitted shading.

use raygun_math::Color;

/// A Phong-style material with mirror reflection and refraction.
///
/// Primitives refer to materials by their index in the scene's material
/// list, so one material can be shared by any number of primitives.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    /// Base surface color, tints diffuse light
    pub color: Color,

    /// Diffuse coefficient
    pub diffuse: f64,

    /// Specular highlight coefficient
    pub specular: f64,

    /// Specular exponent (higher = tighter highlight)
    pub shininess: f64,

    /// Fraction of light carried by the mirror-reflected ray
    pub reflection: f64,

    /// Fraction of light carried by the refracted ray; also how much light
    /// the surface lets through when it casts a shadow
    pub transmission: f64,

    /// Index of refraction
    pub ior: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            diffuse: 1.0,
            specular: 0.0,
            shininess: 0.0,
            reflection: 0.0,
            transmission: 0.0,
            ior: 1.0,
        }
    }
}

impl Material {
    /// Create a material from its color and all six coefficients.
    pub fn new(
        color: Color,
        diffuse: f64,
        specular: f64,
        shininess: f64,
        reflection: f64,
        transmission: f64,
        ior: f64,
    ) -> Self {
        Self {
            color,
            diffuse,
            specular,
            shininess,
            reflection,
            transmission,
            ior,
        }
    }

    /// Create a purely diffuse material.
    pub fn diffuse(color: Color, diffuse: f64) -> Self {
        Self {
            color,
            diffuse,
            ..Default::default()
        }
    }

    /// Set the specular highlight.
    pub fn with_specular(mut self, specular: f64, shininess: f64) -> Self {
        self.specular = specular;
        self.shininess = shininess;
        self
    }

    /// Set the mirror reflection coefficient.
    pub fn with_reflection(mut self, reflection: f64) -> Self {
        self.reflection = reflection;
        self
    }

    /// Set transmission and index of refraction.
    pub fn with_transmission(mut self, transmission: f64, ior: f64) -> Self {
        self.transmission = transmission;
        self.ior = ior;
        self
    }

    /// Whether the material spawns a reflected ray.
    pub fn is_reflective(&self) -> bool {
        self.reflection > 0.0
    }

    /// Whether the material spawns a refracted ray.
    pub fn is_transparent(&self) -> bool {
        self.transmission > 0.0
    }
}
