//! Phong material description.

use crate::colour::{Colour, Factors};

/// Surface response to light.
///
/// Every coefficient is a [`Factors`] so materials can tint per channel; the
/// scalar form of the Phong model is the uniform special case built by
/// [`Material::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Light emitted by the surface regardless of lighting.
    pub emission: Colour,
    /// Phong specular exponent.
    pub shininess: f64,
    /// Response to ambient light.
    pub ambient: Factors,
    pub diffuse: Factors,
    pub specular: Factors,
    /// Fraction of the reflected ray's colour that is added.
    pub reflectivity: Factors,
    /// Fraction of light passing through; also the shadow attenuation this
    /// surface applies to rays crossing it.
    pub transparency: Factors,
}

impl Material {
    /// Opaque, non-reflective material with scalar diffuse and specular
    /// coefficients.
    pub fn new(shininess: f64, diffuse: f64, specular: f64) -> Self {
        Self {
            shininess,
            diffuse: Factors::uniform(diffuse),
            specular: Factors::uniform(specular),
            ..Self::default()
        }
    }

    pub fn with_emission(mut self, emission: Colour) -> Self {
        self.emission = emission;
        self
    }

    pub fn with_shininess(mut self, shininess: f64) -> Self {
        self.shininess = shininess;
        self
    }

    pub fn with_ambient(mut self, ambient: Factors) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn with_diffuse(mut self, diffuse: Factors) -> Self {
        self.diffuse = diffuse;
        self
    }

    pub fn with_specular(mut self, specular: Factors) -> Self {
        self.specular = specular;
        self
    }

    pub fn with_reflectivity(mut self, reflectivity: Factors) -> Self {
        self.reflectivity = reflectivity;
        self
    }

    pub fn with_transparency(mut self, transparency: Factors) -> Self {
        self.transparency = transparency;
        self
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            emission: Colour::BLACK,
            shininess: 1.0,
            ambient: Factors::ONE,
            diffuse: Factors::ZERO,
            specular: Factors::ZERO,
            reflectivity: Factors::ZERO,
            transparency: Factors::ZERO,
        }
    }
}
