//! Scene container.

use crate::camera::Camera;
use crate::colour::Colour;
use crate::geometry::{Geometries, Geometry};
use crate::light::{AmbientLight, Light};

/// A complete scene: what to look at, how it is lit and where from.
///
/// Built once and then only read, so one scene can be shared by every
/// render worker.
#[derive(Debug)]
pub struct Scene {
    /// Scene name (for logging)
    pub name: String,

    /// Colour of rays that hit nothing
    pub background: Colour,

    pub ambient: AmbientLight,

    pub geometries: Geometries,

    pub lights: Vec<Light>,

    pub camera: Camera,
}

impl Scene {
    /// Create an empty scene with a black background and no ambient light.
    pub fn new(name: impl Into<String>, camera: Camera) -> Self {
        Self {
            name: name.into(),
            background: Colour::BLACK,
            ambient: AmbientLight::default(),
            geometries: Geometries::new(),
            lights: Vec::new(),
            camera,
        }
    }

    pub fn with_background(mut self, background: Colour) -> Self {
        self.background = background;
        self
    }

    pub fn with_ambient(mut self, ambient: AmbientLight) -> Self {
        self.ambient = ambient;
        self
    }

    /// Add a geometry to the scene.
    pub fn add_geometry(&mut self, geometry: impl Geometry + 'static) {
        log::debug!("Scene '{}': adding {:?}", self.name, geometry);
        self.geometries.add(geometry);
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: Light) {
        log::debug!("Scene '{}': adding {:?}", self.name, light);
        self.lights.push(light);
    }

    /// Get geometry count.
    pub fn geometry_count(&self) -> usize {
        self.geometries.len()
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraSettings;
    use crate::geometry::Sphere;
    use crate::light::Attenuation;
    use crate::material::Material;
    use rey_math::DVec3;

    #[test]
    fn test_scene_construction() {
        let camera = Camera::new(CameraSettings::default()).unwrap();
        let mut scene = Scene::new("spheres", camera)
            .with_background(Colour::new(0.1, 0.1, 0.2))
            .with_ambient(AmbientLight::new(Colour::new(0.05, 0.05, 0.05)));

        scene.add_geometry(
            Sphere::new(Material::new(10.0, 0.5, 0.5), DVec3::new(50.0, 0.0, 0.0), 5.0).unwrap(),
        );
        scene.add_light(Light::point(Colour::WHITE, DVec3::new(0.0, 0.0, 20.0), Attenuation::NONE));

        assert_eq!(scene.name, "spheres");
        assert_eq!(scene.geometry_count(), 1);
        assert_eq!(scene.light_count(), 1);
        assert_eq!(scene.background, Colour::new(0.1, 0.1, 0.2));
        assert_eq!(scene.ambient.colour, Colour::new(0.05, 0.05, 0.05));
    }
}
