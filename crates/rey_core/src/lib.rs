//! Rey Core - scene model for the rey ray tracer.
//!
//! This crate provides:
//!
//! - **Shading data**: `Colour`, `Factors`, `Material`
//! - **Geometry**: `Sphere`, `Plane`, `Triangle`, `Polygon`, `Tube`,
//!   `Cylinder` behind the `Geometry` trait, and the `Geometries` aggregate
//! - **Lights**: the closed `Light` enum
//! - **Camera**: view plane setup and pixel/sub-pixel ray generation
//! - **Scene**: everything a tracer needs, bundled
//!
//! # Example
//!
//! ```ignore
//! use rey_core::{Camera, CameraSettings, Colour, Light, Material, Scene, Sphere};
//! use rey_math::{DVec3, NormalizedVector};
//!
//! let camera = Camera::new(CameraSettings::default())?;
//! let mut scene = Scene::new("demo", camera);
//! scene.add_geometry(Sphere::new(Material::default(), DVec3::new(50.0, 0.0, 0.0), 5.0)?);
//! scene.add_light(Light::directional(Colour::WHITE, NormalizedVector::X));
//! ```

pub mod camera;
pub mod colour;
pub mod error;
pub mod geometry;
pub mod light;
pub mod material;
pub mod scene;

// Re-export commonly used types
pub use camera::{Camera, CameraSettings, Orientation, Pixel, Resolution};
pub use colour::{Colour, Factors};
pub use error::{ConfigurationError, InvalidGeometryError};
pub use geometry::{
    closest, Cylinder, Geometries, Geometry, Intersection, Plane, Polygon, Sphere, Triangle, Tube,
};
pub use light::{AmbientLight, Attenuation, Cone, Light};
pub use material::Material;
pub use scene::Scene;
