//! Shading engines.
//!
//! [`PhongTracer`] is the Whitted-style recursive tracer: Phong local
//! lighting with transparency-aware shadows, plus reflected and transmitted
//! rays while the recursion depth and the accumulated attenuation allow.

use rey_core::{closest, Colour, ConfigurationError, Factors, Intersection, Light, Scene};
use rey_math::{compare, LineSegment, NormalizedVector, Point3, Ray};

/// Bounds on recursive tracing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceLimits {
    /// Secondary bounces allowed below the primary ray.
    pub max_recursion: u32,
    /// Contributions whose accumulated attenuation is below this in every
    /// channel are skipped.
    pub min_effect: f64,
}

impl Default for TraceLimits {
    fn default() -> Self {
        Self {
            max_recursion: 4,
            min_effect: 0.01,
        }
    }
}

impl TraceLimits {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !(0.0..1.0).contains(&self.min_effect) {
            return Err(ConfigurationError::InvalidMinEffect(self.min_effect));
        }
        Ok(())
    }
}

/// Maps rays to colours. Implementations are shared by all render workers.
pub trait RayTracer: Sync {
    fn trace(&self, ray: &Ray, limits: &TraceLimits) -> Colour;

    /// Average of the colours seen along `rays` (black for none).
    fn trace_pixel(&self, rays: &[Ray], limits: &TraceLimits) -> Colour {
        Colour::average(rays.iter().map(|ray| self.trace(ray, limits)))
    }
}

/// Flat preview: ambient colour wherever something is hit.
#[derive(Debug, Clone, Copy)]
pub struct AmbientTracer<'s> {
    scene: &'s Scene,
}

impl<'s> AmbientTracer<'s> {
    pub fn new(scene: &'s Scene) -> Self {
        Self { scene }
    }
}

impl RayTracer for AmbientTracer<'_> {
    fn trace(&self, ray: &Ray, _limits: &TraceLimits) -> Colour {
        if self.scene.geometries.intersect(&ray.segment()).is_empty() {
            self.scene.background
        } else {
            self.scene.ambient.colour
        }
    }
}

/// Recursive Phong shading.
#[derive(Debug, Clone, Copy)]
pub struct PhongTracer<'s> {
    scene: &'s Scene,
}

impl<'s> PhongTracer<'s> {
    pub fn new(scene: &'s Scene) -> Self {
        Self { scene }
    }

    /// Colour seen along `ray` with `depth` bounces left.
    ///
    /// `attenuation` is the product of every reflectivity/transparency factor
    /// on the path so far; branches whose attenuation drops below
    /// `min_effect` in every channel are not followed.
    pub fn trace_recursive(
        &self,
        ray: &Ray,
        depth: u32,
        attenuation: Factors,
        min_effect: f64,
    ) -> Colour {
        let hits = self.scene.geometries.intersect(&ray.segment());
        let Some(hit) = closest(ray.source, hits) else {
            return self.scene.background;
        };

        let normal = match hit.normal() {
            Ok(normal) => normal,
            Err(err) => {
                log::trace!("No normal at {:?} ({}), using emission only", hit.point, err);
                return hit.material().emission;
            }
        };

        let mut colour = self.local_colour(ray, &hit, normal, min_effect);
        if depth > 0 {
            colour += self.global_colour(ray, &hit, normal, depth, attenuation, min_effect);
        }
        colour
    }

    /// Emission, ambient term and the Phong contribution of every light that
    /// reaches the point from the viewer's side of the surface.
    fn local_colour(
        &self,
        ray: &Ray,
        hit: &Intersection<'_>,
        normal: NormalizedVector,
        min_effect: f64,
    ) -> Colour {
        let material = hit.material();
        let mut colour = material.emission + self.scene.ambient.colour * material.ambient;

        let view = ray.direction.get();
        let nv = normal.dot(view);
        if compare::is_zero(nv) {
            return colour;
        }

        for light in &self.scene.lights {
            if let Light::Ambient(ambient) = light {
                colour += ambient.colour * material.ambient;
                continue;
            }
            let Some(to_point) = light.vector_to(hit.point) else {
                continue;
            };
            let nl = normal.dot(to_point.get());
            // Light and viewer must be on the same side of the surface.
            if compare::is_zero(nl) || (nl > 0.0) != (nv > 0.0) {
                continue;
            }

            let transparency = self.transparency(light, to_point, hit.point, min_effect);
            if negligible(transparency, min_effect) {
                continue;
            }

            let intensity = light.colour_at(hit.point) * transparency;
            let reflected = to_point.get() - normal.get() * (2.0 * nl);
            let highlight = (-reflected.dot(view)).max(0.0).powf(material.shininess);

            colour += intensity * material.diffuse * nl.abs();
            colour += intensity * material.specular * highlight;
        }
        colour
    }

    /// How much of `light` reaches `point`: the product of the transparency
    /// of everything between them. Effectively opaque blockers short-circuit
    /// to zero.
    fn transparency(
        &self,
        light: &Light,
        to_point: NormalizedVector,
        point: Point3,
        min_effect: f64,
    ) -> Factors {
        let shadow_ray = LineSegment::new(point, -to_point, light.square_distance(point));

        let mut transparency = Factors::ONE;
        for blocker in self.scene.geometries.intersect(&shadow_ray) {
            transparency = transparency * blocker.material().transparency;
            if negligible(transparency, min_effect) {
                return Factors::ZERO;
            }
        }
        transparency
    }

    /// Reflected and transmitted contributions. Transmission continues in the
    /// incoming direction (no refraction bending).
    fn global_colour(
        &self,
        ray: &Ray,
        hit: &Intersection<'_>,
        normal: NormalizedVector,
        depth: u32,
        attenuation: Factors,
        min_effect: f64,
    ) -> Colour {
        let material = hit.material();
        let mut colour = Colour::BLACK;

        let reflectivity = material.reflectivity;
        let reflected_attenuation = attenuation * reflectivity;
        if !negligible(reflected_attenuation, min_effect) {
            let direction = ray.direction.reflect(normal).unwrap_or(ray.direction);
            let reflected = Ray::new(hit.point, direction);
            colour += self.trace_recursive(&reflected, depth - 1, reflected_attenuation, min_effect)
                * reflectivity;
        }

        let transparency = material.transparency;
        let transmitted_attenuation = attenuation * transparency;
        if !negligible(transmitted_attenuation, min_effect) {
            let transmitted = Ray::new(hit.point, ray.direction);
            colour +=
                self.trace_recursive(&transmitted, depth - 1, transmitted_attenuation, min_effect)
                    * transparency;
        }

        colour
    }
}

/// A branch contributes nothing visible: every channel is below the
/// threshold, or exactly zero when the threshold is zero.
fn negligible(factors: Factors, min_effect: f64) -> bool {
    factors.is_zero() || factors.all_below(min_effect)
}

impl RayTracer for PhongTracer<'_> {
    fn trace(&self, ray: &Ray, limits: &TraceLimits) -> Colour {
        self.trace_recursive(ray, limits.max_recursion, Factors::ONE, limits.min_effect)
    }
}
