//! Light sources.
//!
//! Lights are a closed set, so they are an enum rather than a trait object.
//! Point, spot and narrow spot lights share one falloff model
//! ([`Attenuation`]) and the two spot variants share one cone model
//! ([`Cone`]); a spot light is simply a cone with zero focus.

use crate::colour::Colour;
use crate::error::ConfigurationError;
use rey_math::{compare, NormalizedVector, Point3};

/// Constant ambient illumination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub colour: Colour,
}

impl AmbientLight {
    pub fn new(colour: Colour) -> Self {
        Self { colour }
    }
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self::new(Colour::BLACK)
    }
}

/// Distance falloff `1 / (constant + linear·d + quadratic·d²)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attenuation {
    pub constant: f64,
    pub linear: f64,
    pub quadratic: f64,
}

impl Attenuation {
    /// No falloff.
    pub const NONE: Self = Self {
        constant: 1.0,
        linear: 0.0,
        quadratic: 0.0,
    };

    pub fn new(constant: f64, linear: f64, quadratic: f64) -> Result<Self, ConfigurationError> {
        let negative = constant < 0.0 || linear < 0.0 || quadratic < 0.0;
        let all_zero =
            compare::is_zero(constant) && compare::is_zero(linear) && compare::is_zero(quadratic);
        if negative || all_zero {
            return Err(ConfigurationError::InvalidAttenuation);
        }
        Ok(Self {
            constant,
            linear,
            quadratic,
        })
    }

    /// The divisor applied to the light colour at `distance`.
    pub fn divisor(&self, distance: f64) -> f64 {
        self.constant + distance * (self.linear + distance * self.quadratic)
    }
}

impl Default for Attenuation {
    fn default() -> Self {
        Self::NONE
    }
}

/// Directional cone of a spot light.
///
/// The intensity factor is `(cos θ − focus) / (1 − focus)`, clamped at zero,
/// where θ is the angle between the cone axis and the direction to the lit
/// point. `focus = 0` is the plain cosine falloff; larger values narrow the
/// beam.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cone {
    pub direction: NormalizedVector,
    pub focus: f64,
}

impl Cone {
    pub fn factor(&self, to_point: NormalizedVector) -> f64 {
        let cos = self.direction.dot(to_point.get());
        ((cos - self.focus) / (1.0 - self.focus)).max(0.0)
    }
}

/// A light source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Uniform light with no direction.
    Ambient(AmbientLight),
    /// Parallel rays along `direction`, no falloff.
    Directional {
        colour: Colour,
        direction: NormalizedVector,
    },
    /// Omnidirectional light at `position`.
    Point {
        colour: Colour,
        position: Point3,
        attenuation: Attenuation,
    },
    /// Point light with cosine falloff around `cone.direction`.
    Spot {
        colour: Colour,
        position: Point3,
        attenuation: Attenuation,
        cone: Cone,
    },
    /// Spot light with a narrowed beam.
    NarrowSpot {
        colour: Colour,
        position: Point3,
        attenuation: Attenuation,
        cone: Cone,
    },
}

impl Light {
    pub fn ambient(colour: Colour) -> Self {
        Light::Ambient(AmbientLight::new(colour))
    }

    pub fn directional(colour: Colour, direction: NormalizedVector) -> Self {
        Light::Directional { colour, direction }
    }

    pub fn point(colour: Colour, position: Point3, attenuation: Attenuation) -> Self {
        Light::Point {
            colour,
            position,
            attenuation,
        }
    }

    pub fn spot(
        colour: Colour,
        position: Point3,
        direction: NormalizedVector,
        attenuation: Attenuation,
    ) -> Self {
        Light::Spot {
            colour,
            position,
            attenuation,
            cone: Cone {
                direction,
                focus: 0.0,
            },
        }
    }

    /// Spot light narrowed by `focus`, which must lie strictly in `(0, 1)`.
    pub fn narrow_spot(
        colour: Colour,
        position: Point3,
        direction: NormalizedVector,
        attenuation: Attenuation,
        focus: f64,
    ) -> Result<Self, ConfigurationError> {
        if !(compare::gt(focus, 0.0) && compare::lt(focus, 1.0)) {
            return Err(ConfigurationError::InvalidFocus(focus));
        }
        Ok(Light::NarrowSpot {
            colour,
            position,
            attenuation,
            cone: Cone { direction, focus },
        })
    }

    /// Intensity arriving at `point`, before shadowing.
    pub fn colour_at(&self, point: Point3) -> Colour {
        match *self {
            Light::Ambient(ambient) => ambient.colour,
            Light::Directional { colour, .. } => colour,
            Light::Point {
                colour,
                position,
                attenuation,
            } => colour.scale(1.0 / attenuation.divisor(position.distance(point))),
            Light::Spot {
                colour,
                position,
                attenuation,
                cone,
            }
            | Light::NarrowSpot {
                colour,
                position,
                attenuation,
                cone,
            } => match NormalizedVector::between(position, point) {
                Ok(to_point) => colour
                    .scale(cone.factor(to_point) / attenuation.divisor(position.distance(point))),
                Err(_) => Colour::BLACK,
            },
        }
    }

    /// Unit direction of travel from the light to `point`.
    ///
    /// `None` for ambient light, and for a positional light evaluated at its
    /// own position.
    pub fn vector_to(&self, point: Point3) -> Option<NormalizedVector> {
        match *self {
            Light::Ambient(_) => None,
            Light::Directional { direction, .. } => Some(direction),
            Light::Point { position, .. }
            | Light::Spot { position, .. }
            | Light::NarrowSpot { position, .. } => NormalizedVector::between(position, point).ok(),
        }
    }

    /// Squared distance a shadow ray from `point` has to travel to reach the
    /// light. Infinite for lights without a position.
    pub fn square_distance(&self, point: Point3) -> f64 {
        match *self {
            Light::Ambient(_) | Light::Directional { .. } => f64::INFINITY,
            Light::Point { position, .. }
            | Light::Spot { position, .. }
            | Light::NarrowSpot { position, .. } => position.distance_squared(point),
        }
    }
}

impl From<AmbientLight> for Light {
    fn from(ambient: AmbientLight) -> Self {
        Light::Ambient(ambient)
    }
}
