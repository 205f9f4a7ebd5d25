//! Error types raised while building scene objects.

use rey_math::DegenerateVectorError;
use thiserror::Error;

/// A primitive could not be constructed from the given parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidGeometryError {
    #[error("radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    #[error("height must be positive, got {0}")]
    NonPositiveHeight(f64),

    #[error("points are coincident or colinear and do not span a plane")]
    ColinearPoints,

    #[error("polygon repeats a vertex at position {0}")]
    RepeatedVertex(usize),

    #[error("polygon needs at least 3 significant vertices, got {0}")]
    TooFewVertices(usize),

    #[error("polygon is not convex and planar: exterior angles sum to {0} rad")]
    NotConvexPlanar(f64),

    #[error(transparent)]
    Degenerate(#[from] DegenerateVectorError),
}

/// Invalid camera, light or render setting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("camera front and up vectors must be perpendicular (dot product {0})")]
    NotPerpendicular(f64),

    #[error("invalid resolution '{0}', expected <columns>x<rows>")]
    InvalidResolution(String),

    #[error("view plane needs positive width {width}, height {height} and distance {distance}")]
    InvalidViewPlane {
        width: f64,
        height: f64,
        distance: f64,
    },

    #[error("anti-aliasing level must be at least 1, got {0}")]
    InvalidAntialiasing(u32),

    #[error("thread count must be at least 1, got {0}")]
    InvalidThreadCount(usize),

    #[error("minimum effect coefficient must be in [0, 1), got {0}")]
    InvalidMinEffect(f64),

    #[error("spotlight focus must be strictly between 0 and 1, got {0}")]
    InvalidFocus(f64),

    #[error("light attenuation coefficients must be non-negative and not all zero")]
    InvalidAttenuation,

    #[error(transparent)]
    Degenerate(#[from] DegenerateVectorError),
}

pub type GeometryResult<T> = Result<T, InvalidGeometryError>;
