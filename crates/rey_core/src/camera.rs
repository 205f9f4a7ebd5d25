//! Camera and view plane sampling.
//!
//! The camera sits at `location` looking along `front`, with `up` pointing to
//! the top of the image and `right = front × up`. The view plane is centred
//! `distance` units ahead and split into a `columns × rows` grid of pixels.
//! Pixel `(0, 0)` is the top-left one; pixel indices run row-major.

use crate::error::ConfigurationError;
use glam::{DMat3, DVec3};
use rey_math::{compare, NormalizedVector, Point3, Ray};
use std::fmt;
use std::str::FromStr;

/// Output image size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub columns: u32,
    pub rows: u32,
}

impl Resolution {
    pub fn new(columns: u32, rows: u32) -> Result<Self, ConfigurationError> {
        if columns == 0 || rows == 0 {
            return Err(ConfigurationError::InvalidResolution(format!(
                "{columns}x{rows}"
            )));
        }
        Ok(Self { columns, rows })
    }

    pub fn pixel_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            columns: 1920,
            rows: 1080,
        }
    }
}

/// Parses `"<columns>x<rows>"`, e.g. `"1920x1080"`.
impl FromStr for Resolution {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigurationError::InvalidResolution(s.to_string());
        let (columns, rows) = s.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
        let columns = columns.trim().parse().map_err(|_| invalid())?;
        let rows = rows.trim().parse().map_err(|_| invalid())?;
        Self::new(columns, rows).map_err(|_| invalid())
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}

/// An orthonormal camera frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    pub front: NormalizedVector,
    pub up: NormalizedVector,
    pub right: NormalizedVector,
}

impl Orientation {
    /// Build a frame from `front` and `up`, which must be perpendicular.
    pub fn new(front: DVec3, up: DVec3) -> Result<Self, ConfigurationError> {
        let front = NormalizedVector::new(front)?;
        let up = NormalizedVector::new(up)?;
        let dot = front.dot(up.get());
        if !compare::is_zero(dot) {
            return Err(ConfigurationError::NotPerpendicular(dot));
        }
        let right = front.cross(up)?.normalized();
        Ok(Self { front, up, right })
    }
}

/// Everything needed to build a [`Camera`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    pub location: Point3,
    pub front: DVec3,
    pub up: DVec3,
    /// View plane width in scene units.
    pub width: f64,
    /// View plane height in scene units.
    pub height: f64,
    /// Distance from the camera to the view plane.
    pub distance: f64,
    pub resolution: Resolution,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            location: DVec3::ZERO,
            front: DVec3::X,
            up: DVec3::Z,
            width: 19.2,
            height: 10.8,
            distance: 10.0,
            resolution: Resolution::default(),
        }
    }
}

impl CameraSettings {
    /// Set camera position.
    pub fn with_location(mut self, location: Point3) -> Self {
        self.location = location;
        self
    }

    /// Set viewing direction and image up direction.
    pub fn with_orientation(mut self, front: DVec3, up: DVec3) -> Self {
        self.front = front;
        self.up = up;
        self
    }

    /// Set view plane size.
    pub fn with_view_plane(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }
}

/// One image pixel and the primary rays sampling it.
#[derive(Debug, Clone, PartialEq)]
pub struct Pixel {
    pub row: u32,
    pub col: u32,
    pub rays: Vec<Ray>,
}

/// A pinhole camera with precomputed view plane steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    location: Point3,
    orientation: Orientation,
    width: f64,
    height: f64,
    distance: f64,
    resolution: Resolution,

    // Derived from the above
    pixel00_loc: Point3,
    pixel_delta_col: DVec3,
    pixel_delta_row: DVec3,
}

impl Camera {
    pub fn new(settings: CameraSettings) -> Result<Self, ConfigurationError> {
        let CameraSettings {
            location,
            front,
            up,
            width,
            height,
            distance,
            resolution,
        } = settings;

        if !(compare::gt(width, 0.0) && compare::gt(height, 0.0) && compare::gt(distance, 0.0)) {
            return Err(ConfigurationError::InvalidViewPlane {
                width,
                height,
                distance,
            });
        }
        let resolution = Resolution::new(resolution.columns, resolution.rows)?;
        let orientation = Orientation::new(front, up)?;

        let right = orientation.right.get();
        let up = orientation.up.get();
        let pixel_delta_col = right * (width / resolution.columns as f64);
        let pixel_delta_row = up * (-height / resolution.rows as f64);

        let center = location + orientation.front.get() * distance;
        let upper_left = center - right * (width / 2.0) + up * (height / 2.0);
        let pixel00_loc = upper_left + 0.5 * (pixel_delta_col + pixel_delta_row);

        Ok(Self {
            location,
            orientation,
            width,
            height,
            distance,
            resolution,
            pixel00_loc,
            pixel_delta_col,
            pixel_delta_row,
        })
    }

    pub fn location(&self) -> Point3 {
        self.location
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn pixel_count(&self) -> usize {
        self.resolution.pixel_count()
    }

    /// The settings this camera was built from.
    pub fn settings(&self) -> CameraSettings {
        CameraSettings {
            location: self.location,
            front: self.orientation.front.get(),
            up: self.orientation.up.get(),
            width: self.width,
            height: self.height,
            distance: self.distance,
            resolution: self.resolution,
        }
    }

    /// Centre of the pixel at `(row, col)` on the view plane.
    pub fn pixel_center(&self, row: u32, col: u32) -> Point3 {
        self.pixel00_loc + self.pixel_delta_col * col as f64 + self.pixel_delta_row * row as f64
    }

    /// Primary rays for the pixel at `(row, col)`.
    ///
    /// With `samples_per_side = n` the pixel is split into an `n × n` grid
    /// and one ray passes through the centre of each cell, row by row. `n = 1`
    /// (or 0) gives the single ray through the pixel centre.
    pub fn pixel(&self, row: u32, col: u32, samples_per_side: u32) -> Pixel {
        let n = samples_per_side.max(1);
        let center = self.pixel_center(row, col);
        let step_col = self.pixel_delta_col / n as f64;
        let step_row = self.pixel_delta_row / n as f64;
        let first = center - 0.5 * (self.pixel_delta_col + self.pixel_delta_row)
            + 0.5 * (step_col + step_row);

        let rays = (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .filter_map(|(i, j)| {
                let target = first + step_row * i as f64 + step_col * j as f64;
                Ray::through(self.location, target).ok()
            })
            .collect();

        Pixel { row, col, rays }
    }

    /// The pixel with row-major `index`, or `None` past the last pixel.
    pub fn pixel_at(&self, index: usize, samples_per_side: u32) -> Option<Pixel> {
        if index >= self.pixel_count() {
            return None;
        }
        let columns = self.resolution.columns as usize;
        let row = (index / columns) as u32;
        let col = (index % columns) as u32;
        Some(self.pixel(row, col, samples_per_side))
    }

    /// Every pixel in row-major order.
    pub fn pixels(&self, samples_per_side: u32) -> impl Iterator<Item = Pixel> + '_ {
        (0..self.pixel_count()).filter_map(move |i| self.pixel_at(i, samples_per_side))
    }

    /// The same camera moved by `offset`.
    pub fn shift(&self, offset: DVec3) -> Camera {
        Camera {
            location: self.location + offset,
            pixel00_loc: self.pixel00_loc + offset,
            ..self.clone()
        }
    }

    /// The same camera turned about its own location.
    ///
    /// Angles are in radians: `yaw` about Z, `pitch` about Y and `roll`
    /// about X, composed as `Rz(yaw) · Ry(pitch) · Rx(roll)` and applied to
    /// both `front` and `up`.
    pub fn rotate(&self, pitch: f64, yaw: f64, roll: f64) -> Result<Camera, ConfigurationError> {
        let rotation = DMat3::from_rotation_z(yaw)
            * DMat3::from_rotation_y(pitch)
            * DMat3::from_rotation_x(roll);
        let settings = self.settings();
        Camera::new(settings.with_orientation(rotation * settings.front, rotation * settings.up))
    }
}
