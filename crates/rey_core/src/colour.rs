//! Colour and per-channel factors.
//!
//! `Colour` is an unbounded additive RGB triple: shading sums contributions
//! freely and only the pixel sink clamps to the displayable range.
//! `Factors` are per-channel multipliers in `[0, 1]` used for material
//! coefficients and for the attenuation carried through recursion.

use glam::DVec3;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

/// Linear RGB colour, nominally in `[0, 1]` per channel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Colour(DVec3);

impl Colour {
    pub const BLACK: Self = Self(DVec3::ZERO);
    pub const WHITE: Self = Self(DVec3::ONE);

    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self(DVec3::new(r, g, b))
    }

    /// Build a colour from 8-bit channel values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    pub fn r(&self) -> f64 {
        self.0.x
    }

    pub fn g(&self) -> f64 {
        self.0.y
    }

    pub fn b(&self) -> f64 {
        self.0.z
    }

    pub fn scale(self, k: f64) -> Self {
        Self(self.0 * k)
    }

    /// Mean of the given colours; black when there are none.
    pub fn average<I: IntoIterator<Item = Colour>>(colours: I) -> Self {
        let (sum, count) = colours
            .into_iter()
            .fold((Colour::BLACK, 0usize), |(sum, n), c| (sum + c, n + 1));
        if count == 0 {
            Colour::BLACK
        } else {
            sum.scale(1.0 / count as f64)
        }
    }

    /// Clamp to `[0, 1]` and quantize to 8 bits per channel.
    pub fn to_rgb8(self) -> [u8; 3] {
        let quantize = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [quantize(self.0.x), quantize(self.0.y), quantize(self.0.z)]
    }

    /// Per-channel tolerance comparison.
    pub fn approx_eq(self, other: Colour) -> bool {
        rey_math::approx_eq(self.0, other.0)
    }
}

impl Add for Colour {
    type Output = Colour;

    fn add(self, rhs: Colour) -> Colour {
        Colour(self.0 + rhs.0)
    }
}

impl AddAssign for Colour {
    fn add_assign(&mut self, rhs: Colour) {
        self.0 += rhs.0;
    }
}

impl Mul<f64> for Colour {
    type Output = Colour;

    fn mul(self, k: f64) -> Colour {
        self.scale(k)
    }
}

impl Mul<Factors> for Colour {
    type Output = Colour;

    fn mul(self, k: Factors) -> Colour {
        Colour(self.0 * k.0)
    }
}

impl Sum for Colour {
    fn sum<I: Iterator<Item = Colour>>(iter: I) -> Colour {
        iter.fold(Colour::BLACK, Add::add)
    }
}

/// Per-channel multipliers clamped into `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Factors(DVec3);

impl Factors {
    pub const ZERO: Self = Self(DVec3::ZERO);
    pub const ONE: Self = Self(DVec3::ONE);

    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self(DVec3::new(r, g, b).clamp(DVec3::ZERO, DVec3::ONE))
    }

    /// The same factor on every channel.
    pub fn uniform(k: f64) -> Self {
        Self::new(k, k, k)
    }

    pub fn r(&self) -> f64 {
        self.0.x
    }

    pub fn g(&self) -> f64 {
        self.0.y
    }

    pub fn b(&self) -> f64 {
        self.0.z
    }

    /// True when every channel is strictly below `threshold`.
    pub fn all_below(&self, threshold: f64) -> bool {
        self.0.max_element() < threshold
    }

    pub fn is_zero(&self) -> bool {
        self.0 == DVec3::ZERO
    }
}

impl Default for Factors {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Mul for Factors {
    type Output = Factors;

    fn mul(self, rhs: Factors) -> Factors {
        Factors(self.0 * rhs.0)
    }
}
