use crate::compare;

/// Span of parameter values `[min, max]` along one axis.
///
/// `min > max` is the empty span; [`Interval::surrounding`] treats it as the
/// identity so boxes can be grown from [`Interval::EMPTY`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub const EMPTY: Interval = Interval {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn size(&self) -> f64 {
        self.max - self.min
    }

    /// Strictly inside, with the tolerance band at either end counting as
    /// outside.
    pub fn surrounds(&self, x: f64) -> bool {
        compare::gt(x, self.min) && compare::lt(x, self.max)
    }

    /// Widened by `delta` in total, half on each end.
    pub fn expand(&self, delta: f64) -> Interval {
        let half = 0.5 * delta;
        Interval::new(self.min - half, self.max + half)
    }

    /// Smallest span covering both.
    pub fn surrounding(a: &Interval, b: &Interval) -> Interval {
        Interval::new(a.min.min(b.min), a.max.max(b.max))
    }
}
