/// Bounds on a scalar, used for hit distances and pixel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `x` lies in `[min, max)`.
    ///
    /// A candidate hit distance must be at or past the ray origin and
    /// strictly closer than the best hit so far.
    #[inline]
    pub fn admits(&self, x: f64) -> bool {
        x >= self.min && x < self.max
    }

    /// Pin `x` into `[min, max]`.
    #[inline]
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }
}
