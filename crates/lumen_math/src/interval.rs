/// A closed range of ray parameters `[min, max]`.
///
/// Intersection queries take an interval and only accept roots that it
/// strictly surrounds, which is how the hit epsilon and the shrinking
/// closest-hit window are expressed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// An empty interval (min > max, contains nothing).
    pub const EMPTY: Interval = Interval {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
    };

    /// A universe interval (contains everything).
    pub const UNIVERSE: Interval = Interval {
        min: f32::NEG_INFINITY,
        max: f32::INFINITY,
    };

    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Everything strictly beyond `min`: `(min, +inf)`.
    pub fn forward(min: f32) -> Self {
        Self::new(min, f32::INFINITY)
    }

    /// The same lower bound with a new upper bound.
    ///
    /// Closest-hit traversal narrows the window this way after each accepted
    /// hit, so later primitives must be strictly closer to replace it.
    pub fn with_max(&self, max: f32) -> Self {
        Self::new(self.min, max)
    }

    /// Returns the size of the interval (max - min).
    pub fn size(&self) -> f32 {
        self.max - self.min
    }

    /// True if no value is strictly surrounded.
    pub fn is_empty(&self) -> bool {
        !(self.min < self.max)
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }
}
