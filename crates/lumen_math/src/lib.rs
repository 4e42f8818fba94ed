// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod interval;
mod point;
mod ray;
mod vector;

pub use interval::Interval;
pub use point::Point3;
pub use ray::{Ray, MIN_DIRECTION_LENGTH_SQUARED};
pub use vector::{VectorExt, NORMALIZE_EPSILON, UNIT_TOLERANCE};
