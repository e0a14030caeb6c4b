pub mod error;
pub mod geometry;
pub mod math;

pub use error::{GeometryError, Result};
pub use geometry::{Plane, Side};
pub use math::{Vector2, Vector3};
