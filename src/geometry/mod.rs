pub mod plane;

pub use plane::{Plane, Side};
